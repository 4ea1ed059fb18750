//! post notes
use serde::{Deserialize, Serialize};

/// A note (translation/annotation box) on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for the note.
    pub id: i64,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// ID of the user who created it.
    pub creator_id: i64,
    /// Horizontal offset in pixels.
    pub x: i64,
    /// Vertical offset in pixels.
    pub y: i64,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    /// Revision number.
    pub version: i64,
    /// Whether it is active.
    pub is_active: bool,
    /// ID of the post it belongs to.
    pub post_id: i64,
    /// The note text (dtext).
    pub body: String,
    /// Name of the user who created it.
    pub creator_name: String,
}

/// A past revision of a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteVersion {
    /// Unique identifier for the revision.
    pub id: i64,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Horizontal offset in pixels.
    pub x: i64,
    /// Vertical offset in pixels.
    pub y: i64,
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    /// The note text (dtext).
    pub body: String,
    /// Revision number.
    pub version: i64,
    /// Whether it is active.
    pub is_active: bool,
    /// ID of the note this revision belongs to.
    pub note_id: i64,
    /// ID of the post it belongs to.
    pub post_id: i64,
    /// ID of the user who made the change.
    pub updater_id: i64,
}
