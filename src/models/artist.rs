//! artists
use serde::{Deserialize, Serialize};

/// A url belonging to an artist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistUrl {
    /// Unique identifier for the url.
    pub id: i64,
    /// ID of the artist entry.
    pub artist_id: i64,
    /// The url as entered.
    pub url: String,
    /// The url normalized for matching.
    pub normalized_url: String,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Whether the url is still live.
    pub is_active: bool,
}

/// An artist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Unique identifier for the artist.
    pub id: i64,
    /// Artist name.
    pub name: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Whether it is active.
    pub is_active: bool,
    /// Alternative names.
    pub other_names: Vec<String>,
    /// Name of the group the artist belongs to.
    pub group_name: String,
    /// ID of the user account linked to the artist.
    pub linked_user_id: Option<i64>,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ID of the user who created the entry.
    pub creator_id: i64,
    /// Whether it is locked against edits.
    pub is_locked: bool,
    /// Notes about the artist (dtext).
    pub notes: Option<String>,
    /// Known urls of the artist.
    pub urls: Vec<ArtistUrl>,
}

/// A past revision of an artist entry. Urls are plain strings here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistVersion {
    /// Unique identifier for the revision.
    pub id: i64,
    /// ID of the artist entry.
    pub artist_id: i64,
    /// Artist name.
    pub name: String,
    /// ID of the user who made the change.
    pub updater_id: i64,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Whether it is active.
    pub is_active: bool,
    /// Alternative names.
    pub other_names: Vec<String>,
    /// Name of the group the artist belongs to.
    pub group_name: String,
    /// Whether the artist is banned.
    pub is_banned: bool,
    /// Whether this revision changed the notes.
    pub notes_changed: bool,
    /// Urls as of this revision.
    pub urls: Vec<String>,
}
