//! wiki pages
use serde::{Deserialize, Serialize};

/// A wiki page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiPage {
    /// Unique identifier for the page.
    pub id: i64,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Page title, usually a tag name.
    pub title: String,
    /// Page content (dtext).
    pub body: String,
    /// ID of the user who created it.
    pub creator_id: i64,
    /// Whether it is locked against edits.
    pub is_locked: bool,
    /// ID of the user who made the change.
    pub updater_id: i64,
    /// Whether it is deleted.
    pub is_deleted: bool,
    /// Alternative names for the page's subject.
    pub other_names: Vec<String>,
    /// Name of the user who created it.
    pub creator_name: String,
    /// Tag category of the page subject.
    pub category_name: i64,
}

/// A past revision of a wiki page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiPageVersion {
    /// Unique identifier for the revision.
    pub id: i64,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Page title, usually a tag name.
    pub title: String,
    /// Text content (dtext).
    pub body: String,
    /// ID of the user who made the change.
    pub updater_id: i64,
    /// ID of the page this revision belongs to.
    pub wiki_page_id: i64,
    /// Whether it is locked against edits.
    pub is_locked: bool,
    /// Alternative names.
    pub other_names: Vec<String>,
    /// Whether it is deleted.
    pub is_deleted: bool,
    /// Edit reason.
    pub reason: Option<String>,
}
