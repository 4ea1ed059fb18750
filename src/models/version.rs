//! post revisions
use serde::{Deserialize, Serialize};

/// A past revision of a post's tags, rating, parent, source and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostVersion {
    /// Unique identifier for the revision.
    pub id: i64,
    /// ID of the revised post.
    pub post_id: i64,
    /// Space separated tags as of this revision.
    pub tags: String,
    /// ID of the user who made the change.
    pub updater_id: i64,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Rating as of this revision.
    pub rating: String,
    /// Parent post as of this revision.
    pub parent_id: Option<i64>,
    /// Newline separated sources as of this revision.
    pub source: String,
    /// Description as of this revision.
    pub description: String,
    /// Edit reason.
    pub reason: Option<String>,
    /// Locked tags as of this revision.
    pub locked_tags: Option<String>,
    /// Tags added by this revision.
    pub added_tags: Vec<String>,
    /// Tags removed by this revision.
    pub removed_tags: Vec<String>,
    /// Locked tags added by this revision.
    pub added_locked_tags: Vec<String>,
    /// Locked tags removed by this revision.
    pub removed_locked_tags: Vec<String>,
    /// Whether the rating changed.
    pub rating_changed: bool,
    /// Whether the parent changed.
    pub parent_changed: bool,
    /// Whether the sources changed.
    pub source_changed: bool,
    /// Whether the description changed.
    pub description_changed: bool,
    /// Revision number of the post.
    pub version: i64,
    /// Added tags that were later removed.
    pub obsolete_added_tags: String,
    /// Removed tags that were later added back.
    pub obsolete_removed_tags: String,
    /// Tags left untouched.
    pub unchanged_tags: String,
    /// Name of the user who made the change.
    pub updater_name: String,
}
