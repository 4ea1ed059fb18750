//! flags, approvals, takedowns, feedback and bulk update requests
use serde::{Deserialize, Serialize};

/// A flag raised on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostFlag {
    /// Unique identifier.
    pub id: i64,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ID of the flagged post.
    pub post_id: i64,
    /// Why the flag was raised.
    pub reason: String,
    /// Whether the flag was handled.
    pub is_resolved: bool,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Whether the flag requests deletion.
    pub is_deletion: bool,
    /// Flag category.
    pub category: String,
    /// Only visible to moderators.
    pub creator_id: Option<i64>,
}

/// An approval of a pending post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostApproval {
    /// Unique identifier.
    pub id: i64,
    /// ID of the approving user.
    pub user_id: i64,
    /// ID of the approved post.
    pub post_id: i64,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
}

/// A takedown request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Takedown {
    /// Unique identifier.
    pub id: i64,
    /// Processing status ("pending", "approved", "denied", ...).
    pub status: String,
    /// ID of the approving moderator.
    pub approver_id: Option<i64>,
    /// Whether the reason is hidden from the public.
    pub reason_hidden: bool,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Number of posts taken down.
    pub post_count: i64,
}

/// A staff record about a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFeedback {
    /// Unique identifier.
    pub id: i64,
    /// ID of the user the feedback is about.
    pub user_id: i64,
    /// ID of the user who created it.
    pub creator_id: i64,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// Feedback text (dtext).
    pub body: String,
    /// "positive", "neutral" or "negative".
    pub category: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
}

/// A bulk update request (batch of alias/implication changes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkUpdateRequest {
    /// Unique identifier.
    pub id: i64,
    /// ID of the requesting user.
    pub user_id: i64,
    /// ID of the forum topic discussing the request.
    pub forum_topic_id: i64,
    /// The requested changes, one per line.
    pub script: String,
    /// Processing status ("pending", "approved", "rejected").
    pub status: String,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// ID of the approving moderator.
    pub approver_id: Option<i64>,
    /// ID of the forum post holding the request.
    pub forum_post_id: Option<i64>,
    /// Request title.
    pub title: String,
}
