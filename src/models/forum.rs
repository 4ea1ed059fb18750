//! forum topics, forum posts and blips
use serde::{Deserialize, Serialize};

/// A forum topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumTopic {
    /// Unique identifier for the topic.
    pub id: i64,
    /// ID of the user who created it.
    pub creator_id: i64,
    /// ID of the user who made the change.
    pub updater_id: i64,
    /// Topic title.
    pub title: String,
    /// Number of replies.
    pub response_count: i64,
    /// Whether the topic is pinned.
    pub is_sticky: bool,
    /// Whether it is locked against edits.
    pub is_locked: bool,
    /// Whether it is hidden.
    pub is_hidden: bool,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// ID of the forum category.
    pub category_id: i64,
    /// Minimum user level needed to see the topic.
    pub min_level: i64,
}

/// A post in a forum topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    /// Unique identifier for the forum post.
    pub id: i64,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Message text (dtext).
    pub body: String,
    /// ID of the user who created it.
    pub creator_id: i64,
    /// ID of the user who made the change.
    pub updater_id: i64,
    /// ID of the topic the post is in.
    pub topic_id: i64,
    /// Whether it is hidden.
    pub is_hidden: bool,
    /// Moderator warning attached to the post; its shape isn't fixed.
    #[serde(default)]
    pub warning_type: serde_json::Value,
    /// ID of the moderator who attached the warning.
    pub warning_user_id: Option<i64>,
}

/// A blip (short status message).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blip {
    /// Unique identifier for the blip.
    pub id: i64,
    /// ID of the user who created it.
    pub creator_id: i64,
    /// Message text (dtext).
    pub body: String,
    /// The blip this one replies to.
    pub response_to: Option<i64>,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// ISO 8601 timestamp of the last update.
    pub updated_at: Option<String>,
    /// Whether it is hidden.
    pub is_hidden: bool,
    /// Moderator warning attached to the blip; its shape isn't fixed.
    #[serde(default)]
    pub warning_type: serde_json::Value,
    /// ID of the moderator who attached the warning.
    pub warning_user_id: Option<i64>,
    /// Name of the user who created it.
    pub creator_name: String,
}
