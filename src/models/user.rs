//! users and the logged in account
use {
    crate::{blacklist::Blacklist, memo::Memo},
    serde::{Deserialize, Serialize},
    std::ops::Deref,
};

/// A user as seen by everyone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,
    /// ISO 8601 timestamp of when the account was created.
    pub created_at: String,
    /// The username.
    pub name: String,
    /// Numeric user level.
    pub level: i64,
    /// Base upload limit.
    pub base_upload_limit: i64,
    /// Number of posts uploaded.
    pub post_upload_count: i64,
    /// Number of post edits.
    pub post_update_count: i64,
    /// Number of note edits.
    pub note_update_count: i64,
    /// Whether the user is banned.
    pub is_banned: bool,
    /// Whether the user can approve posts.
    pub can_approve_posts: bool,
    /// Whether the user can upload without limits.
    pub can_upload_free: bool,
    /// Human readable user level ("Member", "Privileged", ...).
    pub level_string: String,
    /// Post id used as avatar.
    pub avatar_id: Option<i64>,
}

/// The logged in user, with account settings on top of the public profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// The public profile.
    #[serde(flatten)]
    pub user: User,
    /// Number of wiki page edits.
    pub wiki_page_version_count: i64,
    /// Number of artist edits.
    pub artist_version_count: i64,
    /// Number of pool edits.
    pub pool_version_count: i64,
    /// Number of forum posts.
    pub forum_post_count: i64,
    /// Number of comments.
    pub comment_count: i64,
    /// Number of post flags.
    pub flag_count: i64,
    /// Positive feedback received.
    pub positive_feedback_count: i64,
    /// Neutral feedback received.
    pub neutral_feedback_count: i64,
    /// Negative feedback received.
    pub negative_feedback_count: i64,
    /// Current upload limit.
    pub upload_limit: i64,
    /// Show avatars.
    pub show_avatars: bool,
    /// Apply the blacklist to avatars.
    pub blacklist_avatars: bool,
    /// Apply the blacklist to users.
    pub blacklist_users: bool,
    /// Collapse descriptions by default.
    pub description_collapsed_initially: bool,
    /// Hide comments.
    pub hide_comments: bool,
    /// Show hidden comments.
    pub show_hidden_comments: bool,
    /// Show post statistics.
    pub show_post_statistics: bool,
    /// Has unread mail.
    pub has_mail: bool,
    /// Receive email notifications.
    pub receive_email_notifications: bool,
    /// Keyboard navigation.
    pub enable_keyboard_navigation: bool,
    /// Privacy mode.
    pub enable_privacy_mode: bool,
    /// Styled usernames.
    pub style_usernames: bool,
    /// Tag autocomplete.
    pub enable_auto_complete: bool,
    /// Has saved searches.
    pub has_saved_searches: bool,
    /// Disable cropped thumbnails.
    pub disable_cropped_thumbnails: bool,
    /// Disable mobile gestures.
    pub disable_mobile_gestures: bool,
    /// Safe mode.
    pub enable_safe_mode: bool,
    /// Disable responsive mode.
    pub disable_responsive_mode: bool,
    /// Disable post tooltips.
    pub disable_post_tooltips: bool,
    /// Flagging disabled.
    pub no_flagging: bool,
    /// Feedback disabled.
    pub no_feedback: bool,
    /// Dmails disabled.
    pub disable_user_dmails: bool,
    /// Compact uploader.
    pub enable_compact_uploader: bool,
    /// Replacements beta.
    pub replacements_beta: bool,
    /// ISO 8601 timestamp of the last account update.
    pub updated_at: String,
    /// Account email.
    pub email: String,
    /// ISO 8601 timestamp of the last login.
    pub last_logged_in_at: String,
    /// ISO 8601 timestamp of the last forum read.
    pub last_forum_read_at: String,
    /// Recently used tags.
    pub recent_tags: String,
    /// Comment score threshold.
    pub comment_threshold: i64,
    /// Default image size ("large", "original").
    pub default_image_size: String,
    /// Favorite tags, space separated.
    pub favorite_tags: String,
    /// Blacklisted tags, one entry per line.
    pub blacklisted_tags: String,
    /// Time zone name.
    pub time_zone: String,
    /// Posts per page.
    pub per_page: i64,
    /// Custom CSS.
    pub custom_style: String,
    /// Number of favorites.
    pub favorite_count: i64,
    /// Api regeneration multiplier.
    pub api_regen_multiplier: i64,
    /// Api burst limit.
    pub api_burst_limit: i64,
    /// Remaining api calls.
    pub remaining_api_limit: i64,
    /// Statement timeout.
    pub statement_timeout: i64,
    /// Maximum number of favorites.
    pub favorite_limit: i64,
    /// Maximum number of tags per query.
    pub tag_query_limit: i64,

    /// parsed blacklist
    #[serde(skip)]
    blacklist: Memo<Blacklist>,
}

impl AuthenticatedUser {
    /// the account blacklist, one entry per line of `blacklisted_tags`
    pub fn blacklist(&self) -> &Blacklist {
        self.blacklist
            .get_or_init(|| Blacklist::from_lines(&self.blacklisted_tags))
    }
}

impl Deref for AuthenticatedUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::schema, serde_json::json};

    fn user() -> serde_json::Value {
        json!({
            "id": 1,
            "created_at": "2020-01-01",
            "name": "someone",
            "level": 20,
            "base_upload_limit": 10,
            "post_upload_count": 0,
            "post_update_count": 0,
            "note_update_count": 0,
            "is_banned": false,
            "can_approve_posts": false,
            "can_upload_free": false,
            "level_string": "Member",
            "avatar_id": null
        })
    }

    fn account(blacklisted: &str) -> serde_json::Value {
        let mut value = user();
        let obj = value.as_object_mut().unwrap();

        for key in [
            "wiki_page_version_count",
            "artist_version_count",
            "pool_version_count",
            "forum_post_count",
            "comment_count",
            "flag_count",
            "positive_feedback_count",
            "neutral_feedback_count",
            "negative_feedback_count",
            "upload_limit",
            "comment_threshold",
            "per_page",
            "favorite_count",
            "api_regen_multiplier",
            "api_burst_limit",
            "remaining_api_limit",
            "statement_timeout",
            "favorite_limit",
            "tag_query_limit",
        ] {
            obj.insert(key.to_string(), json!(1));
        }

        for key in [
            "show_avatars",
            "blacklist_avatars",
            "blacklist_users",
            "description_collapsed_initially",
            "hide_comments",
            "show_hidden_comments",
            "show_post_statistics",
            "has_mail",
            "receive_email_notifications",
            "enable_keyboard_navigation",
            "enable_privacy_mode",
            "style_usernames",
            "enable_auto_complete",
            "has_saved_searches",
            "disable_cropped_thumbnails",
            "disable_mobile_gestures",
            "enable_safe_mode",
            "disable_responsive_mode",
            "disable_post_tooltips",
            "no_flagging",
            "no_feedback",
            "disable_user_dmails",
            "enable_compact_uploader",
            "replacements_beta",
        ] {
            obj.insert(key.to_string(), json!(false));
        }

        for key in [
            "updated_at",
            "email",
            "last_logged_in_at",
            "last_forum_read_at",
            "recent_tags",
            "default_image_size",
            "favorite_tags",
            "time_zone",
            "custom_style",
        ] {
            obj.insert(key.to_string(), json!(""));
        }

        obj.insert("blacklisted_tags".to_string(), json!(blacklisted));
        value
    }

    #[test]
    fn test_user() {
        let user: User = schema::from_value(user()).unwrap();
        assert_eq!(user.level_string, "Member");
        assert_eq!(user.avatar_id, None);
    }

    #[test]
    fn test_authenticated_user_blacklist() {
        let me: AuthenticatedUser = schema::from_value(account("gore\nmale feral")).unwrap();
        let tags = ["male", "feral", "solo"]
            .into_iter()
            .map(str::to_owned)
            .collect();

        assert_eq!(me.name, "someone");
        assert_eq!(me.blacklist().len(), 2);
        assert!(me.blacklist().intersects(&tags));
        assert!(std::ptr::eq(me.blacklist(), me.blacklist()));
    }

    #[test]
    fn test_authenticated_user_requires_settings() {
        let mut value = account("");
        value.as_object_mut().unwrap().remove("per_page");

        let err = schema::from_value::<AuthenticatedUser>(value).unwrap_err();
        assert!(err.to_string().contains("per_page"), "{}", err);
    }
}
