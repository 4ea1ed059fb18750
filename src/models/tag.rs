//! tags and the relations between them
use serde::{Deserialize, Serialize};

/// A tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier for the tag.
    pub id: i64,
    /// The tag name.
    pub name: String,
    /// Number of posts that have this tag.
    pub post_count: i64,
    /// Space separated related tags with weights.
    pub related_tags: String,
    /// When the related tags were last computed.
    pub related_tags_updated_at: Option<String>,
    /// Category ID (0=general, 1=artist, 3=copyright, 4=character, 5=species, ...).
    pub category: i64,
    /// Whether the category is locked.
    pub is_locked: bool,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 update timestamp.
    pub updated_at: Option<String>,
}

/// A tag alias, renaming one tag to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagAlias {
    /// Unique identifier for the alias.
    pub id: i64,
    /// The tag being aliased away.
    pub antecedent_name: String,
    /// Why the alias exists.
    pub reason: String,
    /// Who requested it.
    pub creator_id: i64,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// The forum post discussing it.
    pub forum_post_id: Option<i64>,
    /// ISO 8601 update timestamp.
    pub updated_at: Option<String>,
    /// The forum topic discussing it.
    pub forum_topic_id: Option<i64>,
    /// The tag the antecedent is aliased to.
    pub consequent_name: String,
    /// Status ("active", "pending", ...).
    pub status: String,
    /// Number of affected posts.
    pub post_count: i64,
    /// Who approved it.
    pub approver_id: Option<i64>,
}

/// A tag implication, adding one tag whenever another is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagImplication {
    /// Unique identifier for the implication.
    pub id: i64,
    /// Why the implication exists.
    pub reason: String,
    /// Who requested it.
    pub creator_id: i64,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// The forum post discussing it.
    pub forum_post_id: i64,
    /// The implying tag.
    pub antecedent_name: String,
    /// The implied tag.
    pub consequent_name: String,
    /// Status ("active", "pending", ...).
    pub status: String,
    /// The forum topic discussing it.
    pub forum_topic_id: i64,
    /// ISO 8601 update timestamp.
    pub updated_at: Option<String>,
    /// Every tag implied transitively.
    pub descendant_names: Vec<String>,
    /// Who approved it.
    pub approver_id: Option<i64>,
}

/// A change of a tag's category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagTypeVersion {
    /// Unique identifier.
    pub id: i64,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 update timestamp.
    pub updated_at: Option<String>,
    /// Previous category.
    pub old_type: i64,
    /// New category.
    pub new_type: i64,
    /// Whether the category was locked.
    pub is_locked: bool,
    /// The affected tag.
    pub tag_id: i64,
    /// Who made the change.
    pub creator_id: i64,
}

#[cfg(test)]
mod tests {
    use {super::*, crate::schema, serde_json::json};

    #[test]
    fn test_implication_descendants() {
        let imp: TagImplication = schema::from_value(json!({
            "id": 1,
            "reason": "",
            "creator_id": 2,
            "created_at": "2020-01-01",
            "forum_post_id": 3,
            "antecedent_name": "wolf",
            "consequent_name": "canine",
            "status": "active",
            "forum_topic_id": 4,
            "updated_at": null,
            "descendant_names": ["canine", "mammal"],
            "approver_id": null
        }))
        .unwrap();

        assert_eq!(imp.descendant_names, vec!["canine", "mammal"]);
    }

    #[test]
    fn test_tag_optional_timestamps() {
        let tag: Tag = schema::from_value(json!({
            "id": 1,
            "name": "wolf",
            "post_count": 100,
            "related_tags": "wolf 300",
            "category": 5,
            "is_locked": false,
            "created_at": "2020-01-01"
        }))
        .unwrap();

        assert_eq!(tag.related_tags_updated_at, None);
        assert_eq!(tag.updated_at, None);
    }
}
