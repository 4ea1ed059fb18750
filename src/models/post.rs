//! posts and everything hanging off of them
use {
    crate::{blacklist::Blacklist, memo::Memo, models::TagSet},
    serde::{Deserialize, Deserializer, Serialize, Serializer},
};

/// Response from the api containing multiple posts, typically from a search or listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posts {
    /// List of posts returned by the API.
    pub posts: Vec<Post>,
}

/// Response from the api containing a single post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    /// The post object returned by the API.
    pub post: Post,
}

/// A post with all of its metadata.
///
/// Tags arrive either as a structured [`Tags`] group or as flat `tag_string_*` fields, and the
/// file either as an explicit [`File`] or only as bare urls. [`Post::all_tags`] and
/// [`Post::file`] resolve both into one canonical view, computed on first access and memoized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier for the post.
    pub id: i64,
    /// ISO 8601 timestamp of when the post was created.
    pub created_at: String,
    /// ISO 8601 timestamp of when the post was last updated.
    pub updated_at: Option<String>,
    /// The explicit file descriptor, sent on the wire as `file`.
    #[serde(rename = "file")]
    pub file_obj: Option<File>,
    /// The explicit file descriptor under its field name, only read when `file` is missing.
    #[serde(rename = "file_obj", skip_serializing_if = "Option::is_none")]
    file_obj_fallback: Option<File>,
    /// Direct url of the original file (flat representation).
    pub file_url: Option<String>,
    /// Url of the large version of the file (flat representation).
    pub large_file_url: Option<String>,
    /// Url of the preview image (flat representation).
    pub preview_file_url: Option<String>,
    /// File extension, possibly with a leading dot (flat representation).
    pub file_ext: Option<String>,
    /// File size in bytes (flat representation).
    pub file_size: Option<i64>,
    /// Information about the preview/thumbnail image.
    pub preview: Option<Preview>,
    /// Information about the sample/resized version.
    pub sample: Option<Sample>,
    /// Vote score, in whichever shape the server sent it.
    #[serde(default)]
    pub score: Score,
    /// Categorized tags associated with the post.
    pub tags: Option<Tags>,
    /// Tags that are locked and cannot be removed from the post.
    pub locked_tags: Option<Vec<String>>,
    /// Space separated general tags (flat representation).
    pub tag_string_general: Option<String>,
    /// Space separated character tags (flat representation).
    pub tag_string_character: Option<String>,
    /// Space separated copyright tags (flat representation).
    pub tag_string_copyright: Option<String>,
    /// Space separated artist tags (flat representation).
    pub tag_string_artist: Option<String>,
    /// Space separated meta tags (flat representation).
    pub tag_string_meta: Option<String>,
    /// Sequence number indicating the revision of the post.
    pub change_seq: Option<i64>,
    /// Various status flags for the post (pending, flagged, deleted, etc.).
    pub flags: Option<Flags>,
    /// Content rating: "s" (safe), "q" (questionable), or "e" (explicit).
    pub rating: String,
    /// Number of users who have favorited this post.
    pub fav_count: Option<i64>,
    /// List of source URLs where the content originated from.
    pub sources: Option<Vec<String>>,
    /// IDs of pools that this post belongs to.
    pub pools: Option<Vec<i64>>,
    /// Parent/child relationship data for post hierarchies.
    pub relationships: Option<Relationships>,
    /// ID of the user who approved the post (if applicable).
    pub approver_id: Option<i64>,
    /// ID of the user who uploaded the post.
    pub uploader_id: i64,
    /// Description or commentary for the post.
    pub description: Option<String>,
    /// Number of comments on the post.
    pub comment_count: Option<i64>,
    /// Whether the currently authenticated user has favorited this post.
    pub is_favorited: Option<bool>,
    /// Whether the post has annotations/notes.
    pub has_notes: Option<bool>,
    /// Duration in seconds for video/audio posts.
    pub duration: Option<f64>,

    /// memoized canonical tag set
    #[serde(skip)]
    all_tags: Memo<TagSet>,
    /// memoized canonical file descriptor
    #[serde(skip)]
    file: Memo<Option<File>>,
}

/// Metadata about the original uploaded file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct File {
    /// Width of the original file in pixels.
    pub width: Option<i64>,
    /// Height of the original file in pixels.
    pub height: Option<i64>,
    /// File extension (e.g., "jpg", "png", "webm").
    pub ext: String,
    /// File size in bytes.
    pub size: Option<i64>,
    /// MD5 hash of the file.
    pub md5: Option<String>,
    /// Direct URL to the file (null if it requires higher privileges).
    pub url: Option<String>,
}

/// Metadata about the preview/thumbnail image.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Preview {
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
    /// Direct URL to the preview image.
    pub url: Option<String>,
}

/// Metadata about the sample/resized version of the post.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Sample {
    /// Whether a sample version is available.
    pub has: bool,
    /// Height in pixels.
    pub height: i64,
    /// Width in pixels.
    pub width: i64,
    /// Direct URL to the sample image.
    pub url: Option<String>,
    /// Alternate versions and qualities (mostly for videos).
    pub alternates: Alternates,
}

/// Alternate renditions of a post. The sized ones use resolution names on the wire.
///
/// `720p`/`480p` are read first; `field_720p`/`field_480p` are only used when those are missing.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "WireAlternates")]
pub struct Alternates {
    /// The 720p rendition.
    #[serde(rename = "720p")]
    pub field_720p: Option<Rendition>,
    /// The 480p rendition.
    #[serde(rename = "480p")]
    pub field_480p: Option<Rendition>,
    /// The original rendition.
    pub original: Option<Rendition>,
}

/// every key an [`Alternates`] object may carry
#[derive(Deserialize)]
struct WireAlternates {
    /// resolution named 720p
    #[serde(rename = "720p")]
    p720: Option<Rendition>,
    /// field named 720p
    field_720p: Option<Rendition>,
    /// resolution named 480p
    #[serde(rename = "480p")]
    p480: Option<Rendition>,
    /// field named 480p
    field_480p: Option<Rendition>,
    /// original
    original: Option<Rendition>,
}

impl From<WireAlternates> for Alternates {
    fn from(wire: WireAlternates) -> Self {
        Self {
            field_720p: wire.p720.or(wire.field_720p),
            field_480p: wire.p480.or(wire.field_480p),
            original: wire.original,
        }
    }
}

/// A single alternate rendition of a video post.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Rendition {
    /// Rendition type (e.g. "video").
    #[serde(rename = "type")]
    pub kind: String,
    /// Height in pixels.
    pub height: i64,
    /// Width in pixels.
    pub width: i64,
    /// Urls per container format; entries may be null.
    pub urls: Vec<Option<String>>,
}

/// Vote score of a post.
///
/// Current api versions send an object with up/down/total counts, some older payloads send a
/// bare string and some none at all. Each shape stays its own variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Score {
    /// up/down/total counts
    Structured {
        /// Number of upvotes.
        up: i64,
        /// Number of downvotes.
        down: i64,
        /// Total score.
        total: i64,
    },
    /// a score sent as a plain string
    Legacy(String),
    /// no score at all
    #[default]
    Absent,
}

/// the shapes a score can arrive in
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WireScore {
    /// object form
    Structured {
        /// upvotes
        up: i64,
        /// downvotes
        down: i64,
        /// total
        total: i64,
    },
    /// string form
    Legacy(String),
}

impl Score {
    /// the total score, if the structured form is present
    pub fn total(&self) -> Option<i64> {
        match self {
            Self::Structured { total, .. } => Some(*total),
            Self::Legacy(_) | Self::Absent => None,
        }
    }

    /// whether no score was sent
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<WireScore>::deserialize(deserializer)? {
            Some(WireScore::Structured { up, down, total }) => Self::Structured { up, down, total },
            Some(WireScore::Legacy(raw)) => Self::Legacy(raw),
            None => Self::Absent,
        })
    }
}

impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Structured { up, down, total } => WireScore::Structured {
                up: *up,
                down: *down,
                total: *total,
            }
            .serialize(serializer),
            Self::Legacy(raw) => serializer.serialize_str(raw),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

/// All tags for a post, organized by category.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Tags {
    /// General descriptive tags.
    pub general: Vec<String>,
    /// Species tags.
    pub species: Vec<String>,
    /// Character tags.
    pub character: Vec<String>,
    /// Copyright tags.
    pub copyright: Vec<String>,
    /// Artist tags.
    pub artist: Vec<String>,
    /// Invalid or deprecated tags.
    pub invalid: Vec<String>,
    /// Lore tags.
    pub lore: Vec<String>,
    /// Meta tags.
    pub meta: Vec<String>,
}

impl Tags {
    /// iterate over the tags of every category, category dropped
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            &self.general,
            &self.species,
            &self.character,
            &self.copyright,
            &self.artist,
            &self.invalid,
            &self.lore,
            &self.meta,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
    }
}

/// Status flags for a post.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Whether the post is pending approval.
    pub pending: bool,
    /// Whether the post has been flagged for review.
    pub flagged: bool,
    /// Whether notes are locked.
    pub note_locked: bool,
    /// Whether the status is locked.
    pub status_locked: bool,
    /// Whether the rating is locked.
    pub rating_locked: bool,
    /// Whether the post has been deleted.
    pub deleted: bool,
}

/// Parent/child relationship data.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Relationships {
    /// ID of the parent post.
    pub parent_id: Option<i64>,
    /// Whether this post has any child posts.
    pub has_children: bool,
    /// Whether this post has active (non-deleted) child posts.
    pub has_active_children: bool,
    /// IDs of child posts.
    pub children: Vec<i64>,
}

impl Post {
    /// every tag attached to this post, category dropped
    ///
    /// uses the structured tag group when present; otherwise the general, character, copyright,
    /// artist and meta tag strings. species/lore/invalid tags have no flat counterpart and are
    /// missing from the result in that case.
    pub fn all_tags(&self) -> &TagSet {
        self.all_tags.get_or_init(|| self.resolve_tags())
    }

    /// the canonical file of this post, if it has one
    ///
    /// fallback order: the explicit `file` object, then `large_file_url` (extension taken from the
    /// url), then `file_url` (extension taken from `file_ext`). deleted posts usually have none.
    pub fn file(&self) -> Option<&File> {
        self.file.get_or_init(|| self.resolve_file()).as_ref()
    }

    /// checks if this post is hit by the given blacklist
    pub fn is_blacklisted(&self, blacklist: &Blacklist) -> bool {
        blacklist.intersects(self.all_tags())
    }

    /// the explicit file descriptor, `file` first and `file_obj` second
    pub fn explicit_file(&self) -> Option<&File> {
        self.file_obj.as_ref().or(self.file_obj_fallback.as_ref())
    }

    /// whether the post is flagged as deleted
    pub fn is_deleted(&self) -> bool {
        self.flags.as_ref().is_some_and(|f| f.deleted)
    }

    /// the flat tag string fields
    fn tag_strings(&self) -> [Option<&str>; 5] {
        [
            self.tag_string_general.as_deref(),
            self.tag_string_character.as_deref(),
            self.tag_string_copyright.as_deref(),
            self.tag_string_artist.as_deref(),
            self.tag_string_meta.as_deref(),
        ]
    }

    /// build the canonical tag set
    fn resolve_tags(&self) -> TagSet {
        match &self.tags {
            Some(tags) => tags.iter().map(str::to_owned).collect(),
            None => self
                .tag_strings()
                .into_iter()
                .flatten()
                .flat_map(|s| s.split(' '))
                .filter(|tag| !tag.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// build the canonical file descriptor
    fn resolve_file(&self) -> Option<File> {
        if let Some(file) = self.explicit_file() {
            return Some(file.clone());
        }

        let (url, ext) = if let Some(url) = &self.large_file_url {
            (url, url.rsplit_once('.').map(|(_, ext)| ext))
        } else if let Some(url) = &self.file_url {
            let ext = self
                .file_ext
                .as_deref()
                .map(|ext| ext.strip_prefix('.').unwrap_or(ext));
            (url, ext)
        } else {
            return None;
        };

        let ext = ext.filter(|ext| !ext.is_empty())?;

        Some(File {
            width: None,
            height: None,
            ext: ext.to_string(),
            size: self.file_size,
            md5: None,
            url: Some(url.clone()),
        })
    }
}

impl Posts {
    /// drop every post hit by the blacklist
    pub fn filter_blacklisted(mut self, blacklist: &Blacklist) -> Self {
        if blacklist.is_empty() {
            return self;
        }

        self.posts.retain(|post| !post.is_blacklisted(blacklist));
        self
    }

    /// the ids of all posts, in response order
    pub fn ids(&self) -> Vec<i64> {
        self.posts.iter().map(|p| p.id).collect()
    }
}
