//! All data types used by e621 for deserializing/serializing API responses.
//!
//! Records are strict: a field the api always sends is required, a field it may leave out or
//! null is an `Option`. Unknown fields are ignored.
use hashbrown::HashSet;

pub mod artist;
pub mod forum;
pub mod moderation;
pub mod note;
pub mod pool;
pub mod post;
pub mod tag;
pub mod user;
pub mod version;
pub mod wiki;

pub use {
    artist::{Artist, ArtistUrl, ArtistVersion},
    forum::{Blip, ForumPost, ForumTopic},
    moderation::{BulkUpdateRequest, PostApproval, PostFlag, Takedown, UserFeedback},
    note::{Note, NoteVersion},
    pool::{EnrichedPostSet, MemberPosts, Pool, PostSearch, PostSet, expand_posts, id_query},
    post::{
        Alternates, File, Flags, Post, PostResponse, Posts, Preview, Relationships, Rendition,
        Sample, Score, Tags,
    },
    tag::{Tag, TagAlias, TagImplication, TagTypeVersion},
    user::{AuthenticatedUser, User},
    version::PostVersion,
    wiki::{WikiPage, WikiPageVersion},
};

/// a flat, category-less set of tags
pub type TagSet = HashSet<String>;
