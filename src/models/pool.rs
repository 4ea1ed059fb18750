//! pools, post sets and expanding them into posts
//!
//! Pools and post sets only carry the ids of their member posts. [`expand_posts`] turns those ids
//! into full [`Post`] records with a single search through a [`PostSearch`] collaborator and
//! memoizes the result on the collection. The returned order is whatever the search produced;
//! it is not rearranged to match `post_ids`.
use {
    crate::{memo::Memo, models::Post, utils::join_ids},
    serde::{Deserialize, Serialize},
    std::ops::Deref,
    tracing::debug,
};

/// something that can search for posts with a tag query
pub trait PostSearch {
    /// the error returned when a search fails
    type Error;

    /// run a tag search, returning whatever posts it produced
    fn search_posts(&self, query: &str) -> Result<Vec<Post>, Self::Error>;
}

impl<S: PostSearch + ?Sized> PostSearch for &S {
    type Error = S::Error;

    fn search_posts(&self, query: &str) -> Result<Vec<Post>, Self::Error> {
        (**self).search_posts(query)
    }
}

/// a collection that owns an ordered list of member post ids
pub trait MemberPosts {
    /// the member post ids, in collection order
    fn post_ids(&self) -> &[i64];

    /// the memo the expanded posts settle into
    fn member_posts(&self) -> &Memo<Vec<Post>>;
}

/// build the `id:` search term for a list of post ids
pub fn id_query(ids: &[i64]) -> String {
    format!("id:{}", join_ids(ids))
}

/// resolve a collection's member ids into full posts
///
/// the first successful call runs exactly one search and memoizes the result; later calls return
/// it without searching. a failed search is handed back unchanged and nothing is memoized.
pub fn expand_posts<'a, M, S>(members: &'a M, search: &S) -> Result<&'a [Post], S::Error>
where
    M: MemberPosts + ?Sized,
    S: PostSearch + ?Sized,
{
    members
        .member_posts()
        .get_or_try_init(|| {
            let query = id_query(members.post_ids());
            debug!(count = members.post_ids().len(), %query, "expanding member posts");
            search.search_posts(&query)
        })
        .map(Vec::as_slice)
}

/// A pool (ordered collection) of posts, such as comic pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    /// Unique identifier for the pool.
    pub id: i64,
    /// Name of the pool.
    pub name: String,
    /// ISO 8601 timestamp of when the pool was created.
    pub created_at: String,
    /// ISO 8601 timestamp of when the pool was last updated.
    pub updated_at: Option<String>,
    /// ID of the user who created the pool.
    pub creator_id: i64,
    /// Description of the pool's purpose or contents.
    pub description: String,
    /// Whether the pool is active.
    pub is_active: Option<bool>,
    /// Category of the pool ("series", "collection").
    pub category: String,
    /// Whether the pool is deleted.
    pub is_deleted: Option<bool>,
    /// IDs of posts in the pool, in order.
    pub post_ids: Vec<i64>,
    /// Username of the user who created the pool.
    pub creator_name: String,
    /// Number of posts in the pool.
    pub post_count: i64,

    /// expanded member posts
    #[serde(skip)]
    posts: Memo<Vec<Post>>,
}

impl MemberPosts for Pool {
    fn post_ids(&self) -> &[i64] {
        &self.post_ids
    }

    fn member_posts(&self) -> &Memo<Vec<Post>> {
        &self.posts
    }
}

impl Pool {
    /// the posts of this pool, fetched through `search` on first use
    pub fn posts<S: PostSearch + ?Sized>(&self, search: &S) -> Result<&[Post], S::Error> {
        expand_posts(self, search)
    }

    /// the posts of this pool, if they were already fetched
    pub fn expanded(&self) -> Option<&[Post]> {
        self.posts.get().map(Vec::as_slice)
    }
}

/// A user curated set of posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSet {
    /// Unique identifier for the set.
    pub id: i64,
    /// ISO 8601 timestamp of when the set was created.
    pub created_at: String,
    /// ISO 8601 timestamp of when the set was last updated.
    pub updated_at: Option<String>,
    /// ID of the user who created the set.
    pub creator_id: i64,
    /// Whether the set is public.
    pub is_public: bool,
    /// Name of the set.
    pub name: String,
    /// Short name used in `set:` searches.
    pub shortname: String,
    /// Description of the set.
    pub description: String,
    /// Number of posts in the set.
    pub post_count: i64,
    /// Whether posts are moved to their parent when deleted.
    pub transfer_on_delete: bool,
    /// IDs of posts in the set.
    pub post_ids: Vec<i64>,
}

/// A [`PostSet`] that can expand its members into posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PostSet", into = "PostSet")]
pub struct EnrichedPostSet {
    /// the set itself
    set: PostSet,
    /// expanded member posts
    posts: Memo<Vec<Post>>,
}

impl From<PostSet> for EnrichedPostSet {
    fn from(set: PostSet) -> Self {
        Self {
            set,
            posts: Memo::new(),
        }
    }
}

impl From<EnrichedPostSet> for PostSet {
    fn from(value: EnrichedPostSet) -> Self {
        value.set
    }
}

impl Deref for EnrichedPostSet {
    type Target = PostSet;

    fn deref(&self) -> &Self::Target {
        &self.set
    }
}

impl MemberPosts for EnrichedPostSet {
    fn post_ids(&self) -> &[i64] {
        &self.set.post_ids
    }

    fn member_posts(&self) -> &Memo<Vec<Post>> {
        &self.posts
    }
}

impl EnrichedPostSet {
    /// the posts of this set, fetched through `search` on first use
    pub fn posts<S: PostSearch + ?Sized>(&self, search: &S) -> Result<&[Post], S::Error> {
        expand_posts(self, search)
    }

    /// the posts of this set, if they were already fetched
    pub fn expanded(&self) -> Option<&[Post]> {
        self.posts.get().map(Vec::as_slice)
    }

    /// the plain set
    pub fn into_inner(self) -> PostSet {
        self.set
    }
}
