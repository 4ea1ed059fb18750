//! client extensions for post operations on the e6 api
use {
    crate::{
        client::{E6Client, MAX_LIMIT},
        error::{E6Error, Result},
        models::{Post, PostResponse, PostSearch, Posts},
        response::Envelope,
    },
    tracing::{debug, instrument},
};

impl E6Client {
    /// the url of a post search
    pub fn posts_url(&self, tags: &str, limit: Option<u64>) -> String {
        let mut url = format!(
            "{}?tags={}",
            self.url("posts.json"),
            urlencoding::encode(tags)
        );

        if let Some(limit) = limit {
            url.push_str(&format!("&limit={}", limit.min(MAX_LIMIT)));
        }

        url
    }

    #[instrument(skip(self))]
    /// search posts with the given tag query
    pub fn posts(&self, tags: &str, limit: Option<u64>) -> Result<Envelope<Posts>> {
        let url = self.posts_url(tags, limit);
        debug!(url = %url, "searching posts");
        self.get(&url)
    }

    #[instrument(skip(self))]
    /// get a post by its id
    pub fn post(&self, id: i64) -> Result<Envelope<PostResponse>> {
        self.get(&self.url(&format!("posts/{}.json", id)))
    }
}

impl PostSearch for E6Client {
    type Error = E6Error;

    fn search_posts(&self, query: &str) -> Result<Vec<Post>> {
        Ok(self.posts(query, Some(MAX_LIMIT))?.materialize()?.posts)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::config::options::E6Cfg};

    #[test]
    fn test_posts_url() {
        let client = E6Client::new(&E6Cfg::default()).unwrap();

        assert_eq!(
            client.posts_url("male anthro", Some(10)),
            "https://e621.net/posts.json?tags=male%20anthro&limit=10"
        );
        assert_eq!(
            client.posts_url("id:1,2", Some(1000)),
            "https://e621.net/posts.json?tags=id%3A1%2C2&limit=320"
        );
        assert_eq!(
            client.posts_url("", None),
            "https://e621.net/posts.json?tags="
        );
    }
}
