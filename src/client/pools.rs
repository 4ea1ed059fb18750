//! client extensions for pool and set operations on the e6 api
use {
    crate::{
        client::{E6Client, MAX_LIMIT},
        error::Result,
        models::{EnrichedPostSet, Pool},
        response::Envelope,
    },
    tracing::instrument,
};

impl E6Client {
    #[instrument(skip(self))]
    /// get a pool by its id
    pub fn pool(&self, id: i64) -> Result<Envelope<Pool>> {
        self.get(&self.url(&format!("pools/{}.json", id)))
    }

    /// the url of a pool search by name
    pub fn pools_url(&self, name: &str, limit: Option<u64>) -> String {
        let mut url = format!(
            "{}?search[name_matches]={}",
            self.url("pools.json"),
            urlencoding::encode(name)
        );

        if let Some(limit) = limit {
            url.push_str(&format!("&limit={}", limit.min(MAX_LIMIT)));
        }

        url
    }

    #[instrument(skip(self))]
    /// search pools by name
    pub fn pools(&self, name: &str, limit: Option<u64>) -> Result<Envelope<Vec<Pool>>> {
        self.get(&self.pools_url(name, limit))
    }

    #[instrument(skip(self))]
    /// get a post set by its id
    pub fn post_set(&self, id: i64) -> Result<Envelope<EnrichedPostSet>> {
        self.get(&self.url(&format!("post_sets/{}.json", id)))
    }
}
