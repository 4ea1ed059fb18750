//! client extensions for user lookups
use {
    crate::{
        client::E6Client,
        error::Result,
        models::{AuthenticatedUser, User},
        response::Envelope,
    },
    tracing::instrument,
};

impl E6Client {
    #[instrument(skip(self))]
    /// get a user's public profile
    pub fn user(&self, id: i64) -> Result<Envelope<User>> {
        self.get(&self.url(&format!("users/{}.json", id)))
    }

    #[instrument(skip(self))]
    /// get the logged in account, settings included
    ///
    /// the api only sends the settings when the request is authenticated as that user
    pub fn authenticated_user(&self, id: i64) -> Result<Envelope<AuthenticatedUser>> {
        self.get(&self.url(&format!("users/{}.json", id)))
    }
}
