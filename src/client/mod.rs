//! a small blocking client for the e621 api
//!
//! every call hands back an [`Envelope`] bound to the record type the endpoint returns, so
//! the caller decides when (and whether) to materialize it.
use {
    crate::{
        config::options::E6Cfg,
        error::Result,
        response::{Envelope, RawResponse},
        utils::create_auth_header,
    },
    reqwest::blocking::Client,
    tracing::{debug, info, instrument},
};

pub mod pools;
pub mod posts;
pub mod users;

/// the most posts a single search can return
pub const MAX_LIMIT: u64 = 320;

/// the client
#[derive(Clone, Debug)]
pub struct E6Client {
    /// the http client
    pub client: Client,
    /// the base url for api requests
    pub base_url: String,
}

impl E6Client {
    /// make a new e621 api client
    pub fn new(cfg: &E6Cfg) -> Result<Self> {
        let client = Self::build_http_client(cfg)?;
        let base_url = cfg.base_url();

        info!(base_url = %base_url, "initialized http client");

        Ok(Self { client, base_url })
    }

    /// build an http client based on the given configuration
    fn build_http_client(cfg: &E6Cfg) -> Result<Client> {
        let http = cfg.http();
        let mut client_builder = Client::builder()
            .timeout(http.timeout())
            .connect_timeout(http.connect_timeout());

        if let Some(user_agent) = http.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        }

        if let Some((username, api_key)) = cfg.login().credentials() {
            debug!(username, "using basic auth");
            client_builder = client_builder.default_headers(create_auth_header(username, api_key)?);
        }

        Ok(client_builder.build()?)
    }

    /// the full url of an api path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// fetch a url and bind the response to `T`
    ///
    /// only transport failures (dns, timeouts, ...) are errors here; a non 2xx status is
    /// reported when the envelope is materialized.
    #[instrument(skip(self))]
    pub fn get<T>(&self, url: &str) -> Result<Envelope<T>> {
        let response = self.client.get(url).send()?;
        let raw = RawResponse::read(response)?;

        debug!(status = raw.status, bytes = raw.body.len(), "got response");
        Ok(Envelope::with_model(raw))
    }
}
