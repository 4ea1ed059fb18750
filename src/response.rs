//! binding finished http responses to the record type they should contain
use {
    crate::{
        error::{E6Error, Result},
        schema,
    },
    serde::de::DeserializeOwned,
    std::{fmt, marker::PhantomData},
    tracing::{debug, warn},
};

/// a completed transport response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// the http status code
    pub status: u16,
    /// the url the response came from, if known
    pub url: Option<String>,
    /// the raw body
    pub body: Vec<u8>,
}

impl RawResponse {
    /// make a response from a status and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            url: None,
            body: body.into(),
        }
    }

    /// attach the url the response came from
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// the body, lossily decoded as utf-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// read a blocking reqwest response to the end
    pub fn read(response: reqwest::blocking::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.bytes()?.to_vec();

        Ok(Self {
            status,
            url: Some(url),
            body,
        })
    }
}

/// A response paired with the record type it is expected to hold.
///
/// The model can be bound when the envelope is made ([`Envelope::with_model`]) or later
/// ([`Envelope::bind`]). [`Envelope::materialize`] is all or nothing: it gives back a fully
/// validated record or an error, never something half filled.
pub struct Envelope<T> {
    /// the wrapped response
    response: RawResponse,
    /// the bound model, if any
    model: Option<PhantomData<fn() -> T>>,
}

impl<T> Envelope<T> {
    /// wrap a response without binding a model
    pub fn new(response: RawResponse) -> Self {
        Self {
            response,
            model: None,
        }
    }

    /// wrap a response and bind `T` as its model
    pub fn with_model(response: RawResponse) -> Self {
        Self {
            response,
            model: Some(PhantomData),
        }
    }

    /// bind `U` as the model, replacing any previous binding
    pub fn bind<U>(self) -> Envelope<U> {
        Envelope::with_model(self.response)
    }

    /// whether a model is bound
    pub fn is_bound(&self) -> bool {
        self.model.is_some()
    }

    /// the http status code
    pub fn status(&self) -> u16 {
        self.response.status
    }

    /// the wrapped response
    pub fn response(&self) -> &RawResponse {
        &self.response
    }

    /// unwrap the response
    pub fn into_response(self) -> RawResponse {
        self.response
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// turn the response into its record
    ///
    /// # Errors
    ///
    /// * [`E6Error::Transport`] if the status isn't 2xx (checked first, bound or not)
    /// * [`E6Error::Configuration`] if no model is bound
    /// * [`E6Error::Schema`] if the body is malformed or fails validation
    pub fn materialize(&self) -> Result<T> {
        let response = &self.response;

        if !response.is_success() {
            warn!(
                status = response.status,
                url = response.url.as_deref().unwrap_or("<unknown>"),
                "request failed"
            );

            return Err(E6Error::Transport {
                status: response.status,
                body: response.text(),
            });
        }

        if self.model.is_none() {
            return Err(E6Error::Configuration(
                "no model is bound to this response; did you forget to set it?".to_string(),
            ));
        }

        debug!(
            model = std::any::type_name::<T>(),
            bytes = response.body.len(),
            "materializing response"
        );

        schema::from_slice(&response.body)
    }
}

impl<T> Clone for Envelope<T> {
    fn clone(&self) -> Self {
        Self {
            response: self.response.clone(),
            model: self.model,
        }
    }
}

impl<T> fmt::Debug for Envelope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("response", &self.response)
            .field(
                "model",
                &self.model.map(|_| std::any::type_name::<T>()),
            )
            .finish()
    }
}
