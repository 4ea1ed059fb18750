//! error handling stuff
use {miette::Diagnostic, thiserror::Error};

#[derive(Debug, Error, Diagnostic)]
/// An error
pub enum E6Error {
    /// the server answered with a status outside of 2xx
    #[error("transport error: HTTP {status}: {body}")]
    #[diagnostic(code(e6::transport))]
    Transport {
        /// the http status code
        status: u16,
        /// the raw response body (lossily decoded)
        body: String,
    },

    /// an envelope was materialized without a bound model
    #[error("configuration error: {0}")]
    #[diagnostic(
        code(e6::configuration),
        help("bind a model to the envelope before calling materialize()")
    )]
    Configuration(String),

    /// a payload failed to parse or validate
    #[error("schema error at `{path}`: {message}")]
    #[diagnostic(code(e6::schema))]
    Schema {
        /// path to the offending field (`.` for the document root)
        path: String,
        /// what was expected and what was found
        message: String,
    },

    /// a reqwest error
    #[error("reqwest error: {0}")]
    #[diagnostic(code(e6::reqwest))]
    Reqwest(#[from] reqwest::Error),

    /// an invalid header value
    #[error("invalid header value: {0}")]
    #[diagnostic(code(e6::header))]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// an error from the config crate
    #[error("config error: {0}")]
    #[diagnostic(code(e6::config))]
    Config(#[from] config::ConfigError),

    /// the loaded config failed validation
    #[error("config validation failed:\n{0}")]
    #[diagnostic(
        code(e6::config::invalid),
        help("check your e6model.toml for invalid values")
    )]
    InvalidConfig(String),

    /// an IO error
    #[error("i/o error: {0}")]
    #[diagnostic(code(e6::io))]
    Io(#[from] std::io::Error),

    /// a json serialization error
    #[error("json error: {0}")]
    #[diagnostic(code(e6::json))]
    Json(#[from] serde_json::Error),

    /// a toml serialization error
    #[error("toml serialization error: {0}")]
    #[diagnostic(code(e6::toml))]
    TomlSer(#[from] toml::ser::Error),

    /// a global tracing subscriber was already installed
    #[error("failed to install logger: {0}")]
    #[diagnostic(code(e6::logging))]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// a custom error
    #[error("error: {0}")]
    #[diagnostic(code(e6::other))]
    Other(String),
}

impl From<String> for E6Error {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

impl E6Error {
    /// make a schema error from a path-tracking serde_json error
    pub fn schema(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let message = err.into_inner().to_string();

        Self::Schema { path, message }
    }

    /// returns the status code for transport errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// whether this is a schema (parse/validation) error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}

/// A result using [`E6Error`] as the `Err` variant
pub type Result<T, U = E6Error> = miette::Result<T, U>;

/// bail
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::E6Error::from(String::from($msg)))
    };

    ($err:expr $(,)?) => {
        return Err($crate::error::E6Error::from($err))
    };

    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::E6Error::from(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails() -> Result<()> {
        bail!("nope {}", 3);
    }

    #[test]
    fn test_bail_makes_other() {
        match fails() {
            Err(E6Error::Other(msg)) => assert_eq!(msg, "nope 3"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_transport_status() {
        let err = E6Error::Transport {
            status: 404,
            body: "not found".to_string(),
        };

        assert_eq!(err.status(), Some(404));
        assert!(!err.is_schema());
        assert_eq!(err.to_string(), "transport error: HTTP 404: not found");
    }

    #[test]
    fn test_schema_error_carries_path() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Inner {
            width: i64,
        }

        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Outer {
            file: Inner,
        }

        let de = &mut serde_json::Deserializer::from_str(r#"{"file": {"width": "wide"}}"#);
        let err = serde_path_to_error::deserialize::<_, Outer>(de)
            .map(|_| ())
            .map_err(E6Error::schema)
            .unwrap_err();

        match err {
            E6Error::Schema { path, message } => {
                assert_eq!(path, "file.width");
                assert!(message.contains("expected i64"), "{}", message);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
