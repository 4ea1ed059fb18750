//! utilities used across e6model
use {
    crate::error::Result,
    base64::{Engine, engine::general_purpose},
    reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue},
    tracing::Level,
};

/// join post ids with commas
pub fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// make a basic auth header from a username and api key
pub fn create_auth_header(username: &str, api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let auth_str = format!("{}:{}", username, api_key);
    let encoded = general_purpose::STANDARD.encode(auth_str);
    let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))?;

    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);

    Ok(headers)
}

/// convert a string to a log level
///
/// takes a given string and converts it into a [`tracing::Level`] for later use when setting up
/// tracing (see [`crate::logging`]). unknown strings map to `ERROR`.
pub fn string_to_log_level(lvl: &str) -> Level {
    match lvl.to_lowercase().as_str() {
        "d" | "debug" | "dbg" => Level::DEBUG,
        "t" | "trace" | "trc" => Level::TRACE,
        "e" | "error" | "err" => Level::ERROR,
        "i" | "info" | "inf" => Level::INFO,
        "w" | "warn" | "wrn" => Level::WARN,
        _ => Level::ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[1, 22, 333]), "1,22,333");
        assert_eq!(join_ids(&[]), "");
    }

    #[test]
    fn test_auth_header() {
        let headers = create_auth_header("user", "key").unwrap();
        let value = headers.get(AUTHORIZATION).unwrap();

        assert_eq!(value.to_str().unwrap(), "Basic dXNlcjprZXk=");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(string_to_log_level("DEBUG"), Level::DEBUG);
        assert_eq!(string_to_log_level("wrn"), Level::WARN);
        assert_eq!(string_to_log_level("nonsense"), Level::ERROR);
    }
}
