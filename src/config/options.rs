//! every available configuration option and its type is listed in this file
use {
    crate::blacklist::Blacklist,
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::time::Duration,
};

/// Configuration options for making HTTP requests
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
pub struct HttpCfg {
    /// Request timeout in seconds
    #[default(Some(30))]
    pub timeout_secs: Option<u64>,

    /// Connection timeout in seconds
    #[default(Some(10))]
    pub connect_timeout_secs: Option<u64>,

    /// User agent string in the format:
    /// `<project name>/<project version> (by <valid e6 username> on <e621/e926>)`
    #[default(Some(format!(
        "{}/{} (by {} on e621)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        "anonymous"
    )))]
    pub user_agent: Option<String>,
}

impl HttpCfg {
    /// the request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }

    /// the connection timeout
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.unwrap_or(10))
    }
}

/// Your login credentials
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
pub struct LoginCfg {
    /// Whether to login or not
    #[default(Some(false))]
    pub login: Option<bool>,

    /// Your username
    #[default(Some(String::new()))]
    pub username: Option<String>,

    /// Your API key
    #[default(Some(String::new()))]
    pub api_key: Option<String>,
}

impl LoginCfg {
    /// the username and api key, if login is enabled and both are set
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if self.login != Some(true) {
            return None;
        }

        match (self.username.as_deref(), self.api_key.as_deref()) {
            (Some(user), Some(key)) if !user.is_empty() && !key.is_empty() => Some((user, key)),
            _ => None,
        }
    }
}

/// The format to log in
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
pub enum LoggingFormat {
    /// Use the compact output format
    #[default]
    Compact,

    /// Use a multi-line, pretty output format
    Pretty,
}

/// Settings for logging
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
pub struct LoggingCfg {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("info".to_string()))]
    pub level: Option<String>,

    /// The output format
    #[default(Some(LoggingFormat::Compact))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(false))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// The main configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
pub struct E6Cfg {
    /// The base URL of the API
    #[default(Some("https://e621.net".to_string()))]
    pub base_url: Option<String>,

    /// HTTP client configuration
    #[default(Some(HttpCfg::default()))]
    pub http: Option<HttpCfg>,

    /// Login settings
    #[default(Some(LoginCfg::default()))]
    pub login: Option<LoginCfg>,

    /// Logging settings
    #[default(Some(LoggingCfg::default()))]
    pub logging: Option<LoggingCfg>,

    /// Blacklist entries; a space separated entry only matches when all of its tags are present
    #[default(Some(Vec::new()))]
    pub blacklist: Option<Vec<String>>,
}

impl E6Cfg {
    /// the base url, without a trailing slash
    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or("https://e621.net")
            .trim_end_matches('/')
            .to_string()
    }

    /// the http settings, falling back to defaults
    pub fn http(&self) -> HttpCfg {
        self.http.clone().unwrap_or_default()
    }

    /// the login settings, falling back to defaults
    pub fn login(&self) -> LoginCfg {
        self.login.clone().unwrap_or_default()
    }

    /// the logging settings, falling back to defaults
    pub fn logging(&self) -> LoggingCfg {
        self.logging.clone().unwrap_or_default()
    }

    /// the configured blacklist
    pub fn blacklist(&self) -> Blacklist {
        self.blacklist.iter().flatten().map(String::as_str).collect()
    }
}
