//! configuration validation stuff
use {
    crate::{config::options::*, validator},
    url::Url,
};

/// trait for validating config structs
pub trait Validate {
    /// validate the config
    fn validate(&self) -> Result<(), Vec<String>>;

    /// check if the config is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

validator! { HttpCfg,
    timeout_secs => |v: &u64| *v > 0,
        "must be greater than 0";
    connect_timeout_secs => |v: &u64| *v > 0,
        "must be greater than 0";
    user_agent => |v: &String| !v.trim().is_empty(),
        "must not be empty";
}

/// valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

validator! { LoggingCfg,
    level => |v: &String| VALID_LOG_LEVELS.contains(&v.to_lowercase().as_str()),
        "must be one of: trace, debug, info, warn, error, off";
}

impl Validate for LoginCfg {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        if let Some(true) = self.login {
            if self.username.as_ref().is_none_or(|s| s.trim().is_empty()) {
                errors.push("username: required when login is enabled".to_string());
            }

            if self.api_key.as_ref().is_none_or(|s| s.trim().is_empty()) {
                errors.push("api_key: required when login is enabled".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Validate for E6Cfg {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        if let Some(ref v) = self.base_url
            && (!(v.starts_with("http://") || v.starts_with("https://")) || Url::parse(v).is_err())
        {
            errors.push("base_url: must be a valid http(s) url".to_string());
        }

        if let Some(ref v) = self.blacklist
            && v.iter().any(|tag| tag.trim().is_empty())
        {
            errors.push("blacklist: entries must not be empty strings".to_string());
        }

        macro_rules! validate_nested {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(ref nested) = self.$field {
                        if let Err(nested_errors) = nested.validate() {
                            for err in nested_errors {
                                errors.push(format!("{}.{}", stringify!($field), err));
                            }
                        }
                    }
                )*
            };
        }

        validate_nested!(http, login, logging);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// format validation errors for display
pub fn format_validation_errors(errors: &[String]) -> String {
    let mut output = String::new();
    for (i, err) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, err));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(E6Cfg::default().is_valid());
    }

    #[test]
    fn test_nested_errors_are_prefixed() {
        let cfg = E6Cfg {
            base_url: Some("ftp://e621.net".to_string()),
            http: Some(HttpCfg {
                timeout_secs: Some(0),
                ..HttpCfg::default()
            }),
            login: Some(LoginCfg {
                login: Some(true),
                username: Some("someone".to_string()),
                api_key: Some(" ".to_string()),
            }),
            blacklist: Some(vec!["gore".to_string(), "".to_string()]),
            ..E6Cfg::default()
        };

        assert_eq!(
            cfg.validate().unwrap_err(),
            vec![
                "base_url: must be a valid http(s) url".to_string(),
                "blacklist: entries must not be empty strings".to_string(),
                "http.timeout_secs: must be greater than 0".to_string(),
                "login.api_key: required when login is enabled".to_string(),
            ]
        );
    }

    #[test]
    fn test_format_validation_errors() {
        assert_eq!(
            format_validation_errors(&["a: bad".to_string(), "b: worse".to_string()]),
            "  1. a: bad\n  2. b: worse\n"
        );
    }
}
