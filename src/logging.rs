//! logging stuff
use {
    crate::{
        config::options::{LoggingCfg, LoggingFormat},
        error::Result,
        utils::string_to_log_level,
    },
    tracing::{info, subscriber},
    tracing_subscriber::FmtSubscriber,
};

/// setup logging
///
/// does nothing when logging is disabled or the level is `off`. fails if a global subscriber
/// is already installed.
pub fn setup(cfg: &LoggingCfg) -> Result<()> {
    let level = cfg.level.as_deref().unwrap_or("info");

    if !cfg.enable.unwrap_or(true) || level.eq_ignore_ascii_case("off") {
        return Ok(());
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(string_to_log_level(level))
        .with_ansi(cfg.ansi.unwrap_or(true))
        .with_line_number(cfg.line_numbers.unwrap_or(false))
        .with_target(cfg.event_targets.unwrap_or(false));

    match cfg.format.unwrap_or_default() {
        LoggingFormat::Pretty => {
            subscriber::set_global_default(subscriber.pretty().finish())?;
        }
        LoggingFormat::Compact => {
            subscriber::set_global_default(subscriber.compact().finish())?;
        }
    }

    info!("Logging setup successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_is_a_noop() {
        let off = LoggingCfg {
            enable: Some(false),
            ..LoggingCfg::default()
        };
        assert!(setup(&off).is_ok());

        let silent = LoggingCfg {
            level: Some("OFF".to_string()),
            ..LoggingCfg::default()
        };
        assert!(setup(&silent).is_ok());
    }
}
