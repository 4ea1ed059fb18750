//! configuration loading and saving
//!
//! load prio: environment (`E6MODEL_` prefix, `__` between sections) > config file > defaults
use {
    crate::{
        config::validate::{Validate, format_validation_errors},
        error::{E6Error, Result},
    },
    config::{Config, Environment},
    std::path::{Path, PathBuf},
    tracing::{debug, info},
};

pub mod options;
pub mod validate;

pub use options::{E6Cfg, HttpCfg, LoggingCfg, LoggingFormat, LoginCfg};

/// the file name looked for by [`E6Cfg::load`]
pub const CONFIG_FILE: &str = "e6model.toml";

/// the environment variable prefix
pub const ENV_PREFIX: &str = "E6MODEL";

impl E6Cfg {
    /// load config from the nearest `e6model.toml` (if any) and the environment
    pub fn load() -> Result<Self> {
        let local = Self::find_local_config()?;
        Self::load_from(local.as_deref())
    }

    /// load config from the given file (if any) and the environment
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder().add_source(Config::try_from(&defaults)?);

        if let Some(path) = path {
            debug!(path = %path.display(), "reading config file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let cfg: E6Cfg = builder.build()?.try_deserialize()?;
        cfg.run_validation()?;

        info!("configuration loaded");
        Ok(cfg)
    }

    /// run validation and return a pretty error if it fails
    fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| E6Error::InvalidConfig(format_validation_errors(&errors)))
    }

    /// find the local config file in the current directory or any of its ancestors
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()?;

        for ancestor in curr_dir.ancestors() {
            let config_path = ancestor.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(Some(config_path));
            }
        }

        Ok(None)
    }

    /// save config to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, &toml_str)?;
        info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// the json schema of the config file
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(E6Cfg);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::fs, tempfile::TempDir};

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("e6model.toml");
        fs::write(
            &path,
            "base_url = \"https://e926.net/\"\nblacklist = [\"gore\", \"male feral\"]\n\n[http]\ntimeout_secs = 5\n",
        )
        .unwrap();

        let cfg = E6Cfg::load_from(Some(&path)).unwrap();

        assert_eq!(cfg.base_url(), "https://e926.net");
        assert_eq!(cfg.http().timeout_secs, Some(5));
        assert_eq!(cfg.http().connect_timeout_secs, Some(10));
        assert_eq!(cfg.blacklist().len(), 2);
        assert!(cfg.blacklist().contains("male feral"));
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("e6model.toml");
        fs::write(&path, "[login]\nlogin = true\n").unwrap();

        match E6Cfg::load_from(Some(&path)) {
            Err(E6Error::InvalidConfig(msg)) => {
                assert!(msg.contains("login.username"), "{}", msg);
                assert!(msg.contains("login.api_key"), "{}", msg);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(matches!(
            E6Cfg::load_from(Some(&path)),
            Err(E6Error::Config(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("e6model.toml");
        let cfg = E6Cfg {
            blacklist: Some(vec!["gore".to_string()]),
            ..E6Cfg::default()
        };

        cfg.save_to_file(&path).unwrap();
        let loaded = E6Cfg::load_from(Some(&path)).unwrap();

        assert_eq!(loaded.blacklist, cfg.blacklist);
        assert_eq!(loaded.http(), cfg.http());
    }

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = E6Cfg::json_schema().unwrap();

        assert!(schema.contains("base_url"));
        assert!(schema.contains("blacklist"));
    }
}
