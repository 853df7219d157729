//! Configuration management for the library catalog

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON document holding the whole catalog
    pub path: PathBuf,
    /// Write to a sibling temp file and rename it over the target
    #[serde(default)]
    pub atomic: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// When set, logs roll daily into `catalog.log` under this directory
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::from_sources(
            Path::new("config"),
            &run_mode,
            Environment::with_prefix("LIBRARY"),
            env::var("LIBRARY_FILE").ok(),
        )
    }

    /// Layer defaults, `<dir>/default.*`, `<dir>/<run_mode>.*`, the given
    /// environment and the data file override, lowest precedence first.
    pub fn from_sources(
        dir: &Path,
        run_mode: &str,
        environment: Environment,
        file_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self::file_layers(dir, run_mode)?
            // Environment variables (with prefix LIBRARY_)
            .add_source(environment.separator("_").try_parsing(true))
            // Legacy shortcut for the data file location
            .set_override_option("storage.path", file_override)?
            .build()?;

        config.try_deserialize()
    }

    /// Defaults and configuration files only
    pub fn from_files(dir: &Path, run_mode: &str) -> Result<Self, ConfigError> {
        Self::file_layers(dir, run_mode)?.build()?.try_deserialize()
    }

    fn file_layers(dir: &Path, run_mode: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let storage = StorageConfig::default();
        let logging = LoggingConfig::default();

        Ok(Config::builder()
            .set_default("storage.path", storage.path.to_string_lossy().into_owned())?
            .set_default("storage.atomic", storage.atomic)?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", "pretty")?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(run_mode)).required(false)))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("library.json"),
            atomic: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            directory: None,
        }
    }
}
