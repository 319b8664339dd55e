//! Configuration management for crmseed
//!
//! Settings are layered: CLI flag > environment variable > config file >
//! built-in default. clap covers the first two layers; this module adds the
//! optional YAML file and the defaults.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::client::crm::DEFAULT_API_BASE;
use crate::error::{ConfigError, Result};
use crate::seed::ErrorPolicy;

/// Default pause after each deal request
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Contents of the optional config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// CRM API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Pause after each deal request, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,

    /// HTTP request timeout, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Abort on the first failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".crmseed").join("config.yaml"))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default path if one exists.
    ///
    /// An explicit path must exist; a missing default file means "no file".
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => match Self::default_path() {
                Ok(default) if default.exists() => Self::load_from(default),
                _ => Ok(Config::default()),
            },
        }
    }
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub delay: Duration,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    pub policy: ErrorPolicy,
}

impl Settings {
    /// Resolve settings from parsed CLI arguments and the config file
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = Config::load_at(cli.config.as_deref())?;
        Self::merge(cli, config)
    }

    /// Merge CLI values over file values over defaults
    pub fn merge(cli: &Cli, config: Config) -> Result<Self> {
        let api_base = cli
            .api_base
            .clone()
            .or(config.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "API base must be an http(s) URL, got '{}'",
                api_base
            ))
            .into());
        }

        let delay = cli
            .delay_ms
            .or(config.delay_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY);

        let timeout = match cli.timeout_secs.or(config.timeout_secs) {
            Some(0) => {
                return Err(
                    ConfigError::Invalid("timeout must be at least 1 second".to_string()).into(),
                );
            }
            secs => secs.map(Duration::from_secs),
        };

        let strict = cli.strict || config.strict.unwrap_or(false);

        Ok(Self {
            api_base,
            delay,
            timeout,
            policy: ErrorPolicy::from_strict(strict),
        })
    }
}
