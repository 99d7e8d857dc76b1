//! Configuration for the stream inspector.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use slackline_core::{config::DEFAULT_MAX_PAYLOAD_BYTES, DecoderConfig};

const CONFIG_FILE: &str = "slackline.toml";
const ENV_PREFIX: &str = "SLACKLINE_";

/// Inspector configuration with defaults, file, and environment overrides.
///
/// Configuration is loaded in priority order:
/// 1. Environment variables prefixed with `SLACKLINE_` (highest priority)
/// 2. Configuration file (`slackline.toml`)
/// 3. Built-in defaults (lowest priority)
///
/// # Example
///
/// ```no_run
/// use slackline::Config;
///
/// let config = Config::load().expect("Failed to load configuration");
/// println!("Payload limit: {} bytes", config.max_payload_bytes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Largest payload the decoder accepts, in bytes.
    ///
    /// Environment variable: `SLACKLINE_MAX_PAYLOAD_BYTES`
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
    /// File that unrecognized payloads are appended to, one per line.
    ///
    /// Environment variable: `SLACKLINE_QUARANTINE_PATH`
    #[serde(default)]
    pub quarantine_path: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is unset.
    ///
    /// Environment variable: `SLACKLINE_RUST_LOG`
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

impl Config {
    /// Load configuration from defaults, `slackline.toml`, and environment
    /// overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration using `path` as the configuration file.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX));

        let config: Self = figment.extract().context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to the decoder's configuration.
    pub const fn to_decoder_config(&self) -> DecoderConfig {
        DecoderConfig { max_payload_bytes: self.max_payload_bytes }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.max_payload_bytes == 0 {
            anyhow::bail!("max_payload_bytes must be greater than 0");
        }

        if self.quarantine_path.as_deref().is_some_and(|path| path.as_os_str().is_empty()) {
            anyhow::bail!("quarantine_path must not be empty when set");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
            quarantine_path: None,
            rust_log: default_log_level(),
        }
    }
}

fn default_max_payload_bytes() -> usize {
    DEFAULT_MAX_PAYLOAD_BYTES
}

fn default_log_level() -> String {
    "info".to_string()
}
