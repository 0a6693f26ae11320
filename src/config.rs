//! Generator configuration.
//!
//! [`GeneratorConfig::load()`] reads `config/spindle.toml` when present and
//! overlays `SPINDLE__GENERATOR__*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Tag namespace read when none is configured.
pub const DEFAULT_TAG_KEY: &str = "db";
/// Modifier that drops a field when none is configured.
pub const DEFAULT_IGNORE_SENTINEL: &str = "-";

const CONFIG_FILE: &str = "config/spindle.toml";
const ENV_PREFIX: &str = "SPINDLE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_tag_key")]
    pub tag_key: String,
    #[serde(default = "default_ignore_sentinel")]
    pub ignore_sentinel: String,
}

fn default_tag_key() -> String {
    DEFAULT_TAG_KEY.to_string()
}

fn default_ignore_sentinel() -> String {
    DEFAULT_IGNORE_SENTINEL.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tag_key: default_tag_key(),
            ignore_sentinel: default_ignore_sentinel(),
        }
    }
}

impl GeneratorConfig {
    /// Load from the default file and environment.
    ///
    /// A missing file or a missing `[generator]` section yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(|e| Error::Configuration(format!("failed to read {path}: {e}")))?;

        match settings.get::<GeneratorConfig>("generator") {
            Ok(cfg) => Ok(cfg),
            Err(config::ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(Error::Configuration(format!(
                "invalid [generator] section: {e}"
            ))),
        }
    }
}
