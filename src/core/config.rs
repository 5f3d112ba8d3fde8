

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{Result, ShopsenseError};
use crate::{
    DEFAULT_CACHE_SIZE, DEFAULT_CACHE_TTL, DEFAULT_DISCOVERY_MAX_RESULTS,
    DEFAULT_DISCOVERY_TIMEOUT_MS, DEFAULT_DISCOVERY_URL, DEFAULT_FUZZY_THRESHOLD,
};

const ENV_PREFIX: &str = "SHOPSENSE";


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopsenseConfig {
    /// Minimum similarity (0-100) for a fuzzy vocabulary match.
    pub fuzzy_threshold: f64,

    pub discovery_enabled: bool,
    pub discovery_url: String,
    pub discovery_timeout_ms: u64,
    pub discovery_max_results: usize,

    /// JSON document holding persisted synonyms. In-memory only when unset.
    pub synonym_path: Option<PathBuf>,

    pub cache_capacity: usize,
    pub cache_ttl_secs: u64,
}

impl Default for ShopsenseConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            discovery_enabled: true,
            discovery_url: DEFAULT_DISCOVERY_URL.to_string(),
            discovery_timeout_ms: DEFAULT_DISCOVERY_TIMEOUT_MS,
            discovery_max_results: DEFAULT_DISCOVERY_MAX_RESULTS,
            synonym_path: None,
            cache_capacity: DEFAULT_CACHE_SIZE,
            cache_ttl_secs: DEFAULT_CACHE_TTL,
        }
    }
}

impl ShopsenseConfig {
    /// Layers defaults, an optional settings file (TOML, JSON, YAML by
    /// extension) and `SHOPSENSE_*` environment variables, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("fuzzy_threshold", DEFAULT_FUZZY_THRESHOLD)?
            .set_default("discovery_enabled", true)?
            .set_default("discovery_url", DEFAULT_DISCOVERY_URL)?
            .set_default("discovery_timeout_ms", DEFAULT_DISCOVERY_TIMEOUT_MS)?
            .set_default("discovery_max_results", DEFAULT_DISCOVERY_MAX_RESULTS as u64)?
            .set_default("cache_capacity", DEFAULT_CACHE_SIZE as u64)?
            .set_default("cache_ttl_secs", DEFAULT_CACHE_TTL)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.fuzzy_threshold) {
            return Err(ShopsenseError::Config(format!(
                "fuzzy_threshold must be within 0..=100, got {}",
                self.fuzzy_threshold
            )));
        }
        if self.discovery_timeout_ms == 0 {
            return Err(ShopsenseError::Config(
                "discovery_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
