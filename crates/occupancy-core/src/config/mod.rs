//! TOML-backed configuration. Every section defaults, so an empty
//! document is a valid config.

pub mod cache_config;
pub mod defaults;
pub mod observability_config;
pub mod prediction_config;

pub use cache_config::CacheConfig;
pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, OccupancyResult};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OccupancyConfig {
    pub prediction: PredictionConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl OccupancyConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(input: &str) -> OccupancyResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &std::path::Path) -> OccupancyResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }

    /// Render back to TOML.
    pub fn to_toml(&self) -> OccupancyResult<String> {
        let rendered = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        Ok(rendered)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prediction.lookback_days == 0 {
            return Err(ConfigError::Invalid {
                field: "prediction.lookback_days".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.cache.ttl_hours == 0 {
            return Err(ConfigError::Invalid {
                field: "cache.ttl_hours".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.cache.l1_max_entries == 0 {
            return Err(ConfigError::Invalid {
                field: "cache.l1_max_entries".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
