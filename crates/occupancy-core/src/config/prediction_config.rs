use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;

/// Predictor input window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// How far back observations are fetched (days).
    pub lookback_days: u32,
}

impl PredictionConfig {
    pub fn lookback(&self) -> Duration {
        Duration::days(i64::from(self.lookback_days))
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            lookback_days: defaults::DEFAULT_LOOKBACK_DAYS,
        }
    }
}
