use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Entries younger than this are served (hours).
    pub ttl_hours: u32,
    /// Capacity of the in-process tier.
    pub l1_max_entries: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::hours(i64::from(self.ttl_hours))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_hours: defaults::DEFAULT_CACHE_TTL_HOURS,
            l1_max_entries: defaults::DEFAULT_L1_MAX_ENTRIES,
        }
    }
}
