use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::DayPrediction;

/// Composite cache key, rendered as `"{location_id}_{day_of_week}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub location_id: String,
    pub day_of_week: u8,
}

impl CacheKey {
    pub fn new(location_id: impl Into<String>, day_of_week: u8) -> Self {
        Self {
            location_id: location_id.into(),
            day_of_week,
        }
    }

    /// Document key in the backing store.
    pub fn as_document_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.location_id, self.day_of_week)
    }
}

/// A memoized day vector plus staleness metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub predictions: DayPrediction,
    pub computed_at: DateTime<Utc>,
    pub source_observation_count: usize,
}

impl CacheEntry {
    /// Fresh while strictly younger than `ttl`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.computed_at < ttl
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.computed_at
    }
}
