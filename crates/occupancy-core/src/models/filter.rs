use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Observation;

/// Equality filters plus a single lower time bound.
///
/// Stores answer with matching observations ordered `observed_at` descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationFilter {
    pub location_id: Option<String>,
    pub day_of_week: Option<u8>,
    pub time_interval: Option<u8>,
    /// Exclusive lower bound on `observed_at`.
    pub observed_after: Option<DateTime<Utc>>,
}

impl ObservationFilter {
    pub fn for_location(location_id: impl Into<String>) -> Self {
        Self {
            location_id: Some(location_id.into()),
            ..Default::default()
        }
    }

    pub fn observed_after(mut self, after: DateTime<Utc>) -> Self {
        self.observed_after = Some(after);
        self
    }

    pub fn day_of_week(mut self, day: u8) -> Self {
        self.day_of_week = Some(day);
        self
    }

    pub fn time_interval(mut self, interval: u8) -> Self {
        self.time_interval = Some(interval);
        self
    }

    /// Reference evaluation of the filter against one record.
    pub fn accepts(&self, obs: &Observation) -> bool {
        if let Some(loc) = &self.location_id {
            if &obs.location_id != loc {
                return false;
            }
        }
        if let Some(day) = self.day_of_week {
            if obs.day_of_week != Some(i64::from(day)) {
                return false;
            }
        }
        if let Some(interval) = self.time_interval {
            if obs.time_interval != Some(i64::from(interval)) {
                return false;
            }
        }
        if let Some(after) = self.observed_after {
            if obs.observed_at <= after {
                return false;
            }
        }
        true
    }
}
