use chrono::{DateTime, Duration, TimeZone, Utc};

use occupancy_core::models::{Observation, OccupancyLevel};

/// Observation with explicit buckets, observed at a fixed reference instant.
pub fn obs(location_id: &str, day_of_week: i64, time_interval: i64, level: OccupancyLevel) -> Observation {
    ObservationBuilder::new(location_id)
        .day(day_of_week)
        .interval(time_interval)
        .level(level)
        .build()
}

/// Observation whose buckets derive from `at` (UTC wall clock).
pub fn obs_at(location_id: &str, at: DateTime<Utc>, level: OccupancyLevel) -> Observation {
    Observation::new(location_id, at, level)
}

/// Builder for hand-shaped, possibly malformed, observations.
#[derive(Debug, Clone)]
pub struct ObservationBuilder {
    inner: Observation,
}

impl ObservationBuilder {
    pub fn new(location_id: &str) -> Self {
        Self {
            inner: Observation {
                id: String::new(),
                location_id: location_id.to_string(),
                observed_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
                occupancy_level: None,
                day_of_week: None,
                time_interval: None,
                wait_time_minutes: None,
                reporter_id: None,
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.inner.id = id.to_string();
        self
    }

    pub fn day(mut self, day_of_week: i64) -> Self {
        self.inner.day_of_week = Some(day_of_week);
        self
    }

    pub fn interval(mut self, time_interval: i64) -> Self {
        self.inner.time_interval = Some(time_interval);
        self
    }

    pub fn level(mut self, level: OccupancyLevel) -> Self {
        self.inner.occupancy_level = Some(level);
        self
    }

    pub fn observed_at(mut self, at: DateTime<Utc>) -> Self {
        self.inner.observed_at = at;
        self
    }

    pub fn days_before(mut self, reference: DateTime<Utc>, days: i64) -> Self {
        self.inner.observed_at = reference - Duration::days(days);
        self
    }

    pub fn build(self) -> Observation {
        self.inner
    }
}
