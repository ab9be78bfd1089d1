use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, OccupancyLevel};
use crate::calendar::{day_of_week_of, time_interval_of};

/// One recorded occupancy reading.
///
/// Created once by the submission path and never mutated afterwards.
/// The bucket fields are optional because stored documents are not
/// validated; a record missing any of them matches no prediction cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(default)]
    pub id: String,
    pub location_id: String,
    pub observed_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient::level")]
    pub occupancy_level: Option<OccupancyLevel>,
    /// Sunday = 0 .. Saturday = 6.
    #[serde(default, deserialize_with = "lenient::int")]
    pub day_of_week: Option<i64>,
    /// `hour * 2 + minute / 30`.
    #[serde(default, deserialize_with = "lenient::int")]
    pub time_interval: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::uint",
        skip_serializing_if = "Option::is_none"
    )]
    pub wait_time_minutes: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub reporter_id: Option<String>,
}

impl Observation {
    /// Build an observation, deriving day and interval from the wall-clock
    /// time of `observed_at` in its own timezone.
    pub fn new<Tz: TimeZone>(
        location_id: impl Into<String>,
        observed_at: DateTime<Tz>,
        level: OccupancyLevel,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            location_id: location_id.into(),
            day_of_week: Some(i64::from(day_of_week_of(&observed_at))),
            time_interval: Some(i64::from(time_interval_of(&observed_at))),
            observed_at: observed_at.with_timezone(&Utc),
            occupancy_level: Some(level),
            wait_time_minutes: None,
            reporter_id: None,
        }
    }

    pub fn with_wait_time(mut self, minutes: u32) -> Self {
        self.wait_time_minutes = Some(minutes);
        self
    }

    pub fn with_reporter(mut self, reporter_id: impl Into<String>) -> Self {
        self.reporter_id = Some(reporter_id.into());
        self
    }

    /// Exact match on location, day, and interval.
    pub fn matches(&self, location_id: &str, day_of_week: u8, time_interval: u8) -> bool {
        self.location_id == location_id
            && self.day_of_week == Some(i64::from(day_of_week))
            && self.time_interval == Some(i64::from(time_interval))
    }

    /// Whether every field the predictor reads is present and in range.
    pub fn is_well_formed(&self) -> bool {
        self.occupancy_level.is_some()
            && matches!(self.day_of_week, Some(0..=6))
            && matches!(self.time_interval, Some(0..=47))
    }
}
