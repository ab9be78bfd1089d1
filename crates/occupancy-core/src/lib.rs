//! # occupancy-core
//!
//! Foundation crate for the occupancy prediction engine.
//! Defines the observation and prediction types, the store traits,
//! errors, config, constants, and the calendar helpers that map wall-clock
//! time onto (day-of-week, 30-minute interval) buckets.
//! Every other crate in the workspace depends on this.

pub mod calendar;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use calendar::{current_day_of_week, current_time_interval, time_slot_label};
pub use config::OccupancyConfig;
pub use errors::{OccupancyError, OccupancyResult};
pub use models::{
    CacheEntry, CacheKey, CellColor, Confidence, DayPrediction, Observation, ObservationFilter,
    OccupancyLevel, PredictionCell,
};
