//! # occupancy-prediction
//!
//! Predicts how crowded a location will be for each 30-minute interval of a
//! day, from historical observations bucketed by (location, day-of-week,
//! interval).
//!
//! ## Scoring
//!
//! | Step | Rule |
//! |------|------|
//! | No matching records | `medium`, confidence 0.1 |
//! | Winner | most frequent level; ties go to high, then low, then medium |
//! | Confidence | `0.7 * winner/total + 0.3 * min(total/10, 1)` |
//!
//! ## Caching
//!
//! Day vectors are memoized per (location, day-of-week) for a configurable
//! TTL (6 hours by default) in an in-process tier backed by an external
//! keyed store. Cache failures never fail a prediction request.

pub mod cache;
pub mod engine;
pub mod predictor;
pub mod query;

pub use cache::{CacheStats, PredictionCache};
pub use engine::PredictionService;
pub use predictor::{predict_cell, predict_day, CellScore, LevelCounts, Predictor};
pub use query::fetch_recent;
