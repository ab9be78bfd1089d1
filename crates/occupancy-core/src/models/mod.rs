pub mod cache_entry;
pub mod confidence;
pub mod filter;
pub mod lenient;
pub mod observation;
pub mod occupancy_level;
pub mod prediction;

pub use cache_entry::{CacheEntry, CacheKey};
pub use confidence::Confidence;
pub use filter::ObservationFilter;
pub use observation::Observation;
pub use occupancy_level::OccupancyLevel;
pub use prediction::{CellColor, DayPrediction, PredictionCell};
