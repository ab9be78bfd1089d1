//! Span definitions per operation: prediction, cache lookup, observation fetch.

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($location_id:expr, $day_of_week:expr) => {
        tracing::info_span!(
            $crate::names::PREDICTION,
            location_id = %$location_id,
            day_of_week = $day_of_week
        )
    };
}

/// Create a cache span.
#[macro_export]
macro_rules! cache_span {
    ($key:expr) => {
        tracing::debug_span!($crate::names::CACHE, key = %$key)
    };
}

/// Create an observation fetch span.
#[macro_export]
macro_rules! fetch_span {
    ($location_id:expr, $lookback_days:expr) => {
        tracing::info_span!(
            $crate::names::FETCH,
            location_id = ?$location_id,
            lookback_days = $lookback_days
        )
    };
}

/// Span names, shared by the macros above and by subscribers that filter on them.
pub mod names {
    pub const PREDICTION: &str = "occupancy.prediction";
    pub const CACHE: &str = "occupancy.cache";
    pub const FETCH: &str = "occupancy.fetch";
}
