//! Observation query adapter: the rolling lookback window, newest first.

use chrono::{DateTime, Duration, Utc};

use occupancy_core::errors::{OccupancyError, OccupancyResult};
use occupancy_core::models::{Observation, ObservationFilter};
use occupancy_core::traits::IObservationStore;
use occupancy_observability::fetch_span;

/// Fetch observations newer than `now - lookback` for one location, or for
/// every location when `location_id` is `None`.
///
/// An empty window is a valid result. Store errors come back as
/// [`OccupancyError::FetchFailed`] and are not retried.
pub fn fetch_recent<S: IObservationStore + ?Sized>(
    store: &S,
    location_id: Option<&str>,
    lookback: Duration,
    now: DateTime<Utc>,
) -> OccupancyResult<Vec<Observation>> {
    let _span = fetch_span!(location_id, lookback.num_days()).entered();

    let filter = ObservationFilter {
        location_id: location_id.map(str::to_string),
        observed_after: Some(now - lookback),
        ..Default::default()
    };

    let mut observations = store
        .query(&filter)
        .map_err(|e| OccupancyError::fetch_failed(location_id, e))?;

    // Stable, so equal timestamps keep the store's order.
    observations.sort_by(|a, b| b.observed_at.cmp(&a.observed_at));

    tracing::debug!(
        count = observations.len(),
        malformed = observations.iter().filter(|o| !o.is_well_formed()).count(),
        "fetched observations"
    );
    Ok(observations)
}
