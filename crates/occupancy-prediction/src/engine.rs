//! PredictionService — cache lookup, observation fetch, scoring, write-back.
//!
//! No locking or request coalescing: two concurrent misses for the same key
//! both recompute and the later write wins.

use std::sync::Arc;

use chrono::Duration;

use occupancy_core::calendar::{current_day_of_week, current_time_interval};
use occupancy_core::config::OccupancyConfig;
use occupancy_core::constants::{DAYS_PER_WEEK, INTERVALS_PER_DAY};
use occupancy_core::errors::{OccupancyError, OccupancyResult};
use occupancy_core::models::{DayPrediction, Observation, PredictionCell};
use occupancy_core::traits::{Clock, ICacheStore, IObservationStore, SystemClock};
use occupancy_observability::prediction_span;

use crate::cache::PredictionCache;
use crate::predictor;
use crate::query::fetch_recent;

/// Entry point for display layers.
pub struct PredictionService<S: IObservationStore, C: ICacheStore> {
    store: S,
    cache: PredictionCache<C>,
    lookback: Duration,
    clock: Arc<dyn Clock>,
}

impl<S: IObservationStore, C: ICacheStore> PredictionService<S, C> {
    /// Create a service using the system clock.
    pub fn new(store: S, cache_store: C, config: &OccupancyConfig) -> Self {
        Self::with_clock(store, cache_store, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        store: S,
        cache_store: C,
        config: &OccupancyConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            cache: PredictionCache::with_clock(cache_store, &config.cache, clock.clone()),
            lookback: config.prediction.lookback(),
            clock,
        }
    }

    pub fn cache(&self) -> &PredictionCache<C> {
        &self.cache
    }

    /// The 48-cell day vector, from cache when fresh.
    pub fn get_predictions(
        &self,
        location_id: &str,
        day_of_week: u8,
    ) -> OccupancyResult<DayPrediction> {
        let _span = prediction_span!(location_id, day_of_week).entered();
        if let Some(cached) = self.cache.get(location_id, day_of_week) {
            return Ok(cached);
        }
        self.recompute(location_id, day_of_week)
    }

    /// Recompute and re-cache, ignoring any cached vector.
    pub fn refresh(&self, location_id: &str, day_of_week: u8) -> OccupancyResult<DayPrediction> {
        let _span = prediction_span!(location_id, day_of_week).entered();
        self.recompute(location_id, day_of_week)
    }

    /// Day vectors for Sunday through Saturday. Observations are fetched at
    /// most once, and only if some day misses the cache.
    pub fn predict_week(&self, location_id: &str) -> OccupancyResult<Vec<DayPrediction>> {
        let mut week: Vec<Option<DayPrediction>> = (0..DAYS_PER_WEEK)
            .map(|day| self.cache.get(location_id, day))
            .collect();

        if week.iter().any(Option::is_none) {
            let observations = self.fetch(location_id)?;
            for (day, slot) in (0..DAYS_PER_WEEK).zip(week.iter_mut()) {
                if slot.is_none() {
                    *slot = Some(self.score_and_store(&observations, location_id, day));
                }
            }
        }

        Ok(week.into_iter().flatten().collect())
    }

    /// Prediction for one interval of a day.
    pub fn cell_at(
        &self,
        location_id: &str,
        day_of_week: u8,
        time_interval: u8,
    ) -> OccupancyResult<PredictionCell> {
        if time_interval >= INTERVALS_PER_DAY {
            return Err(OccupancyError::InvalidInterval {
                interval: i64::from(time_interval),
            });
        }
        let day = self.get_predictions(location_id, day_of_week)?;
        day.cell(time_interval)
            .cloned()
            .ok_or(OccupancyError::InvalidInterval {
                interval: i64::from(time_interval),
            })
    }

    /// Prediction for the current local day and interval.
    pub fn current_cell(&self, location_id: &str) -> OccupancyResult<PredictionCell> {
        self.cell_at(location_id, current_day_of_week(), current_time_interval())
    }

    fn recompute(&self, location_id: &str, day_of_week: u8) -> OccupancyResult<DayPrediction> {
        let observations = self.fetch(location_id)?;
        Ok(self.score_and_store(&observations, location_id, day_of_week))
    }

    fn fetch(&self, location_id: &str) -> OccupancyResult<Vec<Observation>> {
        fetch_recent(&self.store, Some(location_id), self.lookback, self.clock.now())
    }

    fn score_and_store(
        &self,
        observations: &[Observation],
        location_id: &str,
        day_of_week: u8,
    ) -> DayPrediction {
        let day = predictor::predict_day(observations, location_id, day_of_week);
        tracing::info!(
            location_id,
            day_of_week,
            observations = observations.len(),
            "recomputed day predictions"
        );
        self.cache
            .put(location_id, day_of_week, day.clone(), observations.len());
        day
    }
}
