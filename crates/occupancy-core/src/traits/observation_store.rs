use std::sync::Arc;

use crate::errors::StoreError;
use crate::models::{Observation, ObservationFilter};

/// Append-only collection of observations, owned outside the engine.
///
/// Implementations must return matches ordered by `observed_at`, newest first.
pub trait IObservationStore: Send + Sync {
    fn query(&self, filter: &ObservationFilter) -> Result<Vec<Observation>, StoreError>;
}

impl<T: IObservationStore + ?Sized> IObservationStore for Arc<T> {
    fn query(&self, filter: &ObservationFilter) -> Result<Vec<Observation>, StoreError> {
        (**self).query(filter)
    }
}

impl<T: IObservationStore + ?Sized> IObservationStore for &T {
    fn query(&self, filter: &ObservationFilter) -> Result<Vec<Observation>, StoreError> {
        (**self).query(filter)
    }
}
