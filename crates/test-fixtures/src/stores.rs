//! In-memory stand-ins for the external observation store and the keyed
//! cache store, with failure injection and call counters.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use dashmap::DashMap;

use occupancy_core::errors::StoreError;
use occupancy_core::models::{CacheEntry, CacheKey, Observation, ObservationFilter};
use occupancy_core::traits::{ICacheStore, IObservationStore};

/// Append-only observation collection.
#[derive(Debug, Default)]
pub struct InMemoryObservationStore {
    observations: RwLock<Vec<Observation>>,
    failure: Mutex<Option<StoreError>>,
    queries: AtomicUsize,
}

impl InMemoryObservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observations(observations: Vec<Observation>) -> Self {
        Self {
            observations: RwLock::new(observations),
            ..Default::default()
        }
    }

    pub fn append(&self, observation: Observation) {
        self.observations.write().unwrap().push(observation);
    }

    pub fn extend(&self, observations: impl IntoIterator<Item = Observation>) {
        self.observations.write().unwrap().extend(observations);
    }

    /// Every following query fails with `error` until cleared.
    pub fn fail_with(&self, error: StoreError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Number of `query` calls so far, failed ones included.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.observations.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IObservationStore for InMemoryObservationStore {
    fn query(&self, filter: &ObservationFilter) -> Result<Vec<Observation>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        let mut matches: Vec<Observation> = self
            .observations
            .read()
            .unwrap()
            .iter()
            .filter(|o| filter.accepts(o))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.observed_at.cmp(&a.observed_at));
        Ok(matches)
    }
}

/// Keyed document store for cache entries.
#[derive(Debug, Default)]
pub struct InMemoryCacheStore {
    entries: DashMap<String, CacheEntry>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Successful `put` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Read a document without going through the trait.
    pub fn raw(&self, document_key: &str) -> Option<CacheEntry> {
        self.entries.get(document_key).map(|e| e.clone())
    }

    /// Seed a document directly.
    pub fn insert_raw(&self, document_key: &str, entry: CacheEntry) {
        self.entries.insert(document_key.to_string(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ICacheStore for InMemoryCacheStore {
    fn get(&self, key: &CacheKey) -> Result<Option<CacheEntry>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                reason: "injected read failure".into(),
            });
        }
        Ok(self.entries.get(&key.as_document_key()).map(|e| e.clone()))
    }

    fn put(&self, key: &CacheKey, entry: &CacheEntry) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                reason: "injected write failure".into(),
            });
        }
        self.entries.insert(key.as_document_key(), entry.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
