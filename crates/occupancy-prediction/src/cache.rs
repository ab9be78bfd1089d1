//! PredictionCache — day vectors memoized per (location, day-of-week).
//!
//! Two tiers: an in-process `moka` cache in front of the external keyed
//! store. Freshness is always judged on the entry's `computed_at`, so an
//! entry that aged out is never served from either tier. Stale entries are
//! left in the backing store until the next write overwrites them.
//!
//! The cache fails open: a backing read error is a miss, a backing write
//! error is logged and dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Duration;
use moka::sync::Cache;
use serde::{Deserialize, Serialize};

use occupancy_core::config::CacheConfig;
use occupancy_core::models::{CacheEntry, CacheKey, DayPrediction};
use occupancy_core::traits::{Clock, ICacheStore, SystemClock};
use occupancy_observability::cache_span;

/// Counter snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    /// Every lookup that returned nothing, whatever the reason.
    pub misses: u64,
    /// Misses caused by an entry older than the TTL.
    pub stale: u64,
    /// Misses caused by a backing store error or an unusable document.
    pub read_failures: u64,
    pub write_failures: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    stale: AtomicU64,
    read_failures: AtomicU64,
    write_failures: AtomicU64,
}

/// Time-boxed prediction cache over an [`ICacheStore`].
pub struct PredictionCache<C: ICacheStore> {
    store: C,
    local: Cache<CacheKey, CacheEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    counters: Counters,
}

impl<C: ICacheStore> PredictionCache<C> {
    /// Create a cache using the system clock.
    pub fn new(store: C, config: &CacheConfig) -> Self {
        Self::with_clock(store, config, Arc::new(SystemClock))
    }

    pub fn with_clock(store: C, config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let local = Cache::builder()
            .max_capacity(config.l1_max_entries)
            .time_to_live(std::time::Duration::from_secs(
                u64::from(config.ttl_hours) * 3600,
            ))
            .build();
        Self {
            store,
            local,
            ttl: config.ttl(),
            clock,
            counters: Counters::default(),
        }
    }

    /// Fresh predictions for the key, if any.
    pub fn get(&self, location_id: &str, day_of_week: u8) -> Option<DayPrediction> {
        self.get_entry(location_id, day_of_week)
            .map(|entry| entry.predictions)
    }

    /// Fresh entry for the key, with its metadata.
    pub fn get_entry(&self, location_id: &str, day_of_week: u8) -> Option<CacheEntry> {
        let key = CacheKey::new(location_id, day_of_week);
        let _span = cache_span!(key).entered();
        let now = self.clock.now();

        if let Some(entry) = self.local.get(&key) {
            if entry.is_fresh(now, self.ttl) {
                tracing::debug!(key = %key, "local cache hit");
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry);
            }
            // Another writer may have refreshed the backing copy.
            self.local.invalidate(&key);
        }

        match self.store.get(&key) {
            Ok(Some(entry)) if !entry.predictions.is_complete() => {
                tracing::warn!(key = %key, cells = entry.predictions.len(), "ignoring incomplete cached day vector");
                self.record_miss(&self.counters.read_failures);
                None
            }
            Ok(Some(entry)) if entry.is_fresh(now, self.ttl) => {
                tracing::debug!(key = %key, "backing cache hit");
                self.local.insert(key, entry.clone());
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry)
            }
            Ok(Some(entry)) => {
                tracing::debug!(
                    key = %key,
                    age_minutes = entry.age(now).num_minutes(),
                    "cached day vector is stale"
                );
                self.record_miss(&self.counters.stale);
                None
            }
            Ok(None) => {
                self.counters.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "cache read failed, treating as miss");
                self.record_miss(&self.counters.read_failures);
                None
            }
        }
    }

    /// Overwrite the entry for the key, stamped with the current time.
    pub fn put(
        &self,
        location_id: &str,
        day_of_week: u8,
        predictions: DayPrediction,
        source_observation_count: usize,
    ) {
        let key = CacheKey::new(location_id, day_of_week);
        let _span = cache_span!(key).entered();
        let entry = CacheEntry {
            predictions,
            computed_at: self.clock.now(),
            source_observation_count,
        };

        if let Err(e) = self.store.put(&key, &entry) {
            tracing::warn!(key = %key, error = %e, "cache write failed, result not persisted");
            self.counters.write_failures.fetch_add(1, Ordering::Relaxed);
        }
        self.local.insert(key, entry);
    }

    /// Drop the in-process tier; the backing store is untouched.
    pub fn invalidate_local(&self) {
        self.local.invalidate_all();
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            stale: self.counters.stale.load(Ordering::Relaxed),
            read_failures: self.counters.read_failures.load(Ordering::Relaxed),
            write_failures: self.counters.write_failures.load(Ordering::Relaxed),
        }
    }

    fn record_miss(&self, reason: &AtomicU64) {
        reason.fetch_add(1, Ordering::Relaxed);
        self.counters.misses.fetch_add(1, Ordering::Relaxed);
    }
}
