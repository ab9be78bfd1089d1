//! Prediction cache: freshness window, two-tier lookup, fail-open behavior.

use std::sync::Arc;

use chrono::Duration;
use occupancy_core::config::CacheConfig;
use occupancy_core::models::{CacheEntry, DayPrediction, OccupancyLevel};
use occupancy_core::traits::Clock;
use occupancy_prediction::predictor;
use occupancy_prediction::PredictionCache;
use test_fixtures::{obs, InMemoryCacheStore, ManualClock};

fn setup() -> (
    PredictionCache<Arc<InMemoryCacheStore>>,
    Arc<InMemoryCacheStore>,
    Arc<ManualClock>,
) {
    let store = Arc::new(InMemoryCacheStore::new());
    let clock = Arc::new(ManualClock::monday_morning());
    let cache = PredictionCache::with_clock(store.clone(), &CacheConfig::default(), clock.clone());
    (cache, store, clock)
}

fn sample_day(location_id: &str, day: u8) -> DayPrediction {
    let observations = vec![
        obs(location_id, i64::from(day), 24, OccupancyLevel::High),
        obs(location_id, i64::from(day), 25, OccupancyLevel::Low),
    ];
    predictor::predict_day(&observations, location_id, day)
}

#[test]
fn put_then_get_returns_identical_predictions() {
    let (cache, store, _clock) = setup();
    let day = sample_day("L1", 1);
    cache.put("L1", 1, day.clone(), 2);

    assert_eq!(cache.get("L1", 1), Some(day.clone()));

    let stored = store.raw("L1_1").expect("written to backing store");
    assert_eq!(stored.predictions, day);
    assert_eq!(stored.source_observation_count, 2);
}

#[test]
fn missing_key_is_absent() {
    let (cache, _store, _clock) = setup();
    assert!(cache.get("L1", 1).is_none());
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(cache.stats().hits, 0);
}

#[test]
fn entries_expire_after_ttl_but_stay_in_storage() {
    let (cache, store, clock) = setup();
    cache.put("L1", 1, sample_day("L1", 1), 2);

    clock.advance(Duration::hours(5) + Duration::minutes(59));
    assert!(cache.get("L1", 1).is_some());

    clock.advance(Duration::minutes(1));
    assert!(cache.get("L1", 1).is_none(), "6h old entry must not be served");
    assert!(store.raw("L1_1").is_some(), "stale entry is not deleted");

    let stats = cache.stats();
    assert_eq!(stats.stale, 1);
    assert_eq!(stats.hits, 1);
}

#[test]
fn stale_backing_entry_is_not_served_after_restart() {
    let (_, store, clock) = setup();
    let old = CacheEntry {
        predictions: sample_day("L1", 1),
        computed_at: clock.now() - Duration::hours(7),
        source_observation_count: 2,
    };
    store.insert_raw("L1_1", old);

    let cache = PredictionCache::with_clock(store.clone(), &CacheConfig::default(), clock.clone());
    assert!(cache.get("L1", 1).is_none());
    assert_eq!(cache.stats().stale, 1);
}

#[test]
fn backing_hit_is_promoted_to_local_tier() {
    let (_, store, clock) = setup();
    let entry = CacheEntry {
        predictions: sample_day("L1", 2),
        computed_at: clock.now(),
        source_observation_count: 2,
    };
    store.insert_raw("L1_2", entry.clone());

    let cache = PredictionCache::with_clock(store.clone(), &CacheConfig::default(), clock.clone());
    assert_eq!(cache.get_entry("L1", 2), Some(entry.clone()));

    // Served from the local tier even though the backing store now fails.
    store.set_fail_reads(true);
    assert_eq!(cache.get_entry("L1", 2), Some(entry));
}

#[test]
fn read_failure_is_a_miss() {
    let (cache, store, _clock) = setup();
    store.set_fail_reads(true);
    assert!(cache.get("L1", 1).is_none());
    let stats = cache.stats();
    assert_eq!(stats.read_failures, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn write_failure_is_swallowed() {
    let (cache, store, _clock) = setup();
    store.set_fail_writes(true);
    let day = sample_day("L1", 1);
    cache.put("L1", 1, day.clone(), 2);

    assert_eq!(cache.stats().write_failures, 1);
    assert!(store.raw("L1_1").is_none());
    // The local tier still remembers it.
    assert_eq!(cache.get("L1", 1), Some(day));
}

#[test]
fn incomplete_document_is_treated_as_miss() {
    let (cache, store, clock) = setup();
    let mut day = sample_day("L1", 1);
    day.cells.truncate(10);
    store.insert_raw(
        "L1_1",
        CacheEntry {
            predictions: day,
            computed_at: clock.now(),
            source_observation_count: 2,
        },
    );
    assert!(cache.get("L1", 1).is_none());
    assert_eq!(cache.stats().read_failures, 1);
}

#[test]
fn later_put_wins() {
    let (cache, store, clock) = setup();
    cache.put("L1", 1, sample_day("L1", 1), 2);
    clock.advance(Duration::minutes(10));
    let newer = predictor::predict_day(&[], "L1", 1);
    cache.put("L1", 1, newer.clone(), 0);

    assert_eq!(cache.get("L1", 1), Some(newer));
    let stored = store.raw("L1_1").unwrap();
    assert_eq!(stored.source_observation_count, 0);
    assert_eq!(stored.computed_at, clock.now());
}

#[test]
fn keys_are_independent() {
    let (cache, _store, _clock) = setup();
    cache.put("L1", 1, sample_day("L1", 1), 2);
    assert!(cache.get("L1", 2).is_none());
    assert!(cache.get("L2", 1).is_none());
}

#[test]
fn local_invalidation_falls_back_to_backing_store() {
    let (cache, store, _clock) = setup();
    cache.put("L1", 1, sample_day("L1", 1), 2);
    cache.invalidate_local();
    assert!(cache.get("L1", 1).is_some());

    cache.invalidate_local();
    store.set_fail_reads(true);
    assert!(cache.get("L1", 1).is_none());
}

#[test]
fn custom_ttl_is_honored() {
    let store = Arc::new(InMemoryCacheStore::new());
    let clock = Arc::new(ManualClock::monday_morning());
    let config = CacheConfig {
        ttl_hours: 1,
        ..Default::default()
    };
    let cache = PredictionCache::with_clock(store, &config, clock.clone());
    assert_eq!(cache.ttl(), Duration::hours(1));

    cache.put("L1", 1, sample_day("L1", 1), 2);
    clock.advance(Duration::minutes(61));
    assert!(cache.get("L1", 1).is_none());
}

#[test]
fn hit_rate() {
    let (cache, _store, _clock) = setup();
    assert_eq!(cache.stats().hit_rate(), 0.0);
    cache.put("L1", 1, sample_day("L1", 1), 2);
    cache.get("L1", 1);
    cache.get("L1", 2);
    assert!((cache.stats().hit_rate() - 0.5).abs() < 1e-12);
}

#[test]
fn backing_document_shape() {
    let (cache, store, _clock) = setup();
    cache.put("L1", 1, predictor::predict_day(&[], "L1", 1), 0);
    let json = serde_json::to_value(store.raw("L1_1").unwrap()).unwrap();

    assert!(json["computedAt"].is_string());
    assert_eq!(json["sourceObservationCount"], 0);
    let first = &json["predictions"]["cells"][0];
    assert_eq!(first["timeSlot"], "00:00-00:30");
    assert_eq!(first["predictedOccupancy"], "medium");
    assert_eq!(first["confidence"], 0.1);
}
