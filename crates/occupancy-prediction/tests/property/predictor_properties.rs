use occupancy_core::models::{Observation, OccupancyLevel};
use occupancy_prediction::predictor::{self, blended_confidence, LevelCounts};
use proptest::prelude::*;
use test_fixtures::obs;

fn arb_level() -> impl Strategy<Value = OccupancyLevel> {
    prop_oneof![
        Just(OccupancyLevel::Low),
        Just(OccupancyLevel::Medium),
        Just(OccupancyLevel::High),
    ]
}

fn arb_observation() -> impl Strategy<Value = Observation> {
    (
        prop_oneof![Just("L1"), Just("L2")],
        -1i64..8,
        -1i64..50,
        arb_level(),
    )
        .prop_map(|(loc, day, interval, level)| obs(loc, day, interval, level))
}

// ── Confidence bounds ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn confidence_always_in_unit_interval(
        low in 0usize..50,
        medium in 0usize..50,
        high in 0usize..50,
        unlabelled in 0usize..50,
    ) {
        let score = LevelCounts::new(low, medium, high).with_unlabelled(unlabelled).score();
        let c = score.confidence.value();
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn winner_has_max_count(
        low in 0usize..50,
        medium in 0usize..50,
        high in 0usize..50,
    ) {
        let counts = LevelCounts::new(low, medium, high);
        let (level, count) = counts.winner();
        prop_assert_eq!(counts.get(level), count);
        prop_assert!(count >= low && count >= medium && count >= high);
        if high == count {
            prop_assert_eq!(level, OccupancyLevel::High);
        } else if low == count {
            prop_assert_eq!(level, OccupancyLevel::Low);
        }
    }
}

// ── Sample-size monotonicity ──────────────────────────────────────────────

proptest! {
    #[test]
    fn unanimous_confidence_grows_until_saturation(n in 1usize..10) {
        let smaller = blended_confidence(n, n).value();
        let larger = blended_confidence(n + 1, n + 1).value();
        prop_assert!(larger > smaller);
    }

    #[test]
    fn confidence_ignores_sample_size_past_saturation(n in 10usize..500) {
        let at_cap = blended_confidence(10, 10).value();
        prop_assert!((blended_confidence(n, n).value() - at_cap).abs() < 1e-12);
    }

    #[test]
    fn split_confidence_grows_until_saturation(half in 1usize..5) {
        // Even split between two levels keeps consensus at 0.5.
        let smaller = blended_confidence(half, half * 2).value();
        let larger = blended_confidence(half + 1, (half + 1) * 2).value();
        prop_assert!(larger > smaller);
    }
}

// ── Day vector shape ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn day_vector_always_has_48_ordered_cells(
        observations in prop::collection::vec(arb_observation(), 0..200),
        day in 0u8..7,
    ) {
        let prediction = predictor::predict_day(&observations, "L1", day);
        prop_assert!(prediction.is_complete());
        for (i, cell) in prediction.iter().enumerate() {
            prop_assert_eq!(cell.time_interval as usize, i);
            let c = cell.confidence.value();
            prop_assert!((0.0..=1.0).contains(&c));
            prop_assert!(cell.color.alpha >= 0.3);
        }
    }

    #[test]
    fn other_locations_never_influence_predictions(
        observations in prop::collection::vec(arb_observation(), 0..200),
        day in 0u8..7,
    ) {
        let only_l1: Vec<Observation> = observations
            .iter()
            .filter(|o| o.location_id == "L1")
            .cloned()
            .collect();
        prop_assert_eq!(
            predictor::predict_day(&observations, "L1", day),
            predictor::predict_day(&only_l1, "L1", day)
        );
    }
}
