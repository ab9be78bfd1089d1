//! Frequency-count scoring over (location, day-of-week, interval) cells.
//!
//! Everything here is a pure function of the observation slice passed in;
//! nothing is retained between calls.

use serde::{Deserialize, Serialize};

use occupancy_core::calendar::time_slot_label;
use occupancy_core::constants::{
    CONSENSUS_WEIGHT, INTERVALS_PER_DAY, NO_DATA_CONFIDENCE, SAMPLE_SATURATION, SAMPLE_WEIGHT,
};
use occupancy_core::models::{
    CellColor, Confidence, DayPrediction, Observation, OccupancyLevel, PredictionCell,
};

/// Per-level record counts for one cell.
///
/// `unlabelled` holds matching records whose level is missing or unknown.
/// They vote for no level but still count toward the cell's total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    #[serde(default)]
    pub unlabelled: usize,
}

impl LevelCounts {
    pub fn new(low: usize, medium: usize, high: usize) -> Self {
        Self {
            low,
            medium,
            high,
            unlabelled: 0,
        }
    }

    pub fn with_unlabelled(mut self, unlabelled: usize) -> Self {
        self.unlabelled = unlabelled;
        self
    }

    /// Count one matching record.
    pub fn record(&mut self, level: Option<OccupancyLevel>) {
        match level {
            Some(OccupancyLevel::Low) => self.low += 1,
            Some(OccupancyLevel::Medium) => self.medium += 1,
            Some(OccupancyLevel::High) => self.high += 1,
            None => self.unlabelled += 1,
        }
    }

    pub fn get(&self, level: OccupancyLevel) -> usize {
        match level {
            OccupancyLevel::Low => self.low,
            OccupancyLevel::Medium => self.medium,
            OccupancyLevel::High => self.high,
        }
    }

    /// Every matching record, labelled or not.
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.unlabelled
    }

    /// Most frequent level and its count.
    ///
    /// Ties are settled in the fixed order high, low, medium: high wins any
    /// tie it is part of, low wins a tie with medium, and medium takes
    /// whatever is left. The order is kept for compatibility with
    /// predictions already shown to users. A cell with only unlabelled
    /// records is a three-way tie at zero and so goes to high.
    pub fn winner(&self) -> (OccupancyLevel, usize) {
        let max = self.low.max(self.medium).max(self.high);
        let level = if self.high == max {
            OccupancyLevel::High
        } else if self.low == max {
            OccupancyLevel::Low
        } else {
            OccupancyLevel::Medium
        };
        (level, max)
    }

    /// Score for this cell; the no-data default when nothing was counted.
    pub fn score(&self) -> CellScore {
        let total = self.total();
        if total == 0 {
            return CellScore::no_data();
        }
        let (occupancy, winning) = self.winner();
        CellScore {
            occupancy,
            confidence: blended_confidence(winning, total),
            sample_size: total,
        }
    }
}

/// Point prediction for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellScore {
    pub occupancy: OccupancyLevel,
    pub confidence: Confidence,
    /// Matching records the score was computed from.
    pub sample_size: usize,
}

impl CellScore {
    pub fn no_data() -> Self {
        Self {
            occupancy: OccupancyLevel::Medium,
            confidence: Confidence::new(NO_DATA_CONFIDENCE),
            sample_size: 0,
        }
    }

    pub fn has_data(&self) -> bool {
        self.sample_size > 0
    }
}

/// `0.7 * consensus + 0.3 * saturating sample size`, both terms in [0, 1].
pub fn blended_confidence(winning: usize, total: usize) -> Confidence {
    if total == 0 {
        return Confidence::new(NO_DATA_CONFIDENCE);
    }
    let consensus = winning as f64 / total as f64;
    let sample = (total as f64 / SAMPLE_SATURATION as f64).min(1.0);
    Confidence::new(CONSENSUS_WEIGHT * consensus + SAMPLE_WEIGHT * sample)
}

/// Count the records matching one cell.
pub fn tally(
    observations: &[Observation],
    location_id: &str,
    day_of_week: u8,
    time_interval: u8,
) -> LevelCounts {
    let mut counts = LevelCounts::default();
    for obs in observations
        .iter()
        .filter(|o| o.matches(location_id, day_of_week, time_interval))
    {
        counts.record(obs.occupancy_level);
    }
    counts
}

/// Counts for every interval of a day in a single pass.
pub fn tally_day(
    observations: &[Observation],
    location_id: &str,
    day_of_week: u8,
) -> Vec<LevelCounts> {
    let mut counts = vec![LevelCounts::default(); usize::from(INTERVALS_PER_DAY)];
    let day = i64::from(day_of_week);
    for obs in observations {
        if obs.location_id != location_id || obs.day_of_week != Some(day) {
            continue;
        }
        let Some(interval) = obs.time_interval else {
            continue;
        };
        if let Some(slot) = usize::try_from(interval).ok().and_then(|i| counts.get_mut(i)) {
            slot.record(obs.occupancy_level);
        }
    }
    counts
}

/// Predict one cell.
pub fn predict_cell(
    observations: &[Observation],
    location_id: &str,
    day_of_week: u8,
    time_interval: u8,
) -> CellScore {
    tally(observations, location_id, day_of_week, time_interval).score()
}

/// Predict all 48 intervals of a day, in interval order.
pub fn predict_day(observations: &[Observation], location_id: &str, day_of_week: u8) -> DayPrediction {
    let cells = tally_day(observations, location_id, day_of_week)
        .into_iter()
        .enumerate()
        .map(|(interval, counts)| build_cell(interval as u8, counts.score()))
        .collect();
    DayPrediction {
        location_id: location_id.to_string(),
        day_of_week,
        cells,
    }
}

fn build_cell(time_interval: u8, score: CellScore) -> PredictionCell {
    PredictionCell {
        time_interval,
        time_slot: time_slot_label(time_interval),
        predicted_occupancy: score.occupancy,
        confidence: score.confidence,
        color: CellColor::for_prediction(score.occupancy, score.confidence),
    }
}

/// Train-then-query view over a borrowed observation slice.
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'a> {
    observations: &'a [Observation],
}

impl<'a> Predictor<'a> {
    /// No validation happens here; malformed records simply never match.
    pub fn train(observations: &'a [Observation]) -> Self {
        Self { observations }
    }

    pub fn predict_cell(&self, location_id: &str, day_of_week: u8, time_interval: u8) -> CellScore {
        predict_cell(self.observations, location_id, day_of_week, time_interval)
    }

    pub fn predict_day(&self, location_id: &str, day_of_week: u8) -> DayPrediction {
        predict_day(self.observations, location_id, day_of_week)
    }

    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_way_tie_goes_to_high() {
        assert_eq!(LevelCounts::new(3, 3, 3).winner().0, OccupancyLevel::High);
    }

    #[test]
    fn low_medium_tie_goes_to_low() {
        assert_eq!(LevelCounts::new(5, 5, 0).winner().0, OccupancyLevel::Low);
    }

    #[test]
    fn high_medium_tie_goes_to_high() {
        assert_eq!(LevelCounts::new(0, 4, 4).winner().0, OccupancyLevel::High);
    }

    #[test]
    fn medium_only_wins_outright() {
        assert_eq!(LevelCounts::new(0, 5, 0).winner().0, OccupancyLevel::Medium);
        assert_eq!(LevelCounts::new(1, 5, 2).winner().0, OccupancyLevel::Medium);
    }

    #[test]
    fn empty_counts_score_no_data() {
        let score = LevelCounts::default().score();
        assert_eq!(score.occupancy, OccupancyLevel::Medium);
        assert_eq!(score.confidence.value(), 0.1);
        assert!(!score.has_data());
    }

    #[test]
    fn unlabelled_records_dilute_consensus() {
        // 0.7 * 2/4 + 0.3 * 0.4
        let score = LevelCounts::new(0, 0, 2).with_unlabelled(2).score();
        assert_eq!(score.occupancy, OccupancyLevel::High);
        assert_eq!(score.sample_size, 4);
        assert!((score.confidence.value() - 0.47).abs() < 1e-12);
    }

    #[test]
    fn only_unlabelled_records_tie_at_zero() {
        // 0.7 * 0/3 + 0.3 * 0.3
        let score = LevelCounts::default().with_unlabelled(3).score();
        assert_eq!(score.occupancy, OccupancyLevel::High);
        assert!(score.has_data());
        assert!((score.confidence.value() - 0.09).abs() < 1e-12);
    }

    #[test]
    fn saturated_unanimous_is_full_confidence() {
        let score = LevelCounts::new(0, 0, 10).score();
        assert!((score.confidence.value() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_record_confidence() {
        // 0.7 * 1 + 0.3 * 0.1
        let c = blended_confidence(1, 1).value();
        assert!((c - 0.73).abs() < 1e-12);
    }
}
