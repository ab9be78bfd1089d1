use serde::{Deserialize, Serialize};

use super::{Confidence, OccupancyLevel};
use crate::constants::{INTERVALS_PER_DAY, MIN_COLOR_ALPHA};

/// RGBA rendering hint for a prediction cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl CellColor {
    /// Green for low, orange for medium, red for high; alpha follows
    /// confidence with a floor of 0.3.
    pub fn for_prediction(level: OccupancyLevel, confidence: Confidence) -> Self {
        let (r, g, b) = match level {
            OccupancyLevel::Low => (34, 197, 94),
            OccupancyLevel::Medium => (249, 115, 22),
            OccupancyLevel::High => (239, 68, 68),
        };
        Self {
            r,
            g,
            b,
            alpha: confidence.value().max(MIN_COLOR_ALPHA),
        }
    }

    /// CSS `rgba(...)` form, alpha rounded to two decimals.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, self.alpha)
    }
}

/// Prediction for one (location, day, interval) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionCell {
    pub time_interval: u8,
    pub time_slot: String,
    pub predicted_occupancy: OccupancyLevel,
    pub confidence: Confidence,
    pub color: CellColor,
}

/// The 48 ordered cells for one (location, day-of-week) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPrediction {
    pub location_id: String,
    pub day_of_week: u8,
    pub cells: Vec<PredictionCell>,
}

impl DayPrediction {
    /// Exactly one cell per interval, in interval order.
    pub fn is_complete(&self) -> bool {
        self.cells.len() == usize::from(INTERVALS_PER_DAY)
            && self
                .cells
                .iter()
                .enumerate()
                .all(|(i, c)| usize::from(c.time_interval) == i)
    }

    pub fn cell(&self, time_interval: u8) -> Option<&PredictionCell> {
        self.cells.get(usize::from(time_interval))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PredictionCell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a DayPrediction {
    type Item = &'a PredictionCell;
    type IntoIter = std::slice::Iter<'a, PredictionCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
