//! Golden prediction datasets: raw observation documents plus the cells
//! they must produce.

use serde::Deserialize;

use occupancy_core::models::{Observation, OccupancyLevel};

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionFixture {
    pub description: String,
    pub location_id: String,
    pub observations: Vec<Observation>,
    pub expected: Vec<ExpectedCell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedCell {
    pub day_of_week: u8,
    pub time_interval: u8,
    pub occupancy: OccupancyLevel,
    pub confidence: f64,
}

pub fn load_prediction_fixture(relative_path: &str) -> PredictionFixture {
    crate::load_fixture(relative_path)
}
