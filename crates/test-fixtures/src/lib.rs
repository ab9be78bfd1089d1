//! Test fixtures for the occupancy workspace: in-memory stand-ins for the
//! external stores, a manually driven clock, observation builders, and a
//! loader for the golden JSON datasets under `golden/`.

pub mod builders;
pub mod clock;
pub mod golden;
pub mod stores;

pub use builders::{obs, obs_at, ObservationBuilder};
pub use clock::ManualClock;
pub use golden::{load_prediction_fixture, ExpectedCell, PredictionFixture};
pub use stores::{InMemoryCacheStore, InMemoryObservationStore};

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Root directory of the fixture datasets.
pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "golden directory not found");
    }

    #[test]
    fn all_golden_prediction_files_exist() {
        let files = [
            "prediction/consensus_scenario.json",
            "prediction/lunch_rush.json",
            "prediction/malformed_records.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn every_prediction_fixture_parses() {
        let files = list_fixtures("prediction");
        assert!(!files.is_empty());
        for path in files {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            let fixture = load_prediction_fixture(&format!("prediction/{name}"));
            assert!(!fixture.expected.is_empty(), "{name} has no expectations");
        }
    }
}
