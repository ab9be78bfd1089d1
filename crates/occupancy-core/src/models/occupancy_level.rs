use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Categorical crowdedness of a location.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyLevel {
    Low,
    /// Also the fallback when a cell has no history.
    #[default]
    Medium,
    High,
}

impl OccupancyLevel {
    /// All levels, in ordinal order.
    pub const ALL: [OccupancyLevel; 3] = [Self::Low, Self::Medium, Self::High];

    /// Lowercase label used in stored documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for OccupancyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OccupancyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown occupancy level: {other}")),
        }
    }
}
