/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of 30-minute intervals in a day.
pub const INTERVALS_PER_DAY: u8 = 48;

/// Number of days in a week (Sunday = 0 .. Saturday = 6).
pub const DAYS_PER_WEEK: u8 = 7;

/// Minutes covered by one interval.
pub const INTERVAL_MINUTES: u32 = 30;

/// Confidence reported when no observation matches a cell.
pub const NO_DATA_CONFIDENCE: f64 = 0.1;

/// Weight of the consensus term (winning share of matching records).
pub const CONSENSUS_WEIGHT: f64 = 0.7;

/// Weight of the sample-size term.
pub const SAMPLE_WEIGHT: f64 = 0.3;

/// Matching-record count at which the sample-size term saturates.
pub const SAMPLE_SATURATION: usize = 10;

/// Default observation lookback window (days).
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

/// Default freshness window for cached day vectors (hours).
pub const DEFAULT_CACHE_TTL_HOURS: u32 = 6;

/// Default capacity of the in-process cache tier.
pub const DEFAULT_L1_MAX_ENTRIES: u64 = 1024;

/// Floor of the alpha channel in cell colors.
pub const MIN_COLOR_ALPHA: f64 = 0.3;
