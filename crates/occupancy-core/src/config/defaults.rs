pub use crate::constants::{
    DEFAULT_CACHE_TTL_HOURS, DEFAULT_L1_MAX_ENTRIES, DEFAULT_LOOKBACK_DAYS,
};

pub const DEFAULT_LOG_LEVEL: &str = "info";
