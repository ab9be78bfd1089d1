//! Error taxonomy.
//!
//! Only two conditions ever reach a caller of the prediction service:
//! a failed observation fetch and invalid configuration. Cache failures
//! are degraded inside the cache and missing data is not an error at all.

mod config_error;
mod store_error;

pub use config_error::ConfigError;
pub use store_error::StoreError;

/// Root error type for the occupancy engine.
#[derive(Debug, thiserror::Error)]
pub enum OccupancyError {
    #[error("failed to fetch observations for {}: {source}", location_label(.location_id))]
    FetchFailed {
        location_id: Option<String>,
        #[source]
        source: StoreError,
    },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("time interval {interval} is outside 0..48")]
    InvalidInterval { interval: i64 },
}

/// Convenience alias used across the workspace.
pub type OccupancyResult<T> = Result<T, OccupancyError>;

fn location_label(location_id: &Option<String>) -> &str {
    location_id.as_deref().unwrap_or("all locations")
}

impl OccupancyError {
    /// Wrap a store error raised while fetching observations.
    pub fn fetch_failed(location_id: Option<&str>, source: StoreError) -> Self {
        Self::FetchFailed {
            location_id: location_id.map(str::to_string),
            source,
        }
    }

    /// Whether re-invoking the request from scratch may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::FetchFailed { source, .. } => source.is_transient(),
            _ => false,
        }
    }
}
