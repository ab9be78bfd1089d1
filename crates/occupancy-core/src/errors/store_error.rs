/// Errors raised by the external observation store or cache backing store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("corrupt record at {key}: {details}")]
    Corrupt { key: String, details: String },
}

impl StoreError {
    /// Network-level failures are worth retrying; auth and data problems are not.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
