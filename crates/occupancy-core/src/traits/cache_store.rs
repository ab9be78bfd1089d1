use std::sync::Arc;

use crate::errors::StoreError;
use crate::models::{CacheEntry, CacheKey};

/// Keyed document storage backing the prediction cache.
pub trait ICacheStore: Send + Sync {
    fn get(&self, key: &CacheKey) -> Result<Option<CacheEntry>, StoreError>;
    /// Overwrites any existing entry for `key`.
    fn put(&self, key: &CacheKey, entry: &CacheEntry) -> Result<(), StoreError>;
}

impl<T: ICacheStore + ?Sized> ICacheStore for Arc<T> {
    fn get(&self, key: &CacheKey) -> Result<Option<CacheEntry>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &CacheKey, entry: &CacheEntry) -> Result<(), StoreError> {
        (**self).put(key, entry)
    }
}
