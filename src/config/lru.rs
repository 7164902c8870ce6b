//! Configuration for the Least Recently Used (LRU) cache.
//!
//! The only tunable is the entry count. The cache never grows past it and never
//! shrinks below it: when a new key arrives at a full cache, the least recently
//! used entry is evicted first.
//!
//! # Examples
//!
//! ```
//! use recency::config::LruCacheConfig;
//! use recency::LruCache;
//!
//! let config = LruCacheConfig { capacity: 500 };
//! let cache: LruCache = LruCache::init(config, None).unwrap();
//!
//! // Zero capacity is rejected rather than producing a cache that evicts everything.
//! assert!(LruCache::init(LruCacheConfig { capacity: 0 }, None).is_err());
//! ```

use core::fmt;
use core::num::NonZeroUsize;

use crate::error::{Error, Result};

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Must be positive.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Returns the capacity as a `NonZeroUsize`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `capacity` is zero.
    pub fn validate(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.capacity).ok_or(Error::InvalidConfiguration(
            "capacity must be greater than zero",
        ))
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
