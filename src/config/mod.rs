//! Cache Configuration Module
//!
//! Configuration structures for the cache implementations. Each config is a plain
//! struct with public fields; [`LruCache::init`](crate::LruCache::init) and
//! `ConcurrentLruCache::init` validate it and report
//! [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration) instead of
//! panicking.
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | `ConcurrentLruCacheConfig` | `ConcurrentLruCache` | Thread-safe LRU (requires `concurrent`) |
//!
//! # Examples
//!
//! ```
//! use recency::config::LruCacheConfig;
//! use recency::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache = LruCache::init(config, None).unwrap();
//! assert_eq!(cache.cap().get(), 1000);
//! ```

pub mod lru;

pub use lru::LruCacheConfig;

/// Generic configuration wrapper for concurrent caches.
///
/// Wraps a base cache configuration and adds the `segments` field controlling
/// how many independently locked segments the key space is split across.
///
/// A single segment means one lock guards the whole cache, which keeps LRU
/// order exact across every key. More segments trade that for less contention:
/// recency is then tracked per segment.
///
/// # Example
///
/// ```ignore
/// use recency::config::{ConcurrentCacheConfig, ConcurrentLruCacheConfig, LruCacheConfig};
///
/// let config: ConcurrentLruCacheConfig = ConcurrentCacheConfig {
///     base: LruCacheConfig { capacity: 10_000 },
///     segments: 16,
/// };
/// ```
#[cfg(feature = "concurrent")]
#[derive(Clone, Copy)]
pub struct ConcurrentCacheConfig<C> {
    /// Base configuration for the underlying cache algorithm
    pub base: C,
    /// Number of segments for sharding (more segments = less contention)
    pub segments: usize,
}

#[cfg(feature = "concurrent")]
impl<C: core::fmt::Debug> core::fmt::Debug for ConcurrentCacheConfig<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentCacheConfig")
            .field("base", &self.base)
            .field("segments", &self.segments)
            .finish()
    }
}

/// Configuration for a concurrent LRU cache.
/// Type alias for `ConcurrentCacheConfig<LruCacheConfig>`.
#[cfg(feature = "concurrent")]
pub type ConcurrentLruCacheConfig = ConcurrentCacheConfig<LruCacheConfig>;

#[cfg(feature = "concurrent")]
impl ConcurrentLruCacheConfig {
    /// Configuration with a single segment, i.e. one lock over the whole cache.
    pub fn new(capacity: usize) -> Self {
        ConcurrentCacheConfig {
            base: LruCacheConfig { capacity },
            segments: 1,
        }
    }

    /// Checks the base capacity and that every segment gets at least one slot.
    ///
    /// Returns the total capacity on success.
    pub fn validate(&self) -> crate::Result<core::num::NonZeroUsize> {
        let capacity = self.base.validate()?;
        if self.segments == 0 {
            return Err(crate::Error::InvalidConfiguration(
                "segment count must be greater than zero",
            ));
        }
        if self.segments > capacity.get() {
            return Err(crate::Error::InvalidConfiguration(
                "segment count must not exceed capacity",
            ));
        }
        Ok(capacity)
    }
}
