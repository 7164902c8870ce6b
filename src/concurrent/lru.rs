//! Concurrent LRU Cache Implementation
//!
//! A thread-safe LRU cache. This is the multi-threaded counterpart to
//! [`LruCache`](crate::LruCache): same operations, same errors, but every method
//! takes `&self` and the cache can be shared through an `Arc`.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      ConcurrentLruCache                          │
//! │                                                                  │
//! │  hash(key) % N  ──▶  Segment Selection   (N = 1 by default)      │
//! │                                                                  │
//! │  ┌──────────────┐ ┌──────────────┐     ┌──────────────┐          │
//! │  │  Segment 0   │ │  Segment 1   │ ... │  Segment N-1 │          │
//! │  │   [Mutex]    │ │   [Mutex]    │     │   [Mutex]    │          │
//! │  │ list + index │ │ list + index │     │ list + index │          │
//! │  └──────────────┘ └──────────────┘     └──────────────┘          │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Capacity is split across segments; any remainder goes one slot at a time to
//! the first segments, so the segment capacities always add up to the
//! configured total.

extern crate alloc;

use crate::config::{ConcurrentCacheConfig, ConcurrentLruCacheConfig, LruCacheConfig};
use crate::error::{Error, Result};
use crate::index::DefaultHashBuilder;
use crate::lru::{EvictionListener, LruSegment};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use crate::{Key, Value};
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::BuildHasher;
use core::num::NonZeroUsize;
use parking_lot::Mutex;

/// A thread-safe LRU cache of integer keys and values.
///
/// # Note on LRU Semantics
///
/// With one segment (the default) the whole cache is guarded by a single lock
/// and eviction order is exactly least-recently-used. With several segments,
/// LRU ordering is maintained **per segment**: a key may be evicted from its
/// segment while another segment holds keys touched longer ago.
///
/// # Example
///
/// ```rust,ignore
/// use recency::ConcurrentLruCache;
/// use std::sync::Arc;
///
/// let cache = Arc::new(ConcurrentLruCache::new(1000).unwrap());
/// cache.set(7, 42);
/// assert_eq!(cache.get(7), Ok(42));
/// ```
pub struct ConcurrentLruCache<S = DefaultHashBuilder> {
    segments: Box<[Mutex<LruSegment<S>>]>,
    hash_builder: S,
}

impl ConcurrentLruCache<DefaultHashBuilder> {
    /// Creates a single-segment cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::init(ConcurrentLruCacheConfig::new(capacity), None)
    }

    /// Creates a cache split across `segments` independently locked segments.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `capacity` or `segments` is zero, or
    /// if there are more segments than capacity.
    pub fn with_segments(capacity: usize, segments: usize) -> Result<Self> {
        let config = ConcurrentCacheConfig {
            base: LruCacheConfig { capacity },
            segments,
        };
        Self::init(config, None)
    }

    /// Creates a concurrent LRU cache from a configuration with an optional hasher.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if the configuration does not validate.
    pub fn init(
        config: ConcurrentLruCacheConfig,
        hasher: Option<DefaultHashBuilder>,
    ) -> Result<Self> {
        Self::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<S> ConcurrentLruCache<S>
where
    S: BuildHasher + Clone,
{
    /// Creates a concurrent LRU cache with a custom hash builder.
    ///
    /// The hash builder picks segments and is cloned into every segment's index.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if the configuration does not validate.
    pub fn init_with_hasher(config: ConcurrentLruCacheConfig, hash_builder: S) -> Result<Self> {
        let capacity = config.validate()?.get();
        let segment_count = config.segments;
        let base = capacity / segment_count;
        let remainder = capacity % segment_count;

        let segments = (0..segment_count)
            .map(|i| {
                let extra = usize::from(i < remainder);
                let segment_cap = NonZeroUsize::new(base + extra).ok_or(
                    Error::InvalidConfiguration("segment count must not exceed capacity"),
                )?;
                Ok(Mutex::new(LruSegment::with_hasher(
                    segment_cap,
                    hash_builder.clone(),
                )))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            segments: segments.into_boxed_slice(),
            hash_builder,
        })
    }

    #[inline]
    fn segment_index(&self, key: Key) -> usize {
        if self.segments.len() == 1 {
            return 0;
        }
        (self.hash_builder.hash_one(key) as usize) % self.segments.len()
    }

    #[inline]
    fn segment(&self, key: Key) -> &Mutex<LruSegment<S>> {
        &self.segments[self.segment_index(key)]
    }

    /// Returns the total capacity across all segments.
    pub fn capacity(&self) -> usize {
        self.segments.iter().map(|s| s.lock().cap().get()).sum()
    }

    /// Returns the number of segments in the cache.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the total number of entries across all segments.
    ///
    /// Segments are locked one after another, so under concurrent writes the
    /// result may already be stale.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.lock().len()).sum()
    }

    /// Returns `true` if no segment holds an entry.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.lock().is_empty())
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyCache`] if the cache holds no entries.
    /// - [`Error::KeyNotFound`] if `key` is absent.
    pub fn get(&self, key: Key) -> Result<Value> {
        let result = self.segment(key).lock().get(key);
        match result {
            // An empty segment is only an empty cache if every segment is empty.
            Err(Error::EmptyCache) if self.segments.len() > 1 && !self.is_empty() => {
                Err(Error::KeyNotFound(key))
            }
            other => other,
        }
    }

    /// Looks up `key` and applies `f` to its value while the segment lock is held.
    ///
    /// Recency and metrics are updated exactly as by [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_with<F, R>(&self, key: Key, f: F) -> Result<R>
    where
        F: FnOnce(Value) -> R,
    {
        let result = {
            let mut segment = self.segment(key).lock();
            segment.get(key).map(f)
        };
        match result {
            Err(Error::EmptyCache) if self.segments.len() > 1 && !self.is_empty() => {
                Err(Error::KeyNotFound(key))
            }
            other => other,
        }
    }

    /// Inserts or overwrites `key`, evicting from its segment if that is full.
    ///
    /// The eviction and the insertion happen under one lock acquisition.
    pub fn set(&self, key: Key, value: Value) {
        self.segment(key).lock().set(key, value)
    }

    /// Returns the value for `key` without changing its recency.
    pub fn peek(&self, key: Key) -> Option<Value> {
        self.segment(key).lock().peek(key)
    }

    /// Returns `true` if `key` is cached. Does not change recency.
    pub fn contains(&self, key: Key) -> bool {
        self.segment(key).lock().contains(key)
    }

    /// Removes `key`, returning its value. Not reported as an eviction.
    pub fn remove(&self, key: Key) -> Option<Value> {
        self.segment(key).lock().remove(key)
    }

    /// Removes all entries from all segments.
    ///
    /// Acquires locks on each segment sequentially.
    pub fn clear(&self) {
        for segment in self.segments.iter() {
            segment.lock().clear();
        }
    }

    /// Registers an eviction observer on every segment.
    ///
    /// Each segment receives its own clone, called while that segment's lock is
    /// held. Listeners must not call back into the cache.
    pub fn set_eviction_listener<L>(&self, listener: L)
    where
        L: EvictionListener + Clone + 'static,
    {
        for segment in self.segments.iter() {
            segment.lock().set_listener(Some(Box::new(listener.clone())));
        }
    }

    /// Drops the eviction observer from every segment.
    pub fn clear_eviction_listener(&self) {
        for segment in self.segments.iter() {
            segment.lock().set_listener(None);
        }
    }

    fn aggregate_metrics(&self) -> LruCacheMetrics {
        let mut total = LruCacheMetrics::new(0);
        for segment in self.segments.iter() {
            total.merge(segment.lock().metrics());
        }
        total
    }
}

impl<S> CacheMetrics for ConcurrentLruCache<S>
where
    S: BuildHasher + Clone,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.aggregate_metrics().to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<S> core::fmt::Debug for ConcurrentLruCache<S>
where
    S: BuildHasher + Clone,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentLruCache")
            .field("segment_count", &self.segments.len())
            .field("total_len", &self.len())
            .finish()
    }
}
