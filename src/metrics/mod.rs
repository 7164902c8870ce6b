//! Cache Metrics System
//!
//! Counters describing what a cache has been doing: lookups, hits, misses,
//! insertions and evictions, plus an estimate of the bytes held. Caches expose
//! them through the [`CacheMetrics`] trait as a `BTreeMap<String, f64>`, so the
//! keys always come back in the same order regardless of hasher state.
//!
//! Metrics are the cache's only observability surface. The data structures do
//! no I/O; callers that want eviction events as they happen register an
//! [`EvictionListener`](crate::lru::EvictionListener) instead.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruCacheMetrics;

/// Counters common to every cache implementation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get` calls) made against the cache
    pub requests: u64,

    /// Lookups that found their key
    pub cache_hits: u64,

    /// Entries created by `set` for previously absent keys
    pub insertions: u64,

    /// Entries removed to make room for a new key
    pub evictions: u64,

    /// Total bytes written into the cache, including overwrites
    pub bytes_written_to_cache: u64,

    /// Estimated bytes currently held
    pub cache_size_bytes: u64,

    /// Estimated bytes held when every slot is occupied
    pub max_cache_size_bytes: u64,
}

impl CoreCacheMetrics {
    /// Creates zeroed counters for a cache that can hold `max_cache_size_bytes`.
    pub fn new(max_cache_size_bytes: u64) -> Self {
        Self {
            max_cache_size_bytes,
            ..Default::default()
        }
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new entry of `object_size` bytes.
    pub fn record_insertion(&mut self, object_size: u64) {
        self.insertions += 1;
        self.cache_size_bytes += object_size;
        self.bytes_written_to_cache += object_size;
    }

    /// Records an in-place overwrite of an existing entry.
    pub fn record_overwrite(&mut self, object_size: u64) {
        self.bytes_written_to_cache += object_size;
    }

    /// Records a capacity eviction of an entry of `evicted_size` bytes.
    pub fn record_eviction(&mut self, evicted_size: u64) {
        self.evictions += 1;
        self.cache_size_bytes = self.cache_size_bytes.saturating_sub(evicted_size);
    }

    /// Records an explicit removal, which frees space without counting as an eviction.
    pub fn record_removal(&mut self, object_size: u64) {
        self.cache_size_bytes = self.cache_size_bytes.saturating_sub(object_size);
    }

    /// Resets the held size after the cache was cleared. Counters are kept.
    pub fn record_clear(&mut self) {
        self.cache_size_bytes = 0;
    }

    /// Adds another set of counters into this one.
    pub fn merge(&mut self, other: &Self) {
        self.requests += other.requests;
        self.cache_hits += other.cache_hits;
        self.insertions += other.insertions;
        self.evictions += other.evictions;
        self.bytes_written_to_cache += other.bytes_written_to_cache;
        self.cache_size_bytes += other.cache_size_bytes;
        self.max_cache_size_bytes = self
            .max_cache_size_bytes
            .saturating_add(other.max_cache_size_bytes);
    }

    /// Fraction of lookups that hit, or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, or 0.0 before the first lookup.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// How full the cache is, from 0.0 to 1.0.
    pub fn cache_utilization(&self) -> f64 {
        if self.max_cache_size_bytes > 0 {
            self.cache_size_bytes as f64 / self.max_cache_size_bytes as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a map with a stable key order.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics.insert(
            "bytes_written_to_cache".to_string(),
            self.bytes_written_to_cache as f64,
        );
        metrics.insert("cache_size_bytes".to_string(), self.cache_size_bytes as f64);
        metrics.insert(
            "max_cache_size_bytes".to_string(),
            self.max_cache_size_bytes as f64,
        );
        metrics.insert("cache_utilization".to_string(), self.cache_utilization());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics reporting for cache implementations.
pub trait CacheMetrics {
    /// Returns every metric as name/value pairs, sorted by name.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short identifier of the algorithm, e.g. `"LRU"`.
    fn algorithm_name(&self) -> &'static str;
}
