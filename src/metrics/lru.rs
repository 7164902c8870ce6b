//! LRU Cache Metrics
//!
//! Metrics specific to the LRU (Least Recently Used) cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU metrics: the core counters plus the LRU-specific ones.
#[derive(Debug, Clone, PartialEq)]
pub struct LruCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,
    /// `set` calls that overwrote an existing key
    pub updates: u64,
    /// Misses that happened because the cache held nothing at all
    pub empty_cache_misses: u64,
}

impl LruCacheMetrics {
    /// Creates zeroed LRU metrics for a cache that can hold `max_cache_size_bytes`.
    pub fn new(max_cache_size_bytes: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(max_cache_size_bytes),
            updates: 0,
            empty_cache_misses: 0,
        }
    }

    /// Records an overwrite of an existing key.
    pub fn record_update(&mut self, object_size: u64) {
        self.updates += 1;
        self.core.record_overwrite(object_size);
    }

    /// Records a lookup against an empty cache.
    pub fn record_empty_miss(&mut self) {
        self.empty_cache_misses += 1;
        self.core.record_miss();
    }

    /// Adds another segment's counters into this one.
    pub fn merge(&mut self, other: &Self) {
        self.core.merge(&other.core);
        self.updates += other.updates;
        self.empty_cache_misses += other.empty_cache_misses;
    }

    /// Converts LRU metrics to a map with a stable key order.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("updates".to_string(), self.updates as f64);
        metrics.insert(
            "empty_cache_misses".to_string(),
            self.empty_cache_misses as f64,
        );
        metrics
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
