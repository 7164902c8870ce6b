//! Least Recently Used (LRU) Cache Implementation
//!
//! A fixed-capacity cache with O(1) `get` and `set`. It combines two structures
//! that are always updated together:
//!
//! - a [`List`] of entries ordered from least to most recently used, and
//! - a [`KeyIndex`] mapping each key to its entry's handle in that list.
//!
//! # Algorithm
//!
//! Every successful `get` and every `set` moves the touched entry to the most
//! recently used end of the list. When a new key arrives and the cache is full,
//! the entry at the least recently used end is evicted from both the list and
//! the index before the new entry is linked in.
//!
//! ```text
//!  capacity 3
//!
//!  set(1) set(2) set(3)      [1, 2, 3]      LRU ◀──────▶ MRU
//!  get(1)                    [2, 3, 1]
//!  set(4)   evicts 2         [3, 1, 4]
//! ```
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Set: O(1)
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity; entries live in one contiguous arena
//!
//! # Thread Safety
//!
//! `LruCache` is not internally synchronized. Because a read reorders the
//! recency list, every operation (including `get`) takes `&mut self`. Share it
//! across threads behind a `Mutex`, or enable the `concurrent` feature and use
//! `ConcurrentLruCache`.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::error::{Error, Result};
use crate::index::{DefaultHashBuilder, KeyIndex};
use crate::list::{self, Entry, List};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use crate::{Key, Value};
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::hash::BuildHasher;
use core::iter::FusedIterator;
use core::mem;
use core::num::NonZeroUsize;

/// Estimated footprint of one entry, used for the size metrics.
const ENTRY_SIZE: u64 = (mem::size_of::<Key>() + mem::size_of::<Value>() + 64) as u64;

/// Most entries a segment reserves up front. Larger capacities grow the list
/// and index on demand.
const MAX_PRESIZE: usize = 1 << 16;

/// Observer notified whenever an entry is evicted to make room for a new key.
///
/// Explicit [`remove`](LruCache::remove) and [`clear`](LruCache::clear) calls
/// are not evictions and are not reported. Any `FnMut(Key, Value) + Send`
/// closure is a listener.
///
/// # Examples
///
/// ```
/// use recency::LruCache;
/// use std::sync::mpsc;
///
/// let (tx, rx) = mpsc::channel();
/// let mut cache = LruCache::new(1).unwrap();
/// cache.set_eviction_listener(move |key: i64, value: i64| {
///     let _ = tx.send((key, value));
/// });
///
/// cache.set(1, 10);
/// cache.set(2, 20);
/// assert_eq!(rx.try_recv(), Ok((1, 10)));
/// ```
pub trait EvictionListener: Send {
    /// Called with the evicted key and value, after both have left the cache.
    fn on_evict(&mut self, key: Key, value: Value);
}

impl<F> EvictionListener for F
where
    F: FnMut(Key, Value) + Send,
{
    fn on_evict(&mut self, key: Key, value: Value) {
        self(key, value)
    }
}

/// Internal LRU segment containing the actual cache algorithm.
///
/// This is shared between `LruCache` (single-threaded) and
/// `ConcurrentLruCache` (multi-threaded), where each segment sits behind its
/// own lock.
///
/// Invariant: the keys in `index` are exactly the keys in `list`, and each
/// maps to the handle of the entry holding it.
pub(crate) struct LruSegment<S = DefaultHashBuilder> {
    capacity: NonZeroUsize,
    list: List,
    index: KeyIndex<S>,
    metrics: LruCacheMetrics,
    listener: Option<Box<dyn EvictionListener>>,
}

impl<S: BuildHasher> LruSegment<S> {
    pub(crate) fn with_hasher(capacity: NonZeroUsize, hash_builder: S) -> Self {
        let presize = capacity.get().min(MAX_PRESIZE);
        LruSegment {
            capacity,
            list: List::with_capacity(presize),
            index: KeyIndex::with_capacity_and_hasher(presize, hash_builder),
            metrics: LruCacheMetrics::new((capacity.get() as u64).saturating_mul(ENTRY_SIZE)),
            listener: None,
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    pub(crate) fn set_listener(&mut self, listener: Option<Box<dyn EvictionListener>>) {
        self.listener = listener;
    }

    pub(crate) fn get(&mut self, key: Key) -> Result<Value> {
        if self.index.is_empty() {
            self.metrics.record_empty_miss();
            return Err(Error::EmptyCache);
        }
        let found = self
            .index
            .lookup(key)
            .and_then(|id| self.list.get(id).map(|entry| (id, entry.value())));
        let Some((id, value)) = found else {
            self.metrics.core.record_miss();
            return Err(Error::KeyNotFound(key));
        };

        self.list.move_to_most_recent(id);
        self.metrics.core.record_hit();
        Ok(value)
    }

    pub(crate) fn set(&mut self, key: Key, value: Value) {
        if let Some(id) = self.index.lookup(key) {
            if let Some(entry) = self.list.get_mut(id) {
                entry.replace_value(value);
            }
            self.list.move_to_most_recent(id);
            self.metrics.record_update(ENTRY_SIZE);
            return;
        }

        if self.index.len() >= self.capacity.get() {
            self.evict();
        }

        let id = self.list.insert_at_most_recent(key, value);
        self.index.insert(key, id);
        self.metrics.core.record_insertion(ENTRY_SIZE);
    }

    /// Evicts the least recently used entry from the list and the index.
    fn evict(&mut self) -> Option<(Key, Value)> {
        let (key, value) = self.list.evict_least_recent().ok()?;
        self.index.remove(key);
        self.metrics.core.record_eviction(ENTRY_SIZE);
        if let Some(listener) = self.listener.as_mut() {
            listener.on_evict(key, value);
        }
        Some((key, value))
    }

    pub(crate) fn peek(&self, key: Key) -> Option<Value> {
        let id = self.index.lookup(key)?;
        self.list.get(id).map(Entry::value)
    }

    #[inline]
    pub(crate) fn contains(&self, key: Key) -> bool {
        self.index.contains(key)
    }

    pub(crate) fn remove(&mut self, key: Key) -> Option<Value> {
        let id = self.index.remove(key)?;
        let (_, value) = self.list.remove(id)?;
        self.metrics.core.record_removal(ENTRY_SIZE);
        Some(value)
    }

    pub(crate) fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
        self.metrics.core.record_clear();
    }

    pub(crate) fn lru_entry(&self) -> Option<(Key, Value)> {
        self.list
            .head()
            .and_then(|id| self.list.get(id))
            .map(|entry| (entry.key(), entry.value()))
    }

    pub(crate) fn mru_entry(&self) -> Option<(Key, Value)> {
        self.list
            .tail()
            .and_then(|id| self.list.get(id))
            .map(|entry| (entry.key(), entry.value()))
    }

    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.list.iter(),
        }
    }
}

impl<S> core::fmt::Debug for LruSegment<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruSegment")
            .field("capacity", &self.capacity)
            .field("len", &self.list.len())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

/// A fixed-capacity Least Recently Used (LRU) cache of integer keys and values.
///
/// The cache is `Send` but not `Sync`: an installed listener only has to be
/// `Send`. Share it between threads behind a lock, or use
/// `ConcurrentLruCache` with the `concurrent` feature.
///
/// Memory grows with the number of entries held, not with `capacity`, so a
/// very large capacity is cheap until it is actually filled.
///
/// # Examples
///
/// ```
/// use recency::{Error, LruCache};
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// cache.set(1, 1);
/// cache.set(2, 2);
///
/// // Reading 1 makes it the most recently used entry...
/// assert_eq!(cache.get(1), Ok(1));
///
/// // ...so 2 is the one evicted when 3 arrives.
/// cache.set(3, 3);
/// assert_eq!(cache.get(2), Err(Error::KeyNotFound(2)));
/// assert_eq!(cache.get(1), Ok(1));
/// assert_eq!(cache.get(3), Ok(3));
/// ```
#[derive(Debug)]
pub struct LruCache<S = DefaultHashBuilder> {
    segment: LruSegment<S>,
}

impl LruCache<DefaultHashBuilder> {
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::init(LruCacheConfig { capacity }, None)
    }

    /// Creates a cache from a configuration, with an optional hasher.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if the configured capacity is zero.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Result<Self> {
        Self::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<S: BuildHasher> LruCache<S> {
    /// Creates an empty cache with a custom hash builder.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        Self::init_with_hasher(LruCacheConfig { capacity }, hash_builder)
    }

    /// Creates a cache from a configuration and a custom hash builder.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if the configured capacity is zero.
    pub fn init_with_hasher(config: LruCacheConfig, hash_builder: S) -> Result<Self> {
        let capacity = config.validate()?;
        Ok(Self {
            segment: LruSegment::with_hasher(capacity, hash_builder),
        })
    }

    /// Maximum number of entries.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.segment.cap()
    }

    /// Current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A failed lookup leaves the recency order untouched and never inserts
    /// anything.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyCache`] if the cache holds no entries.
    /// - [`Error::KeyNotFound`] if `key` is absent.
    #[inline]
    pub fn get(&mut self, key: Key) -> Result<Value> {
        self.segment.get(key)
    }

    /// Inserts or overwrites `key`, marking it most recently used.
    ///
    /// If `key` is new and the cache is full, the least recently used entry is
    /// evicted first and reported to the eviction listener.
    #[inline]
    pub fn set(&mut self, key: Key, value: Value) {
        self.segment.set(key, value)
    }

    /// Returns the value for `key` without changing its recency.
    #[inline]
    pub fn peek(&self, key: Key) -> Option<Value> {
        self.segment.peek(key)
    }

    /// Returns `true` if `key` is cached. Does not change recency.
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.segment.contains(key)
    }

    /// Removes `key`, returning its value. This is not reported as an eviction.
    #[inline]
    pub fn remove(&mut self, key: Key) -> Option<Value> {
        self.segment.remove(key)
    }

    /// Removes every entry. Metrics counters are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.segment.clear()
    }

    /// The entry that would be evicted next.
    #[inline]
    pub fn lru_entry(&self) -> Option<(Key, Value)> {
        self.segment.lru_entry()
    }

    /// The most recently used entry.
    #[inline]
    pub fn mru_entry(&self) -> Option<(Key, Value)> {
        self.segment.mru_entry()
    }

    /// Iterates over `(key, value)` pairs from least to most recently used.
    pub fn iter(&self) -> Iter<'_> {
        self.segment.iter()
    }

    /// Iterates over keys from least to most recently used.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = Key> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Registers the observer called on every eviction, replacing any previous one.
    pub fn set_eviction_listener<L>(&mut self, listener: L)
    where
        L: EvictionListener + 'static,
    {
        self.segment.set_listener(Some(Box::new(listener)));
    }

    /// Drops the registered eviction observer, if any.
    pub fn clear_eviction_listener(&mut self) {
        self.segment.set_listener(None);
    }
}

impl<S: BuildHasher> CacheMetrics for LruCache<S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}

impl<'a, S: BuildHasher> IntoIterator for &'a LruCache<S> {
    type Item = (Key, Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries, least recently used first.
///
/// Created by [`LruCache::iter`]. Iterating does not change recency.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: list::Iter<'a>,
}

impl Iterator for Iter<'_> {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key(), entry.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|entry| (entry.key(), entry.value()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn make(cap: usize) -> LruCache {
        LruCache::new(cap).unwrap()
    }

    /// Checks that the index and the list describe the same set of entries.
    fn assert_consistent<S: BuildHasher>(cache: &LruCache<S>) {
        let segment = &cache.segment;
        list::tests::assert_well_formed(&segment.list);
        assert_eq!(segment.index.len(), segment.list.len());
        assert!(segment.index.len() <= segment.capacity.get());

        let mut cursor = segment.list.head();
        while let Some(id) = cursor {
            let entry = segment.list.get(id).unwrap();
            assert_eq!(segment.index.lookup(entry.key()), Some(id));
            cursor = entry.next();
        }
    }

    fn keys(cache: &LruCache) -> Vec<Key> {
        cache.keys().collect()
    }

    #[test]
    fn test_lru_rejects_zero_capacity() {
        assert!(matches!(
            LruCache::new(0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(LruCache::init(LruCacheConfig { capacity: 0 }, None).is_err());
        assert!(LruCache::with_hasher(0, DefaultHashBuilder::default()).is_err());
    }

    #[test]
    fn test_lru_get_set() {
        let mut cache = make(2);
        cache.set(1, 1);
        cache.set(2, 2);
        assert_eq!(cache.get(1), Ok(1));

        // 1 is now most recent, so 2 goes
        cache.set(3, 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(2), Err(Error::KeyNotFound(2)));
        assert_eq!(keys(&cache), vec![1, 3]);
        assert_consistent(&cache);
    }

    #[test]
    fn test_lru_get_on_empty_cache() {
        let mut cache = make(1);
        assert_eq!(cache.get(5), Err(Error::EmptyCache));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lru_get_miss_keeps_order() {
        let mut cache = make(3);
        cache.set(1, 10);
        cache.set(2, 20);
        cache.set(3, 30);
        assert_eq!(cache.get(9), Err(Error::KeyNotFound(9)));
        assert_eq!(keys(&cache), vec![1, 2, 3]);
        assert!(!cache.contains(9));
        assert_consistent(&cache);
    }

    #[test]
    fn test_lru_update_existing_key() {
        let mut cache = make(2);
        cache.set(1, 10);
        cache.set(2, 20);
        cache.set(1, 11);
        assert_eq!(cache.len(), 2);
        assert_eq!(keys(&cache), vec![2, 1]);

        // overwrite moved 1 to the front, so 2 is evicted
        cache.set(3, 30);
        assert_eq!(cache.get(1), Ok(11));
        assert!(!cache.contains(2));
        assert_consistent(&cache);
    }

    #[test]
    fn test_lru_repeated_get_on_mru_is_stable() {
        let mut cache = make(3);
        cache.set(1, 10);
        cache.set(2, 20);
        cache.set(3, 30);
        for _ in 0..5 {
            assert_eq!(cache.get(3), Ok(30));
            assert_eq!(keys(&cache), vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_lru_first_inserted_is_evicted() {
        use std::sync::mpsc;

        let (tx, rx) = mpsc::channel();
        let mut cache = make(4);
        cache.set_eviction_listener(move |key: i64, value: i64| {
            let _ = tx.send((key, value));
        });
        for k in 0..5 {
            cache.set(k, k * 100);
        }
        let evicted: Vec<_> = rx.try_iter().collect();
        assert_eq!(evicted, vec![(0, 0)]);
        assert_eq!(keys(&cache), vec![1, 2, 3, 4]);
        assert_consistent(&cache);
    }

    #[test]
    fn test_lru_capacity_one() {
        let mut cache = make(1);
        cache.set(1, 1);
        cache.set(1, 2);
        assert_eq!(cache.len(), 1);
        cache.set(2, 3);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(1), Err(Error::KeyNotFound(1)));
        assert_eq!(cache.get(2), Ok(3));
        assert_consistent(&cache);
    }

    #[test]
    fn test_lru_peek_and_contains_leave_order() {
        let mut cache = make(2);
        cache.set(1, 10);
        cache.set(2, 20);
        assert_eq!(cache.peek(1), Some(10));
        assert!(cache.contains(1));
        assert_eq!(cache.peek(3), None);
        cache.set(3, 30);
        assert_eq!(cache.peek(1), None);
        assert_eq!(keys(&cache), vec![2, 3]);
    }

    #[test]
    fn test_lru_remove() {
        let mut cache = make(2);
        cache.set(1, 10);
        cache.set(2, 20);
        assert_eq!(cache.remove(1), Some(10));
        assert_eq!(cache.remove(1), None);
        assert_eq!(cache.len(), 1);
        assert_consistent(&cache);

        // room for one more without evicting
        cache.set(3, 30);
        assert_eq!(keys(&cache), vec![2, 3]);
        assert_eq!(cache.metrics()["evictions"], 0.0);
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = make(2);
        cache.set(1, 10);
        cache.set(2, 20);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(1), Err(Error::EmptyCache));
        cache.set(3, 30);
        assert_eq!(cache.get(3), Ok(30));
        assert_consistent(&cache);
    }

    #[test]
    fn test_lru_ends() {
        let mut cache = make(3);
        assert_eq!(cache.lru_entry(), None);
        assert_eq!(cache.mru_entry(), None);
        cache.set(1, 10);
        cache.set(2, 20);
        cache.set(3, 30);
        cache.get(1).unwrap();
        assert_eq!(cache.lru_entry(), Some((2, 20)));
        assert_eq!(cache.mru_entry(), Some((1, 10)));
    }

    #[test]
    fn test_lru_iter() {
        let mut cache = make(3);
        cache.set(1, 10);
        cache.set(2, 20);
        cache.set(3, 30);
        let pairs: Vec<_> = cache.iter().collect();
        assert_eq!(pairs, vec![(1, 10), (2, 20), (3, 30)]);
        let rev: Vec<_> = (&cache).into_iter().rev().collect();
        assert_eq!(rev, vec![(3, 30), (2, 20), (1, 10)]);
        assert_eq!(cache.iter().len(), 3);
    }

    #[test]
    fn test_lru_listener_ignores_remove_and_clear() {
        use std::sync::{Arc, Mutex};

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut cache = make(2);
        cache.set_eviction_listener(move |key: i64, value: i64| {
            sink.lock().unwrap().push((key, value));
        });

        cache.set(1, 10);
        cache.set(2, 20);
        cache.remove(1);
        cache.set(3, 30);
        cache.set(4, 40);
        cache.clear();
        cache.set(5, 50);
        assert_eq!(*seen.lock().unwrap(), vec![(2, 20)]);

        cache.clear_eviction_listener();
        cache.set(6, 60);
        cache.set(7, 70);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_lru_metrics() {
        let mut cache = make(2);
        let metrics = cache.metrics();
        assert_eq!(metrics["requests"], 0.0);
        assert_eq!(metrics["cache_hits"], 0.0);

        assert_eq!(cache.get(1), Err(Error::EmptyCache));
        cache.set(1, 10);
        cache.set(2, 20);
        cache.get(1).unwrap();
        cache.get(2).unwrap();
        let _ = cache.get(9);
        cache.set(2, 21);
        cache.set(3, 30);

        let metrics = cache.metrics();
        assert_eq!(metrics["requests"], 4.0);
        assert_eq!(metrics["cache_hits"], 2.0);
        assert_eq!(metrics["cache_misses"], 2.0);
        assert_eq!(metrics["empty_cache_misses"], 1.0);
        assert_eq!(metrics["insertions"], 3.0);
        assert_eq!(metrics["updates"], 1.0);
        assert_eq!(metrics["evictions"], 1.0);
        assert_eq!(metrics["cache_utilization"], 1.0);
        assert_eq!(cache.algorithm_name(), "LRU");
    }

    #[test]
    fn test_lru_segment_directly() {
        let mut segment: LruSegment<DefaultHashBuilder> = LruSegment::with_hasher(
            NonZeroUsize::new(2).unwrap(),
            DefaultHashBuilder::default(),
        );
        assert_eq!(segment.len(), 0);
        assert!(segment.is_empty());
        assert_eq!(segment.cap().get(), 2);
        segment.set(1, 1);
        segment.set(2, 2);
        assert_eq!(segment.len(), 2);
        assert_eq!(segment.get(1), Ok(1));
        assert_eq!(segment.get(2), Ok(2));
    }

    #[test]
    fn test_lru_huge_capacity_grows_on_demand() {
        for cap in [usize::MAX, 1 << 40] {
            let mut cache = make(cap);
            assert_eq!(cache.cap().get(), cap);
            assert_eq!(cache.get(1), Err(Error::EmptyCache));
            for key in 0..100 {
                cache.set(key, key * 10);
            }
            assert_eq!(cache.len(), 100);
            assert_eq!(cache.get(0), Ok(0));
            assert_eq!(cache.get(99), Ok(990));
            assert_eq!(cache.get(100), Err(Error::KeyNotFound(100)));
            assert_eq!(cache.lru_entry(), Some((1, 10)));
            assert!(cache.metrics()["cache_utilization"] < 1.0);
            assert_consistent(&cache);
        }
    }

    fn assert_send<T: Send>() {}

    #[test]
    fn test_lru_cache_is_send() {
        assert_send::<LruCache>();
        assert_send::<LruSegment>();
    }

    #[test]
    fn test_lru_invariants_under_mixed_workload() {
        let mut cache = make(8);
        // deterministic pseudo-random sequence
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..2_000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let key = (state % 24) as i64;
            match state % 5 {
                0 | 1 => cache.set(key, key * 2),
                2 | 3 => {
                    let _ = cache.get(key);
                }
                _ => {
                    cache.remove(key);
                }
            }
            assert!(cache.len() <= 8);
        }
        assert_consistent(&cache);
    }

    #[test]
    fn test_lru_concurrent_access() {
        use std::sync::{Arc, Mutex};
        use std::thread;

        let cache = Arc::new(Mutex::new(make(100)));
        let num_threads = 4;
        let ops_per_thread = 100;

        let mut handles: Vec<std::thread::JoinHandle<()>> = Vec::new();

        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = t * 1000 + i;
                    let mut guard = cache.lock().unwrap();
                    guard.set(key, i);
                    let _ = guard.get(key - 1);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let guard = cache.lock().unwrap();
        assert_eq!(guard.len(), 100);
        assert_consistent(&*guard);
    }
}
