//! Concurrent Cache Implementations
//!
//! Thread-safe wrappers around the cache algorithm, built from independently
//! locked segments.
//!
//! # Architecture
//!
//! - The key space is partitioned across one or more segments by hash.
//! - Each segment is an LRU list plus its key index, behind its own
//!   `parking_lot::Mutex`.
//! - An operation locks exactly one segment for its whole duration, so the
//!   eviction and insertion performed by one `set` are a single step as far as
//!   any other thread can tell.
//!
//! ## Why Mutex Instead of RwLock?
//!
//! A `get` moves the entry it finds to the most recently used end of the list.
//! Reads are writes, so a reader/writer lock would hand out exclusive access
//! for every call anyway. A plain `Mutex` says so directly and costs less.
//!
//! ## One segment or many
//!
//! The default is a single segment: one lock over the whole cache and exact
//! global LRU order. Configuring more segments lets threads working on
//! different keys proceed in parallel, at the price of LRU order being exact
//! only within each segment.
//!
//! # Example
//!
//! ```rust,ignore
//! use recency::concurrent::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(1000).unwrap());
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             cache.set(t * 1000 + i, i);
//!             let _ = cache.get(t * 1000 + i);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! ```

mod lru;

pub use self::lru::ConcurrentLruCache;
