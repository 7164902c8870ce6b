#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## What lives where
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                             LruCache                                │
//! │                                                                     │
//! │   KeyIndex (hash map)                  List (arena, recency order)  │
//! │   ┌──────────────┐                                                  │
//! │   │ key → EntryId│──────┐     head                           tail   │
//! │   │ key → EntryId│───┐  │      │                              │     │
//! │   │ key → EntryId│─┐ │  └───▶ [k1:v1] ⇄ [k2:v2] ⇄ ... ⇄ [kN:vN]   │
//! │   └──────────────┘ │ └──────────────────────▲              ▲      │
//! │                    └───────────────────────────────────────┘      │
//! │                                        least recent    most recent  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every cached key appears exactly once in the index and exactly once in the
//! list, and the index always points at the list entry holding that key.
//!
//! ## Quick Reference
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LruCache`] | Fixed-capacity least-recently-used cache |
//! | `ConcurrentLruCache` | Thread-safe LRU cache (requires `concurrent`) |
//! | [`MaxHeap`] | Array-backed binary max-heap |
//! | [`MaxPriorityQueue`] | Max-priority-queue over [`MaxHeap`] |
//!
//! ## Performance Characteristics
//!
//! | Operation | LruCache | MaxHeap / MaxPriorityQueue |
//! |-----------|----------|----------------------------|
//! | Lookup    | O(1)     | O(1) (`peek`, `heap_maximum`) |
//! | Insert    | O(1)     | O(log n)                   |
//! | Remove    | O(1)     | O(log n) (`extract_max`)   |
//! | Build     | n/a      | O(n)                       |
//!
//! ## Code Examples
//!
//! ### LRU (Least Recently Used)
//!
//! ```rust
//! use recency::config::LruCacheConfig;
//! use recency::{Error, LruCache};
//!
//! let config = LruCacheConfig { capacity: 2 };
//! let mut cache = LruCache::init(config, None).unwrap();
//! cache.set(1, 10);
//! cache.set(2, 20);
//! cache.get(1).unwrap();   // 1 becomes most recently used
//! cache.set(3, 30);        // 2 evicted (least recently used)
//! assert_eq!(cache.get(2), Err(Error::KeyNotFound(2)));
//! ```
//!
//! ### Observing evictions
//!
//! ```rust
//! use recency::LruCache;
//! use std::sync::mpsc;
//!
//! let (tx, rx) = mpsc::channel();
//! let mut cache = LruCache::new(1).unwrap();
//! cache.set_eviction_listener(move |key: i64, value: i64| {
//!     let _ = tx.send((key, value));
//! });
//! cache.set(1, 100);
//! cache.set(2, 200);
//! assert_eq!(rx.try_recv(), Ok((1, 100)));
//! ```
//!
//! ### Priority queue
//!
//! ```rust
//! use recency::MaxPriorityQueue;
//!
//! let mut queue = MaxPriorityQueue::new(vec![3, 1, 4, 1, 5]);
//! queue.insert(9);
//! assert_eq!(queue.extract_max(), Ok(9));
//! assert_eq!(queue.heap_maximum(), Ok(5));
//! ```
//!
//! ## Concurrent Cache
//!
//! Enable the `concurrent` feature for the thread-safe version:
//!
//! ```toml
//! [dependencies]
//! recency = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`heap`]: Array-backed max-heap
//! - [`priority_queue`]: Max-priority-queue
//! - [`config`]: Configuration structures
//! - [`metrics`]: Metrics collection for cache monitoring
//! - [`error`]: The crate's error type
//! - `concurrent`: Thread-safe cache implementation (requires `concurrent` feature)

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate scoped_threadpool;

/// Cache keys.
pub type Key = i64;

/// Cache values.
pub type Value = i64;

/// Error type shared by every structure in the crate.
pub mod error;

/// Arena-backed doubly linked list holding cache entries in recency order.
///
/// Entries are addressed by stable [`EntryId`](list::EntryId) handles rather
/// than pointers, so the list needs no `unsafe`.
pub mod list;

/// Hash index from key to list entry.
pub mod index;

/// Cache configuration structures.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used entry when
/// a new key arrives and the cache is full.
pub mod lru;

/// Cache metrics system.
pub mod metrics;

/// Array-backed binary max-heap.
pub mod heap;

/// Max-priority-queue built on [`heap::MaxHeap`].
pub mod priority_queue;

/// Concurrent cache implementations.
///
/// Provides a thread-safe LRU cache built from one or more independently
/// locked segments.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use error::{Error, Result};
pub use heap::MaxHeap;
pub use lru::{EvictionListener, LruCache};
pub use priority_queue::MaxPriorityQueue;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
