//! Allocation Tests
//!
//! Once a cache is warm, lookups and overwrites of present keys must not touch
//! the allocator. This file holds a single test so that no other test running
//! in parallel pollutes the global counters.

use recency::{LruCache, MaxPriorityQueue};
use stats_alloc::{Region, StatsAlloc, INSTRUMENTED_SYSTEM};
use std::alloc::System;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

#[test]
fn test_steady_state_does_not_allocate() {
    const CAP: i64 = 256;

    let mut cache = LruCache::new(CAP as usize).unwrap();
    for key in 0..CAP {
        cache.set(key, key);
    }
    let mut queue = MaxPriorityQueue::new((0..CAP).collect());
    queue.extract_max().unwrap();

    let region = Region::new(&GLOBAL);
    let mut checksum = 0i64;
    for round in 0..10 {
        for key in 0..CAP {
            checksum = checksum.wrapping_add(cache.get(key).unwrap());
            cache.set(key, key + round);
        }
        // A miss reports an error value, not an allocation.
        assert!(cache.get(CAP + round).is_err());
        // The queue has spare capacity from the extract above.
        queue.insert(round);
        queue.extract_max().unwrap();
    }
    let change = region.change();

    assert_ne!(checksum, 0);
    assert_eq!(change.allocations, 0, "{:?}", change);
    assert_eq!(change.reallocations, 0, "{:?}", change);
    assert_eq!(cache.len(), CAP as usize);
}
