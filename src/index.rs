//! Key index: constant-time translation from a key to its entry handle.
//!
//! The index never owns entries. It stores the [`EntryId`] handed out by the
//! [`List`](crate::list::List) when the entry was inserted, and the cache removes
//! the mapping in the same step that removes the entry.

use core::hash::BuildHasher;

use crate::list::EntryId;
use crate::Key;

#[cfg(feature = "hashbrown")]
pub use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
extern crate std;
#[cfg(not(feature = "hashbrown"))]
pub use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Hash map from key to the handle of the entry holding it.
pub struct KeyIndex<S = DefaultHashBuilder> {
    map: HashMap<Key, EntryId, S>,
}

impl<S: BuildHasher> KeyIndex<S> {
    /// Creates an index with room for `capacity` keys using the given hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        KeyIndex {
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the handle stored for `key`.
    #[inline]
    pub fn lookup(&self, key: Key) -> Option<EntryId> {
        self.map.get(&key).copied()
    }

    /// Returns `true` if `key` is indexed.
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.map.contains_key(&key)
    }

    /// Maps `key` to `id`, returning the handle it replaced.
    #[inline]
    pub fn insert(&mut self, key: Key, id: EntryId) -> Option<EntryId> {
        self.map.insert(key, id)
    }

    /// Drops the mapping for `key`.
    #[inline]
    pub fn remove(&mut self, key: Key) -> Option<EntryId> {
        self.map.remove(&key)
    }

    /// Number of indexed keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if nothing is indexed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drops every mapping, keeping the allocation.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<S> core::fmt::Debug for KeyIndex<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyIndex")
            .field("len", &self.map.len())
            .finish()
    }
}
