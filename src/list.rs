//! Recency-ordered doubly linked list backed by an arena.
//!
//! Entries live in a `Vec` of slots and link to each other through [`EntryId`]
//! handles rather than pointers. Removing an entry vacates its slot and pushes
//! the slot onto a free list, so a later insertion reuses it. A handle to a
//! vacated slot simply resolves to `None`.
//!
//! The list runs from `head` (least recently used) to `tail` (most recently
//! used):
//!
//! ```text
//!   head                                      tail
//!    │                                          │
//!    ▼                                          ▼
//!  ┌─────┐ next ┌─────┐ next ┌─────┐ next ┌─────┐
//!  │  A  │─────▶│  B  │─────▶│  C  │─────▶│  D  │
//!  │     │◀─────│     │◀─────│     │◀─────│     │
//!  └─────┘ prev └─────┘ prev └─────┘ prev └─────┘
//! ```
//!
//! Every repositioning unlinks the entry and relinks it after the tail. Both
//! steps read the neighbours as `Option`s, so lists of zero, one, two or more
//! entries all take the same path.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::{Key, Value};

/// Stable handle to an entry in a [`List`].
///
/// Handles stay valid until the entry they name is removed. After that the slot
/// may be recycled for a different entry, so callers that keep handles (such as
/// the cache's key index) must drop them when the entry goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

/// A key/value pair plus its position in recency order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: Key,
    value: Value,
    prev: Option<EntryId>,
    next: Option<EntryId>,
}

impl Entry {
    /// The entry's key.
    #[inline]
    pub fn key(&self) -> Key {
        self.key
    }

    /// The entry's value.
    #[inline]
    pub fn value(&self) -> Value {
        self.value
    }

    /// Replaces the value and returns the previous one.
    #[inline]
    pub fn replace_value(&mut self, value: Value) -> Value {
        core::mem::replace(&mut self.value, value)
    }

    /// The next less recently used entry, `None` at the head.
    #[inline]
    pub fn prev(&self) -> Option<EntryId> {
        self.prev
    }

    /// The next more recently used entry, `None` at the tail.
    #[inline]
    pub fn next(&self) -> Option<EntryId> {
        self.next
    }
}

/// Doubly linked list of cache entries ordered from least to most recently used.
///
/// # Examples
///
/// ```
/// use recency::list::List;
///
/// let mut list = List::with_capacity(3);
/// let a = list.insert_at_most_recent(1, 10);
/// list.insert_at_most_recent(2, 20);
/// list.insert_at_most_recent(3, 30);
///
/// // 1 was the least recently used; touch it and 2 takes its place.
/// list.move_to_most_recent(a);
/// assert_eq!(list.evict_least_recent(), Ok((2, 20)));
/// ```
#[derive(Clone, Default)]
pub struct List {
    slots: Vec<Option<Entry>>,
    free: Vec<EntryId>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
}

impl List {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` entries before reallocating.
    ///
    /// The free list starts empty and only ever holds vacated slots, so it
    /// never outgrows `slots`.
    pub fn with_capacity(capacity: usize) -> Self {
        List {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the list holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the least recently used entry.
    #[inline]
    pub fn head(&self) -> Option<EntryId> {
        self.head
    }

    /// Handle of the most recently used entry.
    #[inline]
    pub fn tail(&self) -> Option<EntryId> {
        self.tail
    }

    /// Resolves a handle, returning `None` if its entry has been removed.
    #[inline]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Resolves a handle mutably. Only the value can be changed through it.
    #[inline]
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Creates an entry and links it at the most recently used end.
    ///
    /// When the list is empty the new entry becomes both head and tail.
    pub fn insert_at_most_recent(&mut self, key: Key, value: Value) -> EntryId {
        let entry = Entry {
            key,
            value,
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(entry);
                id
            }
            None => {
                self.slots.push(Some(entry));
                EntryId(self.slots.len() - 1)
            }
        };
        self.link_back(id);
        self.len += 1;
        id
    }

    /// Moves an entry to the most recently used end.
    ///
    /// Does nothing if the entry is already the tail, which covers lists of zero
    /// or one entry. Returns `false` if `id` does not name a live entry.
    pub fn move_to_most_recent(&mut self, id: EntryId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if self.tail == Some(id) {
            return true;
        }
        self.unlink(id);
        self.link_back(id);
        true
    }

    /// Removes and returns the least recently used entry.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn evict_least_recent(&mut self) -> Result<(Key, Value)> {
        let head = self.head.ok_or(Error::EmptyCollection)?;
        self.remove(head).ok_or(Error::EmptyCollection)
    }

    /// Removes an arbitrary entry, returning its key and value.
    pub fn remove(&mut self, id: EntryId) -> Option<(Key, Value)> {
        if !self.unlink(id) {
            return None;
        }
        let entry = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id);
        self.len -= 1;
        Some((entry.key, entry.value))
    }

    /// Removes every entry. Outstanding handles become stale.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from the least to the most recently used entry.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Splices an entry out of the chain, joining its neighbours.
    fn unlink(&mut self, id: EntryId) -> bool {
        let (prev, next) = match self.get_mut(id) {
            Some(entry) => (entry.prev.take(), entry.next.take()),
            None => return false,
        };

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }
        true
    }

    /// Links a detached entry after the current tail.
    fn link_back(&mut self, id: EntryId) {
        let old_tail = self.tail;
        self.set_prev(id, old_tail);
        self.set_next(id, None);

        match old_tail {
            Some(tail) => self.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    #[inline]
    fn set_next(&mut self, id: EntryId, next: Option<EntryId>) {
        if let Some(entry) = self.get_mut(id) {
            entry.next = next;
        }
    }

    #[inline]
    fn set_prev(&mut self, id: EntryId, prev: Option<EntryId>) {
        if let Some(entry) = self.get_mut(id) {
            entry.prev = prev;
        }
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("length", &self.len)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`List`] in recency order, least recent first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a List,
    front: Option<EntryId>,
    back: Option<EntryId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.list.get(self.front?)?;
        self.front = entry.next;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.list.get(self.back?)?;
        self.back = entry.prev;
        self.remaining -= 1;
        Some(entry)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
