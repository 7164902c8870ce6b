//! Max-Priority-Queue
//!
//! A priority queue over [`MaxHeap`]: the largest key is always served first.
//! Keys can be raised in place, which moves them towards the front.

extern crate alloc;

use crate::error::{Error, Result};
use crate::heap::MaxHeap;
use alloc::vec::Vec;

/// A max-priority-queue of `i64` keys.
///
/// # Examples
///
/// ```
/// use recency::{Error, MaxPriorityQueue};
///
/// let mut queue = MaxPriorityQueue::new(vec![16, 14, 10, 8, 7, 9, 3, 2, 4, 1]);
/// assert_eq!(queue.heap_maximum(), Ok(16));
/// queue.insert(21);
/// assert_eq!(queue.extract_max(), Ok(21));
/// assert_eq!(queue.extract_max(), Ok(16));
///
/// let mut empty = MaxPriorityQueue::new(vec![]);
/// assert_eq!(empty.extract_max(), Err(Error::EmptyCollection));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaxPriorityQueue {
    heap: MaxHeap,
}

impl MaxPriorityQueue {
    /// Creates a queue holding `keys`, heapified in O(n).
    pub fn new(keys: Vec<i64>) -> Self {
        Self {
            heap: MaxHeap::from_vec(keys),
        }
    }

    /// Returns the largest key without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn heap_maximum(&self) -> Result<i64> {
        self.heap.peek().ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the largest key. The queue shrinks by one.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn extract_max(&mut self) -> Result<i64> {
        self.heap.pop_root().ok_or(Error::EmptyCollection)
    }

    /// Raises the key at `index` to `new_key` and restores heap order.
    ///
    /// Setting a key to its current value is allowed and changes nothing.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if `index` is not below [`len`](Self::len).
    /// - [`Error::KeyTooSmall`] if `new_key` is smaller than the current key;
    ///   the queue is left untouched.
    pub fn increase_key(&mut self, index: usize, new_key: i64) -> Result<()> {
        let current = self.heap.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.heap.len(),
        })?;
        if new_key < current {
            return Err(Error::KeyTooSmall {
                index,
                current,
                new: new_key,
            });
        }

        self.heap.replace(index, new_key);
        self.heap.sift_up(index);
        Ok(())
    }

    /// Adds `key` to the queue.
    pub fn insert(&mut self, key: i64) {
        let index = self.heap.push_unordered(key);
        self.heap.sift_up(index);
    }

    /// Returns the number of keys in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the keys in heap order.
    pub fn as_slice(&self) -> &[i64] {
        self.heap.as_slice()
    }
}

impl From<MaxHeap> for MaxPriorityQueue {
    fn from(heap: MaxHeap) -> Self {
        Self { heap }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::tests::assert_heap_property;
    use alloc::vec;

    fn clrs_queue() -> MaxPriorityQueue {
        MaxPriorityQueue::new(vec![16, 14, 10, 8, 7, 9, 3, 2, 4, 1])
    }

    #[test]
    fn test_heap_maximum() {
        let queue = clrs_queue();
        assert_eq!(queue.heap_maximum(), Ok(16));
        assert_eq!(queue.len(), 10);
    }

    #[test]
    fn test_heap_maximum_empty() {
        let queue = MaxPriorityQueue::new(vec![]);
        assert!(queue.is_empty());
        assert_eq!(queue.heap_maximum(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_extract_max() {
        let mut queue = clrs_queue();
        assert_eq!(queue.extract_max(), Ok(16));
        assert_eq!(queue.len(), 9);
        assert_heap_property(queue.as_slice());
        assert_eq!(queue.extract_max(), Ok(14));
        assert_eq!(queue.len(), 8);
        assert_heap_property(queue.as_slice());
    }

    #[test]
    fn test_extract_until_empty() {
        let mut queue = MaxPriorityQueue::new(vec![2, 9, 4]);
        assert_eq!(queue.extract_max(), Ok(9));
        assert_eq!(queue.extract_max(), Ok(4));
        assert_eq!(queue.extract_max(), Ok(2));
        assert_eq!(queue.extract_max(), Err(Error::EmptyCollection));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut queue = clrs_queue();
        queue.insert(21);
        assert_eq!(queue.len(), 11);
        assert_heap_property(queue.as_slice());
        assert_eq!(queue.extract_max(), Ok(21));
        assert_eq!(queue.extract_max(), Ok(16));
    }

    #[test]
    fn test_insert_into_empty_and_minimum() {
        let mut queue = MaxPriorityQueue::default();
        queue.insert(i64::MIN);
        queue.insert(-3);
        assert_eq!(queue.heap_maximum(), Ok(-3));
        assert_eq!(queue.extract_max(), Ok(-3));
        assert_eq!(queue.extract_max(), Ok(i64::MIN));
    }

    #[test]
    fn test_increase_key() {
        let mut queue = clrs_queue();
        // Index 8 holds 4; raising it to 15 moves it up under the root.
        queue.increase_key(8, 15).unwrap();
        assert_eq!(queue.as_slice(), &[16, 15, 10, 14, 7, 9, 3, 2, 8, 1]);
        assert_heap_property(queue.as_slice());

        queue.increase_key(9, 100).unwrap();
        assert_eq!(queue.heap_maximum(), Ok(100));
        assert_heap_property(queue.as_slice());
    }

    #[test]
    fn test_increase_key_equal_is_noop() {
        let mut queue = clrs_queue();
        let before = queue.clone();
        queue.increase_key(3, 8).unwrap();
        assert_eq!(queue, before);
    }

    #[test]
    fn test_increase_key_too_small() {
        let mut queue = clrs_queue();
        let before = queue.clone();
        assert_eq!(
            queue.increase_key(1, 3),
            Err(Error::KeyTooSmall {
                index: 1,
                current: 14,
                new: 3
            })
        );
        assert_eq!(queue, before);
    }

    #[test]
    fn test_increase_key_out_of_bounds() {
        let mut queue = clrs_queue();
        assert_eq!(
            queue.increase_key(10, 50),
            Err(Error::IndexOutOfBounds { index: 10, len: 10 })
        );
        let mut empty = MaxPriorityQueue::default();
        assert_eq!(
            empty.increase_key(0, 1),
            Err(Error::IndexOutOfBounds { index: 0, len: 0 })
        );
    }
}
