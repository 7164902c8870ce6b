//! Array-backed Max-Heap
//!
//! A binary max-heap stored in a flat vector. Element `i` has its children at
//! `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`:
//!
//! ```text
//!                 [0] 16
//!               /        \
//!          [1] 14        [2] 10
//!          /    \        /    \
//!      [3] 8  [4] 7  [5] 9  [6] 3
//!      /   \   /
//!    [7]2 [8]4 [9]1
//!
//!   buffer: [16, 14, 10, 8, 7, 9, 3, 2, 4, 1]
//! ```
//!
//! Every parent is greater than or equal to both of its children, so the
//! maximum is always at index 0.
//!
//! | Operation     | Time       |
//! |---------------|------------|
//! | `from_vec`    | O(n)       |
//! | `max_heapify` | O(log n)   |
//! | `peek`        | O(1)       |

extern crate alloc;

use alloc::vec::Vec;

/// Index of the left child of `i`.
#[inline]
pub const fn left(i: usize) -> usize {
    (i << 1) + 1
}

/// Index of the right child of `i`.
#[inline]
pub const fn right(i: usize) -> usize {
    (i << 1) + 2
}

/// Index of the parent of `i`. The root has no parent; callers must pass `i > 0`.
#[inline]
pub const fn parent(i: usize) -> usize {
    (i - 1) >> 1
}

/// A max-heap of `i64` values.
///
/// # Examples
///
/// ```
/// use recency::MaxHeap;
///
/// let heap = MaxHeap::from_vec(vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7]);
/// assert_eq!(heap.peek(), Some(16));
/// assert_eq!(heap.as_slice(), &[16, 14, 10, 8, 7, 9, 3, 2, 4, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaxHeap {
    data: Vec<i64>,
}

impl MaxHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Builds a heap in place from arbitrary values.
    ///
    /// Sifts down every non-leaf, from the last one back to the root.
    pub fn from_vec(data: Vec<i64>) -> Self {
        let mut heap = Self { data };
        for i in (0..heap.data.len() / 2).rev() {
            heap.max_heapify(i);
        }
        heap
    }

    /// Restores the heap property for the subtree rooted at `i`, assuming both
    /// of its child subtrees are already heaps.
    ///
    /// Out-of-range indices are ignored.
    pub fn max_heapify(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let l = left(i);
            let r = right(i);

            let mut largest = i;
            if l < len && self.data[l] > self.data[largest] {
                largest = l;
            }
            if r < len && self.data[r] > self.data[largest] {
                largest = r;
            }
            if largest == i {
                return;
            }

            self.data.swap(i, largest);
            i = largest;
        }
    }

    /// Moves the value at `i` towards the root until its parent is not smaller.
    pub(crate) fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if self.data[p] >= self.data[i] {
                break;
            }
            self.data.swap(p, i);
            i = p;
        }
    }

    pub(crate) fn get(&self, i: usize) -> Option<i64> {
        self.data.get(i).copied()
    }

    /// Overwrites the value at `i` without restoring the heap property.
    pub(crate) fn replace(&mut self, i: usize, value: i64) {
        self.data[i] = value;
    }

    pub(crate) fn push_unordered(&mut self, value: i64) -> usize {
        self.data.push(value);
        self.data.len() - 1
    }

    /// Removes the root, moving the last leaf into its place and sifting it down.
    pub(crate) fn pop_root(&mut self) -> Option<i64> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let max = core::mem::replace(&mut self.data[0], last);
        self.max_heapify(0);
        Some(max)
    }

    /// Returns the largest value, if any.
    #[inline]
    pub fn peek(&self) -> Option<i64> {
        self.data.first().copied()
    }

    /// Returns the number of values in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the backing buffer in heap order.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Consumes the heap, returning the backing buffer in heap order.
    pub fn into_vec(self) -> Vec<i64> {
        self.data
    }
}

impl From<Vec<i64>> for MaxHeap {
    fn from(data: Vec<i64>) -> Self {
        Self::from_vec(data)
    }
}

impl FromIterator<i64> for MaxHeap {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
