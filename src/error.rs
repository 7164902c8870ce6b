//! Error types shared by every structure in the crate.
//!
//! All fallible operations return [`Result`], an alias over [`Error`]. Errors are
//! handed straight back to the caller: nothing is retried internally and a failed
//! operation never leaves a structure partially mutated.
//!
//! Eviction is not an error. Evicting the least recently used entry is the
//! expected outcome of inserting into a full cache, and is reported through [`EvictionListener`](crate::lru::EvictionListener) and the
//! cache metrics instead.

use core::fmt;

use crate::Key;

/// Errors reported by the cache, the recency list, the heap and the priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A cache or configuration was constructed with unusable parameters,
    /// such as a capacity of zero.
    InvalidConfiguration(&'static str),
    /// A lookup was made against a cache holding no entries.
    EmptyCache,
    /// An operation needing at least one element ran against an empty collection.
    EmptyCollection,
    /// The requested key is not present in the cache.
    KeyNotFound(Key),
    /// `increase_key` was asked to lower the value at `index`.
    KeyTooSmall {
        /// Position in the heap that was targeted.
        index: usize,
        /// Value currently stored at `index`.
        current: i64,
        /// Rejected replacement value.
        new: i64,
    },
    /// A heap position past the end of the heap was addressed.
    IndexOutOfBounds {
        /// Position that was requested.
        index: usize,
        /// Number of elements in the heap.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(reason) => write!(f, "invalid configuration: {reason}"),
            Error::EmptyCache => f.write_str("empty cache"),
            Error::EmptyCollection => f.write_str("empty collection"),
            Error::KeyNotFound(key) => write!(f, "key not found: {key}"),
            Error::KeyTooSmall {
                index,
                current,
                new,
            } => write!(
                f,
                "new key {new} is smaller than current key {current} at index {index}"
            ),
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for heap of length {len}")
            }
        }
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::EmptyCache.to_string(), "empty cache");
        assert_eq!(Error::EmptyCollection.to_string(), "empty collection");
        assert_eq!(Error::KeyNotFound(42).to_string(), "key not found: 42");
        assert_eq!(
            Error::InvalidConfiguration("capacity must be greater than zero").to_string(),
            "invalid configuration: capacity must be greater than zero"
        );
        assert_eq!(
            Error::KeyTooSmall {
                index: 3,
                current: 9,
                new: 1
            }
            .to_string(),
            "new key 1 is smaller than current key 9 at index 3"
        );
        assert_eq!(
            Error::IndexOutOfBounds { index: 7, len: 2 }.to_string(),
            "index 7 out of bounds for heap of length 2"
        );
    }

    #[test]
    fn test_errors_compare_by_value() {
        assert_eq!(Error::KeyNotFound(1), Error::KeyNotFound(1));
        assert_ne!(Error::KeyNotFound(1), Error::KeyNotFound(2));
        assert_ne!(Error::EmptyCache, Error::EmptyCollection);
    }
}
