//! Minimum-oriented indexed priority queue.

use super::heap::IndexedHeap;
use crate::utils::error::Result;

/// An indexed priority queue of generic keys, smallest key first.
///
/// Keys are associated with external handles in `0..capacity`; the handle is
/// how clients refer back to a queued key to change or delete it. This is the
/// queue Dijkstra's algorithm drives: vertices are handles, tentative
/// distances are keys, and every relaxation is a `decrease_key`.
///
/// Construction is O(capacity); `insert`, `del_min`, `delete`, and the three
/// key-change operations are O(log n).
///
/// # Example
///
/// ```
/// use algor_common::pq::IndexMinPq;
///
/// let mut pq = IndexMinPq::with_capacity(10);
/// pq.insert(0, "was").unwrap();
/// pq.insert(1, "it").unwrap();
/// pq.insert(2, "the").unwrap();
/// assert_eq!(pq.min_index(), Some(1)); // "it" sorts first
/// assert_eq!(pq.del_min(), Some((1, "it")));
/// ```
pub struct IndexMinPq<K: Ord> {
    heap: IndexedHeap<K, true>,
}

impl<K: Ord> IndexMinPq<K> {
    /// Creates an empty queue accepting handles `0..capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: IndexedHeap::with_capacity(capacity),
        }
    }

    /// Returns the number of handles the queue accepts.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the number of keys on the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Is `i` a handle on the queue?
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is outside `0..capacity`.
    pub fn contains(&self, i: usize) -> Result<bool> {
        self.heap.contains(i)
    }

    /// Associates `key` with handle `i`.
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is out of range or already on the queue.
    pub fn insert(&mut self, i: usize, key: K) -> Result<()> {
        self.heap.insert(i, key)
    }

    /// Returns the handle associated with the minimum key.
    #[must_use]
    pub fn min_index(&self) -> Option<usize> {
        self.heap.top_index()
    }

    /// Returns the minimum key.
    #[must_use]
    pub fn min_key(&self) -> Option<&K> {
        self.heap.top_key()
    }

    /// Removes the minimum key, returning its handle and key.
    pub fn del_min(&mut self) -> Option<(usize, K)> {
        self.heap.pop()
    }

    /// Returns the key associated with handle `i`.
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is out of range or not on the queue.
    pub fn key_of(&self, i: usize) -> Result<&K> {
        self.heap.key_of(i)
    }

    /// Changes the key associated with handle `i` to `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is out of range or not on the queue.
    pub fn change_key(&mut self, i: usize, key: K) -> Result<()> {
        self.heap.change_key(i, key)
    }

    /// Decreases the key associated with handle `i` to `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is out of range, not on the queue, or if `key`
    /// is not strictly smaller than the current key.
    pub fn decrease_key(&mut self, i: usize, key: K) -> Result<()> {
        self.heap
            .promote_key(i, key, "decrease_key requires a strictly smaller key")
    }

    /// Increases the key associated with handle `i` to `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is out of range, not on the queue, or if `key`
    /// is not strictly larger than the current key.
    pub fn increase_key(&mut self, i: usize, key: K) -> Result<()> {
        self.heap
            .demote_key(i, key, "increase_key requires a strictly larger key")
    }

    /// Removes handle `i` and returns its key.
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is out of range or not on the queue.
    pub fn delete(&mut self, i: usize) -> Result<K> {
        self.heap.delete(i)
    }
}

impl<K: Ord + Clone> IndexMinPq<K> {
    /// Returns the handles on the queue in ascending key order.
    #[must_use]
    pub fn ordered_indices(&self) -> Vec<usize> {
        self.heap.ordered_indices()
    }
}
