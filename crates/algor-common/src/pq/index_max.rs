//! Maximum-oriented indexed priority queue.

use super::heap::IndexedHeap;
use crate::utils::error::Result;

/// An indexed priority queue of generic keys, largest key first.
///
/// The mirror image of [`IndexMinPq`](crate::pq::IndexMinPq): same handles,
/// same inverse-mapped binary heap, opposite orientation. See that type for
/// the full operation contract; only the key-ordering direction differs
/// (`decrease_key` here sinks, `increase_key` swims).
pub struct IndexMaxPq<K: Ord> {
    heap: IndexedHeap<K, false>,
}

impl<K: Ord> IndexMaxPq<K> {
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

    /// Returns the handle associated with the maximum key.
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        self.heap.top_index()
    }

    /// Returns the maximum key.
    #[must_use]
    pub fn max_key(&self) -> Option<&K> {
        self.heap.top_key()
    }

    /// Removes the maximum key, returning its handle and key.
    pub fn del_max(&mut self) -> Option<(usize, K)> {
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

    /// Increases the key associated with handle `i` to `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is out of range, not on the queue, or if `key`
    /// is not strictly larger than the current key.
    pub fn increase_key(&mut self, i: usize, key: K) -> Result<()> {
        self.heap
            .promote_key(i, key, "increase_key requires a strictly larger key")
    }

    /// Decreases the key associated with handle `i` to `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `i` is out of range, not on the queue, or if `key`
    /// is not strictly smaller than the current key.
    pub fn decrease_key(&mut self, i: usize, key: K) -> Result<()> {
        self.heap
            .demote_key(i, key, "decrease_key requires a strictly smaller key")
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

impl<K: Ord + Clone> IndexMaxPq<K> {
    /// Returns the handles on the queue in descending key order.
    #[must_use]
    pub fn ordered_indices(&self) -> Vec<usize> {
        self.heap.ordered_indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Error;

    #[test]
    fn test_insert_and_del_max() {
        let strings = ["it", "was", "the", "best", "of", "times"];
        let mut pq = IndexMaxPq::with_capacity(strings.len());
        for (i, s) in strings.iter().enumerate() {
            pq.insert(i, *s).unwrap();
        }

        let mut drained = Vec::new();
        while let Some((i, _)) = pq.del_max() {
            drained.push(strings[i]);
        }
        assert_eq!(drained, vec!["was", "times", "the", "of", "it", "best"]);
    }

    #[test]
    fn test_increase_key_moves_handle_up() {
        let mut pq = IndexMaxPq::with_capacity(4);
        pq.insert(0, 10).unwrap();
        pq.insert(1, 20).unwrap();
        pq.increase_key(0, 25).unwrap();
        assert_eq!(pq.max_index(), Some(0));
    }

    #[test]
    fn test_key_order_checks_are_mirrored() {
        let mut pq = IndexMaxPq::with_capacity(4);
        pq.insert(0, 10).unwrap();
        // increase_key must strictly increase, decrease_key strictly decrease
        assert!(matches!(pq.increase_key(0, 10), Err(Error::KeyOrder(_))));
        assert!(matches!(pq.increase_key(0, 9), Err(Error::KeyOrder(_))));
        assert!(matches!(pq.decrease_key(0, 10), Err(Error::KeyOrder(_))));
        assert!(matches!(pq.decrease_key(0, 11), Err(Error::KeyOrder(_))));
        pq.decrease_key(0, 1).unwrap();
        assert_eq!(pq.key_of(0), Ok(&1));
    }

    #[test]
    fn test_ordered_indices_descending() {
        let mut pq = IndexMaxPq::with_capacity(8);
        for (i, key) in [40, 10, 30, 20].into_iter().enumerate() {
            pq.insert(i, key).unwrap();
        }
        assert_eq!(pq.ordered_indices(), vec![0, 2, 3, 1]);
        assert_eq!(pq.len(), 4);
    }

    #[test]
    fn test_max_peek() {
        let mut pq = IndexMaxPq::with_capacity(4);
        assert_eq!(pq.max_index(), None);
        assert_eq!(pq.max_key(), None);
        pq.insert(3, 7).unwrap();
        assert_eq!(pq.max_index(), Some(3));
        assert_eq!(pq.max_key(), Some(&7));
    }
}
