//! The binary-heap core shared by both indexed priority queue orientations.
//!
//! Three parallel structures back the queue:
//!
//! - `pq` - the 1-based binary heap; `pq[i]` is the handle sitting at heap
//!   slot `i`.
//! - `qp` - the inverse map; `qp[h]` is the heap slot of handle `h`, or
//!   `None` when `h` is not on the queue.
//! - `keys` - the key slab; `keys[h]` is the key associated with handle `h`.
//!
//! The invariant `pq[qp[h]] == h` and `qp[pq[i]] == i` holds for every live
//! handle after every operation; `exch` is the only place heap slots move and
//! it updates both directions of the mapping.

use crate::utils::error::{Error, Result};

/// Heap-ordered indexed storage, oriented at compile time.
///
/// `MIN == true` keeps the smallest key at the root, `MIN == false` the
/// largest. The public [`IndexMinPq`](crate::pq::IndexMinPq) and
/// [`IndexMaxPq`](crate::pq::IndexMaxPq) types wrap this with oriented method
/// names.
pub(crate) struct IndexedHeap<K, const MIN: bool> {
    /// Number of handles the queue accepts (valid handles are `0..capacity`).
    capacity: usize,
    /// Number of elements currently on the queue.
    n: usize,
    /// Binary heap of handles, 1-based; `pq[0]` is unused.
    pq: Vec<usize>,
    /// Inverse of `pq`: heap slot per handle.
    qp: Vec<Option<usize>>,
    /// Key per handle.
    keys: Vec<Option<K>>,
}

impl<K: Ord, const MIN: bool> IndexedHeap<K, MIN> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            n: 0,
            pq: vec![0; capacity + 1],
            qp: vec![None; capacity],
            keys: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.n
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub(crate) fn contains(&self, i: usize) -> Result<bool> {
        self.validate_index(i)?;
        Ok(self.qp[i].is_some())
    }

    pub(crate) fn insert(&mut self, i: usize, key: K) -> Result<()> {
        self.validate_index(i)?;
        if self.qp[i].is_some() {
            return Err(Error::DuplicateIndex(i));
        }
        self.n += 1;
        self.qp[i] = Some(self.n);
        self.pq[self.n] = i;
        self.keys[i] = Some(key);
        self.swim(self.n);
        Ok(())
    }

    /// Handle at the root (extreme key), if any.
    pub(crate) fn top_index(&self) -> Option<usize> {
        if self.n == 0 { None } else { Some(self.pq[1]) }
    }

    /// Key at the root, if any.
    pub(crate) fn top_key(&self) -> Option<&K> {
        self.top_index().and_then(|i| self.keys[i].as_ref())
    }

    /// Removes the root and returns its handle and key.
    pub(crate) fn pop(&mut self) -> Option<(usize, K)> {
        if self.n == 0 {
            return None;
        }
        let top = self.pq[1];
        self.exch(1, self.n);
        self.n -= 1;
        self.sink(1);
        debug_assert_eq!(top, self.pq[self.n + 1]);
        self.qp[top] = None;
        let key = self.keys[top].take();
        key.map(|k| (top, k))
    }

    pub(crate) fn key_of(&self, i: usize) -> Result<&K> {
        self.validate_index(i)?;
        self.keys[i].as_ref().ok_or(Error::IndexNotPresent(i))
    }

    /// Replaces the key for `i`, restoring heap order in whichever direction
    /// the change requires.
    pub(crate) fn change_key(&mut self, i: usize, key: K) -> Result<()> {
        self.validate_index(i)?;
        let slot = self.qp[i].ok_or(Error::IndexNotPresent(i))?;
        self.keys[i] = Some(key);
        self.swim(slot);
        self.sink(self.qp[i].expect("slot tracked by qp"));
        Ok(())
    }

    /// Moves the key for `i` strictly toward the root orientation.
    ///
    /// For a min-queue this is `decrease_key`; the new key must be strictly
    /// smaller than the current one. The heap only needs a swim.
    pub(crate) fn promote_key(&mut self, i: usize, key: K, msg: &'static str) -> Result<()> {
        self.validate_index(i)?;
        let slot = self.qp[i].ok_or(Error::IndexNotPresent(i))?;
        let current = self.keys[i].as_ref().expect("key present for live handle");
        if !Self::favors(&key, current) {
            return Err(Error::KeyOrder(msg));
        }
        self.keys[i] = Some(key);
        self.swim(slot);
        Ok(())
    }

    /// Moves the key for `i` strictly away from the root orientation.
    ///
    /// For a min-queue this is `increase_key`; the new key must be strictly
    /// larger than the current one. The heap only needs a sink.
    pub(crate) fn demote_key(&mut self, i: usize, key: K, msg: &'static str) -> Result<()> {
        self.validate_index(i)?;
        let slot = self.qp[i].ok_or(Error::IndexNotPresent(i))?;
        let current = self.keys[i].as_ref().expect("key present for live handle");
        if !Self::favors(current, &key) {
            return Err(Error::KeyOrder(msg));
        }
        self.keys[i] = Some(key);
        self.sink(slot);
        Ok(())
    }

    /// Removes handle `i` from wherever it sits in the heap.
    pub(crate) fn delete(&mut self, i: usize) -> Result<K> {
        self.validate_index(i)?;
        let slot = self.qp[i].ok_or(Error::IndexNotPresent(i))?;
        self.exch(slot, self.n);
        self.n -= 1;
        if slot <= self.n {
            self.swim(slot);
            self.sink(slot);
        }
        self.qp[i] = None;
        let key = self.keys[i].take().expect("key present for live handle");
        Ok(key)
    }

    fn validate_index(&self, i: usize) -> Result<()> {
        if i >= self.capacity {
            return Err(Error::IndexOutOfRange {
                index: i,
                max: self.capacity,
            });
        }
        Ok(())
    }

    /// True when `a` should sit closer to the root than `b`.
    fn favors(a: &K, b: &K) -> bool {
        if MIN { a < b } else { a > b }
    }

    /// True when the handle at heap slot `i` must move away from the root
    /// relative to slot `j`.
    fn misplaced(&self, i: usize, j: usize) -> bool {
        let a = self.keys[self.pq[i]].as_ref().expect("live heap slot");
        let b = self.keys[self.pq[j]].as_ref().expect("live heap slot");
        Self::favors(b, a)
    }

    /// Swaps heap slots `i` and `j`, keeping `qp` in sync.
    fn exch(&mut self, i: usize, j: usize) {
        self.pq.swap(i, j);
        self.qp[self.pq[i]] = Some(i);
        self.qp[self.pq[j]] = Some(j);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.misplaced(k / 2, k) {
            self.exch(k, k / 2);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.n {
            let mut j = 2 * k;
            if j < self.n && self.misplaced(j, j + 1) {
                j += 1;
            }
            if !self.misplaced(k, j) {
                break;
            }
            self.exch(k, j);
            k = j;
        }
    }
}

impl<K: Ord + Clone, const MIN: bool> IndexedHeap<K, MIN> {
    /// Handles in key order, favored first.
    ///
    /// Clones the heap and pops it dry; building the copy is O(n) since the
    /// source is already heap-ordered.
    pub(crate) fn ordered_indices(&self) -> Vec<usize> {
        let mut copy: IndexedHeap<K, MIN> = IndexedHeap::with_capacity(self.capacity);
        for slot in 1..=self.n {
            let handle = self.pq[slot];
            let key = self.keys[handle].clone().expect("live heap slot");
            copy.insert(handle, key).expect("copy accepts live handles");
        }
        let mut order = Vec::with_capacity(self.n);
        while let Some((handle, _)) = copy.pop() {
            order.push(handle);
        }
        order
    }
}
