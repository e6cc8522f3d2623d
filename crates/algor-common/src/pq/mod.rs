//! Indexed priority queues.
//!
//! An indexed priority queue associates keys with external integer handles in
//! `0..capacity`. Clients use the handle - not an opaque reference - to
//! decrease, increase, change, or delete a key after insertion, which is what
//! makes the structure suitable for Dijkstra-style relaxation loops.
//!
//! Both orientations share one binary-heap core ([`IndexMinPq`] favors the
//! smallest key, [`IndexMaxPq`] the largest); every mutating operation is
//! O(log n).

mod heap;
mod index_max;
mod index_min;

pub use index_max::IndexMaxPq;
pub use index_min::IndexMinPq;
