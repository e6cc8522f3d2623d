//! Fast, non-cryptographic hashing.
//!
//! FxHash is optimized for the small integer keys (vertex indices, PQ handles)
//! that dominate this codebase. These aliases keep the hasher choice in one
//! place.

use rustc_hash::FxBuildHasher;

/// The hasher used for all hash-based collections in the workspace.
pub type FxHasher = FxBuildHasher;

/// HashMap with FxHash.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// HashSet with FxHash.
pub type FxHashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;
