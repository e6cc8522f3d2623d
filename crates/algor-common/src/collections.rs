//! Standard collection type aliases.
//!
//! Use these instead of direct HashMap/HashSet so the whole workspace hashes
//! the same way.
//!
//! | Type | Use Case |
//! |------|----------|
//! | [`AlgorMap`] | Hash map |
//! | [`AlgorSet`] | Hash set |
//! | [`AlgorIndexMap`] | Insertion-order preserving map |

use rustc_hash::FxBuildHasher;

/// Standard HashMap with FxHash (fast, non-cryptographic).
pub type AlgorMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Standard HashSet with FxHash.
pub type AlgorSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Ordered map preserving insertion order.
///
/// Used where iteration order matters (e.g. the demo registry).
pub type AlgorIndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Create a new empty [`AlgorMap`].
#[inline]
#[must_use]
pub fn algor_map<K, V>() -> AlgorMap<K, V> {
    AlgorMap::default()
}

/// Create a new empty [`AlgorSet`].
#[inline]
#[must_use]
pub fn algor_set<T>() -> AlgorSet<T> {
    AlgorSet::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_roundtrip() {
        let mut map: AlgorMap<String, i32> = algor_map();
        map.insert("key".to_string(), 42);
        assert_eq!(map.get("key"), Some(&42));
    }

    #[test]
    fn test_index_map_preserves_order() {
        let mut map: AlgorIndexMap<&str, i32> = AlgorIndexMap::default();
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }
}
