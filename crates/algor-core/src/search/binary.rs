//! Binary search.

use std::cmp::Ordering;

/// Returns the index of `target` in a sorted slice, halving the search range
/// each probe.
///
/// O(log n). The slice must be sorted ascending; with duplicates, any
/// matching index may be returned.
///
/// # Example
///
/// ```
/// use algor_core::search::binary_search;
///
/// let arr = [5, 6, 11, 12, 13];
/// assert_eq!(binary_search(&arr, &6), Some(1));
/// assert_eq!(binary_search(&arr, &7), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search(arr, target, 0)
}

/// Recursive kernel; `offset` tracks how much of the original slice has been
/// cut away on the left so returned indices stay absolute.
fn search<T: Ord>(arr: &[T], target: &T, offset: usize) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let mid = arr.len() / 2;
    match target.cmp(&arr[mid]) {
        Ordering::Equal => Some(offset + mid),
        Ordering::Less => search(&arr[..mid], target, offset),
        Ordering::Greater => search(&arr[mid + 1..], target, offset + mid + 1),
    }
}
