//! Linear search.

/// Returns the index of the first element equal to `target`, scanning left
/// to right.
///
/// O(n); works on unsorted slices.
///
/// # Example
///
/// ```
/// use algor_core::search::linear_search;
///
/// let arr = [12, 11, 13, 5, 6];
/// assert_eq!(linear_search(&arr, &6), Some(4));
/// assert_eq!(linear_search(&arr, &7), None);
/// ```
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|item| item == target)
}
