//! Merge sort.

/// Sorts a slice with top-down merge sort.
///
/// Recursively sorts both halves, then merges them through a temporary
/// buffer. O(n log n) in every case and stable; the `Clone` bound pays for
/// the buffer.
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);
    merge(arr, mid);
}

/// Merges the two sorted runs `arr[..mid]` and `arr[mid..]`.
fn merge<T: Ord + Clone>(arr: &mut [T], mid: usize) {
    let left: Vec<T> = arr[..mid].to_vec();
    let right: Vec<T> = arr[mid..].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in arr.iter_mut() {
        // `<=` keeps the left run's elements first on ties (stability)
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_demo_input() {
        let mut arr = [12, 11, 13, 5, 6];
        merge_sort(&mut arr);
        assert_eq!(arr, [5, 6, 11, 12, 13]);
    }

    #[test]
    fn test_stability() {
        let mut arr = [(2, 0), (1, 1), (2, 2), (1, 3)];
        merge_sort_by_first(&mut arr);
        assert_eq!(arr, [(1, 1), (1, 3), (2, 0), (2, 2)]);
    }

    // Same merge shape, comparing only the first component.
    fn merge_sort_by_first(arr: &mut [(i32, i32)]) {
        let n = arr.len();
        if n < 2 {
            return;
        }
        let mid = n / 2;
        merge_sort_by_first(&mut arr[..mid]);
        merge_sort_by_first(&mut arr[mid..]);
        let left: Vec<_> = arr[..mid].to_vec();
        let right: Vec<_> = arr[mid..].to_vec();
        let (mut i, mut j) = (0, 0);
        for slot in arr.iter_mut() {
            if j >= right.len() || (i < left.len() && left[i].0 <= right[j].0) {
                *slot = left[i];
                i += 1;
            } else {
                *slot = right[j];
                j += 1;
            }
        }
    }

    #[test]
    fn test_odd_length() {
        let mut arr = [9, 7, 5, 3, 1];
        merge_sort(&mut arr);
        assert_eq!(arr, [1, 3, 5, 7, 9]);
    }
}
