//! Helpers for checking the k-sorted precondition.
//!
//! The sorters never call these on their default path; they exist for callers who
//! want to validate input, or find the right `k`, before sorting.

/// Returns `true` if `data` is in non-decreasing order.
///
/// ```
/// assert!(ksort::is_sorted(&[1, 1, 2]));
/// assert!(!ksort::is_sorted(&[2, 1]));
/// ```
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    first_descent(data).is_none()
}

/// Returns the smallest `k` for which `data` is k-sorted.
///
/// This is the largest distance between an element's index and its index in the
/// sorted order. Equal elements keep their relative order when ranked, which gives
/// the smallest possible distance for them. Runs in `O(n log n)`.
///
/// ```
/// use ksort::displacement;
///
/// assert_eq!(displacement(&[3, 6, 2, 8, 7]), 2);
/// assert_eq!(displacement(&[1, 2, 3]), 0);
/// assert_eq!(displacement::<u8>(&[]), 0);
/// ```
pub fn displacement<T: Ord>(data: &[T]) -> usize {
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&a, &b| data[a].cmp(&data[b]));

    order
        .iter()
        .enumerate()
        .map(|(rank, &index)| rank.abs_diff(index))
        .max()
        .unwrap_or(0)
}

/// Returns `true` if every element of `data` is at most `k` slots from its sorted
/// position.
///
/// ```
/// use ksort::is_k_sorted;
///
/// assert!(is_k_sorted(&[3, 6, 2, 8, 7], 2));
/// assert!(!is_k_sorted(&[3, 6, 2, 8, 7], 1));
/// ```
pub fn is_k_sorted<T: Ord>(data: &[T], k: usize) -> bool {
    displacement(data) <= k
}

/// Index of the first element smaller than its predecessor.
pub(crate) fn first_descent<T: Ord>(data: &[T]) -> Option<usize> {
    data.windows(2).position(|w| w[1] < w[0]).map(|i| i + 1)
}
