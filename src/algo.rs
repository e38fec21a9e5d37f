//! Bounded-window selection sort.
//!
//! A k-sorted sequence has every element within `k` slots of its sorted position,
//! so the smallest element not yet emitted is always among the next `k + 1` unread
//! ones. The sorter keeps exactly those candidates in a [`MinWindow`]:
//!
//! 1. **Fill**: insert the first `k + 1` elements.
//! 2. **Steady state**: for every remaining element, emit the window minimum and
//!    insert the element.
//! 3. **Drain**: emit the window minimum until the window is empty.
//!
//! This runs in `O(n log k)` time with `O(k)` auxiliary space.
//!
//! The main entry points are [`ksort`] and [`ksort_mut`].

use crate::core::{HeapWindow, MinWindow};
use crate::error::{KSortError, Result};
use crate::verify::first_descent;
use tracing::{debug, warn};

/// Sorts a k-sorted slice into a new vector.
///
/// The input is not modified. If the input is not actually k-sorted for the given
/// `k`, the result is still a permutation of the input but may not be fully sorted.
///
/// # Arguments
///
/// * `data` - The k-sorted slice.
/// * `k` - Maximum distance of any element from its sorted position.
///
/// # Errors
///
/// Returns [`KSortError::InvalidArgument`] if `k >= data.len()`.
///
/// # Examples
///
/// ```
/// use ksort::ksort;
///
/// let data = [3, 6, 2, 8, 7];
/// let sorted = ksort(&data, 2).unwrap();
///
/// assert_eq!(sorted, vec![2, 3, 6, 7, 8]);
/// ```
pub fn ksort<T: Ord + Clone>(data: &[T], k: usize) -> Result<Vec<T>> {
    ksort_with::<T, HeapWindow<T>>(data, k)
}

/// Sorts a k-sorted slice in-place.
///
/// Window minimums are written back from index 0 while the read cursor stays
/// `k + 1` slots ahead, so no unread element is overwritten. The window is the only
/// auxiliary storage.
///
/// # Errors
///
/// Returns [`KSortError::InvalidArgument`] if `k >= data.len()`. The slice is left
/// untouched in that case.
///
/// # Examples
///
/// ```
/// use ksort::ksort_mut;
///
/// let mut data = vec!["b", "a", "d", "c"];
/// ksort_mut(&mut data, 1).unwrap();
///
/// assert_eq!(data, vec!["a", "b", "c", "d"]);
/// ```
pub fn ksort_mut<T: Ord + Clone>(data: &mut [T], k: usize) -> Result<()> {
    ksort_mut_with::<T, HeapWindow<T>>(data, k)
}

/// Same as [`ksort`], with a caller-chosen window implementation.
///
/// ```
/// use ksort::{ksort_with, TreeWindow};
///
/// let sorted = ksort_with::<_, TreeWindow<_>>(&[1, 0, 3, 2], 1).unwrap();
/// assert_eq!(sorted, vec![0, 1, 2, 3]);
/// ```
pub fn ksort_with<T, W>(data: &[T], k: usize) -> Result<Vec<T>>
where
    T: Ord + Clone,
    W: MinWindow<T>,
{
    check_bound(data.len(), k)?;
    debug!(len = data.len(), k, "ksort: sorting into new vector");

    let (head, tail) = data.split_at(k + 1);
    let mut window = W::with_capacity(k + 1);
    head.iter().cloned().for_each(|item| window.insert(item));

    let mut sorted = Vec::with_capacity(data.len());
    for item in tail {
        // Window is full here, extract before insert keeps it at k + 1.
        if let Some(min) = window.extract_min() {
            sorted.push(min);
        }
        window.insert(item.clone());
    }

    while let Some(min) = window.extract_min() {
        sorted.push(min);
    }

    report_unsorted(&sorted, k);
    Ok(sorted)
}

/// Same as [`ksort_mut`], with a caller-chosen window implementation.
pub fn ksort_mut_with<T, W>(data: &mut [T], k: usize) -> Result<()>
where
    T: Ord + Clone,
    W: MinWindow<T>,
{
    let len = data.len();
    check_bound(len, k)?;
    debug!(len, k, "ksort: sorting in place");

    let mut window = W::with_capacity(k + 1);
    data[..=k].iter().cloned().for_each(|item| window.insert(item));

    // Write cursor; always trails the read cursor `read`.
    let mut pos = 0;
    for read in k + 1..len {
        debug_assert!(pos < read);
        if let Some(min) = window.extract_min() {
            data[pos] = min;
            pos += 1;
        }
        window.insert(data[read].clone());
    }

    while let Some(min) = window.extract_min() {
        data[pos] = min;
        pos += 1;
    }
    debug_assert_eq!(pos, len);

    report_unsorted(data, k);
    Ok(())
}

/// Sorts like [`ksort`] and then verifies the result.
///
/// This is the opt-in validated path: one extra `O(n)` pass over the output.
///
/// # Errors
///
/// - [`KSortError::InvalidArgument`] if `k >= data.len()`.
/// - [`KSortError::NotKSorted`] if the output is not non-decreasing. This proves
///   `data` was not k-sorted. The converse does not hold: some inputs that are not
///   k-sorted still come out sorted (`[3, 1, 2]` with `k = 1`). Use
///   [`is_k_sorted`](crate::is_k_sorted) to check the input itself.
///
/// # Examples
///
/// ```
/// use ksort::{ksort_checked, KSortError};
///
/// // 1 sits four slots from its sorted position.
/// let err = ksort_checked(&[2, 3, 4, 5, 1], 1).unwrap_err();
/// assert!(matches!(err, KSortError::NotKSorted { .. }));
///
/// // Not 1-sorted, but the window still happens to produce sorted output.
/// assert_eq!(ksort_checked(&[3, 1, 2], 1).unwrap(), vec![1, 2, 3]);
/// assert!(!ksort::is_k_sorted(&[3, 1, 2], 1));
/// ```
pub fn ksort_checked<T: Ord + Clone>(data: &[T], k: usize) -> Result<Vec<T>> {
    let sorted = ksort(data, k)?;
    match first_descent(&sorted) {
        Some(index) => {
            warn!(len = data.len(), k, index, "ksort: input is not k-sorted");
            Err(KSortError::NotKSorted { index })
        }
        None => Ok(sorted),
    }
}

fn check_bound(len: usize, k: usize) -> Result<()> {
    if k >= len {
        debug!(len, k, "ksort: rejecting bound, window would run past the input");
        return Err(KSortError::InvalidArgument { k, len });
    }
    Ok(())
}

/// Debug builds log when the output came out unsorted. Behaviour is unchanged.
#[inline]
fn report_unsorted<T: Ord>(sorted: &[T], k: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Some(index) = first_descent(sorted) {
        debug!(k, index, "ksort: output not sorted, k was underestimated");
    }
}
