//! Error types for k-sorting.

use thiserror::Error;

/// Errors returned by the sorting entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KSortError {
    /// The bound `k` does not leave room for a `k + 1` element window.
    #[error("invalid argument: bound k = {k} must be smaller than sequence length {len}")]
    InvalidArgument { k: usize, len: usize },

    /// Returned by [`ksort_checked`](crate::ksort_checked) when the output is not
    /// non-decreasing, meaning the input was not actually k-sorted for the given `k`.
    #[error("input is not k-sorted: output decreases at index {index}")]
    NotKSorted { index: usize },
}

pub type Result<T> = std::result::Result<T, KSortError>;
