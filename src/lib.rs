//! # ksort
//!
//! `ksort` sorts *k-sorted* sequences: sequences in which every element sits at most
//! `k` positions away from where it belongs in sorted order. Such data shows up as
//! slightly out-of-order event streams, merged logs with bounded clock skew, or
//! network packets reordered within a fixed window.
//!
//! Because the next smallest element is always among the next `k + 1` unread ones,
//! a sliding min-window of that size is enough to sort the whole sequence.
//!
//! ## Key Features
//!
//! - **`O(n log k)` time, `O(k)` space**: Much cheaper than a general-purpose sort
//!   when `k` is small relative to `n`.
//! - **Copy or In-Place**: [`ksort`] returns a new `Vec`, [`ksort_mut`] rewrites the
//!   slice with only the window as auxiliary storage.
//! - **Streaming**: [`KSortIterExt::ksorted`] sorts any iterator lazily.
//! - **Pluggable window**: The [`MinWindow`] trait abstracts the priority structure.
//!   [`HeapWindow`] (binary heap) is the default, [`TreeWindow`] is a stable
//!   balanced-tree alternative.
//! - **Opt-in validation**: [`ksort_checked`], [`displacement`] and [`is_k_sorted`].
//!
//! ## Usage
//!
//! ```rust
//! use ksort::{ksort, ksort_mut};
//!
//! // Every element is at most 2 slots from its sorted position.
//! let data = vec![3, 6, 2, 8, 7];
//! assert_eq!(ksort(&data, 2).unwrap(), vec![2, 3, 6, 7, 8]);
//!
//! let mut data = data;
//! ksort_mut(&mut data, 2).unwrap();
//! assert_eq!(data, vec![2, 3, 6, 7, 8]);
//! ```
//!
//! ## Preconditions
//!
//! `k` must be smaller than the input length; otherwise
//! [`KSortError::InvalidArgument`] is returned. The k-sorted property itself is not
//! checked: with an underestimated `k` the output is a permutation of the input that
//! may not be fully sorted. Use [`ksort_checked`] to detect that case.

pub mod algo;
pub mod core;
pub mod error;
pub mod iter;
pub mod verify;

pub use crate::algo::{ksort, ksort_checked, ksort_mut, ksort_mut_with, ksort_with};
pub use crate::core::{HeapWindow, MinWindow, TreeWindow};
pub use crate::error::{KSortError, Result};
pub use crate::iter::{KSortIter, KSortIterExt};
pub use crate::verify::{displacement, is_k_sorted, is_sorted};

pub mod prelude {
    pub use crate::algo::{ksort, ksort_checked, ksort_mut};
    pub use crate::core::MinWindow;
    pub use crate::error::KSortError;
    pub use crate::iter::KSortIterExt;
}
