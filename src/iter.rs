//! Streaming k-sort over iterators.
//!
//! [`KSortIter`] runs the same fill / steady-state / drain pipeline as
//! [`ksort`](crate::ksort), but pulls its input lazily and never holds more than
//! `k + 1` items. Since the input length is unknown up front, `k` larger than the
//! input is accepted: the adapter just drains its window, which fully sorts the
//! input.

use crate::core::{HeapWindow, MinWindow};
use std::iter::{Fuse, FusedIterator};
use tracing::debug;

/// Upper bound on items preallocated before the source has been read.
pub const PREALLOC_LIMIT: usize = 1 << 16;

/// Iterator adapter yielding the items of a k-sorted source in sorted order.
///
/// Created by [`KSortIterExt::ksorted`] or [`KSortIter::new`].
#[derive(Debug, Clone)]
pub struct KSortIter<I, W> {
    source: Fuse<I>,
    window: W,
    k: usize,
    filled: bool,
}

impl<I> KSortIter<I, HeapWindow<I::Item>>
where
    I: Iterator,
    I::Item: Ord,
{
    /// Wraps `source` using the default heap window.
    pub fn new(source: I, k: usize) -> Self {
        Self::with_window(source, k)
    }
}

impl<I, W> KSortIter<I, W>
where
    I: Iterator,
    I::Item: Ord,
    W: MinWindow<I::Item>,
{
    /// Wraps `source` using window type `W`.
    ///
    /// The window is preallocated for at most what the source reports it can
    /// supply, and never beyond [`PREALLOC_LIMIT`] items, so a huge `k` allocates
    /// nothing up front. The window still grows to `k + 1` if the source has that
    /// many items.
    pub fn with_window(source: I, k: usize) -> Self {
        let (lower, _) = source.size_hint();
        let capacity = k
            .saturating_add(1)
            .min(lower.saturating_add(1))
            .min(PREALLOC_LIMIT);
        Self {
            source: source.fuse(),
            window: W::with_capacity(capacity),
            k,
            filled: false,
        }
    }

    /// Number of items currently buffered.
    pub fn buffered(&self) -> usize {
        self.window.len()
    }
}

impl<I, W> Iterator for KSortIter<I, W>
where
    I: Iterator,
    I::Item: Ord,
    W: MinWindow<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.filled {
            self.filled = true;
            let fill = self.k.saturating_add(1);
            debug!(k = self.k, "ksort: streaming");
            self.source
                .by_ref()
                .take(fill)
                .for_each(|item| self.window.insert(item));
        }

        let min = self.window.extract_min()?;
        if let Some(item) = self.source.next() {
            self.window.insert(item);
        }
        Some(min)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.window.len();
        let (lo, hi) = self.source.size_hint();
        (
            lo.saturating_add(buffered),
            hi.and_then(|hi| hi.checked_add(buffered)),
        )
    }
}

impl<I, W> FusedIterator for KSortIter<I, W>
where
    I: Iterator,
    I::Item: Ord,
    W: MinWindow<I::Item>,
{
}

/// Extension trait adding k-sorting to every iterator.
pub trait KSortIterExt: Iterator + Sized {
    /// Yields this iterator's items in sorted order, assuming each item is at most
    /// `k` positions from where it belongs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksort::KSortIterExt;
    ///
    /// let sorted: Vec<i32> = vec![3, 6, 2, 8, 7].into_iter().ksorted(2).collect();
    /// assert_eq!(sorted, vec![2, 3, 6, 7, 8]);
    /// ```
    fn ksorted(self, k: usize) -> KSortIter<Self, HeapWindow<Self::Item>>
    where
        Self::Item: Ord,
    {
        KSortIter::new(self, k)
    }

    /// Like [`ksorted`](KSortIterExt::ksorted), using window type `W`.
    fn ksorted_with<W>(self, k: usize) -> KSortIter<Self, W>
    where
        Self::Item: Ord,
        W: MinWindow<Self::Item>,
    {
        KSortIter::with_window(self, k)
    }
}

impl<I: Iterator> KSortIterExt for I {}
