//! Core traits and types for k-sorting.
//!
//! This module defines:
//! - [`MinWindow`]: The priority structure the sorter slides over its input.
//! - [`HeapWindow`]: Binary-heap backed window (the default).
//! - [`TreeWindow`]: Balanced-tree backed window that releases equal items in insertion order.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

/// A bounded pool of candidates that always yields its smallest element.
///
/// The sorter never holds more than `k + 1` items in a window, so both operations
/// are expected to run in `O(log k)`.
///
/// # Examples
///
/// Implementing a window over a sorted `Vec` (fine for tiny `k`):
///
/// ```
/// use ksort::core::MinWindow;
///
/// struct SortedVecWindow(Vec<i32>);
///
/// impl MinWindow<i32> for SortedVecWindow {
///     fn with_capacity(capacity: usize) -> Self {
///         SortedVecWindow(Vec::with_capacity(capacity))
///     }
///
///     fn insert(&mut self, item: i32) {
///         // Kept in descending order so the minimum pops off the end.
///         let at = self.0.partition_point(|x| *x > item);
///         self.0.insert(at, item);
///     }
///
///     fn extract_min(&mut self) -> Option<i32> {
///         self.0.pop()
///     }
///
///     fn peek_min(&self) -> Option<&i32> {
///         self.0.last()
///     }
///
///     fn len(&self) -> usize {
///         self.0.len()
///     }
/// }
///
/// let sorted = ksort::ksort_with::<_, SortedVecWindow>(&[2, 1, 4, 3], 1).unwrap();
/// assert_eq!(sorted, vec![1, 2, 3, 4]);
/// ```
pub trait MinWindow<T: Ord> {
    /// Creates an empty window sized for `capacity` items.
    fn with_capacity(capacity: usize) -> Self;

    /// Adds an item to the window.
    fn insert(&mut self, item: T);

    /// Removes and returns the smallest item, or `None` if the window is empty.
    fn extract_min(&mut self) -> Option<T>;

    /// Returns the smallest item without removing it.
    fn peek_min(&self) -> Option<&T>;

    /// Returns the number of items currently held.
    fn len(&self) -> usize;

    /// Returns `true` if the window holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Min-window on top of [`BinaryHeap`].
///
/// `BinaryHeap` is a max-heap, so items are stored wrapped in [`Reverse`].
#[derive(Debug, Clone)]
pub struct HeapWindow<T> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> Default for HeapWindow<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: Ord> MinWindow<T> for HeapWindow<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    #[inline]
    fn insert(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    #[inline]
    fn extract_min(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    #[inline]
    fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Min-window on top of [`BTreeSet`].
///
/// Each item is tagged with an insertion sequence number, which keeps equal items
/// distinct inside the set and makes them leave in the order they arrived. Sorting
/// with this window is therefore stable.
#[derive(Debug, Clone)]
pub struct TreeWindow<T> {
    set: BTreeSet<(T, u64)>,
    seq: u64,
}

impl<T: Ord> Default for TreeWindow<T> {
    fn default() -> Self {
        Self {
            set: BTreeSet::new(),
            seq: 0,
        }
    }
}

impl<T: Ord> MinWindow<T> for TreeWindow<T> {
    fn with_capacity(_capacity: usize) -> Self {
        // BTreeSet has no preallocation.
        Self::default()
    }

    fn insert(&mut self, item: T) {
        self.set.insert((item, self.seq));
        self.seq += 1;
    }

    fn extract_min(&mut self) -> Option<T> {
        self.set.pop_first().map(|(item, _)| item)
    }

    fn peek_min(&self) -> Option<&T> {
        self.set.first().map(|(item, _)| item)
    }

    fn len(&self) -> usize {
        self.set.len()
    }
}
