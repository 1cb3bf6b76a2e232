//! Standard library compatibility layer
//!
//! Collection trait impls and aliases that let a [`MaryHeap`] stand in where
//! code would otherwise reach for `std::collections::BinaryHeap`.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap by default**: `MaryHeap<T>` pops the smallest element first, while
//!   `BinaryHeap` is a max-heap. Use [`MaxHeap`] (or the [`Greater`] comparator)
//!   for max-heap behavior instead of wrapping values in `std::cmp::Reverse`.
//! - **Errors instead of `None`**: `top` and `pop` return
//!   [`HeapError::Underflow`](crate::HeapError::Underflow) on an empty heap.
//! - **No borrowing iteration**: only the top is observable. Draining in priority
//!   order is available through [`MaryHeap::into_iter_by_priority`].
//!
//! # Example
//!
//! ```rust
//! use mary_heap::stdlib_compat::{MaxHeap, MinHeap};
//!
//! let min: MinHeap<i32> = vec![5, 3, 7].into();
//! assert_eq!(min.top(), Ok(&3));
//!
//! let max: MaxHeap<i32> = [5, 3, 7].into_iter().collect();
//! assert_eq!(max.into_iter_by_priority().collect::<Vec<_>>(), vec![7, 5, 3]);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::iter::FusedIterator;

use crate::mary::MaryHeap;
use crate::traits::{Compare, Greater, Less};

/// A binary heap that pops the smallest element first
pub type MinHeap<T> = MaryHeap<T, Less>;

/// A binary heap that pops the largest element first
pub type MaxHeap<T> = MaryHeap<T, Greater>;

impl<T, C: Compare<T> + Default> FromIterator<T> for MaryHeap<T, C> {
    /// Builds a binary heap by pushing the items in iteration order
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T> + Default> From<Vec<T>> for MaryHeap<T, C> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, C: Compare<T>> Extend<T> for MaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, C: Compare<T>> Extend<&'a T> for MaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C: Compare<T>> MaryHeap<T, C> {
    /// Consumes the heap into an iterator that pops one element per step
    ///
    /// Each call to `next` is a [`pop`](MaryHeap::pop), so the elements come out
    /// highest priority first.
    pub fn into_iter_by_priority(self) -> IntoIterByPriority<T, C> {
        IntoIterByPriority { heap: self }
    }
}

/// Owning iterator over a heap's elements in priority order
///
/// Created by [`MaryHeap::into_iter_by_priority`].
#[derive(Debug, Clone)]
pub struct IntoIterByPriority<T, C> {
    heap: MaryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterByPriority<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterByPriority<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIterByPriority<T, C> {}
