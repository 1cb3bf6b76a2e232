//! m-ary heap implementation
//!
//! [`MaryHeap`] stores its elements in a single `Vec` interpreted as a complete
//! m-ary tree: the root lives at index 0, the children of node `i` at indices
//! `i*m + 1 ..= i*m + m`, and the parent of node `i > 0` at `(i - 1) / m`.
//!
//! The priority relation is a [`Compare`] value stored in the heap, so the same
//! type serves as a min-heap ([`Less`]), a max-heap ([`Greater`](crate::Greater)),
//! or any custom scheduler order supplied as a closure.
//!
//! # Time Complexity
//!
//! | Operation | Complexity       |
//! |-----------|------------------|
//! | `push`    | O(log_m n)       |
//! | `pop`     | O(m · log_m n)   |
//! | `top`     | O(1)             |
//! | `merge`   | O(k log_m (n+k)) |
//!
//! Wider trees are shallower, which makes `push` cheaper and `pop` more
//! expensive (each level of sift-down scans up to `m` children).
//!
//! # Example
//!
//! ```rust
//! use mary_heap::{Greater, HeapError, MaryHeap};
//!
//! let mut heap = MaryHeap::with_comparator(3, Greater);
//! heap.push(4);
//! heap.push(9);
//! heap.push(1);
//!
//! assert_eq!(heap.top(), Ok(&9));
//! assert_eq!(heap.pop(), Ok(9));
//! assert_eq!(heap.pop(), Ok(4));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Err(HeapError::Underflow));
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::traits::{Compare, HeapError, Less};

/// Branching factor used by [`MaryHeap::new`] and [`Default`]
pub const DEFAULT_ARITY: usize = 2;

/// An array-backed m-ary priority heap
///
/// `T` is the element type and `C` the "has priority over" relation. The
/// element for which no other stored element has priority is always at the top.
///
/// Among priority-equivalent elements the pop order is not stable with respect
/// to insertion order, but it is deterministic: two heaps built with the same
/// arity, comparator and push sequence pop in the same order.
#[derive(Debug, Clone)]
pub struct MaryHeap<T, C = Less> {
    /// The complete m-ary tree in array form
    data: Vec<T>,
    /// Maximum number of children per node, fixed at construction
    arity: usize,
    comparator: C,
}

impl<T> MaryHeap<T, Less> {
    /// Creates an empty binary min-heap
    ///
    /// # Example
    ///
    /// ```rust
    /// use mary_heap::MaryHeap;
    ///
    /// let mut heap = MaryHeap::new();
    /// heap.push(5);
    /// heap.push(3);
    /// assert_eq!(heap.top(), Ok(&3));
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(DEFAULT_ARITY, Less)
    }

    /// Creates an empty min-heap with `arity` children per node
    ///
    /// # Panics
    ///
    /// Panics if `arity` is 0.
    pub fn with_arity(arity: usize) -> Self {
        Self::with_comparator(arity, Less)
    }
}

impl<T, C> MaryHeap<T, C> {
    /// Creates an empty heap with `arity` children per node, ordered by `comparator`
    ///
    /// An arity of 1 is accepted and degenerates into a sorted chain.
    ///
    /// # Panics
    ///
    /// Panics if `arity` is 0.
    pub fn with_comparator(arity: usize, comparator: C) -> Self {
        Self::with_capacity_and_comparator(arity, 0, comparator)
    }

    /// Like [`with_comparator`](Self::with_comparator), but room for `capacity`
    /// elements is allocated up front
    ///
    /// # Panics
    ///
    /// Panics if `arity` is 0.
    pub fn with_capacity_and_comparator(arity: usize, capacity: usize, comparator: C) -> Self {
        assert!(arity > 0, "heap arity must be at least 1");
        Self {
            data: Vec::with_capacity(capacity),
            arity,
            comparator,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the maximum number of children per node
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the priority relation this heap was built with
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Drops every element, keeping arity, comparator and allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the highest-priority element
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn top(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Underflow)
    }

    #[inline]
    fn parent(&self, index: usize) -> usize {
        (index - 1) / self.arity
    }

    #[inline]
    fn first_child(&self, index: usize) -> usize {
        index.saturating_mul(self.arity).saturating_add(1)
    }
}

impl<T, C: Compare<T>> MaryHeap<T, C> {
    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log_m n)
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Underflow`] if the heap is empty. The heap is left
    /// untouched and can be pushed to afterwards.
    ///
    /// # Time Complexity
    /// O(m · log_m n)
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop().ok_or(HeapError::Underflow)?;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        #[cfg(debug_assertions)]
        {
            assert_eq!(self.data.len(), last_idx, "pop must remove exactly one element");
            if let Some(best) = self.best_child(0) {
                assert!(
                    !self.comparator.has_priority(&self.data[best], &self.data[0]),
                    "child at index {} has priority over the root after pop",
                    best
                );
            }
        }

        Ok(result)
    }

    /// Moves every element of `other` into this heap
    ///
    /// Elements are pushed in `other`'s internal order, so the result depends
    /// only on the two heaps' contents and push histories.
    ///
    /// # Time Complexity
    /// O(k log_m (n + k)) for `k = other.len()`
    pub fn merge(&mut self, other: Self) {
        self.data.reserve(other.data.len());
        for item in other.data {
            self.push(item);
        }
    }

    /// Consumes the heap, returning its elements highest priority first
    ///
    /// # Example
    ///
    /// ```rust
    /// use mary_heap::MaryHeap;
    ///
    /// let mut heap = MaryHeap::with_arity(4);
    /// for value in [7, 3, 9, 1] {
    ///     heap.push(value);
    /// }
    /// assert_eq!(heap.into_priority_vec(), vec![1, 3, 7, 9]);
    /// ```
    pub fn into_priority_vec(self) -> Vec<T> {
        self.into_iter_by_priority().collect()
    }

    /// Checks the heap property for every parent/child pair
    ///
    /// Returns false if some element has priority over its parent. This is an
    /// O(n) walk over the whole array, intended for tests and verification
    /// harnesses.
    pub fn verify_heap_property(&self) -> bool {
        (1..self.data.len()).all(|index| {
            let parent = self.parent(index);
            !self
                .comparator
                .has_priority(&self.data[index], &self.data[parent])
        })
    }

    /// Move element at index up while its parent does not have priority over it
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = self.parent(index);
            if self
                .comparator
                .has_priority(&self.data[parent], &self.data[index])
            {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down while its best child has priority over it
    fn sift_down(&mut self, mut index: usize) {
        while let Some(best) = self.best_child(index) {
            if !self
                .comparator
                .has_priority(&self.data[best], &self.data[index])
            {
                break;
            }
            self.data.swap(index, best);
            index = best;
        }
    }

    /// Returns the index of the highest-priority child of `index`, if it has any
    ///
    /// Children are scanned left to right and the running best is only replaced
    /// when a later child strictly has priority over it, so the leftmost of
    /// several equivalent children wins.
    fn best_child(&self, index: usize) -> Option<usize> {
        let first = self.first_child(index);
        if first >= self.data.len() {
            return None;
        }
        let end = first.saturating_add(self.arity).min(self.data.len());

        let mut best = first;
        for child in first + 1..end {
            if self
                .comparator
                .has_priority(&self.data[child], &self.data[best])
            {
                best = child;
            }
        }
        Some(best)
    }
}

impl<T, C: Default> Default for MaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(DEFAULT_ARITY, C::default())
    }
}
