//! Common traits for m-ary heaps
//!
//! This module provides the pieces a [`MaryHeap`](crate::mary::MaryHeap) is
//! parameterized over:
//!
//! - [`Compare`]: the "has priority over" relation, stored by value in the heap
//! - [`Less`] / [`Greater`]: ready-made relations for min-heaps and max-heaps
//! - [`HeapError`]: the error returned when an element is required but the heap is empty
//!
//! Any `Fn(&T, &T) -> bool` is also a [`Compare`], so closures can be used
//! directly when the priority relation is only known at runtime.

use core::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `top` or `pop` was called on an empty heap
    Underflow,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => {
                write!(f, "heap underflow: operation requires a non-empty heap")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HeapError {}

/// A binary "has priority over" relation
///
/// `has_priority(a, b)` returns `true` when `a` must leave the heap before `b`.
/// The relation is expected to be a strict weak ordering:
///
/// - irreflexive: `has_priority(a, a)` is `false`
/// - asymmetric: `has_priority(a, b)` implies `!has_priority(b, a)`
/// - transitive: `has_priority(a, b) && has_priority(b, c)` implies `has_priority(a, c)`
///
/// Two values where neither has priority over the other are
/// *priority-equivalent*; the heap may return them in either order, but always
/// in the same order for the same sequence of operations.
///
/// # Example
///
/// ```rust
/// use mary_heap::{Compare, Greater, Less};
///
/// assert!(Less.has_priority(&1, &2));
/// assert!(Greater.has_priority(&2, &1));
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.has_priority(&"ab", &"abc"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` has priority over `b`
    fn has_priority(&self, a: &T, b: &T) -> bool;
}

/// Smaller values have priority: the comparator of a min-heap
///
/// This is the default comparator of [`MaryHeap`](crate::mary::MaryHeap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Less;

/// Larger values have priority: the comparator of a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
