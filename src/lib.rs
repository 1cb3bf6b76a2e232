//! Array-backed m-ary priority heap
//!
//! This crate provides [`MaryHeap`], a priority queue stored as a complete m-ary
//! tree in a single `Vec`. Both the branching factor and the "has priority over"
//! relation are chosen by the caller, so the same container serves as a binary
//! min-heap, a 4-ary max-heap, or a scheduler ordered by any custom key.
//!
//! # Features
//!
//! - **Configurable arity**: any branching factor `m >= 1`; wider trees trade
//!   cheaper `push` for more comparisons per level of `pop`
//! - **Pluggable priority**: [`Less`] (min-heap, the default), [`Greater`]
//!   (max-heap), or any `Fn(&T, &T) -> bool` through the [`Compare`] trait
//! - **Explicit underflow**: `top` and `pop` on an empty heap return
//!   [`HeapError::Underflow`] instead of a sentinel
//! - **Deterministic ties**: identical push sequences always pop identically
//! - **`no_std`**: disable the default `std` feature to build on `alloc` only
//!
//! # Example
//!
//! ```rust
//! use mary_heap::{HeapError, MaryHeap};
//!
//! let mut heap = MaryHeap::with_arity(3);
//! for value in [5, 2, 9, 1, 7, 3, 8, 4, 6, 0] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.len(), 10);
//! assert_eq!(heap.top(), Ok(&0));
//! assert_eq!(heap.pop(), Ok(0));
//! assert_eq!(heap.pop(), Ok(1));
//!
//! heap.clear();
//! assert_eq!(heap.pop(), Err(HeapError::Underflow));
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod mary;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use mary::{MaryHeap, DEFAULT_ARITY};
pub use stdlib_compat::{IntoIterByPriority, MaxHeap, MinHeap};
pub use traits::{Compare, Greater, HeapError, Less};
