//! Binary Heap with a Custom Comparator
//!
//! This crate provides an array-backed binary min-heap (priority queue) of
//! key-value entries. What "minimum" means is decided by a comparator chosen
//! when the heap is created, so one implementation covers min-heaps,
//! max-heaps and orderings over keys that are not `Ord` at all.
//!
//! # Features
//!
//! - **Implicit tree**: entries live in one dense `Vec`; parent/child links are index arithmetic
//! - **Pluggable order**: any [`Compare`] implementation, including plain closures
//! - **Linear-time bulk build**: `build_heap` and `From<Vec<_>>` heapify bottom-up in O(n)
//! - **Merging**: `union` / `append` concatenate and re-heapify in O(n + m)
//!
//! # Example
//!
//! ```rust
//! use custom_binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! for key in [5, 3, 8, 1, 4] {
//!     heap.insert(key, ());
//! }
//!
//! let order: Vec<i32> = std::iter::from_fn(|| heap.extract_minimum())
//!     .map(|entry| *entry.key())
//!     .collect();
//! assert_eq!(order, vec![1, 3, 4, 5, 8]);
//! ```
//!
//! A heap is not synchronized. Wrap it in a `Mutex` to share it between
//! threads.

pub mod binary;
pub mod entry;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use compare::{natural, Compare, Natural, Rev};
pub use entry::Entry;
pub use traits::{Heap, HeapError};
