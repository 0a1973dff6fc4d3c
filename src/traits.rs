//! Common traits for heap data structures
//!
//! - [`Heap`]: the base priority-queue interface, shaped after Rust's standard
//!   heap API (`push` / `pop` / `peek`) but storing `(key, value)` pairs so the
//!   ordering key is kept apart from the payload.
//! - [`HeapError`]: the error type of fallible heap operations.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The key and value sequences handed to a bulk build differ in length
    #[error("key and value sequences differ in length ({keys} keys, {values} values)")]
    LengthMismatch {
        /// Number of keys supplied
        keys: usize,
        /// Number of values supplied
        values: usize,
    },
}

/// Base trait for heap/priority queue data structures
///
/// Unlike `std::collections::BinaryHeap`, which stores values directly and
/// is a max-heap, implementors store (key, value) pairs and always hand out
/// the *minimum* key first. What "minimum" means is up to the implementor's
/// ordering; for [`BinaryHeap`](crate::binary::BinaryHeap) that is its
/// comparator.
///
/// # Example
///
/// ```rust
/// use custom_binary_heap::Heap;
/// use custom_binary_heap::binary::BinaryHeap;
///
/// let mut heap: BinaryHeap<i32, &str> = Heap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<K, V> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a value under the given key
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, key: K, value: V);

    /// Returns the minimum key and its value without removing them
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&K, &V)>;

    /// Removes and returns the minimum key and its value
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(K, V)>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(n + m) for the array-backed binary heap.
    fn merge(&mut self, other: Self)
    where
        Self: Sized;
}
