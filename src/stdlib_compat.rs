//! Standard library compatibility layer
//!
//! Provides a `std::collections::BinaryHeap`-style wrapper in which the item
//! itself is the key.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Build the inner heap with a reversed comparator to get max-heap behavior.
//!
//! # Example
//!
//! ```rust
//! use custom_binary_heap::stdlib_compat::KeyHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap: KeyHeap<i32> = KeyHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use std::marker::PhantomData;

use crate::binary::BinaryHeap;
use crate::traits::Heap;

/// A heap of bare items, each item serving as its own key
///
/// # Type Parameters
/// - `K`: The item type
/// - `H`: The underlying heap implementation, storing `()` as every value
pub struct KeyHeap<K, H: Heap<K, ()> = BinaryHeap<K, ()>> {
    heap: H,
    _phantom: PhantomData<K>,
}

impl<K, H: Heap<K, ()>> KeyHeap<K, H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from_heap(H::new())
    }

    /// Wraps an existing heap, e.g. one built with a custom comparator
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: K) {
        self.heap.push(item, ())
    }

    /// Returns a reference to the smallest item without removing it
    pub fn peek(&self) -> Option<&K> {
        self.heap.peek().map(|(key, _)| key)
    }

    /// Removes and returns the smallest item
    pub fn pop(&mut self) -> Option<K> {
        self.heap.pop().map(|(key, _)| key)
    }

    /// Unwraps the underlying heap
    pub fn into_inner(self) -> H {
        self.heap
    }
}

impl<K, H: Heap<K, ()>> Default for KeyHeap<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, H: Heap<K, ()>> Extend<K> for KeyHeap<K, H> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compare::Compare;
    use std::cmp::Ordering;

    #[derive(Default)]
    struct Descending;

    impl Compare<u32> for Descending {
        fn compare(&self, a: &u32, b: &u32) -> Ordering {
            b.cmp(a)
        }
    }

    #[test]
    fn test_min_order() {
        let mut heap: KeyHeap<u32> = KeyHeap::new();
        heap.extend(vec![9, 2, 7, 2, 5]);

        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Some(&2));

        let drained: Vec<u32> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(drained, vec![2, 2, 5, 7, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_reversed_inner_heap() {
        let inner: BinaryHeap<u32, (), Descending> = BinaryHeap::with_comparator(Descending);
        let mut heap: KeyHeap<u32, _> = KeyHeap::from_heap(inner);
        heap.extend(vec![1, 4, 2]);

        assert_eq!(heap.pop(), Some(4));
        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.into_inner().len(), 1);
    }
}
