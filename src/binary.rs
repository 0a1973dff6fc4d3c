//! Binary Heap implementation
//!
//! An array-backed binary min-heap of key-value [`Entry`]s whose order is
//! decided by a comparator chosen when the heap is created.
//!
//! The tree is implicit: the entries live in one dense `Vec`, the root at
//! index 0, and for an entry at index `i` the parent sits at `(i - 1) / 2`
//! and the children at `2i + 1` and `2i + 2`. No node is ever allocated on
//! its own.
//!
//! Every ordering decision goes through the heap's comparator, applied to the
//! entries' keys. With [`Natural`] (the default) the smallest key comes out
//! first; with `natural().rev()` or a closure that flips its arguments the
//! same code behaves as a max-heap.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `insert` / `push`  | O(log n)   |
//! | `extract_minimum`  | O(log n)   |
//! | `find_minimum`     | O(1)       |
//! | `build_heap`       | O(n)       |
//! | `union` / `append` | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use custom_binary_heap::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.insert(3, "three");
//! heap.insert(1, "one");
//! heap.insert(2, "two");
//!
//! assert_eq!(heap.find_minimum().map(|e| *e.key()), Some(1));
//! assert_eq!(heap.extract_minimum().map(|e| e.into_parts()), Some((1, "one")));
//! assert_eq!(heap.extract_minimum().map(|e| e.into_parts()), Some((2, "two")));
//! assert_eq!(heap.extract_minimum().map(|e| e.into_parts()), Some((3, "three")));
//! assert_eq!(heap.extract_minimum(), None);
//! ```
//!
//! A max-heap over the same keys:
//!
//! ```rust
//! use custom_binary_heap::binary::BinaryHeap;
//! use custom_binary_heap::{natural, Compare};
//!
//! let mut heap = BinaryHeap::with_comparator(natural::<i32>().rev());
//! heap.build_heap(vec![2, 9, 4], vec!['b', 'i', 'd']).unwrap();
//! assert_eq!(heap.find_minimum().map(|e| *e.key()), Some(9));
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::mem;
use std::slice;
use std::vec;

use compare::{natural, Compare, Natural};

use crate::entry::Entry;
use crate::traits::{Heap, HeapError};

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left(index: usize) -> usize {
    2 * index + 1
}

fn right(index: usize) -> usize {
    2 * index + 2
}

/// A binary min-heap of key-value entries ordered by a comparator
///
/// The comparator `C` orders keys and is fixed for the heap's lifetime.
/// It defaults to [`Natural`], the key type's own `Ord`.
///
/// It is a logic error for a key to change its ordering relative to the
/// other keys while it is in the heap (through `Cell`, `RefCell`, global
/// state read by the comparator, and so on). The heap never hands out
/// mutable access to stored entries.
///
/// Two heaps can only be merged when they share the comparator type `C`.
/// The receiving heap keeps its own comparator value; if two values of the
/// same comparator type disagree about the order, the merged heap's order is
/// unspecified.
#[derive(Clone)]
pub struct BinaryHeap<K, V, C: Compare<K> = Natural<K>> {
    data: Vec<Entry<K, V>>,
    cmp: C,
}

impl<K: Ord, V> BinaryHeap<K, V> {
    /// Returns an empty heap ordered by the natural order of its keys.
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Returns an empty heap with room for `capacity` entries, ordered by the
    /// natural order of its keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<K: Ord, V> From<Vec<(K, V)>> for BinaryHeap<K, V> {
    /// Builds a naturally ordered heap from `(key, value)` pairs in O(n).
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::from_vec_and_comparator(pairs, natural())
    }
}

impl<K, V, C: Compare<K>> BinaryHeap<K, V, C> {
    /// Returns an empty heap ordered by the given comparator.
    pub fn with_comparator(cmp: C) -> Self {
        BinaryHeap {
            data: Vec::new(),
            cmp,
        }
    }

    /// Returns an empty heap with room for `capacity` entries, ordered by the
    /// given comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        BinaryHeap {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap from `(key, value)` pairs in O(n), ordered by the given
    /// comparator.
    pub fn from_vec_and_comparator(pairs: Vec<(K, V)>, cmp: C) -> Self {
        let mut heap = BinaryHeap {
            data: pairs.into_iter().map(Entry::from).collect(),
            cmp,
        };
        heap.rebuild();
        heap
    }

    /// The comparator this heap was created with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Replaces the heap's content with `keys[i]` paired to `values[i]`
    ///
    /// The entries are laid out in the given order and then heapified bottom
    /// up, which is O(n) rather than the O(n log n) of n inserts.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::LengthMismatch`] if the two vectors differ in
    /// length. The heap is left exactly as it was in that case.
    pub fn build_heap(&mut self, keys: Vec<K>, values: Vec<V>) -> Result<(), HeapError> {
        if keys.len() != values.len() {
            return Err(HeapError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        self.data.clear();
        self.data.extend(
            keys.into_iter()
                .zip(values)
                .map(|(key, value)| Entry::new(key, value)),
        );
        self.rebuild();
        Ok(())
    }

    /// Removes every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Inserts a key-value pair and returns a copy of the stored entry
    ///
    /// The copy is independent of the heap: later inserts and extractions
    /// move entries around inside the backing array, so no reference into it
    /// is handed out. Use [`push`](Self::push) when keys or values are not
    /// `Clone`.
    pub fn insert(&mut self, key: K, value: V) -> Entry<K, V>
    where
        K: Clone,
        V: Clone,
    {
        let entry = Entry::new(key, value);
        self.push_entry(entry.clone());
        entry
    }

    /// Inserts a key-value pair.
    pub fn push(&mut self, key: K, value: V) {
        self.push_entry(Entry::new(key, value));
    }

    /// Returns the minimum entry, or `None` if the heap is empty.
    pub fn find_minimum(&self) -> Option<&Entry<K, V>> {
        self.data.first()
    }

    /// Removes and returns the minimum entry, or `None` if the heap is empty.
    ///
    /// The last entry of the array takes the root's place and is sifted down.
    pub fn extract_minimum(&mut self) -> Option<Entry<K, V>> {
        let mut last = self.data.pop()?;
        if !self.data.is_empty() {
            mem::swap(&mut last, &mut self.data[0]);
            self.sift_down(0);
        }
        Some(last)
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Merges `other` into this heap, consuming it
    ///
    /// Both arrays are concatenated and heapified again in O(n + m).
    pub fn union(&mut self, mut other: Self) {
        self.append(&mut other);
    }

    /// Moves every entry of `other` into this heap, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        if other.data.is_empty() {
            return;
        }
        if self.data.len() < other.data.len() {
            mem::swap(&mut self.data, &mut other.data);
        }
        self.data.append(&mut other.data);
        self.rebuild();
    }

    /// Iterates over the entries in arbitrary order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(self.data.iter())
    }

    /// The backing array, in implicit-tree order
    pub fn as_slice(&self) -> &[Entry<K, V>] {
        &self.data
    }

    /// Consumes the heap and returns its entries in arbitrary order.
    pub fn into_vec(self) -> Vec<Entry<K, V>> {
        self.data
    }

    /// Consumes the heap and returns its entries sorted by the comparator,
    /// minimum first.
    pub fn into_sorted_vec(mut self) -> Vec<Entry<K, V>> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down_range(0, end);
        }
        // Each pass parked the current minimum at the back.
        self.data.reverse();
        self.data
    }

    /// Removes all entries, yielding them in arbitrary order.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain(self.data.drain(..))
    }

    /// Returns the number of entries the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much spare capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Three-way comparison of two entries by key
    ///
    /// Every structural decision of the heap goes through here.
    fn compare(&self, a: &Entry<K, V>, b: &Entry<K, V>) -> Ordering {
        self.cmp.compare(a.key(), b.key())
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }

    fn push_entry(&mut self, entry: Entry<K, V>) {
        self.data.push(entry);
        self.sift_up(self.data.len() - 1);
    }

    /// Move entry at index up while it is strictly less than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.less(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, index: usize) {
        let end = self.data.len();
        self.sift_down_range(index, end);
    }

    /// Move entry at index down within `data[..end]` while a child is
    /// strictly less than it. Ties never swap.
    fn sift_down_range(&mut self, mut index: usize, end: usize) {
        loop {
            let left = left(index);
            let right = right(index);
            let mut smallest = index;

            if left < end && self.less(left, smallest) {
                smallest = left;
            }
            if right < end && self.less(right, smallest) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    /// Restore heap order over the whole array, bottom up from the last
    /// non-leaf.
    fn rebuild(&mut self) {
        let len = self.data.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
        debug_assert!(self.is_valid());
    }

    /// Appends entries, then either sifts each one up or rebuilds the whole
    /// heap, whichever is cheaper for the batch size.
    fn extend_entries<I: Iterator<Item = Entry<K, V>>>(&mut self, entries: I) {
        let start = self.data.len();
        self.data.extend(entries);
        let added = self.data.len() - start;

        if added >= start {
            self.rebuild();
        } else {
            for index in start..self.data.len() {
                self.sift_up(index);
            }
        }
    }

    fn is_valid(&self) -> bool {
        (1..self.data.len())
            .all(|i| self.compare(&self.data[parent(i)], &self.data[i]) != Ordering::Greater)
    }
}

impl<K, V, C: Compare<K> + Default> Heap<K, V> for BinaryHeap<K, V, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, key: K, value: V) {
        self.push_entry(Entry::new(key, value));
    }

    fn peek(&self) -> Option<(&K, &V)> {
        self.find_minimum().map(Entry::as_pair)
    }

    fn pop(&mut self) -> Option<(K, V)> {
        self.extract_minimum().map(Entry::into_parts)
    }

    fn merge(&mut self, other: Self) {
        self.union(other);
    }
}

impl<K, V, C: Compare<K> + Default> Default for BinaryHeap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Debug, V: Debug, C: Compare<K>> Debug for BinaryHeap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for BinaryHeap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for BinaryHeap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.extend_entries(iter.into_iter().map(Entry::from));
    }
}

impl<K, V, C: Compare<K>> Extend<Entry<K, V>> for BinaryHeap<K, V, C> {
    fn extend<I: IntoIterator<Item = Entry<K, V>>>(&mut self, iter: I) {
        self.extend_entries(iter.into_iter());
    }
}

/// An iterator over a [`BinaryHeap`]'s entries in arbitrary order.
///
/// Acquire through [`BinaryHeap::iter`].
pub struct Iter<'a, K, V>(slice::Iter<'a, Entry<K, V>>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// A consuming iterator over a [`BinaryHeap`]'s entries in arbitrary order.
pub struct IntoIter<K, V>(vec::IntoIter<Entry<K, V>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// A draining iterator over a [`BinaryHeap`]'s entries in arbitrary order.
///
/// Acquire through [`BinaryHeap::drain`].
pub struct Drain<'a, K, V>(vec::Drain<'a, Entry<K, V>>);

impl<'a, K, V> Iterator for Drain<'a, K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Drain<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, K, V> ExactSizeIterator for Drain<'a, K, V> {}

impl<K, V, C: Compare<K>> IntoIterator for BinaryHeap<K, V, C> {
    type Item = Entry<K, V>;
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter(self.data.into_iter())
    }
}

impl<'a, K, V, C: Compare<K>> IntoIterator for &'a BinaryHeap<K, V, C> {
    type Item = &'a Entry<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
