//! Key-value entries stored by the heap

/// A key paired with an opaque value
///
/// Entries are the unit the heap stores and hands back. Once created, neither
/// half can be changed in place: mutating a key while it sits in a heap would
/// silently break heap order, so the fields are only reachable through shared
/// accessors or by taking the entry apart with [`Entry::into_parts`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The ordering key
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Borrows both halves at once
    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Consumes the entry, returning `(key, value)`
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_parts()
    }
}
