//! Key-value entry stored inside a bucket.

/// An owned key-value pair.
///
/// The key is fixed once the entry exists; only the value slot is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<K, V> {
    /// Key the entry was inserted under
    key: K,
    /// Current value
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Pairs `key` with `value`.
    #[inline]
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Key of the entry
    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    /// Current value
    #[inline]
    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    /// Value slot, for replacing in place
    #[inline]
    pub(crate) const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Splits the entry into a key reference and a mutable value reference.
    #[inline]
    pub(crate) const fn pair_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    /// Takes the entry apart.
    #[inline]
    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
