//! A chain of entries whose keys hash to the same slot.

use std::borrow::Borrow;

use super::entry::Entry;

/// Ordered chain of entries.
///
/// Entries keep insertion order. Removal shifts later entries down so the
/// remaining order is preserved.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<K, V> {
    /// Entries in insertion order
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Default for Bucket<K, V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K, V> Bucket<K, V> {
    /// Creates an empty bucket with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Number of entries in the chain
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends an entry without checking for an equal key.
    ///
    /// Callers must have ruled out a duplicate first.
    #[inline]
    pub(crate) fn push(&mut self, entry: Entry<K, V>) {
        self.entries.push(entry);
    }

    /// Drops every entry, keeping the allocation.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order
    #[inline]
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Entry<K, V>> {
        self.entries.iter()
    }

    /// Entries in insertion order, mutable
    #[inline]
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Entry<K, V>> {
        self.entries.iter_mut()
    }

    /// Consumes the bucket, yielding entries in insertion order.
    #[inline]
    pub(crate) fn into_entries(self) -> std::vec::IntoIter<Entry<K, V>> {
        self.entries.into_iter()
    }
}

impl<K, V> Bucket<K, V>
where
    K: Eq,
{
    /// Position of the entry whose key equals `key`.
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|entry| entry.key().borrow() == key)
    }

    /// Value stored under `key`
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().find(|entry| entry.key().borrow() == key).map(Entry::value)
    }

    /// Mutable value stored under `key`
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter_mut().find(|entry| entry.key().borrow() == key).map(Entry::value_mut)
    }

    /// Whether an entry has a key equal to `key`
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Removes the entry for `key`, shifting later entries down.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.position(key)?;
        Some(self.entries.remove(index))
    }
}
