//! Iterators for `ChainedMap`
//!
//! Every iterator walks the bucket array in order and each bucket in
//! insertion order, so two maps with the same insertion history yield the
//! same sequence.

use std::iter::FusedIterator;
use std::{
    slice,
    vec,
};

use super::bucket::Bucket;
use super::entry::Entry;

/// An iterator over the entries of a `ChainedMap`
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    /// Buckets not yet visited
    buckets: slice::Iter<'a, Bucket<K, V>>,
    /// Entries left in the current bucket
    current: slice::Iter<'a, Entry<K, V>>,
    /// Entries left overall
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Starts before the first entry of `buckets`; `len` is the map's entry count.
    pub(crate) fn new(buckets: &'a [Bucket<K, V>], len: usize) -> Self {
        Self { buckets: buckets.iter(), current: Default::default(), remaining: len }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                self.remaining -= 1;
                return Some((entry.key(), entry.value()));
            }
            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A mutable iterator over the entries of a `ChainedMap`
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    /// Buckets not yet visited
    buckets: slice::IterMut<'a, Bucket<K, V>>,
    /// Entries left in the current bucket
    current: slice::IterMut<'a, Entry<K, V>>,
    /// Entries left overall
    remaining: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    /// Starts before the first entry of `buckets`.
    pub(crate) fn new(buckets: &'a mut [Bucket<K, V>], len: usize) -> Self {
        Self { buckets: buckets.iter_mut(), current: Default::default(), remaining: len }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                self.remaining -= 1;
                return Some(entry.pair_mut());
            }
            self.current = self.buckets.next()?.iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An owning iterator over the entries of a `ChainedMap`
#[derive(Debug)]
pub struct IntoIter<K, V> {
    /// Buckets not yet visited
    buckets: vec::IntoIter<Bucket<K, V>>,
    /// Entries left in the current bucket
    current: vec::IntoIter<Entry<K, V>>,
    /// Entries left overall
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    /// Takes ownership of `buckets`; `len` is the entry count.
    pub(crate) fn new(buckets: Vec<Bucket<K, V>>, len: usize) -> Self {
        Self { buckets: buckets.into_iter(), current: Default::default(), remaining: len }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                self.remaining -= 1;
                return Some(entry.into_pair());
            }
            self.current = self.buckets.next()?.into_entries();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the keys of a `ChainedMap`
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    /// Underlying entry iterator
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    /// Wraps an entry iterator.
    pub(crate) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a `ChainedMap`
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    /// Underlying entry iterator
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    /// Wraps an entry iterator.
    pub(crate) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of a `ChainedMap`
#[derive(Debug)]
pub struct ValuesMut<'a, K, V> {
    /// Underlying entry iterator
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> ValuesMut<'a, K, V> {
    /// Wraps a mutable entry iterator.
    pub(crate) const fn new(inner: IterMut<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}
