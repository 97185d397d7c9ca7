//! Separately chained hash map with depth-triggered growth.

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{
    BuildHasher,
    BuildHasherDefault,
    Hash,
};

use super::bucket::Bucket;
use super::entry::Entry;
use super::iter::{
    IntoIter,
    Iter,
    IterMut,
    Keys,
    Values,
    ValuesMut,
};

/// Number of buckets a new map starts with.
pub const INITIAL_BUCKETS: usize = 5;

/// Longest a bucket may get before the map grows.
///
/// Growth runs once a bucket holds *more* than this many entries, so with
/// the default of 4 the fifth colliding key triggers it.
pub const MAX_DEPTH: usize = 4;

/// Hasher used when none is given.
///
/// Unseeded, so iteration order only depends on the insertion history.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// A hash map resolving collisions by chaining entries in buckets.
///
/// Lookups hash the key to `hash % bucket_count` and scan that bucket.
/// When an insert leaves its bucket deeper than [`MAX_DEPTH`], the bucket
/// array doubles and every entry is rehashed before `insert` returns.
/// The bucket array never shrinks.
///
/// # Examples
///
/// ```
/// use vocab_trainer::collections::ChainedMap;
///
/// let mut map = ChainedMap::new();
/// map.insert("cat".to_string(), "katze");
/// assert_eq!(map.get("cat"), Some(&"katze"));
/// assert_eq!(map.insert("cat".to_string(), "mieze"), Some("katze"));
/// assert_eq!(map.len(), 1);
/// ```
pub struct ChainedMap<K, V, S = DefaultHashBuilder> {
    /// Bucket array, length only ever doubles
    buckets: Vec<Bucket<K, V>>,
    /// Live entry count, always the sum of bucket lengths
    len: usize,
    /// Builds the hasher for each key
    hash_builder: S,
}

impl<K, V> ChainedMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map with [`INITIAL_BUCKETS`] buckets.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_bucket_count(INITIAL_BUCKETS)
    }

    /// Creates an empty map with `bucket_count` buckets (at least one).
    #[inline]
    #[must_use]
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self::with_bucket_count_and_hasher(bucket_count, DefaultHashBuilder::default())
    }
}

impl<K, V, S> ChainedMap<K, V, S> {
    /// Creates an empty map with [`INITIAL_BUCKETS`] buckets and the given hasher.
    #[inline]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_bucket_count_and_hasher(INITIAL_BUCKETS, hash_builder)
    }

    /// Creates an empty map with `bucket_count` buckets (at least one) and the given hasher.
    pub fn with_bucket_count_and_hasher(bucket_count: usize, hash_builder: S) -> Self {
        Self { buckets: Self::allocate_buckets(bucket_count.max(1)), len: 0, hash_builder }
    }

    /// Allocates `count` empty buckets sized for a full chain.
    fn allocate_buckets(count: usize) -> Vec<Bucket<K, V>> {
        (0..count).map(|_| Bucket::with_capacity(MAX_DEPTH + 1)).collect()
    }

    /// Returns the number of entries in the map
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no entries
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current length of the bucket array
    #[inline]
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns a reference to the hasher
    #[inline]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every entry. The bucket array keeps its length.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Bucket::clear);
        self.len = 0;
    }

    /// Entries in bucket order, then insertion order within each bucket
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.buckets, self.len)
    }

    /// Entries with mutable values, in the same order as [`Self::iter`]
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.buckets, self.len)
    }

    /// Keys, in the same order as [`Self::iter`]
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Values, in the same order as [`Self::iter`]
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Mutable values, in the same order as [`Self::iter`]
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.iter_mut())
    }
}

impl<K, V, S> ChainedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Maps a key onto a bucket of an array with `bucket_count` slots.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn index_for<Q>(hash_builder: &S, key: &Q, bucket_count: usize) -> usize
    where
        Q: Hash + ?Sized,
    {
        // the remainder is below `bucket_count`, so it fits back into usize
        (hash_builder.hash_one(key) % bucket_count as u64) as usize
    }

    /// Index of the bucket `key` belongs in at the current size.
    #[inline]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        Self::index_for(&self.hash_builder, key, self.buckets.len())
    }

    /// Bucket a key maps to.
    #[inline]
    #[allow(clippy::indexing_slicing)]
    fn bucket<Q>(&self, key: &Q) -> &Bucket<K, V>
    where
        Q: Hash + ?Sized,
    {
        &self.buckets[self.bucket_index(key)]
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is replaced in place, the
    /// length is unchanged and the old value is returned. Otherwise the
    /// entry is appended to its bucket and, if that bucket now holds more
    /// than [`MAX_DEPTH`] entries, the map grows before returning.
    #[allow(clippy::indexing_slicing)]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        if let Some(slot) = bucket.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }

        bucket.push(Entry::new(key, value));
        self.len += 1;

        if bucket.len() > MAX_DEPTH {
            self.grow();
        }
        None
    }

    /// Doubles the bucket array and rehashes every entry into it.
    ///
    /// Old buckets are drained in order, so entries sharing a new bucket
    /// keep the order of that pass. The entry count is unchanged.
    #[allow(clippy::indexing_slicing)]
    pub fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let mut grown = Self::allocate_buckets(new_count);

        for bucket in std::mem::take(&mut self.buckets) {
            for entry in bucket.into_entries() {
                let index = Self::index_for(&self.hash_builder, entry.key(), new_count);
                grown[index].push(entry);
            }
        }

        self.buckets = grown;
        tracing::trace!(bucket_count = new_count, len = self.len, "Grew chained map");
    }

    /// Returns a reference to the value stored for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket(key).get(key)
    }

    /// Returns a mutable reference to the value stored for `key`
    #[allow(clippy::indexing_slicing)]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index].get_mut(key)
    }

    /// Returns `true` if the map holds a value for `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket(key).contains(key)
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// Later entries of the same bucket keep their relative order.
    #[allow(clippy::indexing_slicing)]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let (_, value) = self.buckets[index].remove(key)?.into_pair();
        self.len -= 1;
        Some(value)
    }

    /// Number of entries in the bucket `key` maps to, whether or not `key`
    /// itself is stored.
    pub fn bucket_depth<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket(key).len()
    }
}

impl<K, V> Default for ChainedMap<K, V, DefaultHashBuilder> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Clone for ChainedMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            len: self.len,
            hash_builder: self.hash_builder.clone(),
        }
    }
}

impl<K, V, S> fmt::Debug for ChainedMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same key-value pairs, whatever
/// their bucket layout or iteration order.
impl<K, V, S> PartialEq for ChainedMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(key, value)| other.get(key).is_some_and(|other| value == other))
    }
}

impl<K, V, S> Eq for ChainedMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V> FromIterator<(K, V)> for ChainedMap<K, V, DefaultHashBuilder>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> IntoIterator for ChainedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buckets, self.len)
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut ChainedMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
