//! HashTable: separate-chaining map with a pluggable hash projection.
//!
//! Buckets are `Chain`s over one shared entry arena. Bucket index is
//! `projection(key) % capacity`. The bucket count only changes through an
//! explicit `resize`; the table never grows on its own.

use crate::chain::{self, Arena, Chain, ChainIter, Entry};
use crate::error::ConfigError;
use crate::projection::HashProjection;
use core::borrow::Borrow;
use core::fmt;
use core::num::NonZeroUsize;

#[inline]
fn bucket_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

/// Separate-chaining map with a fixed bucket count chosen by the caller.
pub struct HashTable<K, V, H> {
    projection: H,
    buckets: Vec<Chain>,
    entries: Arena<K, V>,
}

impl<K, V, H> HashTable<K, V, H>
where
    K: Eq,
{
    /// Creates a table with `capacity` empty buckets.
    ///
    /// Fails when `capacity` is zero.
    pub fn new(capacity: usize, projection: H) -> Result<Self, ConfigError> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(ConfigError::zero_capacity)?;
        Ok(Self::with_buckets(capacity, projection))
    }

    /// Creates a table with `capacity` empty buckets; cannot fail.
    pub fn with_buckets(capacity: NonZeroUsize, projection: H) -> Self {
        Self {
            projection,
            buckets: vec![Chain::new(); capacity.get()],
            entries: Arena::with_key(),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The projection used to pick buckets.
    pub fn projection(&self) -> &H {
        &self.projection
    }

    /// Inserts or overwrites. Returns the previous value when `key` was
    /// already present; in that case the entry stays where it is and the
    /// size does not change.
    pub fn put(&mut self, key: K, value: V) -> Option<V>
    where
        H: HashProjection<K>,
    {
        let hash = self.projection.project(&key);
        let idx = bucket_index(hash, self.buckets.len());
        let chain = &mut self.buckets[idx];
        if let Some(k) = chain.find(&self.entries, &key) {
            return Some(core::mem::replace(&mut self.entries[k].value, value));
        }
        chain.prepend(&mut self.entries, Entry::new(key, value, hash));
        None
    }

    /// Value stored under `q`, if any.
    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        H: HashProjection<Q>,
    {
        let k = self.chain_for(q).find(&self.entries, q)?;
        Some(&self.entries[k].value)
    }

    /// Mutable access to the value stored under `q`.
    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        H: HashProjection<Q>,
    {
        let k = self.chain_for(q).find(&self.entries, q)?;
        Some(&mut self.entries[k].value)
    }

    /// `true` when `q` is stored.
    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        H: HashProjection<Q>,
    {
        self.chain_for(q).find(&self.entries, q).is_some()
    }

    /// Removes `q` and returns its value; absent keys leave the table untouched.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        H: HashProjection<Q>,
    {
        let idx = bucket_index(self.projection.project(q), self.buckets.len());
        let entry = self.buckets[idx].unlink(&mut self.entries, q)?;
        tracing::trace!(bucket = idx, remaining = self.entries.len(), "unlinked entry");
        Some(entry.value)
    }

    /// Rehashes every entry into `new_capacity` fresh buckets, then swaps
    /// them in. Entries keep their values and arena slots; only the links
    /// change, so the size is preserved exactly.
    ///
    /// Fails, leaving the table untouched, when `new_capacity` is zero.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), ConfigError> {
        if new_capacity == 0 {
            return Err(ConfigError::zero_capacity());
        }
        let mut fresh = vec![Chain::new(); new_capacity];
        for old in &self.buckets {
            let mut cur = old.head();
            while let Some(k) = cur {
                let idx = bucket_index(self.entries[k].hash, new_capacity);
                cur = chain::transplant(&mut self.entries, &mut fresh[idx], k);
            }
        }
        tracing::debug!(
            from = self.buckets.len(),
            to = new_capacity,
            size = self.entries.len(),
            "resized hash table"
        );
        self.buckets = fresh;
        Ok(())
    }

    /// Drops every entry; the bucket count is unchanged.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.entries.len(), "clearing hash table");
        for chain in &mut self.buckets {
            chain.reset();
        }
        self.entries.clear();
    }

    /// Entries per bucket, `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Number of buckets whose chain is empty.
    pub fn empty_buckets(&self) -> usize {
        let size = self.len();
        if size <= 1 {
            return self.capacity() - size;
        }
        self.buckets.iter().filter(|c| c.is_empty()).count()
    }

    /// Length of the chain in bucket `bucket`, or `None` when out of range.
    pub fn chain_len(&self, bucket: usize) -> Option<usize> {
        self.buckets.get(bucket).map(Chain::len)
    }

    /// Visits entries bucket by bucket, each chain from head to tail.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: ChainIter::empty(&self.entries),
            entries: &self.entries,
        }
    }

    fn chain_for<Q>(&self, q: &Q) -> &Chain
    where
        Q: ?Sized,
        H: HashProjection<Q>,
    {
        &self.buckets[bucket_index(self.projection.project(q), self.buckets.len())]
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let linked: usize = self.buckets.iter().map(Chain::len).sum();
        assert_eq!(linked, self.entries.len(), "chain lengths must sum to size");
        for (i, chain) in self.buckets.iter().enumerate() {
            let walked = chain.iter(&self.entries).count();
            assert_eq!(walked, chain.len(), "bucket {i} length counter out of sync");
            for e in chain.iter(&self.entries) {
                assert_eq!(bucket_index(e.hash, self.capacity()), i, "entry in wrong bucket");
            }
        }
    }
}

/// Iterator over `(&K, &V)` in bucket order.
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Chain>,
    chain: ChainIter<'a, K, V>,
    entries: &'a Arena<K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.next() {
                return Some((&e.key, &e.value));
            }
            self.chain = self.buckets.next()?.iter(self.entries);
        }
    }
}

impl<'a, K, V, H> IntoIterator for &'a HashTable<K, V, H>
where
    K: Eq,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per bucket: `i: [(k, v) -> (k, v)]`.
impl<K, V, H> fmt::Display for HashTable<K, V, H>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            write!(f, "{i}: [")?;
            for (n, e) in chain.iter(&self.entries).enumerate() {
                if n > 0 {
                    f.write_str(" -> ")?;
                }
                write!(f, "({}, {})", e.key, e.value)?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

impl<K, V, H> fmt::Debug for HashTable<K, V, H>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("capacity", &self.buckets.len())
            .field("len", &self.entries.len())
            .field(
                "entries",
                &self
                    .entries
                    .values()
                    .map(|e| (&e.key, &e.value))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
