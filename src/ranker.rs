//! Ranker: counts key observations in a `HashTable` and ranks them with a
//! `RankHeap`.
//!
//! Counting is incremental; ranking copies every `(key, count)` pair into a
//! fresh heap, sorts it and keeps the first `k`. Counts survive ranking, so
//! several `ranked` calls can be interleaved with more observations.

use crate::error::ConfigError;
use crate::hash_table::HashTable;
use crate::projection::{HashProjection, PositionWeightedCharSum};
use crate::rank_heap::RankHeap;
use core::borrow::Borrow;
use core::num::NonZeroUsize;

/// Bucket count used by [`Ranker::default`] and [`top_k`].
pub const DEFAULT_CAPACITY: usize = 2500;

const DEFAULT_BUCKETS: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(n) => n,
    None => panic!("DEFAULT_CAPACITY must be non-zero"),
};

/// Counts observed keys and reports the most frequent ones.
pub struct Ranker<K, H> {
    counts: HashTable<K, u64, H>,
}

impl Default for Ranker<String, PositionWeightedCharSum> {
    fn default() -> Self {
        Self {
            counts: HashTable::with_buckets(DEFAULT_BUCKETS, PositionWeightedCharSum),
        }
    }
}

impl<K, H> Ranker<K, H>
where
    K: Eq,
    H: HashProjection<K>,
{
    /// Creates a ranker whose table has `capacity` buckets.
    /// 
    /// Fails when `capacity` is zero.
    pub fn new(capacity: usize, projection: H) -> Result<Self, ConfigError> {
        Ok(Self {
            counts: HashTable::new(capacity, projection)?,
        })
    }

    /// Adds one occurrence of `key`.
    pub fn observe(&mut self, key: K) {
        let next = self.counts.get(&key).copied().unwrap_or(0) + 1;
        self.counts.put(key, next);
    }

    /// Observes every key in `keys`, in order.
    pub fn observe_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.observe(key);
        }
    }

    /// Occurrences seen so far; zero for keys never observed.
    pub fn count<Q>(&self, q: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        H: HashProjection<Q>,
    {
        self.counts.get(q).copied().unwrap_or(0)
    }

    /// Number of distinct keys observed.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The `min(k, distinct)` most frequent keys, highest count first.
    /// Order among equal counts is unspecified.
    pub fn ranked(&self, k: usize) -> Vec<(K, u64)>
    where
        K: Clone,
    {
        let mut heap = RankHeap::with_capacity(self.counts.len());
        heap.extend(self.counts.iter().map(|(key, &count)| (key.clone(), count)));
        heap.sort();
        tracing::debug!(distinct = heap.len(), k, "ranked observed keys");
        heap.into_top(k)
    }

    /// Observes `keys`, then ranks everything counted so far.
    pub fn top_k<I>(&mut self, keys: I, k: usize) -> Vec<(K, u64)>
    where
        I: IntoIterator<Item = K>,
        K: Clone,
    {
        self.observe_all(keys);
        self.ranked(k)
    }

    /// Rebuckets the counting table; counts are unchanged.
    pub fn resize(&mut self, capacity: usize) -> Result<(), ConfigError> {
        self.counts.resize(capacity)
    }

    /// Forgets all counts.
    pub fn reset(&mut self) {
        self.counts.clear();
    }

    /// The underlying counting table.
    pub fn table(&self) -> &HashTable<K, u64, H> {
        &self.counts
    }
}

/// One-shot ranking of `keys` with a default [`Ranker`].
pub fn top_k<I>(keys: I, k: usize) -> Vec<(String, u64)>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut ranker = Ranker::default();
    ranker.top_k(keys.into_iter().map(Into::into), k)
}
