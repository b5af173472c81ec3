//! Hash projections: pure functions from a key to a `u64` bucket seed.
//!
//! The table reduces a projection modulo its capacity to pick a bucket, so
//! a projection only has to be deterministic. `CharSum` and
//! `PositionWeightedCharSum` are deliberately weak: anagrams collide under
//! the first, and both cluster short keys, which makes them useful for
//! exercising chaining. `StdHash` adapts any `BuildHasher` for keys that are
//! not strings.

use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

/// Maps a key to a non-negative integer.
///
/// For borrowed lookups (storing `String`, querying with `&str`) the
/// projection must agree across the borrow: `project(k) == project(k.borrow())`.
pub trait HashProjection<Q: ?Sized> {
    fn project(&self, key: &Q) -> u64;
}

impl<Q, F> HashProjection<Q> for F
where
    Q: ?Sized,
    F: Fn(&Q) -> u64,
{
    #[inline]
    fn project(&self, key: &Q) -> u64 {
        self(key)
    }
}

/// Sum of the key's character code points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CharSum;

impl<Q> HashProjection<Q> for CharSum
where
    Q: ?Sized + AsRef<str>,
{
    fn project(&self, key: &Q) -> u64 {
        key.as_ref()
            .chars()
            .fold(0u64, |acc, c| acc.wrapping_add(c as u64))
    }
}

/// Sum of each character code point multiplied by its 1-based position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionWeightedCharSum;

impl<Q> HashProjection<Q> for PositionWeightedCharSum
where
    Q: ?Sized + AsRef<str>,
{
    fn project(&self, key: &Q) -> u64 {
        key.as_ref()
            .chars()
            .zip(1u64..)
            .fold(0u64, |acc, (c, pos)| {
                acc.wrapping_add((c as u64).wrapping_mul(pos))
            })
    }
}

/// Projection backed by `core::hash::Hash` and a `BuildHasher`.
#[derive(Clone, Debug, Default)]
pub struct StdHash<S = RandomState> {
    hasher: S,
}

impl<S> StdHash<S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self { hasher }
    }
}

impl StdHash<RandomState> {
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<Q, S> HashProjection<Q> for StdHash<S>
where
    Q: ?Sized + Hash,
    S: BuildHasher,
{
    #[inline]
    fn project(&self, key: &Q) -> u64 {
        self.hasher.hash_one(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_sum_collides_on_anagrams() {
        assert_eq!(CharSum.project("eat"), CharSum.project("ate"));
        assert_eq!(CharSum.project("eat"), 101 + 97 + 116);
        assert_eq!(CharSum.project(""), 0);
    }

    #[test]
    fn position_weighted_separates_anagrams() {
        // e*1 + a*2 + t*3 vs a*1 + t*2 + e*3
        assert_eq!(PositionWeightedCharSum.project("eat"), 101 + 2 * 97 + 3 * 116);
        assert_eq!(PositionWeightedCharSum.project("ate"), 97 + 2 * 116 + 3 * 101);
        assert_ne!(
            PositionWeightedCharSum.project("eat"),
            PositionWeightedCharSum.project("ate")
        );
    }

    #[test]
    fn string_and_str_project_identically() {
        let owned = "hello".to_string();
        assert_eq!(CharSum.project(&owned), CharSum.project("hello"));
        assert_eq!(
            PositionWeightedCharSum.project(&owned),
            PositionWeightedCharSum.project("hello")
        );
    }

    #[test]
    fn closures_are_projections() {
        let len = |s: &str| s.len() as u64;
        assert_eq!(len.project("abcd"), 4);
    }

    #[test]
    fn std_hash_is_deterministic_per_instance() {
        let h = StdHash::new();
        assert_eq!(h.project(&42u32), h.project(&42u32));
        let s = StdHash::new();
        assert_eq!(s.project("k"), s.project(&"k".to_string()));
    }
}
