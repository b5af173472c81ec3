//! chainrank: a separate-chaining hash table and a heap-based top-K ranker.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: count occurrences of keys, then pull out the most frequent ones.
//! - Layers:
//!   - Chain: one bucket's singly linked list. Entries live in a
//!     table-wide `SlotMap` arena and link by key, so prepend and unlink
//!     are O(1) once the predecessor is known and no raw pointers exist.
//!   - HashTable<K, V, H>: a fixed array of chains plus a `HashProjection`
//!     `H`. Bucket index is `H(key) % capacity`. Resizing is explicit.
//!   - RankHeap<K>: binary min-heap of `(key, count)` in a `Vec` with
//!     implicit parent/child indices, sorted in place into descending
//!     count order.
//!   - Ranker<K, H>: feeds observations into a `HashTable<K, u64, H>`,
//!     drains it into a `RankHeap`, sorts and truncates to `k`.
//!
//! Constraints
//! - No internal synchronization: the table and ranker are `Send` and
//!   `Sync` whenever their keys, values and projection are, and sharing one
//!   across threads goes through an external lock such as `Mutex`.
//! - Keys are unique across the whole table; `put` on an existing key
//!   overwrites in place and leaves the size unchanged.
//! - Capacity is at least one bucket; zero is rejected with `ConfigError`.
//! - The table never resizes itself based on load factor.
//!
//! Hash projection and rehashing
//! - Each entry stores its projected `u64`; `resize` relinks entries into
//!   fresh chains using the stored value and never calls the projection.
//!   Projections must therefore be pure.
//! - The bundled string projections (`CharSum`, `PositionWeightedCharSum`)
//!   are intentionally weak and collide readily; `StdHash` adapts any
//!   `BuildHasher` for general keys.
//!
//! Ranking ties
//! - Pairs with equal counts come out in the order the heap swaps leave
//!   them. No secondary ordering is applied.

mod chain;
pub mod error;
pub mod hash_table;
#[cfg(test)]
mod hash_table_proptest;
pub mod projection;
pub mod rank_heap;
pub mod ranker;

// Public surface
pub use error::ConfigError;
pub use hash_table::HashTable;
pub use projection::{CharSum, HashProjection, PositionWeightedCharSum, StdHash};
pub use rank_heap::RankHeap;
pub use ranker::{top_k, Ranker, DEFAULT_CAPACITY};
