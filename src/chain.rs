//! Chain: one bucket's singly linked list of entries.
//!
//! Entries live in a table-wide `SlotMap` arena and link to each other by
//! `EntryKey`, so a chain is just a head key plus a length. The arena is
//! passed into every operation; a chain never outlives the table that owns
//! both.

use core::borrow::Borrow;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Arena key of a single entry.
    pub(crate) struct EntryKey;
}

pub(crate) type Arena<K, V> = SlotMap<EntryKey, Entry<K, V>>;

#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    // Projection output, kept so resizing never calls back into user code.
    pub(crate) hash: u64,
    next: Option<EntryKey>,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V, hash: u64) -> Self {
        Self {
            key,
            value,
            hash,
            next: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Chain {
    head: Option<EntryKey>,
    len: usize,
}

impl Chain {
    pub(crate) const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub(crate) fn head(&self) -> Option<EntryKey> {
        self.head
    }

    /// Stores `entry` in the arena and links it in front of the current head.
    pub(crate) fn prepend<K, V>(
        &mut self,
        arena: &mut Arena<K, V>,
        entry: Entry<K, V>,
    ) -> EntryKey {
        let k = arena.insert(entry);
        self.relink(arena, k);
        k
    }

    /// Links an entry already in the arena in front of the current head.
    /// The entry's previous `next` link is overwritten.
    pub(crate) fn relink<K, V>(&mut self, arena: &mut Arena<K, V>, k: EntryKey) {
        arena[k].next = self.head;
        self.head = Some(k);
        self.len += 1;
    }

    pub(crate) fn find<K, V, Q>(&self, arena: &Arena<K, V>, q: &Q) -> Option<EntryKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut cur = self.head;
        while let Some(k) = cur {
            let e = &arena[k];
            if e.key.borrow() == q {
                return Some(k);
            }
            cur = e.next;
        }
        None
    }

    /// Unlinks the entry matching `q` and removes it from the arena.
    pub(crate) fn unlink<K, V, Q>(&mut self, arena: &mut Arena<K, V>, q: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let head = self.head?;
        if arena[head].key.borrow() == q {
            let entry = arena.remove(head)?;
            self.head = entry.next;
            self.len -= 1;
            return Some(entry);
        }

        let mut prev = head;
        let mut cur = arena[head].next;
        while let Some(k) = cur {
            if arena[k].key.borrow() == q {
                let entry = arena.remove(k)?;
                arena[prev].next = entry.next;
                self.len -= 1;
                return Some(entry);
            }
            prev = k;
            cur = arena[k].next;
        }
        None
    }

    /// Forgets all links; the caller clears the arena.
    pub(crate) fn reset(&mut self) {
        self.head = None;
        self.len = 0;
    }

    pub(crate) fn iter<'a, K, V>(&self, arena: &'a Arena<K, V>) -> ChainIter<'a, K, V> {
        ChainIter {
            arena,
            cur: self.head,
        }
    }
}

/// Walks a chain from head to tail.
pub(crate) struct ChainIter<'a, K, V> {
    arena: &'a Arena<K, V>,
    cur: Option<EntryKey>,
}

impl<'a, K, V> ChainIter<'a, K, V> {
    pub(crate) fn empty(arena: &'a Arena<K, V>) -> Self {
        Self { arena, cur: None }
    }
}

impl<'a, K, V> Iterator for ChainIter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cur?;
        let e = &self.arena[k];
        self.cur = e.next;
        Some(e)
    }
}

/// Moves `k` to the front of `chain` after reading its old successor.
/// Returns the old successor so callers can keep walking the source chain.
pub(crate) fn transplant<K, V>(
    arena: &mut Arena<K, V>,
    chain: &mut Chain,
    k: EntryKey,
) -> Option<EntryKey> {
    let next = arena[k].next;
    chain.relink(arena, k);
    next
}
