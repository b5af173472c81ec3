//! RankHeap: binary min-heap over `(key, count)` pairs with an in-place
//! descending sort.
//!
//! The backing `Vec` is read as an implicit tree: the parent of `i` is
//! `(i - 1) / 2`, its children are `2i + 1` and `2i + 2`. While inserting,
//! every parent's count is `<=` both children's. `sort` repeatedly swaps the
//! root (current minimum) to the end of a shrinking active region, so the
//! finished buffer is ordered by count from largest to smallest. Equal
//! counts end up in whatever order the swaps leave them.

/// Min-heap of `(key, count)` pairs, consumed by [`RankHeap::sort`].
#[derive(Clone, Debug)]
pub struct RankHeap<K> {
    items: Vec<(K, u64)>,
}

impl<K> Default for RankHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RankHeap<K> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of pairs held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the heap holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item` and sifts it up while its count is strictly less than
    /// its parent's. O(log n).
    pub fn insert(&mut self, item: (K, u64)) {
        self.items.push(item);
        let mut i = self.items.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.items[i].1 >= self.items[parent].1 {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    /// Reorders the buffer by count, largest first, without a second
    /// buffer. O(n log n). The heap property no longer holds afterwards.
    pub fn sort(&mut self) {
        if self.items.len() <= 1 {
            return;
        }
        let mut k = self.items.len() - 1;
        while k > 0 {
            self.items.swap(0, k);
            sift_down(&mut self.items[..k]);
            k -= 1;
        }
    }

    /// Current buffer: heap order before `sort`, descending counts after.
    pub fn as_slice(&self) -> &[(K, u64)] {
        &self.items
    }

    /// Consumes the heap and returns its buffer as-is.
    pub fn into_vec(self) -> Vec<(K, u64)> {
        self.items
    }

    /// Keeps the first `min(k, len)` pairs. Call after `sort` to get the
    /// top `k`.
    pub fn into_top(mut self, k: usize) -> Vec<(K, u64)> {
        self.items.truncate(k);
        self.items
    }

    #[cfg(test)]
    pub(crate) fn is_min_heap(&self) -> bool {
        (1..self.items.len()).all(|i| self.items[(i - 1) / 2].1 <= self.items[i].1)
    }
}

/// Restores the min-heap property from the root of `region` downward.
///
/// Moves toward the right child only when it is strictly smaller than both
/// the left child and the current node; otherwise toward the left child.
fn sift_down<K>(region: &mut [(K, u64)]) {
    let len = region.len();
    let mut i = 0;
    loop {
        let (l, r) = (2 * i + 1, 2 * i + 2);
        let left_smaller = l < len && region[l].1 < region[i].1;
        let right_smaller = r < len && region[r].1 < region[i].1;
        if !left_smaller && !right_smaller {
            return;
        }
        let child = if right_smaller && region[r].1 < region[l].1 {
            r
        } else {
            l
        };
        region.swap(i, child);
        i = child;
    }
}

impl<K> FromIterator<(K, u64)> for RankHeap<K> {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut heap = RankHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<K> Extend<(K, u64)> for RankHeap<K> {
    fn extend<I: IntoIterator<Item = (K, u64)>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
