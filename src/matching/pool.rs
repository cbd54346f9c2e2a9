//! Available pool of unconsumed high-group entities.
//!
//! The greedy matcher always claims a prefix of whatever is still
//! available, so consumed entities form a prefix of the high group. The
//! pool is therefore a cursor over the input slice plus a prefix-sum
//! table: a claim is a binary search and a failed claim touches nothing.

use crate::entity::{Total, Weight, Weighted};

/// The unconsumed suffix of a high group, in input order.
#[derive(Debug, Clone)]
pub struct AvailablePool<'a, T> {
    items: &'a [T],
    // prefix[i] = weight of items[..i]
    prefix: Vec<Total>,
    cursor: usize,
}

impl<'a, T: Weighted> AvailablePool<'a, T> {
    /// Builds a pool in which every entity of `items` is available.
    pub fn new(items: &'a [T]) -> Self {
        let mut prefix = Vec::with_capacity(items.len() + 1);
        let mut acc: Total = 0;
        prefix.push(acc);
        for item in items {
            acc += Total::from(item.weight());
            prefix.push(acc);
        }
        Self {
            items,
            prefix,
            cursor: 0,
        }
    }

    /// Entities still available, in input order.
    pub fn available(&self) -> &'a [T] {
        let items = self.items;
        &items[self.cursor..]
    }

    /// Number of available entities.
    pub fn len(&self) -> usize {
        self.items.len() - self.cursor
    }

    /// Returns `true` once every entity has been consumed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Accumulated weight of all available entities.
    pub fn total(&self) -> Total {
        self.prefix[self.items.len()] - self.prefix[self.cursor]
    }

    /// Claims the shortest available prefix whose accumulated weight
    /// strictly exceeds `threshold`.
    ///
    /// Returns the claimed entities and their accumulated weight, and
    /// removes them from the pool. Returns `None` and leaves the pool
    /// untouched when even the whole pool does not exceed `threshold`.
    pub fn claim(&mut self, threshold: Weight) -> Option<(&'a [T], Total)> {
        let threshold = Total::from(threshold);
        if self.total() <= threshold {
            return None;
        }

        let base = self.prefix[self.cursor];
        let target = base + threshold;
        // First end index whose running sum passes the target.
        let tail = &self.prefix[self.cursor + 1..];
        let end = self.cursor + 1 + tail.partition_point(|&sum| sum <= target);

        let items = self.items;
        let claimed = &items[self.cursor..end];
        let total = self.prefix[end] - base;
        self.cursor = end;
        Some((claimed, total))
    }
}
