//! Insertion-ordered accumulation and stable top-N ranking.
//!
//! A [`Counter`] remembers the order in which keys were first seen.
//! [`rank`] sorts its entries by count with a stable sort, so entities
//! with equal counts stay in first-appearance order.

use std::collections::BTreeMap;

use road_watch_analytics_models::EntityStat;

/// Something with a count to rank by.
pub trait Tally {
    /// Count used as the ranking key.
    fn tally(&self) -> u64;
}

impl Tally for u64 {
    fn tally(&self) -> u64 {
        *self
    }
}

impl Tally for EntityStat {
    fn tally(&self) -> u64 {
        self.total
    }
}

/// Keyed accumulator that preserves first-insertion order.
#[derive(Debug, Clone)]
pub struct Counter<K, V> {
    entries: Vec<(K, V)>,
    index: BTreeMap<K, usize>,
}

impl<K, V> Default for Counter<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone, V> Counter<K, V> {
    /// Creates an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, inserting `init()` if the key is new.
    pub fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.index.insert(key.clone(), pos);
                self.entries.push((key, init()));
                pos
            }
        };
        &mut self.entries[pos].1
    }

    /// Value for `key`, if seen.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K: Ord + Clone> Counter<K, u64> {
    /// Adds one to the count for `key`.
    pub fn increment(&mut self, key: K) {
        *self.entry_or_insert_with(key, || 0) += 1;
    }
}

/// Sorts entries by count descending and keeps the first `limit`.
///
/// `None` keeps every entry. Ties keep first-insertion order.
#[must_use]
pub fn rank<K: Ord + Clone, V: Tally>(counter: Counter<K, V>, limit: Option<usize>) -> Vec<(K, V)> {
    let mut entries = counter.into_entries();
    entries.sort_by(|(_, a), (_, b)| b.tally().cmp(&a.tally()));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}
