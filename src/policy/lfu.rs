//! LFU (Least Frequently Used) replacement policy.
//!
//! Entries are grouped into frequency buckets. Each bucket is a [`KeyList`]
//! ordered by the time the key entered that frequency, which is also its
//! last access, so the front of the lowest bucket is the eviction victim:
//! least frequent first, oldest access among equals.
//!
//! ```text
//!   min_frequency = 1
//!        │
//!        ▼
//!   freq=1: [k4] ◄──► [k7]        (front evicted first)
//!   freq=3: [k1]
//!   freq=4: [k2] ◄──► [k9]
//! ```
//!
//! `min_frequency` is only ever stale right after an eviction, and every
//! eviction is immediately followed by an insert at frequency 1.

use std::collections::HashMap;

use log::trace;

use super::{AccessOutcome, Algorithm, CacheEntry, CachePolicy, KeyList, LogicalTime};
use crate::common::Key;

#[derive(Debug, Clone, Copy)]
struct LfuEntry {
    frequency: u64,
    last_access: LogicalTime,

    /// Time the key became resident. Unchanged by hits.
    inserted_at: LogicalTime,
}

/// Least-frequently-used eviction with least-recent tie-break.
#[derive(Debug)]
pub struct LfuPolicy {
    capacity: usize,
    entries: HashMap<Key, LfuEntry>,

    /// frequency → keys at that frequency, front = oldest access.
    buckets: HashMap<u64, KeyList>,

    /// Lowest frequency with a non-empty bucket.
    min_frequency: u64,
}

impl LfuPolicy {
    /// Create an empty LFU policy.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            buckets: HashMap::new(),
            min_frequency: 0,
        }
    }

    /// Access count of a resident key.
    pub fn frequency(&self, key: Key) -> Option<u64> {
        self.entries.get(&key).map(|e| e.frequency)
    }

    /// Move `key` from the `from` bucket to the `from + 1` bucket.
    fn promote(&mut self, key: Key, from: u64) {
        if let Some(bucket) = self.buckets.get_mut(&from) {
            bucket.remove(key);
            if bucket.is_empty() {
                self.buckets.remove(&from);
                if self.min_frequency == from {
                    self.min_frequency = from + 1;
                }
            }
        }
        self.buckets.entry(from + 1).or_default().push_back(key);
    }

    fn evict(&mut self, now: LogicalTime) -> Option<Key> {
        let bucket = self.buckets.get_mut(&self.min_frequency)?;
        let victim = bucket.pop_front()?;
        if bucket.is_empty() {
            self.buckets.remove(&self.min_frequency);
        }
        self.entries.remove(&victim);
        trace!(
            "lfu evicted {} (frequency {}) at t={}",
            victim,
            self.min_frequency,
            now
        );
        Some(victim)
    }
}

impl CachePolicy for LfuPolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lfu
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, key: Key) -> bool {
        self.entries.contains_key(&key)
    }

    fn access(&mut self, key: Key, now: LogicalTime) -> AccessOutcome {
        if let Some(entry) = self.entries.get_mut(&key) {
            let from = entry.frequency;
            entry.frequency += 1;
            entry.last_access = now;
            self.promote(key, from);
            return AccessOutcome::hit(key);
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict(now)
        } else {
            None
        };

        self.entries.insert(
            key,
            LfuEntry {
                frequency: 1,
                last_access: now,
                inserted_at: now,
            },
        );
        self.buckets.entry(1).or_default().push_back(key);
        self.min_frequency = 1;
        AccessOutcome::miss(key, evicted)
    }

    /// Highest frequency first; equal frequencies in residency order
    /// (earliest inserted first, hits do not move a key).
    fn snapshot(&self) -> Vec<CacheEntry> {
        let mut entries: Vec<(Key, &LfuEntry)> =
            self.entries.iter().map(|(&key, e)| (key, e)).collect();
        entries.sort_by(|(_, a), (_, b)| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.inserted_at.cmp(&b.inserted_at))
        });
        entries
            .into_iter()
            .map(|(key, e)| CacheEntry::lfu(key, e.frequency, e.last_access))
            .collect()
    }
}
