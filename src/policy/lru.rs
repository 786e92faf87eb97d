//! LRU (Least Recently Used) replacement policy.
//!
//! A recency-ordered [`KeyList`] plus a key → last-access map. A hit moves
//! the key to the back of the list; a miss at capacity evicts the front.
//! Since logical time only increases, list order always equals
//! `last_access` order, so the front is the minimum without scanning.

use std::collections::HashMap;

use log::trace;

use super::{AccessOutcome, Algorithm, CacheEntry, CachePolicy, KeyList, LogicalTime};
use crate::common::Key;

/// Least-recently-used eviction.
#[derive(Debug)]
pub struct LruPolicy {
    capacity: usize,

    /// Logical time of the most recent access per resident key.
    last_access: HashMap<Key, LogicalTime>,

    /// Resident keys, front = least recently used.
    recency: KeyList,
}

impl LruPolicy {
    /// Create an empty LRU policy.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            capacity,
            last_access: HashMap::with_capacity(capacity),
            recency: KeyList::new(),
        }
    }

    fn evict(&mut self, now: LogicalTime) -> Option<Key> {
        let victim = self.recency.pop_front()?;
        self.last_access.remove(&victim);
        trace!("lru evicted {} at t={}", victim, now);
        Some(victim)
    }
}

impl CachePolicy for LruPolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lru
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.last_access.len()
    }

    fn contains(&self, key: Key) -> bool {
        self.last_access.contains_key(&key)
    }

    fn access(&mut self, key: Key, now: LogicalTime) -> AccessOutcome {
        if let Some(time) = self.last_access.get_mut(&key) {
            *time = now;
            self.recency.move_to_back(key);
            return AccessOutcome::hit(key);
        }

        let evicted = if self.last_access.len() >= self.capacity {
            self.evict(now)
        } else {
            None
        };

        self.last_access.insert(key, now);
        self.recency.push_back(key);
        AccessOutcome::miss(key, evicted)
    }

    /// Most recently used first.
    fn snapshot(&self) -> Vec<CacheEntry> {
        self.recency
            .iter()
            .rev()
            .filter_map(|key| {
                self.last_access
                    .get(&key)
                    .map(|&time| CacheEntry::lru(key, time))
            })
            .collect()
    }
}
