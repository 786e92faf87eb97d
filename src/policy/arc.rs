//! Simplified ARC (Adaptive Replacement Cache) policy.
//!
//! Only the promotion skeleton of ARC is modeled: resident keys live in
//! `T1` (seen once) or `T2` (seen at least twice). There are no ghost lists
//! (B1/B2) and no adaptive target `p`. Eviction always drains T1 before T2,
//! oldest insertion first in either list. A hit in T2 does not reorder T2.
//!
//! This is intentionally not textbook ARC; results are meant to be
//! comparable with runs of the same simplified model.

use log::trace;

use super::{AccessOutcome, Algorithm, ArcList, CacheEntry, CachePolicy, KeyList, LogicalTime};
use crate::common::Key;

/// Two-list ARC approximation.
#[derive(Debug)]
pub struct ArcPolicy {
    capacity: usize,

    /// Seen once recently, insertion order.
    t1: KeyList,

    /// Seen twice or more, insertion order.
    t2: KeyList,
}

impl ArcPolicy {
    /// Create an empty ARC policy.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            capacity,
            t1: KeyList::new(),
            t2: KeyList::new(),
        }
    }

    pub fn t1_len(&self) -> usize {
        self.t1.len()
    }

    pub fn t2_len(&self) -> usize {
        self.t2.len()
    }

    /// Which list a resident key is in.
    pub fn list_of(&self, key: Key) -> Option<ArcList> {
        if self.t1.contains(key) {
            Some(ArcList::T1)
        } else if self.t2.contains(key) {
            Some(ArcList::T2)
        } else {
            None
        }
    }

    fn evict(&mut self, now: LogicalTime) -> Option<Key> {
        let (victim, list) = match self.t1.pop_front() {
            Some(key) => (key, ArcList::T1),
            None => (self.t2.pop_front()?, ArcList::T2),
        };
        trace!("arc evicted {} from {} at t={}", victim, list, now);
        Some(victim)
    }
}

impl CachePolicy for ArcPolicy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Arc
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    fn contains(&self, key: Key) -> bool {
        self.t1.contains(key) || self.t2.contains(key)
    }

    fn access(&mut self, key: Key, now: LogicalTime) -> AccessOutcome {
        if self.t1.remove(key) {
            self.t2.push_back(key);
            return AccessOutcome::hit(key);
        }
        if self.t2.contains(key) {
            return AccessOutcome::hit(key);
        }

        let evicted = if self.len() >= self.capacity {
            self.evict(now)
        } else {
            None
        };

        self.t1.push_back(key);
        AccessOutcome::miss(key, evicted)
    }

    /// All of T1 then all of T2, each in insertion order.
    fn snapshot(&self) -> Vec<CacheEntry> {
        self.t1
            .iter()
            .map(|key| CacheEntry::arc(key, ArcList::T1))
            .chain(self.t2.iter().map(|key| CacheEntry::arc(key, ArcList::T2)))
            .collect()
    }
}
