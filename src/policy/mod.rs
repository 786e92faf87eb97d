//! Cache replacement policies.
//!
//! Currently implements:
//! - [`LruPolicy`] - Least Recently Used
//! - [`LfuPolicy`] - Least Frequently Used, oldest-access tie-break
//! - [`ArcPolicy`] - Simplified two-list Adaptive Replacement Cache
//!
//! All three share the [`CachePolicy`] contract: process one key per call,
//! report hit/miss/eviction, and expose their contents via
//! [`CachePolicy::snapshot`]. Every access runs in amortized O(1) with
//! respect to capacity; ordering is kept in [`KeyList`]s rather than found
//! by scanning.

mod arc;
mod key_list;
mod lfu;
mod lru;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Key};

pub use arc::ArcPolicy;
pub use key_list::KeyList;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

/// Monotonically increasing step counter used for recency comparisons.
///
/// Distinct from wall-clock time; a run starts at 1.
pub type LogicalTime = u64;

// ============================================================================
// ALGORITHM SELECTOR
// ============================================================================

/// Which replacement policy to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Lru,
    Lfu,
    Arc,
}

impl Algorithm {
    /// Every algorithm, in comparison order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Lru, Algorithm::Lfu, Algorithm::Arc];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Lru => "lru",
            Algorithm::Lfu => "lfu",
            Algorithm::Arc => "arc",
        }
    }

    /// Construct a fresh, empty policy of this kind.
    ///
    /// # Panics
    /// Panics if `capacity` is 0. Validate with
    /// [`SimulationConfig::validate`](crate::simulation::SimulationConfig::validate) first.
    pub fn build(self, capacity: usize) -> Box<dyn CachePolicy> {
        match self {
            Algorithm::Lru => Box::new(LruPolicy::new(capacity)),
            Algorithm::Lfu => Box::new(LfuPolicy::new(capacity)),
            Algorithm::Arc => Box::new(ArcPolicy::new(capacity)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_ascii_uppercase())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(Algorithm::Lru),
            "lfu" => Ok(Algorithm::Lfu),
            "arc" => Ok(Algorithm::Arc),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

// ============================================================================
// PER-ACCESS OUTCOME
// ============================================================================

/// Result of a single [`CachePolicy::access`] call.
///
/// Consumed immediately by the statistics collector; not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessOutcome {
    pub key: Key,
    pub hit: bool,
    /// The entry removed to make room, if the miss happened at capacity.
    pub evicted: Option<Key>,
}

impl AccessOutcome {
    #[inline]
    pub fn hit(key: Key) -> Self {
        Self {
            key,
            hit: true,
            evicted: None,
        }
    }

    #[inline]
    pub fn miss(key: Key, evicted: Option<Key>) -> Self {
        Self {
            key,
            hit: false,
            evicted,
        }
    }
}

// ============================================================================
// SNAPSHOT ENTRIES
// ============================================================================

/// ARC list membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArcList {
    /// Seen once recently.
    T1,
    /// Seen at least twice.
    T2,
}

impl fmt::Display for ArcList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcList::T1 => f.write_str("T1"),
            ArcList::T2 => f.write_str("T2"),
        }
    }
}

/// Policy-specific metadata carried by a [`CacheEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum EntryMeta {
    Lru {
        last_access: LogicalTime,
    },
    Lfu {
        frequency: u64,
        last_access: LogicalTime,
    },
    Arc {
        list: ArcList,
    },
}

/// A resident entry as reported by [`CachePolicy::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheEntry {
    pub key: Key,
    pub meta: EntryMeta,
}

impl CacheEntry {
    pub fn lru(key: Key, last_access: LogicalTime) -> Self {
        Self {
            key,
            meta: EntryMeta::Lru { last_access },
        }
    }

    pub fn lfu(key: Key, frequency: u64, last_access: LogicalTime) -> Self {
        Self {
            key,
            meta: EntryMeta::Lfu {
                frequency,
                last_access,
            },
        }
    }

    pub fn arc(key: Key, list: ArcList) -> Self {
        Self {
            key,
            meta: EntryMeta::Arc { list },
        }
    }

    /// Access count, for LFU entries.
    pub fn frequency(&self) -> Option<u64> {
        match self.meta {
            EntryMeta::Lfu { frequency, .. } => Some(frequency),
            _ => None,
        }
    }

    /// Logical time of the most recent access, for LRU and LFU entries.
    pub fn last_access(&self) -> Option<LogicalTime> {
        match self.meta {
            EntryMeta::Lru { last_access } | EntryMeta::Lfu { last_access, .. } => {
                Some(last_access)
            }
            EntryMeta::Arc { .. } => None,
        }
    }

    /// List membership, for ARC entries.
    pub fn list(&self) -> Option<ArcList> {
        match self.meta {
            EntryMeta::Arc { list } => Some(list),
            _ => None,
        }
    }
}

// ============================================================================
// POLICY CONTRACT
// ============================================================================

/// A capacity-bounded replacement policy over abstract keys.
///
/// Implementations guarantee:
/// - no key is resident twice
/// - `len() <= capacity()` after every access
/// - at most one eviction per miss, and only when the cache is full at the
///   time of the miss
///
/// Policies are `Send` so independent runs can execute on separate threads.
/// They are never shared between runs.
pub trait CachePolicy: fmt::Debug + Send {
    /// Which algorithm this policy implements.
    fn algorithm(&self) -> Algorithm;

    /// Maximum number of resident entries.
    fn capacity(&self) -> usize;

    /// Current number of resident entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: Key) -> bool;

    /// Process one access at logical time `now`.
    fn access(&mut self, key: Key, now: LogicalTime) -> AccessOutcome;

    /// Resident entries in the policy's display order. Does not mutate state.
    fn snapshot(&self) -> Vec<CacheEntry>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("lru".parse::<Algorithm>(), Ok(Algorithm::Lru));
        assert_eq!("LFU".parse::<Algorithm>(), Ok(Algorithm::Lfu));
        assert_eq!(" Arc ".parse::<Algorithm>(), Ok(Algorithm::Arc));
        assert_eq!(
            "fifo".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm("fifo".to_string()))
        );
    }

    #[test]
    fn test_algorithm_display_round_trips() {
        for algorithm in Algorithm::ALL {
            let shown = algorithm.to_string();
            assert_eq!(shown.parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(Algorithm::Arc.to_string(), "ARC");
    }

    #[test]
    fn test_build_returns_matching_policy() {
        for algorithm in Algorithm::ALL {
            let policy = algorithm.build(4);
            assert_eq!(policy.algorithm(), algorithm);
            assert_eq!(policy.capacity(), 4);
            assert!(policy.is_empty());
        }
    }

    #[test]
    fn test_entry_accessors() {
        let lru = CacheEntry::lru(Key(1), 9);
        assert_eq!(lru.last_access(), Some(9));
        assert_eq!(lru.frequency(), None);
        assert_eq!(lru.list(), None);

        let lfu = CacheEntry::lfu(Key(2), 3, 7);
        assert_eq!(lfu.frequency(), Some(3));
        assert_eq!(lfu.last_access(), Some(7));

        let arc = CacheEntry::arc(Key(3), ArcList::T2);
        assert_eq!(arc.list(), Some(ArcList::T2));
        assert_eq!(arc.last_access(), None);
    }

    #[test]
    fn test_outcome_constructors() {
        let hit = AccessOutcome::hit(Key(1));
        assert!(hit.hit);
        assert_eq!(hit.evicted, None);

        let miss = AccessOutcome::miss(Key(2), Some(Key(1)));
        assert!(!miss.hit);
        assert_eq!(miss.evicted, Some(Key(1)));
    }
}
