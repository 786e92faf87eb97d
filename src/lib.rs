//! cachesim - compare cache replacement policies against synthetic workloads.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           cachesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Simulation Runner (simulation/)              │   │
//! │  │      run / run_config / run_workload / compare           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │           ↓ keys                             ↑ outcomes         │
//! │  ┌──────────────────────┐   ┌──────────────────────────────┐   │
//! │  │ Workload (workload)  │   │   Policies (policy/)         │   │
//! │  │ sequential | random  │   │   LRU | LFU | ARC (T1/T2)    │   │
//! │  │ zipfian    | loop    │   │   O(1) per access            │   │
//! │  └──────────────────────┘   └──────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Statistics (stats) - counters + hit-rate history   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Key, Error, design constants)
//! - [`policy`] - Replacement policies and the [`CachePolicy`] trait
//! - [`workload`] - Synthetic key traces
//! - [`stats`] - Hit/miss/eviction counters and history sampling
//! - [`simulation`] - End-to-end runs
//!
//! Everything is a pure, synchronous, in-process computation. Presentation
//! (charts, cache visualisation, pacing delays) belongs to the host.
//!
//! # Quick Start
//! ```
//! use cachesim::{keys, Algorithm, WorkloadPattern};
//!
//! // A generated workload
//! let result = cachesim::run(Algorithm::Lru, 4, WorkloadPattern::Loop, 20).unwrap();
//! assert_eq!(result.statistics.hits + result.statistics.misses, 20);
//!
//! // A fixed trace
//! let result = cachesim::run_workload(Algorithm::Lfu, 2, &keys(&[1, 2, 1, 3])).unwrap();
//! assert_eq!(result.statistics.evictions, 1);
//! ```

pub mod common;
pub mod policy;
pub mod simulation;
pub mod stats;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::config::HISTORY_SAMPLE_INTERVAL;
pub use common::{keys, Error, Key, Result};

pub use policy::{
    AccessOutcome, Algorithm, ArcList, ArcPolicy, CacheEntry, CachePolicy, EntryMeta, LfuPolicy,
    LogicalTime, LruPolicy,
};
pub use simulation::{compare, run, run_config, run_workload, SimulationConfig, SimulationResult};
pub use stats::{HistoryPoint, RunStatistics, StatisticsCollector};
pub use workload::{WorkloadGenerator, WorkloadPattern};
