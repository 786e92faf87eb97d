//! Simulation runner - drives one policy over one workload.
//!
//! A run is a single synchronous pass:
//! ```text
//!   SimulationConfig ──validate──▶ WorkloadGenerator ──keys──▶ CachePolicy
//!                                                               │ AccessOutcome
//!                                                               ▼
//!                        SimulationResult ◀── finalize ── StatisticsCollector
//! ```
//! Every run builds its own policy and collector. Nothing is shared between
//! runs, so independent runs may execute on different threads freely.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::{Error, Key, Result};
use crate::policy::{Algorithm, CacheEntry, LogicalTime};
use crate::stats::{HistoryPoint, RunStatistics, StatisticsCollector};
use crate::workload::{WorkloadGenerator, WorkloadPattern};

/// Parameters for one generated-workload run.
///
/// # Example
/// ```
/// use cachesim::{Algorithm, SimulationConfig, WorkloadPattern};
///
/// let config = SimulationConfig::new(Algorithm::Lfu, 4, WorkloadPattern::Zipfian, 50)
///     .with_seed(7);
/// let result = cachesim::run_config(&config).unwrap();
/// assert_eq!(result.statistics.total_accesses(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub algorithm: Algorithm,
    pub capacity: usize,
    pub pattern: WorkloadPattern,
    pub access_count: usize,

    /// Seed for the `random` and `zipfian` patterns. OS-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new(
        algorithm: Algorithm,
        capacity: usize,
        pattern: WorkloadPattern,
        access_count: usize,
    ) -> Self {
        Self {
            algorithm,
            capacity,
            pattern,
            access_count,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check `capacity >= 1` and `access_count >= 1`.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        check_at_least_one("capacity", self.capacity)?;
        check_at_least_one("access_count", self.access_count)
    }
}

fn check_at_least_one(field: &'static str, value: usize) -> Result<()> {
    if value < 1 {
        return Err(Error::InvalidConfiguration { field, value });
    }
    Ok(())
}

/// Everything a host needs to present a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub algorithm: Algorithm,
    pub capacity: usize,

    /// The generating pattern, or `None` for a replayed trace.
    pub pattern: Option<WorkloadPattern>,

    /// The exact key sequence the policy saw.
    pub workload: Vec<Key>,

    /// Resident entries after the last access, in the policy's display order.
    pub final_snapshot: Vec<CacheEntry>,

    pub statistics: RunStatistics,

    /// Hit rate sampled every 5th access.
    pub history: Vec<HistoryPoint>,
}

/// Run `algorithm` over a freshly generated workload.
///
/// Random patterns are OS-seeded; use [`run_config`] with a seed for
/// reproducible results.
///
/// # Errors
/// `Error::InvalidConfiguration` if `capacity` or `access_count` is 0.
pub fn run(
    algorithm: Algorithm,
    capacity: usize,
    pattern: WorkloadPattern,
    access_count: usize,
) -> Result<SimulationResult> {
    run_config(&SimulationConfig::new(
        algorithm,
        capacity,
        pattern,
        access_count,
    ))
}

/// Run a validated [`SimulationConfig`].
///
/// # Errors
/// `Error::InvalidConfiguration` if `capacity` or `access_count` is 0.
/// Validation happens before any workload is generated.
pub fn run_config(config: &SimulationConfig) -> Result<SimulationResult> {
    config.validate()?;

    debug!(
        "run: {} capacity={} pattern={} accesses={} seed={:?}",
        config.algorithm, config.capacity, config.pattern, config.access_count, config.seed
    );

    let workload =
        WorkloadGenerator::from_seed(config.seed).generate(config.pattern, config.access_count);
    let mut result = replay(config.algorithm, config.capacity, workload);
    result.pattern = Some(config.pattern);
    Ok(result)
}

/// Run `algorithm` over a caller-supplied key trace.
///
/// An empty trace is allowed: the result reports no accesses and an
/// undefined hit rate.
///
/// # Errors
/// `Error::InvalidConfiguration` if `capacity` is 0.
pub fn run_workload(
    algorithm: Algorithm,
    capacity: usize,
    workload: &[Key],
) -> Result<SimulationResult> {
    check_at_least_one("capacity", capacity)?;

    debug!(
        "replay: {} capacity={} accesses={}",
        algorithm,
        capacity,
        workload.len()
    );

    Ok(replay(algorithm, capacity, workload.to_vec()))
}

/// Generate one workload and run every algorithm over it.
///
/// Results come back in [`Algorithm::ALL`] order. Because all three see the
/// identical trace, the comparison is fair even for random patterns.
///
/// # Errors
/// `Error::InvalidConfiguration` if `capacity` or `access_count` is 0.
pub fn compare(
    capacity: usize,
    pattern: WorkloadPattern,
    access_count: usize,
    seed: Option<u64>,
) -> Result<Vec<SimulationResult>> {
    check_at_least_one("capacity", capacity)?;
    check_at_least_one("access_count", access_count)?;

    debug!(
        "compare: capacity={} pattern={} accesses={} seed={:?}",
        capacity, pattern, access_count, seed
    );

    let workload = WorkloadGenerator::from_seed(seed).generate(pattern, access_count);

    Ok(Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let mut result = replay(algorithm, capacity, workload.clone());
            result.pattern = Some(pattern);
            result
        })
        .collect())
}

/// The simulation loop. Capacity must already be validated.
fn replay(algorithm: Algorithm, capacity: usize, workload: Vec<Key>) -> SimulationResult {
    let mut policy = algorithm.build(capacity);
    let mut collector = StatisticsCollector::new();

    for (index, &key) in workload.iter().enumerate() {
        let now = index as LogicalTime + 1;
        let outcome = policy.access(key, now);
        collector.record(&outcome);
        collector.sample_if_due(index + 1);
    }

    let final_snapshot = policy.snapshot();
    let (statistics, history) = collector.into_parts();

    debug!("{} finished: {}", algorithm, statistics);

    SimulationResult {
        algorithm,
        capacity,
        pattern: None,
        workload,
        final_snapshot,
        statistics,
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::keys;
    use crate::policy::ArcList;

    #[test]
    fn test_run_lru_trace() {
        let result = run_workload(Algorithm::Lru, 3, &keys(&[1, 2, 3, 1, 4])).unwrap();

        assert_eq!(result.statistics.hits, 1);
        assert_eq!(result.statistics.misses, 4);
        assert_eq!(result.statistics.evictions, 1);

        let mut resident: Vec<u64> = result.final_snapshot.iter().map(|e| e.key.0).collect();
        resident.sort_unstable();
        assert_eq!(resident, vec![1, 3, 4]);
    }

    #[test]
    fn test_run_arc_promotion() {
        let result = run_workload(Algorithm::Arc, 2, &keys(&[1, 1])).unwrap();
        assert_eq!(
            result.final_snapshot,
            vec![CacheEntry::arc(Key(1), ArcList::T2)]
        );
    }

    #[test]
    fn test_run_rejects_zero_capacity() {
        let err = run(Algorithm::Lru, 0, WorkloadPattern::Loop, 10).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfiguration {
                field: "capacity",
                value: 0
            }
        );
    }

    #[test]
    fn test_run_rejects_zero_accesses() {
        let err = run(Algorithm::Lfu, 4, WorkloadPattern::Loop, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfiguration {
                field: "access_count",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_trace_has_undefined_rate() {
        let result = run_workload(Algorithm::Arc, 2, &[]).unwrap();
        assert_eq!(result.statistics.total_accesses(), 0);
        assert_eq!(result.statistics.hit_rate(), None);
        assert!(result.history.is_empty());
        assert!(result.final_snapshot.is_empty());
    }

    #[test]
    fn test_history_cadence() {
        let result = run(Algorithm::Lru, 4, WorkloadPattern::Sequential, 12).unwrap();
        let indices: Vec<usize> = result.history.iter().map(|p| p.access_index).collect();
        assert_eq!(indices, vec![5, 10]);
    }

    #[test]
    fn test_loop_fits_in_cache() {
        // 5-key working set in a 5-slot cache: only the first pass misses
        let result = run(Algorithm::Lru, 5, WorkloadPattern::Loop, 20).unwrap();
        assert_eq!(result.statistics.misses, 5);
        assert_eq!(result.statistics.hits, 15);
        assert_eq!(result.statistics.evictions, 0);
        assert_eq!(result.statistics.hit_rate(), Some(75.0));
    }

    #[test]
    fn test_sequential_thrashes_small_lru() {
        let result = run(Algorithm::Lru, 4, WorkloadPattern::Sequential, 30).unwrap();
        assert_eq!(result.statistics.hits, 0);
        assert_eq!(result.statistics.evictions, 26);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimulationConfig::new(Algorithm::Lfu, 4, WorkloadPattern::Random, 60)
            .with_seed(99);
        assert_eq!(run_config(&config).unwrap(), run_config(&config).unwrap());
    }

    #[test]
    fn test_compare_uses_one_workload() {
        let results = compare(3, WorkloadPattern::Zipfian, 40, Some(5)).unwrap();
        assert_eq!(results.len(), 3);

        let algorithms: Vec<Algorithm> = results.iter().map(|r| r.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());
        assert!(results.iter().all(|r| r.workload == results[0].workload));
        assert!(results
            .iter()
            .all(|r| r.pattern == Some(WorkloadPattern::Zipfian)));
    }

    #[test]
    fn test_config_validate() {
        assert!(SimulationConfig::new(Algorithm::Arc, 1, WorkloadPattern::Random, 1)
            .validate()
            .is_ok());
        assert!(SimulationConfig::new(Algorithm::Arc, 0, WorkloadPattern::Random, 0)
            .validate()
            .is_err());
    }
}
