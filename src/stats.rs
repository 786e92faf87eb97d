//! Run statistics tracking.

use std::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::common::config::HISTORY_SAMPLE_INTERVAL;
use crate::common::{Error, Result};
use crate::policy::AccessOutcome;

/// Hit rate as a percentage, or `None` when nothing was accessed.
fn percent(hits: u64, misses: u64) -> Option<f64> {
    let total = hits + misses;
    if total == 0 {
        None
    } else {
        Some(hits as f64 / total as f64 * 100.0)
    }
}

/// One sample of the running hit rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryPoint {
    /// 1-indexed access after which the sample was taken.
    pub access_index: usize,

    /// Hit rate over every access so far, in percent.
    pub hit_rate: f64,
}

/// Aggregate counters for one run.
///
/// Serializes with a derived `hit_rate` field, `null` when undefined.
///
/// # Example
/// ```
/// use cachesim::RunStatistics;
///
/// let stats = RunStatistics { hits: 1, misses: 4, evictions: 1 };
/// assert_eq!(stats.hit_rate(), Some(20.0));
/// assert_eq!(RunStatistics::default().hit_rate(), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl RunStatistics {
    pub fn total_accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate in percent (0.0 to 100.0).
    ///
    /// `None` when no accesses were processed. That is "no data", not 0%.
    pub fn hit_rate(&self) -> Option<f64> {
        percent(self.hits, self.misses)
    }

    /// Like [`hit_rate`](Self::hit_rate), but an error when undefined.
    pub fn require_hit_rate(&self) -> Result<f64> {
        self.hit_rate().ok_or(Error::UndefinedRate)
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, hit_rate: ",
            self.hits, self.misses, self.evictions
        )?;
        match self.hit_rate() {
            Some(rate) => write!(f, "{:.2}% }}", rate),
            None => write!(f, "n/a }}"),
        }
    }
}

impl Serialize for RunStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RunStatistics", 4)?;
        state.serialize_field("hits", &self.hits)?;
        state.serialize_field("misses", &self.misses)?;
        state.serialize_field("hit_rate", &self.hit_rate())?;
        state.serialize_field("evictions", &self.evictions)?;
        state.end()
    }
}

/// Accumulates outcomes during a run and samples the hit-rate history.
///
/// Owned by exactly one run; plain counters, no synchronization.
#[derive(Debug, Default)]
pub struct StatisticsCollector {
    hits: u64,
    misses: u64,
    evictions: u64,
    history: Vec<HistoryPoint>,
}

impl StatisticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one access outcome into the counters.
    pub fn record(&mut self, outcome: &AccessOutcome) {
        if outcome.hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        if outcome.evicted.is_some() {
            self.evictions += 1;
        }
    }

    /// Append a history point if `access_index` (1-indexed) is a multiple of
    /// [`HISTORY_SAMPLE_INTERVAL`].
    ///
    /// The sampled rate covers all accesses so far, not just the last window.
    /// Returns the point that was appended, if any.
    pub fn sample_if_due(&mut self, access_index: usize) -> Option<HistoryPoint> {
        if access_index == 0 || access_index % HISTORY_SAMPLE_INTERVAL != 0 {
            return None;
        }
        let point = HistoryPoint {
            access_index,
            hit_rate: percent(self.hits, self.misses)?,
        };
        self.history.push(point);
        Some(point)
    }

    /// Current aggregate counters.
    pub fn finalize(&self) -> RunStatistics {
        RunStatistics {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }

    pub fn history(&self) -> &[HistoryPoint] {
        &self.history
    }

    /// Consume the collector, yielding the final counters and history.
    pub fn into_parts(self) -> (RunStatistics, Vec<HistoryPoint>) {
        (self.finalize(), self.history)
    }
}
