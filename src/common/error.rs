//! Error types for cachesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in cachesim.
///
/// The simulation is a closed, fully specified computation, so the taxonomy is
/// narrow: a run either fails validation before touching any state, or it
/// completes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A run parameter is below its minimum of 1.
    ///
    /// Raised for `capacity < 1` or `access_count < 1`, before any workload
    /// is generated or policy constructed.
    #[error("invalid configuration: {field} must be at least 1, got {value}")]
    InvalidConfiguration { field: &'static str, value: usize },

    /// A hit rate was requested but no accesses were processed.
    ///
    /// Callers should treat this as "no data", not as 0%.
    #[error("hit rate is undefined: no accesses were processed")]
    UndefinedRate,

    /// The host supplied an algorithm name we don't know.
    #[error("unknown algorithm: {0:?} (expected lru, lfu or arc)")]
    UnknownAlgorithm(String),

    /// The host supplied a workload pattern name we don't know.
    #[error("unknown workload pattern: {0:?} (expected sequential, random, zipfian or loop)")]
    UnknownWorkload(String),
}
