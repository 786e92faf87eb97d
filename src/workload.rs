//! Synthetic access workloads.
//!
//! A [`WorkloadGenerator`] turns a named [`WorkloadPattern`] and a length
//! into a key trace. The generator owns its own seedable RNG; nothing here
//! touches process-wide random state, so tests can pin a seed and get the
//! same `random`/`zipfian` trace every time.
//!
//! | Pattern      | Keys             | Deterministic |
//! |--------------|------------------|---------------|
//! | `sequential` | `i mod 10`       | yes           |
//! | `random`     | uniform `[0,20)` | no            |
//! | `zipfian`    | 0/1/2 hot, `[3,13)` cold | no    |
//! | `loop`       | `1,2,3,4,5,1,…`  | yes           |

use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::common::config::{
    LOOP_PATTERN, RANDOM_KEY_SPACE, SEQUENTIAL_KEY_SPACE, ZIPFIAN_COLD_KEYS,
    ZIPFIAN_HOT_THRESHOLDS,
};
use crate::common::{Error, Key};

/// Shape of a synthetic workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadPattern {
    /// Scan-like cycle through 10 keys.
    Sequential,
    /// Uniform over 20 keys.
    Random,
    /// Hot-key skew: keys 0, 1, 2 take 87.5% of accesses.
    Zipfian,
    /// Reuse loop over a 5-key working set.
    Loop,
}

impl WorkloadPattern {
    pub const ALL: [WorkloadPattern; 4] = [
        WorkloadPattern::Sequential,
        WorkloadPattern::Random,
        WorkloadPattern::Zipfian,
        WorkloadPattern::Loop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WorkloadPattern::Sequential => "sequential",
            WorkloadPattern::Random => "random",
            WorkloadPattern::Zipfian => "zipfian",
            WorkloadPattern::Loop => "loop",
        }
    }

    /// Whether the pattern produces the same trace on every call.
    pub fn is_deterministic(self) -> bool {
        matches!(self, WorkloadPattern::Sequential | WorkloadPattern::Loop)
    }
}

impl fmt::Display for WorkloadPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WorkloadPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(WorkloadPattern::Sequential),
            "random" => Ok(WorkloadPattern::Random),
            "zipfian" => Ok(WorkloadPattern::Zipfian),
            "loop" => Ok(WorkloadPattern::Loop),
            _ => Err(Error::UnknownWorkload(s.to_string())),
        }
    }
}

/// Produces key traces for a [`WorkloadPattern`].
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    rng: SmallRng,
}

impl WorkloadGenerator {
    /// Generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Generator with a fixed seed, for reproducible random traces.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, OS-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Generate exactly `count` keys.
    ///
    /// `count` of 0 yields an empty trace. Deterministic patterns never
    /// advance the RNG.
    pub fn generate(&mut self, pattern: WorkloadPattern, count: usize) -> Vec<Key> {
        (0..count).map(|i| self.key_at(pattern, i)).collect()
    }

    fn key_at(&mut self, pattern: WorkloadPattern, index: usize) -> Key {
        match pattern {
            WorkloadPattern::Sequential => Key(index as u64 % SEQUENTIAL_KEY_SPACE),
            WorkloadPattern::Random => Key(self.rng.random_range(0..RANDOM_KEY_SPACE)),
            WorkloadPattern::Zipfian => {
                let u: f64 = self.rng.random();
                match ZIPFIAN_HOT_THRESHOLDS.iter().position(|&t| u < t) {
                    Some(hot) => Key(hot as u64),
                    None => Key(self.rng.random_range(ZIPFIAN_COLD_KEYS)),
                }
            }
            WorkloadPattern::Loop => Key(LOOP_PATTERN[index % LOOP_PATTERN.len()]),
        }
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience: build a generator and produce a trace.
pub fn generate(pattern: WorkloadPattern, count: usize, seed: Option<u64>) -> Vec<Key> {
    WorkloadGenerator::from_seed(seed).generate(pattern, count)
}
