//! Fixed design constants for cachesim.
//!
//! None of these are runtime-configurable. Comparability between runs (and
//! with previously observed results) depends on every run using the same
//! workload shapes and the same sampling cadence.

/// A history point is appended after every `HISTORY_SAMPLE_INTERVAL`-th access.
///
/// Accesses are 1-indexed, so a run of 12 accesses is sampled at 5 and 10.
/// Partial windows at the end of a run are not sampled.
pub const HISTORY_SAMPLE_INTERVAL: usize = 5;

/// The `sequential` pattern cycles through keys `0..SEQUENTIAL_KEY_SPACE`.
pub const SEQUENTIAL_KEY_SPACE: u64 = 10;

/// The `random` pattern draws uniformly from `0..RANDOM_KEY_SPACE`.
pub const RANDOM_KEY_SPACE: u64 = 20;

/// Cumulative probability thresholds for the zipfian hot keys 0, 1 and 2.
///
/// A draw `u` in `[0, 1)` maps to key 0 when `u < 0.5`, key 1 when
/// `u < 0.75`, key 2 when `u < 0.875`, and a cold key otherwise.
pub const ZIPFIAN_HOT_THRESHOLDS: [f64; 3] = [0.5, 0.75, 0.875];

/// Cold keys for the zipfian pattern are drawn uniformly from this range.
pub const ZIPFIAN_COLD_KEYS: std::ops::Range<u64> = 3..13;

/// The `loop` pattern repeats this working set.
pub const LOOP_PATTERN: [u64; 5] = [1, 2, 3, 4, 5];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zipfian_thresholds_are_increasing() {
        assert!(ZIPFIAN_HOT_THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
        assert!(ZIPFIAN_HOT_THRESHOLDS[2] < 1.0);
    }

    #[test]
    fn test_zipfian_cold_keys_disjoint_from_hot() {
        assert_eq!(ZIPFIAN_COLD_KEYS.start, ZIPFIAN_HOT_THRESHOLDS.len() as u64);
        assert_eq!(ZIPFIAN_COLD_KEYS.end - ZIPFIAN_COLD_KEYS.start, 10);
    }
}
