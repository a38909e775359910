//! Configuration for measurement sweeps.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CALIBRATION_THRESHOLD_MS, DEFAULT_REPETITIONS, MAX_CALIBRATION_ITERATIONS,
    MIN_WARMUP_ITERATIONS, TARGET_BATCH_MS,
};
use crate::measurement::trim_outliers;
use crate::statistics::{mean, median};

/// Configuration options for `ComplexityOracle`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Untimed warm-up invocations on the smallest size (default: 50).
    ///
    /// Values below 50 are raised to 50 when the sweep runs.
    pub warmup: usize,

    /// Timed batches per input size (default: 10).
    pub repetitions: usize,

    /// Elapsed time calibration must reach, in milliseconds (default: 5.0).
    pub calibration_threshold_ms: f64,

    /// Target duration of one timed batch, in milliseconds (default: 15.0).
    pub target_batch_ms: f64,

    /// Safety cap on calibration invocations (default: 1,000,000).
    ///
    /// Also bounds the batch size, so a clock that never advances cannot
    /// make a sweep run forever.
    pub max_calibration_iterations: usize,

    /// How per-batch samples are reduced to one duration (default: Mean).
    pub aggregation: Aggregation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warmup: MIN_WARMUP_ITERATIONS,
            repetitions: DEFAULT_REPETITIONS,
            calibration_threshold_ms: CALIBRATION_THRESHOLD_MS,
            target_batch_ms: TARGET_BATCH_MS,
            max_calibration_iterations: MAX_CALIBRATION_ITERATIONS,
            aggregation: Aggregation::Mean,
        }
    }
}

impl Config {
    /// Warm-up count actually used, never below the minimum.
    pub fn effective_warmup(&self) -> usize {
        self.warmup.max(MIN_WARMUP_ITERATIONS)
    }

    /// Repetitions actually used, at least one.
    pub fn effective_repetitions(&self) -> usize {
        self.repetitions.max(1)
    }

    /// Calibration cap actually used, at least one.
    pub fn effective_calibration_cap(&self) -> usize {
        self.max_calibration_iterations.max(1)
    }
}

/// Central-tendency policy for per-batch samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Aggregation {
    /// Arithmetic mean of all samples.
    #[default]
    Mean,
    /// Median; rejects isolated outliers.
    Median,
    /// Mean after dropping samples above `percentile` (0.0-1.0).
    TrimmedMean {
        /// Percentile above which samples are dropped.
        percentile: f64,
    },
}

impl Aggregation {
    /// Reduce samples to a single value. Returns `None` for no samples.
    pub fn aggregate(&self, samples: &[f64]) -> Option<f64> {
        match *self {
            Self::Mean => mean(samples),
            Self::Median => median(samples),
            Self::TrimmedMean { percentile } => {
                let (kept, _) = trim_outliers(samples, percentile);
                mean(&kept)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.warmup, 50);
        assert_eq!(config.repetitions, 10);
        assert_eq!(config.calibration_threshold_ms, 5.0);
        assert_eq!(config.target_batch_ms, 15.0);
        assert_eq!(config.aggregation, Aggregation::Mean);
        assert_eq!(Aggregation::default(), Aggregation::Mean);
    }

    #[test]
    fn test_effective_values_are_floored() {
        let config = Config {
            warmup: 3,
            repetitions: 0,
            max_calibration_iterations: 0,
            ..Config::default()
        };
        assert_eq!(config.effective_warmup(), 50);
        assert_eq!(config.effective_repetitions(), 1);
        assert_eq!(config.effective_calibration_cap(), 1);
    }

    #[test]
    fn test_aggregation_policies() {
        let samples = [1.0, 1.0, 1.0, 1.0, 11.0];
        assert_eq!(Aggregation::Mean.aggregate(&samples), Some(3.0));
        assert_eq!(Aggregation::Median.aggregate(&samples), Some(1.0));
        assert_eq!(
            Aggregation::TrimmedMean { percentile: 0.75 }.aggregate(&samples),
            Some(1.0)
        );
        assert_eq!(Aggregation::Median.aggregate(&[]), None);
    }
}
