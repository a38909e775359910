//! Percentile-based outlier trimming for per-call samples.
//!
//! Timed batches occasionally absorb a scheduler preemption or a page fault,
//! which shows up as a single sample far above the rest. Trimming drops
//! samples above a percentile threshold before averaging.

use serde::{Deserialize, Serialize};

use crate::statistics::quantile;

/// Statistics about one trimming pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrimStats {
    /// Samples before trimming.
    pub total_samples: usize,
    /// Samples kept.
    pub retained_samples: usize,
    /// Threshold applied (ms); `f64::INFINITY` when trimming was disabled.
    pub threshold: f64,
}

impl TrimStats {
    /// Number of samples dropped.
    pub fn removed(&self) -> usize {
        self.total_samples - self.retained_samples
    }

    /// Fraction of samples dropped (0.0 to 1.0).
    pub fn removed_fraction(&self) -> f64 {
        if self.total_samples == 0 {
            0.0
        } else {
            self.removed() as f64 / self.total_samples as f64
        }
    }
}

/// Drop samples above the given percentile.
///
/// If `percentile >= 1.0` or there are fewer than two samples, nothing is
/// dropped. Samples equal to the threshold are kept, so the result is never
/// empty for non-empty input.
pub fn trim_outliers(samples: &[f64], percentile: f64) -> (Vec<f64>, TrimStats) {
    let total_samples = samples.len();

    if percentile >= 1.0 || total_samples < 2 {
        return (
            samples.to_vec(),
            TrimStats {
                total_samples,
                retained_samples: total_samples,
                threshold: f64::INFINITY,
            },
        );
    }

    let mut working = samples.to_vec();
    let threshold = quantile(&mut working, percentile).unwrap_or(f64::INFINITY);

    let kept: Vec<f64> = samples.iter().copied().filter(|&x| x <= threshold).collect();
    let stats = TrimStats {
        total_samples,
        retained_samples: kept.len(),
        threshold,
    };

    (kept, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_drops_spike() {
        let samples = [1.0, 1.1, 0.9, 1.0, 1.05, 0.95, 1.0, 1.02, 0.98, 40.0];
        let (kept, stats) = trim_outliers(&samples, 0.9);

        assert_eq!(stats.total_samples, 10);
        assert_eq!(stats.removed(), 1);
        assert!(!kept.contains(&40.0));
        assert!((stats.removed_fraction() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_trim_disabled() {
        let samples = [1.0, 2.0, 300.0];
        let (kept, stats) = trim_outliers(&samples, 1.0);

        assert_eq!(kept, samples.to_vec());
        assert_eq!(stats.removed(), 0);
        assert!(stats.threshold.is_infinite());
    }

    #[test]
    fn test_trim_never_empties() {
        let samples = [5.0, 5.0, 5.0];
        let (kept, _) = trim_outliers(&samples, 0.0);
        assert_eq!(kept.len(), 3);

        let (single, stats) = trim_outliers(&[7.0], 0.5);
        assert_eq!(single, vec![7.0]);
        assert_eq!(stats.removed_fraction(), 0.0);
    }
}
