//! Analysis result types and related structures.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::Aggregation;
use crate::constants::{HIGH_CONFIDENCE_THRESHOLD, LOW_CONFIDENCE_THRESHOLD};
use crate::types::{DataPoint, GrowthModel};

/// Goodness of fit of one growth model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelFit {
    /// The model that was fitted.
    pub model: GrowthModel,
    /// Root-mean-square error of the fit, in milliseconds.
    ///
    /// `f64::INFINITY` if no data point lies in the model's domain. JSON
    /// carries that as `null`.
    #[serde(deserialize_with = "deserialize_rmse")]
    pub rmse: f64,
}

fn deserialize_rmse<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

/// Verdict of one classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Simplest model whose fit is indistinguishable from the best fit.
    pub best_fit: GrowthModel,
    /// Confidence in the verdict (0-100).
    pub confidence: u8,
    /// All five fits, ascending by RMSE.
    pub fits: Vec<ModelFit>,
}

impl AnalysisResult {
    /// Fit of a particular model.
    pub fn fit_for(&self, model: GrowthModel) -> Option<&ModelFit> {
        self.fits.iter().find(|fit| fit.model == model)
    }

    /// Qualitative confidence bucket.
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }

    /// Whether the verdict should be flagged to the user.
    pub fn is_low_confidence(&self) -> bool {
        self.confidence < LOW_CONFIDENCE_THRESHOLD
    }
}

/// Qualitative confidence bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// At or above the high-confidence threshold.
    High,
    /// Between the low and high thresholds.
    Moderate,
    /// Below the low-confidence threshold; show a warning.
    Low,
}

impl ConfidenceLevel {
    /// Bucket a 0-100 confidence score.
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence >= HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceLevel::High
        } else if confidence >= LOW_CONFIDENCE_THRESHOLD {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// How one input size was measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchInfo {
    /// Input size.
    pub n: usize,
    /// Calls made during calibration.
    pub calibration_iterations: usize,
    /// Time calibration took (ms).
    pub calibration_ms: f64,
    /// Calls per timed batch.
    pub batch_size: usize,
    /// Calibration hit its iteration cap before the time threshold.
    ///
    /// Such points come from a function too fast for the clock (or a clock
    /// that did not advance) and deserve less trust.
    pub capped: bool,
}

/// Metadata for debugging and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Clock used for measurement.
    pub clock: String,
    /// Estimated clock resolution (ms).
    pub timer_resolution_ms: f64,
    /// Warm-up calls made on the smallest size.
    pub warmup_iterations: usize,
    /// Timed batches per size.
    pub repetitions: usize,
    /// Aggregation policy for per-batch samples.
    pub aggregation: Aggregation,
    /// Per-size batching details, in request order.
    pub batches: Vec<BatchInfo>,
    /// Wall-clock duration of the whole analysis (seconds).
    pub runtime_secs: f64,
}

/// Complete output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Measured points, in request order.
    pub points: Vec<DataPoint>,
    /// Classification of the points.
    pub analysis: AnalysisResult,
    /// Run metadata.
    pub metadata: Metadata,
}

impl Report {
    /// Number of points whose calibration hit the iteration cap.
    pub fn capped_points(&self) -> usize {
        self.metadata.batches.iter().filter(|b| b.capped).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_levels() {
        assert_eq!(ConfidenceLevel::from_confidence(100), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(80), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(79), ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::from_confidence(50), ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::from_confidence(49), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_confidence(0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_fit_lookup_and_low_confidence() {
        let result = AnalysisResult {
            best_fit: GrowthModel::Linear,
            confidence: 42,
            fits: vec![
                ModelFit {
                    model: GrowthModel::Linear,
                    rmse: 0.1,
                },
                ModelFit {
                    model: GrowthModel::Quadratic,
                    rmse: 0.5,
                },
            ],
        };
        assert_eq!(result.fit_for(GrowthModel::Quadratic).unwrap().rmse, 0.5);
        assert!(result.fit_for(GrowthModel::Constant).is_none());
        assert!(result.is_low_confidence());
        assert_eq!(result.confidence_level(), ConfidenceLevel::Low);
    }
}
