//! JSON serialization for analysis reports.
//!
//! Non-finite RMSE values (models with no data in their domain) serialize as
//! `null` and read back as `f64::INFINITY`.

use crate::result::Report;

/// Serialize a Report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Report).
pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a Report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Report).
pub fn to_json_pretty(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Aggregation;
    use crate::result::{AnalysisResult, BatchInfo, Metadata, ModelFit};
    use crate::types::{DataPoint, GrowthModel};

    fn make_report() -> Report {
        Report {
            points: vec![DataPoint::new(10, 0.5), DataPoint::new(20, 1.0)],
            analysis: AnalysisResult {
                best_fit: GrowthModel::Linear,
                confidence: 100,
                fits: vec![
                    ModelFit {
                        model: GrowthModel::Linear,
                        rmse: 0.0,
                    },
                    ModelFit {
                        model: GrowthModel::Logarithmic,
                        rmse: f64::INFINITY,
                    },
                ],
            },
            metadata: Metadata {
                clock: "monotonic".to_string(),
                timer_resolution_ms: 0.001,
                warmup_iterations: 50,
                repetitions: 10,
                aggregation: Aggregation::Median,
                batches: vec![BatchInfo {
                    n: 10,
                    calibration_iterations: 100,
                    calibration_ms: 5.0,
                    batch_size: 300,
                    capped: false,
                }],
                runtime_secs: 1.5,
            },
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_report()).unwrap();
        assert!(json.contains("\"best_fit\":\"Linear\""));
        assert!(json.contains("\"confidence\":100"));
        assert!(json.contains("\"rmse\":null"));
        assert!(json.contains("\"duration\":0.5"));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&make_report()).unwrap();
        assert!(json.contains('\n')); // Pretty print has newlines
        assert!(json.contains("calibration_iterations"));
    }

    #[test]
    fn test_round_trip_keeps_infinite_rmse() {
        let report = make_report();
        let json = to_json(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
        assert!(parsed
            .analysis
            .fit_for(GrowthModel::Logarithmic)
            .is_some_and(|f| f.rmse == f64::INFINITY));
    }

    #[test]
    fn test_round_trip_classified_zero_sizes() {
        let analysis =
            crate::analysis::classify(&[DataPoint::new(0, 1.0), DataPoint::new(0, 1.0)]).unwrap();
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("\"rmse\":null"));
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, analysis);
    }
}
