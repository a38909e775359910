//! Model selection: best fit, Occam's razor, and confidence scoring.
//!
//! Selection runs in four steps:
//!
//! 1. Fit every model and sort by `(rmse, rank)`.
//! 2. Walk the models from simplest to most complex and adopt the first one
//!    whose RMSE is within [`RMSE_TOLERANCE`] of the current best.
//! 3. Prefer `O(1)` over a `O(log n)` verdict when the logarithmic fit
//!    explains little more than noise around a flat line.
//! 4. Force `O(1)` when every duration is below the clock noise floor.
//!
//! The function is pure: the same points always produce the same result.

use tracing::{debug, info, warn};

use crate::constants::{
    EXACT_FIT_RMSE, FIT_QUALITY_WEIGHT, LOG_CONSTANT_RMSE_RATIO, LOG_NORMALIZED_ERROR_LIMIT,
    MIN_DATA_POINTS, NOISE_FLOOR_DISPERSION, NOISE_FLOOR_MS, RMSE_TOLERANCE, SEPARATION_WEIGHT,
};
use crate::error::{Error, Result};
use crate::result::{AnalysisResult, ModelFit};
use crate::statistics::{dispersion, mean};
use crate::types::{DataPoint, GrowthModel};

use super::fit::{fit_all, sort_fits};

/// Classify measured points into the growth model that best explains them.
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] when fewer than two points are given.
///
/// A series with any non-finite duration is reported as `O(1)` with
/// confidence 0. Its fits cover the finite points only.
pub fn classify(points: &[DataPoint]) -> Result<AnalysisResult> {
    if points.len() < MIN_DATA_POINTS {
        return Err(Error::InsufficientData {
            required: MIN_DATA_POINTS,
            actual: points.len(),
        });
    }

    let finite: Vec<DataPoint> = points
        .iter()
        .copied()
        .filter(|p| p.duration.is_finite())
        .collect();
    if finite.len() < points.len() {
        warn!(
            non_finite = points.len() - finite.len(),
            "non-finite durations: reporting O(1) with confidence 0"
        );
        let mut fits = if finite.len() >= MIN_DATA_POINTS {
            fit_all(&finite)
        } else {
            GrowthModel::ALL
                .iter()
                .map(|&model| ModelFit {
                    model,
                    rmse: f64::INFINITY,
                })
                .collect()
        };
        sort_fits(&mut fits);
        return Ok(AnalysisResult {
            best_fit: GrowthModel::Constant,
            confidence: 0,
            fits,
        });
    }

    let durations: Vec<f64> = points.iter().map(|p| p.duration).collect();
    let mean_duration = mean(&durations).unwrap_or(0.0);

    let mut fits = fit_all(points);
    sort_fits(&mut fits);
    for fit in &fits {
        debug!(model = %fit.model, rmse = fit.rmse, "model fit");
    }

    let mut best = apply_occam(&fits);
    if let Some(constant) = prefer_constant_over_log(best, &fits, mean_duration) {
        debug!("flat signal: preferring O(1) over O(log n)");
        best = constant;
    }
    if below_noise_floor(&durations) {
        debug!("all durations below noise floor: forcing O(1)");
        best = constant_fit(&fits);
    }

    let confidence = confidence(best, &fits, mean_duration);
    info!(
        best_fit = %best.model,
        confidence,
        rmse = best.rmse,
        "classification complete"
    );

    Ok(AnalysisResult {
        best_fit: best.model,
        confidence,
        fits,
    })
}

/// Simplest model whose fit is indistinguishable from the naive best.
///
/// `fits` must be sorted by [`sort_fits`].
fn apply_occam(fits: &[ModelFit]) -> ModelFit {
    let mut best = fits[0];
    for model in GrowthModel::ALL {
        if model.rank() >= best.model.rank() {
            break;
        }
        let Some(candidate) = fits.iter().find(|f| f.model == model) else {
            continue;
        };
        if within_tolerance(candidate.rmse, best.rmse) {
            best = *candidate;
        }
    }
    best
}

/// Whether a simpler model's RMSE is close enough to the best RMSE.
///
/// Two exact fits always tie. A best RMSE of zero admits only exact fits.
fn within_tolerance(candidate: f64, best: f64) -> bool {
    if !candidate.is_finite() {
        return false;
    }
    if best <= EXACT_FIT_RMSE && candidate <= EXACT_FIT_RMSE {
        return true;
    }
    if best <= 0.0 {
        return false;
    }
    (candidate - best) / best < RMSE_TOLERANCE
}

fn prefer_constant_over_log(
    best: ModelFit,
    fits: &[ModelFit],
    mean_duration: f64,
) -> Option<ModelFit> {
    if best.model != GrowthModel::Logarithmic || mean_duration <= 0.0 {
        return None;
    }
    let constant = constant_fit(fits);
    let normalized_error = best.rmse / mean_duration;
    (normalized_error < LOG_NORMALIZED_ERROR_LIMIT
        && constant.rmse <= LOG_CONSTANT_RMSE_RATIO * best.rmse)
        .then_some(constant)
}

fn below_noise_floor(durations: &[f64]) -> bool {
    let max = durations.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max < NOISE_FLOOR_MS && dispersion(durations).unwrap_or(0.0) < NOISE_FLOOR_DISPERSION
}

fn constant_fit(fits: &[ModelFit]) -> ModelFit {
    fits.iter()
        .copied()
        .find(|f| f.model == GrowthModel::Constant)
        .unwrap_or(ModelFit {
            model: GrowthModel::Constant,
            rmse: f64::INFINITY,
        })
}

/// Confidence score (0-100).
///
/// An exact fit scores 100. Otherwise the score blends fit quality (RMSE
/// relative to the mean duration) with the separation from the next-best
/// distinct model.
fn confidence(best: ModelFit, fits: &[ModelFit], mean_duration: f64) -> u8 {
    if best.rmse <= EXACT_FIT_RMSE {
        return 100;
    }

    let fit_quality = if mean_duration > 0.0 {
        (1.0 - 2.0 * best.rmse / mean_duration).max(0.0)
    } else {
        0.0
    };

    let separation = fits
        .iter()
        .find(|f| f.model != best.model && f.rmse.is_finite())
        .filter(|next| next.rmse > 0.0)
        .map(|next| ((next.rmse - best.rmse) / next.rmse).clamp(0.0, 1.0))
        .unwrap_or(0.0);

    let score = 100.0 * (FIT_QUALITY_WEIGHT * fit_quality + SEPARATION_WEIGHT * separation);
    if score.is_finite() {
        score.round().clamp(0.0, 100.0) as u8
    } else {
        0
    }
}
