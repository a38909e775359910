//! Per-model least-squares fits.
//!
//! Each non-constant model is linearized as `duration = a + b * f(n)` and
//! fitted by ordinary least squares. RMSE is always measured on durations in
//! milliseconds, never in the transformed space, so fits are comparable
//! across models.

use crate::result::ModelFit;
use crate::statistics::{least_squares, mean, rmse};
use crate::types::{DataPoint, GrowthModel};

/// Fit one model to the points in its domain.
///
/// Points outside the domain (`n = 0` for the logarithmic models) are
/// skipped. A model with no point in its domain gets an infinite RMSE.
/// When the regression is degenerate (fewer than two points, or all `f(n)`
/// equal) the model falls back to predicting the mean.
pub fn fit_model(model: GrowthModel, points: &[DataPoint]) -> ModelFit {
    let domain: Vec<&DataPoint> = points.iter().filter(|p| model.accepts(p.n)).collect();
    let observed: Vec<f64> = domain.iter().map(|p| p.duration).collect();

    let Some(center) = mean(&observed) else {
        return ModelFit {
            model,
            rmse: f64::INFINITY,
        };
    };

    let predicted: Vec<f64> = match model {
        GrowthModel::Constant => vec![center; observed.len()],
        _ => {
            let xs: Vec<f64> = domain.iter().filter_map(|p| model.transform(p.n)).collect();
            match least_squares(&xs, &observed) {
                Some(line) => xs.iter().map(|&x| line.predict(x)).collect(),
                None => vec![center; observed.len()],
            }
        }
    };

    ModelFit {
        model,
        rmse: rmse(&predicted, &observed),
    }
}

/// Fit every model, in ascending rank order.
pub fn fit_all(points: &[DataPoint]) -> Vec<ModelFit> {
    GrowthModel::ALL
        .iter()
        .map(|&model| fit_model(model, points))
        .collect()
}

/// Sort fits ascending by RMSE; ties go to the simpler model.
pub fn sort_fits(fits: &mut [ModelFit]) {
    fits.sort_by(|a, b| {
        a.rmse
            .total_cmp(&b.rmse)
            .then_with(|| a.model.rank().cmp(&b.model.rank()))
    });
}
