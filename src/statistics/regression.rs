//! Ordinary least squares with a single regressor.
//!
//! The regressor is centered before solving, which keeps the fit exact to
//! machine precision even when `x` spans many orders of magnitude (e.g.
//! `n^2` for large `n`), where the raw normal equations are ill-conditioned.

use nalgebra::DVector;

/// Best-fit line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Value at `x = 0`.
    pub intercept: f64,
    /// Change in `y` per unit of `x`.
    pub slope: f64,
}

impl LinearFit {
    /// Predicted value at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit a line through `(xs[i], ys[i])` by least squares.
///
/// Returns `None` when fewer than two points are given, the slices differ in
/// length, the regressor has no spread, or the coefficients are not finite.
pub fn least_squares(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let x = DVector::from_column_slice(xs);
    let y = DVector::from_column_slice(ys);
    let x_mean = x.mean();
    let y_mean = y.mean();

    let xc = x.add_scalar(-x_mean);
    let yc = y.add_scalar(-y_mean);

    let sxx = xc.dot(&xc);
    if !sxx.is_finite() || sxx <= 0.0 {
        return None;
    }

    let slope = xc.dot(&yc) / sxx;
    let intercept = y_mean - slope * x_mean;

    if slope.is_finite() && intercept.is_finite() {
        Some(LinearFit { intercept, slope })
    } else {
        None
    }
}

/// Root-mean-square error between predictions and observations.
///
/// Returns 0 for empty input.
pub fn rmse(predicted: &[f64], observed: &[f64]) -> f64 {
    debug_assert_eq!(predicted.len(), observed.len());
    if observed.is_empty() {
        return 0.0;
    }
    let p = DVector::from_column_slice(predicted);
    let o = DVector::from_column_slice(observed);
    (p - o).norm() / (observed.len() as f64).sqrt()
}
