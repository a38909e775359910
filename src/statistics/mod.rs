//! Statistical building blocks for measurement aggregation and model fitting.
//!
//! - Descriptive statistics (mean, variance, quantiles)
//! - Ordinary least squares on a single regressor

mod descriptive;
mod regression;

pub use descriptive::{dispersion, mean, median, quantile, variance};
pub use regression::{least_squares, rmse, LinearFit};
