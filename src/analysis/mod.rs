//! Growth-model classification.
//!
//! Fits the five candidate models to measured `(n, duration)` points and
//! picks the simplest one that explains the data. See [`classify`] for the
//! selection rules.

mod classify;
mod fit;

pub use classify::classify;
pub use fit::{fit_all, fit_model, sort_fits};
