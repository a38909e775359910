//! Measurement infrastructure for complexity analysis.
//!
//! This module provides:
//! - A pluggable wall-clock [`Timer`] with batched timing
//! - The adaptive [`Measurer`] (warm-up, calibration, timed batches)
//! - Percentile trimming used by the trimmed-mean aggregation policy
//! - An opt-in repeatability check for the algorithm under test
//!
//! # Clock Resolution
//!
//! Fast functions can finish well inside one clock tick. The engine never
//! times a single call: it calibrates how many calls fill a few
//! milliseconds and divides each batch's elapsed time by its call count, so
//! quantization error shrinks with the batch size.

mod engine;
mod outlier;
mod timer;
mod validate;

pub use engine::{Measurer, Sweep};
pub use outlier::{trim_outliers, TrimStats};
pub use timer::{black_box, Clock, MonotonicClock, Timer};
pub use validate::{check_repeatability, RepeatabilityWarning};

#[cfg(test)]
pub(crate) use timer::test_clocks;
