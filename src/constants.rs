//! Tuning constants for measurement and classification.

/// Minimum untimed invocations before any measurement.
pub const MIN_WARMUP_ITERATIONS: usize = 50;

/// Default number of timed batches per input size.
pub const DEFAULT_REPETITIONS: usize = 10;

/// Elapsed time (ms) calibration must reach before it stops.
pub const CALIBRATION_THRESHOLD_MS: f64 = 5.0;

/// Target duration (ms) of one timed batch.
pub const TARGET_BATCH_MS: f64 = 15.0;

/// Hard cap on calibration invocations, so a clock that never advances
/// cannot stall the sweep.
pub const MAX_CALIBRATION_ITERATIONS: usize = 1_000_000;

/// Relative RMSE tolerance within which a simpler model is preferred.
pub const RMSE_TOLERANCE: f64 = 0.15;

/// RMSE at or below which a fit is considered exact (ms).
pub const EXACT_FIT_RMSE: f64 = 1e-9;

/// Normalized logarithmic RMSE below which a flat signal is suspected.
pub const LOG_NORMALIZED_ERROR_LIMIT: f64 = 0.10;

/// Maximum ratio of constant RMSE to logarithmic RMSE for the
/// constant-over-logarithmic preference to apply.
pub const LOG_CONSTANT_RMSE_RATIO: f64 = 3.0;

/// Durations below this (ms) are indistinguishable from timer noise (1 us).
pub const NOISE_FLOOR_MS: f64 = 0.001;

/// Dispersion (variance / mean) below which a sub-noise-floor series is
/// treated as flat.
pub const NOISE_FLOOR_DISPERSION: f64 = 0.1;

/// Confidence weight of the normalized fit quality.
pub const FIT_QUALITY_WEIGHT: f64 = 0.7;

/// Confidence weight of the separation from the next-best model.
pub const SEPARATION_WEIGHT: f64 = 0.3;

/// Confidence below which results should be flagged to users.
pub const LOW_CONFIDENCE_THRESHOLD: u8 = 50;

/// Confidence at or above which a verdict is reported as high confidence.
pub const HIGH_CONFIDENCE_THRESHOLD: u8 = 80;

/// Minimum number of data points the classifier accepts.
pub const MIN_DATA_POINTS: usize = 2;
