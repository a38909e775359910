//! # complexity-oracle
//!
//! Estimate the asymptotic time complexity of a function from measurements.
//!
//! The crate times a function across a range of input sizes and fits the
//! timings against five growth models, outputting:
//! - The best-fitting model (`O(1)`, `O(log n)`, `O(n)`, `O(n log n)`, `O(n^2)`)
//! - A confidence score (0-100)
//! - The RMSE of every model, for inspection
//!
//! ## ⚠️ Common Pitfall: Stateful Algorithms
//!
//! The same workload is passed to the algorithm many times during
//! calibration and within a timed batch. The algorithm must do the same work
//! on every call.
//!
//! ```ignore
//! // ❌ WRONG - caches the answer, so only the first call does any work
//! let mut cache = HashMap::new();
//! analyze(|data: &[u64]| *cache.entry(data.len()).or_insert_with(|| expensive(data)), &sizes);
//!
//! // ✅ CORRECT - recomputes on every call
//! analyze(|data: &[u64]| expensive(data), &sizes);
//! ```
//!
//! Use [`ComplexityOracle::check_repeatability`] to catch this before
//! measuring.
//!
//! ## Quick Start
//!
//! ```ignore
//! use complexity_oracle::{analyze, output::format_report};
//!
//! let report = analyze(|data: &[u64]| data.iter().sum::<u64>(), &[1_000, 2_000, 4_000, 8_000])?;
//! println!("{}", format_report(&report));
//! ```
//!
//! ## Lower-Level Pieces
//!
//! [`measure`] and [`classify`] can be used on their own: `measure` turns an
//! algorithm into ordered [`DataPoint`]s, and `classify` turns any set of
//! points (measured elsewhere, say) into an [`AnalysisResult`].

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod oracle;
mod result;
mod types;

// Functional modules
pub mod algorithms;
pub mod analysis;
pub mod input;
pub mod measurement;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use algorithms::Builtin;
pub use analysis::classify;
pub use config::{Aggregation, Config};
pub use constants::{
    EXACT_FIT_RMSE, HIGH_CONFIDENCE_THRESHOLD, LOW_CONFIDENCE_THRESHOLD, MIN_DATA_POINTS,
    RMSE_TOLERANCE,
};
pub use error::{BoxError, Error, PanicError, Phase, Result};
pub use input::{generate, InputGenerator, InputSize, SizeStrategy};
pub use measurement::{Clock, MonotonicClock, Timer};
pub use oracle::ComplexityOracle;
pub use result::{AnalysisResult, BatchInfo, ConfidenceLevel, Metadata, ModelFit, Report};
pub use types::{DataPoint, GrowthModel};

use input::Sequential;
use measurement::Measurer;

/// Measure `algorithm` on workloads `0..n` for every size, with default
/// settings and `repetitions` timed batches per size.
///
/// Returns one [`DataPoint`] per size, in the order given. An empty size
/// list returns an empty vector without calling the algorithm.
///
/// # Errors
///
/// Returns [`Error::AlgorithmExecution`] if the algorithm panics.
pub fn measure<F, R>(algorithm: F, sizes: &[usize], repetitions: usize) -> Result<Vec<DataPoint>>
where
    F: FnMut(&[u64]) -> R,
{
    let config = Config {
        repetitions,
        ..Config::default()
    };
    Measurer::new(config, Timer::new(), Sequential)
        .measure(algorithm, sizes)
        .map(|sweep| sweep.points)
}

/// Like [`measure`], for algorithms that report failure through `Result`.
///
/// The first `Err` aborts the sweep with [`Error::AlgorithmExecution`]
/// carrying the original error as its source.
pub fn try_measure<F, R, E>(
    algorithm: F,
    sizes: &[usize],
    repetitions: usize,
) -> Result<Vec<DataPoint>>
where
    F: FnMut(&[u64]) -> std::result::Result<R, E>,
    E: Into<BoxError>,
{
    let config = Config {
        repetitions,
        ..Config::default()
    };
    Measurer::new(config, Timer::new(), Sequential)
        .try_measure(algorithm, sizes)
        .map(|sweep| sweep.points)
}

/// Measure and classify `algorithm` with default configuration.
///
/// Shorthand for `ComplexityOracle::new().analyze(algorithm, sizes)`.
pub fn analyze<F, R>(algorithm: F, sizes: &[usize]) -> Result<Report>
where
    F: FnMut(&[u64]) -> R,
{
    ComplexityOracle::new().analyze(algorithm, sizes)
}
