//! Error types for measurement and classification.

use std::fmt;

use thiserror::Error;

/// Boxed error raised by an algorithm under test.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the oracle.
///
/// All variants are terminal for the operation that produced them: the
/// measurement engine never retries a failing algorithm and the classifier
/// never guesses on insufficient data.
#[derive(Debug, Error)]
pub enum Error {
    /// A requested input size was negative or could not be parsed.
    #[error("invalid input size `{input}`: {reason}")]
    InvalidSize {
        /// The offending input as given.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The algorithm under test failed (returned an error or panicked).
    #[error("algorithm failed during {phase} at n = {n}")]
    AlgorithmExecution {
        /// Input size being processed when the failure happened.
        n: usize,
        /// Measurement phase in which the failure happened.
        phase: Phase,
        /// The original failure.
        #[source]
        source: BoxError,
    },

    /// Fewer data points than the classifier needs.
    #[error("at least {required} data points are required, got {actual}")]
    InsufficientData {
        /// Minimum number of points.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },
}

impl Error {
    pub(crate) fn invalid_size(input: impl fmt::Display, reason: impl Into<String>) -> Self {
        Error::InvalidSize {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Phase of a measurement sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Untimed warm-up invocations on the smallest size.
    Warmup,
    /// Invocation-count calibration for one size.
    Calibration,
    /// Timed batches for one size.
    TimedBatch,
    /// Optional repeatability check run before a sweep.
    Validation,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Warmup => "warm-up",
            Phase::Calibration => "calibration",
            Phase::TimedBatch => "timed batch",
            Phase::Validation => "validation",
        };
        f.write_str(name)
    }
}

/// A panic raised by the algorithm under test, captured as an error.
#[derive(Debug, Error)]
#[error("algorithm panicked: {message}")]
pub struct PanicError {
    /// Panic payload rendered as text.
    pub message: String,
}

impl PanicError {
    pub(crate) fn from_payload(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self { message }
    }
}
