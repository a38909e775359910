//! Opt-in repeatability check for the algorithm under test.
//!
//! Calibration and batching reuse one workload instance for many calls,
//! which is only valid if the algorithm returns the same thing every time.
//! This check samples a few sizes and compares outputs. Mismatches are
//! reported as warnings rather than errors: some legitimate algorithms
//! (caches, order-sensitive accumulators) differ between calls but still
//! time consistently.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Phase, Result};
use crate::input::InputGenerator;

use super::engine::guarded;
use super::timer::black_box;

/// A repeatability violation observed for one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatabilityWarning {
    /// Two calls on the same workload returned different outputs.
    RepeatedCallDiffers {
        /// Size of the workload.
        n: usize,
    },
    /// Calls on two freshly generated workloads returned different outputs.
    FreshWorkloadDiffers {
        /// Size of the workload.
        n: usize,
    },
}

impl fmt::Display for RepeatabilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatabilityWarning::RepeatedCallDiffers { n } => write!(
                f,
                "repeated calls on the same workload (n = {}) returned different outputs; \
                 calibration assumes the algorithm is idempotent",
                n
            ),
            RepeatabilityWarning::FreshWorkloadDiffers { n } => write!(
                f,
                "calls on two fresh workloads (n = {}) returned different outputs; \
                 the algorithm or generator is not deterministic",
                n
            ),
        }
    }
}

/// Check that `algorithm` produces the same output across repeated calls.
///
/// For each size: calls twice on one workload, then once on a fresh one.
/// Panics in the algorithm surface as `Error::AlgorithmExecution` with
/// [`Phase::Validation`].
pub fn check_repeatability<G, F, R>(
    generator: &G,
    mut algorithm: F,
    sizes: &[usize],
) -> Result<Vec<RepeatabilityWarning>>
where
    G: InputGenerator,
    F: FnMut(&[G::Item]) -> R,
    R: PartialEq,
{
    let mut warnings = Vec::new();

    for &n in sizes {
        let workload = generator.generate(n);
        let fresh = generator.generate(n);

        let (first, second, third) = guarded(n, Phase::Validation, || {
            let first = black_box(algorithm(&workload));
            let second = black_box(algorithm(&workload));
            let third = black_box(algorithm(&fresh));
            Ok((first, second, third))
        })?;

        if first != second {
            warnings.push(RepeatabilityWarning::RepeatedCallDiffers { n });
        } else if first != third {
            warnings.push(RepeatabilityWarning::FreshWorkloadDiffers { n });
        }
    }

    for warning in &warnings {
        warn!("{}", warning);
    }
    Ok(warnings)
}
