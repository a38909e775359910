//! Adaptive measurement of per-call duration across input sizes.
//!
//! For every requested size the engine:
//! 1. Calibrates how many calls fit in `calibration_threshold_ms` on one workload
//! 2. Scales that to a batch size targeting `target_batch_ms` per batch
//! 3. Times `repetitions` batches, each on a fresh workload
//! 4. Aggregates the per-call samples with the configured policy
//!
//! A single warm-up pass on the smallest size precedes all of this, so that
//! one-time costs (cache population, lazy initialization) do not inflate the
//! first measurements.
//!
//! # Caller Contract
//!
//! The algorithm receives the workload by shared reference and is called
//! many times on the same instance during calibration and within a batch.
//! It must behave the same way on every call: interior mutability that
//! changes its own later behavior (memoization keyed on the workload, for
//! instance) invalidates calibration. The engine does not detect this; see
//! [`check_repeatability`](super::check_repeatability) for an opt-in check.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{BoxError, Error, PanicError, Phase, Result};
use crate::input::InputGenerator;
use crate::result::BatchInfo;
use crate::types::DataPoint;

use super::timer::{black_box, Timer};

/// Output of one sweep.
#[derive(Debug, Clone)]
pub struct Sweep {
    /// One point per requested size, in request order.
    pub points: Vec<DataPoint>,
    /// How each size was measured, parallel to `points`.
    pub batches: Vec<BatchInfo>,
}

/// Outcome of the calibration phase for one size.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Calibration {
    iterations: usize,
    elapsed_ms: f64,
}

/// Runs measurement sweeps for one configuration, timer and generator.
#[derive(Debug, Clone)]
pub struct Measurer<G> {
    config: Config,
    timer: Timer,
    generator: G,
}

impl<G: InputGenerator> Measurer<G> {
    /// Create a measurer.
    pub fn new(config: Config, timer: Timer, generator: G) -> Self {
        Self {
            config,
            timer,
            generator,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Measure an infallible algorithm.
    ///
    /// Panics raised by the algorithm are caught and reported as
    /// [`Error::AlgorithmExecution`].
    pub fn measure<F, R>(&self, mut algorithm: F, sizes: &[usize]) -> Result<Sweep>
    where
        F: FnMut(&[G::Item]) -> R,
    {
        self.try_measure(
            |input| Ok::<_, std::convert::Infallible>(algorithm(input)),
            sizes,
        )
    }

    /// Measure a fallible algorithm.
    ///
    /// The first `Err` (or panic) aborts the sweep; no partial results are
    /// returned.
    pub fn try_measure<F, R, E>(&self, mut algorithm: F, sizes: &[usize]) -> Result<Sweep>
    where
        F: FnMut(&[G::Item]) -> std::result::Result<R, E>,
        E: Into<BoxError>,
    {
        let mut points = Vec::with_capacity(sizes.len());
        let mut batches = Vec::with_capacity(sizes.len());

        let Some(&smallest) = sizes.iter().min() else {
            return Ok(Sweep { points, batches });
        };
        self.warmup(&mut algorithm, smallest)?;

        for &n in sizes {
            let (point, info) = self.measure_size(&mut algorithm, n)?;
            points.push(point);
            batches.push(info);
        }

        Ok(Sweep { points, batches })
    }

    fn warmup<F, R, E>(&self, algorithm: &mut F, n: usize) -> Result<()>
    where
        F: FnMut(&[G::Item]) -> std::result::Result<R, E>,
        E: Into<BoxError>,
    {
        let iterations = self.config.effective_warmup();
        let workload = self.generator.generate(n);
        debug!(n, iterations, "warming up");

        guarded(n, Phase::Warmup, || {
            for _ in 0..iterations {
                black_box(algorithm(&workload).map_err(Into::<BoxError>::into)?);
            }
            Ok(())
        })
    }

    fn measure_size<F, R, E>(&self, algorithm: &mut F, n: usize) -> Result<(DataPoint, BatchInfo)>
    where
        F: FnMut(&[G::Item]) -> std::result::Result<R, E>,
        E: Into<BoxError>,
    {
        let calibration = self.calibrate(algorithm, n)?;
        let capped = calibration.elapsed_ms < self.config.calibration_threshold_ms;
        if capped {
            warn!(
                n,
                iterations = calibration.iterations,
                elapsed_ms = calibration.elapsed_ms,
                "calibration cap reached before the time threshold; treat this point as low confidence"
            );
        }

        let batch_size = self.batch_size(&calibration);
        let repetitions = self.config.effective_repetitions();
        debug!(
            n,
            calibration_iterations = calibration.iterations,
            calibration_ms = calibration.elapsed_ms,
            batch_size,
            repetitions,
            "calibrated"
        );

        let mut samples = Vec::with_capacity(repetitions);
        for _ in 0..repetitions {
            let workload = self.generator.generate(n);
            let elapsed = guarded(n, Phase::TimedBatch, || {
                self.timer
                    .time_batch(batch_size, || algorithm(&workload).map_err(Into::<BoxError>::into))
            })?;
            samples.push(elapsed / batch_size as f64);
        }

        let duration = self
            .config
            .aggregation
            .aggregate(&samples)
            .unwrap_or(0.0)
            .max(0.0);
        debug!(n, duration_ms = duration, "measured");

        let info = BatchInfo {
            n,
            calibration_iterations: calibration.iterations,
            calibration_ms: calibration.elapsed_ms,
            batch_size,
            capped,
        };
        Ok((DataPoint::new(n, duration), info))
    }

    /// Call the algorithm on one workload until the time threshold or the
    /// iteration cap is reached.
    fn calibrate<F, R, E>(&self, algorithm: &mut F, n: usize) -> Result<Calibration>
    where
        F: FnMut(&[G::Item]) -> std::result::Result<R, E>,
        E: Into<BoxError>,
    {
        let cap = self.config.effective_calibration_cap();
        let threshold = self.config.calibration_threshold_ms;
        let workload = self.generator.generate(n);

        guarded(n, Phase::Calibration, || {
            let start = self.timer.now_ms();
            let mut iterations = 0usize;
            let mut elapsed_ms = 0.0_f64;

            while iterations < cap {
                black_box(algorithm(&workload).map_err(Into::<BoxError>::into)?);
                iterations += 1;
                elapsed_ms = self.timer.now_ms() - start;
                if elapsed_ms >= threshold {
                    break;
                }
            }

            Ok(Calibration {
                iterations,
                elapsed_ms: elapsed_ms.max(0.0),
            })
        })
    }

    /// Calls per timed batch, scaled from the calibration's time per call.
    fn batch_size(&self, calibration: &Calibration) -> usize {
        let cap = self.config.effective_calibration_cap();

        if calibration.iterations <= 1 {
            return 1;
        }
        // Clock never advanced: the best estimate is the calibration count itself.
        if calibration.elapsed_ms <= 0.0 {
            return calibration.iterations.min(cap);
        }

        let per_call_ms = calibration.elapsed_ms / calibration.iterations as f64;
        let size = (self.config.target_batch_ms / per_call_ms).ceil();
        if !size.is_finite() || size >= cap as f64 {
            return cap;
        }
        (size as usize).max(1)
    }
}

/// Run `body`, converting both errors and panics into
/// [`Error::AlgorithmExecution`].
pub(crate) fn guarded<T, F>(n: usize, phase: Phase, body: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, BoxError>,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(Error::AlgorithmExecution { n, phase, source }),
        Err(payload) => Err(Error::AlgorithmExecution {
            n,
            phase,
            source: Box::new(PanicError::from_payload(payload)),
        }),
    }
}
