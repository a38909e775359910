//! Main `ComplexityOracle` entry point and builder.

use std::time::Instant;

use tracing::{info, warn};

use crate::analysis::classify;
use crate::config::{Aggregation, Config};
use crate::error::{BoxError, Result};
use crate::input::{InputGenerator, Sequential};
use crate::measurement::{check_repeatability, Clock, Measurer, RepeatabilityWarning, Timer};
use crate::result::{Metadata, Report};

/// Main entry point for complexity analysis.
///
/// Use the builder pattern to configure a sweep, then call
/// [`analyze`](Self::analyze) with the algorithm and the sizes to measure.
///
/// # Example
///
/// ```ignore
/// use complexity_oracle::{Aggregation, ComplexityOracle};
///
/// let report = ComplexityOracle::new()
///     .repetitions(20)
///     .aggregation(Aggregation::Median)
///     .analyze(|data: &[u64]| data.iter().sum::<u64>(), &[1_000, 2_000, 4_000, 8_000])?;
///
/// println!("{} ({}% confidence)", report.analysis.best_fit, report.analysis.confidence);
/// ```
///
/// # Workloads
///
/// By default each workload is `0..n` as `u64` ([`Sequential`]). Swap in
/// another [`InputGenerator`] with [`generator`](Self::generator); the
/// algorithm's argument type follows the generator's `Item`.
#[derive(Debug, Clone)]
pub struct ComplexityOracle<G = Sequential> {
    config: Config,
    timer: Timer,
    generator: G,
}

impl Default for ComplexityOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityOracle {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            timer: Timer::new(),
            generator: Sequential,
        }
    }

    /// Create with a fast configuration for smoke tests and exploration.
    ///
    /// Settings:
    /// - 3 timed batches per size (vs 10 default)
    /// - 1 ms calibration threshold (vs 5 ms default)
    /// - 3 ms target batch time (vs 15 ms default)
    pub fn quick() -> Self {
        Self {
            config: Config {
                repetitions: 3,
                calibration_threshold_ms: 1.0,
                target_batch_ms: 3.0,
                ..Config::default()
            },
            ..Self::new()
        }
    }
}

impl<G: InputGenerator + Clone> ComplexityOracle<G> {
    /// Replace the whole configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set warm-up invocations (raised to the minimum of 50).
    pub fn warmup(mut self, n: usize) -> Self {
        self.config.warmup = n;
        self
    }

    /// Set timed batches per size.
    pub fn repetitions(mut self, n: usize) -> Self {
        self.config.repetitions = n;
        self
    }

    /// Set how per-batch samples are aggregated.
    pub fn aggregation(mut self, aggregation: Aggregation) -> Self {
        self.config.aggregation = aggregation;
        self
    }

    /// Set the calibration threshold (milliseconds).
    pub fn calibration_threshold_ms(mut self, ms: f64) -> Self {
        self.config.calibration_threshold_ms = ms;
        self
    }

    /// Set the target duration of one timed batch (milliseconds).
    pub fn target_batch_ms(mut self, ms: f64) -> Self {
        self.config.target_batch_ms = ms;
        self
    }

    /// Set the safety cap on calibration invocations.
    pub fn max_calibration_iterations(mut self, n: usize) -> Self {
        self.config.max_calibration_iterations = n;
        self
    }

    /// Measure with a custom clock.
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.timer = Timer::with_clock(clock);
        self
    }

    /// Measure with an existing timer.
    pub fn timer(mut self, timer: Timer) -> Self {
        self.timer = timer;
        self
    }

    /// Generate workloads with a different generator.
    pub fn generator<H: InputGenerator + Clone>(self, generator: H) -> ComplexityOracle<H> {
        ComplexityOracle {
            config: self.config,
            timer: self.timer,
            generator,
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Measure `algorithm` at every size and classify its growth.
    ///
    /// # How It Works
    ///
    /// 1. Warms up on the smallest size
    /// 2. Calibrates a batch size per input size, then times repeated batches
    /// 3. Fits the five growth models and picks the simplest adequate one
    ///
    /// # Errors
    ///
    /// - [`Error::AlgorithmExecution`](crate::Error::AlgorithmExecution) if
    ///   the algorithm panics
    /// - [`Error::InsufficientData`](crate::Error::InsufficientData) if fewer
    ///   than two sizes are given
    pub fn analyze<F, R>(&self, mut algorithm: F, sizes: &[usize]) -> Result<Report>
    where
        F: FnMut(&[G::Item]) -> R,
    {
        self.try_analyze(
            |input| Ok::<_, std::convert::Infallible>(algorithm(input)),
            sizes,
        )
    }

    /// Like [`analyze`](Self::analyze), for algorithms that can fail.
    ///
    /// The first `Err` aborts the run with `Error::AlgorithmExecution`.
    pub fn try_analyze<F, R, E>(&self, algorithm: F, sizes: &[usize]) -> Result<Report>
    where
        F: FnMut(&[G::Item]) -> std::result::Result<R, E>,
        E: Into<BoxError>,
    {
        let start_time = Instant::now();

        let measurer = Measurer::new(self.config.clone(), self.timer.clone(), self.generator.clone());
        let sweep = measurer.try_measure(algorithm, sizes)?;
        let analysis = classify(&sweep.points)?;

        if analysis.is_low_confidence() {
            warn!(
                best_fit = %analysis.best_fit,
                confidence = analysis.confidence,
                "low confidence verdict; consider larger or more widely spread sizes"
            );
        }

        let metadata = Metadata {
            clock: self.timer.clock_name().to_string(),
            timer_resolution_ms: self.timer.resolution_ms(),
            warmup_iterations: self.config.effective_warmup(),
            repetitions: self.config.effective_repetitions(),
            aggregation: self.config.aggregation,
            batches: sweep.batches,
            runtime_secs: start_time.elapsed().as_secs_f64(),
        };

        info!(
            sizes = sizes.len(),
            best_fit = %analysis.best_fit,
            confidence = analysis.confidence,
            runtime_secs = metadata.runtime_secs,
            "analysis complete"
        );

        Ok(Report {
            points: sweep.points,
            analysis,
            metadata,
        })
    }

    /// Check that `algorithm` returns the same output across repeated calls,
    /// using this oracle's generator.
    pub fn check_repeatability<F, R>(
        &self,
        algorithm: F,
        sizes: &[usize],
    ) -> Result<Vec<RepeatabilityWarning>>
    where
        F: FnMut(&[G::Item]) -> R,
        R: PartialEq,
    {
        check_repeatability(&self.generator, algorithm, sizes)
    }
}
