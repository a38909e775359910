//! Wall-clock timing for batched invocations.
//!
//! The [`Clock`] trait abstracts the time source so the engine can be driven
//! by a deterministic clock in tests (including one that never advances).
//! [`MonotonicClock`] is the production source, backed by `std::time::Instant`.

use std::fmt;
use std::hint::black_box as std_black_box;
use std::sync::Arc;
use std::time::Instant;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Every invocation of the algorithm under test goes through this so the
/// compiler cannot hoist or discard the call.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// A monotonic time source reporting milliseconds.
pub trait Clock: Send + Sync {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now_ms(&self) -> f64;

    /// Short name used in reports.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// `Instant`-backed clock.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1e3
    }

    fn name(&self) -> &'static str {
        "monotonic"
    }
}

/// Timer used by the measurement engine.
///
/// Cheap to clone; clones share the same clock.
#[derive(Clone)]
pub struct Timer {
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("clock", &self.clock.name())
            .finish()
    }
}

impl Timer {
    /// Create a timer backed by [`MonotonicClock`].
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }

    /// Create a timer backed by a custom clock.
    pub fn with_clock<C: Clock + 'static>(clock: C) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Name of the underlying clock.
    pub fn clock_name(&self) -> &'static str {
        self.clock.name()
    }

    /// Current reading of the underlying clock, in milliseconds.
    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Estimate the clock resolution in milliseconds.
    ///
    /// Takes the minimum non-zero difference between consecutive reads.
    /// Returns 0 if the clock never advanced during the probe.
    pub fn resolution_ms(&self) -> f64 {
        const PROBES: usize = 1000;

        let mut min_tick = f64::INFINITY;
        for _ in 0..PROBES {
            let t1 = self.now_ms();
            let t2 = self.now_ms();
            let diff = t2 - t1;
            if diff > 0.0 && diff < min_tick {
                min_tick = diff;
            }
        }

        if min_tick.is_finite() {
            min_tick
        } else {
            0.0
        }
    }

    /// Run `f` back-to-back `iterations` times and return the total elapsed
    /// milliseconds.
    ///
    /// Stops at the first error. Never returns a negative duration.
    #[inline]
    pub fn time_batch<T, E, F>(&self, iterations: usize, mut f: F) -> Result<f64, E>
    where
        F: FnMut() -> Result<T, E>,
    {
        let start = self.now_ms();
        for _ in 0..iterations {
            black_box(f()?);
        }
        let end = self.now_ms();
        Ok((end - start).max(0.0))
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
