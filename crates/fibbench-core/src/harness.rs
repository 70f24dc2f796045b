//! Timing harness shared by every strategy.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::counter::OpCounter;
use crate::generator::SequenceGenerator;

/// Elapsed time and operation count of one timed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurement {
    /// Monotonic wall-clock duration of the generator call.
    pub elapsed: Duration,
    /// Counter value when the generator returned.
    pub ops: u64,
}

impl Measurement {
    /// Elapsed time as fractional seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Seconds with six decimals, e.g. `0.000012`.
    #[must_use]
    pub fn format_seconds(&self) -> String {
        format!("{:.6}", self.seconds())
    }
}

/// Time one call of `generator` for `len` elements.
///
/// Resets `ops`, runs the generator between two [`Instant`] readings, then
/// hands a non-empty sequence to `on_sequence` once the clock has stopped.
/// The sequence buffer is dropped before returning. `ops` keeps the final
/// count, which is also copied into the returned [`Measurement`].
pub fn time_series(
    generator: &dyn SequenceGenerator,
    len: usize,
    ops: &mut OpCounter,
    on_sequence: Option<&mut dyn FnMut(&[u64])>,
) -> Measurement {
    ops.reset();

    let start = Instant::now();
    // Unprinted sequences must still be computed.
    let series = black_box(generator.generate(len, ops));
    let elapsed = start.elapsed();

    if let (Some(emit), Some(series)) = (on_sequence, series.as_deref()) {
        if !series.is_empty() {
            emit(series);
        }
    }

    let measurement = Measurement {
        elapsed,
        ops: ops.read(),
    };
    tracing::debug!(
        generator = generator.name(),
        len,
        ops = measurement.ops,
        elapsed_ns = measurement.elapsed.as_nanos(),
        "timed run complete"
    );
    measurement
}
