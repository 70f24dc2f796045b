//! Naive recursive Fibonacci generator.
//!
//! Every element of the series is computed from scratch, so the total work is
//! the sum of the exponential call trees of each prefix length. That blow-up
//! is what this strategy exists to show; nothing is shared between calls.

use crate::counter::OpCounter;
use crate::generator::{try_with_capacity, SequenceGenerator};
use crate::progress::TimeoutCancellationToken;

/// Recursive calls between two polls of a stop token.
pub const STOP_CHECK_INTERVAL: u64 = 1 << 14;

/// Compute F(n) by plain double recursion.
///
/// Counts one operation per non-trivial call, i.e. F(n) - 1 operations for
/// n >= 2.
pub fn fib_recursive(n: usize, ops: &mut OpCounter) -> u64 {
    if n <= 2 {
        return 1;
    }
    ops.increment();
    fib_recursive(n - 1, ops).wrapping_add(fib_recursive(n - 2, ops))
}

/// [`fib_recursive`] that gives up once `stop` is cancelled or expired.
///
/// `stop` is polled every [`STOP_CHECK_INTERVAL`] operations, so an
/// abandoned run overshoots its deadline by at most that many calls.
/// Returns `None` when abandoned.
pub fn fib_recursive_bounded(
    n: usize,
    ops: &mut OpCounter,
    stop: &TimeoutCancellationToken,
) -> Option<u64> {
    if n <= 2 {
        return Some(1);
    }
    ops.increment();
    if ops.read() % STOP_CHECK_INTERVAL == 0 && stop.is_cancelled() {
        return None;
    }
    let a = fib_recursive_bounded(n - 1, ops, stop)?;
    let b = fib_recursive_bounded(n - 2, ops, stop)?;
    Some(a.wrapping_add(b))
}

/// Generator that calls [`fib_recursive`] afresh for every position.
///
/// A bounded generator uses [`fib_recursive_bounded`] instead and yields
/// `None` if its token stops the run part way.
#[derive(Debug, Default, Clone)]
pub struct RecursiveGenerator {
    stop: Option<TimeoutCancellationToken>,
}

impl RecursiveGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self { stop: None }
    }

    /// Generator that abandons the series when `stop` fires.
    #[must_use]
    pub fn bounded(stop: TimeoutCancellationToken) -> Self {
        Self { stop: Some(stop) }
    }
}

impl SequenceGenerator for RecursiveGenerator {
    fn generate(&self, len: usize, ops: &mut OpCounter) -> Option<Vec<u64>> {
        if len == 0 {
            return None;
        }

        let mut series: Vec<u64> = try_with_capacity(len)?;
        match &self.stop {
            None => series.extend((1..=len).map(|n| fib_recursive(n, ops))),
            Some(stop) => {
                for n in 1..=len {
                    series.push(fib_recursive_bounded(n, ops, stop)?);
                }
            }
        }
        Some(series)
    }

    fn name(&self) -> &'static str {
        "Recursive"
    }
}
