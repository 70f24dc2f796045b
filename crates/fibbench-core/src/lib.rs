//! # fibbench-core
//!
//! Fibonacci sequence strategies for the fibbench micro-benchmark:
//! iterative, naive recursive, and memoized. Each strategy counts its
//! recurrence additions in an explicit [`OpCounter`], and the
//! [`harness`] times a run on a monotonic clock.

pub mod algorithm;
pub mod constants;
pub mod counter;
pub mod error;
pub mod generator;
pub mod harness;
pub mod iterative;
pub mod memoized;
pub mod progress;
pub mod recursive;

// Re-exports
pub use algorithm::Algorithm;
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64, SLOW_RECURSIVE_LEN};
pub use counter::OpCounter;
pub use error::BenchError;
pub use generator::SequenceGenerator;
pub use harness::{time_series, Measurement};
pub use progress::{CancellationToken, TimeoutCancellationToken};

/// The first `len` Fibonacci numbers, computed iteratively.
///
/// This is a convenience function for simple use cases. Use a
/// [`SequenceGenerator`] directly to observe the operation count.
///
/// # Example
/// ```
/// assert_eq!(fibbench_core::sequence(5), vec![1, 1, 2, 3, 5]);
/// assert!(fibbench_core::sequence(0).is_empty());
/// ```
#[must_use]
pub fn sequence(len: usize) -> Vec<u64> {
    let mut ops = OpCounter::new();
    Algorithm::Iterative.generate(len, &mut ops).unwrap_or_default()
}
