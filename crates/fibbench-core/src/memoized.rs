//! Memoized (dynamic programming) Fibonacci generator.
//!
//! The memo table lives for one `generate` call and is shared across the
//! whole series, so each index is computed at most once. Slots hold `None`
//! until computed; every valid value is at least 1.

use crate::counter::OpCounter;
use crate::generator::{try_with_capacity, SequenceGenerator};

/// Compute F(n), consulting and filling `memo`.
///
/// Memo hits are free; a miss counts one operation.
///
/// # Panics
///
/// Panics if `n >= memo.len()` and `n > 2`.
pub fn fib_memoized(n: usize, memo: &mut [Option<u64>], ops: &mut OpCounter) -> u64 {
    if n <= 2 {
        return 1;
    }
    if let Some(value) = memo[n] {
        return value;
    }
    ops.increment();
    let value = fib_memoized(n - 1, memo, ops).wrapping_add(fib_memoized(n - 2, memo, ops));
    memo[n] = Some(value);
    value
}

/// Generator backed by a per-call memo table of `len + 1` slots.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoizedGenerator;

impl MemoizedGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SequenceGenerator for MemoizedGenerator {
    fn generate(&self, len: usize, ops: &mut OpCounter) -> Option<Vec<u64>> {
        if len == 0 {
            return None;
        }

        let mut series: Vec<u64> = try_with_capacity(len)?;
        let slots = len.checked_add(1)?;
        let mut memo: Vec<Option<u64>> = try_with_capacity(slots)?;
        memo.resize(slots, None);

        for n in 1..=len {
            series.push(fib_memoized(n, &mut memo, ops));
        }

        Some(series)
    }

    fn name(&self) -> &'static str {
        "Memoized"
    }
}
