//! Iterative Fibonacci sequence generator.

use crate::counter::OpCounter;
use crate::generator::{try_with_capacity, SequenceGenerator};

/// Bottom-up generator: each element is the sum of the two before it.
///
/// O(N) time and no state beyond the output buffer. This is the baseline
/// the other strategies are compared against.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeGenerator;

impl IterativeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SequenceGenerator for IterativeGenerator {
    fn generate(&self, len: usize, ops: &mut OpCounter) -> Option<Vec<u64>> {
        if len == 0 {
            return None;
        }

        let mut series: Vec<u64> = try_with_capacity(len)?;
        series.push(1);
        if len >= 2 {
            series.push(1);
        }

        // Seeds are free; only positions 3..=len count.
        for i in 2..len {
            ops.increment();
            let next = series[i - 1].wrapping_add(series[i - 2]);
            series.push(next);
        }

        Some(series)
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(len: usize) -> (Option<Vec<u64>>, u64) {
        let mut ops = OpCounter::new();
        let seq = IterativeGenerator::new().generate(len, &mut ops);
        (seq, ops.read())
    }

    #[test]
    fn generate_first_ten() {
        let (seq, ops) = run(10);
        assert_eq!(seq.unwrap(), vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
        assert_eq!(ops, 8);
    }

    #[test]
    fn zero_length_is_absent() {
        let (seq, ops) = run(0);
        assert!(seq.is_none());
        assert_eq!(ops, 0);
    }

    #[test]
    fn seeds_cost_nothing() {
        assert_eq!(run(1), (Some(vec![1]), 0));
        assert_eq!(run(2), (Some(vec![1, 1]), 0));
        assert_eq!(run(3), (Some(vec![1, 1, 2]), 1));
    }

    #[test]
    fn wraps_past_u64() {
        let (seq, _) = run(95);
        let seq = seq.unwrap();
        // seq[93] is F(94), the first value that overflows.
        assert_eq!(seq[93], seq[92].wrapping_add(seq[91]));
        assert!(seq[93] < seq[92]);
    }

    #[test]
    fn generator_name() {
        assert_eq!(IterativeGenerator.name(), "Iterative");
    }
}
