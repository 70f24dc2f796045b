//! Sequence generator trait.

use crate::counter::OpCounter;

/// Trait for generating the first `len` Fibonacci numbers.
///
/// Position `i` of the returned sequence holds F(i+1), with F(1) = F(2) = 1.
/// Implementations return `None` for `len == 0` and when the output buffer
/// cannot be allocated; callers treat both as "nothing to report".
pub trait SequenceGenerator: Send + Sync {
    /// Generate the sequence, counting recurrence additions in `ops`.
    fn generate(&self, len: usize, ops: &mut OpCounter) -> Option<Vec<u64>>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// Allocate an empty buffer able to hold `len` items without reallocating.
///
/// Returns `None` if the allocator refuses the request.
pub(crate) fn try_with_capacity<T>(len: usize) -> Option<Vec<T>> {
    let mut buf = Vec::new();
    if let Err(err) = buf.try_reserve_exact(len) {
        tracing::debug!(len, %err, "sequence buffer allocation failed");
        return None;
    }
    Some(buf)
}
