//! Operation counter.
//!
//! Each strategy bumps the counter once per recurrence addition it performs.
//! The count is a proxy for algorithmic work that does not depend on clock
//! noise. A counter belongs to one run; callers thread it through by `&mut`.

/// Count of recurrence additions performed during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpCounter {
    count: u64,
}

impl OpCounter {
    /// Create a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Set the count back to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Record one recurrence step.
    #[inline]
    pub fn increment(&mut self) {
        self.count = self.count.wrapping_add(1);
    }

    /// Current count.
    #[must_use]
    pub fn read(&self) -> u64 {
        self.count
    }
}
