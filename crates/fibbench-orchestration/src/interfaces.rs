//! Orchestration interfaces.

use fibbench_core::algorithm::Algorithm;
use fibbench_core::harness::Measurement;

use crate::sweep::SweepRow;

/// Trait for presenting run results to the user.
///
/// Single modes call `present_label`, then `present_sequence` when printing
/// was requested, then `present_measurement`. Combined modes make one
/// `present_csv` call.
pub trait ResultPresenter {
    /// Announce which strategy is about to run.
    fn present_label(&mut self, algorithm: Algorithm);

    /// Present a generated sequence.
    fn present_sequence(&mut self, sequence: &[u64]);

    /// Present the timing of a single-mode run.
    fn present_measurement(&mut self, measurement: &Measurement);

    /// Present a combined-mode line. Slots follow
    /// [`CSV_COLUMNS`](crate::mode::CSV_COLUMNS); `None` marks a strategy
    /// that did not run.
    fn present_csv(&mut self, slots: &[Option<Measurement>]);
}

/// Trait for reporting sweep progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// Report a finished row.
    fn report(&self, row: &SweepRow, completed: usize, total: usize);

    /// Report completion.
    fn complete(&self);
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn report(&self, _row: &SweepRow, _completed: usize, _total: usize) {}
    fn complete(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_reporter() {
        let reporter = NullProgressReporter;
        let row = SweepRow {
            len: 1,
            iterative: Measurement::default(),
            memoized: Measurement::default(),
            recursive: None,
        };
        reporter.report(&row, 1, 1);
        reporter.complete();
    }
}
