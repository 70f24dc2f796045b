//! Sweep progress bar.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use fibbench_orchestration::interfaces::ProgressReporter;
use fibbench_orchestration::sweep::SweepRow;

const TEMPLATE: &str = "{spinner:.blue} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}";

/// Progress reporter that draws an `indicatif` bar on stderr.
pub struct SweepProgressBar {
    bar: ProgressBar,
}

impl SweepProgressBar {
    /// Create a bar for `total` rows.
    #[must_use]
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }

    /// Create a bar that never draws.
    #[must_use]
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden());
        Self { bar }
    }

    /// Rows reported so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProgressReporter for SweepProgressBar {
    fn report(&self, row: &SweepRow, completed: usize, _total: usize) {
        self.bar.set_position(completed as u64);
        let message = if row.recursive.is_some() {
            format!("N={}", row.len)
        } else {
            format!("N={} (recursive skipped)", row.len)
        };
        self.bar.set_message(message);
    }

    fn complete(&self) {
        self.bar.finish_and_clear();
    }
}
