//! Batch sweep over increasing sequence lengths.
//!
//! Runs the combined mode for lengths `1, 1 + step, ...` up to a maximum and
//! collects one row per length. The recursive run of each row races a
//! deadline; once it is abandoned or ends past the timeout, that row and all
//! later ones measure only the iterative and memoized strategies. The
//! report is written as two CSV files, one for operation counts and one for
//! timings.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

use fibbench_core::algorithm::Algorithm;
use fibbench_core::counter::OpCounter;
use fibbench_core::error::BenchError;
use fibbench_core::harness::{time_series, Measurement};
use fibbench_core::progress::{CancellationToken, TimeoutCancellationToken};
use fibbench_core::recursive::RecursiveGenerator;

use crate::interfaces::ProgressReporter;
use crate::mode::BenchMode;
use crate::runner::{csv_slots, measure};

/// Header of both sweep CSV files.
pub const CSV_HEADER: &str = "N,Iterative,Dynamic Programming,Recursive";

/// Placeholder for a strategy that was not measured.
pub const MISSING: &str = "-";

/// Default per-run budget for the recursive strategy.
pub const DEFAULT_RECURSIVE_TIMEOUT: Duration = Duration::from_secs(60);

/// Sweep parameters.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Largest sequence length to measure.
    pub max_len: usize,
    /// Distance between consecutive lengths.
    pub step: usize,
    /// Deadline of each recursive run. Hitting it drops recursion from that
    /// row on.
    pub recursive_timeout: Duration,
}

impl SweepConfig {
    /// Sweep every length from 1 to `max_len`.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            step: 1,
            recursive_timeout: DEFAULT_RECURSIVE_TIMEOUT,
        }
    }

    /// Lengths visited by the sweep.
    pub fn lengths(&self) -> impl Iterator<Item = usize> {
        (1..=self.max_len).step_by(self.step.max(1))
    }

    /// Number of rows the sweep will produce.
    #[must_use]
    pub fn row_count(&self) -> usize {
        if self.max_len == 0 {
            0
        } else {
            (self.max_len - 1) / self.step.max(1) + 1
        }
    }
}

/// Measurements for one sequence length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRow {
    /// Sequence length.
    pub len: usize,
    /// Iterative strategy.
    pub iterative: Measurement,
    /// Memoized strategy.
    pub memoized: Measurement,
    /// Recursive strategy, absent once recursion has been dropped.
    pub recursive: Option<Measurement>,
}

impl SweepRow {
    fn from_runs(len: usize, runs: &[(Algorithm, Measurement)]) -> Self {
        let [iterative, memoized, recursive] = csv_slots(runs);
        Self {
            len,
            iterative: iterative.unwrap_or_default(),
            memoized: memoized.unwrap_or_default(),
            recursive,
        }
    }

    fn csv_line(&self, field: impl Fn(&Measurement) -> String) -> String {
        let recursive = self
            .recursive
            .as_ref()
            .map_or_else(|| MISSING.to_string(), &field);
        format!(
            "{},{},{},{}",
            self.len,
            field(&self.iterative),
            field(&self.memoized),
            recursive
        )
    }
}

/// Paths written by [`SweepReport::write_csv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepFiles {
    /// Operation counts.
    pub ops: PathBuf,
    /// Timings in seconds.
    pub timings: PathBuf,
}

/// Collected sweep rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub rows: Vec<SweepRow>,
}

impl SweepReport {
    /// Operation counts as CSV.
    #[must_use]
    pub fn ops_csv(&self) -> String {
        self.render(|m| m.ops.to_string())
    }

    /// Timings as CSV, in seconds with six decimals.
    #[must_use]
    pub fn timings_csv(&self) -> String {
        self.render(Measurement::format_seconds)
    }

    /// Write `ops_<base>` and `timings_<base>` into `dir`.
    pub fn write_csv(&self, dir: &Path, base: &str) -> Result<SweepFiles, BenchError> {
        let files = SweepFiles {
            ops: dir.join(format!("ops_{base}")),
            timings: dir.join(format!("timings_{base}")),
        };
        std::fs::write(&files.ops, self.ops_csv())?;
        std::fs::write(&files.timings, self.timings_csv())?;
        tracing::info!(
            ops = %files.ops.display(),
            timings = %files.timings.display(),
            rows = self.rows.len(),
            "sweep report written"
        );
        Ok(files)
    }

    fn render(&self, field: impl Fn(&Measurement) -> String) -> String {
        let mut out = String::with_capacity(CSV_HEADER.len() + 1 + self.rows.len() * 32);
        out.push_str(CSV_HEADER);
        out.push('\n');
        for row in &self.rows {
            let _ = writeln!(out, "{}", row.csv_line(&field));
        }
        out
    }
}

/// Run a sweep, checking `cancel` before each row and during recursive runs.
pub fn run_sweep(
    config: &SweepConfig,
    cancel: &CancellationToken,
    reporter: &dyn ProgressReporter,
) -> Result<SweepReport, BenchError> {
    if config.step == 0 {
        return Err(BenchError::Config("step must be at least 1".into()));
    }

    let total = config.row_count();
    let mut recursive_active = true;
    let mut report = SweepReport {
        rows: Vec::with_capacity(total),
    };

    for len in config.lengths() {
        cancel.check_cancelled()?;

        let runs = measure(BenchMode::IterativeMemoized.algorithms(), len);
        let mut row = SweepRow::from_runs(len, &runs);

        if recursive_active {
            row.recursive = measure_recursive(len, config.recursive_timeout, cancel)?;
            if row.recursive.is_none() {
                tracing::warn!(
                    len,
                    timeout_ms = config.recursive_timeout.as_millis(),
                    "recursive run hit the timeout; measuring iterative and memoized only from here on"
                );
                recursive_active = false;
            }
        }

        reporter.report(&row, report.rows.len() + 1, total);
        report.rows.push(row);
    }

    reporter.complete();
    Ok(report)
}

/// Time the recursive strategy against a deadline of `timeout`.
///
/// Yields `None` once the run ends past the deadline, whether it was
/// abandoned or finished late.
fn measure_recursive(
    len: usize,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<Option<Measurement>, BenchError> {
    let deadline = TimeoutCancellationToken::new(cancel.clone(), timeout);
    let generator = RecursiveGenerator::bounded(deadline.clone());
    let mut ops = OpCounter::new();
    let measurement = time_series(&generator, len, &mut ops, None);

    cancel.check_cancelled()?;
    if deadline.is_timed_out() {
        Ok(None)
    } else {
        Ok(Some(measurement))
    }
}
