//! CLI result presenter.

use std::fmt;
use std::io::Write;

use fibbench_core::algorithm::Algorithm;
use fibbench_core::harness::Measurement;
use fibbench_orchestration::interfaces::ResultPresenter;

use crate::output::{format_csv_line, format_sequence, format_time_line, mode_label};

/// Presenter that writes plain-text results to any writer.
///
/// Write failures are not reported to the caller; they are logged at debug
/// level and the run carries on.
pub struct CliResultPresenter<W: Write> {
    out: W,
}

impl<W: Write> CliResultPresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) {
        if let Err(err) = self.out.flush() {
            tracing::debug!(%err, "flushing output failed");
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{args}") {
            tracing::debug!(%err, "writing output failed");
        }
    }
}

impl<W: Write> ResultPresenter for CliResultPresenter<W> {
    fn present_label(&mut self, algorithm: Algorithm) {
        self.line(format_args!("{}", mode_label(algorithm)));
    }

    fn present_sequence(&mut self, sequence: &[u64]) {
        self.line(format_args!("{}", format_sequence(sequence)));
    }

    fn present_measurement(&mut self, measurement: &Measurement) {
        self.line(format_args!("{}", format_time_line(measurement)));
    }

    fn present_csv(&mut self, slots: &[Option<Measurement>]) {
        self.line(format_args!("{}", format_csv_line(slots)));
    }
}
