//! Sequential execution of a mode.

use fibbench_core::algorithm::Algorithm;
use fibbench_core::constants::{MAX_FIB_U64, SLOW_RECURSIVE_LEN};
use fibbench_core::counter::OpCounter;
use fibbench_core::harness::{time_series, Measurement};

use crate::interfaces::ResultPresenter;
use crate::mode::{BenchMode, CSV_COLUMNS};

/// Time each strategy in turn, without printing sequences.
///
/// Runs never overlap; each one starts from a reset counter.
pub fn measure(algorithms: &[Algorithm], len: usize) -> Vec<(Algorithm, Measurement)> {
    let mut ops = OpCounter::new();
    algorithms
        .iter()
        .map(|&algorithm| (algorithm, time_series(&algorithm, len, &mut ops, None)))
        .collect()
}

/// Run `mode` for sequences of `len` elements and present the results.
///
/// `print` only affects single modes. Returns every measurement taken, in
/// run order.
pub fn run_mode<P: ResultPresenter + ?Sized>(
    mode: BenchMode,
    len: usize,
    print: bool,
    presenter: &mut P,
) -> Vec<(Algorithm, Measurement)> {
    warn_about_length(mode.algorithms(), len);
    tracing::debug!(mode = mode.selector(), len, print, "running mode");

    if let Some(algorithm) = mode.single() {
        presenter.present_label(algorithm);
        let mut ops = OpCounter::new();
        let measurement = if print {
            let mut emit = |sequence: &[u64]| presenter.present_sequence(sequence);
            time_series(&algorithm, len, &mut ops, Some(&mut emit))
        } else {
            time_series(&algorithm, len, &mut ops, None)
        };
        presenter.present_measurement(&measurement);
        return vec![(algorithm, measurement)];
    }

    let runs = measure(mode.algorithms(), len);
    presenter.present_csv(&csv_slots(&runs));
    runs
}

/// Arrange measurements into [`CSV_COLUMNS`] order.
#[must_use]
pub fn csv_slots(runs: &[(Algorithm, Measurement)]) -> [Option<Measurement>; 3] {
    CSV_COLUMNS.map(|column| {
        runs.iter()
            .find(|(algorithm, _)| *algorithm == column)
            .map(|(_, measurement)| *measurement)
    })
}

fn warn_about_length(algorithms: &[Algorithm], len: usize) {
    if len > MAX_FIB_U64 {
        tracing::warn!(
            len,
            "values past F({MAX_FIB_U64}) exceed u64 and wrap around"
        );
    }
    if len > SLOW_RECURSIVE_LEN && algorithms.contains(&Algorithm::Recursive) {
        tracing::warn!(len, "recursive strategy grows exponentially; this may take a long time");
    }
}
