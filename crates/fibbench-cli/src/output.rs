//! CLI output formatting.

use std::time::Duration;

use fibbench_core::algorithm::Algorithm;
use fibbench_core::harness::Measurement;
use fibbench_orchestration::sweep::MISSING;

/// Label printed before a single-mode run.
#[must_use]
pub fn mode_label(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Iterative => "iterative version",
        Algorithm::Recursive => "recursive version",
        Algorithm::Memoized => "dynamic programming version",
    }
}

/// Space-separated sequence, without a trailing newline.
#[must_use]
pub fn format_sequence(sequence: &[u64]) -> String {
    let mut out = String::with_capacity(sequence.len() * 4);
    for (i, value) in sequence.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&value.to_string());
    }
    out
}

/// `time: <seconds>(<ops>)` line of a single-mode run.
#[must_use]
pub fn format_time_line(measurement: &Measurement) -> String {
    format!("time: {}({})", measurement.format_seconds(), measurement.ops)
}

/// Combined-mode line: `seconds,ops` per slot, `-,-` for empty slots.
#[must_use]
pub fn format_csv_line(slots: &[Option<Measurement>]) -> String {
    slots
        .iter()
        .map(|slot| match slot {
            Some(m) => format!("{},{}", m.format_seconds(), m.ops),
            None => format!("{MISSING},{MISSING}"),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}
