//! Error reporting and exit codes.

use clap::CommandFactory;

use fibbench_cli::ui;
use fibbench_core::constants::exit_codes;
use fibbench_core::error::BenchError;

use crate::config::AppConfig;

/// Map an application error to a process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<BenchError>() {
        Some(BenchError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(BenchError::Cancelled) => exit_codes::ERROR_CANCELED,
        Some(BenchError::MissingLength | BenchError::Io(_)) | None => exit_codes::ERROR_GENERIC,
    }
}

/// Report an error to the user.
///
/// A missing length prints the usage text on stdout; everything else is a
/// styled line on stderr.
pub fn report(err: &anyhow::Error) {
    if let Some(BenchError::MissingLength) = err.downcast_ref::<BenchError>() {
        println!("{err}");
        println!("{}", AppConfig::command().render_help());
    } else {
        ui::print_error(&format!("{err:#}"));
    }
}
