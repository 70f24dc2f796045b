//! fibbench: Fibonacci strategy micro-benchmark.

use std::process::ExitCode;

use fibbench_lib::{app, config, errors};

fn main() -> ExitCode {
    // Parse CLI args
    let config = config::AppConfig::parse();

    // Initialize tracing on stderr, stdout is reserved for results
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            errors::report(&err);
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
