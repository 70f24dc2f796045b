//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};

use fibbench_cli::output::format_duration;
use fibbench_cli::presenter::CliResultPresenter;
use fibbench_cli::progress::SweepProgressBar;
use fibbench_cli::ui;
use fibbench_core::progress::CancellationToken;
use fibbench_orchestration::runner::run_mode;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibbench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let len = config.sequence_length()?;

    if config.sweep {
        return run_sweep(config, len);
    }

    run_cli(config, len)
}

fn run_cli(config: &AppConfig, len: usize) -> Result<()> {
    let mode = config.mode();
    tracing::debug!(len, ?mode, "single run");

    let stdout = std::io::stdout();
    let mut presenter = CliResultPresenter::new(stdout.lock());
    run_mode(mode, len, config.print_requested(), &mut presenter);
    presenter.flush();
    Ok(())
}

fn run_sweep(config: &AppConfig, max_len: usize) -> Result<()> {
    let sweep = config.sweep_config(max_len)?;
    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone())?;

    let progress = SweepProgressBar::new(sweep.row_count());
    let started = Instant::now();
    let report = fibbench_orchestration::sweep::run_sweep(&sweep, &cancel, &progress)?;
    let files = report.write_csv(&config.out_dir, &config.out)?;

    if let Some(row) = report.rows.iter().find(|row| row.recursive.is_none()) {
        ui::print_warning(&format!(
            "recursive strategy dropped from N={} on (timeout {})",
            row.len, config.timeout
        ));
    }
    ui::print_success(&format!(
        "{} rows in {}: {} and {}",
        report.rows.len(),
        format_duration(started.elapsed()),
        files.ops.display(),
        files.timings.display()
    ));
    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("setting Ctrl+C handler")
}
