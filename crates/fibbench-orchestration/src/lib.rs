//! # fibbench-orchestration
//!
//! Mode dispatch, sequential benchmark runs, and batch sweeps.

pub mod interfaces;
pub mod mode;
pub mod runner;
pub mod sweep;

pub use interfaces::{ProgressReporter, ResultPresenter};
pub use mode::BenchMode;
pub use runner::{measure, run_mode};
pub use sweep::{run_sweep, SweepConfig, SweepReport, SweepRow};
