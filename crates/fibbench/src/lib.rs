//! fibbench library: application logic for the Fibonacci micro-benchmark.

pub mod app;
pub mod config;
pub mod errors;
