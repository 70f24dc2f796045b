//! Error type for the benchmark tool.
//!
//! Computation itself never fails: an allocation failure surfaces as an
//! absent sequence. These variants cover the surfaces around it.

/// Errors raised by configuration, sweeps, and report output.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// No sequence length was supplied on the command line.
    #[error("at least two arguments needed!")]
    MissingLength,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A sweep was cancelled before it finished.
    #[error("sweep cancelled")]
    Cancelled,

    /// Writing a report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
