//! Constants shared by the strategies, the runner, and the binary.

/// Largest Fibonacci index whose value fits in a `u64`.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: usize = 93;

/// Sequence length past which the recursive strategy is reported as slow.
///
/// The recursive series recomputes every prefix, so its cost roughly
/// multiplies by the golden ratio with each extra element.
pub const SLOW_RECURSIVE_LEN: usize = 40;

/// Mode selector used when none is given on the command line.
pub const DEFAULT_MODE_SELECTOR: i64 = 3;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// Sequences produced by the strategies are 1-indexed, so position `i` of a
/// sequence holds `FIB_TABLE[i + 1]`.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error, including a missing sequence length.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Sweep cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
