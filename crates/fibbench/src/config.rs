//! Application configuration from CLI arguments and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use fibbench_core::constants::DEFAULT_MODE_SELECTOR;
use fibbench_core::error::BenchError;
use fibbench_orchestration::mode::BenchMode;
use fibbench_orchestration::sweep::SweepConfig;

/// fibbench: a Fibonacci strategy micro-benchmark.
///
/// Generates the series F(1)..F(N) and reports elapsed seconds together with
/// the number of recurrence additions each strategy performed.
#[derive(Parser, Debug)]
#[command(name = "fibbench", version, about)]
pub struct AppConfig {
    /// Number of Fibonacci values to generate (series 1..N).
    #[arg(value_name = "N", allow_hyphen_values = true)]
    pub n: Option<String>,

    /// 0=iterative, 1=recursive, 2=dynamic programming, 3=all (CSV),
    /// 4=iterative and dynamic programming (CSV). Anything else means 3.
    #[arg(value_name = "MODE", allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Any value prints the series in single-strategy modes.
    #[arg(value_name = "PRINT", allow_hyphen_values = true)]
    pub print: Option<String>,

    /// Further positionals are accepted and ignored.
    #[arg(value_name = "IGNORED", num_args = 0.., allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,

    /// Print the series in single-strategy modes.
    #[arg(short = 'p', long = "print")]
    pub print_flag: bool,

    /// Sweep every length from 1 to N and write CSV reports.
    #[arg(long)]
    pub sweep: bool,

    /// Distance between consecutive sweep lengths.
    #[arg(long, default_value_t = 1)]
    pub step: usize,

    /// Base file name of the sweep reports (ops_<OUT> and timings_<OUT>).
    #[arg(long, default_value = "fib_run.csv")]
    pub out: String,

    /// Directory the sweep reports are written to.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Deadline of each recursive run in a sweep; hitting it drops recursion
    /// from that row on (e.g. "500ms", "30s", "2m").
    #[arg(long, default_value = "60s", env = "FIBBENCH_TIMEOUT")]
    pub timeout: String,

    /// Verbose logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Requested sequence length. Non-numeric and negative input mean 0.
    pub fn sequence_length(&self) -> Result<usize, BenchError> {
        let n = self.n.as_deref().ok_or(BenchError::MissingLength)?;
        Ok(usize::try_from(parse_leading_int(n)).unwrap_or(0))
    }

    /// Selected mode, `All` when absent or unrecognised.
    #[must_use]
    pub fn mode(&self) -> BenchMode {
        let selector = self
            .mode
            .as_deref()
            .map_or(DEFAULT_MODE_SELECTOR, parse_leading_int);
        BenchMode::from_selector(selector)
    }

    /// Whether sequences should be printed.
    #[must_use]
    pub fn print_requested(&self) -> bool {
        self.print.is_some() || self.print_flag
    }

    /// Parse the timeout string into a Duration.
    pub fn timeout_duration(&self) -> Result<Duration, BenchError> {
        parse_duration(&self.timeout)
            .ok_or_else(|| BenchError::Config(format!("invalid timeout: {:?}", self.timeout)))
    }

    /// Sweep parameters for lengths up to `max_len`.
    pub fn sweep_config(&self, max_len: usize) -> Result<SweepConfig, BenchError> {
        if self.step == 0 {
            return Err(BenchError::Config("step must be at least 1".into()));
        }
        Ok(SweepConfig {
            max_len,
            step: self.step,
            recursive_timeout: self.timeout_duration()?,
        })
    }
}

/// Parse the leading integer of `s` the way C's `atoi` does.
///
/// Skips leading whitespace, accepts one optional sign, then reads digits up
/// to the first non-digit. No digits yields 0. Out-of-range values saturate.
#[must_use]
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(digit - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> AppConfig {
        let mut argv = vec!["fibbench"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn atoi_semantics() {
        assert_eq!(parse_leading_int("10"), 10);
        assert_eq!(parse_leading_int("  42"), 42);
        assert_eq!(parse_leading_int("+7"), 7);
        assert_eq!(parse_leading_int("-3"), -3);
        assert_eq!(parse_leading_int("12abc"), 12);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-"), 0);
        assert_eq!(parse_leading_int("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn positional_arguments() {
        let cfg = config(&["10", "2", "yes"]);
        assert_eq!(cfg.sequence_length().unwrap(), 10);
        assert_eq!(cfg.mode(), BenchMode::Memoized);
        assert!(cfg.print_requested());
    }

    #[test]
    fn defaults() {
        let cfg = config(&["5"]);
        assert_eq!(cfg.mode(), BenchMode::All);
        assert!(!cfg.print_requested());
        assert!(!cfg.sweep);
        assert_eq!(cfg.timeout_duration().unwrap(), Duration::from_secs(60));
    }

    #[test]
    fn missing_length() {
        let cfg = config(&[]);
        assert!(matches!(
            cfg.sequence_length(),
            Err(BenchError::MissingLength)
        ));
    }

    #[test]
    fn negative_and_garbage_lengths_are_zero() {
        assert_eq!(config(&["-5"]).sequence_length().unwrap(), 0);
        assert_eq!(config(&["abc"]).sequence_length().unwrap(), 0);
    }

    #[test]
    fn unknown_mode_is_all() {
        assert_eq!(config(&["5", "99"]).mode(), BenchMode::All);
        assert_eq!(config(&["5", "-1"]).mode(), BenchMode::All);
        // atoi("x") is 0.
        assert_eq!(config(&["5", "x"]).mode(), BenchMode::Iterative);
    }

    #[test]
    fn extra_positionals_are_ignored() {
        let cfg = config(&["10", "0", "p", "extra", "more"]);
        assert_eq!(cfg.sequence_length().unwrap(), 10);
        assert!(cfg.print_requested());
        assert_eq!(cfg.ignored, vec!["extra", "more"]);
    }

    #[test]
    fn hyphenated_positionals_are_values() {
        let cfg = config(&["10", "0", "-x"]);
        assert_eq!(cfg.print.as_deref(), Some("-x"));
        assert!(cfg.print_requested());

        let cfg = config(&["-abc"]);
        assert_eq!(cfg.sequence_length().unwrap(), 0);

        let cfg = config(&["7", "-2"]);
        assert_eq!(cfg.mode(), BenchMode::All);
    }

    #[test]
    fn known_flags_still_parse_after_positionals() {
        let cfg = config(&["10", "--sweep", "-v"]);
        assert!(cfg.sweep);
        assert!(cfg.verbose);
        assert!(cfg.mode.is_none());

        let cfg = config(&["10", "0", "p", "--step", "3"]);
        assert_eq!(cfg.step, 3);
    }

    #[test]
    fn print_flag() {
        assert!(config(&["5", "0", "--print"]).print_requested());
        assert!(config(&["5", "0", "-p"]).print_requested());
    }

    #[test]
    fn sweep_config() {
        let cfg = config(&["30", "--sweep", "--step", "5", "--timeout", "250ms"]);
        let sweep = cfg.sweep_config(30).unwrap();
        assert_eq!(sweep.step, 5);
        assert_eq!(sweep.recursive_timeout, Duration::from_millis(250));

        let cfg = config(&["30", "--sweep", "--step", "0"]);
        assert!(matches!(cfg.sweep_config(30), Err(BenchError::Config(_))));

        let cfg = config(&["30", "--sweep", "--timeout", "soon"]);
        assert!(matches!(cfg.sweep_config(30), Err(BenchError::Config(_))));
    }

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("45"), Some(Duration::from_secs(45)));
    }

    #[test]
    fn parse_duration_ms() {
        assert_eq!(parse_duration("1ms"), Some(Duration::from_millis(1)));
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_duration("fast"), None);
    }
}
