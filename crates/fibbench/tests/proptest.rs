//! Property-based tests for argument handling.

use clap::Parser;
use proptest::prelude::*;

use fibbench_lib::config::{parse_leading_int, AppConfig};
use fibbench_orchestration::mode::BenchMode;

fn config(args: &[&str]) -> AppConfig {
    let mut argv = vec!["fibbench"];
    argv.extend_from_slice(args);
    AppConfig::try_parse_from(argv).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Decimal integers parse back to themselves.
    #[test]
    fn integers_round_trip(n in any::<i64>().prop_filter("saturates", |n| *n != i64::MIN)) {
        prop_assert_eq!(parse_leading_int(&n.to_string()), n);
    }

    /// Trailing garbage after the digits is ignored.
    #[test]
    fn trailing_text_ignored(n in 0u32..1_000_000, tail in "[a-z.,]{0,8}") {
        prop_assert_eq!(parse_leading_int(&format!("{n}{tail}")), i64::from(n));
    }

    /// Input without a leading digit parses as zero.
    #[test]
    fn non_numeric_is_zero(s in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        prop_assert_eq!(parse_leading_int(&s), 0);
    }

    /// Selectors outside 0..=4 always select the combined mode.
    #[test]
    fn unknown_selectors_are_all(selector in 5i64..10_000) {
        let cfg = config(&["10", &selector.to_string()]);
        prop_assert_eq!(cfg.mode(), BenchMode::All);
    }

    /// Negative lengths clamp to an empty run.
    #[test]
    fn negative_lengths_clamp(n in 1u32..1_000_000) {
        let cfg = config(&[&format!("-{n}")]);
        prop_assert_eq!(cfg.sequence_length().unwrap(), 0);
    }
}

#[test]
fn known_selectors() {
    let cases = [
        ("0", BenchMode::Iterative),
        ("1", BenchMode::Recursive),
        ("2", BenchMode::Memoized),
        ("3", BenchMode::All),
        ("4", BenchMode::IterativeMemoized),
    ];
    for (arg, mode) in cases {
        assert_eq!(config(&["10", arg]).mode(), mode, "selector {arg}");
    }
}
