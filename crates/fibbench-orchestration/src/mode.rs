//! Mode selector.

use fibbench_core::algorithm::Algorithm;
use fibbench_core::constants::DEFAULT_MODE_SELECTOR;

/// Column order of combined-mode output: iterative, memoized, recursive.
///
/// This is also the order in which combined modes run their strategies.
pub const CSV_COLUMNS: [Algorithm; 3] = [
    Algorithm::Iterative,
    Algorithm::Memoized,
    Algorithm::Recursive,
];

/// What a single invocation runs and how it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchMode {
    /// Selector 0: iterative only, labeled output.
    Iterative,
    /// Selector 1: recursive only, labeled output.
    Recursive,
    /// Selector 2: memoized only, labeled output.
    Memoized,
    /// Selector 3: all three as one CSV line.
    All,
    /// Selector 4: iterative and memoized as one CSV line, recursive slots
    /// filled with `-`.
    IterativeMemoized,
}

impl BenchMode {
    /// Map a numeric selector to a mode. Unknown selectors mean `All`.
    #[must_use]
    pub fn from_selector(selector: i64) -> Self {
        match selector {
            0 => Self::Iterative,
            1 => Self::Recursive,
            2 => Self::Memoized,
            4 => Self::IterativeMemoized,
            _ => Self::All,
        }
    }

    /// Numeric selector of this mode.
    #[must_use]
    pub fn selector(self) -> i64 {
        match self {
            Self::Iterative => 0,
            Self::Recursive => 1,
            Self::Memoized => 2,
            Self::All => 3,
            Self::IterativeMemoized => 4,
        }
    }

    /// The strategy of a single mode, or `None` for combined modes.
    #[must_use]
    pub fn single(self) -> Option<Algorithm> {
        match self {
            Self::Iterative => Some(Algorithm::Iterative),
            Self::Recursive => Some(Algorithm::Recursive),
            Self::Memoized => Some(Algorithm::Memoized),
            Self::All | Self::IterativeMemoized => None,
        }
    }

    /// Strategies this mode runs, in run order.
    #[must_use]
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Self::Iterative => &[Algorithm::Iterative],
            Self::Recursive => &[Algorithm::Recursive],
            Self::Memoized => &[Algorithm::Memoized],
            Self::All => &CSV_COLUMNS,
            Self::IterativeMemoized => &[Algorithm::Iterative, Algorithm::Memoized],
        }
    }
}

impl Default for BenchMode {
    fn default() -> Self {
        Self::from_selector(DEFAULT_MODE_SELECTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_round_trip() {
        for selector in 0..=4 {
            assert_eq!(BenchMode::from_selector(selector).selector(), selector);
        }
    }

    #[test]
    fn unknown_selectors_fall_through_to_all() {
        for selector in [-1, 5, 99, i64::MAX, i64::MIN] {
            assert_eq!(BenchMode::from_selector(selector), BenchMode::All);
        }
    }

    #[test]
    fn default_is_all() {
        assert_eq!(BenchMode::default(), BenchMode::All);
    }

    #[test]
    fn combined_modes_run_in_csv_order() {
        assert_eq!(BenchMode::All.algorithms(), &CSV_COLUMNS);
        assert_eq!(
            BenchMode::IterativeMemoized.algorithms(),
            &CSV_COLUMNS[..2]
        );
        assert!(BenchMode::All.single().is_none());
        assert!(BenchMode::IterativeMemoized.single().is_none());
    }

    #[test]
    fn single_modes() {
        assert_eq!(BenchMode::Iterative.single(), Some(Algorithm::Iterative));
        assert_eq!(BenchMode::Recursive.single(), Some(Algorithm::Recursive));
        assert_eq!(BenchMode::Memoized.single(), Some(Algorithm::Memoized));
    }
}
