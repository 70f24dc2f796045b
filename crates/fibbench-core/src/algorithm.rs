//! Strategy selection by tagged variant.

use std::fmt;

use crate::counter::OpCounter;
use crate::generator::SequenceGenerator;
use crate::iterative::IterativeGenerator;
use crate::memoized::MemoizedGenerator;
use crate::recursive::RecursiveGenerator;

/// The three sequence strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Bottom-up loop.
    Iterative,
    /// Naive double recursion, one fresh call tree per element.
    Recursive,
    /// Recursion through a shared memo table.
    Memoized,
}

impl Algorithm {
    /// All strategies, in mode-selector order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Iterative,
        Algorithm::Recursive,
        Algorithm::Memoized,
    ];
}

impl SequenceGenerator for Algorithm {
    fn generate(&self, len: usize, ops: &mut OpCounter) -> Option<Vec<u64>> {
        match self {
            Algorithm::Iterative => IterativeGenerator.generate(len, ops),
            Algorithm::Recursive => RecursiveGenerator::new().generate(len, ops),
            Algorithm::Memoized => MemoizedGenerator.generate(len, ops),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Algorithm::Iterative => "Iterative",
            Algorithm::Recursive => "Recursive",
            Algorithm::Memoized => "Memoized",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SequenceGenerator::name(self))
    }
}
