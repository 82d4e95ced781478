//! Solver configuration

use crate::core::Rules;

/// Knobs shared by the evaluator, sessions and games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Duplicate-letter rules for feedback and folding (default: literal)
    pub rules: Rules,
    /// Score candidate guesses on the rayon thread pool (default: true)
    pub parallel: bool,
    /// Report progress every this many scored guesses (default: 10)
    pub progress_every: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self {
            rules,
            parallel: true,
            progress_every: 10,
        }
    }

    #[must_use]
    pub const fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Score guesses one at a time on the calling thread
    #[must_use]
    pub const fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    #[must_use]
    pub const fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
