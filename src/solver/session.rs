//! Solver session driven by externally supplied feedback
//!
//! A `Session` knows nothing about the answer. Feedback comes from outside
//! (a person reading the game board, or a `Game` comparing against its answer),
//! is folded into the constraints, and the candidate list is narrowed.

use super::{Evaluation, GuessEvaluator, ProgressSink, SolverConfig};
use crate::core::{ConstraintState, Feedback, Vocabulary, Word};
use crate::error::SolverError;
use log::{debug, warn};

/// Constraints, history and remaining candidates for one puzzle
#[derive(Debug, Clone)]
pub struct Session<'v> {
    vocabulary: &'v Vocabulary,
    config: SolverConfig,
    history: Vec<(Word, Feedback)>,
    state: ConstraintState,
    candidates: Vec<&'v Word>,
}

impl<'v> Session<'v> {
    /// Start with every vocabulary word as a candidate
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary, config: SolverConfig) -> Self {
        Self {
            vocabulary,
            config,
            history: Vec::new(),
            state: ConstraintState::new(),
            candidates: vocabulary.candidates(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Guesses and their feedback, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    /// Words still consistent with every fold, in vocabulary order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'v Word] {
        &self.candidates
    }

    /// Fold one guess and its feedback, returning the new candidate count
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` if no candidate would survive.
    /// The session is left unchanged in that case.
    pub fn apply(&mut self, guess: Word, feedback: Feedback) -> Result<usize, SolverError> {
        let state = self.state.fold(&guess, &feedback, self.config.rules);
        let candidates = state.narrow(&self.candidates);

        if candidates.is_empty() {
            warn!("{guess} {feedback} leaves no candidates");
            return Err(SolverError::EmptyCandidateSet { guess, feedback });
        }

        debug!(
            "{guess} {feedback}: {} -> {} candidates, constraints {state}",
            self.candidates.len(),
            candidates.len()
        );

        self.state = state;
        self.candidates = candidates;
        self.history.push((guess, feedback));
        Ok(self.candidates.len())
    }

    /// Parse a guess and feedback from text, then fold them
    ///
    /// # Errors
    /// Returns `SolverError::Word` or `SolverError::Feedback` for malformed
    /// input, or `SolverError::EmptyCandidateSet` as [`Session::apply`] does.
    pub fn apply_str(&mut self, guess: &str, feedback: &str) -> Result<usize, SolverError> {
        let guess = Word::new(guess)?;
        let feedback = Feedback::parse(feedback)?;
        self.apply(guess, feedback)
    }

    /// Drop the last guess and rebuild from the remaining history
    pub fn undo(&mut self) -> Option<(Word, Feedback)> {
        let last = self.history.pop()?;
        self.state = ConstraintState::from_history(
            self.history.iter().map(|(g, f)| (g, f)),
            self.config.rules,
        );
        self.candidates = self.state.narrow(&self.vocabulary.candidates());
        Some(last)
    }

    /// Forget every guess
    pub fn reset(&mut self) {
        self.history.clear();
        self.state = ConstraintState::new();
        self.candidates = self.vocabulary.candidates();
    }

    /// Run the scoring search over the current candidates
    #[must_use]
    pub fn suggest(&self, progress: &dyn ProgressSink) -> Option<Evaluation<'v>> {
        GuessEvaluator::new(&self.config).evaluate(&self.candidates, &self.state, progress)
    }
}
