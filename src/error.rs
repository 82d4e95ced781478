//! Solver error types

use crate::core::{Feedback, FeedbackError, Word, WordError};
use thiserror::Error;

/// Errors raised by games, sessions and vocabulary construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Folding feedback left no candidate standing.
    ///
    /// The feedback was contradictory, or the answer is not in the vocabulary.
    #[error("no candidates remain after {guess} {feedback}; feedback is contradictory or the answer is outside the vocabulary")]
    EmptyCandidateSet { guess: Word, feedback: Feedback },

    #[error("the game is already over")]
    GameOver,

    #[error("the vocabulary is empty")]
    EmptyVocabulary,

    #[error(transparent)]
    Word(#[from] WordError),

    #[error("malformed feedback: {0}")]
    Feedback(#[from] FeedbackError),
}
