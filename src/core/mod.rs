//! Core domain types for Wordle
//!
//! Words, feedback, letter constraints and the vocabulary. Everything here is
//! pure, deterministic in-memory computation.

mod constraints;
mod feedback;
mod letters;
mod rules;
mod vocabulary;
mod word;

pub use constraints::ConstraintState;
pub use feedback::{Feedback, FeedbackError, Mark};
pub use letters::LetterSet;
pub use rules::Rules;
pub use vocabulary::Vocabulary;
pub use word::{WORD_LENGTH, Word, WordError};
