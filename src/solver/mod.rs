//! Guess selection and game driving
//!
//! The evaluator scores candidate guesses; a `Session` folds feedback supplied
//! from outside, and a `Game` plays against a known answer.

mod config;
mod evaluator;
mod game;
mod progress;
mod session;

pub use config::SolverConfig;
pub use evaluator::{Evaluation, GuessEvaluator, GuessScore};
pub use game::{Game, GameStatus, Turn};
pub use progress::{LogProgress, ProgressSink, Silent};
pub use session::Session;
