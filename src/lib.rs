//! Wordle narrowing solver
//!
//! Picks, among the words still consistent with the feedback so far, the guess
//! that leaves the fewest candidates on average.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_narrow::core::{Vocabulary, Word};
//! use wordle_narrow::solver::{Game, GameStatus, Silent, SolverConfig};
//!
//! let vocabulary = Vocabulary::from_strs(&["crane", "slate", "trace", "grape", "plate"]).unwrap();
//! let answer = Word::new("trace").unwrap();
//!
//! let mut game = Game::new(&vocabulary, answer, SolverConfig::default());
//! game.submit(Word::new("crane").unwrap()).unwrap();
//! assert_eq!(game.candidates().len(), 1);
//!
//! assert_eq!(game.play(&[], None, &Silent).unwrap(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Guess evaluation and game driving
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
