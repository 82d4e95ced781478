//! Solve command
//!
//! Plays one game against a known answer and returns every turn.

use crate::core::{Vocabulary, Word};
use crate::error::SolverError;
use crate::solver::{Game, GameStatus, ProgressSink, SolverConfig, Turn};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub answer: Word,
    /// Guesses played before the evaluator takes over
    pub openers: Vec<Word>,
    /// Stop after this many guesses, even if unsolved
    pub max_guesses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self {
            answer,
            openers: Vec::new(),
            max_guesses: None,
        }
    }

    #[must_use]
    pub fn with_openers(mut self, openers: Vec<Word>) -> Self {
        self.openers = openers;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: Option<usize>) -> Self {
        self.max_guesses = max_guesses;
        self
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: Word,
    pub status: GameStatus,
    pub turns: Vec<Turn>,
    /// Set when the game failed
    pub error: Option<SolverError>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Play a game for `config.answer`
///
/// A failed game is reported through `SolveResult::status` and
/// `SolveResult::error`, with every turn up to the failure kept.
#[must_use]
pub fn solve_word(
    config: &SolveConfig,
    vocabulary: &Vocabulary,
    solver: SolverConfig,
    progress: &dyn ProgressSink,
) -> SolveResult {
    let mut game = Game::new(vocabulary, config.answer.clone(), solver);
    let error = game
        .play(&config.openers, config.max_guesses, progress)
        .err();

    SolveResult {
        answer: config.answer.clone(),
        status: game.status(),
        turns: game.turns().to_vec(),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::solver::Silent;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_strs(&[
            "crane", "slate", "trace", "grape", "plate", "crate", "irate", "stare", "share",
            "spare",
        ])
        .unwrap()
    }

    #[test]
    fn solves_with_opener() {
        let vocabulary = vocabulary();
        let config = SolveConfig::new(word("trace")).with_openers(vec![word("crane")]);

        let result = solve_word(&config, &vocabulary, SolverConfig::default(), &Silent);

        assert!(result.success());
        assert!(result.error.is_none());
        assert_eq!(result.turns[0].guess.text(), "crane");
        assert_eq!(result.turns[0].feedback.mark(0), Mark::Present);
        assert_eq!(result.turns.last().map(|t| t.guess.text()), Some("trace"));
    }

    #[test]
    fn records_candidate_reduction() {
        let vocabulary = vocabulary();
        let config = SolveConfig::new(word("spare"));

        let result = solve_word(&config, &vocabulary, SolverConfig::default(), &Silent);

        assert!(result.success());
        for turn in &result.turns {
            assert!(turn.candidates_after <= turn.candidates_before);
        }
    }

    #[test]
    fn respects_max_guesses() {
        let vocabulary = vocabulary();
        let config = SolveConfig::new(word("stare"))
            .with_openers(vec![word("crane")])
            .with_max_guesses(Some(1));

        let result = solve_word(&config, &vocabulary, SolverConfig::default(), &Silent);

        assert_eq!(result.status, GameStatus::InProgress);
        assert_eq!(result.turns.len(), 1);
        assert!(!result.success());
    }

    #[test]
    fn unknown_answer_fails_with_error() {
        let vocabulary = vocabulary();
        let config = SolveConfig::new(word("zzzzz"));

        let result = solve_word(&config, &vocabulary, SolverConfig::default(), &Silent);

        assert_eq!(result.status, GameStatus::Failed);
        assert!(matches!(
            result.error,
            Some(SolverError::EmptyCandidateSet { .. })
        ));
        assert_eq!(result.turns.last().map(|t| t.candidates_after), Some(0));
    }
}
