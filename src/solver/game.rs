//! One game against a known answer
//!
//! The game is its own feedback oracle: every submitted guess is compared with
//! the answer, and the feedback is folded into the underlying [`Session`].

use super::{ProgressSink, Session, SolverConfig};
use crate::core::{ConstraintState, Feedback, Vocabulary, Word};
use crate::error::SolverError;
use log::{debug, info};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The last guess was the answer
    Won,
    /// Feedback eliminated every candidate
    Failed,
}

/// One submitted guess
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Average remaining candidates the evaluator predicted, if it chose this guess
    pub score: Option<f64>,
}

/// Game record: answer, guesses, constraints, candidates and best guess
#[derive(Debug, Clone)]
pub struct Game<'v> {
    answer: Word,
    session: Session<'v>,
    turns: Vec<Turn>,
    best_guess: Option<&'v Word>,
    status: GameStatus,
}

impl<'v> Game<'v> {
    /// Start a game; the answer does not have to be in the vocabulary
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary, answer: Word, config: SolverConfig) -> Self {
        Self {
            answer,
            session: Session::new(vocabulary, config),
            turns: Vec::new(),
            best_guess: None,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of guesses submitted so far
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.turns.len()
    }

    /// The guess most recently chosen by the evaluator
    #[inline]
    #[must_use]
    pub const fn best_guess(&self) -> Option<&'v Word> {
        self.best_guess
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        self.session.state()
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'v Word] {
        self.session.candidates()
    }

    /// Submit a guess chosen outside the evaluator, such as a fixed opener
    ///
    /// # Errors
    /// Returns `SolverError::GameOver` if the game has ended, or
    /// `SolverError::EmptyCandidateSet` if the feedback eliminates every
    /// candidate; the game is then `Failed`.
    pub fn submit(&mut self, guess: Word) -> Result<GameStatus, SolverError> {
        self.submit_scored(guess, None)
    }

    /// Let the evaluator choose the next guess and submit it
    ///
    /// # Errors
    /// Same as [`Game::submit`].
    pub fn step(&mut self, progress: &dyn ProgressSink) -> Result<GameStatus, SolverError> {
        if self.status != GameStatus::InProgress {
            return Err(SolverError::GameOver);
        }

        // Candidates are never empty while in progress: a fold that would
        // empty them fails the game instead of being committed.
        let Some(evaluation) = self.session.suggest(progress) else {
            self.status = GameStatus::Failed;
            return Err(SolverError::GameOver);
        };

        self.best_guess = Some(evaluation.best.word);
        self.submit_scored(
            evaluation.best.word.clone(),
            Some(evaluation.best.average_remaining),
        )
    }

    /// Submit the openers, then step until the game ends
    ///
    /// `max_guesses` lets the caller stop early; the game is then still
    /// `InProgress`.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` if the game fails.
    pub fn play(
        &mut self,
        openers: &[Word],
        max_guesses: Option<usize>,
        progress: &dyn ProgressSink,
    ) -> Result<GameStatus, SolverError> {
        let within_limit = |turns: usize| max_guesses.is_none_or(|max| turns < max);

        for opener in openers {
            if self.status != GameStatus::InProgress || !within_limit(self.guess_count()) {
                return Ok(self.status);
            }
            self.submit(opener.clone())?;
        }

        while self.status == GameStatus::InProgress && within_limit(self.guess_count()) {
            self.step(progress)?;
        }

        if self.status == GameStatus::Won {
            info!("{} tries to guess {}", self.guess_count(), self.answer);
        }
        Ok(self.status)
    }

    fn submit_scored(&mut self, guess: Word, score: Option<f64>) -> Result<GameStatus, SolverError> {
        if self.status != GameStatus::InProgress {
            return Err(SolverError::GameOver);
        }

        let feedback = Feedback::compute(&guess, &self.answer, self.session.config().rules);
        let candidates_before = self.session.candidates().len();
        debug!("turn {}: {guess} {feedback}", self.turns.len() + 1);

        if guess == self.answer {
            self.turns.push(Turn {
                guess,
                feedback,
                candidates_before,
                candidates_after: 1,
                score,
            });
            self.status = GameStatus::Won;
            return Ok(self.status);
        }

        let result = self.session.apply(guess.clone(), feedback);
        let candidates_after = result.as_ref().copied().unwrap_or(0);
        self.turns.push(Turn {
            guess,
            feedback,
            candidates_before,
            candidates_after,
            score,
        });

        match result {
            Ok(_) => Ok(self.status),
            Err(e) => {
                self.status = GameStatus::Failed;
                Err(e)
            }
        }
    }
}
