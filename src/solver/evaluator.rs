//! Expected-remaining guess evaluation
//!
//! For every candidate guess, simulate it against every still-possible answer,
//! fold the resulting feedback into a copy of the current constraints and count
//! the candidates that survive. A guess's score is the average survivor count
//! over all answers; the lowest score wins.

use super::{ProgressSink, SolverConfig};
use crate::core::{ConstraintState, Feedback, Rules, Word};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

/// Score of a single guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore<'v> {
    pub word: &'v Word,
    /// Sum of surviving candidates over every hypothetical answer
    pub total_remaining: usize,
    /// `total_remaining` divided by the number of candidates
    pub average_remaining: f64,
}

impl GuessScore<'_> {
    /// Lower total first, then alphabetical
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.total_remaining
            .cmp(&other.total_remaining)
            .then_with(|| self.word.cmp(other.word))
    }
}

/// Result of one scoring search
#[derive(Debug, Clone)]
pub struct Evaluation<'v> {
    /// The selected guess
    pub best: GuessScore<'v>,
    /// Every candidate's score, in candidate order
    pub scores: Vec<GuessScore<'v>>,
}

impl<'v> Evaluation<'v> {
    /// Scores sorted best first, ties broken alphabetically
    #[must_use]
    pub fn ranked(&self) -> Vec<GuessScore<'v>> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(GuessScore::rank_cmp);
        ranked
    }

    /// Score of a particular word, if it was in the guess pool
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<GuessScore<'v>> {
        self.scores.iter().find(|s| s.word == word).copied()
    }
}

/// Picks the guess that minimizes the expected number of remaining candidates
///
/// The guess pool is the candidate list itself. Equal scores are resolved in
/// favour of the alphabetically first word, so the result never depends on
/// thread scheduling or container order.
#[derive(Debug, Clone, Copy)]
pub struct GuessEvaluator {
    rules: Rules,
    parallel: bool,
}

impl GuessEvaluator {
    #[must_use]
    pub const fn new(config: &SolverConfig) -> Self {
        Self {
            rules: config.rules,
            parallel: config.parallel,
        }
    }

    /// Average number of candidates left after playing `guess`
    ///
    /// Every candidate is weighted equally as the possible answer. Returns 0.0
    /// for an empty candidate list.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{ConstraintState, Word};
    /// use wordle_narrow::solver::{GuessEvaluator, SolverConfig};
    ///
    /// let words = ["crane", "slate", "trace"].map(|w| Word::new(w).unwrap());
    /// let candidates: Vec<&Word> = words.iter().collect();
    /// let evaluator = GuessEvaluator::new(&SolverConfig::default());
    ///
    /// // CRANE tells all three apart
    /// let score = evaluator.score_guess(&words[0], &candidates, &ConstraintState::new());
    /// assert!((score - 1.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn score_guess(&self, guess: &Word, candidates: &[&Word], state: &ConstraintState) -> f64 {
        if candidates.is_empty() {
            return 0.0;
        }
        self.total_remaining(guess, candidates, state) as f64 / candidates.len() as f64
    }

    /// Score every candidate as a guess and select the best
    ///
    /// Returns `None` if there are no candidates.
    pub fn evaluate<'v>(
        &self,
        candidates: &[&'v Word],
        state: &ConstraintState,
        progress: &dyn ProgressSink,
    ) -> Option<Evaluation<'v>> {
        let n = candidates.len();
        let done = AtomicUsize::new(0);
        progress.start(n);

        let score = |&guess: &&'v Word| {
            let total_remaining = self.total_remaining(guess, candidates, state);
            progress.scored(done.fetch_add(1, AtomicOrdering::Relaxed) + 1, n);
            GuessScore {
                word: guess,
                total_remaining,
                average_remaining: total_remaining as f64 / n as f64,
            }
        };

        let scores: Vec<GuessScore<'v>> = if self.parallel {
            candidates.par_iter().map(score).collect()
        } else {
            candidates.iter().map(score).collect()
        };

        progress.finish();

        let best = *scores.iter().min_by(|a, b| a.rank_cmp(b))?;
        debug!(
            "best guess {} leaves {:.3} of {n} candidates on average",
            best.word, best.average_remaining
        );

        Some(Evaluation { best, scores })
    }

    /// Sum over every candidate answer of the candidates left after `guess`
    ///
    /// The survivors only depend on the feedback, so each distinct feedback is
    /// folded and counted once.
    fn total_remaining(&self, guess: &Word, candidates: &[&Word], state: &ConstraintState) -> usize {
        let mut survivors: FxHashMap<Feedback, usize> = FxHashMap::default();

        candidates
            .iter()
            .map(|answer| {
                let feedback = Feedback::compute(guess, answer, self.rules);
                *survivors.entry(feedback).or_insert_with(|| {
                    state
                        .fold(guess, &feedback, self.rules)
                        .count_admitted(candidates)
                })
            })
            .sum()
    }
}
