//! Word analysis command
//!
//! Scores one word as an opening guess against the whole vocabulary.

use crate::core::{ConstraintState, Vocabulary, Word};
use crate::solver::{GuessEvaluator, ProgressSink, SolverConfig};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    /// Average candidates left after playing the word
    pub average_remaining: f64,
    pub total_candidates: usize,
    /// 1-based position among all vocabulary words; `None` if the word is not in the vocabulary
    pub rank: Option<usize>,
    /// The best opener and its average
    pub best: (Word, f64),
}

/// Analyze `word` as an opening guess
///
/// The word does not have to be in the vocabulary; it is then scored but not
/// ranked.
#[must_use]
pub fn analyze_word(
    word: &Word,
    vocabulary: &Vocabulary,
    config: &SolverConfig,
    progress: &dyn ProgressSink,
) -> AnalysisResult {
    let evaluator = GuessEvaluator::new(config);
    let state = ConstraintState::new();
    let candidates = vocabulary.candidates();

    let average_remaining = evaluator.score_guess(word, &candidates, &state);

    let evaluation = evaluator.evaluate(&candidates, &state, progress);
    let rank = evaluation.as_ref().and_then(|evaluation| {
        evaluation
            .ranked()
            .iter()
            .position(|score| score.word == word)
            .map(|i| i + 1)
    });
    let best = evaluation.map_or_else(
        || (word.clone(), average_remaining),
        |evaluation| (evaluation.best.word.clone(), evaluation.best.average_remaining),
    );

    AnalysisResult {
        word: word.clone(),
        average_remaining,
        total_candidates: candidates.len(),
        rank,
        best,
    }
}
