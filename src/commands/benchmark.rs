//! Benchmark command
//!
//! Plays one game per sampled answer and aggregates how many guesses each took.

use crate::core::{Vocabulary, Word};
use crate::solver::{Game, GameStatus, Silent, SolverConfig};
use indicatif::ProgressBar;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How many of the slowest games are kept in the result
const HARDEST_KEPT: usize = 10;

/// Configuration for a benchmark run
#[derive(Debug, Clone, Default)]
pub struct BenchmarkConfig {
    /// Guesses played before the evaluator takes over
    pub openers: Vec<Word>,
    /// Give up on a game after this many guesses
    pub max_guesses: Option<usize>,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Answers whose game ran into `EmptyCandidateSet`
    pub failures: Vec<Word>,
    /// Answers cut off by `max_guesses`
    pub unfinished: Vec<Word>,
    /// Guesses summed over solved games
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by guess count
    pub distribution: BTreeMap<usize, usize>,
    /// Slowest solved games, most guesses first
    pub hardest: Vec<(Word, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the answers to benchmark
///
/// `count: None` takes the whole vocabulary in order. Otherwise `count` words
/// are sampled without replacement; a seed makes the sample reproducible.
#[must_use]
pub fn select_answers(vocabulary: &Vocabulary, count: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    let Some(count) = count else {
        return vocabulary.words().to_vec();
    };

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    vocabulary
        .words()
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}

/// Play a game for every answer
pub fn run_benchmark(
    vocabulary: &Vocabulary,
    answers: &[Word],
    solver: SolverConfig,
    config: &BenchmarkConfig,
    bar: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut unfinished = Vec::new();
    let mut hardest = Vec::new();

    bar.set_length(answers.len() as u64);

    for answer in answers {
        let mut game = Game::new(vocabulary, answer.clone(), solver);
        match game.play(&config.openers, config.max_guesses, &Silent) {
            Ok(GameStatus::Won) => {
                let guesses = game.guess_count();
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
                hardest.push((answer.clone(), guesses));
            }
            Ok(_) => unfinished.push(answer.clone()),
            Err(e) => {
                warn!("failed on {answer}: {e}");
                failures.push(answer.clone());
            }
        }

        bar.inc(1);
        if solved > 0 {
            bar.set_message(format!("avg {:.3}", total_guesses as f64 / solved as f64));
        }
    }

    bar.finish_and_clear();

    hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest.truncate(HARDEST_KEPT);

    let duration = start.elapsed();
    let total_words = answers.len();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };
    info!("average {average_guesses:.3} guesses over {solved} solved of {total_words}");

    BenchmarkResult {
        total_words,
        solved,
        failures,
        unfinished,
        total_guesses,
        average_guesses,
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        hardest,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_strs(&[
            "crane", "slate", "trace", "grape", "plate", "crate", "irate", "stare", "share",
            "spare",
        ])
        .unwrap()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn benchmark_runs_every_answer() {
        let vocabulary = vocabulary();
        let answers = select_answers(&vocabulary, None, None);

        let result = run_benchmark(
            &vocabulary,
            &answers,
            SolverConfig::default(),
            &BenchmarkConfig::default(),
            &ProgressBar::hidden(),
        );

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert!(result.failures.is_empty());
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= vocabulary.len());
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
    }

    #[test]
    fn benchmark_with_opener() {
        let vocabulary = vocabulary();
        let answers = select_answers(&vocabulary, None, None);
        let config = BenchmarkConfig {
            openers: vec![word("crane")],
            max_guesses: None,
        };

        let result = run_benchmark(
            &vocabulary,
            &answers,
            SolverConfig::default(),
            &config,
            &ProgressBar::hidden(),
        );

        assert_eq!(result.solved, 10);
        // Only CRANE itself is solved in one
        assert_eq!(result.distribution.get(&1), Some(&1));
    }

    #[test]
    fn max_guesses_leaves_games_unfinished() {
        let vocabulary = vocabulary();
        let answers = vec![word("spare")];
        let config = BenchmarkConfig {
            openers: vec![word("crane")],
            max_guesses: Some(1),
        };

        let result = run_benchmark(
            &vocabulary,
            &answers,
            SolverConfig::default(),
            &config,
            &ProgressBar::hidden(),
        );

        assert_eq!(result.solved, 0);
        assert_eq!(result.unfinished, answers);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn answers_outside_vocabulary_are_failures() {
        let vocabulary = vocabulary();
        let answers = vec![word("zzzzz"), word("trace")];

        let result = run_benchmark(
            &vocabulary,
            &answers,
            SolverConfig::default(),
            &BenchmarkConfig::default(),
            &ProgressBar::hidden(),
        );

        assert_eq!(result.failures, vec![word("zzzzz")]);
        assert_eq!(result.solved, 1);
    }

    #[test]
    fn empty_answer_list() {
        let vocabulary = vocabulary();

        let result = run_benchmark(
            &vocabulary,
            &[],
            SolverConfig::default(),
            &BenchmarkConfig::default(),
            &ProgressBar::hidden(),
        );

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let vocabulary = vocabulary();

        let first = select_answers(&vocabulary, Some(4), Some(7));
        let second = select_answers(&vocabulary, Some(4), Some(7));

        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
        assert!(first.iter().all(|w| vocabulary.contains(w)));
    }

    #[test]
    fn sample_larger_than_vocabulary_takes_everything() {
        let vocabulary = vocabulary();
        assert_eq!(select_answers(&vocabulary, Some(50), Some(1)).len(), 10);
    }
}
