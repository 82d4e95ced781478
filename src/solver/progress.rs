//! Progress reporting for the scoring search
//!
//! The evaluator reports after every scored guess. Sinks must be `Sync`
//! because guesses may be scored on several threads at once.

use log::info;

/// Receives "scored K of N candidate guesses" notifications
pub trait ProgressSink: Sync {
    /// Called once before scoring `total` guesses
    fn start(&self, _total: usize) {}

    /// Called once per scored guess; `done` counts up to `total`
    ///
    /// With parallel scoring, calls may arrive out of order.
    fn scored(&self, done: usize, total: usize);

    /// Called once after the last guess is scored
    fn finish(&self) {}
}

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProgressSink for Silent {
    fn scored(&self, _done: usize, _total: usize) {}
}

/// Logs every `every`-th notification, and the last one, at info level
#[derive(Debug, Clone, Copy)]
pub struct LogProgress {
    every: usize,
}

impl LogProgress {
    #[must_use]
    pub const fn new(every: usize) -> Self {
        Self { every }
    }

    fn should_report(&self, done: usize, total: usize) -> bool {
        done == total || (self.every > 0 && done % self.every == 0)
    }
}

impl ProgressSink for LogProgress {
    fn scored(&self, done: usize, total: usize) {
        if self.should_report(done, total) {
            info!("scored {done} of {total} candidate guesses");
        }
    }
}

impl ProgressSink for indicatif::ProgressBar {
    fn start(&self, total: usize) {
        self.reset();
        self.set_length(total as u64);
    }

    // Counts calls rather than trusting `done`, which may arrive out of order
    fn scored(&self, _done: usize, _total: usize) {
        self.inc(1);
    }

    // Cleared so the bar does not linger next to prompts or printed results
    fn finish(&self) {
        self.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_progress_reports_interval_and_last() {
        let sink = LogProgress::new(10);
        assert!(sink.should_report(10, 95));
        assert!(sink.should_report(90, 95));
        assert!(sink.should_report(95, 95));
        assert!(!sink.should_report(11, 95));
    }

    #[test]
    fn zero_interval_only_reports_last() {
        let sink = LogProgress::new(0);
        assert!(!sink.should_report(1, 3));
        assert!(sink.should_report(3, 3));
    }

    #[test]
    fn progress_bar_counts_out_of_order_reports() {
        let bar = indicatif::ProgressBar::hidden();
        bar.start(4);
        for done in [2, 1, 4, 3] {
            bar.scored(done, 4);
        }
        assert_eq!(bar.position(), 4);
        assert_eq!(bar.length(), Some(4));

        // A second search starts from zero again
        bar.start(3);
        bar.scored(3, 3);
        assert_eq!(bar.position(), 1);
        assert_eq!(bar.length(), Some(3));
    }

    #[test]
    fn parallel_evaluation_ends_bar_at_total() {
        use crate::core::{ConstraintState, Word};
        use crate::solver::{GuessEvaluator, SolverConfig};

        let words: Vec<Word> = ["crane", "slate", "trace", "grape", "plate", "crate", "irate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let candidates: Vec<&Word> = words.iter().collect();
        let bar = indicatif::ProgressBar::hidden();
        let evaluator = GuessEvaluator::new(&SolverConfig::default());

        for _ in 0..2 {
            let _ = evaluator.evaluate(&candidates, &ConstraintState::new(), &bar);
            assert_eq!(bar.position(), 7);
            assert_eq!(bar.length(), Some(7));
            assert!(bar.is_finished());
        }
    }
}
