//! Suggest command
//!
//! Ranks the current candidates as guesses.

use crate::solver::{GuessScore, ProgressSink, Session};

/// The `top` best guesses for a session, best first
///
/// Empty if the session has no candidates.
#[must_use]
pub fn top_guesses<'v>(
    session: &Session<'v>,
    top: usize,
    progress: &dyn ProgressSink,
) -> Vec<GuessScore<'v>> {
    session
        .suggest(progress)
        .map(|evaluation| evaluation.ranked().into_iter().take(top).collect())
        .unwrap_or_default()
}
