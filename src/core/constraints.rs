//! Accumulated letter constraints
//!
//! A `ConstraintState` holds, for each position, the letters still allowed
//! there, plus the letters known to be somewhere in the answer. Folding a
//! guess and its feedback returns a new state; the old one is left untouched,
//! which is what lets the evaluator simulate thousands of hypothetical
//! guesses from the same starting point.

use super::{Feedback, LetterSet, Mark, Rules, WORD_LENGTH, Word};
use std::fmt;

/// Letter constraints derived from the (guess, feedback) history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintState {
    positions: [LetterSet; WORD_LENGTH],
    required: LetterSet,
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    /// A fresh state: every letter allowed everywhere, nothing required
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: [LetterSet::ALL; WORD_LENGTH],
            required: LetterSet::EMPTY,
        }
    }

    /// Rebuild a state by folding a whole history in order
    #[must_use]
    pub fn from_history<'h>(
        history: impl IntoIterator<Item = (&'h Word, &'h Feedback)>,
        rules: Rules,
    ) -> Self {
        history
            .into_iter()
            .fold(Self::new(), |state, (guess, feedback)| {
                state.fold(guess, feedback, rules)
            })
    }

    /// Letters still allowed at `position`
    #[inline]
    #[must_use]
    pub const fn allowed_at(&self, position: usize) -> LetterSet {
        self.positions[position]
    }

    /// Letters known to appear somewhere in the answer
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// Fold one guess and its feedback into a new state
    ///
    /// Positions are processed in index order:
    /// - `Exact`: the position is pinned to the guessed letter
    /// - `Present`: the letter becomes required and is ruled out at this position
    /// - `Absent`: the letter is ruled out at every position
    ///
    /// Under [`Rules::DuplicateAware`] an `Absent` letter that is `Exact` or
    /// `Present` elsewhere in the same guess is only ruled out at its own
    /// position, and positions pinned to that letter are never purged.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{ConstraintState, Feedback, Rules, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("trace").unwrap();
    /// let feedback = Feedback::literal(&guess, &answer);
    ///
    /// let state = ConstraintState::new().fold(&guess, &feedback, Rules::Literal);
    /// assert!(state.admits(&answer));
    /// assert!(!state.admits(&guess));
    /// ```
    #[must_use]
    pub fn fold(&self, guess: &Word, feedback: &Feedback, rules: Rules) -> Self {
        let mut next = *self;

        for (i, &mark) in feedback.marks().iter().enumerate() {
            let letter = guess.char_at(i);
            match mark {
                Mark::Exact => next.positions[i] = LetterSet::single(letter),
                Mark::Present => {
                    next.required.insert(letter);
                    next.positions[i].remove(letter);
                }
                Mark::Absent => match rules {
                    Rules::Literal => {
                        for allowed in &mut next.positions {
                            allowed.remove(letter);
                        }
                    }
                    Rules::DuplicateAware => {
                        if marked_elsewhere(guess, feedback, i) {
                            next.positions[i].remove(letter);
                        } else {
                            for allowed in &mut next.positions {
                                if !allowed.is_only(letter) {
                                    allowed.remove(letter);
                                }
                            }
                        }
                    }
                },
            }
        }

        next
    }

    /// Whether `word` is consistent with every constraint
    #[inline]
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        word.letters().is_superset(self.required)
            && word
                .chars()
                .iter()
                .zip(&self.positions)
                .all(|(&letter, allowed)| allowed.contains(letter))
    }

    /// Keep the candidates this state admits, preserving their order
    #[must_use]
    pub fn narrow<'v>(&self, candidates: &[&'v Word]) -> Vec<&'v Word> {
        candidates
            .iter()
            .copied()
            .filter(|word| self.admits(word))
            .collect()
    }

    /// Number of candidates this state admits
    #[must_use]
    pub fn count_admitted(&self, candidates: &[&Word]) -> usize {
        candidates.iter().filter(|word| self.admits(word)).count()
    }
}

/// True when the letter at `position` is green or yellow at another position of the same guess
fn marked_elsewhere(guess: &Word, feedback: &Feedback, position: usize) -> bool {
    let letter = guess.char_at(position);
    (0..WORD_LENGTH).any(|j| {
        j != position && guess.char_at(j) == letter && feedback.mark(j) != Mark::Absent
    })
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for allowed in &self.positions {
            write!(f, "[{allowed}]")?;
        }
        if !self.required.is_empty() {
            write!(f, " +{}", self.required)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    #[test]
    fn fresh_state_admits_everything() {
        let state = ConstraintState::new();
        for w in ["crane", "zzzzz", "aaaaa"] {
            assert!(state.admits(&word(w)));
        }
        assert_eq!(state.allowed_at(3), LetterSet::ALL);
        assert!(state.required().is_empty());
    }

    #[test]
    fn exact_pins_position() {
        let guess = word("crane");
        let feedback = Feedback::parse("-G---").unwrap();
        let state = ConstraintState::new().fold(&guess, &feedback, Rules::Literal);

        assert!(state.allowed_at(1).is_only(b'r'));
    }

    #[test]
    fn present_requires_letter_and_excludes_position() {
        let guess = word("crane");
        let feedback = Feedback::parse("Y----").unwrap();
        let state = ConstraintState::new().fold(&guess, &feedback, Rules::Literal);

        assert!(state.required().contains(b'c'));
        assert!(!state.allowed_at(0).contains(b'c'));
        assert!(state.allowed_at(1).contains(b'c'));
    }

    #[test]
    fn absent_purges_every_position() {
        let guess = word("crane");
        let feedback = Feedback::parse("---G-").unwrap();
        let state = ConstraintState::new().fold(&guess, &feedback, Rules::Literal);

        for i in 0..WORD_LENGTH {
            assert!(!state.allowed_at(i).contains(b'c'));
            assert!(!state.allowed_at(i).contains(b'e'));
        }
        assert!(state.allowed_at(3).is_only(b'n'));
    }

    #[test]
    fn exact_is_never_widened_by_later_folds() {
        let first = word("crane");
        let state = ConstraintState::new().fold(
            &first,
            &Feedback::parse("--G--").unwrap(),
            Rules::Literal,
        );
        let second = word("stomp");
        let state = state.fold(&second, &Feedback::parse("-----").unwrap(), Rules::Literal);

        assert!(state.allowed_at(2).is_only(b'a'));
    }

    #[test]
    fn fold_leaves_original_untouched() {
        let start = ConstraintState::new();
        let _ = start.fold(&word("crane"), &Feedback::parse("-----").unwrap(), Rules::Literal);
        assert_eq!(start, ConstraintState::new());
    }

    #[test]
    fn concrete_scenario_narrows_to_trace() {
        let vocabulary = words(&["crane", "slate", "trace", "grape", "plate"]);
        let candidates: Vec<&Word> = vocabulary.iter().collect();

        let guess = word("crane");
        let answer = word("trace");
        let feedback = Feedback::literal(&guess, &answer);
        assert_eq!(
            feedback.marks(),
            &[Mark::Present, Mark::Exact, Mark::Exact, Mark::Absent, Mark::Exact]
        );

        let state = ConstraintState::new().fold(&guess, &feedback, Rules::Literal);
        let narrowed = state.narrow(&candidates);
        let texts: Vec<&str> = narrowed.iter().map(|w| w.text()).collect();

        // slate and plate fail the pinned R, grape lacks the required C,
        // crane has C at a position ruled out for it
        assert_eq!(texts, ["trace"]);
    }

    #[test]
    fn answer_retained_under_literal_feedback() {
        let vocabulary = words(&[
            "crane", "slate", "trace", "grape", "plate", "speed", "abide", "robot", "floor",
            "eerie",
        ]);
        for answer in &vocabulary {
            let mut state = ConstraintState::new();
            for guess in &vocabulary {
                let feedback = Feedback::literal(guess, answer);
                state = state.fold(guess, &feedback, Rules::Literal);
                assert!(state.admits(answer), "{answer} lost after {guess}");
            }
        }
    }

    #[test]
    fn answer_retained_under_duplicate_aware_rules() {
        let vocabulary = words(&[
            "crane", "slate", "trace", "speed", "abide", "robot", "floor", "eerie", "geese",
            "lolly",
        ]);
        for answer in &vocabulary {
            let mut state = ConstraintState::new();
            for guess in &vocabulary {
                let feedback = Feedback::standard(guess, answer);
                state = state.fold(guess, &feedback, Rules::DuplicateAware);
                assert!(state.admits(answer), "{answer} lost after {guess}");
            }
        }
    }

    #[test]
    fn literal_rules_lose_answer_on_repeated_gray_letter() {
        // Known limitation: with game-style feedback, the second E of SPEED is
        // gray, and the literal purge removes E from every position, including
        // the one ABIDE actually uses.
        let guess = word("speed");
        let answer = word("abide");
        let feedback = Feedback::standard(&guess, &answer);
        assert_eq!(feedback.to_string(), "--Y-Y");

        let literal = ConstraintState::new().fold(&guess, &feedback, Rules::Literal);
        assert!(!literal.admits(&answer));
        assert!(!literal.allowed_at(4).contains(b'e'));

        let aware = ConstraintState::new().fold(&guess, &feedback, Rules::DuplicateAware);
        assert!(aware.admits(&answer));
        assert!(!aware.allowed_at(3).contains(b'e'));
        assert!(aware.allowed_at(4).contains(b'e'));
    }

    #[test]
    fn duplicate_aware_keeps_pinned_letter() {
        // E pinned at position 4, then a later guess reports a lone gray E
        let pinned = ConstraintState::new().fold(
            &word("crane"),
            &Feedback::parse("----G").unwrap(),
            Rules::DuplicateAware,
        );
        let gray_e = Feedback::parse("-----").unwrap();

        let aware = pinned.fold(&word("ethos"), &gray_e, Rules::DuplicateAware);
        assert!(aware.allowed_at(4).is_only(b'e'));
        assert!(!aware.allowed_at(0).contains(b'e'));

        let literal = pinned.fold(&word("ethos"), &gray_e, Rules::Literal);
        assert!(literal.allowed_at(4).is_empty());
    }

    #[test]
    fn narrowing_is_monotonic() {
        let vocabulary = words(&["crane", "slate", "trace", "grape", "plate", "crate", "irate"]);
        let answer = word("irate");
        let mut candidates: Vec<&Word> = vocabulary.iter().collect();
        let mut state = ConstraintState::new();

        for guess in ["slate", "crane", "crate", "irate"] {
            let guess = word(guess);
            let feedback = Feedback::literal(&guess, &answer);
            state = state.fold(&guess, &feedback, Rules::Literal);
            let next = state.narrow(&candidates);
            assert!(next.len() <= candidates.len());
            assert_eq!(next.len(), state.count_admitted(&candidates));
            candidates = next;
        }
        assert_eq!(candidates, [&answer]);
    }

    #[test]
    fn from_history_matches_sequential_folds() {
        let answer = word("plate");
        let guesses = words(&["crane", "slate"]);
        let feedbacks: Vec<Feedback> = guesses
            .iter()
            .map(|g| Feedback::literal(g, &answer))
            .collect();

        let replayed =
            ConstraintState::from_history(guesses.iter().zip(&feedbacks), Rules::Literal);
        let manual = ConstraintState::new()
            .fold(&guesses[0], &feedbacks[0], Rules::Literal)
            .fold(&guesses[1], &feedbacks[1], Rules::Literal);

        assert_eq!(replayed, manual);
    }

    #[test]
    fn display_shows_positions_and_required() {
        let state = ConstraintState::new().fold(
            &word("crane"),
            &Feedback::parse("YGG-G").unwrap(),
            Rules::Literal,
        );
        let shown = state.to_string();
        assert!(shown.starts_with("[abdefghijklmopqrstuvwxyz][r][a]"));
        assert!(shown.ends_with("[e] +c"));
    }
}
