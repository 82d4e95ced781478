//! Wordle feedback calculation and representation
//!
//! Feedback is five marks, one per position of the guess:
//! - `Exact`   (green)  letter is at this position in the answer
//! - `Present` (yellow) letter is in the answer at another position
//! - `Absent`  (gray)   letter is not in the answer
//!
//! Two ways of computing it are supported, selected by [`Rules`]:
//! - literal: every position is classified on its own, so a repeated
//!   letter is `Present` as often as it appears
//! - standard: the game's duplicate-counting rules, where a repeated letter
//!   is only marked as many times as the answer contains it

use super::{Rules, WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Correct letter in correct position (green)
    Exact,
    /// Letter in the answer, wrong position (yellow)
    Present,
    /// Letter not in the answer (gray)
    Absent,
}

impl Mark {
    /// Parse a single mark
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Malformed feedback, rejected before it is folded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly 5 marks, got {0}")]
    WrongLength(usize),
    #[error("unknown feedback mark {0:?} (use G, Y or -)")]
    UnknownMark(char),
}

/// The five marks received for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Mark::Exact; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Mark at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Calculate the feedback for `guess` against `answer` under the given rules
    #[must_use]
    pub fn compute(guess: &Word, answer: &Word, rules: Rules) -> Self {
        match rules {
            Rules::Literal => Self::literal(guess, answer),
            Rules::DuplicateAware => Self::standard(guess, answer),
        }
    }

    /// Classify every position independently
    ///
    /// 1. same letter at the same position: `Exact`
    /// 2. letter anywhere in the answer: `Present`
    /// 3. otherwise: `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("trace").unwrap();
    /// let feedback = Feedback::literal(&guess, &answer);
    ///
    /// use Mark::{Absent, Exact, Present};
    /// assert_eq!(feedback.marks(), &[Present, Exact, Exact, Absent, Exact]);
    /// ```
    #[must_use]
    pub fn literal(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *mark = if letter == answer.char_at(i) {
                Mark::Exact
            } else if answer.has_letter(letter) {
                Mark::Present
            } else {
                Mark::Absent
            };
        }
        Self(marks)
    }

    /// Calculate feedback with the game's duplicate-letter rules
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    #[must_use]
    pub fn standard(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = answer.letter_counts();

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *mark = Mark::Exact;
                available[usize::from(letter - b'a')] -= 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Exact {
                continue;
            }
            let slot = &mut available[usize::from(guess.char_at(i) - b'a')];
            if *slot > 0 {
                *mark = Mark::Present;
                *slot -= 1;
            }
        }

        Self(marks)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string is not exactly five marks or
    /// contains a character that is not a mark.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// assert!(Feedback::parse("GYX--").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let count = s.chars().count();
        if count != WORD_LENGTH {
            return Err(FeedbackError::WrongLength(count));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(s.chars()) {
            *mark = Mark::from_char(ch).ok_or(FeedbackError::UnknownMark(ch))?;
        }

        Ok(Self(marks))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}
