//! The fixed universe of guesses and answers
//!
//! A `Vocabulary` is built once and shared by reference with every game. Its
//! words are sorted and de-duplicated, so every candidate list derived from it
//! is in lexicographic order, which is what the evaluator's tie-break relies on.

use super::Word;
use crate::error::SolverError;

/// Immutable, lexicographically ordered set of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    /// Build a vocabulary, sorting and removing duplicates
    ///
    /// # Errors
    /// Returns `SolverError::EmptyVocabulary` if no words are given.
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{Vocabulary, Word};
    ///
    /// let words = ["slate", "crane", "slate"].map(|w| Word::new(w).unwrap());
    /// let vocabulary = Vocabulary::new(words).unwrap();
    /// assert_eq!(vocabulary.len(), 2);
    /// assert_eq!(vocabulary.words()[0].text(), "crane");
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, SolverError> {
        let mut words: Vec<Word> = words.into_iter().collect();
        if words.is_empty() {
            return Err(SolverError::EmptyVocabulary);
        }
        words.sort_unstable();
        words.dedup();
        Ok(Self { words })
    }

    /// Parse and validate every entry, then build the vocabulary
    ///
    /// # Errors
    /// Returns `SolverError::Word` for the first invalid entry, or
    /// `SolverError::EmptyVocabulary` if the list is empty.
    pub fn from_strs<S: AsRef<str>>(texts: &[S]) -> Result<Self, SolverError> {
        let words = texts
            .iter()
            .map(|t| Word::new(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed vocabulary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Look a word up by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.words
            .binary_search(&word)
            .ok()
            .map(|idx| &self.words[idx])
    }

    /// Every word as a candidate list, the starting `CandidateSet` of a game
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        self.words.iter().collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
