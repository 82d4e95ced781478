//! Vocabulary loading
//!
//! Word lists are plain text, one word per line. Blank lines are ignored and
//! surrounding whitespace is trimmed; anything else must be a valid word.

use super::ANSWERS;
use crate::core::{Vocabulary, Word, WordError};
use crate::error::SolverError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: invalid word {word:?}")]
    InvalidWord {
        line: usize,
        word: String,
        #[source]
        source: WordError,
    },

    #[error("word list contains no words")]
    Empty,
}

/// Load a vocabulary from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, `LoadError::InvalidWord`
/// with the 1-based line number of the first bad entry, or `LoadError::Empty`
/// if the file has no words.
///
/// # Examples
/// ```no_run
/// use wordle_narrow::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(&content)
}

/// Parse a word list held in memory
///
/// # Errors
///
/// Same as [`load_from_file`], minus I/O.
///
/// # Examples
/// ```
/// use wordle_narrow::wordlists::loader::parse_word_list;
///
/// let vocabulary = parse_word_list("crane\n\nslate\n").unwrap();
/// assert_eq!(vocabulary.len(), 2);
/// ```
pub fn parse_word_list(content: &str) -> Result<Vocabulary, LoadError> {
    let words = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, text)| {
            Word::new(text).map_err(|source| LoadError::InvalidWord {
                line,
                word: text.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    into_vocabulary(words)
}

/// The vocabulary embedded at build time
///
/// # Errors
///
/// Fails only if the embedded list itself is malformed.
pub fn embedded_vocabulary() -> Result<Vocabulary, LoadError> {
    let words = ANSWERS
        .iter()
        .enumerate()
        .map(|(i, &text)| {
            Word::new(text).map_err(|source| LoadError::InvalidWord {
                line: i + 1,
                word: text.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    into_vocabulary(words)
}

fn into_vocabulary(words: Vec<Word>) -> Result<Vocabulary, LoadError> {
    // Words are already validated, so emptiness is the only failure left
    Vocabulary::new(words).map_err(|_: SolverError| LoadError::Empty)
}
