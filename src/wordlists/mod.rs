//! Word lists
//!
//! The default vocabulary is embedded at build time; `--wordlist` loads one
//! from a file instead.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use loader::{LoadError, embedded_vocabulary, load_from_file};
