//! Build script that embeds the default vocabulary
//!
//! Reads `data/answers.txt` and writes a `&[&str]` constant into `OUT_DIR`.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORDLIST: &str = "data/answers.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        WORDLIST,
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Default vocabulary: candidate answers and guesses",
    );

    println!("cargo:rerun-if-changed={WORDLIST}");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Validation happens when the vocabulary is built; only blank lines are dropped here
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
