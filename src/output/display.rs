//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::{GameStatus, GuessScore};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(turn.guess.text(), &turn.feedback),
            turn.feedback.to_emoji()
        );

        println!(
            "  Candidates: {} → {}",
            turn.candidates_before, turn.candidates_after
        );
        if let Some(score) = turn.score {
            println!("  Expected:   {score:.2} candidates");
        }
    }

    println!();
    let guesses = result.turns.len();
    match result.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ Solved in {guesses} guesses!").green().bold()
        ),
        GameStatus::InProgress => println!(
            "{}",
            format!("⏸  Stopped after {guesses} guesses").yellow().bold()
        ),
        GameStatus::Failed => {
            println!(
                "{}",
                format!("❌ Failed after {guesses} guesses").red().bold()
            );
            if let Some(error) = &result.error {
                println!("   {error}");
            }
        }
    }
}

/// Print ranked guesses
pub fn print_suggestions(scores: &[GuessScore<'_>], candidates: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BEST GUESSES".bright_cyan().bold(),
        format!("({candidates} candidates)").bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, score) in scores.iter().enumerate() {
        let bar = create_progress_bar(score.average_remaining, candidates as f64, 30);
        println!(
            "  {:3}. {}  [{}] {:.3}",
            i + 1,
            score.word.text().to_uppercase().bright_yellow(),
            bar.green(),
            score.average_remaining
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(
        result.average_remaining,
        result.total_candidates as f64,
        30,
    );

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Expected:    [{}] {}",
        bar.green(),
        format!("{:.3} candidates remain", result.average_remaining).bright_yellow()
    );
    match result.rank {
        Some(rank) => println!("   Rank:        {rank} of {}", result.total_candidates),
        None => println!("   Rank:        not in the vocabulary"),
    }
    println!(
        "   Best opener: {} ({:.3})",
        result.best.0.text().to_uppercase().green(),
        result.best.1
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest words:".yellow().bold());
        for (word, guesses) in result.hardest.iter().take(5) {
            println!("   {} ({guesses} guesses)", word.text().to_uppercase().yellow());
        }
    }

    if !result.unfinished.is_empty() {
        println!(
            "\n⏸  {} {}",
            "Unfinished:".yellow().bold(),
            join_upper(result.unfinished.iter().map(|w| w.text()))
        );
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} {}",
            "Failed:".red().bold(),
            join_upper(result.failures.iter().map(|w| w.text()))
        );
    }
}

fn join_upper<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.map(str::to_uppercase).collect::<Vec<_>>().join(", ")
}
