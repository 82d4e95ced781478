//! Wordle narrowing solver - CLI
//!
//! Plays, benchmarks and assists with five-letter word games by picking the
//! guess that leaves the fewest candidates on average.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::path::PathBuf;
use wordle_narrow::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, run_assist, run_benchmark, select_answers,
        solve_word, top_guesses,
    },
    core::{Rules, Vocabulary, Word},
    output::{
        benchmark_bar, print_analysis_result, print_benchmark_result, print_solve_result,
        print_suggestions, scoring_bar,
    },
    solver::{LogProgress, ProgressSink, Session, SolverConfig},
    wordlists::{embedded_vocabulary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_narrow",
    about = "Wordle solver that minimizes the expected number of remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Duplicate-letter rules: literal or duplicate-aware
    #[arg(short, long, global = true, default_value_t = Rules::Literal)]
    rules: Rules,

    /// Score guesses on one thread
    #[arg(long, global = true)]
    sequential: bool,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against a known answer
    Solve {
        /// The answer to find
        answer: Word,

        /// Fixed opening guess; repeat for several
        #[arg(short, long = "opener")]
        openers: Vec<Word>,

        /// Stop after this many guesses
        #[arg(short, long)]
        max_guesses: Option<usize>,
    },

    /// Rank the best opening guesses
    Suggest {
        /// Number of guesses to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Score one word as an opening guess
    Analyze {
        /// Word to analyze
        word: Word,
    },

    /// Play many games and report the average number of guesses
    Benchmark {
        /// Number of random answers to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Test every word in the vocabulary
        #[arg(short, long, conflicts_with = "count")]
        all: bool,

        /// Seed for reproducible sampling
        #[arg(short, long)]
        seed: Option<u64>,

        /// Fixed opening guess; repeat for several (default: the best opener)
        #[arg(short, long = "opener")]
        openers: Vec<Word>,

        /// Give up on a game after this many guesses
        #[arg(short, long)]
        max_guesses: Option<usize>,
    },

    /// Suggest guesses for a game played elsewhere, reading feedback from stdin
    Assist,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let vocabulary = match &cli.wordlist {
        Some(path) => load_from_file(path)?,
        None => embedded_vocabulary()?,
    };
    info!("loaded {} words", vocabulary.len());

    let mut config = SolverConfig::new(cli.rules);
    if cli.sequential {
        config = config.sequential();
    }

    // Log progress when logging is on, otherwise draw a bar
    let bar = scoring_bar();
    let log = LogProgress::new(config.progress_every);
    let progress: &dyn ProgressSink = if cli.verbose > 0 { &log } else { &bar };

    match cli.command {
        Commands::Solve {
            answer,
            openers,
            max_guesses,
        } => {
            run_solve_command(&vocabulary, config, answer, openers, max_guesses, progress);
            Ok(())
        }
        Commands::Suggest { top } => {
            let session = Session::new(&vocabulary, config);
            let scores = top_guesses(&session, top, progress);
            print_suggestions(&scores, vocabulary.len());
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &vocabulary, &config, progress);
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            all,
            seed,
            openers,
            max_guesses,
        } => run_benchmark_command(
            &vocabulary,
            config,
            (!all).then_some(count),
            seed,
            BenchmarkConfig {
                openers,
                max_guesses,
            },
            progress,
        ),
        Commands::Assist => {
            let mut session = Session::new(&vocabulary, config);
            run_assist(&mut session, io::stdin().lock(), &mut io::stdout().lock(), progress)
                .map_err(Into::into)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn run_solve_command(
    vocabulary: &Vocabulary,
    config: SolverConfig,
    answer: Word,
    openers: Vec<Word>,
    max_guesses: Option<usize>,
    progress: &dyn ProgressSink,
) {
    if !vocabulary.contains(&answer) {
        warn!("{answer} is not in the vocabulary; the game cannot be won");
    }

    let solve = SolveConfig::new(answer)
        .with_openers(openers)
        .with_max_guesses(max_guesses);
    let result = solve_word(&solve, vocabulary, config, progress);

    print_solve_result(&result);
}

fn run_benchmark_command(
    vocabulary: &Vocabulary,
    config: SolverConfig,
    count: Option<usize>,
    seed: Option<u64>,
    mut benchmark: BenchmarkConfig,
    progress: &dyn ProgressSink,
) -> Result<()> {
    // The first guess is the same for every answer, so score it once
    if benchmark.openers.is_empty() {
        let session = Session::new(vocabulary, config);
        let Some(best) = top_guesses(&session, 1, progress).first().map(|s| s.word.clone()) else {
            bail!("no opening guess available");
        };
        info!("opening with {best}");
        benchmark.openers.push(best);
    }

    let answers = select_answers(vocabulary, count, seed);
    println!(
        "Running benchmark on {} words opening with {}...",
        answers.len(),
        benchmark
            .openers
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let result = run_benchmark(vocabulary, &answers, config, &benchmark, &benchmark_bar());
    print_benchmark_result(&result);
    Ok(())
}
