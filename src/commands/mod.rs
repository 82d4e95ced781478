//! Command implementations

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use assist::{AssistInput, run_assist};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, select_answers};
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use suggest::top_guesses;
