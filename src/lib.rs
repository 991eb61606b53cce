//! Solvers for the Advent of Code 2025 puzzles
//!
//! This library provides one solver per puzzle day, a registry mapping
//! day numbers to solvers, and the input/output helpers used by the
//! command-line binary.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export the main solver types for convenience
pub use crate::core::solver::{available_days, solve_day, Answers, PuzzleError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Solve one day against an input file on disk.
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `day` - Puzzle day number
/// * `input_path` - Path to the puzzle input file
///
/// # Returns
///
/// The day's answers, or an error if the file is unreadable, the day is
/// unknown, or the input is malformed.
pub fn solve_file<P: AsRef<std::path::Path>>(day: u32, input_path: P) -> anyhow::Result<Answers> {
    let input = crate::utils::input::read_input(input_path.as_ref())?;
    crate::core::solver::solve_day(day, &input)
}

/// Runtime configuration
pub mod config {
    use std::path::PathBuf;

    use serde::Deserialize;

    /// Options read from an optional JSON configuration file.
    #[derive(Debug, Default, Deserialize)]
    pub struct Config {
        /// Directory holding the `input_NN.txt` files.
        pub inputs_dir: Option<PathBuf>,
    }
}
