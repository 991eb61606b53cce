//! Command-line driver for the Advent of Code 2025 solvers
//!
//! Parses command-line arguments, sets up logging and configuration,
//! runs the selected day solvers over their input files and prints the
//! answers.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{ArgAction, ArgGroup, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, LevelFilter};

use aoc2025::config::Config;
use aoc2025::core::solver::{self, Answers};
use aoc2025::utils::{input, output};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "aoc2025",
    version,
    about = "Command-line solvers for the Advent of Code 2025 puzzles",
    long_about = "Solves Advent of Code 2025 puzzles from their text inputs:
- pick one or more days by number, or run every registered day
- inputs are read from inputs/input_NN.txt unless overridden
- answers print as 'Part 1: <n>' and 'Part 2: <n>' lines"
)]
#[command(group(
    ArgGroup::new("selection")
        .required(true)
        .args(["days", "all"]),
))]
struct Args {
    /// Day number(s) to solve
    days: Vec<u32>,

    /// Solve every day with a registered solver
    #[arg(long = "all", action = ArgAction::SetTrue)]
    all: bool,

    /// Input file override (applies to a single selected day)
    #[arg(long = "input")]
    input: Option<PathBuf>,

    /// Directory containing the puzzle input files
    #[arg(long = "inputs-dir")]
    inputs_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long = "config")]
    config: Option<String>,

    /// Print the answer lines only, without headers or summary
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (records go to stderr when omitted)
    #[arg(long = "log-file")]
    log_file: Option<String>,
}

/// Main entry point function
fn main() -> Result<()> {
    // Record the start time
    let start_time = Instant::now();

    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    setup_logging(&args);

    // Load configuration
    let config = load_config(&args.config);

    // Work out which days to run
    let days = select_days(&args);
    if days.is_empty() {
        eprintln!("{}", "Error: no days selected".red());
        eprintln!("Run with --help for usage information");
        process::exit(1);
    }
    if args.input.is_some() && days.len() != 1 {
        eprintln!(
            "{}",
            "Error: --input applies to exactly one selected day".red()
        );
        process::exit(1);
    }

    let inputs_dir = args
        .inputs_dir
        .clone()
        .or(config.inputs_dir)
        .unwrap_or_else(|| PathBuf::from("inputs"));

    // Solve everything first, then print, so the progress bar does not
    // interleave with the answer lines.
    let (results, failures) = run_solvers(&days, &inputs_dir, &args);

    for (day, answers, elapsed) in &results {
        if !args.quiet {
            println!("\n{}", output::day_header(*day));
            info!("day {} solved in {:?}", day, elapsed);
        }
        print!("{}", output::format_answers(answers));
    }

    if !args.quiet {
        print!("{}", output::run_summary(results.len(), start_time.elapsed()));
    }

    if failures > 0 {
        process::exit(1);
    }
    Ok(())
}

/// Set up logging with the requested level and target
fn setup_logging(args: &Args) {
    // Configure logging
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(args.log_level);

    // Set format
    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // Redirect to a file only when asked to
    if let Some(log_file) = &args.log_file {
        if let Ok(file) = File::create(log_file) {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }

    // Initialize logger
    builder.init();
}

/// Load configuration from file if provided
fn load_config(config_path: &Option<String>) -> Config {
    match config_path {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                error!("Configuration file not found: {}", path.display());
                return Config::default();
            }
            match std::fs::read_to_string(path) {
                Ok(config_str) => match serde_json::from_str(&config_str) {
                    Ok(config) => {
                        info!("Loaded configuration from {}", path.display());
                        config
                    }
                    Err(e) => {
                        error!("Invalid JSON in configuration file: {}", e);
                        Config::default()
                    }
                },
                Err(e) => {
                    error!("Error reading configuration file: {}", e);
                    Config::default()
                }
            }
        }
        None => Config::default(),
    }
}

/// Deduplicated, sorted day selection from the command line
fn select_days(args: &Args) -> Vec<u32> {
    if args.all {
        solver::available_days()
    } else {
        args.days
            .iter()
            .copied()
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .collect()
    }
}

/// Run the solvers for the selected days with progress tracking.
///
/// Failures are logged and counted rather than aborting the run, so a
/// missing input file does not hide the answers of the other days.
fn run_solvers(
    days: &[u32],
    inputs_dir: &Path,
    args: &Args,
) -> (Vec<(u32, Answers, Duration)>, usize) {
    // Set up progress bar for multi-day runs if not in quiet mode
    let progress_bar = if !args.quiet && days.len() > 1 {
        let pb = ProgressBar::new(days.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} days ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut results = Vec::new();
    let mut failures = 0usize;

    for &day in days {
        let input_path = match &args.input {
            Some(path) => path.clone(),
            None => input::default_input_path(inputs_dir, day),
        };

        let outcome = input::read_input(&input_path).and_then(|raw| {
            let solve_start = Instant::now();
            let answers = solver::solve_day(day, &raw)?;
            Ok((answers, solve_start.elapsed()))
        });

        match outcome {
            Ok((answers, elapsed)) => results.push((day, answers, elapsed)),
            Err(e) => {
                error!("day {}: {:#}", day, e);
                eprintln!("{} day {}: {:#}", "Error:".red(), day, e);
                failures += 1;
            }
        }

        // Update progress bar
        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    // Finish progress bar
    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    (results, failures)
}
