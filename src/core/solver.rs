//! Solver registry and shared result types
//!
//! Each puzzle day exposes a `solve` function over the raw input text.
//! This module defines the answer type those functions return, the typed
//! errors they raise, and the day-number lookup used by the binary.

use std::collections::BTreeMap;

use anyhow::Result;
use lazy_static::lazy_static;

use crate::core::days;

/// Integer answers produced by one puzzle day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    /// Part 1 result.
    pub part1: i64,
    /// Part 2 result; absent for days whose puzzle only defines a first part.
    pub part2: Option<i64>,
}

impl Answers {
    /// Answers for a day with only a first part.
    pub fn single(part1: i64) -> Self {
        Self { part1, part2: None }
    }

    /// Answers for a day with both parts.
    pub fn pair(part1: i64, part2: i64) -> Self {
        Self {
            part1,
            part2: Some(part2),
        }
    }
}

/// Error cases shared by the day solvers.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("no solver registered for day {0}")]
    UnknownDay(u32),

    #[error("puzzle input is empty")]
    EmptyInput,

    #[error("malformed input at line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("malformed token '{token}': {reason}")]
    MalformedToken { token: String, reason: String },
}

impl PuzzleError {
    /// Convenience constructor for line-level parse failures.
    pub fn line(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Convenience constructor for token-level parse failures.
    pub fn token(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedToken {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

/// Signature every day solver conforms to.
pub type SolverFn = fn(&str) -> Result<Answers>;

lazy_static! {
    /// Day number to solver lookup, built once on first use.
    static ref SOLVERS: BTreeMap<u32, SolverFn> = {
        let mut solvers: BTreeMap<u32, SolverFn> = BTreeMap::new();

        solvers.insert(1, days::day01::solve as SolverFn);
        solvers.insert(2, days::day02::solve as SolverFn);
        solvers.insert(3, days::day03::solve as SolverFn);
        solvers.insert(4, days::day04::solve as SolverFn);
        solvers.insert(5, days::day05::solve as SolverFn);
        solvers.insert(6, days::day06::solve as SolverFn);
        solvers.insert(7, days::day07::solve as SolverFn);
        solvers.insert(8, days::day08::solve as SolverFn);
        solvers.insert(9, days::day09::solve as SolverFn);
        solvers.insert(10, days::day10::solve as SolverFn);

        solvers
    };
}

/// Days with a registered solver, in ascending order.
pub fn available_days() -> Vec<u32> {
    SOLVERS.keys().copied().collect()
}

/// Run the solver for `day` over the raw puzzle input.
///
/// # Arguments
///
/// * `day` - Puzzle day number
/// * `input` - Full text of the puzzle input
///
/// # Returns
///
/// The day's answers, or an error for unknown days and malformed input.
pub fn solve_day(day: u32, input: &str) -> Result<Answers> {
    let solver = SOLVERS.get(&day).ok_or(PuzzleError::UnknownDay(day))?;
    solver(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_days() {
        assert_eq!(available_days(), (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_unknown_day_is_an_error() {
        let err = solve_day(99, "").unwrap_err();
        assert!(err.to_string().contains("no solver registered"));
    }

    #[test]
    fn test_answers_constructors() {
        assert_eq!(Answers::single(7).part2, None);
        assert_eq!(Answers::pair(7, 9).part2, Some(9));
    }
}
