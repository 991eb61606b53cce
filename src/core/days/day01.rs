//! Day 1: safe dial rotations
//!
//! The safe dial carries the numbers 0 through 99 and starts at 50. Each
//! input line rotates it left or right by some number of clicks. Part 1
//! counts how often a rotation leaves the dial pointing at 0; part 2
//! counts every click that lands on 0, including mid-rotation passes.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;

use crate::core::solver::{Answers, PuzzleError};

/// Positions on the dial.
const DIAL_SIZE: i64 = 100;

/// Where the dial points before the first rotation.
const INITIAL_POSITION: i64 = 50;

lazy_static! {
    static ref ROTATION_RE: Regex = Regex::new(r"^([LR])(\d+)$").unwrap();
}

/// A single rotation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    /// Toward lower numbers.
    Left(i64),
    /// Toward higher numbers.
    Right(i64),
}

fn parse_rotation(line: &str) -> Option<Rotation> {
    let caps = ROTATION_RE.captures(line)?;
    let distance: i64 = caps[2].parse().ok()?;
    match &caps[1] {
        "L" => Some(Rotation::Left(distance)),
        _ => Some(Rotation::Right(distance)),
    }
}

/// The dial register, cycling modulo [`DIAL_SIZE`].
#[derive(Debug)]
struct Dial {
    position: i64,
}

impl Dial {
    fn new() -> Self {
        Self {
            position: INITIAL_POSITION,
        }
    }

    /// Apply one rotation and return how many times the dial passed 0.
    ///
    /// Rightward moves cross a multiple of 100 for every boundary in the
    /// half-open interval `(position, position + n]`; leftward moves use
    /// the mirrored floor arithmetic over `[position - n, position)`.
    fn rotate(&mut self, rotation: Rotation) -> i64 {
        let crossings = match rotation {
            Rotation::Right(n) => {
                (self.position + n).div_euclid(DIAL_SIZE) - self.position.div_euclid(DIAL_SIZE)
            }
            Rotation::Left(n) => {
                (self.position - 1).div_euclid(DIAL_SIZE)
                    - (self.position - n - 1).div_euclid(DIAL_SIZE)
            }
        };

        self.position = match rotation {
            Rotation::Right(n) => (self.position + n).rem_euclid(DIAL_SIZE),
            Rotation::Left(n) => (self.position - n).rem_euclid(DIAL_SIZE),
        };

        crossings
    }
}

/// Run the rotation sequence and count stops at 0 (part 1) and passes
/// over 0 (part 2).
pub fn solve(input: &str) -> Result<Answers> {
    let mut dial = Dial::new();
    let mut stops_at_zero = 0i64;
    let mut crossings = 0i64;

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let rotation = parse_rotation(line).ok_or_else(|| {
            PuzzleError::line(index + 1, format!("expected R<n> or L<n>, got '{line}'"))
        })?;

        crossings += dial.rotate(rotation);
        if dial.position == 0 {
            stops_at_zero += 1;
        }
    }

    Ok(Answers::pair(stops_at_zero, crossings))
}

#[cfg(test)]
mod tests {
    use super::*;

    static EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_example_rotations() {
        let answers = solve(EXAMPLE).unwrap();
        assert_eq!(answers.part1, 3);
        assert_eq!(answers.part2, Some(6));
    }

    #[test]
    fn test_right_onto_zero() {
        // From the initial 50, R50 lands exactly on 0 and crosses it once.
        let answers = solve("R50\n").unwrap();
        assert_eq!(answers.part1, 1);
        assert_eq!(answers.part2, Some(1));
    }

    #[test]
    fn test_left_past_zero() {
        // From the initial 50, L60 passes 0 without stopping on it.
        let answers = solve("L60\n").unwrap();
        assert_eq!(answers.part1, 0);
        assert_eq!(answers.part2, Some(1));
    }

    #[test]
    fn test_full_turns_count_every_pass() {
        // R1000 from 50 returns to 50 after passing 0 ten times.
        let answers = solve("R1000\n").unwrap();
        assert_eq!(answers.part1, 0);
        assert_eq!(answers.part2, Some(10));
    }

    #[test]
    fn test_dial_positions() {
        let mut dial = Dial::new();
        dial.rotate(Rotation::Left(68));
        assert_eq!(dial.position, 82);
        dial.rotate(Rotation::Left(30));
        assert_eq!(dial.position, 52);
        dial.rotate(Rotation::Right(48));
        assert_eq!(dial.position, 0);
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        assert!(solve("R12\nX9\n").is_err());
        assert!(solve("R\n").is_err());
    }
}
