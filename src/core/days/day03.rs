//! Day 3: best two-digit joltage per battery bank
//!
//! Each line is a bank of single-digit batteries. The bank's joltage is
//! the largest two-digit number readable by picking two digits in order;
//! part 1 sums the joltage over all banks.

use anyhow::Result;
use log::warn;

use crate::core::solver::Answers;

/// Largest two-digit value pickable from the line in reading order.
///
/// Scans left to right keeping a tens and a units digit: a digit bigger
/// than the current tens digit takes its place (and clears the units
/// digit) as long as at least one digit remains after it, otherwise it
/// competes for the units slot.
fn bank_joltage(line: &str) -> Option<i64> {
    let digits: Vec<i64> = line
        .chars()
        .map(|c| c.to_digit(10).map(i64::from))
        .collect::<Option<_>>()?;
    if digits.len() < 2 {
        return None;
    }

    let mut tens = digits[0];
    let mut units = digits[1];
    for (i, &digit) in digits.iter().enumerate().skip(2) {
        if digit > tens && i + 1 < digits.len() {
            tens = digit;
            units = 0;
        } else if digit > units {
            units = digit;
        }
    }

    Some(tens * 10 + units)
}

/// Sum the bank joltages; invalid lines are skipped with a warning.
pub fn solve(input: &str) -> Result<Answers> {
    let mut total = 0i64;

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match bank_joltage(line) {
            Some(value) => total += value,
            None => warn!(
                "skipping invalid line {}: expected two or more digits",
                index + 1
            ),
        }
    }

    Ok(Answers::single(total))
}
