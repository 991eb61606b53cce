//! Day 10: light panel initialization
//!
//! Each manual line shows a target light diagram in brackets, the wiring
//! of each button in parentheses, and the joltage counters in braces.
//! Pressing a button toggles its lights. Part 1 sums, over all manuals,
//! the fewest presses turning the all-off panel into the target.

use std::collections::VecDeque;

use anyhow::Result;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::core::solver::{Answers, PuzzleError};
use crate::utils::input::parse_number;

lazy_static! {
    static ref LIGHTS_RE: Regex = Regex::new(r"\[([.#]+)\]").unwrap();
    static ref BUTTON_RE: Regex = Regex::new(r"\(([0-9,]+)\)").unwrap();
    static ref JOLTAGE_RE: Regex = Regex::new(r"\{([0-9,]*)\}").unwrap();
}

/// One machine manual. Lights are packed into a bitmask with the
/// leftmost light in the highest bit; each button is the mask of the
/// lights it toggles.
#[derive(Debug)]
struct Manual {
    lights: u32,
    light_count: u32,
    buttons: Vec<u32>,
    joltages: Vec<i64>,
}

fn parse_manual(line: &str) -> Result<Manual, PuzzleError> {
    let diagram = LIGHTS_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| PuzzleError::token(line, "missing [..##] light diagram"))?
        .as_str();
    let light_count = diagram.len() as u32;

    let mut lights = 0u32;
    for (i, c) in diagram.chars().enumerate() {
        if c == '#' {
            lights |= 1 << (light_count - 1 - i as u32);
        }
    }

    let mut buttons = Vec::new();
    for caps in BUTTON_RE.captures_iter(line) {
        let mut mask = 0u32;
        for token in caps[1].split(',') {
            let index = parse_number(token)? as u32;
            if index >= light_count {
                return Err(PuzzleError::token(token, "button index out of range"));
            }
            mask |= 1 << (light_count - 1 - index);
        }
        buttons.push(mask);
    }

    let joltages = match JOLTAGE_RE.captures(line) {
        Some(caps) => caps[1]
            .split(',')
            .filter(|token| !token.is_empty())
            .map(parse_number)
            .collect::<Result<Vec<i64>, PuzzleError>>()?,
        None => Vec::new(),
    };

    Ok(Manual {
        lights,
        light_count,
        buttons,
        joltages,
    })
}

/// Fewest presses from the all-off state to the target, breadth-first
/// over the XOR state space, one press layer at a time.
fn min_presses(manual: &Manual) -> Option<i64> {
    let state_count = 1usize << manual.light_count;
    let mut visited = vec![false; state_count];
    let mut queue = VecDeque::new();
    visited[0] = true;
    queue.push_back(0u32);

    let mut presses = 0i64;
    while !queue.is_empty() {
        presses += 1;
        for _ in 0..queue.len() {
            let Some(current) = queue.pop_front() else {
                break;
            };
            for &button in &manual.buttons {
                let next = current ^ button;
                if next == manual.lights {
                    return Some(presses);
                }
                if !visited[next as usize] {
                    visited[next as usize] = true;
                    queue.push_back(next);
                }
            }
        }
    }

    None
}

pub fn solve(input: &str) -> Result<Answers> {
    let mut total_presses = 0i64;

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let manual = parse_manual(line)?;
        debug!(
            "line {}: {} lights, {} buttons, {} joltage counters",
            index + 1,
            manual.light_count,
            manual.buttons.len(),
            manual.joltages.len()
        );
        if manual.lights == 0 {
            continue;
        }

        match min_presses(&manual) {
            Some(presses) => total_presses += presses,
            None => warn!("line {}: target light pattern is unreachable", index + 1),
        }
    }

    Ok(Answers::single(total_presses))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_layout() {
        let manual = parse_manual("[.#] (0) {5}").unwrap();
        assert_eq!(manual.light_count, 2);
        assert_eq!(manual.lights, 0b01);
        assert_eq!(manual.buttons, vec![0b10]);
        assert_eq!(manual.joltages, vec![5]);
    }

    #[test]
    fn test_single_press() {
        let manual = parse_manual("[#.] (0) {7}").unwrap();
        assert_eq!(min_presses(&manual), Some(1));
    }

    #[test]
    fn test_two_presses() {
        // Each button toggles one light, so both must be pressed once.
        let manual = parse_manual("[##] (0) (1) {3,5}").unwrap();
        assert_eq!(min_presses(&manual), Some(2));
    }

    #[test]
    fn test_unreachable_target() {
        let manual = parse_manual("[#.] (1) {2}").unwrap();
        assert_eq!(min_presses(&manual), None);
    }

    #[test]
    fn test_manual_sums() {
        let input = "[#.] (0) {7}\n[##] (0) (1) {3,5}\n[..] (0) {1}\n";
        let answers = solve(input).unwrap();
        assert_eq!(answers.part1, 3);
        assert_eq!(answers.part2, None);
    }

    #[test]
    fn test_missing_diagram_is_an_error() {
        assert!(parse_manual("(0,1) {2}").is_err());
    }
}
