//! Day 9: largest rectangle between tiles
//!
//! Each line holds the x,y position of one red tile. Part 1 finds the
//! largest inclusive bounding-box area spanned by any pair of tiles.

use anyhow::Result;

use crate::core::solver::{Answers, PuzzleError};
use crate::utils::input::parse_number;

#[derive(Debug, Clone, Copy)]
struct Tile {
    x: i64,
    y: i64,
}

fn parse(input: &str) -> Result<Vec<Tile>, PuzzleError> {
    let mut tiles = Vec::new();
    for raw in input.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (x, y) = line
            .split_once(',')
            .ok_or_else(|| PuzzleError::token(line, "expected x,y"))?;
        tiles.push(Tile {
            x: parse_number(x)?,
            y: parse_number(y)?,
        });
    }
    Ok(tiles)
}

/// Inclusive area of the rectangle cornered by two tiles.
fn area(p: Tile, q: Tile) -> i64 {
    ((p.x - q.x).abs() + 1) * ((p.y - q.y).abs() + 1)
}

pub fn solve(input: &str) -> Result<Answers> {
    let tiles = parse(input)?;
    if tiles.is_empty() {
        return Err(PuzzleError::EmptyInput.into());
    }

    let mut max_area = 0i64;
    for i in 0..tiles.len() {
        for j in i + 1..tiles.len() {
            max_area = max_area.max(area(tiles[i], tiles[j]));
        }
    }

    Ok(Answers::single(max_area))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_inclusive() {
        let p = Tile { x: 0, y: 0 };
        let q = Tile { x: 4, y: 9 };
        assert_eq!(area(p, q), 50);
        assert_eq!(area(q, p), 50);
        assert_eq!(area(p, p), 1);
    }

    #[test]
    fn test_largest_pair_wins() {
        let answers = solve("0,0\n4,9\n2,3\n").unwrap();
        assert_eq!(answers.part1, 50);
        assert_eq!(answers.part2, None);
    }

    #[test]
    fn test_single_tile() {
        let answers = solve("5,5\n").unwrap();
        assert_eq!(answers.part1, 0);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(solve("\n").is_err());
    }
}
