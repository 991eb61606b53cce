//! Day 7: tachyon beam splitting
//!
//! A beam drops from the source `S` straight down the grid. A splitter
//! `^` stops it and emits one beam to each diagonal cell below. Part 1
//! counts splitter activations; part 2 sums the beam counts arriving in
//! the bottom row.

use anyhow::Result;

use crate::core::solver::Answers;
use crate::utils::input::Grid;

const SOURCE: u8 = b'S';
const SPLITTER: u8 = b'^';

/// Splitter marker inside the beam lattice; beam counts are positive.
const SPLITTER_CELL: i64 = -1;

pub fn solve(input: &str) -> Result<Answers> {
    let grid = Grid::parse(input)?;
    let width = grid.width as usize;
    let height = grid.height as usize;

    let mut lattice = vec![0i64; width * height];
    for y in 0..height {
        for x in 0..width {
            lattice[y * width + x] = match grid.get(x as i64, y as i64) {
                Some(SOURCE) => 1,
                Some(SPLITTER) => SPLITTER_CELL,
                _ => 0,
            };
        }
    }

    // Sweep top to bottom, pushing each cell's beams one row down.
    let mut splits = 0i64;
    for y in 0..height.saturating_sub(1) {
        for x in 0..width {
            let beams = lattice[y * width + x];
            if beams <= 0 {
                continue;
            }

            let below = (y + 1) * width + x;
            if lattice[below] == SPLITTER_CELL {
                if x + 1 < width {
                    lattice[below + 1] += beams;
                }
                if x > 0 {
                    lattice[below - 1] += beams;
                }
                splits += 1;
            } else {
                lattice[below] += beams;
            }
        }
    }

    let bottom = (height - 1) * width;
    let timelines: i64 = lattice[bottom..bottom + width].iter().sum();

    Ok(Answers::pair(splits, timelines))
}
