//! Day 4: accessible paper rolls
//!
//! The input is a grid of paper rolls (`@`) and empty floor (`.`). A
//! roll is accessible when fewer than 4 of its 8 neighbours are rolls.
//! Part 1 counts the accessible rolls as-is; part 2 keeps removing
//! accessible rolls until no more can be taken and counts the total.

use anyhow::Result;

use crate::core::solver::Answers;
use crate::utils::input::Grid;

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';

fn is_accessible(grid: &Grid, x: i64, y: i64) -> bool {
    grid.get(x, y) == Some(ROLL) && grid.neighbour_count(x, y, ROLL) < 4
}

fn count_accessible(grid: &Grid) -> i64 {
    let mut count = 0;
    for y in 0..grid.height {
        for x in 0..grid.width {
            if is_accessible(grid, x, y) {
                count += 1;
            }
        }
    }
    count
}

/// Remove accessible rolls in place, pass after pass, until a pass takes
/// nothing. Removals are visible to cells scanned later in the same
/// pass (row-major order).
fn remove_until_stable(grid: &mut Grid) -> i64 {
    let mut removed_total = 0;
    loop {
        let mut removed_any = false;
        for y in 0..grid.height {
            for x in 0..grid.width {
                if is_accessible(grid, x, y) {
                    grid.set(x, y, EMPTY);
                    removed_any = true;
                    removed_total += 1;
                }
            }
        }
        if !removed_any {
            return removed_total;
        }
    }
}

pub fn solve(input: &str) -> Result<Answers> {
    let mut grid = Grid::parse(input)?;
    let accessible_now = count_accessible(&grid);
    let removed = remove_until_stable(&mut grid);
    Ok(Answers::pair(accessible_now, removed))
}
