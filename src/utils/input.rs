//! Input handling utilities
//!
//! This module provides the conventional input file locations, file
//! reading with proper error context, the shared number-token parser,
//! and the rectangular byte grid used by the grid-based days.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::core::solver::PuzzleError;

/// Conventional input location for a day: `<dir>/input_NN.txt`.
pub fn default_input_path(inputs_dir: &Path, day: u32) -> PathBuf {
    inputs_dir.join(format!("input_{day:02}.txt"))
}

/// Read a puzzle input into a string.
///
/// # Arguments
///
/// * `path` - Path to the input file
///
/// # Returns
///
/// The file contents, or an error naming the path that failed.
pub fn read_input(path: &Path) -> Result<String> {
    debug!("reading puzzle input from {}", path.display());
    fs::read_to_string(path)
        .with_context(|| format!("failed to read puzzle input: {}", path.display()))
}

/// Parse a decimal integer token with a typed error.
pub fn parse_number(token: &str) -> Result<i64, PuzzleError> {
    let token = token.trim();
    token
        .parse()
        .map_err(|_| PuzzleError::token(token, "expected a decimal integer"))
}

/// Rectangular byte grid parsed from newline-separated rows.
///
/// Coordinates are signed so callers can probe neighbours without
/// wrapping; out-of-bounds reads simply return `None`.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<u8>>,
    pub width: i64,
    pub height: i64,
}

impl Grid {
    /// Build a grid from the input text, skipping blank lines. The
    /// width is taken from the first row.
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let rows: Vec<Vec<u8>> = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.as_bytes().to_vec())
            .collect();
        if rows.is_empty() {
            return Err(PuzzleError::EmptyInput);
        }

        let width = rows[0].len() as i64;
        let height = rows.len() as i64;
        Ok(Self {
            rows,
            width,
            height,
        })
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Cell at (x, y), or `None` outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    pub fn set(&mut self, x: i64, y: i64, value: u8) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(cell) = self
            .rows
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *cell = value;
        }
    }

    /// Number of the 8 neighbours of (x, y) holding `value`.
    pub fn neighbour_count(&self, x: i64, y: i64, value: u8) -> usize {
        const DIRS: [(i64, i64); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        DIRS.into_iter()
            .filter(|&(dx, dy)| self.get(x + dx, y + dy) == Some(value))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_path() {
        let path = default_input_path(Path::new("inputs"), 3);
        assert_eq!(path, PathBuf::from("inputs/input_03.txt"));
        let path = default_input_path(Path::new("inputs"), 10);
        assert_eq!(path, PathBuf::from("inputs/input_10.txt"));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 ").unwrap(), 42);
        assert!(parse_number("4x2").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_grid_bounds() {
        let grid = Grid::parse("ab\ncd\n").unwrap();
        assert_eq!(grid.width, 2);
        assert_eq!(grid.height, 2);
        assert_eq!(grid.get(0, 0), Some(b'a'));
        assert_eq!(grid.get(1, 1), Some(b'd'));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(2, 0), None);
        assert!(grid.in_bounds(1, 1));
        assert!(!grid.in_bounds(2, 0));
        assert!(!grid.in_bounds(0, -1));
    }

    #[test]
    fn test_grid_set() {
        let mut grid = Grid::parse("ab\ncd\n").unwrap();
        grid.set(1, 0, b'x');
        assert_eq!(grid.get(1, 0), Some(b'x'));
        grid.set(5, 5, b'x');
    }

    #[test]
    fn test_neighbour_count() {
        let grid = Grid::parse("@@@\n@.@\n@@@\n").unwrap();
        assert_eq!(grid.neighbour_count(1, 1, b'@'), 8);
        assert_eq!(grid.neighbour_count(0, 0, b'@'), 2);
    }

    #[test]
    fn test_empty_grid_is_an_error() {
        assert!(Grid::parse("\n\n").is_err());
    }
}
