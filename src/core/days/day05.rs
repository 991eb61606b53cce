//! Day 5: fresh ingredient ID ranges
//!
//! The input lists inclusive `start-end` freshness ranges, a blank line,
//! then one ingredient ID per line. Part 1 counts the listed IDs that
//! fall inside any range; part 2 counts every ID the merged ranges
//! cover.

use anyhow::Result;

use crate::core::solver::{Answers, PuzzleError};
use crate::utils::input::parse_number;

/// An inclusive freshness range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Range {
    start: i64,
    end: i64,
}

fn parse(input: &str) -> Result<(Vec<Range>, Vec<i64>), PuzzleError> {
    let mut lines = input.lines();

    let mut ranges = Vec::new();
    for raw in lines.by_ref() {
        let line = raw.trim();
        if line.is_empty() {
            break;
        }
        let (start, end) = line
            .split_once('-')
            .ok_or_else(|| PuzzleError::token(line, "expected start-end"))?;
        ranges.push(Range {
            start: parse_number(start)?,
            end: parse_number(end)?,
        });
    }
    if ranges.is_empty() {
        return Err(PuzzleError::EmptyInput);
    }

    let mut ids = Vec::new();
    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        ids.push(parse_number(line)?);
    }

    Ok((ranges, ids))
}

/// Sort and merge overlapping ranges. The IDs are far too large to
/// enumerate, so every later lookup works on this merged list.
fn merge(mut ranges: Vec<Range>) -> Vec<Range> {
    ranges.sort_unstable();

    let mut merged: Vec<Range> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Binary search over the merged, sorted ranges.
fn is_fresh(merged: &[Range], id: i64) -> bool {
    let idx = merged.partition_point(|range| range.start <= id);
    idx > 0 && id <= merged[idx - 1].end
}

pub fn solve(input: &str) -> Result<Answers> {
    let (ranges, ids) = parse(input)?;
    let merged = merge(ranges);

    let fresh_ids = ids.iter().filter(|&&id| is_fresh(&merged, id)).count() as i64;
    let coverage: i64 = merged.iter().map(|range| range.end - range.start + 1).sum();

    Ok(Answers::pair(fresh_ids, coverage))
}

#[cfg(test)]
mod tests {
    use super::*;

    static EXAMPLE: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n16\n32\n";

    #[test]
    fn test_merge_overlapping() {
        let merged = merge(vec![
            Range { start: 10, end: 14 },
            Range { start: 3, end: 5 },
            Range { start: 16, end: 20 },
            Range { start: 12, end: 18 },
        ]);
        assert_eq!(
            merged,
            vec![Range { start: 3, end: 5 }, Range { start: 10, end: 20 }]
        );
    }

    #[test]
    fn test_membership() {
        let merged = merge(vec![
            Range { start: 3, end: 5 },
            Range { start: 10, end: 20 },
        ]);
        assert!(is_fresh(&merged, 3));
        assert!(is_fresh(&merged, 20));
        assert!(!is_fresh(&merged, 2));
        assert!(!is_fresh(&merged, 8));
        assert!(!is_fresh(&merged, 21));
    }

    #[test]
    fn test_example() {
        let answers = solve(EXAMPLE).unwrap();
        assert_eq!(answers.part1, 3);
        assert_eq!(answers.part2, Some(14));
    }

    #[test]
    fn test_adjacent_ranges_stay_separate() {
        // 1-2 and 3-4 touch but do not overlap; coverage is unaffected.
        let answers = solve("1-2\n3-4\n\n3\n").unwrap();
        assert_eq!(answers.part1, 1);
        assert_eq!(answers.part2, Some(4));
    }

    #[test]
    fn test_missing_ranges_is_an_error() {
        assert!(solve("\n1\n2\n").is_err());
    }
}
