//! Day 2: invalid product ID sums
//!
//! The input is one line of comma-separated inclusive ID ranges. An ID is
//! suspect when its decimal form is a repeated digit sequence: part 1
//! sums the IDs made of their first half written exactly twice, part 2
//! sums the IDs made of any shorter sequence repeated to full length.

use anyhow::Result;

use crate::core::solver::{Answers, PuzzleError};
use crate::utils::input::parse_number;

/// An inclusive ID range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IdRange {
    start: i64,
    end: i64,
}

fn parse_ranges(input: &str) -> Result<Vec<IdRange>, PuzzleError> {
    input
        .trim()
        .split(',')
        .map(|token| {
            let token = token.trim();
            let (start, end) = token
                .split_once('-')
                .ok_or_else(|| PuzzleError::token(token, "expected start-end"))?;
            Ok(IdRange {
                start: parse_number(start)?,
                end: parse_number(end)?,
            })
        })
        .collect()
}

/// An ID made of its first half written twice, e.g. "1212".
fn is_half_repeated(id: &str) -> bool {
    if id.len() % 2 != 0 {
        return false;
    }
    let half = id.len() / 2;
    id[..half] == id[half..]
}

/// An ID made of some sequence repeated at least twice, e.g. "123123"
/// or "111111". Checks every prefix length dividing the full length.
fn is_repeated(id: &str) -> bool {
    let n = id.len();
    for k in 1..=n / 2 {
        if n % k == 0 && id[..k].repeat(n / k) == id {
            return true;
        }
    }
    false
}

/// Sum the suspect IDs over every range under both predicates.
pub fn solve(input: &str) -> Result<Answers> {
    if input.trim().is_empty() {
        return Err(PuzzleError::EmptyInput.into());
    }
    let ranges = parse_ranges(input)?;

    let mut half_repeated_sum = 0i64;
    let mut repeated_sum = 0i64;

    for range in &ranges {
        for id in range.start..=range.end {
            let digits = id.to_string();
            if is_half_repeated(&digits) {
                half_repeated_sum += id;
            }
            if is_repeated(&digits) {
                repeated_sum += id;
            }
        }
    }

    Ok(Answers::pair(half_repeated_sum, repeated_sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    static EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

    #[test]
    fn test_half_repeated_predicate() {
        assert!(is_half_repeated("1212"));
        assert!(is_half_repeated("11"));
        assert!(!is_half_repeated("123"));
        assert!(!is_half_repeated("1213"));
    }

    #[test]
    fn test_repeated_predicate() {
        assert!(is_repeated("123123"));
        assert!(is_repeated("1212"));
        assert!(is_repeated("111111111111111"));
        assert!(!is_repeated("12345"));
        assert!(!is_repeated("7"));
    }

    #[test]
    fn test_example_sums() {
        let answers = solve(EXAMPLE).unwrap();
        assert_eq!(answers.part1, 1227775554);
        assert_eq!(answers.part2, Some(4174379265));
    }

    #[test]
    fn test_small_range_by_hand() {
        // 11..=22 holds exactly two repeated IDs: 11 and 22.
        let answers = solve("11-22").unwrap();
        assert_eq!(answers.part1, 33);
        assert_eq!(answers.part2, Some(33));
    }

    #[test]
    fn test_malformed_tokens_are_errors() {
        assert!(solve("11-22,abc").is_err());
        assert!(solve("1122").is_err());
    }
}
