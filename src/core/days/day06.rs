//! Day 6: columnar math worksheet
//!
//! The worksheet lays one problem per column: number rows on top, an
//! operator row at the bottom, columns separated by a space. Part 1
//! folds each column's numbers with its operator. Part 2 re-reads each
//! problem's character span top-to-bottom, one digit column at a time,
//! and folds those numbers instead.

use anyhow::Result;

use crate::core::solver::{Answers, PuzzleError};
use crate::utils::input::parse_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
}

/// One worksheet column: its numbers, its operator, and the byte offset
/// of the operator within the operator row.
#[derive(Debug)]
struct Problem {
    numbers: Vec<i64>,
    op: Op,
    offset: usize,
}

/// Tokenize every row; the n-th token of a row belongs to problem n.
fn parse(rows: &[&str]) -> Result<Vec<Problem>, PuzzleError> {
    let mut problems: Vec<Problem> = Vec::new();

    for row in rows {
        let bytes = row.as_bytes();
        let mut pos = 0usize;
        let mut column = 0usize;

        while pos < bytes.len() {
            while pos < bytes.len() && bytes[pos] == b' ' {
                pos += 1;
            }
            if pos == bytes.len() {
                break;
            }

            if column >= problems.len() {
                problems.push(Problem {
                    numbers: Vec::new(),
                    op: Op::Add,
                    offset: 0,
                });
            }

            if bytes[pos].is_ascii_digit() {
                let start = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                problems[column].numbers.push(parse_number(&row[start..pos])?);
            } else {
                problems[column].op = match bytes[pos] {
                    b'+' => Op::Add,
                    b'*' => Op::Mul,
                    other => {
                        return Err(PuzzleError::token(
                            (other as char).to_string(),
                            "expected '+' or '*'",
                        ))
                    }
                };
                problems[column].offset = pos;
                pos += 1;
            }

            column += 1;
        }
    }

    Ok(problems)
}

fn fold_problem(problem: &Problem) -> i64 {
    match problem.op {
        Op::Mul => problem.numbers.iter().product(),
        Op::Add => problem.numbers.iter().sum(),
    }
}

/// Part 2: inside each problem's span (its operator offset up to one
/// column before the next problem's), every character column read
/// top-to-bottom is a number; fold them with the problem's operator.
fn column_totals(rows: &[&str], problems: &[Problem]) -> i64 {
    let Some((op_row, numeric_rows)) = rows.split_last() else {
        return 0;
    };

    let mut total = 0i64;
    for (i, problem) in problems.iter().enumerate() {
        let span_end = match problems.get(i + 1) {
            Some(next) => next.offset.saturating_sub(1),
            None => op_row.len(),
        };

        let mut result = match problem.op {
            Op::Mul => 1i64,
            Op::Add => 0i64,
        };
        for column in problem.offset..span_end {
            let mut number = 0i64;
            for row in numeric_rows {
                if let Some(&byte) = row.as_bytes().get(column) {
                    if byte.is_ascii_digit() {
                        number = number * 10 + i64::from(byte - b'0');
                    }
                }
            }
            result = match problem.op {
                Op::Mul => result * number,
                Op::Add => result + number,
            };
        }

        total += result;
    }

    total
}

pub fn solve(input: &str) -> Result<Answers> {
    let mut rows: Vec<&str> = input.lines().collect();
    while rows.last().is_some_and(|row| row.trim().is_empty()) {
        rows.pop();
    }
    if rows.len() < 2 {
        return Err(PuzzleError::EmptyInput.into());
    }

    let problems = parse(&rows)?;
    let token_total = problems.iter().map(fold_problem).sum();
    let column_total = column_totals(&rows, &problems);

    Ok(Answers::pair(token_total, column_total))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Column spans depend on the padding, so the fixture keeps the
    // trailing spaces of the original worksheet layout.
    static EXAMPLE: &str = concat!(
        "123 328  51 64 \n",
        " 45 64  387 23 \n",
        "  6 98  215 314\n",
        "*   +   *   +  \n",
    );

    #[test]
    fn test_example_token_total() {
        let answers = solve(EXAMPLE).unwrap();
        assert_eq!(answers.part1, 4277556);
    }

    #[test]
    fn test_example_column_total() {
        let answers = solve(EXAMPLE).unwrap();
        assert_eq!(answers.part2, Some(3263827));
    }

    #[test]
    fn test_single_column() {
        // 2 + 3 = 5 by tokens; columns "2" and "3" read down give the
        // same digits here.
        let answers = solve("2\n3\n+\n").unwrap();
        assert_eq!(answers.part1, 5);
        assert_eq!(answers.part2, Some(23));
    }

    #[test]
    fn test_unknown_operator_is_an_error() {
        assert!(solve("1 2\n3 4\n- /\n").is_err());
    }
}
