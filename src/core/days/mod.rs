//! One module per puzzle day
//!
//! Every module exposes `solve(&str) -> Result<Answers>` plus the parsing
//! and per-part helpers the day needs; nothing is shared between days
//! beyond the types in `core::solver` and the helpers in `utils`.

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
