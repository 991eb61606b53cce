//! Console output formatting for puzzle answers
//!
//! The answer lines themselves stay plain (`Part 1: <n>`) so they can be
//! compared or piped; headers and the run summary carry the coloring.

use std::time::Duration;

use colored::Colorize;

use crate::core::solver::Answers;

/// Render the answer lines exactly as the puzzles expect them.
pub fn format_answers(answers: &Answers) -> String {
    let mut output = format!("Part 1: {}\n", answers.part1);
    if let Some(part2) = answers.part2 {
        output.push_str(&format!("Part 2: {part2}\n"));
    }
    output
}

/// Banner printed above one day's answers.
pub fn day_header(day: u32) -> String {
    format!(
        "{}\n{} {}\n{}",
        "=".repeat(80).bold(),
        "Results for day".cyan(),
        day,
        "=".repeat(80).bold()
    )
}

/// Closing summary for a run.
pub fn run_summary(days_solved: usize, elapsed: Duration) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Run Complete".bold()));
    output.push_str(&format!("{} {}\n", "Days solved:".green(), days_solved));
    output.push_str(&format!(
        "{} {:.2} seconds\n",
        "Time elapsed:".green(),
        elapsed.as_secs_f64()
    ));
    output
}
