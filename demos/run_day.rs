//! Simple example demonstrating how to use the solver library

use anyhow::Result;
use aoc2025::solve_file;

fn main() -> Result<()> {
    // Path to a small day 1 rotation list
    let input_path = "demos/sample_rotations.txt";

    // Create sample input
    std::fs::write(input_path, "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n")?;

    println!("Solving day 1 from {input_path}");

    let answers = solve_file(1, input_path)?;

    println!("Part 1: {}", answers.part1);
    if let Some(part2) = answers.part2 {
        println!("Part 2: {part2}");
    }

    Ok(())
}
