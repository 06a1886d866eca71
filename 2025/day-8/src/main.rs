use miette::*;

use aoc2025_day_8::{parse::load_points, solve, ClusterConfig, NOT_CONNECTED};

const INPUT_PATH: &str = "input.txt";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let points = load_points(INPUT_PATH)?;
    let report = solve(&points, &ClusterConfig::default());
    println!("Part 1: {}", report.part1);
    println!("Part 2: {}", report.part2.unwrap_or(NOT_CONNECTED));
    Ok(())
}
