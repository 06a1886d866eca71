use miette::*;

use aoc2025_day_7::Manifold;

const INPUT_PATH: &str = "input.txt";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string(INPUT_PATH)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {INPUT_PATH}"))?;

    let stats = input.parse::<Manifold>()?.simulate()?;
    println!("Part 1: {}", stats.splits);
    println!("Part 2: {}", stats.timelines);
    Ok(())
}
