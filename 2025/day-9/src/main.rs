use miette::*;

use aoc2025_day_9::{part1::largest_rect, part2::largest_inner_rect, tiles::parse_tiles};

const INPUT_PATH: &str = "input.txt";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::fs::read_to_string(INPUT_PATH)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {INPUT_PATH}"))?;
    let points = parse_tiles(&input)?;

    let any = largest_rect(&points);
    // Logs the corners of the best pair on the way
    let inner = largest_inner_rect(&points)?.map_or(0, |(area, _, _)| area);

    println!("Part 1: {any}");
    println!("Part 2: {inner}");
    Ok(())
}
