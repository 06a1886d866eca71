use itertools::Itertools;
use miette::*;

use crate::{polygon::Rect, tiles::parse_tiles, Point};

/// Largest rectangle with red tiles in two opposite corners, ignoring what
/// lies in between.
pub fn largest_rect(points: &[Point]) -> u64 {
    points
        .iter()
        .tuple_combinations()
        .map(|(&p1, &p2)| Rect::from_corners(p1, p2).area())
        .max()
        .unwrap_or(0)
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_tiles(input)?;
    Ok(largest_rect(&points).to_string())
}
