use itertools::Itertools;
use miette::*;

use crate::{
    polygon::{Polygon, Rect},
    tiles::parse_tiles,
    Point,
};

/// Largest red-cornered rectangle made only of red or green tiles, together
/// with the two corners that span it.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn largest_inner_rect(points: &[Point]) -> Result<Option<(u64, Point, Point)>> {
    if points.len() < 2 {
        return Ok(None);
    }

    let polygon = Polygon::new(points)?;
    let mut best: Option<(u64, Point, Point)> = None;

    for (&a, &b) in points.iter().tuple_combinations() {
        let rect = Rect::from_corners(a, b);
        let area = rect.area();

        // Checking containment walks every row, so skip anything not bigger
        if best.is_some_and(|(best_area, _, _)| area <= best_area) {
            continue;
        }

        if polygon.contains(&rect) {
            best = Some((area, a, b));
        }
    }

    if let Some((area, a, b)) = best {
        tracing::info!(%a, %b, area, "best pair");
    }
    Ok(best)
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_tiles(input)?;

    let area = largest_inner_rect(&points)?.map_or(0, |(area, _, _)| area);
    Ok(area.to_string())
}
