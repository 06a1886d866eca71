use itertools::Itertools;
use miette::*;

use crate::tiles::Point;

/// Most rows a polygon may span; each row owns its own interval list.
pub const MAX_ROWS: usize = 1 << 20;

/// Inclusive span of allowed tiles within one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    fn between(a: i64, b: i64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }
}

/// Vertical polygon side covering rows `low..=high`.
struct Side {
    x: i64,
    low: i64,
    high: i64,
}

/// Axis-aligned rectangle spanned by two opposite corners, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn area(&self) -> u64 {
        let size = self.max - self.min;
        (size.x.unsigned_abs() + 1) * (size.y.unsigned_abs() + 1)
    }
}

/// The red/green region as merged row intervals, built with an even-odd
/// scanline over the polygon sides.
#[derive(Debug, Clone)]
pub struct Polygon {
    min_y: i64,
    rows: Vec<Vec<Interval>>,
}

impl Polygon {
    /// Builds the row intervals for the closed loop through `vertices`.
    ///
    /// Consecutive vertices (wrapping around) must share a row or a column.
    #[tracing::instrument(skip(vertices), fields(vertices = vertices.len()))]
    pub fn new(vertices: &[Point]) -> Result<Self> {
        let Some((min_y, max_y)) = vertices.iter().map(|p| p.y).minmax().into_option() else {
            return Ok(Self {
                min_y: 0,
                rows: Vec::new(),
            });
        };

        let Some(height) = max_y
            .checked_sub(min_y)
            .and_then(|span| usize::try_from(span).ok())
            .and_then(|span| span.checked_add(1))
            .filter(|&height| height <= MAX_ROWS)
        else {
            bail!(
                code = "day9::span",
                help = "the scanline keeps one entry per row between the lowest and highest tile",
                "tiles span rows {min_y} to {max_y}, more than {MAX_ROWS} rows"
            );
        };
        let mut rows = vec![Vec::new(); height];
        let mut sides = Vec::new();

        for (a, b) in vertices.iter().copied().circular_tuple_windows() {
            if a.y == b.y {
                // Horizontal sides are allowed tiles as they are
                rows[(a.y - min_y) as usize].push(Interval::between(a.x, b.x));
            } else if a.x == b.x {
                sides.push(Side {
                    x: a.x,
                    low: a.y.min(b.y),
                    high: a.y.max(b.y),
                });
            } else {
                bail!(
                    code = "day9::diagonal",
                    "tiles ({}, {}) and ({}, {}) are not in the same row or column",
                    a.x,
                    a.y,
                    b.x,
                    b.y
                );
            }
        }

        // Scanline between row y and y + 1: a side crosses it iff low <= y < high.
        let mut crossings = Vec::with_capacity(sides.len());
        for (offset, row) in rows.iter_mut().enumerate() {
            let y = min_y + offset as i64;

            crossings.clear();
            crossings.extend(
                sides
                    .iter()
                    .filter(|side| side.low <= y && y < side.high)
                    .map(|side| side.x),
            );
            crossings.sort_unstable();

            // Even-odd rule: inside between each pair of crossings
            row.extend(
                crossings
                    .chunks_exact(2)
                    .map(|pair| Interval::between(pair[0], pair[1])),
            );

            merge_intervals(row);
        }

        tracing::debug!(rows = rows.len(), sides = sides.len(), "built row intervals");
        Ok(Self { min_y, rows })
    }

    /// Merged intervals of row `y`; empty outside the polygon's rows.
    pub fn row(&self, y: i64) -> &[Interval] {
        match usize::try_from(y - self.min_y)
            .ok()
            .and_then(|idx| self.rows.get(idx))
        {
            Some(row) => row,
            None => &[],
        }
    }

    /// Whether tiles `start..=end` of row `y` are all red or green.
    pub fn covers(&self, y: i64, start: i64, end: i64) -> bool {
        let row = self.row(y);
        // Intervals are disjoint and sorted, so only the last one starting
        // at or before `start` can contain the span.
        let idx = row.partition_point(|interval| interval.start <= start);
        idx > 0 && row[idx - 1].end >= end
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        (rect.min.y..=rect.max.y).all(|y| self.covers(y, rect.min.x, rect.max.x))
    }
}

/// Sorts the row and coalesces overlapping or touching intervals.
fn merge_intervals(row: &mut Vec<Interval>) {
    row.sort_unstable_by_key(|interval| interval.start);
    row.dedup_by(|next, current| {
        if next.start <= current.end + 1 {
            current.end = current.end.max(next.end);
            true
        } else {
            false
        }
    });
}
