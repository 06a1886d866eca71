use itertools::Itertools;

use crate::Point;

/// A candidate connection between two junction boxes, `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    /// Squared Euclidean distance; only ever compared, so no square root.
    pub distance: i64,
}

/// Squared Euclidean distance. Cannot overflow for coordinates within
/// `±COORDINATE_LIMIT`, which the loader enforces.
pub fn distance_squared(p: Point, q: Point) -> i64 {
    let delta = p - q;
    delta.dot(delta)
}

/// Builds every unordered pair of distinct points, closest first.
///
/// Equal distances keep generation order (`a`, then `b`), so the order is
/// fully determined by the input.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn build_edges(points: &[Point]) -> Vec<Edge> {
    let mut edges = (0..points.len())
        .tuple_combinations()
        .map(|(a, b)| Edge {
            a,
            b,
            distance: distance_squared(points[a], points[b]),
        })
        .collect::<Vec<_>>();

    edges.sort_unstable_by_key(|edge| (edge.distance, edge.a, edge.b));

    tracing::debug!(edges = edges.len(), "built pairwise connections");
    edges
}
