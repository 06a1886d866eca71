use itertools::Itertools;

use crate::{
    dsu::Dsu,
    graph::{build_edges, Edge},
    Point,
};

/// Knobs for the two circuit queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterConfig {
    /// How many of the closest pairs the threshold query connects.
    pub connections: usize,
    /// How many of the largest circuits get multiplied together.
    pub largest: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            connections: 1000,
            largest: 3,
        }
    }
}

/// Where the circuits are in their lifecycle. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initialized,
    PartiallyMerged,
    /// A merge brought everything into one circuit.
    FullyMerged,
    /// Every edge was consumed without reaching a single circuit.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The edge whose union left exactly one circuit.
    Connected(Edge),
    Exhausted { components: usize },
}

/// Junction boxes wired together closest-first, Kruskal style.
pub struct Circuits<'a> {
    points: &'a [Point],
    edges: Vec<Edge>,
    dsu: Dsu,
    /// Index of the next edge to consider.
    cursor: usize,
    final_merge: Option<Edge>,
    phase: Phase,
}

impl<'a> Circuits<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            edges: build_edges(points),
            dsu: Dsu::new(points.len()),
            cursor: 0,
            final_merge: None,
            phase: Phase::Initialized,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of separate circuits right now.
    pub fn components(&self) -> usize {
        self.dsu.components()
    }

    /// Considers the next `count` closest pairs (fewer if the edges run out).
    /// Returns how many of them joined two different circuits.
    pub fn connect_closest(&mut self, count: usize) -> usize {
        let end = self.cursor.saturating_add(count).min(self.edges.len());
        let mut merged = 0;

        while self.cursor < end {
            if self.connect_next() {
                merged += 1;
            }
        }

        self.settle();
        tracing::debug!(
            merged,
            considered = end,
            components = self.components(),
            phase = ?self.phase,
            "connected closest pairs"
        );
        merged
    }

    /// Keeps connecting pairs in order until a single circuit remains.
    ///
    /// If the final merge already happened earlier (for instance inside the
    /// threshold prefix) that edge is returned again.
    pub fn merge_until_single(&mut self) -> MergeOutcome {
        while self.final_merge.is_none() && self.cursor < self.edges.len() {
            self.connect_next();
        }

        self.settle();
        match self.final_merge {
            Some(edge) => {
                tracing::info!(a = edge.a, b = edge.b, distance = edge.distance, "final merge");
                MergeOutcome::Connected(edge)
            }
            None => {
                tracing::warn!(
                    components = self.components(),
                    "ran out of edges before everything connected"
                );
                MergeOutcome::Exhausted {
                    components: self.components(),
                }
            }
        }
    }

    /// Sizes of the biggest `count` circuits, largest first.
    pub fn largest_circuits(&mut self, count: usize) -> Vec<usize> {
        let dsu = &mut self.dsu;
        let mut sizes = (0..dsu.len())
            .map(|i| dsu.find(i))
            .counts()
            .into_values()
            .collect::<Vec<_>>();

        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.truncate(count);
        sizes
    }

    /// Product of the `count` largest circuit sizes, or 0 with no boxes at all.
    pub fn largest_product(&mut self, count: usize) -> usize {
        let sizes = self.largest_circuits(count);
        if sizes.is_empty() {
            return 0;
        }
        sizes.iter().product()
    }

    /// Product of the X coordinates of both ends of `edge`.
    pub fn x_product(&self, edge: Edge) -> i64 {
        self.points[edge.a].x * self.points[edge.b].x
    }

    fn connect_next(&mut self) -> bool {
        let edge = self.edges[self.cursor];
        self.cursor += 1;

        let merged = self.dsu.union(edge.a, edge.b);
        if merged && self.dsu.components() == 1 {
            self.final_merge = Some(edge);
        }
        merged
    }

    fn settle(&mut self) {
        self.phase = if self.final_merge.is_some() {
            Phase::FullyMerged
        } else if self.cursor == self.edges.len() {
            Phase::Exhausted
        } else {
            Phase::PartiallyMerged
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const SAMPLE: &str = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

    fn scenario() -> Vec<Point> {
        vec![
            Point::new(0, 0, 0),
            Point::new(1, 0, 0),
            Point::new(0, 1, 0),
            Point::new(10, 10, 10),
        ]
    }

    #[test]
    fn threshold_prefix_on_small_cluster() {
        let points = scenario();
        let mut circuits = Circuits::new(&points);
        assert_eq!(circuits.phase(), Phase::Initialized);
        assert_eq!(circuits.edges().len(), 6);
        assert_eq!(circuits.components(), 4);

        assert_eq!(circuits.connect_closest(2), 2);
        assert_eq!(circuits.phase(), Phase::PartiallyMerged);
        assert_eq!(circuits.largest_circuits(3), vec![3, 1]);
        assert_eq!(circuits.largest_product(3), 3);
    }

    #[test]
    fn full_merge_joins_the_far_singleton_last() {
        let points = scenario();
        let mut circuits = Circuits::new(&points);
        circuits.connect_closest(2);

        let outcome = circuits.merge_until_single();
        assert_eq!(
            outcome,
            MergeOutcome::Connected(Edge {
                a: 1,
                b: 3,
                distance: 281
            })
        );
        assert_eq!(circuits.phase(), Phase::FullyMerged);
        assert_eq!(circuits.components(), 1);
        assert_eq!(circuits.x_product(Edge { a: 1, b: 3, distance: 281 }), 10);
    }

    #[test]
    fn threshold_beyond_edge_count_does_not_panic() {
        let points = scenario();
        let mut circuits = Circuits::new(&points);

        assert_eq!(circuits.connect_closest(usize::MAX), 3);
        assert_eq!(circuits.phase(), Phase::FullyMerged);
        assert_eq!(circuits.largest_product(3), 4);

        // The final merge happened inside the prefix and is still reported.
        assert!(matches!(
            circuits.merge_until_single(),
            MergeOutcome::Connected(Edge { a: 1, b: 3, .. })
        ));
    }

    #[rstest]
    #[case::no_points(&[], 0, 0)]
    #[case::single_point(&[Point::new(1, 2, 3)], 1, 1)]
    fn degenerate_sets_exhaust(
        #[case] points: &[Point],
        #[case] product: usize,
        #[case] components: usize,
    ) {
        let mut circuits = Circuits::new(points);
        circuits.connect_closest(1000);
        assert_eq!(circuits.phase(), Phase::Exhausted);
        assert_eq!(circuits.largest_product(3), product);
        assert_eq!(
            circuits.merge_until_single(),
            MergeOutcome::Exhausted { components }
        );
    }

    #[test]
    fn zero_connections_leave_singletons() {
        let points = scenario();
        let mut circuits = Circuits::new(&points);
        assert_eq!(circuits.connect_closest(0), 0);
        assert_eq!(circuits.phase(), Phase::PartiallyMerged);
        assert_eq!(circuits.largest_circuits(10), vec![1, 1, 1, 1]);
    }

    #[test]
    fn sample_after_ten_connections() -> miette::Result<()> {
        let points = crate::parse::parse_points(SAMPLE)?;
        let mut circuits = Circuits::new(&points);
        circuits.connect_closest(10);

        assert_eq!(circuits.largest_circuits(3), vec![5, 4, 2]);
        assert_eq!(circuits.largest_product(3), 40);
        assert_eq!(circuits.components(), 11);
        Ok(())
    }

    #[test]
    fn sample_final_merge() -> miette::Result<()> {
        let points = crate::parse::parse_points(SAMPLE)?;
        let mut circuits = Circuits::new(&points);
        circuits.connect_closest(10);

        let MergeOutcome::Connected(edge) = circuits.merge_until_single() else {
            miette::bail!("sample should connect");
        };
        assert_eq!(circuits.x_product(edge), 25272);
        Ok(())
    }
}
