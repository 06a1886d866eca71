pub mod circuits;
pub mod dsu;
pub mod error;
pub mod graph;
pub mod parse;
pub mod part1;
pub mod part2;

pub use circuits::{Circuits, ClusterConfig, MergeOutcome, Phase};
pub use error::InputError;
pub use graph::Edge;

/// A junction box position in 3D space.
pub type Point = glam::I64Vec3;

/// Largest accepted absolute coordinate. Squared distances across the whole
/// range and products of two X coordinates stay within `i64`.
pub const COORDINATE_LIMIT: i64 = 1 << 29;

/// Printed in place of the part 2 answer when the boxes never end up in a
/// single circuit.
pub const NOT_CONNECTED: i64 = -1;

/// Both answers of a run, computed over one shared set of circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Product of the largest circuit sizes after the first connections.
    pub part1: usize,
    /// Product of the X coordinates joined by the final merge, if any.
    pub part2: Option<i64>,
}

/// Runs the threshold query and then keeps merging from the same state until
/// a single circuit remains.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn solve(points: &[Point], config: &ClusterConfig) -> Report {
    let mut circuits = Circuits::new(points);

    circuits.connect_closest(config.connections);
    let part1 = circuits.largest_product(config.largest);

    let part2 = match circuits.merge_until_single() {
        MergeOutcome::Connected(edge) => Some(circuits.x_product(edge)),
        MergeOutcome::Exhausted { .. } => None,
    };

    Report { part1, part2 }
}
