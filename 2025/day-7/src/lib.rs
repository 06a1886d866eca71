pub mod manifold;
pub mod part1;
pub mod part2;

pub use manifold::{BeamStats, Manifold};
