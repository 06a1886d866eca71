pub mod part1;
pub mod part2;
pub mod polygon;
pub mod tiles;

pub use tiles::Point;
