pub mod config;
pub mod coverage;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod obstacle;
pub mod pathfinding;
pub mod scenario;
pub mod terrain;
pub mod visibility;

pub use coverage::estimate_coverage;
pub use error::InputError;
pub use geometry::{Point, Rect, Segment};
pub use grid::TerrainGrid;
pub use obstacle::Obstacle;
pub use pathfinding::{find_path, Position};
pub use terrain::{CostTable, TerrainType};
pub use visibility::compute_visibility;
