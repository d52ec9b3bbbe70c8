// terrain holds the grid model and the flood algorithm
pub mod flood;
pub mod grid;

pub use flood::FloodSim;
pub use grid::{Point, TerrainError, TerrainGrid};
