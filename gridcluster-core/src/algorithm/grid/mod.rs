mod grid_based_algorithm;
mod grid_cell;
pub mod grid_ops;
mod grid_parameters;

pub use grid_based_algorithm::GridBasedAlgorithm;
pub use grid_cell::GridCell;
pub use grid_parameters::GridParameters;
