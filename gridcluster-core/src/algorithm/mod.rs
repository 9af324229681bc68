mod clustering_algorithm;
pub mod grid;
pub mod precaching;

pub use clustering_algorithm::Algorithm;
pub use grid::GridBasedAlgorithm;
pub use precaching::PreCachingAlgorithm;
