mod cache_config;
mod grid_cluster_config;

pub use cache_config::CacheConfig;
pub use grid_cluster_config::GridClusterConfig;
