mod cluster;
mod cluster_item;
mod grid_cluster_error;

pub use cluster::{Cluster, StaticCluster};
pub use cluster_item::ClusterItem;
pub use grid_cluster_error::GridClusterError;
