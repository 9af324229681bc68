mod grid_cluster_app;

pub use grid_cluster_app::{
    cluster_markers, summarize_markers, GridClusterApp, GridClusterOperation,
};
