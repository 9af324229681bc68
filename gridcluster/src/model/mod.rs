mod cluster_row;
mod grid_cluster_cli_error;
mod marker_record;

pub use cluster_row::{ClusterRow, SummaryRow};
pub use grid_cluster_cli_error::GridClusterCliError;
pub use marker_record::MarkerRecord;
