use gridcluster_core::model::GridClusterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridClusterCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading markers: {0}")]
    ReadError(String),
    #[error("failure writing clusters: {0}")]
    WriteError(String),
    #[error("failure clustering markers: {source}")]
    GridClusterError {
        #[from]
        source: GridClusterError,
    },
    #[error("failure during file operation: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
