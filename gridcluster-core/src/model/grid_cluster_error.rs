use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridClusterError {
    #[error("zoom level must be a finite number, found {0}")]
    InvalidZoom(f64),
    #[error("zoom level {zoom} produces {num_cells} cells per side, too many to assign cell keys")]
    GridTooFine { zoom: f64, num_cells: i64 },
    #[error("invalid item position (lon={lon}, lat={lat}): {reason}")]
    InvalidPosition { lon: f64, lat: f64, reason: String },
    #[error("invalid grid cluster configuration: {0}")]
    ConfigurationError(String),
    #[error("{0}")]
    InternalError(String),
}
