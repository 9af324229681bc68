use super::grid_ops;
use crate::{model::GridClusterError, projection::CoordinatePolicy};
use serde::{Deserialize, Serialize};

/// tuning values for the grid algorithm.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct GridParameters {
    /// side length of a grid cell in projected pixels.
    pub grid_size: f64,
    /// side length of a map tile in pixels at zoom 0.
    pub tile_size: f64,
    /// requested zoom levels above this value are clamped down to it.
    pub max_zoom: f64,
    pub coordinate_policy: CoordinatePolicy,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            grid_size: grid_ops::GRID_SIZE,
            tile_size: grid_ops::TILE_SIZE,
            max_zoom: grid_ops::MAX_ZOOM,
            coordinate_policy: CoordinatePolicy::default(),
        }
    }
}

impl GridParameters {
    pub fn validate(&self) -> Result<(), GridClusterError> {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            Err(GridClusterError::ConfigurationError(format!(
                "grid_size must be a positive number, found {}",
                self.grid_size
            )))
        } else if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            Err(GridClusterError::ConfigurationError(format!(
                "tile_size must be a positive number, found {}",
                self.tile_size
            )))
        } else if !self.max_zoom.is_finite() {
            Err(GridClusterError::ConfigurationError(format!(
                "max_zoom must be finite, found {}",
                self.max_zoom
            )))
        } else {
            Ok(())
        }
    }
}
