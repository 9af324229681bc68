use super::GridParameters;
use crate::model::GridClusterError;

/// side length of a map tile in pixels at zoom 0.
pub const TILE_SIZE: f64 = 256.0;
/// side length of a grid cell in pixels, tuned for marker density.
pub const GRID_SIZE: f64 = 100.0;
/// highest zoom whose default grid keys fit an i64.
pub const MAX_ZOOM: f64 = 30.0;
/// floor(sqrt(i64::MAX)). beyond this, x * num_cells + y can overflow.
pub const MAX_NUM_CELLS: i64 = 3_037_000_499;

/// number of grid cells along one side of the world at this zoom.
/// always at least 1.
pub fn num_cells(zoom: f64, tile_size: f64, grid_size: f64) -> i64 {
    let cells = (tile_size * 2f64.powf(zoom) / grid_size).ceil() as i64;
    cells.max(1)
}

/// validates a requested zoom and computes the grid resolution for it.
/// zoom levels above the configured maximum are clamped.
pub fn resolve_num_cells(zoom: f64, parameters: &GridParameters) -> Result<i64, GridClusterError> {
    if !zoom.is_finite() {
        return Err(GridClusterError::InvalidZoom(zoom));
    }
    let effective_zoom = if zoom > parameters.max_zoom {
        log::warn!(
            "zoom {} exceeds max zoom {}, clamping",
            zoom,
            parameters.max_zoom
        );
        parameters.max_zoom
    } else {
        zoom
    };
    let cells = num_cells(effective_zoom, parameters.tile_size, parameters.grid_size);
    if cells > MAX_NUM_CELLS {
        Err(GridClusterError::GridTooFine {
            zoom: effective_zoom,
            num_cells: cells,
        })
    } else {
        Ok(cells)
    }
}
