use crate::model::GridClusterError;
use geo::Point;
use serde::{Deserialize, Serialize};

/// latitude at which the spherical mercator plane becomes square.
pub const MAX_LATITUDE: f64 = 85.05112877980659;

/// how item positions outside the projectable range are treated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatePolicy {
    /// latitude is clamped to the mercator limit and longitude wraps around
    /// the antimeridian.
    #[default]
    Clamp,
    /// positions outside of [-180, 180] x [-90, 90] are refused. accepted
    /// positions are still clamped to the mercator limit before projection.
    Reject,
}

impl CoordinatePolicy {
    /// validates a position and returns the position that should be projected.
    /// non-finite coordinates are always an error.
    pub fn apply(&self, position: &Point<f64>) -> Result<Point<f64>, GridClusterError> {
        let (lon, lat) = position.x_y();
        if !lon.is_finite() || !lat.is_finite() {
            return Err(invalid_position(lon, lat, "coordinates must be finite"));
        }
        match self {
            CoordinatePolicy::Clamp => Ok(normalize(lon, lat)),
            CoordinatePolicy::Reject => {
                if !(-90.0..=90.0).contains(&lat) {
                    Err(invalid_position(lon, lat, "latitude must be in [-90, 90]"))
                } else if !(-180.0..=180.0).contains(&lon) {
                    Err(invalid_position(lon, lat, "longitude must be in [-180, 180]"))
                } else {
                    Ok(normalize(lon, lat))
                }
            }
        }
    }
}

/// wraps a longitude into [-180, 180).
pub fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

fn normalize(lon: f64, lat: f64) -> Point<f64> {
    Point::new(wrap_longitude(lon), lat.clamp(-MAX_LATITUDE, MAX_LATITUDE))
}

fn invalid_position(lon: f64, lat: f64, reason: &str) -> GridClusterError {
    GridClusterError::InvalidPosition {
        lon,
        lat,
        reason: String::from(reason),
    }
}
