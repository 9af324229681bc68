use geo::{Coord, Point};
use std::f64::consts::PI;

/// projects WGS84 positions onto a square plane of side `world_width`.
///
/// longitude -180 maps to x = 0 and the north pole maps toward y = 0, so the
/// y axis grows southward the way screen coordinates do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalMercatorProjection {
    world_width: f64,
}

impl SphericalMercatorProjection {
    pub fn new(world_width: f64) -> SphericalMercatorProjection {
        SphericalMercatorProjection { world_width }
    }

    pub fn world_width(&self) -> f64 {
        self.world_width
    }

    /// projects a position (x = longitude, y = latitude) to the plane.
    pub fn to_point(&self, lat_lng: &Point<f64>) -> Coord<f64> {
        let x = lat_lng.x() / 360.0 + 0.5;
        let sin_y = lat_lng.y().to_radians().sin();
        let y = 0.5 * ((1.0 + sin_y) / (1.0 - sin_y)).ln() / -(2.0 * PI) + 0.5;
        Coord {
            x: x * self.world_width,
            y: y * self.world_width,
        }
    }

    /// inverse of [`SphericalMercatorProjection::to_point`].
    pub fn to_lat_lng(&self, point: &Coord<f64>) -> Point<f64> {
        let x = point.x / self.world_width - 0.5;
        let lng = x * 360.0;
        let y = 0.5 - point.y / self.world_width;
        let lat = 90.0 - ((-y * 2.0 * PI).exp().atan() * 2.0).to_degrees();
        Point::new(lng, lat)
    }
}
