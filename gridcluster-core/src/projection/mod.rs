mod coordinate_policy;
mod spherical_mercator;

pub use coordinate_policy::{wrap_longitude, CoordinatePolicy, MAX_LATITUDE};
pub use spherical_mercator::SphericalMercatorProjection;
