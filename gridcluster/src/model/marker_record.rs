use geo::Point;
use gridcluster_core::model::ClusterItem;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// a row of the marker input file, `id,lon,lat`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub id: String,
    pub lon: OrderedFloat<f64>,
    pub lat: OrderedFloat<f64>,
}

impl MarkerRecord {
    pub fn new(id: &str, lon: f64, lat: f64) -> MarkerRecord {
        MarkerRecord {
            id: String::from(id),
            lon: OrderedFloat(lon),
            lat: OrderedFloat(lat),
        }
    }
}

impl ClusterItem for MarkerRecord {
    fn position(&self) -> Point<f64> {
        Point::new(self.lon.into_inner(), self.lat.into_inner())
    }
}
