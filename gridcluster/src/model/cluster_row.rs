use super::MarkerRecord;
use geo::Point;
use gridcluster_core::model::{Cluster, StaticCluster};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::json;
use wkt::ToWkt;

/// output record describing a single cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRow {
    pub cluster_id: usize,
    pub lon: f64,
    pub lat: f64,
    pub size: usize,
    /// member ids joined by '-'
    pub members: String,
    /// centroid as WKT
    pub geometry: String,
}

impl ClusterRow {
    pub fn new(cluster_id: usize, cluster: &StaticCluster<MarkerRecord>) -> ClusterRow {
        let position = cluster.position();
        ClusterRow {
            cluster_id,
            lon: position.x(),
            lat: position.y(),
            size: cluster.size(),
            members: cluster.items().iter().map(|m| &m.id).join("-"),
            geometry: position.to_wkt().to_string(),
        }
    }

    /// point feature at the cluster centroid, with the remaining fields as properties.
    pub fn to_feature(&self) -> geojson::Feature {
        let point = Point::new(self.lon, self.lat);
        let mut properties = geojson::JsonObject::new();
        properties.insert(String::from("cluster_id"), json![self.cluster_id]);
        properties.insert(String::from("size"), json![self.size]);
        properties.insert(String::from("members"), json![self.members]);
        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(&point))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// cluster statistics for one zoom level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub zoom: i64,
    pub num_cells: i64,
    pub clusters: usize,
    pub largest_cluster: usize,
}
