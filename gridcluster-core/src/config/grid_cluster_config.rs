use super::CacheConfig;
use crate::{
    algorithm::{grid::GridParameters, Algorithm, GridBasedAlgorithm, PreCachingAlgorithm},
    model::{ClusterItem, GridClusterError},
};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// defines the clustering algorithm to build. every field is optional.
///
/// ```toml
/// grid_size = 100.0
/// tile_size = 256.0
/// max_zoom = 30.0
/// coordinate_policy = "clamp"
///
/// [cache]
/// capacity = 5
/// precache_neighbors = false
/// ```
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct GridClusterConfig {
    #[serde(flatten)]
    pub grid: GridParameters,
    /// when present, results are cached per integer zoom level
    #[serde(default)]
    pub cache: Option<CacheConfig>,
}

impl GridClusterConfig {
    pub fn build<T>(&self) -> Result<Box<dyn Algorithm<T>>, GridClusterError>
    where
        T: ClusterItem + Eq + Hash + Clone + Send + 'static,
    {
        let grid = GridBasedAlgorithm::new(self.grid)?;
        match &self.cache {
            None => Ok(Box::new(grid)),
            Some(cache) => {
                let cached = PreCachingAlgorithm::new(
                    Box::new(grid),
                    cache.capacity,
                    cache.precache_neighbors,
                )?;
                Ok(Box::new(cached))
            }
        }
    }
}

impl TryFrom<&String> for GridClusterConfig {
    type Error = GridClusterError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let read = |f: &String| {
            std::fs::read_to_string(f).map_err(|e| {
                GridClusterError::ConfigurationError(format!("failure reading {f}: {e}"))
            })
        };
        if f.ends_with(".toml") {
            let s = read(f)?;
            toml::from_str(&s).map_err(|e| {
                GridClusterError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = read(f)?;
            serde_json::from_str(&s).map_err(|e| {
                GridClusterError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(GridClusterError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
