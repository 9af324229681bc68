use crate::algorithm::precaching::DEFAULT_CACHE_CAPACITY;
use serde::{Deserialize, Serialize};

/// enables caching of cluster results per integer zoom level.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: usize,
    pub precache_neighbors: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            precache_neighbors: false,
        }
    }
}
