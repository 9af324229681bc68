use crate::{
    algorithm::Algorithm,
    model::{GridClusterError, StaticCluster},
};
use indexmap::IndexMap;
use std::sync::{Mutex, MutexGuard};

pub const DEFAULT_CACHE_CAPACITY: usize = 5;
/// requested zoom levels are bounded to this magnitude before discretizing.
const ZOOM_LIMIT: f64 = 1e6;

/// wraps another algorithm and caches its clusters per integer zoom level.
///
/// a request at a fractional zoom is answered with the clusters of its floor.
/// any mutation invalidates the entire cache. when neighbor precaching is
/// enabled, a cache miss also computes the zoom levels directly above and below
/// so that stepping the zoom in either direction is a cache hit.
pub struct PreCachingAlgorithm<T> {
    algorithm: Box<dyn Algorithm<T>>,
    cache: Mutex<ClusterCache<T>>,
    capacity: usize,
    precache_neighbors: bool,
}

struct ClusterCache<T> {
    /// incremented by every mutation. results computed under an older
    /// generation are not stored.
    generation: u64,
    /// least recently used first
    entries: IndexMap<i64, Vec<StaticCluster<T>>>,
}

impl<T> PreCachingAlgorithm<T>
where
    T: Clone + Send,
{
    pub fn new(
        algorithm: Box<dyn Algorithm<T>>,
        capacity: usize,
        precache_neighbors: bool,
    ) -> Result<PreCachingAlgorithm<T>, GridClusterError> {
        if capacity == 0 {
            return Err(GridClusterError::ConfigurationError(String::from(
                "cluster cache capacity must be at least 1",
            )));
        }
        Ok(PreCachingAlgorithm {
            algorithm,
            cache: Mutex::new(ClusterCache {
                generation: 0,
                entries: IndexMap::new(),
            }),
            capacity,
            precache_neighbors,
        })
    }

    /// zoom levels currently cached, least recently used first.
    pub fn cached_zooms(&self) -> Result<Vec<i64>, GridClusterError> {
        Ok(self.lock_cache()?.entries.keys().copied().collect())
    }

    fn lock_cache(&self) -> Result<MutexGuard<'_, ClusterCache<T>>, GridClusterError> {
        self.cache.lock().map_err(|e| {
            GridClusterError::InternalError(format!("cluster cache is poisoned: {e}"))
        })
    }

    fn invalidate(&self) -> Result<(), GridClusterError> {
        let mut cache = self.lock_cache()?;
        cache.generation += 1;
        cache.entries.clear();
        Ok(())
    }

    /// returns the cached clusters for this zoom, marking them most recently used,
    /// along with the current cache generation.
    fn lookup(
        &self,
        zoom: i64,
    ) -> Result<(Option<Vec<StaticCluster<T>>>, u64), GridClusterError> {
        let mut cache = self.lock_cache()?;
        let hit = cache.entries.shift_remove(&zoom);
        if let Some(clusters) = &hit {
            cache.entries.insert(zoom, clusters.clone());
        }
        Ok((hit, cache.generation))
    }

    fn store(
        &self,
        generation: u64,
        results: Vec<(i64, Vec<StaticCluster<T>>)>,
    ) -> Result<(), GridClusterError> {
        let mut cache = self.lock_cache()?;
        if cache.generation != generation {
            log::debug!("items changed while clustering, discarding cluster results");
            return Ok(());
        }
        for (zoom, clusters) in results.into_iter() {
            cache.entries.shift_remove(&zoom);
            while cache.entries.len() >= self.capacity {
                cache.entries.shift_remove_index(0);
            }
            cache.entries.insert(zoom, clusters);
        }
        Ok(())
    }
}

impl<T> Algorithm<T> for PreCachingAlgorithm<T>
where
    T: Clone + Send,
{
    fn add_item(&self, item: T) -> Result<(), GridClusterError> {
        self.algorithm.add_item(item)?;
        self.invalidate()
    }

    fn add_items(&self, items: Vec<T>) -> Result<(), GridClusterError> {
        self.algorithm.add_items(items)?;
        self.invalidate()
    }

    fn remove_item(&self, item: &T) -> Result<(), GridClusterError> {
        self.algorithm.remove_item(item)?;
        self.invalidate()
    }

    fn clear_items(&self) -> Result<(), GridClusterError> {
        self.algorithm.clear_items()?;
        self.invalidate()
    }

    fn items(&self) -> Result<Vec<T>, GridClusterError> {
        self.algorithm.items()
    }

    fn clusters(&self, zoom: f64) -> Result<Vec<StaticCluster<T>>, GridClusterError> {
        if !zoom.is_finite() {
            return Err(GridClusterError::InvalidZoom(zoom));
        }
        // the inner algorithm clamps high zoom levels itself, this bound only
        // keeps the integer zoom and its neighbors representable
        let discrete_zoom = zoom.clamp(-ZOOM_LIMIT, ZOOM_LIMIT).floor() as i64;
        let (hit, generation) = self.lookup(discrete_zoom)?;
        if let Some(clusters) = hit {
            log::debug!("cluster cache hit for zoom {}", discrete_zoom);
            return Ok(clusters);
        }

        if !self.precache_neighbors {
            let clusters = self.algorithm.clusters(discrete_zoom as f64)?;
            self.store(generation, vec![(discrete_zoom, clusters.clone())])?;
            return Ok(clusters);
        }

        let inner = &self.algorithm;
        let neighbor = |z: Option<i64>| z.map(|z| (z, inner.clusters(z as f64)));
        let (below, (current, above)) = rayon::join(
            || neighbor(discrete_zoom.checked_sub(1)),
            || {
                rayon::join(
                    || inner.clusters(discrete_zoom as f64),
                    || neighbor(discrete_zoom.checked_add(1)),
                )
            },
        );
        let clusters = current?;

        // neighbors are a convenience, a failure there does not fail this request
        let mut results = vec![];
        for (neighbor_zoom, neighbor) in [below, above].into_iter().flatten() {
            match neighbor {
                Ok(neighbor_clusters) => results.push((neighbor_zoom, neighbor_clusters)),
                Err(e) => log::debug!("skipping precache of zoom {}: {}", neighbor_zoom, e),
            }
        }
        results.push((discrete_zoom, clusters.clone()));
        self.store(generation, results)?;
        Ok(clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithm::grid::GridBasedAlgorithm, model::ClusterItem};
    use geo::Point;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Stop(&'static str, i32, i32);

    impl ClusterItem for Stop {
        fn position(&self) -> Point<f64> {
            Point::new(self.1 as f64, self.2 as f64)
        }
    }

    fn cached(capacity: usize, precache_neighbors: bool) -> PreCachingAlgorithm<Stop> {
        let inner: Box<dyn Algorithm<Stop>> = Box::new(GridBasedAlgorithm::default());
        PreCachingAlgorithm::new(inner, capacity, precache_neighbors).unwrap()
    }

    #[test]
    fn test_fractional_zoom_uses_floor() {
        let algorithm = cached(5, false);
        algorithm
            .add_items(vec![Stop("a", 0, 0), Stop("b", 1, 1), Stop("c", 120, -40)])
            .unwrap();
        let fractional = algorithm.clusters(4.8).unwrap();
        assert_eq!(algorithm.cached_zooms().unwrap(), vec![4]);
        let whole = algorithm.clusters(4.0).unwrap();
        assert_eq!(fractional, whole);
    }

    #[test]
    fn test_mutation_invalidates() {
        let algorithm = cached(5, false);
        algorithm.add_item(Stop("a", 0, 0)).unwrap();
        assert_eq!(algorithm.clusters(2.0).unwrap().len(), 1);
        algorithm.add_item(Stop("b", 120, -40)).unwrap();
        assert!(algorithm.cached_zooms().unwrap().is_empty());
        assert_eq!(algorithm.clusters(2.0).unwrap().len(), 2);
        algorithm.remove_item(&Stop("b", 120, -40)).unwrap();
        assert_eq!(algorithm.clusters(2.0).unwrap().len(), 1);
        algorithm.clear_items().unwrap();
        assert!(algorithm.clusters(2.0).unwrap().is_empty());
    }

    #[test]
    fn test_least_recently_used_evicted() {
        let algorithm = cached(2, false);
        algorithm.add_item(Stop("a", 0, 0)).unwrap();
        algorithm.clusters(1.0).unwrap();
        algorithm.clusters(2.0).unwrap();
        algorithm.clusters(1.0).unwrap();
        algorithm.clusters(3.0).unwrap();
        assert_eq!(algorithm.cached_zooms().unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_precache_neighbors() {
        let algorithm = cached(5, true);
        algorithm.add_item(Stop("a", 0, 0)).unwrap();
        algorithm.clusters(7.3).unwrap();
        let mut zooms = algorithm.cached_zooms().unwrap();
        zooms.sort();
        assert_eq!(zooms, vec![6, 7, 8]);
    }

    #[test]
    fn test_extreme_zoom_with_neighbors() {
        let algorithm = cached(6, true);
        algorithm.add_item(Stop("a", 0, 0)).unwrap();
        assert_eq!(algorithm.clusters(1e300).unwrap().len(), 1);
        assert_eq!(algorithm.clusters(-1e300).unwrap().len(), 1);
        let mut zooms = algorithm.cached_zooms().unwrap();
        zooms.sort();
        let expected = vec![-1_000_001, -1_000_000, -999_999, 999_999, 1_000_000, 1_000_001];
        assert_eq!(zooms, expected);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let inner: Box<dyn Algorithm<Stop>> = Box::new(GridBasedAlgorithm::default());
        assert!(PreCachingAlgorithm::new(inner, 0, false).is_err());
    }

    #[test]
    fn test_items_pass_through() {
        let algorithm = cached(5, false);
        algorithm.add_item(Stop("a", 0, 0)).unwrap();
        algorithm.add_item(Stop("a", 0, 0)).unwrap();
        assert_eq!(algorithm.items().unwrap(), vec![Stop("a", 0, 0)]);
    }
}
