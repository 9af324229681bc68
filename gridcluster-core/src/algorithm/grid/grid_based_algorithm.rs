use super::{grid_ops, GridCell, GridParameters};
use crate::{
    algorithm::Algorithm,
    model::{ClusterItem, GridClusterError, StaticCluster},
    projection::SphericalMercatorProjection,
};
use indexmap::IndexSet;
use std::{
    collections::BTreeMap,
    hash::Hash,
    sync::{Mutex, MutexGuard},
};

/// groups items into a uniform grid laid over the spherical mercator plane.
/// each non-empty cell becomes one cluster centered on the cell midpoint.
///
/// clusters are returned ordered by cell key, and members of a cluster keep
/// the order in which they were added to this algorithm.
pub struct GridBasedAlgorithm<T> {
    parameters: GridParameters,
    items: Mutex<IndexSet<T>>,
}

impl<T> Default for GridBasedAlgorithm<T> {
    fn default() -> Self {
        Self {
            parameters: GridParameters::default(),
            items: Mutex::new(IndexSet::new()),
        }
    }
}

impl<T> GridBasedAlgorithm<T> {
    pub fn new(parameters: GridParameters) -> Result<GridBasedAlgorithm<T>, GridClusterError> {
        parameters.validate()?;
        Ok(GridBasedAlgorithm {
            parameters,
            items: Mutex::new(IndexSet::new()),
        })
    }

    pub fn parameters(&self) -> &GridParameters {
        &self.parameters
    }

    fn lock_items(&self) -> Result<MutexGuard<'_, IndexSet<T>>, GridClusterError> {
        self.items.lock().map_err(|e| {
            GridClusterError::InternalError(format!("grid algorithm item set is poisoned: {e}"))
        })
    }
}

impl<T> Algorithm<T> for GridBasedAlgorithm<T>
where
    T: ClusterItem + Eq + Hash + Clone + Send,
{
    fn add_item(&self, item: T) -> Result<(), GridClusterError> {
        self.parameters.coordinate_policy.apply(&item.position())?;
        self.lock_items()?.insert(item);
        Ok(())
    }

    fn add_items(&self, items: Vec<T>) -> Result<(), GridClusterError> {
        for item in items.iter() {
            self.parameters.coordinate_policy.apply(&item.position())?;
        }
        self.lock_items()?.extend(items);
        Ok(())
    }

    fn remove_item(&self, item: &T) -> Result<(), GridClusterError> {
        self.lock_items()?.shift_remove(item);
        Ok(())
    }

    fn clear_items(&self) -> Result<(), GridClusterError> {
        self.lock_items()?.clear();
        Ok(())
    }

    fn items(&self) -> Result<Vec<T>, GridClusterError> {
        Ok(self.lock_items()?.iter().cloned().collect())
    }

    fn clusters(&self, zoom: f64) -> Result<Vec<StaticCluster<T>>, GridClusterError> {
        let num_cells = grid_ops::resolve_num_cells(zoom, &self.parameters)?;
        let projection = SphericalMercatorProjection::new(num_cells as f64);
        let policy = self.parameters.coordinate_policy;

        let mut clusters: BTreeMap<i64, StaticCluster<T>> = BTreeMap::new();
        let items = self.lock_items()?;
        for item in items.iter() {
            let position = policy.apply(&item.position())?;
            let point = projection.to_point(&position);
            let cell = GridCell::from_coord(&point, num_cells);
            clusters
                .entry(cell.key(num_cells))
                .or_insert_with(|| StaticCluster::new(projection.to_lat_lng(&cell.center())))
                .add(item.clone());
        }
        let n_items = items.len();
        drop(items);

        log::debug!(
            "grid clustering at zoom {} ({} cells per side) grouped {} items into {} clusters",
            zoom,
            num_cells,
            n_items,
            clusters.len()
        );
        Ok(clusters.into_values().collect())
    }
}
