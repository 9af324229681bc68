use crate::model::{GridClusterError, StaticCluster};

/// a clustering strategy over a mutable collection of items.
///
/// implementations synchronize internally so that a single instance can be
/// shared between threads, with mutations and clustering passes interleaving
/// safely.
pub trait Algorithm<T>: Send + Sync {
    /// adds an item. adding an item already present has no effect.
    fn add_item(&self, item: T) -> Result<(), GridClusterError>;

    /// adds each item. if any item is refused, none are added.
    fn add_items(&self, items: Vec<T>) -> Result<(), GridClusterError>;

    /// removes an item if present.
    fn remove_item(&self, item: &T) -> Result<(), GridClusterError>;

    fn clear_items(&self) -> Result<(), GridClusterError>;

    /// snapshot of the current items.
    fn items(&self) -> Result<Vec<T>, GridClusterError>;

    /// groups the current items into clusters for display at this zoom level.
    /// clusters are built fresh on each call.
    fn clusters(&self, zoom: f64) -> Result<Vec<StaticCluster<T>>, GridClusterError>;
}
