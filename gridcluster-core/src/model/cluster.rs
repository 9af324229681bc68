use geo::Point;

/// a group of items represented on the map by a single position.
pub trait Cluster<T> {
    /// the representative position of this cluster, WGS84.
    fn position(&self) -> Point<f64>;

    /// the items grouped in this cluster.
    fn items(&self) -> &[T];

    fn size(&self) -> usize {
        self.items().len()
    }
}

/// a cluster with a fixed center position. membership grows as items are
/// assigned to it during a single clustering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCluster<T> {
    center: Point<f64>,
    items: Vec<T>,
}

impl<T> StaticCluster<T> {
    pub fn new(center: Point<f64>) -> StaticCluster<T> {
        StaticCluster {
            center,
            items: vec![],
        }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> StaticCluster<T> {
    /// removes the first occurrence of this item, returning true if it was a member.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T> Cluster<T> for StaticCluster<T> {
    fn position(&self) -> Point<f64> {
        self.center
    }

    fn items(&self) -> &[T] {
        &self.items
    }
}
