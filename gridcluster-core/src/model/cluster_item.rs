use geo::Point;
use std::sync::Arc;

/// an item that can be placed on the map and grouped into clusters.
///
/// positions are WGS84 with x as longitude and y as latitude.
pub trait ClusterItem {
    fn position(&self) -> Point<f64>;
}

impl<T: ClusterItem + ?Sized> ClusterItem for Arc<T> {
    fn position(&self) -> Point<f64> {
        self.as_ref().position()
    }
}

impl<T: ClusterItem + ?Sized> ClusterItem for Box<T> {
    fn position(&self) -> Point<f64> {
        self.as_ref().position()
    }
}

#[cfg(test)]
mod tests {
    use super::ClusterItem;
    use geo::Point;
    use std::sync::Arc;

    struct Kiosk;

    impl ClusterItem for Kiosk {
        fn position(&self) -> Point<f64> {
            Point::new(-104.99, 39.74)
        }
    }

    #[test]
    fn test_wrapped_items_share_position() {
        let boxed: Box<dyn ClusterItem> = Box::new(Kiosk);
        let shared: Arc<dyn ClusterItem> = Arc::new(Kiosk);
        assert_eq!(boxed.position(), Kiosk.position());
        assert_eq!(shared.position(), Kiosk.position());
    }
}
