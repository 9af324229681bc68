use geo::Coord;

/// integer coordinate of a cell in a square grid laid over the projected plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub x: i64,
    pub y: i64,
}

impl GridCell {
    /// finds the cell containing a projected coordinate. indices are clamped
    /// into [0, num_cells - 1] so that points on the far edges of the plane
    /// (longitude 180, the southern mercator limit) stay inside the grid.
    pub fn from_coord(coord: &Coord<f64>, num_cells: i64) -> GridCell {
        let max_index = (num_cells - 1).max(0);
        GridCell {
            x: (coord.x.floor() as i64).clamp(0, max_index),
            y: (coord.y.floor() as i64).clamp(0, max_index),
        }
    }

    /// single integer identifying this cell, unique while both indices are
    /// below `num_cells`.
    pub fn key(&self, num_cells: i64) -> i64 {
        num_cells * self.x + self.y
    }

    /// midpoint of the cell in projected coordinates.
    pub fn center(&self) -> Coord<f64> {
        Coord {
            x: self.x as f64 + 0.5,
            y: self.y as f64 + 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GridCell;
    use geo::Coord;

    #[test]
    fn test_from_coord() {
        let cell = GridCell::from_coord(&Coord { x: 1.5, y: 0.2 }, 3);
        assert_eq!(cell, GridCell { x: 1, y: 0 });
        assert_eq!(cell.key(3), 3);
        assert_eq!(cell.center(), Coord { x: 1.5, y: 0.5 });
    }

    #[test]
    fn test_edges_are_clamped() {
        let far = GridCell::from_coord(&Coord { x: 3.0, y: 3.0 }, 3);
        assert_eq!(far, GridCell { x: 2, y: 2 });
        let near = GridCell::from_coord(&Coord { x: -0.1, y: -4.0 }, 3);
        assert_eq!(near, GridCell { x: 0, y: 0 });
    }

    #[test]
    fn test_keys_are_unique() {
        let num_cells = 4;
        let mut keys = vec![];
        for x in 0..num_cells {
            for y in 0..num_cells {
                keys.push(GridCell { x, y }.key(num_cells));
            }
        }
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), (num_cells * num_cells) as usize);
    }
}
