use landform_common::Extent;

/// A square lattice of (divisions + 1) x (divisions + 1) elevation samples.
///
/// Row i maps to the Y axis and column j to the X axis; elevation is the Z
/// coordinate of the eventual vertex. Out-of-range lookups are never an
/// error: they return the missing-neighbor sentinel elevation 0.0, which the
/// displacement and normal passes rely on at the grid boundary.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    divisions: u32,
    side: u32,
    elevations: Vec<f64>,
}

impl HeightGrid {
    /// Allocate a zero-elevation grid with `divisions` cells per axis.
    pub fn new(divisions: u32) -> Self {
        let side = divisions + 1;
        Self {
            divisions,
            side,
            elevations: vec![0.0; (side as usize) * (side as usize)],
        }
    }

    /// Number of cells per axis.
    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    /// Number of vertices per axis (divisions + 1).
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Total vertex count, (divisions + 1)^2.
    pub fn vertex_count(&self) -> usize {
        self.elevations.len()
    }

    /// Row-major vertex index for an in-range (i, j).
    pub fn vertex_index(&self, i: u32, j: u32) -> usize {
        debug_assert!(i < self.side && j < self.side);
        (i * self.side + j) as usize
    }

    /// Elevation at (i, j), with the sentinel 0.0 for out-of-range lookups.
    pub fn z(&self, i: i64, j: i64) -> f64 {
        if i < 0 || j < 0 || i >= self.side as i64 || j >= self.side as i64 {
            return 0.0;
        }
        self.elevations[(i as u32 * self.side + j as u32) as usize]
    }

    /// Set the elevation at an in-range (i, j).
    pub fn set_z(&mut self, i: u32, j: u32, z: f64) {
        let idx = self.vertex_index(i, j);
        self.elevations[idx] = z;
    }

    /// Map a world-space point to the nearest grid coordinate.
    ///
    /// The result may be out of range; feed it back through [`HeightGrid::z`]
    /// to get the sentinel behavior.
    pub fn nearest_vertex(&self, x: f64, y: f64, extent: &Extent) -> (i64, i64) {
        let div = self.divisions as f64;
        let j = ((x - extent.min_x()) / extent.width() * div).round() as i64;
        let i = ((y - extent.min_y()) / extent.height() * div).round() as i64;
        (i, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_grid_is_flat() {
        let grid = HeightGrid::new(4);
        assert_eq!(grid.vertex_count(), 25);
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(grid.z(i, j), 0.0);
            }
        }
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut grid = HeightGrid::new(2);
        grid.set_z(1, 2, 0.75);
        assert_eq!(grid.z(1, 2), 0.75);
        assert_eq!(grid.z(2, 1), 0.0);
    }

    #[test]
    fn out_of_range_returns_sentinel() {
        let mut grid = HeightGrid::new(2);
        grid.set_z(0, 0, 5.0);
        assert_eq!(grid.z(-1, 0), 0.0);
        assert_eq!(grid.z(0, -1), 0.0);
        assert_eq!(grid.z(3, 0), 0.0);
        assert_eq!(grid.z(0, 3), 0.0);
    }

    #[test]
    fn vertex_index_is_row_major() {
        let grid = HeightGrid::new(2);
        assert_eq!(grid.vertex_index(0, 0), 0);
        assert_eq!(grid.vertex_index(0, 2), 2);
        assert_eq!(grid.vertex_index(1, 0), 3);
        assert_eq!(grid.vertex_index(2, 2), 8);
    }

    #[test]
    fn nearest_vertex_maps_extent_corners() {
        let grid = HeightGrid::new(4);
        let extent = Extent::unit();
        assert_eq!(grid.nearest_vertex(-1.0, -1.0, &extent), (0, 0));
        assert_eq!(grid.nearest_vertex(1.0, 1.0, &extent), (4, 4));
        assert_eq!(grid.nearest_vertex(0.0, 0.0, &extent), (2, 2));
    }

    #[test]
    fn nearest_vertex_rounds() {
        let grid = HeightGrid::new(4);
        let extent = Extent::unit();
        // 0.2 in [-1,1] with div=4 lands at grid coordinate 2.4 -> rounds to 2
        assert_eq!(grid.nearest_vertex(0.2, 0.2, &extent), (2, 2));
        assert_eq!(grid.nearest_vertex(0.3, 0.3, &extent), (3, 3));
    }

    #[test]
    fn nearest_vertex_outside_extent_is_out_of_range() {
        let grid = HeightGrid::new(4);
        let extent = Extent::unit();
        let (i, j) = grid.nearest_vertex(-2.0, -2.0, &extent);
        assert_eq!(grid.z(i, j), 0.0);
    }
}
