use crate::grid::HeightGrid;
use glam::DVec3;

/// Finite-difference per-vertex normals, flat buffer with stride 3.
///
/// Each vertex gets four diagonal tangent vectors (+-1/n, +-1/n, dz) built
/// from the elevation differences to its diagonal neighbors (out-of-grid
/// neighbors read as elevation 0). The four adjacent tangent pairs form a
/// quad fan; their cross products are normalized, summed, and re-normalized.
/// This approximates the surface normal from the surrounding samples only,
/// not a triangle-area-weighted normal.
pub fn reconstruct(grid: &HeightGrid) -> Vec<f64> {
    let div = grid.divisions();
    let inv_n = 2.0 / div as f64;
    let mut buffer = Vec::with_capacity(grid.vertex_count() * 3);

    for i in 0..=div {
        for j in 0..=div {
            let n = vertex_normal(grid, i as i64, j as i64, inv_n);
            buffer.extend_from_slice(&[n.x, n.y, n.z]);
        }
    }

    buffer
}

fn vertex_normal(grid: &HeightGrid, i: i64, j: i64, inv_n: f64) -> DVec3 {
    let z0 = grid.z(i, j);

    // X follows columns (j), Y follows rows (i).
    let ne = DVec3::new(inv_n, inv_n, grid.z(i + 1, j + 1) - z0);
    let nw = DVec3::new(-inv_n, inv_n, grid.z(i + 1, j - 1) - z0);
    let sw = DVec3::new(-inv_n, -inv_n, grid.z(i - 1, j - 1) - z0);
    let se = DVec3::new(inv_n, -inv_n, grid.z(i - 1, j + 1) - z0);

    let fan = ne.cross(nw).normalize_or_zero()
        + nw.cross(sw).normalize_or_zero()
        + sw.cross(se).normalize_or_zero()
        + se.cross(ne).normalize_or_zero();

    fan.normalize_or_zero()
}
