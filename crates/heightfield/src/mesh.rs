use crate::grid::HeightGrid;
use landform_common::Extent;

/// Flat vertex position buffer (stride 3) laid out row-major over the grid.
///
/// X and Y come from the extent subdivided into `divisions` cells; Z is the
/// grid elevation.
pub fn position_buffer(grid: &HeightGrid, extent: &Extent) -> Vec<f64> {
    let div = grid.divisions();
    let dx = extent.width() / div as f64;
    let dy = extent.height() / div as f64;

    let mut buffer = Vec::with_capacity(grid.vertex_count() * 3);
    for i in 0..=div {
        for j in 0..=div {
            buffer.push(extent.min_x() + dx * j as f64);
            buffer.push(extent.min_y() + dy * i as f64);
            buffer.push(grid.z(i as i64, j as i64));
        }
    }
    buffer
}

/// Triangle index buffer: two triangles per grid cell with a consistent
/// diagonal split, counter-clockwise winding, flat with stride 3.
pub fn triangle_indices(divisions: u32) -> Vec<u32> {
    let side = divisions + 1;
    let mut indices = Vec::with_capacity((divisions * divisions * 6) as usize);
    for i in 0..divisions {
        for j in 0..divisions {
            let v = i * side + j;
            indices.extend_from_slice(&[v, v + 1, v + side]);
            indices.extend_from_slice(&[v + 1, v + side + 1, v + side]);
        }
    }
    indices
}

/// Edge index buffer for wireframe rendering: three undirected pairs per
/// triangle, flat with stride 2. Shared edges are emitted twice; no dedup.
pub fn edge_indices(triangles: &[u32]) -> Vec<u32> {
    let mut edges = Vec::with_capacity(triangles.len() * 2);
    for tri in triangles.chunks_exact(3) {
        edges.extend_from_slice(&[tri[0], tri[1]]);
        edges.extend_from_slice(&[tri[1], tri[2]]);
        edges.extend_from_slice(&[tri[2], tri[0]]);
    }
    edges
}
