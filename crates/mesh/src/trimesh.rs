use glam::DVec3;
use tracing::debug;

/// Errors from mesh construction.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("position buffer length {0} is not a multiple of 3")]
    RaggedPositions(usize),
    #[error("triangle buffer length {0} is not a multiple of 3")]
    RaggedTriangles(usize),
    #[error("triangle index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

/// An indexed triangle surface mesh with per-vertex normals.
///
/// Positions and normals are flat f64 buffers with stride 3; triangles are a
/// flat u32 index buffer with stride 3. Normals are computed at construction
/// by accumulating the unnormalized cross-product normal of every face into
/// its three vertices and normalizing the sums, so larger faces weigh more.
#[derive(Debug, Clone)]
pub struct TriMesh {
    positions: Vec<f64>,
    normals: Vec<f64>,
    triangles: Vec<u32>,
}

impl TriMesh {
    /// Build a mesh from raw buffers, validating lengths and index ranges.
    pub fn from_buffers(positions: Vec<f64>, triangles: Vec<u32>) -> Result<Self, MeshError> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::RaggedPositions(positions.len()));
        }
        if triangles.len() % 3 != 0 {
            return Err(MeshError::RaggedTriangles(triangles.len()));
        }
        let vertex_count = positions.len() / 3;
        if let Some(&index) = triangles.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        let mut mesh = Self {
            positions,
            normals: Vec::new(),
            triangles,
        };
        mesh.normals = mesh.accumulate_normals();

        debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "built triangle mesh"
        );
        Ok(mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn face_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Flat position buffer, stride 3.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Flat per-vertex normal buffer, stride 3.
    pub fn normals(&self) -> &[f64] {
        &self.normals
    }

    /// Triangle index buffer, stride 3.
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangles
    }

    /// Position of the vertex at `index`.
    pub fn vertex(&self, index: usize) -> DVec3 {
        let i = index * 3;
        DVec3::new(self.positions[i], self.positions[i + 1], self.positions[i + 2])
    }

    /// Axis-aligned bounding box over all vertices.
    /// Empty meshes collapse to a zero box at the origin.
    pub fn aabb(&self) -> Aabb {
        if self.positions.is_empty() {
            return Aabb {
                min: DVec3::ZERO,
                max: DVec3::ZERO,
            };
        }
        let mut min = DVec3::splat(f64::MAX);
        let mut max = DVec3::splat(f64::MIN);
        for v in self.positions.chunks_exact(3) {
            let p = DVec3::new(v[0], v[1], v[2]);
            min = min.min(p);
            max = max.max(p);
        }
        Aabb { min, max }
    }

    fn accumulate_normals(&self) -> Vec<f64> {
        let mut sums = vec![DVec3::ZERO; self.vertex_count()];
        for tri in self.triangles.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let face_normal = (self.vertex(b) - self.vertex(a))
                .cross(self.vertex(c) - self.vertex(a));
            sums[a] += face_normal;
            sums[b] += face_normal;
            sums[c] += face_normal;
        }

        let mut buffer = Vec::with_capacity(sums.len() * 3);
        for sum in sums {
            let n = sum.normalize_or_zero();
            buffer.extend_from_slice(&[n.x, n.y, n.z]);
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> TriMesh {
        TriMesh::from_buffers(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0, 1, 2],
        )
        .unwrap()
    }

    #[test]
    fn single_triangle_normals_point_up() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        for n in mesh.normals().chunks_exact(3) {
            assert_eq!(n, &[0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn aabb_covers_vertices() {
        let mesh = single_triangle();
        let aabb = mesh.aabb();
        assert_eq!(aabb.min, DVec3::ZERO);
        assert_eq!(aabb.max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn empty_mesh_has_zero_aabb() {
        let mesh = TriMesh::from_buffers(vec![], vec![]).unwrap();
        assert_eq!(mesh.aabb().min, DVec3::ZERO);
        assert_eq!(mesh.aabb().max, DVec3::ZERO);
    }

    #[test]
    fn out_of_range_index_rejected() {
        let result = TriMesh::from_buffers(vec![0.0, 0.0, 0.0], vec![0, 1, 2]);
        match result {
            Err(MeshError::IndexOutOfRange {
                index: 1,
                vertex_count: 1,
            }) => {}
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn ragged_buffers_rejected() {
        assert!(TriMesh::from_buffers(vec![0.0, 0.0], vec![]).is_err());
        assert!(TriMesh::from_buffers(vec![0.0, 0.0, 0.0], vec![0]).is_err());
    }

    #[test]
    fn shared_vertex_normals_average_faces() {
        // Two faces of a tent; the ridge vertices see both slopes.
        let positions = vec![
            0.0, 0.0, 0.0, // 0: left base
            1.0, 0.0, 1.0, // 1: ridge front
            1.0, 1.0, 1.0, // 2: ridge back
            2.0, 0.0, 0.0, // 3: right base
        ];
        let triangles = vec![0, 1, 2, 1, 3, 2];
        let mesh = TriMesh::from_buffers(positions, triangles).unwrap();
        let ridge = &mesh.normals()[3..6];
        // Opposite slopes cancel in X, leaving a straight-up ridge normal.
        assert!(ridge[0].abs() < 1e-12);
        assert!(ridge[2] > 0.99);
    }

    #[test]
    fn normals_are_unit_length() {
        let mesh = single_triangle();
        for n in mesh.normals().chunks_exact(3) {
            let len = DVec3::new(n[0], n[1], n[2]).length();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }
}
