use bytemuck::{Pod, Zeroable};
use landform_heightfield::Terrain;
use landform_mesh::TriMesh;
use tracing::debug;

/// Interleaved vertex layout for GPU upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// GPU-ready mesh buffers: f32 vertices plus u32 triangle and edge indices.
///
/// This is the consumer side of the terrain data contract: the f64 buffers
/// are narrowed to f32 and interleaved, index buffers are carried verbatim,
/// and byte views are exposed for the upload call.
#[derive(Debug, Clone)]
pub struct MeshBuffers {
    pub vertices: Vec<GpuVertex>,
    pub triangle_indices: Vec<u32>,
    pub edge_indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn from_terrain(terrain: &Terrain) -> Self {
        let vertices = interleave(terrain.positions(), terrain.normals(), terrain.colors());
        debug!(vertices = vertices.len(), "staged terrain buffers");
        Self {
            vertices,
            triangle_indices: terrain.triangle_indices().to_vec(),
            edge_indices: terrain.edge_indices().to_vec(),
        }
    }

    /// Stage a loaded mesh; vertices take a single flat color.
    pub fn from_trimesh(mesh: &TriMesh, color: [f32; 3]) -> Self {
        let vertices = mesh
            .positions()
            .chunks_exact(3)
            .zip(mesh.normals().chunks_exact(3))
            .map(|(p, n)| GpuVertex {
                position: [p[0] as f32, p[1] as f32, p[2] as f32],
                normal: [n[0] as f32, n[1] as f32, n[2] as f32],
                color,
            })
            .collect();
        Self {
            vertices,
            triangle_indices: mesh.triangle_indices().to_vec(),
            edge_indices: Vec::new(),
        }
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangle_indices)
    }

    pub fn edge_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.edge_indices)
    }
}

fn interleave(positions: &[f64], normals: &[f64], colors: &[f64]) -> Vec<GpuVertex> {
    positions
        .chunks_exact(3)
        .zip(normals.chunks_exact(3))
        .zip(colors.chunks_exact(3))
        .map(|((p, n), c)| GpuVertex {
            position: [p[0] as f32, p[1] as f32, p[2] as f32],
            normal: [n[0] as f32, n[1] as f32, n[2] as f32],
            color: [c[0] as f32, c[1] as f32, c[2] as f32],
        })
        .collect()
}
