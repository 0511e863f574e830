//! Heightfield terrain: diamond-square elevation generation with derived
//! finite-difference normals, elevation-banded colors, and triangle/edge
//! topology.
//!
//! # Invariants
//! - `divisions` is a power of two; construction fails fast otherwise.
//! - The four grid corners hold elevation 0 before and after displacement.
//! - Out-of-grid neighbor lookups read as elevation 0 (boundary bias is
//!   intentional, not corrected).
//! - All buffers are built once at construction and immutable afterwards;
//!   regeneration requires a fresh instance.

mod color;
mod generate;
mod grid;
mod mesh;
mod normals;

pub use color::band_color;
pub use grid::HeightGrid;

use landform_common::{Extent, JitterSource, SplitMix64};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Terrain construction parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Grid resolution: cells per axis. Must be a power of two.
    pub divisions: u32,
    /// World-space extent of the grid in the XY plane.
    pub extent: Extent,
    /// Roughness control: jitter is divided by this constant. Larger values
    /// give gentler relief.
    pub smoothing: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            divisions: 64,
            extent: Extent::unit(),
            smoothing: 6.0,
        }
    }
}

/// Errors from terrain construction.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    #[error("divisions must be a power of two, got {0}")]
    DivisionsNotPowerOfTwo(u32),
    #[error("smoothing must be positive and finite, got {0}")]
    InvalidSmoothing(f64),
}

/// A generated heightfield terrain.
///
/// Holds the flat position/normal/color buffers (stride 3), the triangle
/// index buffer (stride 3), and the derived edge index buffer (stride 2).
/// The renderer consumes these arrays verbatim.
#[derive(Debug, Clone)]
pub struct Terrain {
    params: TerrainParams,
    grid: HeightGrid,
    positions: Vec<f64>,
    normals: Vec<f64>,
    colors: Vec<f64>,
    triangles: Vec<u32>,
    edges: Vec<u32>,
}

impl Terrain {
    /// Generate a terrain with jitter seeded from system entropy.
    pub fn generate(params: &TerrainParams) -> Result<Self, TerrainError> {
        Self::generate_with(params, &mut SplitMix64::from_entropy())
    }

    /// Generate a terrain using the given jitter source.
    pub fn generate_with<J: JitterSource>(
        params: &TerrainParams,
        jitter: &mut J,
    ) -> Result<Self, TerrainError> {
        if !params.divisions.is_power_of_two() {
            return Err(TerrainError::DivisionsNotPowerOfTwo(params.divisions));
        }
        if !(params.smoothing.is_finite() && params.smoothing > 0.0) {
            return Err(TerrainError::InvalidSmoothing(params.smoothing));
        }

        let mut grid = HeightGrid::new(params.divisions);

        // Corners are pinned at 0; the diamond/square passes never revisit
        // them, so the pin survives displacement.
        let d = params.divisions;
        grid.set_z(0, 0, 0.0);
        grid.set_z(0, d, 0.0);
        grid.set_z(d, 0, 0.0);
        grid.set_z(d, d, 0.0);

        generate::displace(&mut grid, params.smoothing, jitter);

        let positions = mesh::position_buffer(&grid, &params.extent);
        let normals = normals::reconstruct(&grid);
        let colors = color::color_buffer(&grid);
        let triangles = mesh::triangle_indices(params.divisions);
        let edges = mesh::edge_indices(&triangles);

        debug!(
            divisions = params.divisions,
            vertices = grid.vertex_count(),
            faces = triangles.len() / 3,
            "generated terrain"
        );

        Ok(Self {
            params: *params,
            grid,
            positions,
            normals,
            colors,
            triangles,
            edges,
        })
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn divisions(&self) -> u32 {
        self.params.divisions
    }

    pub fn extent(&self) -> &Extent {
        &self.params.extent
    }

    /// Vertex count, (divisions + 1)^2.
    pub fn vertex_count(&self) -> usize {
        self.grid.vertex_count()
    }

    /// Triangle count, 2 * divisions^2.
    pub fn face_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Flat position buffer, stride 3 (x, y, z).
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Flat unit-normal buffer, stride 3.
    pub fn normals(&self) -> &[f64] {
        &self.normals
    }

    /// Flat RGB color buffer, stride 3, derived from elevation bands.
    pub fn colors(&self) -> &[f64] {
        &self.colors
    }

    /// Triangle index buffer, stride 3.
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangles
    }

    /// Wireframe edge index buffer, stride 2, duplicates allowed.
    pub fn edge_indices(&self) -> &[u32] {
        &self.edges
    }

    /// Elevation at the grid vertex nearest to a world-space point.
    /// Points outside the extent read the 0.0 sentinel.
    pub fn elevation_at(&self, x: f64, y: f64) -> f64 {
        let (i, j) = self.grid.nearest_vertex(x, y, &self.params.extent);
        self.grid.z(i, j)
    }

    /// Minimum and maximum elevation over the grid.
    pub fn elevation_range(&self) -> (f64, f64) {
        self.positions
            .chunks_exact(3)
            .map(|v| v[2])
            .fold((f64::MAX, f64::MIN), |(lo, hi), z| (lo.min(z), hi.max(z)))
    }
}

pub fn crate_info() -> &'static str {
    "landform-heightfield v0.1.0"
}
