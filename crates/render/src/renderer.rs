use crate::view::RenderView;
use landform_dynamics::ParticleSystem;
use landform_heightfield::Terrain;
use landform_mesh::TriMesh;

/// Everything a renderer may draw in one frame.
#[derive(Default)]
pub struct Scene {
    pub terrain: Option<Terrain>,
    pub meshes: Vec<TriMesh>,
    pub particles: Option<ParticleSystem>,
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads scene data and a view configuration, then produces
/// output. It never mutates the scene; generation owns the buffers.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene and view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Debug text renderer — stand-in for a GPU backend.
///
/// Produces a human-readable summary of the scene. Useful for CLI output,
/// logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z,
            view.fov_degrees
        ));

        if let Some(terrain) = &scene.terrain {
            let (lo, hi) = terrain.elevation_range();
            out.push_str(&format!(
                "Terrain: {}x{} cells, {} vertices, {} faces, elevation [{:.3}, {:.3}]\n",
                terrain.divisions(),
                terrain.divisions(),
                terrain.vertex_count(),
                terrain.face_count(),
                lo,
                hi
            ));
        }

        for (idx, mesh) in scene.meshes.iter().enumerate() {
            let aabb = mesh.aabb();
            out.push_str(&format!(
                "Mesh[{idx}]: {} vertices, {} faces, aabb min=({:.2}, {:.2}, {:.2}) max=({:.2}, {:.2}, {:.2})\n",
                mesh.vertex_count(),
                mesh.face_count(),
                aabb.min.x, aabb.min.y, aabb.min.z,
                aabb.max.x, aabb.max.y, aabb.max.z
            ));
        }

        if let Some(particles) = &scene.particles {
            out.push_str(&format!("Particles: {}\n", particles.len()));
            for p in particles.particles() {
                out.push_str(&format!(
                    "  r={:.2} pos=({:.2}, {:.2}, {:.2})\n",
                    p.radius, p.position.x, p.position.y, p.position.z
                ));
            }
        }

        out
    }
}
