//! Triangle surface mesh: OBJ text parsing, per-vertex normals accumulated
//! from face normals, and axis-aligned bounding box computation.
//!
//! # Invariants
//! - Every triangle index is in range for the position buffer.
//! - Normals are unit length (or zero for fully degenerate vertices).

mod obj;
mod trimesh;

pub use obj::{ObjError, parse_obj, write_obj};
pub use trimesh::{Aabb, MeshError, TriMesh};

pub fn crate_info() -> &'static str {
    "landform-mesh v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("mesh"));
    }
}
