//! Sphere particle dynamics inside a cubic box: Euler integration with
//! gravity, exponential drag, and per-axis wall reflection.
//!
//! # Invariants
//! - After every step, each sphere lies fully inside the box walls.
//! - Integration is O(n) per step; there is no broad-phase and spheres do
//!   not collide with each other.

mod particles;

pub use particles::{DynamicsConfig, Particle, ParticleSystem};

pub fn crate_info() -> &'static str {
    "landform-dynamics v0.1.0"
}
