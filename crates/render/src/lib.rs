//! Renderer-facing data contracts: explicit matrix stack, camera views, a
//! renderer-agnostic interface, and GPU-ready buffer staging.
//!
//! # Invariants
//! - No process-wide rendering state: stacks and views are values the caller
//!   owns and passes to render calls.
//! - Popping an empty matrix stack is not an error condition; it returns
//!   `None`.

mod buffers;
mod renderer;
mod stack;
mod view;

pub use buffers::{GpuVertex, MeshBuffers};
pub use renderer::{DebugTextRenderer, Renderer, Scene};
pub use stack::MatrixStack;
pub use view::RenderView;

pub fn crate_info() -> &'static str {
    "landform-render v0.1.0"
}
