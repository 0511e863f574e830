//! Shared types for the landform toolkit: world-space extents, RGB colors,
//! and the deterministic jitter source used by every randomized component.
//!
//! # Invariants
//! - An `Extent` is always non-degenerate (min strictly less than max per axis).
//! - `JitterSource` values are uniform in [0, 1).

mod extent;
mod jitter;
mod rgb;

pub use extent::{Extent, ExtentError};
pub use jitter::{JitterSource, NoJitter, SplitMix64};
pub use rgb::Rgb;

pub fn crate_info() -> &'static str {
    "landform-common v0.1.0"
}
