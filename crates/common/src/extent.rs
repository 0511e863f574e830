use serde::{Deserialize, Serialize};

/// Errors from extent construction.
#[derive(Debug, thiserror::Error)]
pub enum ExtentError {
    #[error("degenerate X range: min {min} must be less than max {max}")]
    DegenerateX { min: f64, max: f64 },
    #[error("degenerate Y range: min {min} must be less than max {max}")]
    DegenerateY { min: f64, max: f64 },
    #[error("extent bounds must be finite")]
    NonFinite,
}

/// A rectangular world-space region in the XY plane.
///
/// Construction validates that both axes are non-degenerate, so downstream
/// code can divide by width/height without checking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Extent {
    /// Create an extent, rejecting degenerate or non-finite bounds.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, ExtentError> {
        if ![min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite()) {
            return Err(ExtentError::NonFinite);
        }
        if min_x >= max_x {
            return Err(ExtentError::DegenerateX {
                min: min_x,
                max: max_x,
            });
        }
        if min_y >= max_y {
            return Err(ExtentError::DegenerateY {
                min: min_y,
                max: max_y,
            });
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// The unit square [-1, 1] x [-1, 1].
    pub fn unit() -> Self {
        Self {
            min_x: -1.0,
            max_x: 1.0,
            min_y: -1.0,
            max_y: 1.0,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::unit()
    }
}
