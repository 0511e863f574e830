use glam::{DMat4, DVec3};

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: DVec3,
    /// Point the camera is looking at.
    pub target: DVec3,
    /// World-space up direction.
    pub up: DVec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Viewport aspect ratio (width / height).
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: DVec3::new(0.0, 0.0, 120.0),
            target: DVec3::ZERO,
            up: DVec3::Y,
            fov_degrees: 90.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

impl RenderView {
    /// View matrix looking from eye to target.
    pub fn look_at(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection matrix.
    pub fn projection(&self) -> DMat4 {
        DMat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}
