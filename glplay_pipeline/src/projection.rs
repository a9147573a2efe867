//! Orthographic projections and the model/view helpers used alongside them.

use glam::{Mat4, Vec3};

/// An axis-aligned view volume, mapped onto OpenGL clip space (`[-1, 1]` on every axis).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ortho {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Ortho {
    /// One unit per pixel, origin at the bottom-left corner of the viewport.
    pub fn pixels(width: u32, height: u32) -> Self {
        Self {
            left: 0.0,
            right: width as f32,
            bottom: 0.0,
            top: height as f32,
            near: -1.0,
            far: 1.0,
        }
    }

    /// A volume two units tall centered on the origin, widened to keep `aspect` (width / height).
    pub fn centered(aspect: f32) -> Self {
        Self {
            left: -aspect,
            right: aspect,
            bottom: -1.0,
            top: 1.0,
            near: -1.0,
            far: 1.0,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(self.left, self.right, self.bottom, self.top, self.near, self.far)
    }
}

pub fn translation(x: f32, y: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, 0.0))
}

/// Combines the three transforms in the order the vertex shader expects them.
pub fn mvp(projection: Mat4, view: Mat4, model: Mat4) -> Mat4 {
    projection * view * model
}
