use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Camera placement and projection parameters.
/// Defaults match the reference scene: 75° vertical FOV, looking at the
/// ecliptic plane from 150 units out along +Z, so the orbit plane's XY axes
/// map straight to screen axes.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 75.0,
            z_near: 0.1,
            z_far: 1000.0,
            eye: [0.0, 0.0, 150.0],
            target: [0.0, 0.0, 0.0],
            // Must not be collinear with the view direction.
            up: [0.0, 1.0, 0.0],
        }
    }
}

/// Perspective camera producing a view-projection matrix for the renderer.
pub struct PerspectiveCamera {
    config: CameraConfig,
    /// Viewport size in physical pixels.
    viewport_width: f32,
    viewport_height: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl PerspectiveCamera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            viewport_width: 1.0,
            viewport_height: 1.0,
        }
    }

    /// Update the viewport size (e.g. when the canvas container resizes).
    /// Returns `true` only when the dimensions actually changed; a same-size
    /// call is an idempotent no-op and the projection is not re-derived.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> bool {
        if width == self.viewport_width && height == self.viewport_height {
            return false;
        }
        self.viewport_width = width;
        self.viewport_height = height;
        true
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_width / self.viewport_height.max(1e-6)
    }

    /// Build the combined view-projection matrix.
    pub fn view_projection(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.config.fov_y_deg.to_radians(),
            self.aspect(),
            self.config.z_near,
            self.config.z_far,
        );
        let view = Mat4::look_at_rh(
            Vec3::from_array(self.config.eye),
            Vec3::from_array(self.config.target),
            Vec3::from_array(self.config.up),
        );
        proj * view
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
        }
    }
}
