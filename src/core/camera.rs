use glam::{Mat4, Vec3};

use super::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};

/// Browser viewport in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            device_pixel_ratio: if device_pixel_ratio > 0.0 {
                device_pixel_ratio
            } else {
                1.0
            },
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }

    /// Drawing-buffer size in physical pixels; never zero so the surface can
    /// always be configured.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.device_pixel_ratio).floor() as u32;
        let h = (self.height * self.device_pixel_ratio).floor() as u32;
        (w.max(1), h.max(1))
    }

    /// Work a move from `self` to `next` requires, or `None` when `next` is
    /// the viewport already applied.
    pub fn plan_resize(&self, next: Viewport) -> Option<ResizePlan> {
        if next == *self {
            return None;
        }
        Some(ResizePlan {
            viewport: next,
            aspect: next.aspect(),
            backing: next.backing_size(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizePlan {
    pub viewport: Viewport,
    pub aspect: f32,
    pub backing: (u32, u32),
}

/// Limit a drawing-buffer size to `max_dim` per side, at least 1.
pub fn clamp_extent(requested: (u32, u32), max_dim: u32) -> (u32, u32) {
    let max_dim = max_dim.max(1);
    (requested.0.clamp(1, max_dim), requested.1.clamp(1, max_dim))
}

/// Clamped size to configure, or `None` when it matches `current`.
pub fn fit_extent(requested: (u32, u32), current: (u32, u32), max_dim: u32) -> Option<(u32, u32)> {
    let next = clamp_extent(requested, max_dim);
    (next != current).then_some(next)
}

/// Perspective camera looking down -Z from `eye`, right-handed.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub eye: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Update the aspect ratio; returns false when nothing changed.
    pub fn set_aspect(&mut self, aspect: f32) -> bool {
        if !aspect.is_finite() || aspect <= 0.0 || aspect == self.aspect {
            return false;
        }
        self.aspect = aspect;
        true
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.eye)
    }

    /// tan(fovy / 2): world units per half-screen height at unit depth.
    #[inline]
    pub fn half_fov_tan(&self) -> f32 {
        (self.fovy_radians * 0.5).tan()
    }
}
