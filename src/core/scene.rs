use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::Rng;

use super::camera::PerspectiveCamera;
use super::constants::*;

/// Tunable inputs for building the backdrop scene.
#[derive(Clone, Debug)]
pub struct BackdropConfig {
    pub particle_count: usize,
    pub field_size: f32,
    pub particle_size: f32,
    pub sphere_radius: f32,
    pub sphere_width_segments: u32,
    pub sphere_height_segments: u32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            field_size: FIELD_SIZE,
            particle_size: PARTICLE_SIZE,
            sphere_radius: SPHERE_RADIUS,
            sphere_width_segments: SPHERE_WIDTH_SEGMENTS,
            sphere_height_segments: SPHERE_HEIGHT_SEGMENTS,
        }
    }
}

/// Rigid transform with a uniform scale. Rotation is XYZ Euler angles in
/// radians, applied intrinsically (X, then Y, then Z).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), q, self.position)
    }
}

/// Random point cloud; the points never move relative to each other.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    pub transform: Transform,
}

impl ParticleField {
    /// Draw `count` points with every coordinate uniform in
    /// `[-field_size / 2, field_size / 2]`.
    pub fn generate<R: Rng + ?Sized>(count: usize, field_size: f32, rng: &mut R) -> Self {
        let mut coord = || (rng.gen::<f32>() - 0.5) * field_size;
        let positions = (0..count)
            .map(|_| {
                let x = coord();
                let y = coord();
                let z = coord();
                Vec3::new(x, y, z)
            })
            .collect();
        Self {
            positions,
            transform: Transform::default(),
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct GlowSphere {
    pub radius: f32,
    pub transform: Transform,
}

/// Cursor offset from the viewport center, each axis in [-0.5, 0.5].
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn from_client(client_x: f64, client_y: f64, view_width: f64, view_height: f64) -> Self {
        if view_width <= 0.0 || view_height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x / view_width - 0.5) as f32,
            y: (client_y / view_height - 0.5) as f32,
        }
    }

    /// Where the particle field drifts to; screen Y grows downward, world Y up.
    #[inline]
    pub fn drift_target(&self) -> Vec2 {
        Vec2::new(self.x * POINTER_DRIFT_SCALE, -self.y * POINTER_DRIFT_SCALE)
    }
}

/// One step of first-order smoothing toward `target`.
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[inline]
pub fn sphere_pulse_scale(elapsed_secs: f32) -> f32 {
    1.0 + (elapsed_secs * SPHERE_PULSE_RATE).sin() * SPHERE_PULSE_AMPLITUDE
}

pub struct BackdropScene {
    pub config: BackdropConfig,
    pub camera: PerspectiveCamera,
    pub field: ParticleField,
    pub sphere: GlowSphere,
}

impl BackdropScene {
    pub fn new<R: Rng + ?Sized>(config: BackdropConfig, aspect: f32, rng: &mut R) -> Self {
        let field = ParticleField::generate(config.particle_count, config.field_size, rng);
        let sphere = GlowSphere {
            radius: config.sphere_radius,
            transform: Transform::default(),
        };
        Self {
            camera: PerspectiveCamera::new(aspect),
            field,
            sphere,
            config,
        }
    }

    /// Advance the animation to `elapsed_secs`. Rotation and pulse depend on
    /// elapsed time only; the drift depends on how many frames have run.
    pub fn update(&mut self, elapsed_secs: f32, pointer: PointerState) {
        let field = &mut self.field.transform;
        field.rotation.y = elapsed_secs * FIELD_SPIN_Y;
        field.rotation.x = elapsed_secs * FIELD_SPIN_X;

        let target = pointer.drift_target();
        field.position.x = ease_toward(field.position.x, target.x, POINTER_SMOOTHING);
        field.position.y = ease_toward(field.position.y, target.y, POINTER_SMOOTHING);

        let sphere = &mut self.sphere.transform;
        sphere.rotation.y = elapsed_secs * SPHERE_SPIN_Y;
        sphere.scale = sphere_pulse_scale(elapsed_secs);
    }

    /// Edge length of a particle billboard so it covers as many pixels as a
    /// size-attenuated point sprite would.
    #[inline]
    pub fn particle_quad_size(&self) -> f32 {
        self.config.particle_size * self.camera.half_fov_tan()
    }
}
