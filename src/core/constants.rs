// Scene and animation tuning shared by the backdrop and its host-side tests.

// Particle field
pub const PARTICLE_COUNT: usize = 1500;
pub const PARTICLE_SIZE: f32 = 0.05; // world-space size at unit depth scale
pub const FIELD_SIZE: f32 = 15.0; // edge of the cube the particles are drawn from
pub const PARTICLE_OPACITY: f32 = 0.8;

// Glow sphere
pub const SPHERE_RADIUS: f32 = 2.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;
pub const SPHERE_OPACITY: f32 = 0.05;

// Shared tint (sRGB hex)
pub const BACKDROP_COLOR_HEX: u32 = 0x0071ff;

// Angular velocities (radians per second of elapsed time)
pub const FIELD_SPIN_Y: f32 = 0.05;
pub const FIELD_SPIN_X: f32 = 0.02;
pub const SPHERE_SPIN_Y: f32 = 0.1;

// Sphere pulse: scale = 1 + sin(t * rate) * amplitude
pub const SPHERE_PULSE_RATE: f32 = 0.5;
pub const SPHERE_PULSE_AMPLITUDE: f32 = 0.1;

// Pointer drift: fraction of the remaining distance covered per frame
pub const POINTER_SMOOTHING: f32 = 0.05;
pub const POINTER_DRIFT_SCALE: f32 = 0.5; // pointer offset -> world units

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;
