pub mod camera;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod login;
pub mod scene;

pub use camera::*;
pub use color::*;
pub use constants::*;
pub use geometry::*;
pub use login::*;
pub use scene::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
pub static WIREFRAME_WGSL: &str = include_str!("../../shaders/wireframe.wgsl");
