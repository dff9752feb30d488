// Host-side tests for scene constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_field_matches_page_defaults() {
    assert_eq!(PARTICLE_COUNT, 1500);
    assert_eq!(FIELD_SIZE, 15.0);
    assert!(PARTICLE_SIZE > 0.0 && PARTICLE_SIZE < 1.0);
    assert_eq!(BACKDROP_COLOR_HEX, 0x0071ff);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_are_in_unit_range() {
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY <= 1.0);
    assert!(SPHERE_OPACITY > 0.0 && SPHERE_OPACITY <= 1.0);
    // The sphere is a faint accent behind the particles.
    assert!(SPHERE_OPACITY < PARTICLE_OPACITY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_is_a_stable_low_pass() {
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING < 1.0);
    assert!(SPHERE_PULSE_AMPLITUDE > 0.0 && SPHERE_PULSE_AMPLITUDE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_whole_scene() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    // The sphere, even at peak pulse, sits in front of the near plane.
    let sphere_front = SPHERE_RADIUS * (1.0 + SPHERE_PULSE_AMPLITUDE);
    assert!(CAMERA_Z - sphere_front > CAMERA_NEAR);
    // The far corner of the particle cube is within the far plane.
    assert!(CAMERA_Z + FIELD_SIZE < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
}
