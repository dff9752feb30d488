// Host-side tests for the backdrop scene model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

fn make_scene() -> BackdropScene {
    let mut rng = StdRng::seed_from_u64(7);
    BackdropScene::new(BackdropConfig::default(), 16.0 / 9.0, &mut rng)
}

#[test]
fn particle_field_has_configured_count() {
    let scene = make_scene();
    assert_eq!(scene.field.len(), PARTICLE_COUNT);
    assert_eq!(scene.field.len(), 1500);
}

#[test]
fn particle_coordinates_stay_inside_field_cube() {
    let scene = make_scene();
    let half = FIELD_SIZE / 2.0;
    assert_eq!(half, 7.5);
    for p in scene.field.positions() {
        for c in p.to_array() {
            assert!(c >= -half && c <= half, "coordinate {c} outside field");
        }
    }
}

#[test]
fn particle_coordinates_are_roughly_uniform() {
    let mut rng = StdRng::seed_from_u64(1234);
    let field = ParticleField::generate(PARTICLE_COUNT, FIELD_SIZE, &mut rng);
    let coords: Vec<f32> = field
        .positions()
        .iter()
        .flat_map(|p| p.to_array())
        .collect();
    let n = coords.len() as f32;

    // Uniform on [-7.5, 7.5]: mean 0, variance 15^2 / 12 = 18.75.
    let mean = coords.iter().sum::<f32>() / n;
    let var = coords.iter().map(|c| (c - mean) * (c - mean)).sum::<f32>() / n;
    assert!(mean.abs() < 0.3, "mean {mean}");
    assert!((var - 18.75).abs() < 1.5, "variance {var}");

    // Each third of the range holds about a third of the samples.
    let mut thirds = [0usize; 3];
    for c in &coords {
        let idx = (((c + 7.5) / 5.0) as usize).min(2);
        thirds[idx] += 1;
    }
    for count in thirds {
        let frac = count as f32 / n;
        assert!((frac - 1.0 / 3.0).abs() < 0.05, "bucket fraction {frac}");
    }
}

#[test]
fn field_generation_is_deterministic_for_a_seed() {
    let a = ParticleField::generate(32, FIELD_SIZE, &mut StdRng::seed_from_u64(3));
    let b = ParticleField::generate(32, FIELD_SIZE, &mut StdRng::seed_from_u64(3));
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn sphere_scale_stays_within_pulse_bounds() {
    let mut t = 0.0f32;
    while t < 200.0 {
        let s = sphere_pulse_scale(t);
        assert!((0.9..=1.1).contains(&s), "scale {s} at t={t}");
        t += 0.037;
    }
    assert!((sphere_pulse_scale(0.0) - 1.0).abs() < 1e-6);
    // Peak at sin = 1, i.e. t * 0.5 = pi / 2.
    assert!((sphere_pulse_scale(std::f32::consts::PI) - 1.1).abs() < 1e-5);
}

#[test]
fn smoothing_follows_closed_form_and_never_overshoots() {
    let mut scene = make_scene();
    let pointer = PointerState { x: 0.4, y: -0.3 };
    let target = pointer.drift_target();
    assert!((target.x - 0.2).abs() < 1e-6);
    assert!((target.y - 0.15).abs() < 1e-6);

    for n in 1..=200 {
        scene.update(n as f32 / 60.0, pointer);
        let pos = scene.field.transform.position;
        let expected = 1.0 - 0.95f32.powi(n);
        assert!(
            (pos.x - target.x * expected).abs() < 1e-5,
            "frame {n}: x={} expected {}",
            pos.x,
            target.x * expected
        );
        assert!((pos.y - target.y * expected).abs() < 1e-5);
        assert!(pos.x <= target.x && pos.y <= target.y);
    }
    let pos = scene.field.transform.position;
    assert!((pos.x - target.x).abs() < 1e-4);
}

#[test]
fn ease_toward_covers_five_percent_per_step() {
    assert!((ease_toward(0.0, 1.0, POINTER_SMOOTHING) - 0.05).abs() < 1e-7);
    assert_eq!(ease_toward(2.0, 2.0, POINTER_SMOOTHING), 2.0);
}

#[test]
fn update_sets_rotation_from_elapsed_time() {
    let mut scene = make_scene();
    scene.update(10.0, PointerState::default());
    let field = scene.field.transform;
    assert!((field.rotation.y - 0.5).abs() < 1e-6);
    assert!((field.rotation.x - 0.2).abs() < 1e-6);
    assert_eq!(field.rotation.z, 0.0);
    let sphere = scene.sphere.transform;
    assert!((sphere.rotation.y - 1.0).abs() < 1e-6);
    assert!((sphere.scale - sphere_pulse_scale(10.0)).abs() < 1e-6);
    // Pointer at center keeps the field in place.
    assert_eq!(field.position, glam::Vec3::ZERO);
}

#[test]
fn pointer_offset_is_relative_to_viewport_center() {
    let p = PointerState::from_client(960.0, 540.0, 1920.0, 1080.0);
    assert_eq!(p, PointerState { x: 0.0, y: 0.0 });

    let p = PointerState::from_client(0.0, 1080.0, 1920.0, 1080.0);
    assert!((p.x + 0.5).abs() < 1e-6);
    assert!((p.y - 0.5).abs() < 1e-6);
    // Cursor at the bottom pulls the field down in world space.
    assert!(p.drift_target().y < 0.0);

    assert_eq!(
        PointerState::from_client(10.0, 10.0, 0.0, 0.0),
        PointerState::default()
    );
}

#[test]
fn transform_matrix_applies_scale_then_translation() {
    let t = Transform {
        position: glam::Vec3::new(1.0, 2.0, 3.0),
        rotation: glam::Vec3::ZERO,
        scale: 2.0,
    };
    let p = t.matrix().transform_point3(glam::Vec3::new(1.0, 0.0, 0.0));
    assert!((p - glam::Vec3::new(3.0, 2.0, 3.0)).length() < 1e-6);
}

#[test]
fn particle_quad_matches_attenuated_point_size() {
    let scene = make_scene();
    let expected = PARTICLE_SIZE * (CAMERA_FOV_DEG.to_radians() * 0.5).tan();
    assert!((scene.particle_quad_size() - expected).abs() < 1e-7);
}
