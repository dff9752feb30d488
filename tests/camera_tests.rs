// Host-side tests for camera and viewport handling on resize.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::*;
use glam::Vec3;

#[test]
fn resize_updates_aspect_and_backing_size() {
    let mut cam = PerspectiveCamera::new(1.0);
    let vp = Viewport::new(1280.0, 720.0, 2.0);
    assert!(cam.set_aspect(vp.aspect()));
    assert!((cam.aspect - 1280.0 / 720.0).abs() < 1e-6);
    assert_eq!(vp.backing_size(), (2560, 1440));
}

#[test]
fn repeated_resize_with_same_dimensions_is_a_no_op() {
    let mut cam = PerspectiveCamera::new(1.0);
    let vp = Viewport::new(1024.0, 768.0, 1.0);
    assert!(cam.set_aspect(vp.aspect()));
    let proj_before = cam.projection_matrix();
    assert!(!cam.set_aspect(vp.aspect()));
    assert_eq!(cam.projection_matrix(), proj_before);
    assert_eq!(vp, Viewport::new(1024.0, 768.0, 1.0));
}

#[test]
fn applying_the_same_viewport_twice_plans_no_work() {
    let current = Viewport::new(1024.0, 768.0, 1.0);
    assert_eq!(current.plan_resize(Viewport::new(1024.0, 768.0, 1.0)), None);

    // A DPR change alone still resizes the drawing buffer.
    let plan = current
        .plan_resize(Viewport::new(1024.0, 768.0, 2.0))
        .unwrap();
    assert_eq!(plan.backing, (2048, 1536));
    assert!((plan.aspect - 1024.0 / 768.0).abs() < 1e-6);
    assert_eq!(plan.viewport.plan_resize(plan.viewport), None);
}

#[test]
fn resize_plan_carries_aspect_and_backing_size() {
    let current = Viewport::new(800.0, 600.0, 1.0);
    let next = Viewport::new(1920.0, 1080.0, 1.25);
    let plan = current.plan_resize(next).unwrap();
    assert_eq!(plan.viewport, next);
    assert_eq!(plan.aspect, next.aspect());
    assert_eq!(plan.backing, (2400, 1350));
}

#[test]
fn surface_extent_is_reconfigured_only_on_change() {
    assert_eq!(fit_extent((1280, 720), (1280, 720), 8192), None);
    assert_eq!(fit_extent((1280, 721), (1280, 720), 8192), Some((1280, 721)));
    // Oversized requests clamp; the clamped size then counts as current.
    assert_eq!(fit_extent((10_000, 500), (800, 500), 8192), Some((8192, 500)));
    assert_eq!(fit_extent((10_000, 500), (8192, 500), 8192), None);
    assert_eq!(fit_extent((0, 0), (640, 480), 8192), Some((1, 1)));
    assert_eq!(clamp_extent((0, 9000), 0), (1, 1));
}

#[test]
fn degenerate_viewports_do_not_break_the_camera() {
    let mut cam = PerspectiveCamera::new(1.5);
    let vp = Viewport::new(800.0, 0.0, 1.0);
    assert_eq!(vp.aspect(), 1.0);
    assert_eq!(vp.backing_size(), (800, 1));
    assert!(!cam.set_aspect(f32::NAN));
    assert!(!cam.set_aspect(0.0));
    assert_eq!(cam.aspect, 1.5);
    assert_eq!(Viewport::new(10.0, 10.0, 0.0).device_pixel_ratio, 1.0);
}

#[test]
fn fractional_pixel_ratio_floors_backing_size() {
    let vp = Viewport::new(1001.0, 333.0, 1.5);
    assert_eq!(vp.backing_size(), (1501, 499));
}

#[test]
fn camera_sits_on_z_axis_looking_at_origin() {
    let cam = PerspectiveCamera::new(1.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 5.0));
    let origin_view = cam.view_matrix().transform_point3(Vec3::ZERO);
    assert!((origin_view - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-6);

    // The origin projects to the center of the screen.
    let clip = cam.projection_matrix() * origin_view.extend(1.0);
    assert!((clip.x / clip.w).abs() < 1e-6);
    assert!((clip.y / clip.w).abs() < 1e-6);
    let ndc_z = clip.z / clip.w;
    assert!((0.0..=1.0).contains(&ndc_z));
}

#[test]
fn half_fov_tan_matches_75_degrees() {
    let cam = PerspectiveCamera::new(1.0);
    assert!((cam.half_fov_tan() - 37.5f32.to_radians().tan()).abs() < 1e-6);
}
