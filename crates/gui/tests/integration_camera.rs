//! Integration tests for orbit camera behavior across profiles.

use forma_gui_lib::viewport::camera::{DragTracker, OrbitCamera, POLAR_LIMIT};
use glam::Vec3;
use shared::Profile;

#[test]
fn test_profile_presets() {
    let vessel = OrbitCamera::for_profile(Profile::Vessel);
    assert!((vessel.eye_position() - Vec3::new(15.0, 10.0, 15.0)).length() < 1e-3);
    assert_eq!(vessel.target, Vec3::ZERO);
    assert_eq!(vessel.min_radius, 2.0);
    assert_eq!(vessel.max_radius, 100.0);

    let vehicle = OrbitCamera::for_profile(Profile::Vehicle);
    assert!((vehicle.eye_position() - Vec3::new(10.0, 8.0, 10.0)).length() < 1e-3);
    assert_eq!(vehicle.target, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(vehicle.min_radius, 5.0);
    assert_eq!(vehicle.max_radius, 50.0);
}

#[test]
fn test_full_revolution_returns_to_start() {
    let mut camera = OrbitCamera::for_profile(Profile::Vessel);
    let start = camera.eye_position();
    // A full horizontal revolution: 2π / ROTATION_SPEED pixels of drag
    let pixels = std::f32::consts::TAU / 0.005;
    camera.orbit(pixels, 0.0);
    assert!((camera.eye_position() - start).length() < 1e-2);
}

#[test]
fn test_drag_sequence_orbits_smoothly() {
    let mut camera = OrbitCamera::for_profile(Profile::Vessel);
    let mut drag = DragTracker::default();

    let distance_before = (camera.eye_position() - camera.target).length();

    drag.pointer_down(400.0, 300.0);
    for i in 1..=20 {
        drag.pointer_move(400.0 + i as f32 * 5.0, 300.0 - i as f32 * 2.0, false, &mut camera);
    }
    drag.pointer_up();

    let distance_after = (camera.eye_position() - camera.target).length();
    assert!((distance_before - distance_after).abs() < 1e-3);
    assert!(camera.polar >= POLAR_LIMIT);
    assert!(camera.polar <= std::f32::consts::PI - POLAR_LIMIT);
}

#[test]
fn test_pan_then_reset() {
    let mut camera = OrbitCamera::for_profile(Profile::Vehicle);
    let mut drag = DragTracker::default();

    drag.pointer_down(100.0, 100.0);
    drag.pointer_move(160.0, 140.0, true, &mut camera);
    drag.pointer_up();
    assert_ne!(camera.target, Vec3::new(0.0, 1.0, 0.0));

    camera.reset();
    assert!((camera.target - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    assert!((camera.eye_position() - Vec3::new(10.0, 8.0, 10.0)).length() < 1e-3);
}

#[test]
fn test_zoom_respects_profile_bounds() {
    let mut camera = OrbitCamera::for_profile(Profile::Vehicle);
    for _ in 0..1000 {
        camera.zoom(1.0);
    }
    assert!((camera.radius - 5.0).abs() < 1e-3);
    for _ in 0..1000 {
        camera.zoom(-1.0);
    }
    assert!((camera.radius - 50.0).abs() < 1e-3);
}

#[test]
fn test_view_matrix_looks_at_target() {
    let camera = OrbitCamera::for_profile(Profile::Vessel);
    let view = camera.view_matrix();
    // The target must land on the -Z axis in view space.
    let target_in_view = view.transform_point3(camera.target);
    assert!(target_in_view.x.abs() < 1e-4);
    assert!(target_in_view.y.abs() < 1e-4);
    assert!(target_in_view.z < 0.0);
}

#[test]
fn test_projection_is_perspective() {
    let camera = OrbitCamera::for_profile(Profile::Vessel);
    let proj = camera.projection_matrix(16.0 / 9.0);
    // Perspective matrices put -1 in the w-generating slot.
    assert!((proj.col(2).w - -1.0).abs() < 1e-6);
    assert_eq!(proj.col(3).w, 0.0);
}
