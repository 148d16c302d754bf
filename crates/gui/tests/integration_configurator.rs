//! Integration tests for the configurator facade: update policy, profile
//! switching, JSON payload handling.

use forma_gui_lib::build;
use forma_gui_lib::fixtures::*;
use forma_gui_lib::harness::TestHarness;
use forma_gui_lib::state::UpdateAction;
use glam::Vec3;
use shared::{Camouflage, Configuration, TurretType, VehicleConfig, VehicleModel};

#[test]
fn test_default_startup_is_vertical_vessel() {
    let h = TestHarness::new();
    assert_eq!(h.part_count(), 1);
    assert_eq!(h.rebuild_count(), 1);
    let aabb = h.aabb();
    assert!((aabb.max.y - 10.0).abs() < 1e-3);
}

#[test]
fn test_vessel_edit_rebuilds_in_place_vehicle_does_not() {
    let mut h = TestHarness::new();

    let action = h.update(vertical_vessel(20.0, 5.0));
    assert_eq!(action, UpdateAction::Rebuild);
    assert_eq!(h.rebuild_count(), 2);

    h.update(basic_vehicle());
    assert_eq!(h.rebuild_count(), 3);
    let version = h.group_version();

    // Every vehicle-to-vehicle change is an appearance update.
    let action = h.update(vehicle(VehicleModel::Heavy, TurretType::Sniper));
    assert_eq!(action, UpdateAction::Appearance);
    let action = h.update(Configuration::Vehicle(VehicleConfig {
        model: VehicleModel::Heavy,
        turret_type: TurretType::Sniper,
        camouflage: Camouflage::Desert,
        scale: 1.4,
        ..VehicleConfig::default()
    }));
    assert_eq!(action, UpdateAction::Appearance);
    assert_eq!(h.group_version(), version);
    assert_eq!(h.rebuild_count(), 3);
}

#[test]
fn test_appearance_updates_are_observable() {
    let mut h = TestHarness::new();
    h.update(basic_vehicle());

    h.update(camouflaged_vehicle(Camouflage::Forest));
    let hull = h.part(build::HULL).unwrap();
    let expected = shared::Rgb::from_srgb8(0x2d, 0x4a, 0x2d);
    assert_eq!(hull.color, expected);

    h.update(painted_vehicle("#ff0000"));
    let hull = h.part(build::HULL).unwrap();
    assert_eq!(hull.color, shared::Rgb::from_hex("#ff0000").unwrap());
    // Tracks never take paint.
    let track = h.part(build::TRACK_LEFT).unwrap();
    assert_ne!(track.color, hull.color);
}

#[test]
fn test_profile_switch_rehomes_camera_and_rebuilds() {
    let mut h = TestHarness::new();
    h.camera_mut().orbit(250.0, 60.0);
    h.camera_mut().zoom(3.0);

    let action = h.update(basic_vehicle());
    assert_eq!(action, UpdateAction::Rebuild);
    assert_eq!(h.part_count(), 5);
    assert!((h.camera().eye_position() - Vec3::new(10.0, 8.0, 10.0)).length() < 1e-3);

    // Same-profile updates keep the user's view.
    h.camera_mut().orbit(100.0, 0.0);
    let eye = h.camera().eye_position();
    h.update(camouflaged_vehicle(Camouflage::Urban));
    assert!((h.camera().eye_position() - eye).length() < 1e-5);
}

#[test]
fn test_identical_update_is_ignored() {
    let mut h = TestHarness::new();
    let config = h.config().clone();
    let action = h.update(config);
    assert_eq!(action, UpdateAction::None);
    assert_eq!(h.rebuild_count(), 1);
}

#[test]
fn test_json_round_trip_through_harness() {
    let mut h = TestHarness::new();
    h.update(vehicle(VehicleModel::Light, TurretType::Heavy));
    let json = h.export_config_json();
    assert!(json.contains("\"profile\": \"vehicle\""));

    let mut h2 = TestHarness::new();
    let action = h2.load_config_json(&json).unwrap();
    assert_eq!(action, UpdateAction::Rebuild);
    assert_eq!(h2.config(), h.config());
    assert_eq!(h2.part_count(), 5);
}

#[test]
fn test_legacy_payload_loads() {
    // Stored payloads from the original product pages use `type`/`height2`
    // and hex color strings.
    let mut h = TestHarness::new();
    h.load_config_json(
        r#"{"profile":"vessel","type":"horizontal","length":14,"height2":4,"width":5}"#,
    )
    .unwrap();
    let aabb = h.aabb();
    let dims = aabb.dimensions();
    assert!((dims.x - 14.0).abs() < 1e-3);
    assert!((dims.y - 4.0).abs() < 1e-3);
    assert!((dims.z - 5.0).abs() < 1e-3);

    h.load_config_json(r##"{"profile":"vehicle","camouflage":"desert","armorColor":"#112233"}"##)
        .unwrap();
    let hull = h.part(build::HULL).unwrap();
    // Camouflage wins over the custom color.
    assert_eq!(hull.color, shared::Rgb::from_srgb8(0x8b, 0x73, 0x55));
}

#[test]
fn test_all_parts_valid_after_many_updates() {
    let mut h = TestHarness::new();
    let updates = [
        vertical_vessel(5.0, 2.0),
        spherical_vessel(12.0),
        horizontal_vessel(8.0, 2.0, 3.0),
        basic_vehicle(),
        vehicle(VehicleModel::Heavy, TurretType::Heavy),
        camouflaged_vehicle(Camouflage::Forest),
        spherical_vessel(4.0),
        vehicle(VehicleModel::Light, TurretType::Sniper),
    ];
    for config in updates {
        h.update(config);
        let errors = h.validate_all_parts();
        assert!(errors.is_empty(), "{:?}", errors);
    }
}
