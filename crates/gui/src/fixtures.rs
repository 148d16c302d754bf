//! Factory functions for creating test configurations.
//!
//! Convenient helpers to construct `Configuration` values used in tests.

use shared::*;

// ── Vessel factories ────────────────────────────────────────────

/// Vertical vessel with explicit height and diameter.
pub fn vertical_vessel(height: f32, diameter: f32) -> Configuration {
    Configuration::Vessel(VesselConfig {
        kind: VesselKind::Vertical,
        height,
        diameter,
        ..VesselConfig::default()
    })
}

/// Horizontal vessel with explicit box dimensions.
pub fn horizontal_vessel(length: f32, secondary_height: f32, width: f32) -> Configuration {
    Configuration::Vessel(VesselConfig {
        kind: VesselKind::Horizontal,
        length,
        secondary_height,
        width,
        ..VesselConfig::default()
    })
}

/// Spherical vessel with explicit diameter.
pub fn spherical_vessel(sphere_diameter: f32) -> Configuration {
    Configuration::Vessel(VesselConfig {
        kind: VesselKind::Spherical,
        sphere_diameter,
        ..VesselConfig::default()
    })
}

// ── Vehicle factories ───────────────────────────────────────────

/// Default vehicle.
pub fn basic_vehicle() -> Configuration {
    Configuration::Vehicle(VehicleConfig::default())
}

/// Vehicle with a specific model and turret.
pub fn vehicle(model: VehicleModel, turret_type: TurretType) -> Configuration {
    Configuration::Vehicle(VehicleConfig {
        model,
        turret_type,
        ..VehicleConfig::default()
    })
}

/// Vehicle wearing a camouflage pattern.
pub fn camouflaged_vehicle(camouflage: Camouflage) -> Configuration {
    Configuration::Vehicle(VehicleConfig {
        camouflage,
        ..VehicleConfig::default()
    })
}

/// Vehicle painted a custom armor color (hex string, e.g. `"#ff0000"`).
pub fn painted_vehicle(hex: &str) -> Configuration {
    Configuration::Vehicle(VehicleConfig {
        armor_color: Rgb::from_hex(hex).unwrap_or_default(),
        ..VehicleConfig::default()
    })
}
