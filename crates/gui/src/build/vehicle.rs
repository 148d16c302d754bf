//! Vehicle geometry: hull, two tracks, turret and barrel. The hull and
//! turret are paintable; everything about the vehicle after the initial
//! build is an in-place appearance update.

use glam::{Quat, Vec3};
use shared::{Camouflage, Rgb, TurretType, VehicleConfig, VehicleModel};

use super::{sanitize, ObjectGroup, Part};
use crate::viewport::mesh;

pub const HULL: &str = "hull";
pub const TRACK_LEFT: &str = "track_left";
pub const TRACK_RIGHT: &str = "track_right";
pub const TURRET: &str = "turret";
pub const BARREL: &str = "barrel";

const TRACK_COLOR: Rgb = Rgb::from_srgb8(0x2c, 0x2c, 0x2c);
const BARREL_COLOR: Rgb = Rgb::from_srgb8(0x1a, 0x1a, 0x1a);

const CAMO_FOREST: Rgb = Rgb::from_srgb8(0x2d, 0x4a, 0x2d);
const CAMO_DESERT: Rgb = Rgb::from_srgb8(0x8b, 0x73, 0x55);
const CAMO_URBAN: Rgb = Rgb::from_srgb8(0x40, 0x40, 0x40);

pub fn build(config: &VehicleConfig) -> ObjectGroup {
    let hull = Part::new(HULL, mesh::cube(4.0, 1.5, 6.0))
        .at(Vec3::new(0.0, 0.75, 0.0))
        .paintable();

    let track_left = Part::new(TRACK_LEFT, mesh::cube(0.5, 1.0, 6.2))
        .at(Vec3::new(-2.25, 0.5, 0.0))
        .colored(TRACK_COLOR);
    let track_right = Part::new(TRACK_RIGHT, mesh::cube(0.5, 1.0, 6.2))
        .at(Vec3::new(2.25, 0.5, 0.0))
        .colored(TRACK_COLOR);

    let turret = Part::new(TURRET, mesh::cylinder(1.5, 1.5, 1.0, 16))
        .at(Vec3::new(0.0, 2.0, 0.0))
        .paintable();

    // Axis along Y, rotated to point down +X.
    let barrel = Part::new(BARREL, mesh::cylinder(0.1, 0.15, 4.0, 8))
        .at(Vec3::new(2.0, 2.0, 0.0))
        .rotated(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2))
        .colored(BARREL_COLOR);

    let mut group = ObjectGroup {
        parts: vec![hull, track_left, track_right, turret, barrel],
        scale: 1.0,
    };
    apply_appearance(&mut group, config);
    group
}

/// Push the configuration's appearance fields onto an already-built
/// vehicle group. Mutates transforms and colors only; meshes and part
/// identity are untouched.
pub fn apply_appearance(group: &mut ObjectGroup, config: &VehicleConfig) {
    group.scale = sanitize(config.scale);

    let paint = paint_color(config);
    for part in &mut group.parts {
        if part.paintable {
            part.color = paint;
        }
    }
    if let Some(hull) = group.part_mut(HULL) {
        hull.scale = hull_scale(config.model);
    }
    if let Some(turret) = group.part_mut(TURRET) {
        turret.scale = turret_scale(config.turret_type);
    }
}

fn hull_scale(model: VehicleModel) -> Vec3 {
    match model {
        VehicleModel::Basic => Vec3::ONE,
        VehicleModel::Heavy => Vec3::new(1.2, 1.3, 1.1),
        VehicleModel::Light => Vec3::new(0.8, 0.9, 0.9),
    }
}

fn turret_scale(turret: TurretType) -> Vec3 {
    match turret {
        TurretType::Standard => Vec3::ONE,
        TurretType::Heavy => Vec3::new(1.2, 1.1, 1.2),
        TurretType::Sniper => Vec3::new(0.9, 1.2, 0.9),
    }
}

/// Camouflage wins over the custom armor color when set.
fn paint_color(config: &VehicleConfig) -> Rgb {
    match config.camouflage {
        Camouflage::None => config.armor_color,
        Camouflage::Forest => CAMO_FOREST,
        Camouflage::Desert => CAMO_DESERT,
        Camouflage::Urban => CAMO_URBAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vehicle_has_five_parts() {
        let group = build(&VehicleConfig::default());
        let names: Vec<_> = group.parts.iter().map(|p| p.name).collect();
        assert_eq!(names, [HULL, TRACK_LEFT, TRACK_RIGHT, TURRET, BARREL]);
    }

    #[test]
    fn only_hull_and_turret_are_paintable() {
        let group = build(&VehicleConfig::default());
        for part in &group.parts {
            assert_eq!(
                part.paintable,
                part.name == HULL || part.name == TURRET,
                "paintable flag wrong for {}",
                part.name
            );
        }
    }

    #[test]
    fn model_scales_the_hull_only() {
        let config = VehicleConfig {
            model: VehicleModel::Heavy,
            ..VehicleConfig::default()
        };
        let group = build(&config);
        assert_eq!(group.part(HULL).unwrap().scale, Vec3::new(1.2, 1.3, 1.1));
        assert_eq!(group.part(TRACK_LEFT).unwrap().scale, Vec3::ONE);
        assert_eq!(group.part(TURRET).unwrap().scale, Vec3::ONE);
    }

    #[test]
    fn turret_type_scales_the_turret() {
        let config = VehicleConfig {
            turret_type: TurretType::Sniper,
            ..VehicleConfig::default()
        };
        let group = build(&config);
        assert_eq!(group.part(TURRET).unwrap().scale, Vec3::new(0.9, 1.2, 0.9));
        assert_eq!(group.part(HULL).unwrap().scale, Vec3::ONE);
    }

    #[test]
    fn camouflage_overrides_armor_color() {
        let config = VehicleConfig {
            camouflage: Camouflage::Forest,
            armor_color: Rgb::from_hex("#ff0000").unwrap(),
            ..VehicleConfig::default()
        };
        let group = build(&config);
        assert_eq!(group.part(HULL).unwrap().color, CAMO_FOREST);
        assert_eq!(group.part(TURRET).unwrap().color, CAMO_FOREST);
        // Non-paintable parts keep their fixed colors.
        assert_eq!(group.part(TRACK_LEFT).unwrap().color, TRACK_COLOR);
        assert_eq!(group.part(BARREL).unwrap().color, BARREL_COLOR);
    }

    #[test]
    fn armor_color_applies_when_camouflage_is_none() {
        let red = Rgb::from_hex("#ff0000").unwrap();
        let config = VehicleConfig {
            armor_color: red,
            ..VehicleConfig::default()
        };
        let group = build(&config);
        assert_eq!(group.part(HULL).unwrap().color, red);
        assert_eq!(group.part(TURRET).unwrap().color, red);
    }

    #[test]
    fn appearance_update_leaves_meshes_untouched() {
        let mut group = build(&VehicleConfig::default());
        let hull_verts_before = group.part(HULL).unwrap().mesh.vertices.clone();

        let config = VehicleConfig {
            model: VehicleModel::Light,
            camouflage: Camouflage::Urban,
            scale: 1.5,
            ..VehicleConfig::default()
        };
        apply_appearance(&mut group, &config);

        assert_eq!(group.part(HULL).unwrap().mesh.vertices, hull_verts_before);
        assert_eq!(group.scale, 1.5);
        assert_eq!(group.part(HULL).unwrap().scale, Vec3::new(0.8, 0.9, 0.9));
        assert_eq!(group.part(HULL).unwrap().color, CAMO_URBAN);
    }

    #[test]
    fn degenerate_group_scale_is_clamped() {
        let mut group = build(&VehicleConfig::default());
        apply_appearance(
            &mut group,
            &VehicleConfig {
                scale: 0.0,
                ..VehicleConfig::default()
            },
        );
        assert!(group.scale > 0.0);
    }
}
