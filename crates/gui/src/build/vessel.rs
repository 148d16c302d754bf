//! Storage-vessel geometry: a single shell part whose shape depends on
//! the vessel kind. All variants rest on the ground plane (y = 0).

use glam::Vec3;
use shared::{Rgb, VesselConfig, VesselKind};

use super::{sanitize, ObjectGroup, Part};
use crate::viewport::mesh;

pub const SHELL: &str = "shell";

const SHELL_COLOR: Rgb = Rgb::from_srgb8(0x0e, 0xa5, 0xe4);
const SEGMENTS: u32 = 32;
const SPHERE_RINGS: u32 = 16;

pub fn build(config: &VesselConfig) -> ObjectGroup {
    let shell = match config.kind {
        VesselKind::Vertical => {
            let height = sanitize(config.height);
            let radius = sanitize(config.diameter) * 0.5;
            Part::new(SHELL, mesh::cylinder(radius, radius, height, SEGMENTS))
                .at(Vec3::new(0.0, height * 0.5, 0.0))
        }
        VesselKind::Horizontal => {
            let length = sanitize(config.length);
            let height = sanitize(config.secondary_height);
            let width = sanitize(config.width);
            Part::new(SHELL, mesh::cube(length, height, width))
                .at(Vec3::new(0.0, height * 0.5, 0.0))
        }
        VesselKind::Spherical => {
            let radius = sanitize(config.sphere_diameter) * 0.5;
            Part::new(SHELL, mesh::sphere(radius, SPHERE_RINGS, SEGMENTS))
                .at(Vec3::new(0.0, radius, 0.0))
        }
    };

    ObjectGroup {
        parts: vec![shell.colored(SHELL_COLOR)],
        scale: 1.0,
    }
}
