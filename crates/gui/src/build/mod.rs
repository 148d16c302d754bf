//! Geometry assembly: turn a `Configuration` into an [`ObjectGroup`] of
//! named parts ready for the viewport.

mod vehicle;
mod vessel;

pub use vehicle::{
    apply_appearance, BARREL, HULL, TRACK_LEFT, TRACK_RIGHT, TURRET,
};
pub use vessel::SHELL;

use glam::{Mat4, Quat, Vec3};
use shared::{Configuration, Rgb};

use crate::viewport::mesh::{Aabb, MeshData};

/// Dimensions at or below this are snapped up so degenerate input never
/// produces inside-out or zero-volume geometry.
pub const MIN_DIMENSION: f32 = 1e-3;

/// One rigid piece of the composed object.
pub struct Part {
    pub name: &'static str,
    pub mesh: MeshData,
    pub offset: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub color: Rgb,
    /// Whether appearance updates (armor color, camouflage) repaint this part.
    pub paintable: bool,
}

impl Part {
    pub fn new(name: &'static str, mesh: MeshData) -> Self {
        Self {
            name,
            mesh,
            offset: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            color: Rgb::DEFAULT_ARMOR,
            paintable: false,
        }
    }

    pub fn at(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn colored(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn paintable(mut self) -> Self {
        self.paintable = true;
        self
    }
}

/// Everything needed to draw one part: its world transform and flat color.
#[derive(Debug, Clone, Copy)]
pub struct PartInstance {
    pub model: Mat4,
    pub color: [f32; 3],
}

/// The composed object: a list of named parts plus a uniform group scale
/// applied outside every part transform.
pub struct ObjectGroup {
    pub parts: Vec<Part>,
    pub scale: f32,
}

impl ObjectGroup {
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn part_mut(&mut self, name: &str) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.name == name)
    }

    /// World-space model matrix for part `i`: group scale outermost, then
    /// the part's translate * rotate * scale.
    pub fn model_matrix(&self, i: usize) -> Mat4 {
        let part = &self.parts[i];
        Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_scale_rotation_translation(part.scale, part.rotation, part.offset)
    }

    /// Per-part draw data, in part order.
    pub fn instances(&self) -> Vec<PartInstance> {
        (0..self.parts.len())
            .map(|i| PartInstance {
                model: self.model_matrix(i),
                color: self.parts[i].color.0,
            })
            .collect()
    }

    /// World-space bounds of the whole group.
    pub fn aabb(&self) -> Aabb {
        let mut aabb = Aabb::EMPTY;
        for i in 0..self.parts.len() {
            let model = self.model_matrix(i);
            aabb = aabb.union(&Aabb::from_mesh_transformed(&self.parts[i].mesh, &model));
        }
        aabb
    }
}

/// Clamp a dimension so the primitive generators only ever see positive,
/// finite values.
pub fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > MIN_DIMENSION {
        value
    } else {
        MIN_DIMENSION
    }
}

/// Build the full object group for a configuration.
pub fn build_object(config: &Configuration) -> ObjectGroup {
    match config {
        Configuration::Vessel(vessel) => vessel::build(vessel),
        Configuration::Vehicle(vehicle) => vehicle::build(vehicle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{VesselConfig, VesselKind};

    #[test]
    fn sanitize_rejects_degenerate_dimensions() {
        assert_eq!(sanitize(5.0), 5.0);
        assert_eq!(sanitize(0.0), MIN_DIMENSION);
        assert_eq!(sanitize(-3.0), MIN_DIMENSION);
        assert_eq!(sanitize(f32::NAN), MIN_DIMENSION);
        assert_eq!(sanitize(f32::INFINITY), MIN_DIMENSION);
    }

    #[test]
    fn group_scale_is_outermost() {
        let config = Configuration::Vessel(VesselConfig::default());
        let mut group = build_object(&config);
        let unscaled = group.aabb();
        group.scale = 2.0;
        let scaled = group.aabb();
        let d0 = unscaled.dimensions();
        let d1 = scaled.dimensions();
        assert!((d1.x - d0.x * 2.0).abs() < 1e-3);
        assert!((d1.y - d0.y * 2.0).abs() < 1e-3);
    }

    #[test]
    fn zero_height_vessel_still_builds() {
        let config = Configuration::Vessel(VesselConfig {
            kind: VesselKind::Vertical,
            height: 0.0,
            diameter: -1.0,
            ..VesselConfig::default()
        });
        let group = build_object(&config);
        assert_eq!(group.parts.len(), 1);
        let aabb = group.aabb();
        assert!(!aabb.is_empty());
        assert!(aabb.dimensions().y > 0.0);
    }
}
