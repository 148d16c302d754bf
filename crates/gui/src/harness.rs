//! Headless test harness for driving the configurator programmatically.

use shared::Configuration;

use crate::build::Part;
use crate::configurator::Configurator;
use crate::state::scene::UpdateAction;
use crate::validation::MeshValidator;
use crate::viewport::camera::OrbitCamera;
use crate::viewport::mesh::Aabb;

/// Headless test harness — wraps a [`Configurator`] and exposes
/// inspection helpers for tests.
pub struct TestHarness {
    configurator: Configurator,
}

impl TestHarness {
    /// Create a harness starting from the default configuration.
    pub fn new() -> Self {
        Self::with_config(Configuration::default())
    }

    pub fn with_config(config: Configuration) -> Self {
        Self {
            configurator: Configurator::new(config),
        }
    }

    // ── Configuration ─────────────────────────────────────────

    /// Apply a configuration and report what the scene did with it.
    pub fn update(&mut self, config: Configuration) -> UpdateAction {
        self.configurator.update_config(config)
    }

    pub fn config(&self) -> &Configuration {
        self.configurator.config()
    }

    /// Load a configuration from a JSON payload.
    pub fn load_config_json(&mut self, json: &str) -> Result<UpdateAction, String> {
        let config: Configuration =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        Ok(self.update(config))
    }

    /// Export the current configuration as JSON.
    pub fn export_config_json(&self) -> String {
        serde_json::to_string_pretty(self.configurator.config()).unwrap_or_default()
    }

    // ── Camera ────────────────────────────────────────────────

    pub fn camera(&self) -> &OrbitCamera {
        &self.configurator.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.configurator.camera
    }

    pub fn reset_camera(&mut self) {
        self.configurator.reset_camera();
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn part_count(&self) -> usize {
        self.configurator.scene.group.parts.len()
    }

    pub fn part(&self, name: &str) -> Option<&Part> {
        self.configurator.scene.group.part(name)
    }

    /// World-space bounds of the built object.
    pub fn aabb(&self) -> Aabb {
        self.configurator.scene.group.aabb()
    }

    pub fn group_version(&self) -> u64 {
        self.configurator.scene.group_version()
    }

    pub fn rebuild_count(&self) -> u64 {
        self.configurator.scene.rebuild_count()
    }

    /// Create a validator for a part's mesh.
    pub fn validate_part(&self, name: &str) -> Option<MeshValidator<'_>> {
        self.part(name).map(|p| MeshValidator::new(&p.mesh))
    }

    /// Validate every part and collect the error messages.
    pub fn validate_all_parts(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for part in &self.configurator.scene.group.parts {
            for error in MeshValidator::new(&part.mesh).validate_all() {
                errors.push(format!("{}: {}", part.name, error));
            }
        }
        errors
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::SHELL;
    use crate::fixtures;

    #[test]
    fn test_new_harness_builds_default_vessel() {
        let h = TestHarness::new();
        assert_eq!(h.part_count(), 1);
        assert!(h.part(SHELL).is_some());
        assert_eq!(h.rebuild_count(), 1);
    }

    #[test]
    fn test_load_export_json() {
        let mut h = TestHarness::new();
        h.update(fixtures::spherical_vessel(9.0));
        let json = h.export_config_json();

        let mut h2 = TestHarness::new();
        h2.load_config_json(&json).unwrap();
        assert_eq!(h2.config(), h.config());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut h = TestHarness::new();
        assert!(h.load_config_json("not json at all").is_err());
    }

    #[test]
    fn test_validate_all_parts() {
        let mut h = TestHarness::new();
        h.update(fixtures::basic_vehicle());
        let errors = h.validate_all_parts();
        assert!(errors.is_empty(), "{:?}", errors);
    }
}
