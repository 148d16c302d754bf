//! The configurator facade: one object owning the scene and the camera,
//! exposing the operations the UI (and tests) drive.

use shared::Configuration;
use tracing::info;

use crate::state::scene::{SceneState, UpdateAction};
use crate::viewport::camera::OrbitCamera;

pub struct Configurator {
    pub scene: SceneState,
    pub camera: OrbitCamera,
}

impl Configurator {
    pub fn new(config: Configuration) -> Self {
        let camera = OrbitCamera::for_profile(config.profile());
        Self {
            scene: SceneState::new(config),
            camera,
        }
    }

    /// Push a new configuration. Switching profile re-homes the camera to
    /// the new profile's preset; otherwise the view is left where the user
    /// put it.
    pub fn update_config(&mut self, next: Configuration) -> UpdateAction {
        let profile_changed = next.profile() != self.scene.config.profile();
        let action = self.scene.update_config(next);
        if profile_changed {
            self.camera = OrbitCamera::for_profile(self.scene.config.profile());
            info!(
                profile = self.scene.config.profile().display_name(),
                "switched profile"
            );
        }
        action
    }

    pub fn config(&self) -> &Configuration {
        &self.scene.config
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    pub fn toggle_wireframe(&mut self) {
        self.scene.wireframe = !self.scene.wireframe;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use shared::{VehicleConfig, VesselConfig};

    #[test]
    fn profile_switch_rehomes_the_camera() {
        let mut configurator = Configurator::new(Configuration::default());
        configurator.camera.orbit(200.0, 50.0);
        configurator.camera.zoom(4.0);

        configurator.update_config(Configuration::Vehicle(VehicleConfig::default()));
        let eye = configurator.camera.eye_position();
        assert!((eye - Vec3::new(10.0, 8.0, 10.0)).length() < 1e-3);
        assert_eq!(configurator.camera.target, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn same_profile_update_keeps_the_view() {
        let mut configurator = Configurator::new(Configuration::default());
        configurator.camera.orbit(200.0, 50.0);
        let eye = configurator.camera.eye_position();

        configurator.update_config(Configuration::Vessel(VesselConfig {
            height: 30.0,
            ..VesselConfig::default()
        }));
        assert!((configurator.camera.eye_position() - eye).length() < 1e-6);
    }

    #[test]
    fn wireframe_toggles_without_rebuilding() {
        let mut configurator = Configurator::new(Configuration::default());
        let version = configurator.scene.group_version();
        configurator.toggle_wireframe();
        assert!(configurator.scene.wireframe);
        configurator.toggle_wireframe();
        assert!(!configurator.scene.wireframe);
        assert_eq!(configurator.scene.group_version(), version);
    }
}
