//! Scene state: the current configuration, the built object group, and
//! the update policy deciding when a rebuild is needed.

use shared::Configuration;
use tracing::debug;

use crate::build::{self, ObjectGroup};

/// What a configuration change requires of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Identical configuration, nothing to do.
    None,
    /// Colors/scales changed on an existing group; applied in place.
    Appearance,
    /// Geometry changed; the group is rebuilt from scratch.
    Rebuild,
}

pub struct SceneState {
    pub config: Configuration,
    pub group: ObjectGroup,
    pub wireframe: bool,
    /// Bumped on every rebuild; the renderer re-uploads when it changes.
    group_version: u64,
    rebuild_count: u64,
}

impl SceneState {
    pub fn new(config: Configuration) -> Self {
        let group = build::build_object(&config);
        Self {
            config,
            group,
            wireframe: false,
            group_version: 1,
            rebuild_count: 1,
        }
    }

    pub fn group_version(&self) -> u64 {
        self.group_version
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Decide what applying `next` on top of the current config requires.
    ///
    /// Vehicle-to-vehicle changes are always in-place appearance updates;
    /// every vessel change and any profile switch rebuilds.
    pub fn classify_update(&self, next: &Configuration) -> UpdateAction {
        if *next == self.config {
            return UpdateAction::None;
        }
        match (&self.config, next) {
            (Configuration::Vehicle(_), Configuration::Vehicle(_)) => UpdateAction::Appearance,
            _ => UpdateAction::Rebuild,
        }
    }

    /// Apply a new configuration, returning what was done.
    pub fn update_config(&mut self, next: Configuration) -> UpdateAction {
        let action = self.classify_update(&next);
        match action {
            UpdateAction::None => {}
            UpdateAction::Appearance => {
                if let Configuration::Vehicle(ref vehicle) = next {
                    build::apply_appearance(&mut self.group, vehicle);
                }
                self.config = next;
                debug!("applied in-place appearance update");
            }
            UpdateAction::Rebuild => {
                self.group = build::build_object(&next);
                self.config = next;
                self.group_version += 1;
                self.rebuild_count += 1;
                debug!(
                    version = self.group_version,
                    profile = self.config.profile().display_name(),
                    "rebuilt object group"
                );
            }
        }
        action
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}
