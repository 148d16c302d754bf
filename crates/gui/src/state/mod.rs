pub mod scene;
pub mod settings;

pub use scene::{SceneState, UpdateAction};
pub use settings::{AppSettings, GroundSettings, UiSettings, ViewportSettings};

use shared::Configuration;

use crate::configurator::Configurator;

/// Combined application state
pub struct AppState {
    pub configurator: Configurator,
    /// The control panel's working copy; pushed into the configurator on
    /// every change.
    pub form: Configuration,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
}

impl AppState {
    pub fn new(config: Configuration) -> Self {
        Self {
            form: config.clone(),
            configurator: Configurator::new(config),
            settings: AppSettings::load(),
            show_settings_window: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}
