//! Application settings

use serde::{Deserialize, Serialize};

/// Ground plane display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundSettings {
    /// Show the ground plane
    pub visible: bool,
    /// Side length of the ground quad (world units)
    pub size: f32,
    /// Ground color RGB
    pub color: [u8; 3],
    /// Ground opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GroundSettings {
    fn default() -> Self {
        Self {
            visible: true,
            size: 50.0,
            color: [0xe5, 0xe7, 0xeb],
            opacity: 0.8,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [0xf9, 0xfa, 0xfb],
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Ground plane settings
    #[serde(default)]
    pub ground: GroundSettings,
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportSettings,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "forma", "forma") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "forma", "forma") {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(config_path, json);
                }
            }
        }
    }
}
