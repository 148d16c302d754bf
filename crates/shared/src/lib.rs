//! Configuration model shared between the configurator engine and whatever
//! stores the payloads (project files, the product backend).
//!
//! Field names serialize in camelCase to stay byte-compatible with the
//! stored `configuration` JSON of the original product pages.

use serde::{Deserialize, Serialize};

/// Which geometry strategy a configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Vessel,
    Vehicle,
}

impl Profile {
    pub fn display_name(&self) -> &'static str {
        match self {
            Profile::Vessel => "Vessel",
            Profile::Vehicle => "Vehicle",
        }
    }
}

/// A complete shape description, discriminated by product profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "snake_case")]
pub enum Configuration {
    Vessel(VesselConfig),
    Vehicle(VehicleConfig),
}

impl Configuration {
    pub fn profile(&self) -> Profile {
        match self {
            Configuration::Vessel(_) => Profile::Vessel,
            Configuration::Vehicle(_) => Profile::Vehicle,
        }
    }

    /// Default configuration for a profile (the form's initial values).
    pub fn default_for(profile: Profile) -> Self {
        match profile {
            Profile::Vessel => Configuration::Vessel(VesselConfig::default()),
            Profile::Vehicle => Configuration::Vehicle(VehicleConfig::default()),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::Vessel(VesselConfig::default())
    }
}

/// Storage-vessel shape kind. Unknown discriminants in stored payloads fall
/// back to `Vertical` rather than failing the load.
///
/// The fallback variant is declared last: serde requires `#[serde(other)]`
/// on the final variant. Its own name still deserializes through the
/// catch-all arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VesselKind {
    Horizontal,
    Spherical,
    #[default]
    #[serde(other)]
    Vertical,
}

impl VesselKind {
    pub fn all() -> &'static [VesselKind] {
        &[
            VesselKind::Vertical,
            VesselKind::Horizontal,
            VesselKind::Spherical,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VesselKind::Vertical => "Vertical",
            VesselKind::Horizontal => "Horizontal",
            VesselKind::Spherical => "Spherical",
        }
    }
}

/// Storage-vessel parameters. Every field is always carried; the builder
/// reads only the subset relevant to `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VesselConfig {
    #[serde(rename = "kind", alias = "type")]
    pub kind: VesselKind,
    pub height: f32,
    pub diameter: f32,
    pub length: f32,
    pub width: f32,
    #[serde(alias = "height2")]
    pub secondary_height: f32,
    pub sphere_diameter: f32,
    pub wall_thickness: f32,
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            kind: VesselKind::Vertical,
            height: 10.0,
            diameter: 5.0,
            length: 10.0,
            width: 3.0,
            secondary_height: 2.0,
            sphere_diameter: 8.0,
            wall_thickness: 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleModel {
    Heavy,
    Light,
    #[default]
    #[serde(other)]
    Basic,
}

impl VehicleModel {
    pub fn all() -> &'static [VehicleModel] {
        &[VehicleModel::Basic, VehicleModel::Heavy, VehicleModel::Light]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleModel::Basic => "Basic",
            VehicleModel::Heavy => "Heavy",
            VehicleModel::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurretType {
    Heavy,
    Sniper,
    #[default]
    #[serde(other)]
    Standard,
}

impl TurretType {
    pub fn all() -> &'static [TurretType] {
        &[TurretType::Standard, TurretType::Heavy, TurretType::Sniper]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TurretType::Standard => "Standard",
            TurretType::Heavy => "Heavy",
            TurretType::Sniper => "Sniper",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Camouflage {
    Forest,
    Desert,
    Urban,
    #[default]
    #[serde(other)]
    None,
}

impl Camouflage {
    pub fn all() -> &'static [Camouflage] {
        &[
            Camouflage::None,
            Camouflage::Forest,
            Camouflage::Desert,
            Camouflage::Urban,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Camouflage::None => "None",
            Camouflage::Forest => "Forest",
            Camouflage::Desert => "Desert",
            Camouflage::Urban => "Urban",
        }
    }
}

/// Vehicle parameters: sub-discriminants plus appearance fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleConfig {
    pub model: VehicleModel,
    pub turret_type: TurretType,
    pub camouflage: Camouflage,
    pub armor_color: Rgb,
    pub scale: f32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            model: VehicleModel::Basic,
            turret_type: TurretType::Standard,
            camouflage: Camouflage::None,
            armor_color: Rgb::DEFAULT_ARMOR,
            scale: 1.0,
        }
    }
}

/// RGB color, serialized as a `#rrggbb` hex string.
///
/// Parsing is lenient: `#rgb` shorthand is accepted and anything
/// unparseable degrades to the default armor gray — the engine consumes
/// colors, it does not validate them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const DEFAULT_ARMOR: Rgb = Rgb::from_srgb8(0x4a, 0x4a, 0x4a);

    pub const fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Rgb([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
    }

    pub fn to_srgb8(&self) -> [u8; 3] {
        [
            (self.0[0].clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.0[1].clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.0[2].clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    pub fn from_hex(spec: &str) -> Option<Self> {
        let digits = spec.strip_prefix('#')?;
        match digits.len() {
            3 => {
                let mut bytes = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let d = c.to_digit(16)? as u8;
                    bytes[i] = d << 4 | d;
                }
                Some(Rgb::from_srgb8(bytes[0], bytes[1], bytes[2]))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Rgb::from_srgb8(r, g, b))
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_srgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::DEFAULT_ARMOR
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        Ok(Rgb::from_hex(&spec).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vessel_payload_round_trip() {
        let config = Configuration::Vessel(VesselConfig {
            kind: VesselKind::Horizontal,
            length: 12.0,
            ..VesselConfig::default()
        });
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"profile\":\"vessel\""));
        assert!(json.contains("\"kind\":\"horizontal\""));
        assert!(json.contains("\"secondaryHeight\""));
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn legacy_field_names_accepted() {
        // Stored payloads from the original pages use `type` and `height2`.
        let json = r#"{
            "profile": "vessel",
            "type": "spherical",
            "height2": 3.5,
            "sphereDiameter": 9.0
        }"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        let Configuration::Vessel(v) = config else {
            panic!("expected vessel profile");
        };
        assert_eq!(v.kind, VesselKind::Spherical);
        assert_eq!(v.secondary_height, 3.5);
        assert_eq!(v.sphere_diameter, 9.0);
        // Unspecified fields take the form defaults.
        assert_eq!(v.height, 10.0);
    }

    #[test]
    fn unknown_discriminants_fall_back_to_first_variant() {
        let json = r#"{"profile":"vessel","kind":"megatank"}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        let Configuration::Vessel(v) = config else {
            panic!("expected vessel profile");
        };
        assert_eq!(v.kind, VesselKind::Vertical);

        let json = r#"{"profile":"vehicle","model":"hover","turretType":"laser","camouflage":"arctic"}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        let Configuration::Vehicle(v) = config else {
            panic!("expected vehicle profile");
        };
        assert_eq!(v.model, VehicleModel::Basic);
        assert_eq!(v.turret_type, TurretType::Standard);
        assert_eq!(v.camouflage, Camouflage::None);
    }

    #[test]
    fn fallback_variant_names_still_parse() {
        // The fallback variants are declared last for the catch-all arm;
        // their own discriminants must keep working.
        let json = r#"{"profile":"vessel","kind":"vertical"}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        let Configuration::Vessel(v) = config else {
            panic!("expected vessel profile");
        };
        assert_eq!(v.kind, VesselKind::Vertical);

        let json =
            r#"{"profile":"vehicle","model":"basic","turretType":"standard","camouflage":"none"}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        let Configuration::Vehicle(v) = config else {
            panic!("expected vehicle profile");
        };
        assert_eq!(v.model, VehicleModel::Basic);
        assert_eq!(v.turret_type, TurretType::Standard);
        assert_eq!(v.camouflage, Camouflage::None);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(Rgb::from_hex("#ff0000").unwrap(), Rgb([1.0, 0.0, 0.0]));
        assert_eq!(Rgb::from_hex("#f00").unwrap(), Rgb([1.0, 0.0, 0.0]));
        assert_eq!(Rgb::from_hex("#4a4a4a").unwrap().to_hex(), "#4a4a4a");
        assert!(Rgb::from_hex("red").is_none());
        assert!(Rgb::from_hex("#12345").is_none());
    }

    #[test]
    fn invalid_color_in_payload_degrades_to_default() {
        let json = r#"{"profile":"vehicle","armorColor":"chartreuse"}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        let Configuration::Vehicle(v) = config else {
            panic!("expected vehicle profile");
        };
        assert_eq!(v.armor_color, Rgb::DEFAULT_ARMOR);
    }

    #[test]
    fn vehicle_payload_round_trip() {
        let config = Configuration::Vehicle(VehicleConfig {
            model: VehicleModel::Heavy,
            turret_type: TurretType::Sniper,
            camouflage: Camouflage::Desert,
            armor_color: Rgb::from_hex("#ff0000").unwrap(),
            scale: 1.5,
        });
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"turretType\":\"sniper\""));
        assert!(json.contains("\"armorColor\":\"#ff0000\""));
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
