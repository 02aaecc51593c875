//! Light models, their command sets and device descriptors.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::events::EventKind;

/// Operations a light can accept from the platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum Command {
    #[serde(rename = "setHSBState")]
    #[strum(serialize = "setHSBState")]
    SetHsbState,
    #[serde(rename = "setBrightnessState")]
    #[strum(serialize = "setBrightnessState")]
    SetBrightnessState,
    #[serde(rename = "setBooleanState")]
    #[strum(serialize = "setBooleanState")]
    SetBooleanState,
}

/// Light model as reported in the bridge's `type` field.
///
/// Unknown models parse into [`LightType::Other`] and support no commands.
///
/// ```
/// use std::str::FromStr;
/// use hue_light_driver::{Command, LightType};
///
/// let kind = LightType::from_str("Dimmable light").unwrap();
/// assert!(kind.commands().contains(&Command::SetBrightnessState));
/// assert!(!kind.commands().contains(&Command::SetHsbState));
///
/// let kind = LightType::from_str("On/Off plug-in unit").unwrap();
/// assert_eq!(kind, LightType::Other("On/Off plug-in unit".into()));
/// assert!(kind.commands().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum LightType {
    #[strum(serialize = "Extended color light")]
    ExtendedColor,
    #[strum(serialize = "Dimmable light")]
    Dimmable,
    #[strum(serialize = "Color temperature light")]
    ColorTemperature,
    #[strum(default)]
    Other(String),
}

impl LightType {
    /// Parse a bridge `type` string. Never fails; unknown models become [`LightType::Other`].
    pub fn from_bridge(s: &str) -> Self {
        LightType::from_str(s).unwrap_or_else(|_| LightType::Other(s.to_string()))
    }

    pub fn commands(&self) -> BTreeSet<Command> {
        let commands: &[Command] = match self {
            LightType::ExtendedColor => &[
                Command::SetHsbState,
                Command::SetBrightnessState,
                Command::SetBooleanState,
            ],
            LightType::Dimmable | LightType::ColorTemperature => {
                &[Command::SetBrightnessState, Command::SetBooleanState]
            }
            LightType::Other(_) => &[],
        };
        commands.iter().copied().collect()
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, LightType::Other(_))
    }
}

impl fmt::Display for LightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightType::ExtendedColor => "Extended color light",
            LightType::Dimmable => "Dimmable light",
            LightType::ColorTemperature => "Color temperature light",
            LightType::Other(name) => name.as_str(),
        };
        f.write_str(name)
    }
}

impl Serialize for LightType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}


impl<'de> Deserialize<'de> for LightType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(LightType::from_bridge(&s))
    }
}

/// A light as announced to the platform by discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Light id on the bridge.
    pub original_id: String,
    pub name: String,
    pub light_type: LightType,
    pub commands: BTreeSet<Command>,
    pub events: BTreeSet<EventKind>,
}

impl Device {
    pub fn new(original_id: &str, name: &str, light_type: LightType) -> Self {
        Device {
            original_id: original_id.to_string(),
            name: name.to_string(),
            commands: light_type.commands(),
            light_type,
            events: BTreeSet::from([EventKind::LightState]),
        }
    }

    pub fn supports(&self, command: Command) -> bool {
        self.commands.contains(&command)
    }
}

/// The platform's record of a discovered device, as handed back to commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformDevice {
    /// Platform-internal id; state events are tagged with it.
    #[serde(rename = "_id")]
    pub id: String,
    pub specs: Device,
}

impl PlatformDevice {
    pub fn new(id: &str, specs: Device) -> Self {
        PlatformDevice {
            id: id.to_string(),
            specs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_colour_light() {
        let device = Device::new("1", "Hue color lamp 1", LightType::ExtendedColor);
        assert!(device.supports(Command::SetHsbState));
        assert!(device.supports(Command::SetBrightnessState));
        assert!(device.supports(Command::SetBooleanState));
        assert!(device.events.contains(&EventKind::LightState));
    }

    #[test]
    fn test_colour_temperature_light() {
        let kind = LightType::from_str("Color temperature light").unwrap();
        assert_eq!(kind, LightType::ColorTemperature);
        assert_eq!(
            kind.commands(),
            BTreeSet::from([Command::SetBrightnessState, Command::SetBooleanState])
        );
    }

    #[test]
    fn test_device_json() {
        let device = Device::new("3", "Desk", LightType::Other("Color light".into()));
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "originalId": "3",
                "name": "Desk",
                "lightType": "Color light",
                "commands": [],
                "events": ["LIGHT_STATE"],
            })
        );
        let back: Device = serde_json::from_value(json).unwrap();
        assert_eq!(back, device);
        assert!(!back.light_type.is_supported());
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::SetHsbState.to_string(), "setHSBState");
        assert_eq!(
            serde_json::to_string(&Command::SetBooleanState).unwrap(),
            r#""setBooleanState""#
        );
    }
}
