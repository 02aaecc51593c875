//! Light status as reported by the bridge.

use serde::{Deserialize, Serialize};

use crate::translate;
use crate::types::{Colour, ColourState};

/// Response of `GET /lights/{id}`. Only the fields the driver reads are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightStatus {
    pub state: BridgeLightState,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub light_type: Option<String>,
}

/// The `state` object of a light. Colour fields are absent on lights without colour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeLightState {
    pub on: bool,
    #[serde(default)]
    pub bri: Option<u8>,
    #[serde(default)]
    pub hue: Option<u16>,
    #[serde(default)]
    pub sat: Option<u8>,
    #[serde(default)]
    pub reachable: Option<bool>,
}

impl From<&BridgeLightState> for ColourState {
    fn from(state: &BridgeLightState) -> Self {
        ColourState {
            on: state.on,
            colour: Colour {
                hue: translate::from_driver_hue(state.hue),
                saturation: translate::from_driver_saturation(state.sat),
                brightness: translate::from_driver_brightness(state.bri.unwrap_or(0)),
            },
        }
    }
}

impl From<&LightStatus> for ColourState {
    fn from(status: &LightStatus) -> Self {
        ColourState::from(&status.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colour_light() {
        let status: LightStatus = serde_json::from_str(
            r#"{
                "state": {"on": true, "bri": 254, "hue": 8402, "sat": 140,
                          "effect": "none", "xy": [0.4575, 0.4099], "ct": 366,
                          "alert": "select", "colormode": "ct", "reachable": true},
                "type": "Extended color light",
                "name": "Hue color lamp 7",
                "modelid": "LCT007"
            }"#,
        )
        .unwrap();
        let state = ColourState::from(&status);
        assert!(state.on);
        assert_eq!(state.colour.hue, 46.0);
        assert_eq!(state.colour.brightness, 254.0 / 255.0);
        assert_eq!(state.colour.saturation, 140.0 / 255.0);
    }

    #[test]
    fn test_dimmable_light_has_no_colour() {
        let status: LightStatus =
            serde_json::from_str(r#"{"state": {"on": false, "bri": 0}}"#).unwrap();
        let state = ColourState::from(&status);
        assert!(!state.on);
        assert_eq!(state.colour, Colour::default());
    }
}
