//! State payload sent to a light on the bridge.

use serde::{Deserialize, Serialize};

use crate::translate;
use crate::types::{BooleanProps, BrightnessProps, HsbProps};

/// Body of a `PUT /lights/{id}/state` request, in bridge units.
///
/// Unset attributes are left out of the JSON so the bridge keeps their current value.
///
/// ```
/// use hue_light_driver::LightStateUpdate;
///
/// let mut update = LightStateUpdate::new();
/// update.on(true).bri(128).transition_time(4);
/// assert_eq!(
///     serde_json::to_string(&update).unwrap(),
///     r#"{"on":true,"bri":128,"transitiontime":4}"#,
/// );
/// ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightStateUpdate {
    pub on: Option<bool>,
    pub bri: Option<u8>,
    pub sat: Option<u8>,
    pub hue: Option<u16>,
    #[serde(rename = "transitiontime")]
    pub transition_time: Option<u16>,
}

impl LightStateUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, on: bool) -> &mut Self {
        self.on = Some(on);
        self
    }

    pub fn bri(&mut self, bri: u8) -> &mut Self {
        self.bri = Some(bri);
        self
    }

    pub fn sat(&mut self, sat: u8) -> &mut Self {
        self.sat = Some(sat);
        self
    }

    pub fn hue(&mut self, hue: u16) -> &mut Self {
        self.hue = Some(hue);
        self
    }

    /// Transition time in deciseconds.
    pub fn transition_time(&mut self, deciseconds: u16) -> &mut Self {
        self.transition_time = Some(deciseconds);
        self
    }
}

impl From<&HsbProps> for LightStateUpdate {
    fn from(props: &HsbProps) -> Self {
        let mut p = LightStateUpdate::new();
        p.on(true)
            .bri(translate::to_driver_brightness(props.colour.brightness))
            .sat(translate::to_driver_saturation(props.colour.saturation))
            .hue(translate::to_driver_hue(props.colour.hue))
            .transition_time(translate::to_driver_duration(props.duration));
        p
    }
}

impl From<&BrightnessProps> for LightStateUpdate {
    fn from(props: &BrightnessProps) -> Self {
        let mut p = LightStateUpdate::new();
        p.on(true)
            .bri(translate::to_driver_brightness(props.colour.brightness))
            .transition_time(translate::to_driver_duration(props.duration));
        p
    }
}

impl From<&BooleanProps> for LightStateUpdate {
    fn from(props: &BooleanProps) -> Self {
        let mut p = LightStateUpdate::new();
        p.on(props.on)
            .transition_time(translate::to_driver_duration(props.duration));
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BrightnessColour, Colour};

    #[test]
    fn test_hsb_payload() {
        let props = HsbProps {
            colour: Colour {
                hue: 180.0,
                saturation: 1.0,
                brightness: 1.0,
            },
            duration: 1.0,
        };
        let update = LightStateUpdate::from(&props);
        assert_eq!(
            update,
            LightStateUpdate {
                on: Some(true),
                bri: Some(255),
                sat: Some(255),
                hue: Some(32768),
                transition_time: Some(10),
            }
        );
    }

    #[test]
    fn test_brightness_payload_leaves_colour_alone() {
        let props = BrightnessProps {
            colour: BrightnessColour { brightness: 0.5 },
            duration: 0.4,
        };
        let json = serde_json::to_value(LightStateUpdate::from(&props)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"on": true, "bri": 128, "transitiontime": 4})
        );
    }

    #[test]
    fn test_boolean_payload() {
        let props = BooleanProps {
            on: false,
            duration: 0.0,
        };
        let update = LightStateUpdate::from(&props);
        assert_eq!(update.on, Some(false));
        assert_eq!(update.transition_time, Some(0));
        assert!(update.bri.is_none() && update.hue.is_none() && update.sat.is_none());
    }
}
