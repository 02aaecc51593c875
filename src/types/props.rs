//! Command arguments as sent by the platform.

use serde::{Deserialize, Serialize};

use super::Colour;

/// Arguments of `setHSBState`.
///
/// ```
/// use hue_light_driver::HsbProps;
///
/// let props: HsbProps = serde_json::from_str(
///     r#"{"colour": {"hue": 180, "saturation": 1, "brightness": 1}, "duration": 1}"#,
/// ).unwrap();
/// assert_eq!(props.colour.hue, 180.0);
/// assert_eq!(props.duration, 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HsbProps {
    pub colour: Colour,
    /// Transition time in seconds.
    #[serde(default)]
    pub duration: f64,
}

/// The part of a colour `setBrightnessState` reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BrightnessColour {
    pub brightness: f64,
}

/// Arguments of `setBrightnessState`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BrightnessProps {
    pub colour: BrightnessColour,
    #[serde(default)]
    pub duration: f64,
}

/// Arguments of `setBooleanState`.
///
/// ```
/// use hue_light_driver::BooleanProps;
///
/// let props: BooleanProps = serde_json::from_str(r#"{"on": false}"#).unwrap();
/// assert!(!props.on);
/// assert_eq!(props.duration, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanProps {
    pub on: bool,
    #[serde(default)]
    pub duration: f64,
}
