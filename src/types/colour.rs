//! Colour in platform units.

use serde::{Deserialize, Serialize};

/// Hue, saturation and brightness as the platform expresses them.
///
/// - `hue`: colour angle in degrees (0-360)
/// - `saturation`: 0-1
/// - `brightness`: 0-1
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Colour {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Colour {
    /// Returns `None` if a component is outside its range.
    ///
    /// ```
    /// use hue_light_driver::Colour;
    ///
    /// assert!(Colour::create(180.0, 1.0, 0.5).is_some());
    /// assert!(Colour::create(361.0, 1.0, 0.5).is_none());
    /// assert!(Colour::create(180.0, 1.5, 0.5).is_none());
    /// assert!(Colour::create(180.0, 1.0, f64::NAN).is_none());
    /// ```
    pub fn create(hue: f64, saturation: f64, brightness: f64) -> Option<Self> {
        let colour = Colour {
            hue,
            saturation,
            brightness,
        };
        colour.is_valid().then_some(colour)
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=360.0).contains(&self.hue)
            && (0.0..=1.0).contains(&self.saturation)
            && (0.0..=1.0).contains(&self.brightness)
    }
}

/// Light state published to the platform after every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColourState {
    pub on: bool,
    pub colour: Colour,
}
