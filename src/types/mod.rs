//! Value types exchanged with the platform.

mod colour;
mod props;

pub use colour::{Colour, ColourState};
pub use props::{BooleanProps, BrightnessColour, BrightnessProps, HsbProps};
