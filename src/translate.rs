//! Conversions between bridge wire values and platform units.
//!
//! | Quantity   | Bridge       | Platform    |
//! |------------|--------------|-------------|
//! | hue        | 0-65535      | 0-360       |
//! | brightness | 0-255        | 0-1         |
//! | saturation | 0-255        | 0-1         |
//! | duration   | deciseconds  | seconds     |
//!
//! Platform values outside their range are clamped on the way out.

const HUE_MAX: f64 = 65535.0;
const DEGREES: f64 = 360.0;
const LEVEL_MAX: f64 = 255.0;

/// Bridge hue (0-65535) to whole degrees. A missing value reads as 0.
///
/// ```
/// use hue_light_driver::translate::from_driver_hue;
///
/// assert_eq!(from_driver_hue(Some(32768)), 180.0);
/// assert_eq!(from_driver_hue(Some(0)), 0.0);
/// assert_eq!(from_driver_hue(None), 0.0);
/// ```
pub fn from_driver_hue(val: Option<u16>) -> f64 {
    match val {
        Some(v) => (f64::from(v) / HUE_MAX * DEGREES).round(),
        None => 0.0,
    }
}

/// Degrees (0-360) to bridge hue.
///
/// ```
/// use hue_light_driver::translate::to_driver_hue;
///
/// assert_eq!(to_driver_hue(180.0), 32768);
/// assert_eq!(to_driver_hue(360.0), 65535);
/// ```
pub fn to_driver_hue(val: f64) -> u16 {
    clamp_round(val / DEGREES * HUE_MAX, HUE_MAX) as u16
}

pub fn from_driver_brightness(val: u8) -> f64 {
    f64::from(val) / LEVEL_MAX
}

pub fn to_driver_brightness(val: f64) -> u8 {
    clamp_round(val * LEVEL_MAX, LEVEL_MAX) as u8
}

/// Bridge saturation (0-255) to 0-1. A missing value reads as 0.
pub fn from_driver_saturation(val: Option<u8>) -> f64 {
    val.map(from_driver_brightness).unwrap_or(0.0)
}

pub fn to_driver_saturation(val: f64) -> u8 {
    clamp_round(val * LEVEL_MAX, LEVEL_MAX) as u8
}

/// Seconds to bridge transition time in deciseconds.
///
/// ```
/// use hue_light_driver::translate::to_driver_duration;
///
/// assert_eq!(to_driver_duration(1.5), 15);
/// ```
pub fn to_driver_duration(val: f64) -> u16 {
    clamp_round(val * 10.0, f64::from(u16::MAX)) as u16
}

// NaN survives the clamp and `as` turns it into 0.
fn clamp_round(val: f64, max: f64) -> f64 {
    val.round().clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_round_trip_within_one_degree() {
        let step = HUE_MAX / DEGREES;
        for v in (0..=u16::MAX).step_by(97).chain([u16::MAX]) {
            let back = to_driver_hue(from_driver_hue(Some(v)));
            let diff = (f64::from(back) - f64::from(v)).abs();
            assert!(diff <= step / 2.0 + 1.0, "hue {v} came back as {back}");
        }
    }

    #[test]
    fn test_brightness_round_trip() {
        for i in 0..=1000 {
            let v = f64::from(i) / 1000.0;
            let back = from_driver_brightness(to_driver_brightness(v));
            assert!((back - v).abs() <= 1.0 / 255.0, "brightness {v} came back as {back}");
        }
    }

    #[test]
    fn test_saturation_absent_or_zero() {
        assert_eq!(from_driver_saturation(Some(0)), 0.0);
        assert_eq!(from_driver_saturation(None), 0.0);
        assert_eq!(from_driver_saturation(Some(255)), 1.0);
        assert_eq!(to_driver_saturation(1.0), 255);
        assert_eq!(to_driver_saturation(0.5), 128);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(to_driver_hue(400.0), 65535);
        assert_eq!(to_driver_hue(-10.0), 0);
        assert_eq!(to_driver_brightness(1.2), 255);
        assert_eq!(to_driver_brightness(f64::NAN), 0);
        assert_eq!(to_driver_duration(-1.0), 0);
        assert_eq!(to_driver_duration(0.04), 0);
    }
}
