//! Channel identities for both color models
//!
//! Every channel knows its display name, the model it belongs to and its
//! valid range. Channels are used to tag validation errors and to build
//! isolated-channel preview swatches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{ColorConverter, LightColor};
use crate::constants::{ink, light};
use crate::{ConversionError, Result};

/// One channel of the light (RGB) or ink (CMYK) model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    Key,
}

impl Channel {
    /// Light channels in red, green, blue order
    pub const LIGHT: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Ink channels in cyan, magenta, yellow, key order
    pub const INK: [Channel; 4] = [Channel::Cyan, Channel::Magenta, Channel::Yellow, Channel::Key];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
            Channel::Cyan => "Cyan",
            Channel::Magenta => "Magenta",
            Channel::Yellow => "Yellow",
            Channel::Key => "Key",
        }
    }

    /// True for red, green and blue
    pub fn is_light(self) -> bool {
        matches!(self, Channel::Red | Channel::Green | Channel::Blue)
    }

    /// Lower bound of the channel's range
    pub fn min(self) -> f64 {
        if self.is_light() {
            f64::from(light::MIN)
        } else {
            ink::MIN
        }
    }

    /// Upper bound of the channel's range
    pub fn max(self) -> f64 {
        if self.is_light() {
            f64::from(light::MAX)
        } else {
            ink::MAX
        }
    }

    /// Check that `value` is finite and inside the channel's closed range
    ///
    /// `-0.0` comes back as `0.0`.
    pub fn check(self, value: f64) -> Result<f64> {
        if value.is_finite() && (self.min()..=self.max()).contains(&value) {
            Ok(value + 0.0)
        } else {
            Err(ConversionError::out_of_range(self, value))
        }
    }

    /// Build the swatch shown next to a single channel input
    ///
    /// Uses the default converter; see [`ColorConverter::channel_preview`].
    pub fn preview(self, value: f64) -> Result<LightColor> {
        ColorConverter::new().channel_preview(self, value)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Channel::Red),
            "g" | "green" => Ok(Channel::Green),
            "b" | "blue" => Ok(Channel::Blue),
            "c" | "cyan" => Ok(Channel::Cyan),
            "m" | "magenta" => Ok(Channel::Magenta),
            "y" | "yellow" => Ok(Channel::Yellow),
            "k" | "key" | "black" => Ok(Channel::Key),
            _ => Err(ConversionError::UnknownChannel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_bounds() {
        assert_eq!(Channel::Red.max(), 255.0);
        assert_eq!(Channel::Key.max(), 100.0);
        assert!(Channel::LIGHT.iter().all(|c| c.is_light()));
        assert!(Channel::INK.iter().all(|c| !c.is_light()));
    }

    #[test]
    fn test_check_rejects_non_finite() {
        assert!(Channel::Cyan.check(f64::NAN).is_err());
        assert!(Channel::Cyan.check(f64::INFINITY).is_err());
        assert!(Channel::Cyan.check(100.0).is_ok());
        assert!(Channel::Cyan.check(100.01).is_err());
    }

    #[test]
    fn test_check_clears_negative_zero() {
        let value = Channel::Magenta.check(-0.0).unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_light_previews() {
        assert_eq!(
            Channel::Red.preview(200.0).unwrap(),
            LightColor::from_rgb(200, 0, 0)
        );
        assert_eq!(
            Channel::Blue.preview(7.0).unwrap(),
            LightColor::from_rgb(0, 0, 7)
        );
    }

    #[test]
    fn test_ink_previews() {
        assert_eq!(
            Channel::Cyan.preview(100.0).unwrap(),
            LightColor::from_rgb(0, 255, 255)
        );
        assert_eq!(
            Channel::Magenta.preview(100.0).unwrap(),
            LightColor::from_rgb(255, 0, 255)
        );
        assert_eq!(
            Channel::Yellow.preview(0.0).unwrap(),
            LightColor::WHITE
        );
        assert_eq!(Channel::Key.preview(100.0).unwrap(), LightColor::BLACK);
    }

    #[test]
    fn test_preview_rejects_bad_values() {
        assert!(matches!(
            Channel::Green.preview(12.5),
            Err(ConversionError::NonIntegral { .. })
        ));
        assert!(matches!(
            Channel::Green.preview(256.0),
            Err(ConversionError::OutOfRange { .. })
        ));
        assert!(matches!(
            Channel::Yellow.preview(-0.5),
            Err(ConversionError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_channel() {
        assert_eq!("K".parse::<Channel>().unwrap(), Channel::Key);
        assert_eq!("black".parse::<Channel>().unwrap(), Channel::Key);
        assert_eq!(" Magenta ".parse::<Channel>().unwrap(), Channel::Magenta);
        assert!("orange".parse::<Channel>().is_err());
    }
}
