//! # Color Space Converter
//!
//! Conversion core for exploring how screen colors map to print colors.
//!
//! This library provides:
//! - Validated RGB ([`LightColor`]) and CMYK ([`InkColor`]) value types
//! - RGB -> CMYK and CMYK -> RGB conversion with a fixed rounding rule
//! - Uppercase `#RRGGBB` hex encoding and parsing
//! - Single-channel preview swatches for every RGB and CMYK channel
//!
//! Rendering, widgets and reactivity belong to whatever front end calls into
//! these functions; everything here is pure.
//!
//! ## Example
//!
//! ```rust
//! use color_space_converter::{to_hex, to_ink, to_light, InkColor, LightColor};
//!
//! let red = LightColor::new(255, 0, 0)?;
//! let ink = to_ink(red);
//! assert_eq!(ink, InkColor::new(0.0, 100.0, 100.0, 0.0)?);
//! assert_eq!(to_light(ink), red);
//! assert_eq!(to_hex(red), "#FF0000");
//! # Ok::<(), color_space_converter::ConversionError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod report;

pub use color::{Channel, ColorConverter, InkColor, LightColor, Rounding};
pub use config::PlaygroundConfig;
pub use error::{ConversionError, Result};
pub use report::{ConversionReport, Direction};

/// Convert an RGB color to CMYK percentages with the default converter
pub fn to_ink(light: LightColor) -> InkColor {
    ColorConverter::new().to_ink(light)
}

/// Convert CMYK percentages to an RGB color with the default converter
pub fn to_light(ink: InkColor) -> LightColor {
    ColorConverter::new().to_light(ink)
}

/// Encode an RGB color as `#RRGGBB`
pub fn to_hex(light: LightColor) -> String {
    ColorConverter::new().to_hex(light)
}

/// Parse `#RRGGBB` or `RRGGBB` into an RGB color
pub fn from_hex(hex: &str) -> Result<LightColor> {
    ColorConverter::new().parse_hex(hex)
}

/// Validate raw RGB inputs and convert them to CMYK
///
/// # Errors
///
/// Returns `OutOfRange` if any channel is outside [0, 255]
pub fn rgb_to_cmyk(red: i32, green: i32, blue: i32) -> Result<InkColor> {
    Ok(to_ink(LightColor::new(red, green, blue)?))
}

/// Validate raw CMYK percentages and convert them to RGB
///
/// # Errors
///
/// Returns `OutOfRange` if any channel is outside [0, 100] or not finite
pub fn cmyk_to_rgb(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Result<LightColor> {
    Ok(to_light(InkColor::new(cyan, magenta, yellow, key)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_entry_points() {
        assert_eq!(
            rgb_to_cmyk(0, 0, 0).unwrap(),
            InkColor::new(0.0, 0.0, 0.0, 100.0).unwrap()
        );
        assert_eq!(
            cmyk_to_rgb(0.0, 0.0, 0.0, 0.0).unwrap(),
            LightColor::WHITE
        );
        assert!(rgb_to_cmyk(256, 0, 0).is_err());
        assert!(cmyk_to_rgb(-1.0, 0.0, 0.0, 0.0).is_err());
    }
}
