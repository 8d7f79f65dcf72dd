//! Color model conversion utilities
//!
//! Provides conversions between the additive and subtractive models:
//! - RGB (0-255) to CMYK percentages, with key-only black for RGB(0, 0, 0)
//! - CMYK percentages to RGB (0-255)
//! - Hex color representation in both directions
//! - Single-channel preview swatches

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::color::{Channel, InkColor, LightColor};
use crate::constants::{self, HEX_LEN};
use crate::report::{ConversionReport, Direction};
use crate::{ConversionError, Result};

/// Tie-breaking rule used whenever a conversion rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Ties go to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Ties go away from zero
    HalfAwayFromZero,
}

impl Rounding {
    /// Round to the nearest integer
    pub fn round(self, value: f64) -> f64 {
        match self {
            Rounding::HalfEven => value.round_ties_even(),
            Rounding::HalfAwayFromZero => value.round(),
        }
    }

    /// Round to a fixed number of decimal places
    pub fn round_to(self, value: f64, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        self.round(value * scale) / scale
    }
}

/// Stateless converter between light and ink colors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorConverter {
    rounding: Rounding,
}

impl ColorConverter {
    /// Create a converter that rounds ties to even
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with an explicit rounding rule
    pub fn with_rounding(rounding: Rounding) -> Self {
        Self { rounding }
    }

    /// Rounding rule applied by this converter
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Convert an RGB color to CMYK percentages
    ///
    /// Percentages are rounded to two decimal places. Pure black maps to
    /// key ink only, which also keeps the `1 - k` denominator away from zero.
    ///
    /// # Arguments
    ///
    /// * `light` - RGB color, already validated by construction
    ///
    /// # Returns
    ///
    /// CMYK color with every channel in [0, 100]
    pub fn to_ink(&self, light: LightColor) -> InkColor {
        if light.is_black() {
            debug!("pure black input, using key ink only");
            return InkColor::KEY_BLACK;
        }

        let [r, g, b] = light.channels().map(|v| f64::from(v) / constants::light::SCALE);
        let k = 1.0 - r.max(g).max(b);
        let c = (1.0 - r - k) / (1.0 - k);
        let m = (1.0 - g - k) / (1.0 - k);
        let y = (1.0 - b - k) / (1.0 - k);

        let ink = InkColor::from_parts(
            self.percent(c),
            self.percent(m),
            self.percent(y),
            self.percent(k),
        );
        trace!(%light, %ink, "converted light to ink");
        ink
    }

    /// Convert CMYK percentages to an RGB color
    ///
    /// # Arguments
    ///
    /// * `ink` - CMYK color, already validated by construction
    ///
    /// # Returns
    ///
    /// RGB color rounded to whole intensities
    pub fn to_light(&self, ink: InkColor) -> LightColor {
        let [c, m, y, k] = ink.channels().map(|v| v / constants::ink::SCALE);
        let level = |v: f64| {
            let value = self.rounding.round(constants::light::SCALE * (1.0 - v) * (1.0 - k));
            // clamped to [0, 255], the cast cannot truncate
            value.clamp(f64::from(constants::light::MIN), f64::from(constants::light::MAX)) as u8
        };

        let light = LightColor::from_rgb(level(c), level(m), level(y));
        trace!(%ink, %light, "converted ink to light");
        light
    }

    /// Convert an RGB color to a hexadecimal color string
    ///
    /// # Returns
    ///
    /// Hex color string (e.g., "#FF0000")
    pub fn to_hex(&self, light: LightColor) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            light.red(),
            light.green(),
            light.blue()
        )
    }

    /// Parse a hexadecimal color string
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "#FF0000" or "ff0000")
    ///
    /// # Errors
    ///
    /// Returns `InvalidHex` if the string is not six hex digits with an
    /// optional leading `#`
    pub fn parse_hex(&self, hex: &str) -> Result<LightColor> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.len() != HEX_LEN - 1 {
            return Err(ConversionError::invalid_hex(
                hex,
                format!("expected 6 hex digits, got {}", digits.len()),
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConversionError::invalid_hex(hex, "contains non-hex characters"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ConversionError::invalid_hex(hex, e.to_string()))
        };

        Ok(LightColor::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// RGB swatch for the red channel alone
    pub fn red_preview(&self, red: u8) -> LightColor {
        LightColor::from_rgb(red, 0, 0)
    }

    /// RGB swatch for the green channel alone
    pub fn green_preview(&self, green: u8) -> LightColor {
        LightColor::from_rgb(0, green, 0)
    }

    /// RGB swatch for the blue channel alone
    pub fn blue_preview(&self, blue: u8) -> LightColor {
        LightColor::from_rgb(0, 0, blue)
    }

    /// RGB swatch for cyan ink alone
    pub fn cyan_preview(&self, cyan: f64) -> Result<LightColor> {
        Ok(self.to_light(InkColor::new(cyan, 0.0, 0.0, 0.0)?))
    }

    /// RGB swatch for magenta ink alone
    pub fn magenta_preview(&self, magenta: f64) -> Result<LightColor> {
        Ok(self.to_light(InkColor::new(0.0, magenta, 0.0, 0.0)?))
    }

    /// RGB swatch for yellow ink alone
    pub fn yellow_preview(&self, yellow: f64) -> Result<LightColor> {
        Ok(self.to_light(InkColor::new(0.0, 0.0, yellow, 0.0)?))
    }

    /// RGB swatch for key ink alone
    pub fn key_preview(&self, key: f64) -> Result<LightColor> {
        Ok(self.to_light(InkColor::new(0.0, 0.0, 0.0, key)?))
    }

    /// Build the swatch shown next to a single channel input
    ///
    /// Light channels place `value` in that channel with the other two at
    /// zero. Ink channels convert a CMYK color whose other three channels are
    /// zero back to RGB.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for values outside the channel bounds and
    /// `NonIntegral` for fractional light channel values.
    pub fn channel_preview(&self, channel: Channel, value: f64) -> Result<LightColor> {
        let value = channel.check(value)?;

        if channel.is_light() {
            if value.fract() != 0.0 {
                return Err(ConversionError::NonIntegral { channel, value });
            }
            // range checked above, the cast is exact
            let level = value as u8;
            return Ok(match channel {
                Channel::Red => self.red_preview(level),
                Channel::Green => self.green_preview(level),
                _ => self.blue_preview(level),
            });
        }

        match channel {
            Channel::Cyan => self.cyan_preview(value),
            Channel::Magenta => self.magenta_preview(value),
            Channel::Yellow => self.yellow_preview(value),
            _ => self.key_preview(value),
        }
    }

    /// Convert RGB to CMYK and collect both sides with the hex code
    pub fn report_from_light(&self, light: LightColor) -> ConversionReport {
        ConversionReport {
            direction: Direction::LightToInk,
            light,
            ink: self.to_ink(light),
            hex: self.to_hex(light),
        }
    }

    /// Convert CMYK to RGB and collect both sides with the hex code
    pub fn report_from_ink(&self, ink: InkColor) -> ConversionReport {
        let light = self.to_light(ink);
        ConversionReport {
            direction: Direction::InkToLight,
            light,
            ink,
            hex: self.to_hex(light),
        }
    }

    fn percent(&self, fraction: f64) -> f64 {
        let value = self
            .rounding
            .round_to(fraction * constants::ink::SCALE, constants::ink::DECIMALS)
            .clamp(constants::ink::MIN, constants::ink::MAX);
        // rounding a tiny negative yields -0.0
        if value == 0.0 {
            0.0
        } else {
            value
        }
    }
}
