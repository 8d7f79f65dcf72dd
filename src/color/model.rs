//! Light (RGB) and ink (CMYK) color values
//!
//! Both types validate their channels on construction, so a value that
//! exists always satisfies its range invariant. Deserialization goes through
//! the same checks.

use std::fmt;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::color::Channel;
use crate::{ConversionError, Result};

/// Additive color: red, green and blue intensities in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLight")]
pub struct LightColor {
    red: u8,
    green: u8,
    blue: u8,
}

#[derive(Deserialize)]
struct RawLight {
    red: i32,
    green: i32,
    blue: i32,
}

impl TryFrom<RawLight> for LightColor {
    type Error = ConversionError;

    fn try_from(raw: RawLight) -> Result<Self> {
        Self::new(raw.red, raw.green, raw.blue)
    }
}

impl LightColor {
    pub const BLACK: LightColor = LightColor::from_rgb(0, 0, 0);
    pub const WHITE: LightColor = LightColor::from_rgb(255, 255, 255);

    /// Create a light color from raw integer inputs
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if any channel is outside [0, 255].
    pub fn new(red: i32, green: i32, blue: i32) -> Result<Self> {
        let level = |channel: Channel, value: i32| {
            u8::try_from(value).map_err(|_| ConversionError::out_of_range(channel, value))
        };

        Ok(Self {
            red: level(Channel::Red, red)?,
            green: level(Channel::Green, green)?,
            blue: level(Channel::Blue, blue)?,
        })
    }

    /// Create a light color from channels that are in range by type
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Channels in red, green, blue order
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// True when every channel is zero
    pub fn is_black(&self) -> bool {
        self.channels() == [0, 0, 0]
    }
}

impl From<[u8; 3]> for LightColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from_rgb(red, green, blue)
    }
}

impl TryFrom<[i32; 3]> for LightColor {
    type Error = ConversionError;

    fn try_from([red, green, blue]: [i32; 3]) -> Result<Self> {
        Self::new(red, green, blue)
    }
}

impl From<Srgb<u8>> for LightColor {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::from_rgb(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<LightColor> for Srgb<u8> {
    fn from(color: LightColor) -> Self {
        Srgb::new(color.red, color.green, color.blue)
    }
}

/// CSS color function form, e.g. `rgb(50, 100, 150)`
impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Subtractive color: cyan, magenta, yellow and key coverage in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInk")]
pub struct InkColor {
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
}

#[derive(Deserialize)]
struct RawInk {
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
}

impl TryFrom<RawInk> for InkColor {
    type Error = ConversionError;

    fn try_from(raw: RawInk) -> Result<Self> {
        Self::new(raw.cyan, raw.magenta, raw.yellow, raw.key)
    }
}

impl InkColor {
    /// No ink at all, i.e. bare paper
    pub const PAPER: InkColor = InkColor::from_parts(0.0, 0.0, 0.0, 0.0);

    /// Pure black printed with key ink only
    pub const KEY_BLACK: InkColor = InkColor::from_parts(0.0, 0.0, 0.0, 100.0);

    /// Create an ink color from percentages
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if any channel is outside [0, 100] or not finite.
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Result<Self> {
        Ok(Self {
            cyan: Channel::Cyan.check(cyan)?,
            magenta: Channel::Magenta.check(magenta)?,
            yellow: Channel::Yellow.check(yellow)?,
            key: Channel::Key.check(key)?,
        })
    }

    // callers guarantee every value is within [0, 100]
    pub(crate) const fn from_parts(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    pub fn cyan(&self) -> f64 {
        self.cyan
    }

    pub fn magenta(&self) -> f64 {
        self.magenta
    }

    pub fn yellow(&self) -> f64 {
        self.yellow
    }

    pub fn key(&self) -> f64 {
        self.key
    }

    /// Channels in cyan, magenta, yellow, key order
    pub fn channels(&self) -> [f64; 4] {
        [self.cyan, self.magenta, self.yellow, self.key]
    }
}

impl TryFrom<[f64; 4]> for InkColor {
    type Error = ConversionError;

    fn try_from([cyan, magenta, yellow, key]: [f64; 4]) -> Result<Self> {
        Self::new(cyan, magenta, yellow, key)
    }
}

impl fmt::Display for InkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C={}%, M={}%, Y={}%, K={}%",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}
