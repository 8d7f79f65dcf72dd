//! Channel bounds and reference values for color conversion
//!
//! This module contains compile-time constants shared by the value types,
//! the converter and the default configuration.

/// Light (RGB) channel limits
pub mod light {
    /// Smallest intensity of a light channel
    pub const MIN: u8 = 0;

    /// Largest intensity of a light channel
    pub const MAX: u8 = 255;

    /// Divisor used to normalize a channel to [0, 1]
    pub const SCALE: f64 = 255.0;
}

/// Ink (CMYK) channel limits
pub mod ink {
    /// Smallest ink coverage percentage
    pub const MIN: f64 = 0.0;

    /// Largest ink coverage percentage
    pub const MAX: f64 = 100.0;

    /// Divisor used to normalize a percentage to [0, 1]
    pub const SCALE: f64 = 100.0;

    /// Decimal places kept on percentages produced by RGB -> CMYK conversion
    pub const DECIMALS: i32 = 2;
}

/// Initial playground inputs
pub mod defaults {
    /// Initial RGB inputs (red, green, blue)
    pub const LIGHT: [u8; 3] = [50, 100, 150];

    /// Initial CMYK inputs in percent (cyan, magenta, yellow, key)
    pub const INK: [f64; 4] = [25.0, 50.0, 75.0, 25.0];
}

/// Length of an encoded hex color including the leading `#`
pub const HEX_LEN: usize = 7;
