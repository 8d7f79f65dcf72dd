//! Color values and conversion module
//!
//! This module holds the light (RGB) and ink (CMYK) value types, the
//! channel identities they share, and the converter between them.

pub mod channel;
pub mod conversion;
pub mod model;

pub use channel::Channel;
pub use conversion::{ColorConverter, Rounding};
pub use model::{InkColor, LightColor};
