//! Configuration for the conversion playground.
//!
//! Holds the initial inputs shown for each conversion direction and the
//! rounding rule used by the converter.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use color_space_converter::PlaygroundConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PlaygroundConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = PlaygroundConfig::default();
//! let converter = config.converter();
//! # Ok::<(), color_space_converter::ConversionError>(())
//! ```
//!
//! Fields missing from a file fall back to their defaults, and channel
//! values are validated exactly as when constructing colors directly.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{ColorConverter, InkColor, LightColor, Rounding};
use crate::constants::defaults;
use crate::{ConversionError, Result};

/// Playground configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Initial RGB inputs for the RGB -> CMYK direction
    pub light_defaults: LightColor,

    /// Initial CMYK inputs for the CMYK -> RGB direction
    pub ink_defaults: InkColor,

    /// Tie-breaking rule for every rounding step
    pub rounding: Rounding,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        let [c, m, y, k] = defaults::INK;
        Self {
            light_defaults: LightColor::from(defaults::LIGHT),
            ink_defaults: InkColor::from_parts(c, m, y, k),
            rounding: Rounding::default(),
        }
    }
}

impl PlaygroundConfig {
    /// Converter using this configuration's rounding rule
    pub fn converter(&self) -> ColorConverter {
        ColorConverter::with_rounding(self.rounding)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConversionError::config(format!("cannot read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ConversionError::config(format!("cannot parse {}", path.display()), e)
        })?;
        debug!(path = %path.display(), rounding = ?config.rounding, "loaded configuration");
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConversionError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            ConversionError::config(format!("cannot write {}", path.display()), e)
        })?;
        debug!(path = %path.display(), "saved configuration");
        Ok(())
    }
}
