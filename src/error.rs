//! Error types for the color_space_converter library

use thiserror::Error;

use crate::color::Channel;

/// Result type alias for color_space_converter operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Error types for color construction, conversion and configuration
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A channel value lies outside its declared bound (or is not finite)
    #[error("{channel} value {value} is out of range (expected {min} to {max})", min = .channel.min(), max = .channel.max())]
    OutOfRange { channel: Channel, value: f64 },

    /// A light channel received a fractional value
    #[error("{channel} value {value} is not an integer")]
    NonIntegral { channel: Channel, value: f64 },

    /// Channel name not recognized
    #[error("Unknown channel {0:?}")]
    UnknownChannel(String),

    /// Hex color string could not be parsed
    #[error("Invalid hex color {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConversionError {
    /// Create an out-of-range error for a channel
    pub fn out_of_range(channel: Channel, value: impl Into<f64>) -> Self {
        Self::OutOfRange {
            channel,
            value: value.into(),
        }
    }

    /// Create an invalid hex error
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error is caused by user input that can simply be corrected
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConversionError::OutOfRange { .. }
                | ConversionError::NonIntegral { .. }
                | ConversionError::InvalidHex { .. }
                | ConversionError::UnknownChannel(_)
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ConversionError::OutOfRange { channel, .. } => {
                format!(
                    "{} must be between {} and {}.",
                    channel,
                    channel.min(),
                    channel.max()
                )
            }
            ConversionError::NonIntegral { channel, .. } => {
                format!("{} must be a whole number.", channel)
            }
            ConversionError::UnknownChannel(_) => {
                "Channels are red, green, blue, cyan, magenta, yellow and key.".to_string()
            }
            ConversionError::InvalidHex { .. } => {
                "Hex codes look like #RRGGBB, for example #FF0000.".to_string()
            }
            ConversionError::Config { .. } => {
                "Could not load the configuration. Please check the file and try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = ConversionError::out_of_range(Channel::Red, 256);
        assert_eq!(
            err.to_string(),
            "Red value 256 is out of range (expected 0 to 255)"
        );
        assert!(err.is_recoverable());
        assert_eq!(err.user_message(), "Red must be between 0 and 255.");
    }

    #[test]
    fn test_ink_out_of_range_message() {
        let err = ConversionError::out_of_range(Channel::Cyan, -1.0);
        assert_eq!(
            err.to_string(),
            "Cyan value -1 is out of range (expected 0 to 100)"
        );
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ConversionError::config("cannot read config.json", io);
        assert!(!err.is_recoverable());
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Configuration error: cannot read config.json");
    }
}
