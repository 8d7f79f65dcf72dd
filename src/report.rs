//! Conversion reports
//!
//! A report carries both sides of one conversion together with the hex
//! code, ready to be rendered as a swatch or printed as JSON.

use serde::{Deserialize, Serialize};

use crate::color::{InkColor, LightColor};

/// Which side of the conversion the user supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LightToInk,
    InkToLight,
}

/// Complete result of one conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Input side of the conversion
    pub direction: Direction,
    /// RGB representation
    pub light: LightColor,
    /// CMYK representation
    pub ink: InkColor,
    /// Hexadecimal color representation of `light`
    pub hex: String,
}

impl ConversionReport {
    /// One-line summary in input → output order
    pub fn summary(&self) -> String {
        let [r, g, b] = self.light.channels();
        match self.direction {
            Direction::LightToInk => {
                format!("RGB Values: ({r}, {g}, {b}) → CMYK Values: ({})", self.ink)
            }
            Direction::InkToLight => {
                format!("CMYK Values: ({}) → RGB: ({r}, {g}, {b})", self.ink)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorConverter;

    #[test]
    fn test_summary_light_to_ink() {
        let converter = ColorConverter::new();
        let report = converter.report_from_light(LightColor::from_rgb(255, 0, 0));
        assert_eq!(
            report.summary(),
            "RGB Values: (255, 0, 0) → CMYK Values: (C=0%, M=100%, Y=100%, K=0%)"
        );
    }

    #[test]
    fn test_summary_ink_to_light() {
        let converter = ColorConverter::new();
        let ink = InkColor::new(25.0, 50.0, 75.0, 25.0).unwrap();
        let report = converter.report_from_ink(ink);
        assert_eq!(
            report.summary(),
            "CMYK Values: (C=25%, M=50%, Y=75%, K=25%) → RGB: (143, 96, 48)"
        );
    }

    #[test]
    fn test_report_serialization() {
        let converter = ColorConverter::new();
        let report = converter.report_from_light(LightColor::from_rgb(50, 100, 150));

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: ConversionReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report, deserialized);
        assert!(json.contains(r#""direction":"light_to_ink""#));
        assert!(json.contains(r##""hex":"#326496""##));
    }
}
