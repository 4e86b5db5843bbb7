//! Measurement unit systems.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Unit system the measurements are entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Centimetres.
    #[default]
    Metric,
    /// Inches.
    Us,
}

impl UnitSystem {
    /// Returns the unit system as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Us => "us",
        }
    }

    /// Returns the human-readable label shown next to the unit toggle.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Metric => "Metric (cm)",
            Self::Us => "US (inches)",
        }
    }

    /// Returns the length unit suffix for this system.
    #[must_use]
    pub const fn length_suffix(&self) -> &'static str {
        match self {
            Self::Metric => "cm",
            Self::Us => "in",
        }
    }

    /// Returns the other unit system.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Metric => Self::Us,
            Self::Us => Self::Metric,
        }
    }

    /// Returns all available unit systems.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Metric, Self::Us]
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "cm" => Ok(Self::Metric),
            "us" | "imperial" | "in" | "inches" => Ok(Self::Us),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid unit system string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitParseError(String);

impl std::fmt::Display for UnitParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid unit system '{}', expected one of: metric, us",
            self.0
        )
    }
}

impl std::error::Error for UnitParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parse() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!("US".parse::<UnitSystem>().unwrap(), UnitSystem::Us);
        assert_eq!("inches".parse::<UnitSystem>().unwrap(), UnitSystem::Us);
        assert_eq!(" cm ".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn test_unit_parse_error_message() {
        let err = "stone".parse::<UnitSystem>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid unit system 'stone', expected one of: metric, us"
        );
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(UnitSystem::Metric.label(), "Metric (cm)");
        assert_eq!(UnitSystem::Us.label(), "US (inches)");
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
        assert_eq!(UnitSystem::Metric.toggled(), UnitSystem::Us);
    }

    #[test]
    fn test_unit_serde_lowercase() {
        let json = serde_json::to_string(&UnitSystem::Us).unwrap();
        assert_eq!(json, "\"us\"");
        let parsed: UnitSystem = serde_json::from_str("\"metric\"").unwrap();
        assert_eq!(parsed, UnitSystem::Metric);
    }
}
