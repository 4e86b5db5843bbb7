//! Anthropometric measurement inputs.

use serde::{Deserialize, Serialize};

use crate::UnitSystem;

/// Starting abdomen circumference offered to a fresh session.
const DEFAULT_ABDOMEN: f64 = 75.0;
/// Starting wrist circumference offered to a fresh session.
const DEFAULT_WRIST: f64 = 16.5;
/// Starting height offered to a fresh session.
const DEFAULT_HEIGHT: f64 = 178.0;

/// The three measurements an estimate is computed from.
///
/// Every value is expressed in the units of [`Measurements::unit`] and may be
/// unset. Unset is a normal state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurements {
    /// Unit system the values are entered in.
    pub unit: UnitSystem,
    /// Abdomen circumference.
    pub abdomen: Option<f64>,
    /// Wrist circumference.
    pub wrist: Option<f64>,
    /// Height.
    pub height: Option<f64>,
}

impl Measurements {
    /// Creates an empty set of measurements in the given unit system.
    #[must_use]
    pub const fn new(unit: UnitSystem) -> Self {
        Self {
            unit,
            abdomen: None,
            wrist: None,
            height: None,
        }
    }

    /// Creates measurements from optional values.
    #[must_use]
    pub const fn from_parts(
        unit: UnitSystem,
        abdomen: Option<f64>,
        wrist: Option<f64>,
        height: Option<f64>,
    ) -> Self {
        Self {
            unit,
            abdomen,
            wrist,
            height,
        }
    }

    /// Returns the starting values a new session is pre-filled with.
    ///
    /// The numbers are the same for both unit systems.
    #[must_use]
    pub const fn default_for(unit: UnitSystem) -> Self {
        Self::from_parts(
            unit,
            Some(DEFAULT_ABDOMEN),
            Some(DEFAULT_WRIST),
            Some(DEFAULT_HEIGHT),
        )
    }

    /// Sets the abdomen circumference.
    #[must_use]
    pub const fn with_abdomen(mut self, abdomen: f64) -> Self {
        self.abdomen = Some(abdomen);
        self
    }

    /// Sets the wrist circumference.
    #[must_use]
    pub const fn with_wrist(mut self, wrist: f64) -> Self {
        self.wrist = Some(wrist);
        self
    }

    /// Sets the height.
    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the unit system without converting the stored values.
    #[must_use]
    pub const fn with_unit(mut self, unit: UnitSystem) -> Self {
        self.unit = unit;
        self
    }

    /// Returns true if all three measurements are set.
    #[must_use]
    pub const fn all_present(&self) -> bool {
        self.abdomen.is_some() && self.wrist.is_some() && self.height.is_some()
    }

    /// Returns the three values as `(abdomen, wrist, height)` if all are set.
    #[must_use]
    pub const fn values(&self) -> Option<(f64, f64, f64)> {
        match (self.abdomen, self.wrist, self.height) {
            (Some(a), Some(w), Some(h)) => Some((a, w, h)),
            _ => None,
        }
    }
}
