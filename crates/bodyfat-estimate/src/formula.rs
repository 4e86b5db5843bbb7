//! The fixed-coefficient regression formula and unit normalization.
//!
//! The model takes abdomen and wrist circumference in centimetres and height
//! in inches. Metric input has its height divided by [`CM_PER_INCH`]; US input
//! has its circumferences multiplied by it. Evaluating both branches through
//! one normalized form keeps the arithmetic identical to the published
//! formula for either unit system.

use bodyfat_types::{CM_PER_INCH, Measurements, UnitSystem};
use serde::{Deserialize, Serialize};

/// Formula text shown for metric input.
const METRIC_FORMULA: &str = "Body Fat = 9.42844127683235 + 32.97367213*(abdomen-69.4)/(118-69.4) - 6.5546632*(wrist-16.1)/(20.4-16.1) - 5.1692971*(height/2.54-64)/(77.75-64)";

/// Formula text shown for US input.
const US_FORMULA: &str = "Body Fat = 9.42844127683235 + 32.97367213*(abdomen*2.54-69.4)/(118-69.4) - 6.5546632*(wrist*2.54-16.1)/(20.4-16.1) - 5.1692971*(height-64)/(77.75-64)";

/// Measurements expressed in the units the regression expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInputs {
    /// Abdomen circumference in centimetres.
    pub abdomen_cm: f64,
    /// Wrist circumference in centimetres.
    pub wrist_cm: f64,
    /// Height in inches.
    pub height_in: f64,
}

impl NormalizedInputs {
    /// Normalizes raw values entered in `unit`.
    #[must_use]
    pub fn from_raw(unit: UnitSystem, abdomen: f64, wrist: f64, height: f64) -> Self {
        match unit {
            UnitSystem::Metric => Self {
                abdomen_cm: abdomen,
                wrist_cm: wrist,
                height_in: height / CM_PER_INCH,
            },
            UnitSystem::Us => Self {
                abdomen_cm: abdomen * CM_PER_INCH,
                wrist_cm: wrist * CM_PER_INCH,
                height_in: height,
            },
        }
    }

    /// Returns height in centimetres.
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_in * CM_PER_INCH
    }
}

/// Normalizes a set of measurements.
///
/// Returns `None` if any value is unset or not finite.
#[must_use]
pub fn normalize(measurements: &Measurements) -> Option<NormalizedInputs> {
    let (abdomen, wrist, height) = measurements.values()?;
    if !(abdomen.is_finite() && wrist.is_finite() && height.is_finite()) {
        return None;
    }
    Some(NormalizedInputs::from_raw(
        measurements.unit,
        abdomen,
        wrist,
        height,
    ))
}

/// A single standardized regression term: `coefficient * (x - low) / (high - low)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Regression coefficient.
    pub coefficient: f64,
    /// Lower reference value of the predictor.
    pub low: f64,
    /// Upper reference value of the predictor.
    pub high: f64,
}

impl Term {
    /// Creates a new term.
    #[must_use]
    pub const fn new(coefficient: f64, low: f64, high: f64) -> Self {
        Self {
            coefficient,
            low,
            high,
        }
    }

    /// Evaluates the term for a predictor value.
    #[must_use]
    pub fn apply(&self, x: f64) -> f64 {
        self.coefficient * (x - self.low) / (self.high - self.low)
    }
}

/// The body fat regression model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    /// Constant term.
    pub intercept: f64,
    /// Abdomen term, added (centimetres).
    pub abdomen: Term,
    /// Wrist term, subtracted (centimetres).
    pub wrist: Term,
    /// Height term, subtracted (inches).
    pub height: Term,
}

impl RegressionModel {
    /// The published model.
    pub const STANDARD: Self = Self {
        intercept: 9.42844127683235,
        abdomen: Term::new(32.97367213, 69.4, 118.0),
        wrist: Term::new(6.5546632, 16.1, 20.4),
        height: Term::new(5.1692971, 64.0, 77.75),
    };

    /// Evaluates the model, returning a body fat percentage.
    #[must_use]
    pub fn evaluate(&self, inputs: &NormalizedInputs) -> f64 {
        self.intercept + self.abdomen.apply(inputs.abdomen_cm)
            - self.wrist.apply(inputs.wrist_cm)
            - self.height.apply(inputs.height_in)
    }

    /// Returns the formula as displayed for the given unit system.
    #[must_use]
    pub const fn formula_text(unit: UnitSystem) -> &'static str {
        match unit {
            UnitSystem::Metric => METRIC_FORMULA,
            UnitSystem::Us => US_FORMULA,
        }
    }
}

impl Default for RegressionModel {
    fn default() -> Self {
        Self::STANDARD
    }
}
