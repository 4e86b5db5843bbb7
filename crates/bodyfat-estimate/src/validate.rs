//! Input validation and plausibility checks.

use bodyfat_types::{Measurements, UnitSystem, ValidationMessage};
use serde::{Deserialize, Serialize};

/// Lowest plausible body fat percentage (exclusive).
pub const MIN_PLAUSIBLE_BODY_FAT: f64 = 0.0;

/// Highest plausible body fat percentage (exclusive).
pub const MAX_PLAUSIBLE_BODY_FAT: f64 = 50.0;

/// Upper bounds above which an input is flagged as suspiciously large.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlausibilityLimits {
    /// Maximum abdomen circumference.
    pub abdomen: f64,
    /// Maximum wrist circumference.
    pub wrist: f64,
    /// Maximum height.
    pub height: f64,
}

impl PlausibilityLimits {
    /// Limits for metric input, in centimetres.
    pub const METRIC: Self = Self {
        abdomen: 200.0,
        wrist: 50.0,
        height: 250.0,
    };

    /// Limits for US input, in inches.
    pub const US: Self = Self {
        abdomen: 80.0,
        wrist: 20.0,
        height: 100.0,
    };

    /// Returns the limits for a unit system.
    #[must_use]
    pub const fn for_unit(unit: UnitSystem) -> &'static Self {
        match unit {
            UnitSystem::Metric => &Self::METRIC,
            UnitSystem::Us => &Self::US,
        }
    }

    /// Returns true if any value exceeds its limit.
    #[must_use]
    pub fn exceeded(&self, abdomen: f64, wrist: f64, height: f64) -> bool {
        abdomen > self.abdomen || wrist > self.wrist || height > self.height
    }
}

/// Returns true if a value is a finite number greater than zero.
///
/// NaN and infinities fail this check.
#[must_use]
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Returns true if a percentage lies strictly between the plausible bounds.
#[must_use]
pub fn is_plausible_body_fat(percent: f64) -> bool {
    percent > MIN_PLAUSIBLE_BODY_FAT && percent < MAX_PLAUSIBLE_BODY_FAT
}

/// Validates measurements and the percentage computed from them.
///
/// Checks run in priority order and the first failing one wins:
///
/// 1. any value unset: [`ValidationMessage::MissingInput`]
/// 2. any value not a positive finite number: [`ValidationMessage::NonPositiveInput`]
/// 3. any value above the unit's [`PlausibilityLimits`]: [`ValidationMessage::InputTooLarge`]
/// 4. percentage outside (0, 50): [`ValidationMessage::ImplausibleResult`]
#[must_use]
pub fn validate(
    measurements: &Measurements,
    body_fat_percent: Option<f64>,
) -> Option<ValidationMessage> {
    let Some((abdomen, wrist, height)) = measurements.values() else {
        return Some(ValidationMessage::MissingInput);
    };

    if ![abdomen, wrist, height]
        .into_iter()
        .all(is_positive_finite)
    {
        return Some(ValidationMessage::NonPositiveInput);
    }

    if PlausibilityLimits::for_unit(measurements.unit).exceeded(abdomen, wrist, height) {
        return Some(ValidationMessage::InputTooLarge);
    }

    match body_fat_percent {
        Some(pct) if !is_plausible_body_fat(pct) => Some(ValidationMessage::ImplausibleResult),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(abdomen: f64, wrist: f64, height: f64) -> Measurements {
        Measurements::new(UnitSystem::Metric)
            .with_abdomen(abdomen)
            .with_wrist(wrist)
            .with_height(height)
    }

    #[test]
    fn test_missing_takes_priority() {
        let m = Measurements::new(UnitSystem::Metric)
            .with_abdomen(-5.0)
            .with_height(178.0);
        assert_eq!(validate(&m, None), Some(ValidationMessage::MissingInput));
    }

    #[test]
    fn test_non_positive() {
        assert_eq!(
            validate(&metric(-5.0, 16.5, 178.0), Some(-20.0)),
            Some(ValidationMessage::NonPositiveInput)
        );
        assert_eq!(
            validate(&metric(75.0, 0.0, 178.0), Some(30.0)),
            Some(ValidationMessage::NonPositiveInput)
        );
    }

    #[test]
    fn test_non_finite_counts_as_non_positive() {
        assert_eq!(
            validate(&metric(f64::NAN, 16.5, 178.0), None),
            Some(ValidationMessage::NonPositiveInput)
        );
        assert_eq!(
            validate(&metric(75.0, 16.5, f64::INFINITY), None),
            Some(ValidationMessage::NonPositiveInput)
        );
        assert_eq!(
            validate(&metric(75.0, f64::NEG_INFINITY, 178.0), None),
            Some(ValidationMessage::NonPositiveInput)
        );
    }

    #[test]
    fn test_non_positive_beats_too_large() {
        assert_eq!(
            validate(&metric(250.0, -1.0, 178.0), Some(120.0)),
            Some(ValidationMessage::NonPositiveInput)
        );
    }

    #[test]
    fn test_too_large_metric() {
        assert_eq!(
            validate(&metric(250.0, 16.5, 178.0), Some(129.0)),
            Some(ValidationMessage::InputTooLarge)
        );
        assert_eq!(
            validate(&metric(75.0, 51.0, 178.0), Some(1.0)),
            Some(ValidationMessage::InputTooLarge)
        );
        assert_eq!(
            validate(&metric(75.0, 16.5, 251.0), Some(1.0)),
            Some(ValidationMessage::InputTooLarge)
        );
    }

    #[test]
    fn test_limits_are_inclusive() {
        assert_eq!(validate(&metric(200.0, 16.5, 178.0), Some(30.0)), None);
    }

    #[test]
    fn test_too_large_us() {
        let m = Measurements::new(UnitSystem::Us)
            .with_abdomen(81.0)
            .with_wrist(7.0)
            .with_height(70.0);
        assert_eq!(
            validate(&m, Some(10.0)),
            Some(ValidationMessage::InputTooLarge)
        );

        // Values fine in centimetres are too large in inches.
        let m = Measurements::new(UnitSystem::Us)
            .with_abdomen(75.0)
            .with_wrist(16.5)
            .with_height(178.0);
        assert_eq!(
            validate(&m, Some(10.0)),
            Some(ValidationMessage::InputTooLarge)
        );
    }

    #[test]
    fn test_implausible_result() {
        let m = metric(75.0, 16.5, 178.0);
        assert_eq!(
            validate(&m, Some(0.0)),
            Some(ValidationMessage::ImplausibleResult)
        );
        assert_eq!(
            validate(&m, Some(50.0)),
            Some(ValidationMessage::ImplausibleResult)
        );
        assert_eq!(
            validate(&m, Some(-3.2)),
            Some(ValidationMessage::ImplausibleResult)
        );
        assert_eq!(validate(&m, Some(49.99)), None);
        assert_eq!(validate(&m, Some(0.01)), None);
    }

    #[test]
    fn test_plausibility_helpers() {
        assert!(is_positive_finite(0.1));
        assert!(!is_positive_finite(0.0));
        assert!(!is_positive_finite(f64::NAN));
        assert!(is_plausible_body_fat(25.0));
        assert!(!is_plausible_body_fat(f64::NAN));
    }
}
