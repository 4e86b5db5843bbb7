//! Body fat estimation.

use std::sync::OnceLock;

use bodyfat_types::{EstimationResult, Measurements, UnitSystem};
use tracing::debug;

use crate::formula::{RegressionModel, normalize};
use crate::validate::validate;

/// Static estimator instance.
static ESTIMATOR: OnceLock<Estimator> = OnceLock::new();

/// Body fat estimator.
///
/// Estimation is a pure function of the measurements: it performs no I/O,
/// keeps no state between calls and never fails. Invalid input is reported
/// through [`EstimationResult::message`].
#[derive(Debug, Clone)]
pub struct Estimator {
    model: RegressionModel,
}

impl Estimator {
    /// Creates a new estimator with the given regression model.
    #[must_use]
    pub const fn new(model: RegressionModel) -> Self {
        Self { model }
    }

    /// Returns the global estimator instance using the standard model.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(Self::default)
    }

    /// Returns the regression model.
    #[must_use]
    pub const fn model(&self) -> &RegressionModel {
        &self.model
    }

    /// Estimates body fat for a set of measurements.
    #[must_use]
    pub fn estimate(&self, measurements: &Measurements) -> EstimationResult {
        let unit = measurements.unit;
        let normalized = normalize(measurements);
        let body_fat_percent = normalized.map(|n| self.model.evaluate(&n));
        let message = validate(measurements, body_fat_percent);

        debug!(
            %unit,
            ?normalized,
            ?body_fat_percent,
            ?message,
            "estimated body fat"
        );

        EstimationResult::new(
            unit,
            body_fat_percent,
            RegressionModel::formula_text(unit),
            message,
        )
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(RegressionModel::STANDARD)
    }
}

/// Estimates body fat from individual, possibly unset, measurements.
///
/// Shorthand for [`Estimator::global`] followed by [`Estimator::estimate`].
#[must_use]
pub fn estimate(
    unit: UnitSystem,
    abdomen: Option<f64>,
    wrist: Option<f64>,
    height: Option<f64>,
) -> EstimationResult {
    Estimator::global().estimate(&Measurements::from_parts(unit, abdomen, wrist, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bodyfat_types::ValidationMessage;

    #[test]
    fn test_known_value() {
        let result = estimate(UnitSystem::Metric, Some(75.0), Some(16.5), Some(178.0));

        let expected = 9.42844127683235 + 32.97367213 * (75.0 - 69.4) / (118.0 - 69.4)
            - 6.5546632 * (16.5 - 16.1) / (20.4 - 16.1)
            - 5.1692971 * (178.0 / 2.54 - 64.0) / (77.75 - 64.0);

        assert!(result.formula_text.contains("9.42844127683235"));
        assert_eq!(result.body_fat_percent, Some(expected));
        assert_abs_diff_eq!(expected, 10.332845082958242, epsilon = 1e-12);
        assert_eq!(result.message, None);
        assert_eq!(
            result.display_percent().as_deref(),
            Some("Calculated Body Fat: 10.33%")
        );
    }

    #[test]
    fn test_unit_consistency() {
        let cases = [
            (34.0, 6.5, 70.0),
            (29.5, 6.3, 65.0),
            (40.0, 7.25, 74.5),
            (45.0, 8.0, 77.75),
        ];

        for (abdomen_in, wrist_in, height_in) in cases {
            let us = estimate(
                UnitSystem::Us,
                Some(abdomen_in),
                Some(wrist_in),
                Some(height_in),
            );
            let metric = estimate(
                UnitSystem::Metric,
                Some(abdomen_in * 2.54),
                Some(wrist_in * 2.54),
                Some(height_in * 2.54),
            );

            assert_abs_diff_eq!(
                us.body_fat_percent.unwrap(),
                metric.body_fat_percent.unwrap(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_formula_follows_unit() {
        let metric = estimate(UnitSystem::Metric, None, None, None);
        let us = estimate(UnitSystem::Us, None, None, None);

        assert_eq!(
            metric.formula_text,
            RegressionModel::formula_text(UnitSystem::Metric)
        );
        assert_eq!(us.formula_text, RegressionModel::formula_text(UnitSystem::Us));
    }

    #[test]
    fn test_missing_input() {
        let result = estimate(UnitSystem::Metric, None, Some(16.5), Some(178.0));

        assert_eq!(result.message, Some(ValidationMessage::MissingInput));
        assert_eq!(result.body_fat_percent, None);
        assert_eq!(result.display_percent(), None);
    }

    #[test]
    fn test_non_positive_input() {
        let result = estimate(UnitSystem::Metric, Some(-5.0), Some(16.5), Some(178.0));

        assert_eq!(result.message, Some(ValidationMessage::NonPositiveInput));
        assert!(result.body_fat_percent.is_some());
        assert!(!result.is_displayable());
    }

    #[test]
    fn test_non_finite_input() {
        let result = estimate(UnitSystem::Us, Some(f64::NAN), Some(7.0), Some(70.0));

        assert_eq!(result.message, Some(ValidationMessage::NonPositiveInput));
        assert_eq!(result.body_fat_percent, None);
    }

    #[test]
    fn test_large_value_warning_metric() {
        let result = estimate(UnitSystem::Metric, Some(250.0), Some(16.5), Some(178.0));

        assert_eq!(result.message, Some(ValidationMessage::InputTooLarge));
        assert!(result.is_displayable());
    }

    #[test]
    fn test_large_value_warning_us() {
        let result = estimate(UnitSystem::Us, Some(34.0), Some(6.5), Some(101.0));
        assert_eq!(result.message, Some(ValidationMessage::InputTooLarge));
    }

    #[test]
    fn test_out_of_range_high() {
        let result = estimate(UnitSystem::Metric, Some(150.0), Some(16.0), Some(160.0));

        assert!(result.body_fat_percent.unwrap() >= 50.0);
        assert_eq!(result.message, Some(ValidationMessage::ImplausibleResult));
        assert!(result.is_displayable());
    }

    #[test]
    fn test_out_of_range_low() {
        let result = estimate(UnitSystem::Metric, Some(60.0), Some(20.0), Some(200.0));

        assert!(result.body_fat_percent.unwrap() <= 0.0);
        assert_eq!(result.message, Some(ValidationMessage::ImplausibleResult));
    }

    #[test]
    fn test_structural_error_overrides_range() {
        // Negative height drives the estimate far above 50.
        let result = estimate(UnitSystem::Metric, Some(75.0), Some(16.5), Some(-500.0));

        assert!(result.body_fat_percent.unwrap() >= 50.0);
        assert_eq!(result.message, Some(ValidationMessage::NonPositiveInput));
    }

    #[test]
    fn test_idempotent() {
        let m = Measurements::default_for(UnitSystem::Us);
        let estimator = Estimator::default();
        assert_eq!(estimator.estimate(&m), estimator.estimate(&m));
    }
}
