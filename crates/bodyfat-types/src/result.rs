//! Estimation result representation.

use serde::Serialize;

use crate::{UnitSystem, ValidationMessage};

/// Outcome of a single estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimationResult {
    /// Unit system the inputs were interpreted in.
    pub unit: UnitSystem,
    /// Estimated body fat percentage.
    ///
    /// Present whenever all three inputs are set and finite, even if a
    /// validation message marks it as unusable.
    pub body_fat_percent: Option<f64>,
    /// The regression formula as written for the selected unit system.
    pub formula_text: &'static str,
    /// Validation error or warning, if any.
    pub message: Option<ValidationMessage>,
}

impl EstimationResult {
    /// Creates a new estimation result.
    #[must_use]
    pub const fn new(
        unit: UnitSystem,
        body_fat_percent: Option<f64>,
        formula_text: &'static str,
        message: Option<ValidationMessage>,
    ) -> Self {
        Self {
            unit,
            body_fat_percent,
            formula_text,
            message,
        }
    }

    /// Returns true if the percentage may be shown to the user.
    ///
    /// Warnings do not block display; errors do.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        self.body_fat_percent.is_some() && !self.message.is_some_and(|m| m.is_error())
    }

    /// Returns the displayable percentage.
    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        self.body_fat_percent.filter(|_| self.is_displayable())
    }

    /// Formats the percentage for display, e.g. `Calculated Body Fat: 10.33%`.
    #[must_use]
    pub fn display_percent(&self) -> Option<String> {
        self.percent()
            .map(|pct| format!("Calculated Body Fat: {pct:.2}%"))
    }

    /// Returns true if a warning (not an error) is attached.
    #[must_use]
    pub fn has_warning(&self) -> bool {
        self.message.is_some_and(|m| !m.is_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMULA: &str = "Body Fat = ...";

    #[test]
    fn test_display_percent() {
        let result = EstimationResult::new(UnitSystem::Metric, Some(10.332845), FORMULA, None);
        assert!(result.is_displayable());
        assert_eq!(
            result.display_percent().as_deref(),
            Some("Calculated Body Fat: 10.33%")
        );
    }

    #[test]
    fn test_warning_still_displayable() {
        let result = EstimationResult::new(
            UnitSystem::Metric,
            Some(64.644),
            FORMULA,
            Some(ValidationMessage::ImplausibleResult),
        );
        assert!(result.is_displayable());
        assert!(result.has_warning());
        assert_eq!(result.percent(), Some(64.644));
    }

    #[test]
    fn test_error_hides_percent() {
        let result = EstimationResult::new(
            UnitSystem::Metric,
            Some(-20.0),
            FORMULA,
            Some(ValidationMessage::NonPositiveInput),
        );
        assert!(!result.is_displayable());
        assert!(!result.has_warning());
        assert_eq!(result.percent(), None);
        assert_eq!(result.display_percent(), None);
    }

    #[test]
    fn test_missing_percent() {
        let result = EstimationResult::new(
            UnitSystem::Us,
            None,
            FORMULA,
            Some(ValidationMessage::MissingInput),
        );
        assert!(!result.is_displayable());
        assert_eq!(result.display_percent(), None);
    }
}
