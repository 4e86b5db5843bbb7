//! Renderable estimation report.

use bodyfat_reference::{AceCategory, IdealBodyFat, ReferenceTables};
use bodyfat_types::{EstimationResult, Measurements, Severity};
use serde::Serialize;

/// Everything shown for a single estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The measurements as entered.
    pub inputs: Measurements,
    /// The estimate computed from them.
    pub result: EstimationResult,
    /// Severity of the attached message, if any.
    pub severity: Option<Severity>,
    /// Full message text, e.g. `Warning: input values too large`.
    pub message_text: Option<String>,
    /// ACE category of the percentage, when it is displayable.
    pub category: Option<AceCategory>,
    /// Ideal percentage for the user's age group, when an age was given.
    pub ideal: Option<IdealBodyFat>,
}

impl Report {
    /// Builds a report for an estimate.
    ///
    /// The category lookup only happens for displayable percentages.
    #[must_use]
    pub fn new(
        inputs: Measurements,
        result: EstimationResult,
        tables: &ReferenceTables,
        age: Option<u32>,
    ) -> Self {
        let category = result
            .percent()
            .and_then(|pct| tables.classify(pct))
            .cloned();
        let ideal = age.and_then(|a| tables.ideal_for_age(a)).cloned();

        Self {
            inputs,
            result,
            severity: result.message.map(|m| m.severity()),
            message_text: result.message.map(|m| m.to_string()),
            category,
            ideal,
        }
    }

    /// Returns the formatted percentage line, if displayable.
    #[must_use]
    pub fn percent_line(&self) -> Option<String> {
        self.result.display_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodyfat_estimate::Estimator;
    use bodyfat_types::UnitSystem;

    #[test]
    fn test_report_with_category() {
        let inputs = Measurements::default_for(UnitSystem::Metric);
        let result = Estimator::global().estimate(&inputs);
        let report = Report::new(inputs, result, ReferenceTables::global(), Some(35));

        assert_eq!(report.severity, None);
        assert_eq!(report.message_text, None);
        assert_eq!(
            report.category.as_ref().map(|c| c.category.as_str()),
            Some("Athletes")
        );
        assert_eq!(report.ideal.as_ref().map(|i| i.ideal_percent), Some(11.5));
        assert_eq!(
            report.percent_line().as_deref(),
            Some("Calculated Body Fat: 10.33%")
        );
    }

    #[test]
    fn test_report_with_error() {
        let inputs = Measurements::new(UnitSystem::Metric).with_wrist(16.5);
        let result = Estimator::global().estimate(&inputs);
        let report = Report::new(inputs, result, ReferenceTables::global(), None);

        assert_eq!(report.severity, Some(Severity::Error));
        assert_eq!(
            report.message_text.as_deref(),
            Some("Error: Please enter all the values")
        );
        assert_eq!(report.category, None);
        assert_eq!(report.ideal, None);
        assert_eq!(report.percent_line(), None);
    }
}
