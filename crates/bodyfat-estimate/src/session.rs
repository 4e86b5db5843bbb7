//! Per-user input state with recompute-on-change.

use bodyfat_types::{EstimationResult, Measurements, UnitSystem};

use crate::Estimator;

/// One user's last-entered measurements and the estimate derived from them.
///
/// Every setter recomputes the estimate immediately, so [`Session::result`]
/// always reflects the current inputs. Sessions share nothing with each
/// other; a serving layer keeps one per user.
#[derive(Debug, Clone)]
pub struct Session {
    estimator: Estimator,
    inputs: Measurements,
    result: EstimationResult,
}

impl Session {
    /// Creates a session pre-filled with the given measurements.
    #[must_use]
    pub fn new(inputs: Measurements) -> Self {
        Self::with_estimator(Estimator::default(), inputs)
    }

    /// Creates a session using a specific estimator.
    #[must_use]
    pub fn with_estimator(estimator: Estimator, inputs: Measurements) -> Self {
        let result = estimator.estimate(&inputs);
        Self {
            estimator,
            inputs,
            result,
        }
    }

    /// Returns the current inputs.
    #[must_use]
    pub const fn inputs(&self) -> &Measurements {
        &self.inputs
    }

    /// Returns the estimate for the current inputs.
    #[must_use]
    pub const fn result(&self) -> &EstimationResult {
        &self.result
    }

    /// Switches the unit system. Stored values are reinterpreted, not converted.
    pub fn set_unit(&mut self, unit: UnitSystem) -> &EstimationResult {
        self.update(|m| m.unit = unit)
    }

    /// Sets or clears the abdomen circumference.
    pub fn set_abdomen(&mut self, abdomen: Option<f64>) -> &EstimationResult {
        self.update(|m| m.abdomen = abdomen)
    }

    /// Sets or clears the wrist circumference.
    pub fn set_wrist(&mut self, wrist: Option<f64>) -> &EstimationResult {
        self.update(|m| m.wrist = wrist)
    }

    /// Sets or clears the height.
    pub fn set_height(&mut self, height: Option<f64>) -> &EstimationResult {
        self.update(|m| m.height = height)
    }

    /// Replaces all inputs at once.
    pub fn replace(&mut self, inputs: Measurements) -> &EstimationResult {
        self.update(|m| *m = inputs)
    }

    fn update(&mut self, change: impl FnOnce(&mut Measurements)) -> &EstimationResult {
        change(&mut self.inputs);
        self.result = self.estimator.estimate(&self.inputs);
        &self.result
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Measurements::default_for(UnitSystem::default()))
    }
}
