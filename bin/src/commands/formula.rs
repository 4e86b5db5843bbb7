//! Formula command implementation.

use crate::settings::Settings;
use anyhow::Result;
use bodyfat_lib::{RegressionModel, UnitSystem};

/// Print the regression formula for a unit system.
pub(crate) fn show_formula(settings: &Settings, unit: Option<UnitSystem>) -> Result<()> {
    let unit = unit.unwrap_or(settings.unit);

    println!("Unit System: {}", unit.label());
    println!("{}", RegressionModel::formula_text(unit));

    Ok(())
}
