//! Estimate command implementation.
//!
//! This module computes a single estimate from command-line measurements and
//! writes the report in the requested format.

use crate::display::{Format, open_output, write_report, write_tables};
use crate::settings::Settings;
use anyhow::Result;
use bodyfat_lib::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Estimate body fat from measurements given on the command line.
///
/// Validation messages are part of the report, not command failures.
#[allow(clippy::too_many_arguments)]
pub(crate) fn estimate(
    settings: &Settings,
    unit: Option<UnitSystem>,
    abdomen: Option<f64>,
    wrist: Option<f64>,
    height: Option<f64>,
    age: Option<u32>,
    format: Option<Format>,
    output: Option<PathBuf>,
    show_tables: bool,
) -> Result<()> {
    let unit = unit.unwrap_or(settings.unit);
    let format = format.unwrap_or(settings.format);

    let inputs = Measurements::from_parts(unit, abdomen, wrist, height);
    let result = Estimator::global().estimate(&inputs);

    if let Some(message) = result.message {
        info!(reason = %message, "measurements did not pass validation");
    }

    let tables = ReferenceTables::global();
    let report = Report::new(inputs, result, tables, age);

    let mut out = open_output(output.as_deref())?;
    write_report(&report, format, &mut out)?;

    if show_tables {
        if format == Format::Text {
            writeln!(out)?;
            write_tables(tables, format, &mut out)?;
        } else {
            warn!(%format, "--tables is only supported for text output, ignoring");
        }
    }
    out.flush()?;

    if let Some(path) = output {
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
