//! Tables command implementation.

use crate::display::{Format, open_output, write_tables};
use crate::settings::Settings;
use anyhow::Result;
use bodyfat_lib::prelude::*;
use std::io::Write;
use std::path::PathBuf;

/// Print the ACE and Jackson & Pollock reference tables.
pub(crate) fn show_tables(
    settings: &Settings,
    format: Option<Format>,
    output: Option<PathBuf>,
) -> Result<()> {
    let format = format.unwrap_or(settings.format);

    let mut out = open_output(output.as_deref())?;
    write_tables(ReferenceTables::global(), format, &mut out)?;
    out.flush()?;

    Ok(())
}
