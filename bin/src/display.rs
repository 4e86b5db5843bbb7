//! Display utilities and output formatting for the bodyfat CLI.

use anyhow::{Context, Result};
use bodyfat_lib::prelude::*;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for reports and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Format {
    #[default]
    Text,
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the library format this CLI format maps to.
    pub(crate) const fn output_format(self) -> OutputFormat {
        match self {
            Self::Text => OutputFormat::Text,
            Self::Csv => OutputFormat::Csv,
            Self::Json => OutputFormat::Json,
            Self::Ndjson => OutputFormat::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.output_format())
    }
}

/// Opens the output destination: a file if a path is given, stdout otherwise.
pub(crate) fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}

/// Write an estimation report in the specified format.
pub(crate) fn write_report<W: Write>(report: &Report, format: Format, writer: W) -> Result<()> {
    match format {
        Format::Text => TextFormatter::new().write_report(report, writer)?,
        Format::Csv => CsvFormatter::new().write_report(report, writer)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_report(report, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_report(report, writer)?,
    }
    Ok(())
}

/// Write the reference tables in the specified format.
pub(crate) fn write_tables<W: Write>(
    tables: &ReferenceTables,
    format: Format,
    writer: W,
) -> Result<()> {
    match format {
        Format::Text => TextFormatter::new().write_tables(tables, writer)?,
        Format::Csv => CsvFormatter::new().write_tables(tables, writer)?,
        Format::Json => JsonFormatter::new()
            .with_pretty(true)
            .write_tables(tables, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_tables(tables, writer)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mapping() {
        assert_eq!(Format::Text.output_format(), OutputFormat::Text);
        assert_eq!(Format::Ndjson.to_string(), "ndjson");
        assert_eq!(Format::default(), Format::Text);
    }

    #[test]
    fn test_write_report_formats() {
        let inputs = Measurements::default_for(UnitSystem::Metric);
        let result = Estimator::global().estimate(&inputs);
        let report = Report::new(inputs, result, ReferenceTables::global(), None);

        let mut csv = Vec::new();
        write_report(&report, Format::Csv, &mut csv).unwrap();
        assert!(String::from_utf8(csv).unwrap().contains("10.33"));

        let mut json = Vec::new();
        write_report(&report, Format::Json, &mut json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["inputs"]["unit"], "metric");
    }

    #[test]
    fn test_write_tables_text() {
        let mut out = Vec::new();
        write_tables(ReferenceTables::global(), Format::Text, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Athletes"));
    }
}
