//! Plain text output format.

use bodyfat_reference::{ReferenceTables, Table};
use std::io::Write;

use crate::{FormatError, Formatter, Report};

/// Page heading.
pub const TITLE: &str = "Male Body Fat Calculator";

/// Contact line printed after the tables.
pub const CONTACT: &str =
    "Learn more about our project on GitHub: https://github.com/unimodular/Bodyfat-Prediction.git";

/// Human-readable text formatter.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    /// Whether to print the page heading and input summary.
    show_header: bool,
    /// Whether to print the contact line after the tables.
    show_contact: bool,
}

impl TextFormatter {
    /// Creates a text formatter with heading and contact line enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_header: true,
            show_contact: true,
        }
    }

    /// Creates a formatter that prints only the result lines and tables.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            show_header: false,
            show_contact: false,
        }
    }

    /// Sets whether to print the page heading and input summary.
    #[must_use]
    pub const fn with_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    /// Sets whether to print the contact line.
    #[must_use]
    pub const fn with_contact(mut self, show: bool) -> Self {
        self.show_contact = show;
        self
    }
}

/// Formats an optional measurement for the input summary.
fn format_value(value: Option<f64>, suffix: &str) -> String {
    value.map_or_else(|| "(not set)".to_string(), |v| format!("{v} {suffix}"))
}

/// Writes a titled two-column table with aligned columns.
fn write_table<T, W: Write>(
    table: &Table<T>,
    cells: impl Fn(&T) -> [String; 2],
    writer: &mut W,
) -> Result<(), FormatError> {
    let rows: Vec<[String; 2]> = table.rows.iter().map(cells).collect();
    let width = rows
        .iter()
        .map(|r| r[0].len())
        .chain(std::iter::once(table.columns[0].len()))
        .max()
        .unwrap_or_default();

    writeln!(writer, "{}", table.title)?;
    writeln!(
        writer,
        "{:<width$}  {}",
        table.columns[0], table.columns[1]
    )?;
    writeln!(
        writer,
        "{}",
        "-".repeat(width + 2 + table.columns[1].len())
    )?;
    for [left, right] in &rows {
        writeln!(writer, "{left:<width$}  {right}")?;
    }
    Ok(())
}

impl Formatter for TextFormatter {
    fn write_report<W: Write>(&self, report: &Report, mut writer: W) -> Result<(), FormatError> {
        let unit = report.inputs.unit;

        if self.show_header {
            writeln!(writer, "{TITLE}")?;
            writeln!(writer)?;
            writeln!(writer, "Unit System: {}", unit.label())?;
            let suffix = unit.length_suffix();
            writeln!(
                writer,
                "Abdomen: {}",
                format_value(report.inputs.abdomen, suffix)
            )?;
            writeln!(
                writer,
                "Wrist:   {}",
                format_value(report.inputs.wrist, suffix)
            )?;
            writeln!(
                writer,
                "Height:  {}",
                format_value(report.inputs.height, suffix)
            )?;
            writeln!(writer)?;
        }

        writeln!(writer, "{}", report.result.formula_text)?;
        if let Some(line) = report.percent_line() {
            writeln!(writer, "{line}")?;
        }
        if let Some(text) = &report.message_text {
            writeln!(writer, "{text}")?;
        }
        if let Some(category) = &report.category {
            writeln!(
                writer,
                "ACE Category: {} ({}%)",
                category.category, category.range
            )?;
        }
        if let Some(ideal) = &report.ideal {
            writeln!(
                writer,
                "Ideal Body Fat for age group {}: {}%",
                ideal.age_group, ideal.ideal_percent
            )?;
        }

        Ok(())
    }

    fn write_tables<W: Write>(
        &self,
        tables: &ReferenceTables,
        mut writer: W,
    ) -> Result<(), FormatError> {
        write_table(tables.ace(), |row| row.cells(), &mut writer)?;
        writeln!(writer)?;
        write_table(tables.jackson_pollock(), |row| row.cells(), &mut writer)?;

        if self.show_contact {
            writeln!(writer)?;
            writeln!(writer, "Contact")?;
            writeln!(writer, "{CONTACT}")?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
