//! JSON output format.

use bodyfat_reference::ReferenceTables;
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter, Report};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// A single JSON document.
    #[default]
    Document,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for document style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (document style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Document,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (document style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_document<T: Serialize, W: Write>(
        &self,
        value: &T,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_report<W: Write>(&self, report: &Report, writer: W) -> Result<(), FormatError> {
        // A report is a single record, so both styles emit one object.
        match self.style {
            JsonStyle::Document => self.write_document(report, writer),
            JsonStyle::Ndjson => Self::new().write_document(report, writer),
        }
    }

    fn write_tables<W: Write>(
        &self,
        tables: &ReferenceTables,
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Document => self.write_document(tables, writer),
            JsonStyle::Ndjson => {
                for row in &tables.ace().rows {
                    serde_json::to_writer(&mut writer, &("ace", row))?;
                    writeln!(writer)?;
                }
                for row in &tables.jackson_pollock().rows {
                    serde_json::to_writer(&mut writer, &("jackson_pollock", row))?;
                    writeln!(writer)?;
                }
                Ok(())
            }
        }
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Document => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
