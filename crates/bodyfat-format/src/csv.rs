//! CSV output format.

use bodyfat_reference::ReferenceTables;
use std::borrow::Cow;
use std::io::Write;

use crate::{FormatError, Formatter, Report};

/// CSV formatter.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a field if it contains the delimiter, a quote or a line break.
    fn escape<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if field.contains(self.delimiter) || field.contains(['"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}

/// Formats an optional number as a CSV cell (empty when unset).
fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Formatter for CsvFormatter {
    fn write_report<W: Write>(&self, report: &Report, mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "unit{d}abdomen{d}wrist{d}height{d}body_fat_percent{d}severity{d}message{d}category"
            )?;
        }

        let inputs = &report.inputs;
        let severity = report.severity.map(|s| s.as_str()).unwrap_or_default();
        let message = report
            .result
            .message
            .map(|m| m.detail())
            .unwrap_or_default();
        let category = report
            .category
            .as_ref()
            .map(|c| c.category.as_str())
            .unwrap_or_default();

        writeln!(
            writer,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
            inputs.unit,
            cell(inputs.abdomen),
            cell(inputs.wrist),
            cell(inputs.height),
            report
                .result
                .percent()
                .map(|p| format!("{p:.2}"))
                .unwrap_or_default(),
            severity,
            self.escape(message),
            self.escape(category),
        )?;

        Ok(())
    }

    fn write_tables<W: Write>(
        &self,
        tables: &ReferenceTables,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "table{d}label{d}value")?;
        }

        for row in &tables.ace().rows {
            writeln!(
                writer,
                "ace{d}{}{d}{}",
                self.escape(&row.category),
                self.escape(&row.range)
            )?;
        }
        for row in &tables.jackson_pollock().rows {
            writeln!(
                writer,
                "jackson_pollock{d}{}{d}{}",
                self.escape(&row.age_group),
                row.ideal_percent
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodyfat_estimate::Estimator;
    use bodyfat_types::{Measurements, UnitSystem};
    use std::io::Cursor;

    fn create_test_report(inputs: Measurements) -> Report {
        let result = Estimator::global().estimate(&inputs);
        Report::new(inputs, result, ReferenceTables::global(), None)
    }

    #[test]
    fn test_csv_report() {
        let formatter = CsvFormatter::new();
        let report = create_test_report(Measurements::default_for(UnitSystem::Metric));
        let mut output = Cursor::new(Vec::new());

        formatter.write_report(&report, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(
            lines[0],
            "unit,abdomen,wrist,height,body_fat_percent,severity,message,category"
        );
        assert_eq!(lines[1], "metric,75,16.5,178,10.33,,,Athletes");
    }

    #[test]
    fn test_csv_report_missing() {
        let formatter = CsvFormatter::new().with_header(false);
        let report = create_test_report(Measurements::new(UnitSystem::Us).with_wrist(7.0));
        let mut output = Cursor::new(Vec::new());

        formatter.write_report(&report, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(result, "us,,7,,,Error,Please enter all the values,\n");
    }

    #[test]
    fn test_csv_tables() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_tables(ReferenceTables::global(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "table,label,value");
        assert_eq!(lines[1], "ace,Essential Fat,2-5");
        assert_eq!(lines[10], "jackson_pollock,60+,20.3");
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_tables(ReferenceTables::global(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("table\tlabel\tvalue"));
    }

    #[test]
    fn test_escape() {
        let formatter = CsvFormatter::new();
        assert_eq!(formatter.escape("plain"), "plain");
        assert_eq!(formatter.escape("a,b"), "\"a,b\"");
        assert_eq!(formatter.escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
