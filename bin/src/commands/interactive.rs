//! Interactive command implementation.
//!
//! Keeps one [`Session`] for the user and reprints the report after every
//! edit, the same way a form recomputes when a field changes.

use crate::display::{Format, write_report, write_tables};
use crate::settings::Settings;
use anyhow::{Context, Result};
use bodyfat_lib::prelude::*;
use inquire::validator::Validation;
use inquire::{CustomUserError, InquireError, Select, Text};
use std::io::Write;
use tracing::debug;

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Abdomen,
    Wrist,
    Height,
    ToggleUnit,
    Tables,
    Quit,
}

impl Action {
    const ALL: [Self; 6] = [
        Self::Abdomen,
        Self::Wrist,
        Self::Height,
        Self::ToggleUnit,
        Self::Tables,
        Self::Quit,
    ];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Abdomen => "Edit abdomen",
            Self::Wrist => "Edit wrist",
            Self::Height => "Edit height",
            Self::ToggleUnit => "Switch unit system",
            Self::Tables => "Show reference tables",
            Self::Quit => "Quit",
        };
        write!(f, "{label}")
    }
}

/// Outcome of editing one field.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Edit {
    /// New value; `None` clears the field.
    Set(Option<f64>),
    /// Prompt was dismissed; keep the current value.
    Keep,
    /// User interrupted; leave the session.
    Quit,
}

/// Parses a measurement field. Blank input clears the field.
fn parse_measurement(input: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Formats a current value as the prompt's initial text.
fn initial_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn prompt_value(name: &str, current: Option<f64>, unit: UnitSystem) -> Result<Edit> {
    let label = format!("{name} ({}):", unit.length_suffix());
    let initial = initial_text(current);

    let answer = Text::new(&label)
        .with_initial_value(&initial)
        .with_help_message("Leave blank to clear the value")
        .with_validator(|input: &str| {
            Ok::<_, CustomUserError>(match parse_measurement(input) {
                Ok(_) => Validation::Valid,
                Err(_) => Validation::Invalid("Please enter a number".into()),
            })
        })
        .prompt();

    match answer {
        Ok(text) => Ok(Edit::Set(
            parse_measurement(&text).context("Validated input failed to parse")?,
        )),
        Err(InquireError::OperationCanceled) => Ok(Edit::Keep),
        Err(InquireError::OperationInterrupted) => Ok(Edit::Quit),
        Err(e) => Err(e).context("Prompt failed"),
    }
}

fn print_report(session: &Session, age: Option<u32>) -> Result<()> {
    let report = Report::new(
        *session.inputs(),
        *session.result(),
        ReferenceTables::global(),
        age,
    );
    let mut out = std::io::stdout().lock();
    writeln!(out)?;
    write_report(&report, Format::Text, &mut out)?;
    writeln!(out)?;
    Ok(())
}

/// Run an interactive session seeded from the settings' initial values.
pub(crate) fn interactive(settings: &Settings, age: Option<u32>) -> Result<()> {
    let mut session = Session::new(settings.initial_measurements());
    print_report(&session, age)?;

    loop {
        let action = match Select::new("What would you like to change?", Action::ALL.to_vec())
            .prompt()
        {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Menu selection failed"),
        };
        debug!(?action, "menu selection");

        let inputs = *session.inputs();
        let edit = match action {
            Action::Quit => break,
            Action::Tables => {
                let mut out = std::io::stdout().lock();
                writeln!(out)?;
                write_tables(ReferenceTables::global(), Format::Text, &mut out)?;
                writeln!(out)?;
                continue;
            }
            Action::ToggleUnit => {
                session.set_unit(inputs.unit.toggled());
                Edit::Keep
            }
            Action::Abdomen => prompt_value("Abdomen", inputs.abdomen, inputs.unit)?,
            Action::Wrist => prompt_value("Wrist", inputs.wrist, inputs.unit)?,
            Action::Height => prompt_value("Height", inputs.height, inputs.unit)?,
        };

        match (action, edit) {
            (_, Edit::Quit) => break,
            (Action::Abdomen, Edit::Set(value)) => {
                session.set_abdomen(value);
            }
            (Action::Wrist, Edit::Set(value)) => {
                session.set_wrist(value);
            }
            (Action::Height, Edit::Set(value)) => {
                session.set_height(value);
            }
            _ => {}
        }

        print_report(&session, age)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measurement() {
        assert_eq!(parse_measurement("75.5").unwrap(), Some(75.5));
        assert_eq!(parse_measurement("  16 ").unwrap(), Some(16.0));
        assert_eq!(parse_measurement("-5").unwrap(), Some(-5.0));
        assert_eq!(parse_measurement("").unwrap(), None);
        assert_eq!(parse_measurement("   ").unwrap(), None);
        assert!(parse_measurement("abc").is_err());
    }

    #[test]
    fn test_parse_non_finite_reaches_validation() {
        let value = parse_measurement("NaN").unwrap();
        assert!(value.is_some_and(f64::is_nan));

        let mut session = Session::default();
        let result = session.set_height(value);
        assert_eq!(result.message, Some(ValidationMessage::NonPositiveInput));
    }

    #[test]
    fn test_initial_text() {
        assert_eq!(initial_text(Some(178.0)), "178");
        assert_eq!(initial_text(None), "");
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(Action::ALL.len(), 6);
        assert_eq!(Action::ToggleUnit.to_string(), "Switch unit system");
        assert_eq!(Action::ALL.last(), Some(&Action::Quit));
    }
}
