//! Validation messages attached to an estimate.

use serde::{Deserialize, Serialize};

/// How serious a validation message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The inputs are structurally unusable; the percentage must not be shown.
    Error,
    /// The inputs or output look implausible; the percentage is still shown.
    Warning,
}

impl Severity {
    /// Returns the severity as a display prefix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single message describing why an estimate is invalid or suspicious.
///
/// At most one message is attached to any estimate. Variants are listed in
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMessage {
    /// At least one measurement is unset.
    MissingInput,
    /// At least one measurement is zero, negative or not a finite number.
    NonPositiveInput,
    /// At least one measurement exceeds the plausible bound for its unit system.
    InputTooLarge,
    /// The computed percentage falls outside the open interval (0, 50).
    ImplausibleResult,
}

impl ValidationMessage {
    /// Returns the severity of this message.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::MissingInput | Self::NonPositiveInput => Severity::Error,
            Self::InputTooLarge | Self::ImplausibleResult => Severity::Warning,
        }
    }

    /// Returns true if this message has [`Severity::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity(), Severity::Error)
    }

    /// Returns the message text without the severity prefix.
    #[must_use]
    pub const fn detail(&self) -> &'static str {
        match self {
            Self::MissingInput => "Please enter all the values",
            Self::NonPositiveInput => "All inputs must be greater than zero",
            Self::InputTooLarge => "input values too large",
            Self::ImplausibleResult => "computed body fat out of plausible range",
        }
    }
}

impl std::fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity(), self.detail())
    }
}
