//! Rust library for regression-based male body fat estimation.
//!
//! This is a facade crate that re-exports functionality from the bodyfat
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use bodyfat_lib::prelude::*;
//!
//! let mut session = Session::default();
//! let result = session.set_abdomen(Some(82.0));
//! if let Some(line) = result.display_percent() {
//!     println!("{line}");
//! }
//!
//! let tables = ReferenceTables::global();
//! let report = Report::new(*session.inputs(), *session.result(), tables, Some(31));
//! TextFormatter::new()
//!     .write_report(&report, std::io::stdout())
//!     .unwrap();
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/unimodular/Bodyfat-Prediction/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use bodyfat_types::*;

// Re-export the estimator
pub use bodyfat_estimate::{
    Estimator, NormalizedInputs, PlausibilityLimits, RegressionModel, Session, estimate,
    normalize, validate,
};

// Re-export reference tables
#[cfg(feature = "reference")]
pub use bodyfat_reference::{AceCategory, IdealBodyFat, ReferenceTables, Table};

// Re-export formatters
#[cfg(feature = "format")]
pub use bodyfat_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, Report,
    TextFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use bodyfat_lib::prelude::*;
/// ```
pub mod prelude {
    pub use bodyfat_types::{
        BodyfatError, EstimationResult, Measurements, Result, Severity, UnitSystem,
        ValidationMessage,
    };

    pub use bodyfat_estimate::{Estimator, Session, estimate};

    #[cfg(feature = "reference")]
    pub use bodyfat_reference::ReferenceTables;

    #[cfg(feature = "format")]
    pub use bodyfat_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, Report, TextFormatter,
    };
}
