//! Output formatters for the bodyfat estimator.
//!
//! This crate renders a [`Report`] and the reference tables in several
//! output formats:
//!
//! - [`TextFormatter`] - Human-readable page layout
//! - [`CsvFormatter`] - CSV format
//! - [`JsonFormatter`] - JSON document or NDJSON format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/unimodular/Bodyfat-Prediction/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod report;
mod text;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use report::Report;
pub use text::{CONTACT, TITLE, TextFormatter};
