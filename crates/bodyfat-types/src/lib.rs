//! Core types for the bodyfat estimator.
//!
//! This crate provides the fundamental data structures used throughout bodyfat:
//!
//! - [`UnitSystem`] - Metric (centimetres) or US (inches) measurement units
//! - [`Measurements`] - The three anthropometric inputs, each possibly unset
//! - [`ValidationMessage`] - Error or warning attached to an estimate
//! - [`EstimationResult`] - Percentage, formula text and optional message

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/unimodular/Bodyfat-Prediction/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod measurement;
mod message;
mod result;
mod unit;

pub use error::{BodyfatError, Result};
pub use measurement::Measurements;
pub use message::{Severity, ValidationMessage};
pub use result::EstimationResult;
pub use unit::{CM_PER_INCH, UnitParseError, UnitSystem};
