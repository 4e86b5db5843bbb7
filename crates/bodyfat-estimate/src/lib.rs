//! Regression-based body fat estimation for bodyfat.
//!
//! This crate provides the computational core:
//!
//! - [`estimate`] - One-shot estimate from three optional measurements
//! - [`Estimator`] - Evaluates the regression and validates the inputs
//! - [`RegressionModel`] - The fixed regression constants and formula text
//! - [`PlausibilityLimits`] - Per-unit upper bounds for warnings
//! - [`Session`] - Holds one user's inputs and recomputes on every change

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/unimodular/Bodyfat-Prediction/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod formula;
mod session;
mod validate;

pub use estimator::{Estimator, estimate};
pub use formula::{NormalizedInputs, RegressionModel, Term, normalize};
pub use session::Session;
pub use validate::{
    MAX_PLAUSIBLE_BODY_FAT, MIN_PLAUSIBLE_BODY_FAT, PlausibilityLimits, is_plausible_body_fat,
    is_positive_finite, validate,
};
