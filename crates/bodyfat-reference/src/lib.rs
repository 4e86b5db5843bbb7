//! Static reference tables for the bodyfat estimator.
//!
//! The tables are embedded at compile time and exposed verbatim:
//!
//! - [`ReferenceTables::ace`] - American Council on Exercise categorization
//! - [`ReferenceTables::jackson_pollock`] - Jackson & Pollock ideal percentages
//!
//! # Example
//!
//! ```
//! use bodyfat_reference::ReferenceTables;
//!
//! let tables = ReferenceTables::global();
//! for row in tables.jackson_pollock().rows.iter() {
//!     println!("{}: {}%", row.age_group, row.ideal_percent);
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/unimodular/Bodyfat-Prediction/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod tables;

use std::sync::OnceLock;

use bodyfat_types::{BodyfatError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use tables::{AceCategory, IdealBodyFat, Table};

/// The reference table JSON embedded at compile time.
const REFERENCE_TABLES_JSON: &str = include_str!("../data/reference_tables.json");

/// Global reference tables instance.
static TABLES: OnceLock<ReferenceTables> = OnceLock::new();

/// The two static reference tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    ace: Table<AceCategory>,
    jackson_pollock: Table<IdealBodyFat>,
}

impl ReferenceTables {
    /// Returns the global reference tables.
    ///
    /// The tables are parsed lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        TABLES.get_or_init(|| {
            Self::from_json(REFERENCE_TABLES_JSON)
                .expect("embedded reference_tables.json should be valid")
        })
    }

    /// Parses reference tables from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid, a table is empty, or row
    /// bounds are not strictly increasing.
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: Self = serde_json::from_str(json)?;
        tables.check()?;
        debug!(
            ace_rows = tables.ace.len(),
            jackson_pollock_rows = tables.jackson_pollock.len(),
            "loaded reference tables"
        );
        Ok(tables)
    }

    fn check(&self) -> Result<()> {
        if self.ace.is_empty() || self.jackson_pollock.is_empty() {
            return Err(BodyfatError::Reference("empty reference table".into()));
        }
        if !self.ace.rows.windows(2).all(|w| w[0].lower < w[1].lower) {
            return Err(BodyfatError::Reference(
                "ACE category bounds must be strictly increasing".into(),
            ));
        }
        if !self
            .jackson_pollock
            .rows
            .windows(2)
            .all(|w| w[0].min_age < w[1].min_age)
        {
            return Err(BodyfatError::Reference(
                "age groups must be strictly increasing".into(),
            ));
        }
        Ok(())
    }

    /// Returns the American Council on Exercise categorization table.
    #[must_use]
    pub const fn ace(&self) -> &Table<AceCategory> {
        &self.ace
    }

    /// Returns the Jackson & Pollock ideal percentage table.
    #[must_use]
    pub const fn jackson_pollock(&self) -> &Table<IdealBodyFat> {
        &self.jackson_pollock
    }

    /// Finds the ACE category a body fat percentage falls into.
    ///
    /// A value belongs to the last category whose lower bound it reaches, so
    /// 5.5 is "Essential Fat" and 13.9 is "Athletes". Values below the first
    /// bound, and non-finite values, have no category.
    #[must_use]
    pub fn classify(&self, percent: f64) -> Option<&AceCategory> {
        if !percent.is_finite() {
            return None;
        }
        self.ace.rows.iter().rev().find(|row| percent >= row.lower)
    }

    /// Finds the Jackson & Pollock row for an age in years.
    ///
    /// Ages below the first group have no row.
    #[must_use]
    pub fn ideal_for_age(&self, age: u32) -> Option<&IdealBodyFat> {
        self.jackson_pollock
            .rows
            .iter()
            .rev()
            .find(|row| age >= row.min_age)
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::global().clone()
    }
}
