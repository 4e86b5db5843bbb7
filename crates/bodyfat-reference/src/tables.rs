//! Reference table row types.

use serde::{Deserialize, Serialize};

/// A titled two-column table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<T> {
    /// Table heading.
    pub title: String,
    /// Column headings, in display order.
    pub columns: [String; 2],
    /// Table rows, in display order.
    pub rows: Vec<T>,
}

impl<T> Table<T> {
    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One American Council on Exercise body fat category for men.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AceCategory {
    /// Category name (e.g., "Athletes").
    pub category: String,
    /// Percentage range as displayed (e.g., "6-13").
    pub range: String,
    /// Lowest percentage belonging to this category.
    #[serde(skip_serializing)]
    pub lower: f64,
}

impl AceCategory {
    /// Returns the two display cells of this row.
    #[must_use]
    pub fn cells(&self) -> [String; 2] {
        [self.category.clone(), self.range.clone()]
    }
}

/// Jackson & Pollock ideal body fat percentage for one age group of men.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealBodyFat {
    /// Age group as displayed (e.g., "30-39").
    pub age_group: String,
    /// Ideal body fat percentage.
    pub ideal_percent: f64,
    /// Youngest age in years belonging to this group.
    #[serde(skip_serializing)]
    pub min_age: u32,
}

impl IdealBodyFat {
    /// Returns the two display cells of this row.
    #[must_use]
    pub fn cells(&self) -> [String; 2] {
        [self.age_group.clone(), self.ideal_percent.to_string()]
    }
}
