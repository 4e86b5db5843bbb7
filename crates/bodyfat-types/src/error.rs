//! Error types for bodyfat.

use thiserror::Error;

/// Result type alias for bodyfat operations.
pub type Result<T> = std::result::Result<T, BodyfatError>;

/// Errors that can occur outside of estimation itself.
///
/// Invalid measurements are never reported through this type; they are
/// carried on the [`EstimationResult`](crate::EstimationResult) as a
/// [`ValidationMessage`](crate::ValidationMessage).
#[derive(Error, Debug)]
pub enum BodyfatError {
    /// Reference data is structurally invalid.
    #[error("Reference data error: {0}")]
    Reference(String),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
