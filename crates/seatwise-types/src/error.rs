//! Error types for seatwise.

use thiserror::Error;

/// Result type alias for seatwise operations.
pub type Result<T> = std::result::Result<T, SeatwiseError>;

/// Errors that can occur while loading data or answering queries.
#[derive(Error, Debug)]
pub enum SeatwiseError {
    /// Query input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The cutoff dataset could not be loaded.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error for malformed query input.
///
/// Every variant names the offending request field so the HTTP layer can
/// surface it directly in a 400 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The candidate rank was zero, negative, or out of range.
    #[error("Field 'user_rank' must be a positive integer (got {rank})")]
    InvalidRank {
        /// The rejected rank value.
        rank: i64,
    },

    /// A required text field was blank after trimming.
    #[error("Field '{field}' must not be blank")]
    BlankField {
        /// Name of the offending field.
        field: &'static str,
    },
}
