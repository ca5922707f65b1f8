//! Error types for GeoDetector.

use thiserror::Error;

/// Result type alias for GeoDetector operations.
pub type Result<T> = std::result::Result<T, GeoDetectorError>;

/// Errors that can occur in GeoDetector operations.
#[derive(Error, Debug)]
pub enum GeoDetectorError {
    /// A requested column is absent from the dataset.
    #[error("column '{0}' is not in the dataset")]
    MissingColumn(String),
    /// Invalid parameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Row counts of two row-aligned inputs disagree.
    #[error("Length mismatch: expected {expected} rows, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// The regressor has not been fitted yet.
    #[error("Regressor is not fitted yet")]
    NotFitted,
    /// A prediction row's covariate combination was never seen during fit.
    #[error("No fitted group for the covariate combination at row {row}")]
    UnseenCombination { row: usize },
    /// A pairwise q value matches none of the interaction-type bands.
    #[error("Interaction q value {q12} matches no interaction type for q1={q1}, q2={q2}")]
    UnclassifiableInteraction { q1: f64, q2: f64, q12: f64 },
    /// A serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
