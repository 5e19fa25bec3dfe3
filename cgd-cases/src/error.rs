/// Error types for the case-record pipeline
use crate::coordinate::Axis;
use thiserror::Error;

/// Main error type for loading, cleaning and filtering case records
#[derive(Error, Debug)]
pub enum CaseError {
    /// Fewer source rows than the requested sample size
    #[error("Insufficient data (needed: {needed}, found: {found})")]
    InsufficientData { needed: usize, found: usize },

    /// Coordinate could not be repaired or is outside the valid degree range
    #[error("Invalid {axis} coordinate {raw:?}: {reason}")]
    InvalidCoordinate {
        axis: Axis,
        raw: String,
        reason: String,
    },

    /// A date or risk category that is not part of the loaded record set
    #[error("Unknown selection: {0}")]
    UnknownSelection(String),

    /// Date string in none of the accepted formats
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Case count that is not a non-negative integer
    #[error("Invalid {field} count: {raw:?}")]
    InvalidCount { field: &'static str, raw: String },

    /// Failed to read or write CSV data
    #[error("Failed to process CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to open or decompress an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using CaseError
pub type Result<T> = std::result::Result<T, CaseError>;
