//! Error types for CSV-to-PLY conversion.

use thiserror::Error;

/// Errors that can occur while converting a CSV mesh dump.
///
/// Every variant aborts the whole conversion; there is no row-level recovery.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Required column '{name}' not found in CSV header")]
    MissingColumn { name: String },

    #[error("Row {row}: no value for column '{field}'")]
    MissingField { row: usize, field: String },

    #[error("Row {row}: invalid number '{value}' in column '{field}'")]
    InvalidFloat {
        row: usize,
        field: String,
        value: String,
    },

    #[error("Row {row}: invalid integer '{value}' in column '{field}'")]
    InvalidInteger {
        row: usize,
        field: String,
        value: String,
    },

    #[error("Row {row}: malformed color tuple '{value}'")]
    MalformedColor { row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Attach a 1-based data row number to a row-level error.
    ///
    /// Parsers below the decoder report row 0 since they only see one field.
    pub(crate) fn at_row(self, row: usize) -> Self {
        match self {
            ConvertError::MissingField { field, .. } => ConvertError::MissingField { row, field },
            ConvertError::InvalidFloat { field, value, .. } => {
                ConvertError::InvalidFloat { row, field, value }
            }
            ConvertError::InvalidInteger { field, value, .. } => {
                ConvertError::InvalidInteger { row, field, value }
            }
            ConvertError::MalformedColor { value, .. } => ConvertError::MalformedColor { row, value },
            other => other,
        }
    }
}
