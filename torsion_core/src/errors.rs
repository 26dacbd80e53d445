//! # Error Types
//!
//! Structured error types for torsion_core. Every failure a run can hit
//! (unknown shape names, unreadable numbers, degenerate geometry, project
//! file problems) maps to one variant here, so the CLI can print a message
//! and the JSON consumers can branch on [`CalcError::error_code`].
//!
//! ## Example
//!
//! ```rust
//! use torsion_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length_m",
//!             length_m.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for torsion_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for torsion calculations and their input.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Shape label is not one of `circle`, `rectangle`, `tube`
    #[error("Unknown shape '{value}' (expected circle, rectangle or tube)")]
    InvalidShape { value: String },

    /// A token could not be read as a number
    #[error("Malformed number for '{field}': '{value}'")]
    MalformedInput { field: String, value: String },

    /// Input ended before a required field was read
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An input value is not physically meaningful (zero length, inner >= outer, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidShape error
    pub fn invalid_shape(value: impl Into<String>) -> Self {
        CalcError::InvalidShape {
            value: value.into(),
        }
    }

    /// Create a MalformedInput error
    pub fn malformed_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::MalformedInput {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Prefix the field name of an input error with a location such as `sections[2]`.
    ///
    /// Other variants are returned unchanged.
    pub fn at(self, location: &str) -> Self {
        match self {
            CalcError::InvalidInput { field, value, reason } => CalcError::InvalidInput {
                field: format!("{location}.{field}"),
                value,
                reason,
            },
            CalcError::MalformedInput { field, value } => CalcError::MalformedInput {
                field: format!("{location}.{field}"),
                value,
            },
            CalcError::MissingField { field } => CalcError::MissingField {
                field: format!("{location}.{field}"),
            },
            other => other,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidShape { .. } => "INVALID_SHAPE",
            CalcError::MalformedInput { .. } => "MALFORMED_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_shape("square");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("InvalidShape"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_shape("square").error_code(), "INVALID_SHAPE");
        assert_eq!(CalcError::malformed_input("length_m", "abc").error_code(), "MALFORMED_INPUT");
        assert_eq!(CalcError::missing_field("length_m").error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_location_prefix() {
        let error = CalcError::invalid_input("length_m", "0", "Length must be positive").at("sections[1]");
        match error {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "sections[1].length_m"),
            other => panic!("unexpected variant: {other:?}"),
        }

        let untouched = CalcError::invalid_shape("hexagon").at("sections[0]");
        assert_eq!(untouched, CalcError::invalid_shape("hexagon"));
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::invalid_shape("square");
        assert_eq!(
            error.to_string(),
            "Unknown shape 'square' (expected circle, rectangle or tube)"
        );
    }
}
