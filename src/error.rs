//! Error types for ledgerlink models
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for ledgerlink models
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Union Decoding Errors
    // ============================================================================
    #[error("No matching alternative for field '{field}': {found} value matched no declared shape")]
    NoMatchingAlternative { field: String, found: String },

    #[error("Value does not match alternative '{alternative}': {message}")]
    ShapeMismatch {
        alternative: String,
        message: String,
    },

    // ============================================================================
    // Record Codec Errors
    // ============================================================================
    #[error("Field '{field}' of {record} expected {expected}, found {found}")]
    FieldTypeMismatch {
        record: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("Missing required field '{field}' for {record}")]
    MissingField { record: String, field: String },

    #[error("Expected a JSON object for {record}, found {found}")]
    NotAnObject { record: String, found: String },

    #[error("Unknown value '{value}' for enum {enum_name}")]
    UnknownEnumValue { enum_name: String, value: String },

    #[error("Failed to decode {record}: {message}")]
    Decode { record: String, message: String },

    // ============================================================================
    // Parsing Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Catalog and Lookup Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown union field: {field}")]
    UnknownField { field: String },

    #[error("Unknown record type: {record}")]
    UnknownRecord { record: String },

    // ============================================================================
    // Path Errors
    // ============================================================================
    #[error("JSONPath error: {message}")]
    JsonPath { message: String },

    #[error("Nothing found at path '{path}'")]
    PathNotFound { path: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a no-matching-alternative error
    pub fn no_match(field: impl Into<String>, found: impl Into<String>) -> Self {
        Self::NoMatchingAlternative {
            field: field.into(),
            found: found.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(alternative: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            alternative: alternative.into(),
            message: message.into(),
        }
    }

    /// Create a field type mismatch error
    pub fn field_type(
        record: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::FieldTypeMismatch {
            record: record.into(),
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            record: record.into(),
            field: field.into(),
        }
    }

    /// Create an unknown enum value error
    pub fn unknown_enum(enum_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            enum_name: enum_name.into(),
            value: value.into(),
        }
    }

    /// Create a record decode error
    pub fn decode(record: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            record: record.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a JSONPath error
    pub fn json_path(message: impl Into<String>) -> Self {
        Self::JsonPath {
            message: message.into(),
        }
    }

    /// Check if this error describes bad data rather than bad tooling input
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            Error::NoMatchingAlternative { .. }
                | Error::ShapeMismatch { .. }
                | Error::FieldTypeMismatch { .. }
                | Error::MissingField { .. }
                | Error::NotAnObject { .. }
                | Error::UnknownEnumValue { .. }
                | Error::Decode { .. }
                | Error::JsonParse(_)
        )
    }
}

/// Result type alias for ledgerlink models
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::no_match("accounting_period", "object");
        assert_eq!(
            err.to_string(),
            "No matching alternative for field 'accounting_period': object value matched no declared shape"
        );

        let err = Error::missing_field("Contact", "name");
        assert_eq!(err.to_string(), "Missing required field 'name' for Contact");

        let err = Error::field_type("AccountingPeriod", "start_date", "string", "integer");
        assert_eq!(
            err.to_string(),
            "Field 'start_date' of AccountingPeriod expected string, found integer"
        );
    }

    #[test]
    fn test_is_decode_failure() {
        assert!(Error::no_match("vendor", "number").is_decode_failure());
        assert!(Error::unknown_enum("ContactStatus", "GONE").is_decode_failure());
        assert!(Error::missing_field("Contact", "name").is_decode_failure());

        assert!(!Error::config("bad catalog").is_decode_failure());
        assert!(!Error::UnknownField {
            field: "nope".to_string()
        }
        .is_decode_failure());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
