//! Mapping error types.

use thiserror::Error;

use crate::Kind;

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur while indexing, encoding or decoding a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("Invalid target: {reason}")]
    InvalidTarget { reason: String },

    #[error("Duplicate row key: fields '{first}' and '{second}' both claim the row key")]
    DuplicateRowKey { first: String, second: String },

    #[error("Reused coordinate '{coordinate}': claimed by '{first}' and '{second}'")]
    DuplicateCoordinate {
        coordinate: String,
        first: String,
        second: String,
    },

    #[error("Malformed coordinate '{coordinate}' on field '{field}': expected family:column")]
    MalformedCoordinate { field: String, coordinate: String },

    #[error("Unsupported type: {type_name}")]
    UnsupportedType { type_name: String },

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Truncated value: {type_name} needs {needed} bytes, got {actual}")]
    TruncatedValue {
        type_name: String,
        needed: usize,
        actual: usize,
    },

    #[error("Overflow: {value} does not fit in {type_name}")]
    Overflow { type_name: String, value: String },

    #[error("Cannot set read-only {type_name} field")]
    NotSettable { type_name: String },

    #[error("Invalid text: {reason}")]
    InvalidText { reason: String },

    #[error("Invalid row key: {reason}")]
    InvalidRowKey { reason: String },
}

impl MapError {
    pub fn invalid_target(reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            reason: reason.into(),
        }
    }

    pub fn duplicate_row_key(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::DuplicateRowKey {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn duplicate_coordinate(
        coordinate: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateCoordinate {
            coordinate: coordinate.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn malformed_coordinate(field: impl Into<String>, coordinate: impl Into<String>) -> Self {
        Self::MalformedCoordinate {
            field: field.into(),
            coordinate: coordinate.into(),
        }
    }

    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    pub fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::TypeMismatch {
            expected: expected.type_name().to_string(),
            actual: actual.type_name().to_string(),
        }
    }

    pub fn truncated(kind: Kind, needed: usize, actual: usize) -> Self {
        Self::TruncatedValue {
            type_name: kind.type_name().to_string(),
            needed,
            actual,
        }
    }

    pub fn overflow(kind: Kind, value: impl ToString) -> Self {
        Self::Overflow {
            type_name: kind.type_name().to_string(),
            value: value.to_string(),
        }
    }

    pub fn not_settable(kind: Kind) -> Self {
        Self::NotSettable {
            type_name: kind.type_name().to_string(),
        }
    }

    pub fn invalid_text(reason: impl Into<String>) -> Self {
        Self::InvalidText {
            reason: reason.into(),
        }
    }

    pub fn invalid_row_key(reason: impl Into<String>) -> Self {
        Self::InvalidRowKey {
            reason: reason.into(),
        }
    }
}
