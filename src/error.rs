//! Error handling for line decoding operations.
//!
//! Every failure of construction or decoding is reported through
//! [`FlnError`]; nothing is logged or swallowed on the way out.

use crate::registry::Kind;
use std::fmt::Display;
use thiserror::Error;

/// Boxed error produced by a converter
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum FlnError {
    /// Empty or invalid decoder configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Token count of a line does not match the header column count
    #[error("Shape mismatch: expected {expected} columns, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// Decode target is not a settable structured record
    #[error("Invalid decode target {target}: {reason}")]
    InvalidTarget { target: String, reason: String },

    /// No converter is registered for the kind of a resolved field
    #[error("Unsupported type for field '{field}': no converter registered for {kind}")]
    UnsupportedType { field: String, kind: Kind },

    /// A converter rejected the token text
    #[error("Conversion failed for field '{field}' (column {column}, {kind}): '{value}'")]
    Conversion {
        field: String,
        column: usize,
        value: String,
        kind: Kind,
        #[source]
        source: BoxError,
    },

    /// Raw line bytes are not valid UTF-8
    #[error("Line is not valid UTF-8: {source}")]
    Encoding {
        #[source]
        source: std::str::Utf8Error,
    },

    /// Failure reported by a serde `Deserialize` implementation
    #[error("Deserialize error: {message}")]
    Deserialize { message: String },
}

impl FlnError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: usize, found: usize) -> Self {
        Self::ShapeMismatch { expected, found }
    }

    /// Create an invalid target error
    pub fn invalid_target(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported type error
    pub fn unsupported_type(field: impl Into<String>, kind: Kind) -> Self {
        Self::UnsupportedType {
            field: field.into(),
            kind,
        }
    }

    /// Create a conversion error wrapping the converter's failure
    pub fn conversion(
        field: impl Into<String>,
        column: usize,
        value: impl Into<String>,
        kind: Kind,
        source: BoxError,
    ) -> Self {
        Self::Conversion {
            field: field.into(),
            column,
            value: value.into(),
            kind,
            source,
        }
    }
}

impl From<std::str::Utf8Error> for FlnError {
    fn from(source: std::str::Utf8Error) -> Self {
        Self::Encoding { source }
    }
}

impl serde::de::Error for FlnError {
    fn custom<T: Display>(msg: T) -> Self {
        Self::Deserialize {
            message: msg.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlnError>;
