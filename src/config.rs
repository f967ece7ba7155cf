//! Decoder configuration and validation.
//!
//! A [`DecoderConfig`] names the header line and the delimiter used to split
//! both the header and every decoded line. It derives serde traits so a host
//! application can keep it in its own configuration file.

use crate::constants::DEFAULT_DELIMITER;
use crate::error::{FlnError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a line decoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Header line declaring the column names, e.g. `"name,age,country"`
    pub head_line: String,

    /// Delimiter separating columns in the header and in every line
    /// Default: tab
    pub delimiter: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            head_line: String::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl DecoderConfig {
    /// Create a configuration for the given header line with the default delimiter
    pub fn new(head_line: impl Into<String>) -> Self {
        Self::default().with_head_line(head_line)
    }

    /// Set the header line
    pub fn with_head_line(mut self, head_line: impl Into<String>) -> Self {
        self.head_line = head_line.into();
        self
    }

    /// Set the column delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Validate the configuration, filling in the default delimiter when empty
    pub fn validate(&mut self) -> Result<()> {
        if self.head_line.is_empty() {
            return Err(FlnError::configuration(format!(
                "head_line must not be empty (delimiter = {:?})",
                self.delimiter
            )));
        }

        if self.delimiter.is_empty() {
            self.delimiter = DEFAULT_DELIMITER.to_string();
        }

        Ok(())
    }
}
