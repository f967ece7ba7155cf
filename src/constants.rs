//! Constants for the line decoder
//!
//! Default values and literal tables shared by configuration, header
//! parsing and the built-in converters.

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Delimiter used when the configuration leaves it empty
pub const DEFAULT_DELIMITER: &str = "\t";

// =============================================================================
// Built-in Converter Literals
// =============================================================================

/// Boolean literals accepted as `true`
pub const BOOL_TRUE_LITERALS: &[&str] = &["1", "t", "T", "TRUE", "true", "True"];

/// Boolean literals accepted as `false`
pub const BOOL_FALSE_LITERALS: &[&str] = &["0", "f", "F", "FALSE", "false", "False"];

/// Timestamp format with an explicit UTC offset
pub const DATETIME_FORMAT_WITH_OFFSET: &str = "%Y-%m-%d %H:%M:%S %z";

/// Timestamp format without offset, interpreted as UTC
pub const DATETIME_FORMAT_NAIVE: &str = "%Y-%m-%d %H:%M:%S";
