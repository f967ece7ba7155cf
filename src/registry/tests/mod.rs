//! Tests for the conversion registry and built-in converters

use super::{ConversionRegistry, Kind, Value};

mod registry_tests;

/// Run the default converter for a kind, panicking if none is registered
pub fn convert_builtin(kind: Kind, raw: &str) -> Result<Value, crate::BoxError> {
    ConversionRegistry::default()
        .convert(kind, raw)
        .expect("built-in converter should be registered")
}
