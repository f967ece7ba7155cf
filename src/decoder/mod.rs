//! Line decoder for header-described delimited text
//!
//! A [`Decoder`] is built once from a header line and then decodes any
//! number of lines into typed targets. Each line is split on the configured
//! delimiter, checked against the header column count, and every field of
//! the target is resolved to a column and converted through the
//! [`ConversionRegistry`].
//!
//! ## Architecture
//!
//! - [`Decoder::decode`] - typed targets described by [`Record`]
//! - [`Decoder::deserialize`] - serde targets, through the line deserializer in [`de`]
//!
//! ## Usage
//!
//! ```rust
//! use fln::{Decoder, DecoderConfig};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Request {
//!     path: String,
//!     status: u16,
//!     cached: bool,
//! }
//!
//! fln::impl_record!(Request {
//!     path: String,
//!     status: u16,
//!     #[column = "cache_hit"]
//!     cached: bool,
//! });
//!
//! # fn main() -> fln::Result<()> {
//! let decoder = Decoder::new(DecoderConfig::new("path\tstatus\tcache_hit"))?;
//!
//! let mut request = Request::default();
//! decoder.decode("/index.html\t200\ttrue", &mut request)?;
//!
//! assert_eq!(request.status, 200);
//! assert!(request.cached);
//! # Ok(())
//! # }
//! ```

pub mod de;

#[cfg(test)]
pub mod tests;

use crate::config::DecoderConfig;
use crate::error::{FlnError, Result};
use crate::header::HeaderIndex;
use crate::record::{FieldDescriptor, Record};
use crate::registry::{ConversionRegistry, Kind, KindMismatch, Value};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, trace};

/// Decoder mapping delimited lines onto typed targets
#[derive(Debug, Clone)]
pub struct Decoder {
    config: DecoderConfig,
    header: HeaderIndex,
    registry: Arc<ConversionRegistry>,
}

impl Decoder {
    /// Create a decoder using the built-in converters
    pub fn new(config: DecoderConfig) -> Result<Self> {
        Self::with_registry(config, Arc::new(ConversionRegistry::default()))
    }

    /// Create a decoder from a header line and delimiter
    pub fn from_header(head_line: impl Into<String>, delimiter: impl Into<String>) -> Result<Self> {
        Self::new(DecoderConfig::new(head_line).with_delimiter(delimiter))
    }

    /// Create a decoder sharing a caller-provided registry
    pub fn with_registry(
        mut config: DecoderConfig,
        registry: Arc<ConversionRegistry>,
    ) -> Result<Self> {
        config.validate()?;
        let header = HeaderIndex::parse(&config.head_line, &config.delimiter);

        debug!(
            "Decoder ready: {} columns, delimiter {:?}, {} converters",
            header.column_count(),
            config.delimiter,
            registry.len()
        );

        Ok(Self {
            config,
            header,
            registry,
        })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn header(&self) -> &HeaderIndex {
        &self.header
    }

    pub fn registry(&self) -> &Arc<ConversionRegistry> {
        &self.registry
    }

    /// Number of tokens every decoded line must have
    pub fn column_count(&self) -> usize {
        self.header.column_count()
    }

    /// Decode one line into `target`
    ///
    /// Fields without a matching column, and fields that are not settable,
    /// are left untouched. On a field error the fields before it have
    /// already been written.
    pub fn decode<T: Record>(&self, line: &str, target: &mut T) -> Result<()> {
        let tokens = self.split(line)?;

        for field in T::schema().fields() {
            self.apply_field(field, &tokens, target)?;
        }

        Ok(())
    }

    /// Decode raw line bytes into `target`
    pub fn decode_bytes<T: Record>(&self, data: &[u8], target: &mut T) -> Result<()> {
        let line = std::str::from_utf8(data)?;
        self.decode(line, target)
    }

    /// Decode one line into a fresh default target
    pub fn decode_new<T: Record + Default>(&self, line: &str) -> Result<T> {
        let mut target = T::default();
        self.decode(line, &mut target)?;
        Ok(target)
    }

    /// Decode one line into a serde-deserializable struct
    ///
    /// Struct fields resolve by their serde name, then by its lower camel
    /// form. This differs from [`Decoder::decode`] in three ways:
    ///
    /// - `#[serde(rename = "..")]` replaces the field name, so a renamed
    ///   field never falls back to the Rust identifier's column.
    /// - Unresolved fields are not presented to the visitor. Serde then
    ///   reports a missing field unless it is `#[serde(default)]` or an
    ///   `Option`.
    /// - `#[serde(alias = "..")]` names are resolved like field names. A
    ///   header holding both a field's name and one of its aliases yields
    ///   the field twice, which serde rejects as a duplicate field.
    pub fn deserialize<T: DeserializeOwned>(&self, line: &str) -> Result<T> {
        let tokens = self.split(line)?;
        T::deserialize(de::LineDeserializer::new(self, tokens))
    }

    /// Split a line and check it against the header column count
    fn split<'l>(&self, line: &'l str) -> Result<Vec<&'l str>> {
        let tokens: Vec<&str> = line.split(self.config.delimiter.as_str()).collect();
        if tokens.len() != self.header.column_count() {
            return Err(FlnError::shape_mismatch(
                self.header.column_count(),
                tokens.len(),
            ));
        }
        Ok(tokens)
    }

    fn apply_field<T>(
        &self,
        field: &FieldDescriptor<T>,
        tokens: &[&str],
        target: &mut T,
    ) -> Result<()> {
        if !field.is_settable() {
            trace!("Skipping read-only field '{}'", field.name());
            return Ok(());
        }

        let Some(column) = self.header.resolve(field.tag(), field.name()) else {
            trace!(
                "No column for field '{}' (tag {:?}), leaving it unchanged",
                field.name(),
                field.tag()
            );
            return Ok(());
        };

        let raw = tokens[column];
        if raw.is_empty() && field.set_empty(target) {
            return Ok(());
        }

        let value = self.convert(field.name(), field.kind(), column, raw)?;
        field
            .set(target, value)
            .map_err(|value| self.mismatch(field.name(), field.kind(), column, raw, &value))
    }

    /// Convert one token with the converter registered for `kind`
    pub(crate) fn convert(&self, field: &str, kind: Kind, column: usize, raw: &str) -> Result<Value> {
        let converter = self
            .registry
            .get(kind)
            .ok_or_else(|| FlnError::unsupported_type(field, kind))?;

        converter(raw).map_err(|source| FlnError::conversion(field, column, raw, kind, source))
    }

    /// Error for a converter that produced a value of the wrong kind
    pub(crate) fn mismatch(
        &self,
        field: &str,
        kind: Kind,
        column: usize,
        raw: &str,
        value: &Value,
    ) -> FlnError {
        FlnError::conversion(field, column, raw, kind, Box::new(KindMismatch::new(kind, value)))
    }
}
