//! Conversion registry mapping type kinds to parsing functions
//!
//! A [`ConversionRegistry`] holds one converter per [`Kind`]. The default
//! registry carries every built-in converter; applications add their own
//! kinds with [`ConversionRegistry::register`] before handing the registry to
//! a [`Decoder`](crate::Decoder).
//!
//! ## Usage
//!
//! ```rust
//! use fln::{ConversionRegistry, Kind, Value};
//!
//! let mut registry = ConversionRegistry::default();
//! registry.register(Kind::Custom("upper"), |raw: &str| {
//!     Ok(Value::custom(raw.to_uppercase()))
//! });
//!
//! assert!(registry.contains(Kind::Custom("upper")));
//! assert!(registry.contains(Kind::I64));
//! ```

pub mod converters;
pub mod kind;

#[cfg(test)]
pub mod tests;

use crate::error::BoxError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub use kind::{FieldType, Kind, KindMismatch, Value};

/// Function turning a raw token into a value of one kind
pub type Converter = Arc<dyn Fn(&str) -> Result<Value, BoxError> + Send + Sync>;

/// Mapping from kind to converter
#[derive(Clone)]
pub struct ConversionRegistry {
    converters: HashMap<Kind, Converter>,
}

impl ConversionRegistry {
    /// Create a registry with no converters at all
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in converter
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for &kind in Kind::BUILTIN {
            if let Some(converter) = converters::builtin(kind) {
                registry.converters.insert(kind, Arc::new(converter));
            }
        }
        registry
    }

    /// Register a converter for a kind, replacing any previous one
    pub fn register<F>(&mut self, kind: Kind, converter: F)
    where
        F: Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.converters.insert(kind, Arc::new(converter));
    }

    /// Register one converter for several kinds
    pub fn register_many<F>(&mut self, kinds: &[Kind], converter: F)
    where
        F: Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        let converter: Converter = Arc::new(converter);
        for &kind in kinds {
            self.converters.insert(kind, Arc::clone(&converter));
        }
    }

    /// Get the converter registered for a kind
    pub fn get(&self, kind: Kind) -> Option<&Converter> {
        self.converters.get(&kind)
    }

    /// Check if a converter is registered for a kind
    pub fn contains(&self, kind: Kind) -> bool {
        self.converters.contains_key(&kind)
    }

    /// Run the converter for a kind; `None` when nothing is registered
    pub fn convert(&self, kind: Kind, raw: &str) -> Option<Result<Value, BoxError>> {
        self.get(kind).map(|converter| converter(raw))
    }

    /// Registered kinds, in no particular order
    pub fn kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.converters.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for ConversionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&'static str> = self.kinds().map(|kind| kind.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("ConversionRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}
