//! Type kinds, converted values and the Rust types bound to them.

use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;
use thiserror::Error;

/// Primitive type kind a converter is registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Str,
    DateTime,
    /// User-defined kind, identified by name
    Custom(&'static str),
}

impl Kind {
    /// Kinds that have a built-in converter
    pub const BUILTIN: &'static [Kind] = &[
        Kind::Bool,
        Kind::I8,
        Kind::I16,
        Kind::I32,
        Kind::I64,
        Kind::Isize,
        Kind::U8,
        Kind::U16,
        Kind::U32,
        Kind::U64,
        Kind::Usize,
        Kind::F32,
        Kind::F64,
        Kind::Str,
        Kind::DateTime,
    ];

    /// Short lowercase name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Str => "string",
            Kind::DateTime => "datetime",
            Kind::Custom(name) => name,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Custom(name) => write!(f, "custom kind '{}'", name),
            other => f.write_str(other.name()),
        }
    }
}

/// Value produced by a converter
#[derive(Debug)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Str(String),
    DateTime(DateTime<Utc>),
    Custom(Box<dyn Any + Send + Sync>),
}

impl Value {
    /// Wrap a user-defined value
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Value::Custom(Box::new(value))
    }

    /// Take a user-defined value back out, returning `self` on a type mismatch
    pub fn downcast<T: Any>(self) -> Result<T, Value> {
        match self {
            Value::Custom(boxed) => boxed
                .downcast::<T>()
                .map(|value| *value)
                .map_err(Value::Custom),
            other => Err(other),
        }
    }

    /// Name of the carried type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::Isize(_) => "isize",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::Usize(_) => "usize",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Str(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Custom(_) => "custom",
        }
    }
}

/// A converter returned a value of a different kind than it was registered for
#[derive(Debug, Error)]
#[error("converter for {expected} produced a {found} value")]
pub struct KindMismatch {
    pub expected: Kind,
    pub found: &'static str,
}

impl KindMismatch {
    pub fn new(expected: Kind, value: &Value) -> Self {
        Self {
            expected,
            found: value.type_name(),
        }
    }
}

/// A Rust type that can be filled from a converted [`Value`]
///
/// User types implement this with a [`Kind::Custom`] kind and register a
/// converter for that kind that produces [`Value::custom`].
pub trait FieldType: Sized {
    /// Kind whose converter produces values of this type
    const KIND: Kind;

    /// Extract `Self`, handing the value back when it has the wrong shape
    fn from_value(value: Value) -> Result<Self, Value>;

    /// Value stored for an empty token instead of running the converter
    fn empty() -> Option<Self> {
        None
    }
}

macro_rules! impl_field_type {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FieldType for $ty {
                const KIND: Kind = Kind::$kind;

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$kind(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_field_type! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Str,
    DateTime<Utc> => DateTime,
}

/// Optional fields use the converter of their inner type; an empty token is `None`
impl<T: FieldType> FieldType for Option<T> {
    const KIND: Kind = T::KIND;

    fn from_value(value: Value) -> Result<Self, Value> {
        T::from_value(value).map(Some)
    }

    fn empty() -> Option<Self> {
        Some(None)
    }
}
