//! Built-in converters
//!
//! One parsing function per built-in [`Kind`]. Integers parse base-10 within
//! the natural range of the sized type, floats parse at their own bit width.

use super::kind::{Kind, Value};
use crate::constants::{
    BOOL_FALSE_LITERALS, BOOL_TRUE_LITERALS, DATETIME_FORMAT_NAIVE, DATETIME_FORMAT_WITH_OFFSET,
};
use crate::error::BoxError;
use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Text is not one of the accepted boolean literals
#[derive(Debug, Error)]
#[error("invalid boolean literal '{0}'")]
pub struct InvalidBool(pub String);

/// Signature shared by every built-in converter
pub type BuiltinFn = fn(&str) -> Result<Value, BoxError>;

/// Built-in converter for a kind, if there is one
pub fn builtin(kind: Kind) -> Option<BuiltinFn> {
    let converter: BuiltinFn = match kind {
        Kind::Bool => parse_bool,
        Kind::I8 => |raw| Ok(Value::I8(raw.parse()?)),
        Kind::I16 => |raw| Ok(Value::I16(raw.parse()?)),
        Kind::I32 => |raw| Ok(Value::I32(raw.parse()?)),
        Kind::I64 => |raw| Ok(Value::I64(raw.parse()?)),
        Kind::Isize => |raw| Ok(Value::Isize(raw.parse()?)),
        Kind::U8 => |raw| Ok(Value::U8(raw.parse()?)),
        Kind::U16 => |raw| Ok(Value::U16(raw.parse()?)),
        Kind::U32 => |raw| Ok(Value::U32(raw.parse()?)),
        Kind::U64 => |raw| Ok(Value::U64(raw.parse()?)),
        Kind::Usize => |raw| Ok(Value::Usize(raw.parse()?)),
        Kind::F32 => |raw| Ok(Value::F32(raw.parse()?)),
        Kind::F64 => |raw| Ok(Value::F64(raw.parse()?)),
        Kind::Str => |raw| Ok(Value::Str(raw.to_string())),
        Kind::DateTime => parse_datetime,
        Kind::Custom(_) => return None,
    };
    Some(converter)
}

/// Parse a boolean literal
pub fn parse_bool(raw: &str) -> Result<Value, BoxError> {
    if BOOL_TRUE_LITERALS.contains(&raw) {
        Ok(Value::Bool(true))
    } else if BOOL_FALSE_LITERALS.contains(&raw) {
        Ok(Value::Bool(false))
    } else {
        Err(Box::new(InvalidBool(raw.to_string())))
    }
}

/// Parse a timestamp, trying an explicit offset, then naive UTC, then RFC 3339
pub fn parse_datetime(raw: &str) -> Result<Value, BoxError> {
    if let Ok(dt) = DateTime::parse_from_str(raw, DATETIME_FORMAT_WITH_OFFSET) {
        return Ok(Value::DateTime(dt.with_timezone(&Utc)));
    }

    if let Ok(naive_dt) = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT_NAIVE) {
        return Ok(Value::DateTime(DateTime::<Utc>::from_naive_utc_and_offset(
            naive_dt, Utc,
        )));
    }

    let dt = DateTime::parse_from_rfc3339(raw)?;
    Ok(Value::DateTime(dt.with_timezone(&Utc)))
}
