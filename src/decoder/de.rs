//! Serde deserializer over one split line.
//!
//! The top level only accepts structs; every struct field is resolved to a
//! header column and its token is converted through the registry for the
//! primitive the field's `Deserialize` impl asks for.

use super::Decoder;
use crate::error::{FlnError, Result};
use crate::registry::{Kind, Value};
use serde::de::value::{BorrowedStrDeserializer, StrDeserializer};
use serde::de::{DeserializeSeed, Deserializer, IntoDeserializer, MapAccess, Visitor};
use serde::forward_to_deserialize_any;
use tracing::trace;

/// Deserializer for a whole line
pub struct LineDeserializer<'a> {
    decoder: &'a Decoder,
    tokens: Vec<&'a str>,
}

impl<'a> LineDeserializer<'a> {
    pub(crate) fn new(decoder: &'a Decoder, tokens: Vec<&'a str>) -> Self {
        Self { decoder, tokens }
    }
}

impl<'de, 'a> Deserializer<'de> for LineDeserializer<'a> {
    type Error = FlnError;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(FlnError::invalid_target(
            "non-struct type",
            "a line can only be decoded into a struct",
        ))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_map(FieldAccess {
            decoder: self.decoder,
            tokens: &self.tokens,
            fields: fields.iter(),
            pending: None,
        })
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct seq tuple tuple_struct map enum
        identifier ignored_any
    }
}

/// Presents resolved struct fields as map entries
struct FieldAccess<'a, 'l> {
    decoder: &'a Decoder,
    tokens: &'l [&'a str],
    fields: std::slice::Iter<'static, &'static str>,
    pending: Option<(&'static str, usize)>,
}

impl<'de, 'a, 'l> MapAccess<'de> for FieldAccess<'a, 'l> {
    type Error = FlnError;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>> {
        for &name in self.fields.by_ref() {
            match self.decoder.header().resolve(None, name) {
                Some(column) => {
                    self.pending = Some((name, column));
                    return seed
                        .deserialize(BorrowedStrDeserializer::<FlnError>::new(name))
                        .map(Some);
                }
                None => trace!("No column for field '{}', leaving it to its default", name),
            }
        }
        Ok(None)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value> {
        let (field, column) = self.pending.take().ok_or_else(|| FlnError::Deserialize {
            message: "value requested before its field name".to_string(),
        })?;

        seed.deserialize(TokenDeserializer {
            decoder: self.decoder,
            field,
            column,
            raw: self.tokens[column],
        })
    }

    fn size_hint(&self) -> Option<usize> {
        None
    }
}

/// Deserializer for the token of one resolved field
struct TokenDeserializer<'a> {
    decoder: &'a Decoder,
    field: &'static str,
    column: usize,
    raw: &'a str,
}

impl TokenDeserializer<'_> {
    fn convert(&self, kind: Kind) -> Result<Value> {
        self.decoder.convert(self.field, kind, self.column, self.raw)
    }

    fn mismatch(&self, kind: Kind, value: &Value) -> FlnError {
        self.decoder
            .mismatch(self.field, kind, self.column, self.raw, value)
    }

    fn composite(&self, shape: &'static str) -> FlnError {
        FlnError::unsupported_type(self.field, Kind::Custom(shape))
    }
}

macro_rules! deserialize_scalar {
    ($($method:ident => $kind:ident, $visit:ident;)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
                match self.convert(Kind::$kind)? {
                    Value::$kind(inner) => visitor.$visit(inner),
                    other => Err(self.mismatch(Kind::$kind, &other)),
                }
            }
        )*
    };
}

impl<'de> Deserializer<'de> for TokenDeserializer<'_> {
    type Error = FlnError;

    deserialize_scalar! {
        deserialize_bool => Bool, visit_bool;
        deserialize_i8 => I8, visit_i8;
        deserialize_i16 => I16, visit_i16;
        deserialize_i32 => I32, visit_i32;
        deserialize_i64 => I64, visit_i64;
        deserialize_u8 => U8, visit_u8;
        deserialize_u16 => U16, visit_u16;
        deserialize_u32 => U32, visit_u32;
        deserialize_u64 => U64, visit_u64;
        deserialize_f32 => F32, visit_f32;
        deserialize_f64 => F64, visit_f64;
        deserialize_any => Str, visit_string;
        deserialize_str => Str, visit_string;
        deserialize_string => Str, visit_string;
        deserialize_char => Str, visit_string;
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_bytes(self.raw.as_bytes())
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_byte_buf(self.raw.as_bytes().to_vec())
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        if self.raw.is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        let variant: StrDeserializer<'_, FlnError> = self.raw.into_deserializer();
        visitor.visit_enum(variant)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(self.composite("sequence"))
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, _visitor: V) -> Result<V::Value> {
        Err(self.composite("tuple"))
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value> {
        Err(self.composite("tuple struct"))
    }

    fn deserialize_map<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(self.composite("map"))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value> {
        Err(self.composite(name))
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_str(self.raw)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }
}
