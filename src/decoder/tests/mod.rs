//! Test utilities and fixtures for decoder testing
//!
//! This module provides record fixtures and helper functions used across
//! the decoder test modules.

use crate::record::Schema;
use crate::registry::Kind;
use crate::{Decoder, Record};

mod serde_tests;

/// Header used by most decode tests
pub const PERSON_HEADER: &str = "name,age,address,male";

/// Record with tags that partially miss the header
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub my_age: i64,
    pub address: String,
    pub male: bool,
}

crate::impl_record!(Person {
    #[column = "myname"]
    name: String,
    #[column = "age"]
    my_age: i64,
    #[column = "address"]
    address: String,
    #[column = "mymale"]
    male: bool,
});

/// Record using camel-case field names and a read-only field
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Metric {
    pub host: String,
    pub value: f64,
    pub samples: u32,
    pub checksum: u64,
}

impl Record for Metric {
    fn schema() -> &'static Schema<Self> {
        static SCHEMA: std::sync::OnceLock<Schema<Metric>> = std::sync::OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::<Metric>::builder()
                .field("Host", |m: &mut Metric| &mut m.host)
                .field("Value", |m: &mut Metric| &mut m.value)
                .tagged("Samples", "n", |m: &mut Metric| &mut m.samples)
                .read_only("checksum", Kind::U64)
                .build()
        })
    }
}

/// A composite value with no built-in converter
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl crate::FieldType for Point {
    const KIND: Kind = Kind::Custom("point");

    fn from_value(value: crate::Value) -> Result<Self, crate::Value> {
        value.downcast()
    }
}

/// Record holding a composite field
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Shape {
    pub label: String,
    pub origin: Point,
    pub sides: u8,
}

crate::impl_record!(Shape {
    label: String,
    origin: Point,
    sides: u8,
});

/// Create a comma-delimited decoder for the person header
pub fn person_decoder() -> Decoder {
    Decoder::from_header(PERSON_HEADER, ",").unwrap()
}

/// Install a test-writer subscriber so decoder traces show up in failing tests
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
