//! Tests for decoding lines into serde structs

use super::person_decoder;
use crate::registry::{ConversionRegistry, Kind, Value};
use crate::{Decoder, DecoderConfig, FlnError};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Deserialize, PartialEq)]
struct Person {
    name: String,
    #[serde(rename = "age")]
    my_age: i32,
    address: String,
    male: bool,
}

#[derive(Debug, Deserialize, PartialEq)]
enum Level {
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "WARN")]
    Warn,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct LogEntry {
    timestamp: DateTime<Utc>,
    level: Level,
    request_id: Option<u64>,
    latency_ms: f32,
    #[serde(default)]
    region: String,
}

#[derive(Debug, Deserialize)]
struct Nested {
    #[allow(dead_code)]
    inner: HashMap<String, String>,
}

#[test]
fn test_deserialize_renamed_fields() {
    let person: Person = person_decoder()
        .deserialize("crastom,10,home,true")
        .unwrap();

    assert_eq!(
        person,
        Person {
            name: "crastom".to_string(),
            my_age: 10,
            address: "home".to_string(),
            male: true,
        }
    );
}

#[test]
fn test_deserialize_log_entry() {
    let decoder =
        Decoder::from_header("timestamp\tlevel\trequestId\tlatencyMs\tignored", "\t").unwrap();

    let entry: LogEntry = decoder
        .deserialize("2024-03-01T12:30:00Z\tWARN\t\t12.5\tx")
        .unwrap();

    assert_eq!(
        entry.timestamp,
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    );
    assert_eq!(entry.level, Level::Warn);
    assert_eq!(entry.request_id, None);
    assert_eq!(entry.latency_ms, 12.5);
    // No region column: falls back to the serde default
    assert_eq!(entry.region, "");

    let entry: LogEntry = decoder
        .deserialize("2024-03-01T12:30:00Z\tINFO\t42\t0.25\tx")
        .unwrap();
    assert_eq!(entry.level, Level::Info);
    assert_eq!(entry.request_id, Some(42));
}

#[test]
fn test_deserialize_missing_required_field() {
    let decoder = Decoder::from_header("name,age", ",").unwrap();

    let err = decoder.deserialize::<Person>("bo,7").unwrap_err();

    assert!(matches!(err, FlnError::Deserialize { ref message } if message.contains("address")));
}

#[test]
fn test_deserialize_shape_mismatch() {
    let err = person_decoder()
        .deserialize::<Person>("crastom,10,home")
        .unwrap_err();

    assert!(matches!(err, FlnError::ShapeMismatch { expected: 4, found: 3 }));
}

#[test]
fn test_deserialize_non_struct_target() {
    let decoder = person_decoder();

    let err = decoder.deserialize::<String>("a,b,c,d").unwrap_err();
    assert!(matches!(err, FlnError::InvalidTarget { .. }));

    let err = decoder
        .deserialize::<HashMap<String, String>>("a,b,c,d")
        .unwrap_err();
    assert!(matches!(err, FlnError::InvalidTarget { .. }));
}

#[test]
fn test_deserialize_composite_field_is_unsupported() {
    let decoder = Decoder::from_header("inner", ",").unwrap();

    let err = decoder.deserialize::<Nested>("k=v").unwrap_err();

    assert!(matches!(err, FlnError::UnsupportedType { ref field, .. } if field == "inner"));
}

#[test]
fn test_deserialize_conversion_error() {
    let err = person_decoder()
        .deserialize::<Person>("crastom,300000000000,home,true")
        .unwrap_err();

    assert!(matches!(
        err,
        FlnError::Conversion {
            kind: Kind::I32,
            column: 1,
            ..
        }
    ));
}

#[test]
fn test_deserialize_uses_injected_registry() {
    let mut registry = ConversionRegistry::default();
    registry.register(Kind::Bool, |raw: &str| Ok(Value::Bool(raw == "yes")));
    let decoder = Decoder::with_registry(
        DecoderConfig::new("name,age,address,male").with_delimiter(","),
        Arc::new(registry),
    )
    .unwrap();

    let person: Person = decoder.deserialize("kim,40,harbour,yes").unwrap();

    assert!(person.male);
}

#[derive(Debug, Deserialize, PartialEq)]
struct Account {
    #[serde(rename = "myname")]
    name: String,
    #[serde(rename = "mybalance", default)]
    balance: u32,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Member {
    #[serde(alias = "user")]
    name: String,
}

#[test]
fn test_deserialize_renamed_field_ignores_rust_name() {
    let decoder = Decoder::from_header("name,balance", ",").unwrap();

    let err = decoder.deserialize::<Account>("ana,12").unwrap_err();
    assert!(matches!(err, FlnError::Deserialize { ref message } if message.contains("myname")));

    let decoder = Decoder::from_header("myname,balance", ",").unwrap();
    let account: Account = decoder.deserialize("ana,12").unwrap();
    assert_eq!(
        account,
        Account {
            name: "ana".to_string(),
            balance: 0,
        }
    );
}

#[test]
fn test_deserialize_alias_column() {
    let decoder = Decoder::from_header("user,id", ",").unwrap();
    let member: Member = decoder.deserialize("bo,1").unwrap();
    assert_eq!(member.name, "bo");

    // Both the name and its alias in one header
    let decoder = Decoder::from_header("name,user", ",").unwrap();
    let err = decoder.deserialize::<Member>("bo,b").unwrap_err();
    assert!(matches!(err, FlnError::Deserialize { ref message } if message.contains("duplicate field")));
}
