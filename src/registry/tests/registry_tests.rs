//! Tests for registration behavior

use crate::error::BoxError;
use crate::registry::{ConversionRegistry, Kind, Value};

#[test]
fn test_default_registry_has_all_builtins() {
    let registry = ConversionRegistry::default();

    for &kind in Kind::BUILTIN {
        assert!(registry.contains(kind), "missing {kind}");
    }
    assert_eq!(registry.len(), Kind::BUILTIN.len());
}

#[test]
fn test_empty_registry() {
    let registry = ConversionRegistry::new();

    assert!(registry.is_empty());
    assert!(registry.convert(Kind::I32, "1").is_none());
}

#[test]
fn test_register_overwrites_previous_converter() {
    let mut registry = ConversionRegistry::default();
    registry.register(Kind::Str, |raw: &str| Ok(Value::Str(raw.to_uppercase())));
    registry.register(Kind::Str, |raw: &str| Ok(Value::Str(raw.to_lowercase())));

    match registry.convert(Kind::Str, "MiXeD") {
        Some(Ok(Value::Str(s))) => assert_eq!(s, "mixed"),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(registry.len(), Kind::BUILTIN.len());
}

#[test]
fn test_register_many_shares_one_converter() {
    let mut registry = ConversionRegistry::new();
    registry.register_many(&[Kind::I8, Kind::I16, Kind::I64], |raw: &str| {
        let parsed: i64 = raw.trim().parse()?;
        Ok(Value::I64(parsed))
    });

    assert_eq!(registry.len(), 3);
    assert!(matches!(registry.convert(Kind::I8, " 5 "), Some(Ok(Value::I64(5)))));
    assert!(matches!(registry.convert(Kind::I16, "x"), Some(Err(_))));
    assert!(!registry.contains(Kind::I32));
}

#[test]
fn test_custom_kind_round_trips_through_value() {
    let mut registry = ConversionRegistry::new();
    registry.register(Kind::Custom("pair"), |raw: &str| -> Result<Value, BoxError> {
        let (left, right) = raw.split_once(':').ok_or("missing ':'")?;
        Ok(Value::custom((left.to_string(), right.parse::<u32>()?)))
    });

    let value = registry
        .convert(Kind::Custom("pair"), "port:8080")
        .unwrap()
        .unwrap();
    let pair: (String, u32) = value.downcast().unwrap();
    assert_eq!(pair, ("port".to_string(), 8080));

    assert!(registry.convert(Kind::Custom("pair"), "port").unwrap().is_err());
}

#[test]
fn test_downcast_mismatch_returns_value() {
    let value = Value::custom(7_u8);
    let back = value.downcast::<String>().unwrap_err();
    assert_eq!(back.type_name(), "custom");

    let plain = Value::I32(3).downcast::<i32>().unwrap_err();
    assert!(matches!(plain, Value::I32(3)));
}

#[test]
fn test_kind_display() {
    assert_eq!(Kind::U64.to_string(), "u64");
    assert_eq!(Kind::Str.to_string(), "string");
    assert_eq!(Kind::Custom("point").to_string(), "custom kind 'point'");
}

#[test]
fn test_debug_lists_kinds() {
    let mut registry = ConversionRegistry::new();
    registry.register(Kind::Bool, crate::registry::converters::parse_bool);

    assert_eq!(
        format!("{registry:?}"),
        "ConversionRegistry { kinds: [\"bool\"] }"
    );
}
