//! Behavioural tests for the JSON registry dump.
#![expect(clippy::expect_used, reason = "tests require descriptive panic messages")]

use serde_json::Value;
use valex::{Registry, dump_registry};

fn dumped_families(registry: &Registry) -> Vec<Value> {
    let json = dump_registry(registry).expect("serialize registry");
    let value: Value = serde_json::from_str(&json).expect("dump should be valid JSON");
    value
        .get("families")
        .and_then(Value::as_array)
        .expect("families array")
        .clone()
}

#[test]
fn the_dump_lists_every_family_in_order() {
    let registry = Registry::with_builtins();
    let families = dumped_families(&registry);
    let names: Vec<&str> = families
        .iter()
        .filter_map(|family| family.get("family").and_then(Value::as_str))
        .collect();
    assert_eq!(
        names,
        vec![
            "float64-checker",
            "int-checker",
            "int64-checker",
            "string-checker",
            "string-slice-checker",
        ]
    );
}

#[test]
fn makers_carry_their_argument_descriptors() {
    let registry = Registry::with_builtins();
    let families = dumped_families(&registry);
    let int_family = families
        .iter()
        .find(|family| family.get("family").and_then(Value::as_str) == Some("int-checker"))
        .expect("int-checker entry");

    let makers = int_family
        .get("makers")
        .and_then(Value::as_array)
        .expect("makers array");
    let between = makers
        .iter()
        .find(|maker| maker.get("name").and_then(Value::as_str) == Some("Between"))
        .expect("Between maker");
    let args: Vec<&str> = between
        .get("args")
        .and_then(Value::as_array)
        .expect("args array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(args, vec!["int", "int"]);
}

#[test]
fn the_dump_records_the_parser_value_type() {
    let registry = Registry::with_builtins();
    let families = dumped_families(&registry);
    let string_family = families
        .iter()
        .find(|family| family.get("family").and_then(Value::as_str) == Some("string-checker"))
        .expect("string-checker entry");
    let value_type = string_family
        .get("value_type")
        .and_then(Value::as_str)
        .expect("value_type field");
    assert!(value_type.contains("Parser"), "{value_type}");
    assert!(value_type.contains("String"), "{value_type}");
}
