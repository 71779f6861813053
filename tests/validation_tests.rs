// Validation tests: serverName, cpu and ram rules

use serde_json::{Value, json};
use servertrack::validation::{parse_load, validate};

fn valid_load() -> Value {
    json!({ "serverName": "server1", "cpu": 10, "ram": 5 })
}

fn with(field: &str, value: Value) -> Value {
    let mut load = valid_load();
    load[field] = value;
    load
}

fn without(field: &str) -> Value {
    let mut load = valid_load();
    load.as_object_mut().unwrap().remove(field);
    load
}

#[test]
fn valid_load_has_no_errors() {
    let result = validate(&valid_load());
    assert!(result.valid);
    assert!(result.errors.is_empty());
}

#[test]
fn server_name_of_only_spaces_is_invalid() {
    let result = validate(&with("serverName", json!("     ")));
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path.as_deref(), Some("serverName"));
    assert_eq!(result.errors[0].value, Some(json!("     ")));
}

#[test]
fn empty_server_name_is_invalid() {
    assert!(!validate(&with("serverName", json!(""))).valid);
    assert!(!validate(&with("serverName", json!("\t\n "))).valid);
}

#[test]
fn missing_server_name_is_invalid() {
    let result = validate(&without("serverName"));
    assert!(!result.valid);
    assert_eq!(result.errors[0].message, "Invalid serverName");
    assert_eq!(result.errors[0].value, None);
}

#[test]
fn non_string_server_name_is_invalid() {
    assert!(!validate(&with("serverName", json!(42))).valid);
}

#[test]
fn single_character_server_name_is_valid_after_trim() {
    assert!(validate(&with("serverName", json!("  a  "))).valid);
}

#[test]
fn missing_cpu_is_invalid() {
    let result = validate(&without("cpu"));
    assert!(!result.valid);
    assert_eq!(result.errors[0].path.as_deref(), Some("cpu"));
}

#[test]
fn missing_ram_is_invalid() {
    let result = validate(&without("ram"));
    assert!(!result.valid);
    assert_eq!(result.errors[0].path.as_deref(), Some("ram"));
}

#[test]
fn cpu_and_ram_bounds_are_inclusive() {
    for field in ["cpu", "ram"] {
        assert!(validate(&with(field, json!(0))).valid, "{field} = 0");
        assert!(validate(&with(field, json!(100))).valid, "{field} = 100");
        assert!(!validate(&with(field, json!(-1))).valid, "{field} = -1");
        assert!(!validate(&with(field, json!(101))).valid, "{field} = 101");
    }
}

#[test]
fn numeric_strings_are_not_percentages() {
    let result = validate(&with("cpu", json!("50")));
    assert!(!result.valid);
    assert_eq!(result.errors[0].value, Some(json!("50")));
}

#[test]
fn every_bad_field_is_reported() {
    let result = validate(&json!({ "serverName": " ", "cpu": -5, "ram": 150.5 }));
    assert!(!result.valid);
    let paths: Vec<_> = result
        .errors
        .iter()
        .map(|e| e.path.clone().unwrap())
        .collect();
    assert_eq!(paths, vec!["serverName", "cpu", "ram"]);
}

#[test]
fn null_or_scalar_gives_single_generic_error() {
    for candidate in [Value::Null, json!("load"), json!(7), json!(false)] {
        let result = validate(&candidate);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "Invalid load");
        assert!(result.errors[0].path.is_none());
        assert!(result.errors[0].value.is_none());
    }
}

#[test]
fn array_gets_an_error_for_every_field() {
    for candidate in [json!([]), json!([1, 2])] {
        let result = validate(&candidate);
        assert!(!result.valid);
        let paths: Vec<_> = result.errors.iter().map(|e| e.path.as_deref()).collect();
        assert_eq!(paths, vec![Some("serverName"), Some("cpu"), Some("ram")]);
        assert!(result.errors.iter().all(|e| e.value.is_none()));
    }
}

#[test]
fn parse_load_rejects_array() {
    assert_eq!(parse_load(&json!([])).unwrap_err().len(), 3);
}

#[test]
fn parse_load_extracts_typed_sample() {
    let sample = parse_load(&json!({ "serverName": " web-1 ", "cpu": 12.5, "ram": 100 })).unwrap();
    assert_eq!(sample.server_name, " web-1 ");
    assert_eq!(sample.cpu, 12.5);
    assert_eq!(sample.ram, 100.0);
}

#[test]
fn parse_load_returns_validation_errors() {
    let errors = parse_load(&without("ram")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Invalid ram");
}
