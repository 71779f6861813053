// Validation of submitted loads. Pure; errors are returned as data, never raised.

use serde_json::Value;

use crate::models::{FieldError, LoadSample, ValidationResult};

const MIN_PERCENT: f64 = 0.0;
const MAX_PERCENT: f64 = 100.0;

/// Checks a decoded JSON body against the load rules. Every field is checked
/// independently so several errors can come back together. `null` and bare
/// scalars get one generic error; arrays and objects get field checks.
pub fn validate(candidate: &Value) -> ValidationResult {
    if !(candidate.is_object() || candidate.is_array()) {
        return ValidationResult::from_errors(vec![FieldError::generic("Invalid load")]);
    }

    let mut errors = Vec::new();

    if server_name(candidate).is_none() {
        errors.push(FieldError::field(
            "Invalid serverName",
            "serverName",
            field(candidate, "serverName").cloned(),
        ));
    }
    if percentage(candidate, "cpu").is_none() {
        errors.push(FieldError::field("Invalid cpu", "cpu", field(candidate, "cpu").cloned()));
    }
    if percentage(candidate, "ram").is_none() {
        errors.push(FieldError::field("Invalid ram", "ram", field(candidate, "ram").cloned()));
    }

    ValidationResult::from_errors(errors)
}

/// Validates and, on success, extracts the typed sample. The server name is
/// returned as submitted; trimming happens when the store records it.
pub fn parse_load(candidate: &Value) -> Result<LoadSample, Vec<FieldError>> {
    let result = validate(candidate);
    if !result.valid {
        return Err(result.errors);
    }
    extract(candidate).ok_or_else(|| vec![FieldError::generic("Invalid load")])
}

fn extract(candidate: &Value) -> Option<LoadSample> {
    Some(LoadSample {
        server_name: server_name(candidate)?.to_string(),
        cpu: percentage(candidate, "cpu")?,
        ram: percentage(candidate, "ram")?,
    })
}

/// Named member of an object; arrays have none.
fn field<'a>(candidate: &'a Value, name: &str) -> Option<&'a Value> {
    candidate.as_object()?.get(name)
}

fn server_name(candidate: &Value) -> Option<&str> {
    field(candidate, "serverName")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
}

fn percentage(candidate: &Value, name: &str) -> Option<f64> {
    field(candidate, name)
        .filter(|v| v.is_number())
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite() && (MIN_PERCENT..=MAX_PERCENT).contains(n))
}
