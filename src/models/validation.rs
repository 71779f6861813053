// Field-level validation errors, returned as data

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl FieldError {
    /// Error not tied to any field (e.g. the body is not an object).
    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            value: None,
        }
    }

    pub fn field(
        message: impl Into<String>,
        path: impl Into<String>,
        value: Option<serde_json::Value>,
    ) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
