//! Typed schema error model shared across SDK and orchestrator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a stream cannot produce a usable JSON schema.
///
/// This is the only failure mode of catalog projection. Malformed cursor
/// declarations are normalized rather than rejected, so they never reach
/// this type.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaError {
    /// The stream's schema accessor failed.
    #[error("schema accessor failed: {message}")]
    Access { message: String },
    /// The schema accessor returned a value that is not a JSON object.
    #[error("schema must be a JSON object, got {found}")]
    NotAnObject { found: String },
}

impl SchemaError {
    /// Schema accessor failure.
    pub fn access(message: impl Into<String>) -> Self {
        Self::Access {
            message: message.into(),
        }
    }

    /// Non-object schema value, named by its JSON type.
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        Self::NotAnObject {
            found: json_type_name(value).to_string(),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
