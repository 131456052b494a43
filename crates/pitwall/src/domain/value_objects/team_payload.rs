//! TeamPayload - Untyped inbound fields
//!
//! Fields are kept as raw JSON so validation can tell a missing field apart
//! from one of the wrong type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw create/update body. JSON `null` deserializes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub base: Option<Value>,
    #[serde(default)]
    pub championships_won: Option<Value>,
}

impl TeamPayload {
    /// Build a well-typed payload
    pub fn new(name: impl Into<String>, base: impl Into<String>, championships_won: i64) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            base: Some(Value::String(base.into())),
            championships_won: Some(Value::from(championships_won)),
        }
    }

    /// The supplied name, when it is a string
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }
}

/// JavaScript truthiness of a JSON value
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
