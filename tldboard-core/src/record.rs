use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One element of the fetched user listing, kept as raw JSON.
///
/// Fields other than `name`, `username` and `website` are carried along
/// untouched. Shape checks happen in [`crate::card::ValidUser`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Value);

impl UserRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Value of a top-level field, if the record is an object and has it.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object().and_then(|object| object.get(name))
    }

    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn website(&self) -> Option<&str> {
        self.text_field("website")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for UserRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short JSON type name used in diagnostics.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
