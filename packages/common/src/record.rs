use crate::error::CommonError;
use crate::result::CommonResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-owned content of one page section.
///
/// A record is treated as immutable input: editors copy it into
/// [`EditableContent`](crate::EditableContent) and never write back into it.
/// The content API replaces it wholesale when it re-supplies data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionRecord(Map<String, Value>);

impl SectionRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap an already-parsed JSON object
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build a record from an arbitrary JSON value (must be an object)
    pub fn from_value(value: Value) -> CommonResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CommonError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Raw field lookup
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field lookup that treats falsy values as absent
    pub fn truthy(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| is_truthy(v))
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for SectionRecord {
    type Error = CommonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// JSON truthiness as the content API understands it.
///
/// `null`, `false`, `0` and `""` are falsy; arrays and objects are always
/// truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

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
