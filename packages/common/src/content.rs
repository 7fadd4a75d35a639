use serde::Serialize;
use serde_json::{Map, Value};

/// Editor-local working copy of a section's fields.
///
/// Field names mirror the [`SectionRecord`](crate::SectionRecord) the content
/// was seeded from. Image selections add a `${key}File` companion field that
/// only lives here and is never part of a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EditableContent(Map<String, Value>);

impl EditableContent {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String view of a field, empty when missing or not a string
    pub fn get_str(&self, field: &str) -> &str {
        self.0.get(field).and_then(Value::as_str).unwrap_or("")
    }

    /// Replace a field, returning the previous value
    pub fn set(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Ordered list stored under `field`, if that field holds an array
    pub fn list(&self, field: &str) -> Option<&Vec<Value>> {
        self.0.get(field).and_then(Value::as_array)
    }

    pub fn list_mut(&mut self, field: &str) -> Option<&mut Vec<Value>> {
        self.0.get_mut(field).and_then(Value::as_array_mut)
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

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Name of the raw-file companion field for an image field
pub fn file_field(key: &str) -> String {
    format!("{key}File")
}
