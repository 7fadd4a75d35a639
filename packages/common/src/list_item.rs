//! List item shapes stored inside list-valued section fields.
//!
//! Items carry no stable id: position in the list is their identity, so every
//! removal shifts the indices of the items after it.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single tagged string, e.g. one entry of a services list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub text: String,
}

impl Tag {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Coerce a loosely-typed item into a tag.
    ///
    /// Bare strings are wrapped, `{text: "..."}` objects pass through, and any
    /// other shape degrades to an empty tag.
    pub fn normalize(item: &Value) -> Self {
        match item {
            Value::String(s) => Self::new(s.as_str()),
            Value::Object(map) => match map.get("text") {
                Some(Value::String(s)) => Self::new(s.as_str()),
                _ => Self::default(),
            },
            _ => Self::default(),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({ "text": self.text })
    }
}

/// A testimonial card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub name: String,
    pub company: String,
    pub text: String,
}

impl Card {
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            text: text.into(),
        }
    }

    /// Read a loosely-typed item field by field; a missing or non-string
    /// field comes back empty without affecting the others.
    pub fn from_item(item: &Value) -> Self {
        let text_of = |key: &str| {
            item.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            name: text_of("name"),
            company: text_of("company"),
            text: text_of("text"),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "company": self.company,
            "text": self.text,
        })
    }
}

/// Normalize a list of loosely-typed tag items into `{text}` objects.
///
/// Idempotent: normalizing an already-normalized list yields the same list.
/// Objects that already carry a string `text` are kept as they are,
/// including any sibling keys.
pub fn normalize_tags(items: &[Value]) -> Vec<Value> {
    items
        .iter()
        .map(|item| match item {
            Value::Object(map) if map.get("text").is_some_and(Value::is_string) => item.clone(),
            other => Tag::normalize(other).to_value(),
        })
        .collect()
}

/// Map `{text}` objects back to plain strings, dropping empty ones
pub fn tags_to_strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(Tag::normalize)
        .filter(|tag| !tag.text.is_empty())
        .map(|tag| tag.text)
        .collect()
}
