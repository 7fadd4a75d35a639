//! # Section Schemas
//!
//! A [`SectionSchema`] describes one kind of page section: its field layout,
//! the literal defaults used when the content API has nothing, the templates
//! for new list items and the exact payload shape the API expects back.

use marquee_common::{
    file_field, normalize_tags, tags_to_strings, Card, EditableContent, FieldKind, FieldSpec,
    SectionRecord, Tag,
};
use serde_json::{Map, Value};

/// Static description of one section type
pub trait SectionSchema: Send + Sync + 'static {
    /// Key the content API uses for this section
    const KEY: &'static str;

    /// Human-readable name used in notices
    const TITLE: &'static str;

    /// Field layout, in render order
    fn fields() -> &'static [FieldSpec];

    /// Literal fallbacks for every field
    fn defaults() -> EditableContent;

    /// Item appended by "add" on a list field
    fn list_template(list: &str) -> Option<Value> {
        default_template(Self::fields(), list)
    }

    /// Normalized payload sent to the content API on save
    fn payload(content: &EditableContent) -> Value;
}

/// Seed editable content from an optional record and a default map.
///
/// Scalars take the record value when present and truthy, otherwise the
/// default. Lists take the record array as-is when present. Tag lists are
/// normalized to `{text}` objects. Fields outside the layout are ignored, so
/// re-seeding always replaces the whole store.
pub fn seed(
    record: Option<&SectionRecord>,
    fields: &[FieldSpec],
    defaults: &EditableContent,
) -> EditableContent {
    let mut content = EditableContent::new();

    for field in fields {
        let fallback = || {
            defaults
                .get(field.name)
                .cloned()
                .unwrap_or_else(|| empty_value(field.kind))
        };

        let value = if field.kind.is_list() {
            match record.and_then(|r| r.get(field.name)) {
                Some(Value::Array(items)) => Value::Array(items.clone()),
                _ => fallback(),
            }
        } else {
            record
                .and_then(|r| r.truthy(field.name))
                .cloned()
                .unwrap_or_else(fallback)
        };

        let value = match (field.kind, value) {
            (FieldKind::Tags, Value::Array(items)) => Value::Array(normalize_tags(&items)),
            (_, value) => value,
        };

        content.set(field.name, value);
    }

    content
}

/// Blank tag or placeholder card, depending on the list's kind
pub fn default_template(fields: &[FieldSpec], list: &str) -> Option<Value> {
    let field = fields.iter().find(|f| f.name == list)?;
    match field.kind {
        FieldKind::Tags => Some(Tag::default().to_value()),
        FieldKind::Cards => Some(
            Card::new("New Client", "Company Name", "Testimonial text here...").to_value(),
        ),
        _ => None,
    }
}

/// Build the usual payload shape for a layout.
///
/// Fields are copied under their own name unless listed in `renames`
/// (`(from, to)` pairs). Tag lists become plain strings with empties
/// dropped, cards pass through, and a pending image file contributes its
/// `${key}File` descriptor so the API can match the uploaded part.
pub fn build_payload(
    fields: &[FieldSpec],
    content: &EditableContent,
    renames: &[(&str, &str)],
) -> Value {
    let mut payload = Map::new();

    for field in fields {
        let name = renames
            .iter()
            .find(|(from, _)| *from == field.name)
            .map(|(_, to)| *to)
            .unwrap_or(field.name);

        let value = match (field.kind, content.get(field.name)) {
            (_, None) => continue,
            (FieldKind::Tags, Some(Value::Array(items))) => Value::Array(
                tags_to_strings(items)
                    .into_iter()
                    .map(Value::String)
                    .collect(),
            ),
            (_, Some(value)) => value.clone(),
        };
        payload.insert(name.to_string(), value);

        if field.kind == FieldKind::Image {
            let file_key = file_field(field.name);
            if let Some(descriptor) = content.get(&file_key) {
                payload.insert(file_key, descriptor.clone());
            }
        }
    }

    Value::Object(payload)
}

fn empty_value(kind: FieldKind) -> Value {
    if kind.is_list() {
        Value::Array(Vec::new())
    } else {
        Value::String(String::new())
    }
}
