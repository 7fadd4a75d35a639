use marquee_common::Card;
use marquee_editor::{build_payload, EditableContent, FieldKind, FieldSpec, SectionSchema};
use serde_json::{json, Value};

pub struct Testimonials;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", FieldKind::Heading),
    FieldSpec::new("cards", FieldKind::Cards),
];

impl SectionSchema for Testimonials {
    const KEY: &'static str = "testimonials";
    const TITLE: &'static str = "Testimonials";

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn defaults() -> EditableContent {
        let mut defaults = EditableContent::new();
        defaults.set("heading", json!("What Our Clients Say"));
        defaults.set(
            "cards",
            Value::Array(vec![Card::new(
                "Client Name",
                "Company Name",
                "Working with this team made our project effortless.",
            )
            .to_value()]),
        );
        defaults
    }

    // Cards go back exactly as edited
    fn payload(content: &EditableContent) -> Value {
        build_payload(FIELDS, content, &[])
    }
}
