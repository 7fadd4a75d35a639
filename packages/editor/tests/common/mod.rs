//! Section schemas shared by the editor integration tests

#![allow(dead_code)]

use marquee_editor::{build_payload, EditableContent, FieldKind, FieldSpec, SectionSchema};
use serde_json::{json, Value};

pub struct Testimonials;

const TESTIMONIAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", FieldKind::Heading),
    FieldSpec::new("cards", FieldKind::Cards),
];

impl SectionSchema for Testimonials {
    const KEY: &'static str = "testimonials";
    const TITLE: &'static str = "Testimonials";

    fn fields() -> &'static [FieldSpec] {
        TESTIMONIAL_FIELDS
    }

    fn defaults() -> EditableContent {
        let mut defaults = EditableContent::new();
        defaults.set("heading", json!("What Our Clients Say"));
        defaults.set("cards", json!([]));
        defaults
    }

    fn payload(content: &EditableContent) -> Value {
        build_payload(TESTIMONIAL_FIELDS, content, &[])
    }
}

pub struct Services;

const SERVICE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", FieldKind::Heading),
    FieldSpec::new("paragraph", FieldKind::Paragraph),
    FieldSpec::new("image", FieldKind::Image),
    FieldSpec::new("tags", FieldKind::Tags),
];

impl SectionSchema for Services {
    const KEY: &'static str = "services";
    const TITLE: &'static str = "Services";

    fn fields() -> &'static [FieldSpec] {
        SERVICE_FIELDS
    }

    fn defaults() -> EditableContent {
        let mut defaults = EditableContent::new();
        defaults.set("heading", json!("Our Services"));
        defaults.set("paragraph", json!("End-to-end project support."));
        defaults.set("image", json!("/images/services.jpg"));
        defaults.set("tags", json!(["Vendor Coordination"]));
        defaults
    }

    fn payload(content: &EditableContent) -> Value {
        build_payload(SERVICE_FIELDS, content, &[("heading", "title")])
    }
}
