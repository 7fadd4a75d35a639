/// What a section field holds, and therefore how it is seeded and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Main section title
    Heading,
    /// Secondary title under the heading
    Subheading,
    /// Free-form body text
    Paragraph,
    /// Short inline text (button captions, phone numbers, ...)
    Label,
    /// Image reference (URL or local preview URI)
    Image,
    /// Ordered list of [`Tag`](crate::Tag)s
    Tags,
    /// Ordered list of [`Card`](crate::Card)s
    Cards,
}

impl FieldKind {
    pub fn is_list(self) -> bool {
        matches!(self, FieldKind::Tags | FieldKind::Cards)
    }
}

/// One field in a section's layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Find a field by name in a layout
pub fn find_field<'a>(fields: &'a [FieldSpec], name: &str) -> Option<&'a FieldSpec> {
    fields.iter().find(|f| f.name == name)
}
