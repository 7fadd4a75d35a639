use marquee_common::{Card, EditableContent, FieldKind, FieldSpec, Tag};
use serde_json::Value;

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context<'a> {
    options: &'a RenderOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render one section's content as read-only markup.
///
/// Fields are emitted in layout order. Empty scalars, empty image references
/// and empty tags are skipped; a field missing from `content` renders nothing.
pub fn render_content(
    section: &str,
    fields: &[FieldSpec],
    content: &EditableContent,
    options: &RenderOptions,
) -> String {
    let mut ctx = Context::new(options);
    let id = escape_html(section);

    ctx.add_line(&format!(
        "<section id=\"{id}\" class=\"marquee-section marquee-{id}\">"
    ));
    ctx.indent();

    let alt = first_heading(fields, content);
    for field in fields {
        match field.kind {
            FieldKind::Heading => render_text("h2", field.name, content, &mut ctx),
            FieldKind::Subheading => render_text("h3", field.name, content, &mut ctx),
            FieldKind::Paragraph => render_text("p", field.name, content, &mut ctx),
            FieldKind::Label => render_text("span", field.name, content, &mut ctx),
            FieldKind::Image => render_image(field.name, alt, content, &mut ctx),
            FieldKind::Tags => render_tags(field.name, content, &mut ctx),
            FieldKind::Cards => render_cards(field.name, content, &mut ctx),
        }
    }

    ctx.dedent();
    ctx.add_line("</section>");

    ctx.get_output()
}

fn first_heading<'c>(fields: &[FieldSpec], content: &'c EditableContent) -> &'c str {
    fields
        .iter()
        .find(|f| f.kind == FieldKind::Heading)
        .map(|f| content.get_str(f.name))
        .unwrap_or("")
}

fn render_text(tag: &str, field: &str, content: &EditableContent, ctx: &mut Context) {
    let text = scalar_text(content.get(field));
    if text.is_empty() {
        return;
    }

    ctx.add_line(&format!(
        "<{tag} data-field=\"{field}\">{}</{tag}>",
        escape_html(&text)
    ));
}

fn render_image(field: &str, alt: &str, content: &EditableContent, ctx: &mut Context) {
    let src = content.get_str(field);
    if src.is_empty() {
        return;
    }

    ctx.add_line(&format!(
        "<img data-field=\"{field}\" src=\"{}\" alt=\"{}\" />",
        escape_html(src),
        escape_html(alt)
    ));
}

fn render_tags(field: &str, content: &EditableContent, ctx: &mut Context) {
    let Some(items) = content.list(field) else {
        return;
    };

    let tags: Vec<Tag> = items
        .iter()
        .map(Tag::normalize)
        .filter(|tag| !tag.text.is_empty())
        .collect();
    if tags.is_empty() {
        return;
    }

    ctx.add_line(&format!("<ul data-field=\"{field}\" class=\"tags\">"));
    ctx.indent();
    for tag in tags {
        ctx.add_line(&format!("<li>{}</li>", escape_html(&tag.text)));
    }
    ctx.dedent();
    ctx.add_line("</ul>");
}

fn render_cards(field: &str, content: &EditableContent, ctx: &mut Context) {
    let Some(items) = content.list(field) else {
        return;
    };
    if items.is_empty() {
        return;
    }

    ctx.add_line(&format!("<div data-field=\"{field}\" class=\"cards\">"));
    ctx.indent();
    for item in items {
        let card = Card::from_item(item);
        ctx.add_line("<blockquote class=\"card\">");
        ctx.indent();
        ctx.add_line(&format!("<p>{}</p>", escape_html(&card.text)));
        ctx.add_line(&format!(
            "<footer><cite>{}</cite>, <span>{}</span></footer>",
            escape_html(&card.name),
            escape_html(&card.company)
        ));
        ctx.dedent();
        ctx.add_line("</blockquote>");
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
