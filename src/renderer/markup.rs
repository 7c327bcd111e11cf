//! Element tree to markup serialization

use crate::element::Element;

use super::RenderConfig;

/// Accumulates markup for an element tree
pub struct MarkupWriter<'a> {
    config: &'a RenderConfig,
    out: String,
    depth: usize,
}

impl<'a> MarkupWriter<'a> {
    /// Create a new writer
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            out: String::new(),
            depth: 0,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            " ".repeat(self.config.indent_width * self.depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn open_tag(&mut self, element: &Element) {
        self.out.push('<');
        self.out.push_str(element.name());
        for (name, value) in element.attributes().iter() {
            self.out.push_str(&format!(r#" {}="{}""#, name, value));
        }
    }

    /// Write an element and everything below it
    pub fn write_element(&mut self, element: &Element) {
        let indent = self.indent_str();
        self.out.push_str(&indent);
        self.open_tag(element);

        if element.kind().is_leaf() {
            self.out.push_str("/>");
            return;
        }

        self.out.push('>');
        if let Some(text) = element.text_content() {
            self.out.push_str(text);
        }

        if !element.children().is_empty() {
            self.depth += 1;
            for child in element.children() {
                let nl = self.newline();
                self.out.push_str(nl);
                self.write_element(child);
            }
            self.depth -= 1;
            let nl = self.newline();
            self.out.push_str(nl);
            self.out.push_str(&indent);
        }

        self.out.push_str(&format!("</{}>", element.name()));
    }

    /// Take the finished markup
    pub fn finish(self) -> String {
        self.out
    }
}

/// Render an element tree to a markup string
pub fn render_element(element: &Element, config: &RenderConfig) -> String {
    let mut writer = MarkupWriter::new(config);
    writer.write_element(element);
    writer.finish()
}
