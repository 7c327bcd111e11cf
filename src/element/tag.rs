//! Validated SVG elements and their builder

use std::fmt;

use crate::error::SvgError;
use crate::renderer::{render_element, RenderConfig};

use super::attributes::Attributes;
use super::kind::{TagKind, SVG_XMLNS};

/// A single SVG tag with its attributes, text and children
///
/// An `Element` always carries every attribute its kind requires; the only
/// ways to create one go through validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: TagKind,
    attributes: Attributes,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Validate `attributes` against `kind` and construct the element
    pub fn new(kind: TagKind, attributes: Attributes) -> Result<Self, SvgError> {
        Self::validated(kind, attributes, None)
    }

    /// Start building an element of any kind
    pub fn builder(kind: TagKind) -> ElementBuilder {
        ElementBuilder::new(kind)
    }

    /// `<svg>` root; requires `width` and `height`
    pub fn svg() -> ElementBuilder {
        ElementBuilder::new(TagKind::Svg)
    }

    pub fn circle() -> ElementBuilder {
        ElementBuilder::new(TagKind::Circle)
    }

    pub fn ellipse() -> ElementBuilder {
        ElementBuilder::new(TagKind::Ellipse)
    }

    pub fn line() -> ElementBuilder {
        ElementBuilder::new(TagKind::Line)
    }

    pub fn path() -> ElementBuilder {
        ElementBuilder::new(TagKind::Path)
    }

    pub fn polygon() -> ElementBuilder {
        ElementBuilder::new(TagKind::Polygon)
    }

    pub fn polyline() -> ElementBuilder {
        ElementBuilder::new(TagKind::Polyline)
    }

    pub fn rect() -> ElementBuilder {
        ElementBuilder::new(TagKind::Rect)
    }

    /// `<text>` carrying `content` between its tags
    pub fn text(content: impl Into<String>) -> ElementBuilder {
        ElementBuilder::new(TagKind::Text).text(content)
    }

    pub fn animate() -> ElementBuilder {
        ElementBuilder::new(TagKind::Animate)
    }

    fn validated(
        kind: TagKind,
        mut attributes: Attributes,
        text: Option<String>,
    ) -> Result<Self, SvgError> {
        let missing = attributes.missing(kind.required_attributes());
        if !missing.is_empty() {
            tracing::debug!(tag = kind.name(), ?missing, "required attributes missing");
            return Err(SvgError::unsatisfied(
                kind.name(),
                missing.into_iter().map(String::from).collect(),
            ));
        }

        if kind.is_leaf() && text.is_some() {
            tracing::debug!(tag = kind.name(), "text rejected on leaf tag");
            return Err(SvgError::TextNotPermitted {
                tag: kind.name().to_string(),
            });
        }

        if kind == TagKind::Svg {
            attributes.set_first_if_absent("xmlns", SVG_XMLNS);
        }

        Ok(Self {
            kind,
            attributes,
            text,
            children: vec![],
        })
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// XML tag name
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Add or replace an attribute
    ///
    /// Attributes are never removed, so a constructed element stays valid.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.attributes.set(name, value);
        self
    }

    /// Append a child, checking that this kind accepts it
    pub fn add_child(&mut self, child: Element) -> Result<&mut Self, SvgError> {
        if !self.kind.accepts_child(child.kind) {
            tracing::debug!(
                parent = self.kind.name(),
                child = child.kind.name(),
                "child rejected"
            );
            return Err(SvgError::child_not_permitted(
                self.kind.name(),
                child.kind.name(),
            ));
        }
        self.children.push(child);
        Ok(self)
    }

    /// Consuming form of [`Element::add_child`]
    pub fn with_child(mut self, child: Element) -> Result<Self, SvgError> {
        self.add_child(child)?;
        Ok(self)
    }

    /// Serialize with the compact default configuration
    pub fn render(&self) -> String {
        render_element(self, &RenderConfig::default())
    }

    /// Serialize with a custom configuration
    pub fn render_with(&self, config: &RenderConfig) -> String {
        render_element(self, config)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Collects attributes and text for an element before validation
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    kind: TagKind,
    attributes: Attributes,
    text: Option<String>,
}

impl ElementBuilder {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            attributes: Attributes::new(),
            text: None,
        }
    }

    /// Set an attribute; any displayable value is stringified
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Set several attributes at once
    pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        self.attributes.extend(attrs);
        self
    }

    /// Set the text placed between the open and close tags
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    /// Check required attributes and produce the element
    pub fn build(self) -> Result<Element, SvgError> {
        Element::validated(self.kind, self.attributes, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Element {
        Element::rect()
            .attr("id", "rect")
            .attr("x", 20)
            .attr("y", 20)
            .attr("width", 100)
            .attr("height", 50)
            .build()
            .unwrap()
    }

    fn animate() -> Element {
        Element::animate()
            .attr("attributeName", "x")
            .attr("begin", "0.1s")
            .attr("dur", "1s")
            .attr("to", 30)
            .attr("fill", "freeze")
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_with_required_attributes() {
        let rect = rect();
        assert_eq!(rect.kind(), TagKind::Rect);
        assert_eq!(rect.attribute("x"), Some("20"));
        assert!(rect.children().is_empty());
    }

    #[test]
    fn test_missing_attributes_rejected() {
        let err = Element::circle().attr("id", "c").attr("r", 3).build().unwrap_err();
        match err {
            SvgError::UnsatisfiedAttributes { tag, missing } => {
                assert_eq!(tag, "circle");
                assert_eq!(missing, vec!["cx", "cy"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_new_validates_like_builder() {
        let attrs: Attributes = [("id", "p")].into_iter().collect();
        let err = Element::new(TagKind::Path, attrs).unwrap_err();
        assert_eq!(err.missing_attributes(), Some(&["d".to_string()][..]));
    }

    #[test]
    fn test_optional_attributes_accepted() {
        let line = Element::line()
            .attrs([("id", "l"), ("x1", "30"), ("y1", "30"), ("x2", "50"), ("y2", "50")])
            .attr("style", "stroke:red")
            .build()
            .unwrap();
        assert_eq!(line.attribute("style"), Some("stroke:red"));
    }

    #[test]
    fn test_svg_gets_default_namespace_first() {
        let svg = Element::svg().attr("width", 300).attr("height", 400).build().unwrap();
        let first = svg.attributes().iter().next();
        assert_eq!(first, Some(("xmlns", SVG_XMLNS)));
    }

    #[test]
    fn test_svg_keeps_caller_namespace() {
        let svg = Element::svg()
            .attr("width", 1)
            .attr("height", 1)
            .attr("xmlns", "urn:custom")
            .build()
            .unwrap();
        assert_eq!(svg.attribute("xmlns"), Some("urn:custom"));
        assert_eq!(svg.attributes().len(), 3);
    }

    #[test]
    fn test_shape_accepts_animation() {
        let mut rect = rect();
        rect.add_child(animate()).unwrap();
        assert_eq!(rect.children().len(), 1);
    }

    #[test]
    fn test_shape_rejects_shape_child() {
        let mut outer = rect();
        let err = outer.add_child(rect()).unwrap_err();
        assert!(matches!(err, SvgError::ChildNotPermitted { .. }));
        assert!(outer.children().is_empty());
    }

    #[test]
    fn test_animate_is_leaf() {
        let err = animate().with_child(animate()).unwrap_err();
        assert!(matches!(err, SvgError::ChildNotPermitted { .. }));
    }

    #[test]
    fn test_children_kept_in_order() {
        let svg = Element::svg()
            .attr("width", 10)
            .attr("height", 10)
            .build()
            .unwrap()
            .with_child(rect())
            .and_then(|s| s.with_child(animate()))
            .unwrap();
        let kinds: Vec<_> = svg.children().iter().map(Element::kind).collect();
        assert_eq!(kinds, vec![TagKind::Rect, TagKind::Animate]);
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut rect = rect();
        rect.set_attribute("x", 5).set_attribute("fill", "blue");
        assert_eq!(rect.attribute("x"), Some("5"));
        assert_eq!(rect.attribute("fill"), Some("blue"));
    }

    #[test]
    fn test_leaf_rejects_text() {
        let err = Element::animate()
            .attrs([
                ("attributeName", "x"),
                ("begin", "0s"),
                ("dur", "1s"),
                ("to", "3"),
                ("fill", "freeze"),
            ])
            .text("lost")
            .build()
            .unwrap_err();
        assert!(matches!(err, SvgError::TextNotPermitted { ref tag } if tag == "animate"));
        assert_eq!(err.to_string(), "<animate> cannot hold text content");
    }

    #[test]
    fn test_text_content() {
        let text = Element::text("SVG!")
            .attr("id", "text")
            .attr("x", 100)
            .attr("y", 100)
            .build()
            .unwrap();
        assert_eq!(text.text_content(), Some("SVG!"));
    }
}
