//! The closed set of supported SVG tags

use std::fmt;

/// Namespace inserted on every `<svg>` root that does not declare its own
pub const SVG_XMLNS: &str = "http://www.w3.org/2000/svg";

/// Kind of an SVG tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Svg,
    Circle,
    Ellipse,
    Line,
    Path,
    Polygon,
    Polyline,
    Rect,
    Text,
    Animate,
}

impl TagKind {
    /// Every supported kind, in declaration order
    pub const ALL: [TagKind; 10] = [
        TagKind::Svg,
        TagKind::Circle,
        TagKind::Ellipse,
        TagKind::Line,
        TagKind::Path,
        TagKind::Polygon,
        TagKind::Polyline,
        TagKind::Rect,
        TagKind::Text,
        TagKind::Animate,
    ];

    /// XML tag name
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Svg => "svg",
            TagKind::Circle => "circle",
            TagKind::Ellipse => "ellipse",
            TagKind::Line => "line",
            TagKind::Path => "path",
            TagKind::Polygon => "polygon",
            TagKind::Polyline => "polyline",
            TagKind::Rect => "rect",
            TagKind::Text => "text",
            TagKind::Animate => "animate",
        }
    }

    /// Look up a kind by its exact tag name
    pub fn from_name(name: &str) -> Option<TagKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Attributes that must be present before the tag can be constructed
    pub fn required_attributes(self) -> &'static [&'static str] {
        match self {
            TagKind::Svg => &["width", "height"],
            TagKind::Circle => &["id", "cx", "cy", "r"],
            TagKind::Ellipse => &["id", "cx", "cy", "rx", "ry"],
            TagKind::Line => &["id", "x1", "y1", "x2", "y2"],
            TagKind::Path => &["id", "d"],
            TagKind::Polygon | TagKind::Polyline => &["id", "points"],
            TagKind::Rect => &["id", "x", "y", "width", "height"],
            TagKind::Text => &["id", "x", "y"],
            TagKind::Animate => &["attributeName", "begin", "dur", "to", "fill"],
        }
    }

    /// Leaf tags never hold children and render self-closing
    pub fn is_leaf(self) -> bool {
        matches!(self, TagKind::Animate)
    }

    /// Whether an element of this kind may contain a `child` element
    ///
    /// The root accepts anything. Shapes and text only take animations.
    pub fn accepts_child(self, child: TagKind) -> bool {
        match self {
            TagKind::Svg => true,
            TagKind::Animate => false,
            _ => child == TagKind::Animate,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
