//! Standalone documents: XML or HTML wrappers around an `<svg>` root

use std::fs;
use std::path::Path;

use crate::element::{Element, TagKind};
use crate::error::SvgError;

use super::{render_element, RenderConfig};

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 20001102//EN"
 "http://www.w3.org/TR/2000/CR-SVG-20001102/DTD/svg-20001102.dtd">

"#;

const HTML_HEAD: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<body>\n";
const HTML_TAIL: &str = "\n</body>\n</html>\n";

/// File format selected by output extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `.svg`: XML prolog and doctype followed by the markup
    Svg,
    /// `.html`: markup embedded in a minimal HTML page
    Html,
}

impl OutputFormat {
    /// Pick the format from the path's extension (`svg` or `html`)
    pub fn from_path(path: &Path) -> Result<Self, SvgError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("svg") => Ok(OutputFormat::Svg),
            Some("html") => Ok(OutputFormat::Html),
            _ => Err(SvgError::UnknownExtension {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// An `<svg>` root ready to be written out as a file
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Create a document with an empty root of the given size
    pub fn new(width: impl ToString, height: impl ToString) -> Result<Self, SvgError> {
        let root = Element::svg()
            .attr("width", width)
            .attr("height", height)
            .build()?;
        Ok(Self { root })
    }

    /// Wrap an existing element, which must be an `<svg>`
    pub fn from_root(root: Element) -> Result<Self, SvgError> {
        if root.kind() != TagKind::Svg {
            return Err(SvgError::NotSvgRoot {
                found: root.name().to_string(),
            });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    /// Append a child to the root
    pub fn add_child(&mut self, child: Element) -> Result<&mut Self, SvgError> {
        self.root.add_child(child)?;
        Ok(self)
    }

    /// Bare `<svg>` markup with no wrapper
    pub fn to_svg_string(&self, config: &RenderConfig) -> String {
        render_element(&self.root, config)
    }

    /// Markup preceded by the XML declaration and SVG doctype
    pub fn to_xml_string(&self, config: &RenderConfig) -> String {
        format!("{}{}\n", XML_PROLOG, self.to_svg_string(config))
    }

    /// Markup embedded in an HTML page
    pub fn to_html_string(&self, config: &RenderConfig) -> String {
        format!("{}{}{}", HTML_HEAD, self.to_svg_string(config), HTML_TAIL)
    }

    pub fn render(&self, format: OutputFormat, config: &RenderConfig) -> String {
        match format {
            OutputFormat::Svg => self.to_xml_string(config),
            OutputFormat::Html => self.to_html_string(config),
        }
    }

    /// Write to `path`, choosing the wrapper from its extension
    ///
    /// The file is created or truncated. Paths that end in neither `.svg` nor
    /// `.html` are rejected before anything is written.
    pub fn write_to(&self, path: impl AsRef<Path>, config: &RenderConfig) -> Result<(), SvgError> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        let content = self.render(format, config);

        tracing::info!(path = %path.display(), ?format, bytes = content.len(), "writing document");
        fs::write(path, content).map_err(|source| SvgError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
