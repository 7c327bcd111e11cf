//! Declarative scene files
//!
//! A scene is a TOML description of a document: the `[svg]` table holds the
//! root attributes and each `[[element]]` entry becomes a child, with nested
//! `children` arrays for animations.
//!
//! ```toml
//! [svg]
//! width = 300
//! height = 200
//!
//! [[element]]
//! tag = "circle"
//! attributes = { id = "sun", cx = 150, cy = 100, r = 40, fill = "orange" }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use toml::{Table, Value};

use crate::element::{Element, TagKind};
use crate::error::SvgError;
use crate::renderer::Document;

/// Errors that can occur when loading or building a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("unknown tag '{0}'")]
    UnknownTag(String),
    #[error("attribute '{name}' has unsupported {kind} value")]
    Value { name: String, kind: &'static str },
    #[error(transparent)]
    Element(#[from] SvgError),
}

/// A document loaded from a scene description
#[derive(Debug, Clone)]
pub struct Scene {
    document: Document,
}

/// TOML structure for deserializing scenes
#[derive(Deserialize)]
struct TomlScene {
    svg: Table,
    #[serde(default)]
    element: Vec<TomlElement>,
}

#[derive(Deserialize)]
struct TomlElement {
    tag: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    attributes: Table,
    #[serde(default)]
    children: Vec<TomlElement>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;

        let root = Element::svg().attrs(stringify_table(&parsed.svg)?).build()?;
        let mut document = Document::from_root(root)?;
        for entry in &parsed.element {
            document.add_child(build_element(entry)?)?;
        }

        tracing::debug!(
            children = document.root().children().len(),
            "scene loaded"
        );
        Ok(Scene { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

fn build_element(entry: &TomlElement) -> Result<Element, SceneError> {
    let kind = TagKind::from_name(&entry.tag)
        .ok_or_else(|| SceneError::UnknownTag(entry.tag.clone()))?;

    let mut builder = Element::builder(kind).attrs(stringify_table(&entry.attributes)?);
    if let Some(text) = &entry.text {
        builder = builder.text(text.clone());
    }

    let mut element = builder.build()?;
    for child in &entry.children {
        element.add_child(build_element(child)?)?;
    }
    Ok(element)
}

/// Attribute values as strings, in file order
///
/// Floats keep a fractional part (`50.0` stays `"50.0"`); very large or
/// small magnitudes use exponent form, as `f64`'s `Debug` output does.
fn stringify_table(table: &Table) -> Result<Vec<(String, String)>, SceneError> {
    table
        .iter()
        .map(|(name, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Integer(i) => i.to_string(),
                Value::Float(f) => format!("{:?}", f),
                Value::Boolean(b) => b.to_string(),
                other => {
                    return Err(SceneError::Value {
                        name: name.clone(),
                        kind: other.type_str(),
                    })
                }
            };
            Ok((name.clone(), text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scene() {
        let toml_str = r#"
[svg]
width = 300
height = 200

[[element]]
tag = "circle"
attributes = { id = "c", cx = 50, cy = 50.5, r = 20, fill = "red" }

[[element]]
tag = "text"
text = "Hello"
attributes = { id = "t", x = 10, y = 20 }
"#;
        let scene = Scene::from_str(toml_str).expect("Should parse");
        let root = scene.document().root();
        assert_eq!(root.attribute("width"), Some("300"));
        assert_eq!(root.children().len(), 2);

        let circle = &root.children()[0];
        assert_eq!(circle.kind(), TagKind::Circle);
        assert_eq!(circle.attribute("cy"), Some("50.5"));
        let names: Vec<_> = circle.attributes().iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["id", "cx", "cy", "r", "fill"]);

        assert_eq!(root.children()[1].text_content(), Some("Hello"));
    }

    #[test]
    fn test_nested_animation() {
        let toml_str = r#"
[svg]
width = 10
height = 10

[[element]]
tag = "rect"
attributes = { id = "r", x = 0, y = 0, width = 5, height = 5 }

[[element.children]]
tag = "animate"
attributes = { attributeName = "x", begin = "0s", dur = "1s", to = 5, fill = "freeze" }
"#;
        let scene = Scene::from_str(toml_str).expect("Should parse");
        let rect = &scene.document().root().children()[0];
        assert_eq!(rect.children()[0].kind(), TagKind::Animate);
    }

    #[test]
    fn test_unknown_tag() {
        let toml_str = r#"
[svg]
width = 1
height = 1

[[element]]
tag = "blink"
"#;
        let err = Scene::from_str(toml_str).unwrap_err();
        assert!(matches!(err, SceneError::UnknownTag(ref t) if t == "blink"));
    }

    #[test]
    fn test_missing_root_attribute() {
        let err = Scene::from_str("[svg]\nwidth = 1\n").unwrap_err();
        match err {
            SceneError::Element(e) => {
                assert_eq!(e.missing_attributes(), Some(&["height".to_string()][..]))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_forbidden_child() {
        let toml_str = r#"
[svg]
width = 1
height = 1

[[element]]
tag = "path"
attributes = { id = "p", d = "M0 0" }

[[element.children]]
tag = "circle"
attributes = { id = "c", cx = 0, cy = 0, r = 1 }
"#;
        let err = Scene::from_str(toml_str).unwrap_err();
        assert!(matches!(
            err,
            SceneError::Element(SvgError::ChildNotPermitted { .. })
        ));
    }

    #[test]
    fn test_float_values_keep_fraction() {
        let scene = Scene::from_str("[svg]\nwidth = 50.0\nheight = 1e3\nopacity = 0.25\n")
            .expect("Should parse");
        let root = scene.document().root();
        assert_eq!(root.attribute("width"), Some("50.0"));
        assert_eq!(root.attribute("height"), Some("1000.0"));
        assert_eq!(root.attribute("opacity"), Some("0.25"));
    }

    #[test]
    fn test_text_on_animate_rejected() {
        let toml_str = r#"
[svg]
width = 1
height = 1

[[element]]
tag = "circle"
attributes = { id = "c", cx = 0, cy = 0, r = 1 }

[[element.children]]
tag = "animate"
text = "lost"
attributes = { attributeName = "r", begin = "0s", dur = "1s", to = 2, fill = "freeze" }
"#;
        let err = Scene::from_str(toml_str).unwrap_err();
        assert!(matches!(
            err,
            SceneError::Element(SvgError::TextNotPermitted { .. })
        ));
    }

    #[test]
    fn test_unsupported_value_type() {
        let err = Scene::from_str("[svg]\nwidth = [1, 2]\nheight = 1\n").unwrap_err();
        assert!(matches!(err, SceneError::Value { ref name, kind: "array" } if name == "width"));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("svg_creator_scene_{}.toml", std::process::id()));
        std::fs::write(&path, "[svg]\nwidth = 5\nheight = 6\n").unwrap();
        let document = Scene::from_file(&path).expect("Should load").into_document();
        assert_eq!(document.root().attribute("height"), Some("6"));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            Scene::from_file(&path),
            Err(SceneError::IoError(_))
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        assert!(matches!(
            Scene::from_str(invalid),
            Err(SceneError::ParseError(_))
        ));
    }
}
