//! SVG Creator - build SVG markup from a typed tag model
//!
//! Elements are built through validating builders, nested under an `<svg>`
//! root and serialized to a string, either bare or wrapped in an XML or HTML
//! document.
//!
//! # Example
//!
//! ```rust
//! use svg_creator::{Document, Element, RenderConfig};
//!
//! let mut doc = Document::new(100, 100).unwrap();
//! let circle = Element::circle()
//!     .attr("id", "dot")
//!     .attr("cx", 50)
//!     .attr("cy", 50)
//!     .attr("r", 10)
//!     .build()
//!     .unwrap();
//! doc.add_child(circle).unwrap();
//!
//! let svg = doc.to_svg_string(&RenderConfig::default());
//! assert!(svg.contains(r#"<circle id="dot" cx="50" cy="50" r="10"></circle>"#));
//! ```

pub mod element;
pub mod error;
pub mod renderer;
pub mod scene;

pub use element::{Attributes, Element, ElementBuilder, TagKind, SVG_XMLNS};
pub use error::SvgError;
pub use renderer::{render_element, Document, OutputFormat, RenderConfig};
pub use scene::{Scene, SceneError};

use thiserror::Error;

/// Errors that can occur during the scene render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while loading the scene description
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Error from the element model or document output
    #[error("svg error: {0}")]
    Svg(#[from] SvgError),
}

/// Render a TOML scene to bare `<svg>` markup with default configuration
///
/// # Example
///
/// ```rust
/// use svg_creator::render_scene;
///
/// let svg = render_scene(r#"
///     [svg]
///     width = 40
///     height = 40
///
///     [[element]]
///     tag = "rect"
///     attributes = { id = "box", x = 5, y = 5, width = 30, height = 30 }
/// "#).unwrap();
///
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains(r#"id="box""#));
/// ```
pub fn render_scene(source: &str) -> Result<String, RenderError> {
    render_scene_with_config(source, &RenderConfig::default())
}

/// Render a TOML scene to bare `<svg>` markup with custom configuration
pub fn render_scene_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let scene = Scene::from_str(source)?;
    Ok(scene.document().to_svg_string(config))
}
