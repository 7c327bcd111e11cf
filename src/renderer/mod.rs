//! Serialization of element trees
//!
//! This module turns an [`Element`](crate::element::Element) tree into a
//! markup string and wraps `<svg>` roots into XML or HTML documents.

pub mod config;
pub mod document;
pub mod markup;

pub use config::RenderConfig;
pub use document::{Document, OutputFormat};
pub use markup::{render_element, MarkupWriter};
