//! Typed object model for SVG tags
//!
//! Elements are created through [`ElementBuilder`], which checks the required
//! attributes of the tag kind before handing out an [`Element`]. Children are
//! attached with [`Element::add_child`], subject to [`TagKind::accepts_child`].

pub mod attributes;
pub mod kind;
pub mod tag;

pub use attributes::Attributes;
pub use kind::{TagKind, SVG_XMLNS};
pub use tag::{Element, ElementBuilder};
