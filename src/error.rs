//! Error types for building and writing SVG documents

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the element model and document output
#[derive(Debug, Error)]
pub enum SvgError {
    /// A tag was constructed without all of its required attributes
    #[error("<{tag}> is missing required attributes: {}", missing.join(", "))]
    UnsatisfiedAttributes { tag: String, missing: Vec<String> },

    /// A child was added to a parent that does not accept it
    #[error("<{parent}> cannot contain <{child}>")]
    ChildNotPermitted { parent: String, child: String },

    /// Text content was given to a tag that renders self-closing
    #[error("<{tag}> cannot hold text content")]
    TextNotPermitted { tag: String },

    /// A document was built around something other than an `<svg>` element
    #[error("document root must be <svg>, found <{found}>")]
    NotSvgRoot { found: String },

    /// Output path has neither a `.svg` nor an `.html` extension
    #[error("unknown output extension for '{}' (expected .svg or .html)", path.display())]
    UnknownExtension { path: PathBuf },

    /// Writing the output file failed
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SvgError {
    /// Create an unsatisfied attributes error
    pub fn unsatisfied(tag: impl Into<String>, missing: Vec<String>) -> Self {
        Self::UnsatisfiedAttributes {
            tag: tag.into(),
            missing,
        }
    }

    /// Create a child-not-permitted error
    pub fn child_not_permitted(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::ChildNotPermitted {
            parent: parent.into(),
            child: child.into(),
        }
    }

    /// Names of the missing attributes, if this is a validation failure
    pub fn missing_attributes(&self) -> Option<&[String]> {
        match self {
            Self::UnsatisfiedAttributes { missing, .. } => Some(missing),
            _ => None,
        }
    }
}
