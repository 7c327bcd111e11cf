//! Configuration for markup rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Whether to put each child on its own indented line
    pub pretty_print: bool,

    /// Spaces per nesting level when pretty printing
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent_width: 2,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with pretty printing switched on
    pub fn pretty() -> Self {
        Self::default().with_pretty_print(true)
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}
