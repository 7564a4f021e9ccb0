//! Configuration for SVG output

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgConfig {
    /// Whether to emit an XML declaration before the root element
    pub xml_declaration: bool,

    /// Whether to format output with one element per line and indentation
    pub pretty_print: bool,

    /// Whether childless elements are written as `<tag/>` rather than
    /// `<tag></tag>`
    pub self_closing: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            xml_declaration: false,
            pretty_print: false,
            self_closing: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit an XML declaration
    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set whether empty elements self-close
    pub fn with_self_closing(mut self, self_closing: bool) -> Self {
        self.self_closing = self_closing;
        self
    }
}
