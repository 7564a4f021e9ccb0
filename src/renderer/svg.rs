//! SVG serialisation of rendered icon trees

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::node::{SvgElement, SvgNode};

use super::SvgConfig;

/// Media type prefix of an SVG data URI
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Build SVG markup incrementally
struct SvgBuilder<'a> {
    config: &'a SvgConfig,
    out: String,
    indent: usize,
}

impl<'a> SvgBuilder<'a> {
    fn new(config: &'a SvgConfig) -> Self {
        Self {
            config,
            out: String::new(),
            indent: 0,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn open_tag(&mut self, element: &SvgElement) {
        self.out.push('<');
        self.out.push_str(&element.tag);
        for (name, value) in element.attrs.iter() {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_xml(&value.to_string()));
            self.out.push('"');
        }
    }

    fn add_element(&mut self, element: &SvgElement) {
        let indent = self.indent_str();
        self.out.push_str(&indent);
        self.open_tag(element);

        if element.children.is_empty() {
            if self.config.self_closing {
                self.out.push_str("/>");
            } else {
                self.out.push_str("></");
                self.out.push_str(&element.tag);
                self.out.push('>');
            }
            self.out.push_str(self.newline());
            return;
        }

        // Text-only elements (e.g. <title>) stay on one line
        if element.children.iter().all(|c| matches!(c, SvgNode::Text(_))) {
            self.out.push('>');
            for child in &element.children {
                if let SvgNode::Text(text) = child {
                    self.out.push_str(&escape_xml(text));
                }
            }
        } else {
            self.out.push('>');
            self.out.push_str(self.newline());
            self.indent += 1;
            for child in &element.children {
                match child {
                    SvgNode::Element(el) => self.add_element(el),
                    SvgNode::Text(text) => {
                        let indent = self.indent_str();
                        self.out.push_str(&indent);
                        self.out.push_str(&escape_xml(text));
                        self.out.push_str(self.newline());
                    }
                }
            }
            self.indent -= 1;
            let indent = self.indent_str();
            self.out.push_str(&indent);
        }
        self.out.push_str("</");
        self.out.push_str(&element.tag);
        self.out.push('>');
        self.out.push_str(self.newline());
    }

    fn build(mut self, root: &SvgElement) -> String {
        if self.config.xml_declaration {
            self.out
                .push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            self.out.push_str(self.newline());
        }
        self.add_element(root);
        // No trailing newline after the root element
        while self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

/// Serialise an SVG element tree to markup
pub fn render_svg(root: &SvgElement, config: &SvgConfig) -> String {
    SvgBuilder::new(config).build(root)
}

/// Wrap SVG markup in a base64 `data:` URI
///
/// Suitable for `<img src>` or CSS `url()` values.
pub fn to_data_uri(svg: &str) -> String {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + svg.len() * 4 / 3 + 4);
    uri.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(svg.as_bytes(), &mut uri);
    uri
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Attributes;

    fn sample() -> SvgElement {
        SvgElement::new("svg", Attributes::new().with("viewBox", "0 0 24 24"))
            .with_child(SvgNode::element(
                "path",
                Attributes::new().with("d", "M20 6 9 17l-5-5"),
            ))
            .with_child(
                SvgElement::new("title", Attributes::new()).with_child(SvgNode::text("a & b")),
            )
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_render_compact() {
        let svg = render_svg(&sample(), &SvgConfig::default());
        assert_eq!(
            svg,
            r#"<svg viewBox="0 0 24 24"><path d="M20 6 9 17l-5-5"/><title>a &amp; b</title></svg>"#
        );
    }

    #[test]
    fn test_render_pretty() {
        let svg = render_svg(&sample(), &SvgConfig::new().with_pretty_print(true));
        let expected = "<svg viewBox=\"0 0 24 24\">\n  <path d=\"M20 6 9 17l-5-5\"/>\n  <title>a &amp; b</title>\n</svg>";
        assert_eq!(svg, expected);
    }

    #[test]
    fn test_render_without_self_closing() {
        let svg = render_svg(&sample(), &SvgConfig::new().with_self_closing(false));
        assert!(svg.contains(r#"<path d="M20 6 9 17l-5-5"></path>"#));
    }

    #[test]
    fn test_xml_declaration() {
        let svg = render_svg(&sample(), &SvgConfig::new().with_xml_declaration(true));
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><svg"#));
    }

    #[test]
    fn test_attribute_values_escaped() {
        let el = SvgElement::new("svg", Attributes::new().with("aria-label", r#"<"x">"#));
        let svg = render_svg(&el, &SvgConfig::default());
        assert_eq!(svg, r#"<svg aria-label="&lt;&quot;x&quot;&gt;"/>"#);
    }

    #[test]
    fn test_data_uri() {
        let uri = to_data_uri("<svg/>");
        assert_eq!(uri, "data:image/svg+xml;base64,PHN2Zy8+");
    }
}
