//! Parser for inner SVG markup
//!
//! Turns markup such as `<path d="M20 6 9 17l-5-5"/>` into an [`IconNode`].
//! A whole icon file wrapped in `<svg ...>...</svg>` is accepted too; the
//! wrapper's attributes are dropped since they are supplied at render time.

mod grammar;
pub mod lexer;

pub use crate::error::MarkupError;
use crate::node::{Attributes, IconNode, NodeElement};

use grammar::RawElement;

/// Parse inner SVG markup into an icon node list
///
/// ```
/// use lucide_svg::parse_markup;
///
/// let node = parse_markup(r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#).unwrap();
/// assert_eq!(node.len(), 2);
/// ```
pub fn parse_markup(input: &str) -> Result<IconNode, Vec<MarkupError>> {
    let (tokens, errors) = lexer::lex(input);
    if !errors.is_empty() {
        return Err(errors);
    }

    let elements = grammar::parse_elements(tokens, input.len())?;

    let mut errors = Vec::new();
    for element in &elements {
        check_close_tags(element, &mut errors);
    }

    let elements = unwrap_svg_root(elements);
    let mut nodes = Vec::with_capacity(elements.len());
    for element in elements {
        if let Some(child) = element.children.first() {
            errors.push(MarkupError::NestedElement {
                span: child.span.clone(),
                tag: element.tag.clone(),
            });
            continue;
        }
        let attrs: Attributes = element.attrs.into_iter().collect();
        nodes.push(NodeElement::new(element.tag, attrs));
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    if nodes.is_empty() {
        return Err(vec![MarkupError::Empty]);
    }
    Ok(IconNode::new(nodes))
}

/// A single `<svg>` root contributes its children, not itself
fn unwrap_svg_root(mut elements: Vec<RawElement>) -> Vec<RawElement> {
    if elements.len() == 1 && elements[0].tag == "svg" {
        let root = elements.remove(0);
        return root.children;
    }
    elements
}

fn check_close_tags(element: &RawElement, errors: &mut Vec<MarkupError>) {
    if let Some(close) = &element.close_tag {
        if *close != element.tag {
            errors.push(MarkupError::MismatchedTag {
                span: element.span.clone(),
                open: element.tag.clone(),
                close: close.clone(),
            });
        }
    }
    for child in &element.children {
        check_close_tags(child, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::AttrValue;

    #[test]
    fn test_parse_inner_markup() {
        let node = parse_markup(r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#)
            .expect("Should parse");
        assert_eq!(node.len(), 2);
        assert_eq!(
            node.elements()[1].attrs.get("d"),
            Some(&AttrValue::Text("m6 6 12 12".to_string()))
        );
    }

    #[test]
    fn test_parse_full_svg_file() {
        let source = r#"<?xml version="1.0"?>
<!-- check icon -->
<svg
  xmlns="http://www.w3.org/2000/svg"
  width="24"
  height="24"
  viewBox="0 0 24 24"
>
  <path d="M20 6 9 17l-5-5" />
</svg>
"#;
        let node = parse_markup(source).expect("Should parse");
        assert_eq!(node.len(), 1);
        assert_eq!(node.elements()[0].tag, "path");
    }

    #[test]
    fn test_open_close_pair_is_a_leaf() {
        let node = parse_markup(r#"<line x1="1" y1="1" x2="2" y2="2"></line>"#).expect("Should parse");
        assert_eq!(node.elements()[0].attrs.len(), 4);
    }

    #[test]
    fn test_nested_elements_rejected() {
        let errors = parse_markup(r#"<g><path d="M1 1"/></g>"#).unwrap_err();
        assert!(matches!(&errors[0], MarkupError::NestedElement { tag, .. } if tag == "g"));
    }

    #[test]
    fn test_mismatched_close_tag() {
        let errors = parse_markup("<path></line>").unwrap_err();
        assert_eq!(
            errors,
            vec![MarkupError::MismatchedTag {
                span: 0..13,
                open: "path".to_string(),
                close: "line".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_markup() {
        assert_eq!(parse_markup("  <!-- nothing -->  ").unwrap_err(), vec![MarkupError::Empty]);
        assert_eq!(parse_markup("<svg></svg>").unwrap_err(), vec![MarkupError::Empty]);
    }

    #[test]
    fn test_stray_text_is_an_error() {
        let errors = parse_markup(r#"<path d="M1 1"/> 42"#).unwrap_err();
        assert!(matches!(&errors[0], MarkupError::InvalidToken { text, .. } if text == "42"));
    }
}
