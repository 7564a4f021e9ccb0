//! Icon node data model
//!
//! An icon is described by an ordered list of SVG child elements (paths,
//! circles, lines, rects, polygons, polylines), each with its attribute map.
//! The same types describe the rendered `<svg>` tree.

use std::fmt;

/// An attribute value: either text or a number
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            // f64 Display already drops a trailing ".0" (8.0 -> "8")
            AttrValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Number(n as f64)
    }
}

/// Ordered attribute map
///
/// Setting an attribute that already exists replaces the value in place;
/// new attributes are appended. This keeps output order stable when later
/// layers override earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value with the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`Attributes::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Layer another map on top of this one
    pub fn extend(&mut self, other: &Attributes) {
        for (name, value) in other.iter() {
            self.set(name, value.clone());
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in output order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Attribute names in output order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// One SVG child element of an icon
#[derive(Debug, Clone, PartialEq)]
pub struct NodeElement {
    pub tag: String,
    pub attrs: Attributes,
}

impl NodeElement {
    pub fn new(tag: impl Into<String>, attrs: Attributes) -> Self {
        Self {
            tag: tag.into(),
            attrs,
        }
    }
}

/// The static markup of one icon: its `<svg>` children in authored order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconNode {
    elements: Vec<NodeElement>,
}

impl IconNode {
    pub fn new(elements: Vec<NodeElement>) -> Self {
        Self { elements }
    }

    /// Build a node list from borrowed `(tag, [(name, value)])` pairs
    ///
    /// This is the shape the built-in icon table is written in.
    pub fn from_pairs(pairs: &[(&str, &[(&str, &str)])]) -> Self {
        let elements = pairs
            .iter()
            .map(|(tag, attrs)| NodeElement::new(*tag, attrs.iter().copied().collect()))
            .collect();
        Self { elements }
    }

    pub fn elements(&self) -> &[NodeElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeElement> {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a IconNode {
    type Item = &'a NodeElement;
    type IntoIter = std::slice::Iter<'a, NodeElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// A node of a rendered SVG tree
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

impl SvgNode {
    /// Create a leaf element node
    pub fn element(tag: impl Into<String>, attrs: Attributes) -> Self {
        SvgNode::Element(SvgElement::new(tag, attrs))
    }

    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        SvgNode::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&SvgElement> {
        match self {
            SvgNode::Element(el) => Some(el),
            SvgNode::Text(_) => None,
        }
    }
}

impl From<SvgElement> for SvgNode {
    fn from(el: SvgElement) -> Self {
        SvgNode::Element(el)
    }
}

impl From<&NodeElement> for SvgNode {
    fn from(node: &NodeElement) -> Self {
        SvgNode::Element(SvgElement::new(node.tag.clone(), node.attrs.clone()))
    }
}

/// A rendered SVG element with its children
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    pub tag: String,
    pub attrs: Attributes,
    pub children: Vec<SvgNode>,
}

impl SvgElement {
    pub fn new(tag: impl Into<String>, attrs: Attributes) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            children: Vec::new(),
        }
    }

    /// Append a child node
    pub fn with_child(mut self, child: impl Into<SvgNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Shorthand for an attribute value rendered as a string
    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs.get(name).map(|v| v.to_string())
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(SvgNode::as_element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_trailing_zero() {
        assert_eq!(AttrValue::Number(8.0).to_string(), "8");
        assert_eq!(AttrValue::Number(1.5).to_string(), "1.5");
        assert_eq!(AttrValue::from("round").to_string(), "round");
    }

    #[test]
    fn test_attributes_override_keeps_position() {
        let mut attrs = Attributes::new()
            .with("width", 24u32)
            .with("height", 24u32)
            .with("fill", "none");
        attrs.set("width", 48u32);
        attrs.set("id", "x");

        let names: Vec<_> = attrs.names().collect();
        assert_eq!(names, vec!["width", "height", "fill", "id"]);
        assert_eq!(attrs.get("width"), Some(&AttrValue::Number(48.0)));
    }

    #[test]
    fn test_attributes_remove() {
        let mut attrs = Attributes::new().with("a", "1").with("b", "2");
        assert_eq!(attrs.remove("a"), Some(AttrValue::from("1")));
        assert_eq!(attrs.remove("a"), None);
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_icon_node_from_pairs() {
        let node = IconNode::from_pairs(&[
            ("path", &[("d", "M20 6 9 17l-5-5")]),
            ("circle", &[("cx", "12"), ("cy", "12"), ("r", "10")]),
        ]);
        assert_eq!(node.len(), 2);
        assert_eq!(node.elements()[0].tag, "path");
        assert_eq!(
            node.elements()[1].attrs.names().collect::<Vec<_>>(),
            vec!["cx", "cy", "r"]
        );
    }
}
