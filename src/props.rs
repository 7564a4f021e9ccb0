//! Icon props: the caller-side contract of a rendered icon

use crate::node::{AttrValue, Attributes, SvgNode};

/// SVG namespace URI set on every rendered icon
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Edge length of the icon grid every built-in icon is drawn on
pub const ICON_GRID: f64 = 24.0;

/// Fixed SVG attributes applied beneath every render
pub fn default_attributes() -> Attributes {
    Attributes::new()
        .with("xmlns", SVG_NAMESPACE)
        .with("width", ICON_GRID)
        .with("height", ICON_GRID)
        .with("viewBox", "0 0 24 24")
        .with("fill", "none")
        .with("stroke", "currentColor")
        .with("stroke-width", 2.0)
        .with("stroke-linecap", "round")
        .with("stroke-linejoin", "round")
}

/// Per-render options for an icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconProps {
    /// Stroke color
    pub color: String,

    /// Width and height in user units
    pub size: f64,

    /// Stroke width on the 24x24 grid
    pub stroke_width: f64,

    /// Keep the visual stroke width constant across sizes
    pub absolute_stroke_width: bool,

    /// Extra CSS classes
    pub class: Option<String>,

    /// Pass-through attributes, applied last
    pub attrs: Attributes,

    /// Extra children appended after the icon's own nodes
    pub children: Vec<SvgNode>,
}

impl Default for IconProps {
    fn default() -> Self {
        Self {
            color: "currentColor".to_string(),
            size: ICON_GRID,
            stroke_width: 2.0,
            absolute_stroke_width: false,
            class: None,
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }
}

impl IconProps {
    /// Create props with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the rendered width and height
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the stroke width
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Scale the stroke width so it stays constant regardless of size
    pub fn with_absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = absolute;
        self
    }

    /// Set the caller CSS class(es)
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Add a pass-through attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Append one child
    pub fn with_child(mut self, child: impl Into<SvgNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append any number of children
    ///
    /// Accepts anything iterable, so `None`, `Some(node)` and a `Vec` all
    /// work.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SvgNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Effective stroke width after the absolute-width adjustment
    ///
    /// With `absolute_stroke_width`, the stroke is scaled by `24 / size`. A
    /// size that would make the result non-finite leaves it unchanged.
    pub fn effective_stroke_width(&self) -> f64 {
        if !self.absolute_stroke_width {
            return self.stroke_width;
        }
        let scaled = self.stroke_width * ICON_GRID / self.size;
        if scaled.is_finite() {
            scaled
        } else {
            self.stroke_width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_props() {
        let props = IconProps::default();
        assert_eq!(props.color, "currentColor");
        assert_eq!(props.size, 24.0);
        assert_eq!(props.stroke_width, 2.0);
        assert!(!props.absolute_stroke_width);
        assert!(props.class.is_none());
        assert!(props.children.is_empty());
    }

    #[test]
    fn test_default_attributes_order() {
        let names: Vec<_> = default_attributes().names().map(String::from).collect();
        assert_eq!(
            names,
            vec![
                "xmlns",
                "width",
                "height",
                "viewBox",
                "fill",
                "stroke",
                "stroke-width",
                "stroke-linecap",
                "stroke-linejoin"
            ]
        );
    }

    #[test]
    fn test_absolute_stroke_width() {
        let props = IconProps::new()
            .with_stroke_width(4.0)
            .with_size(12.0)
            .with_absolute_stroke_width(true);
        assert_eq!(props.effective_stroke_width(), 8.0);
    }

    #[test]
    fn test_relative_stroke_width_ignores_size() {
        let props = IconProps::new().with_stroke_width(4.0).with_size(12.0);
        assert_eq!(props.effective_stroke_width(), 4.0);
    }

    #[test]
    fn test_absolute_stroke_width_zero_size() {
        let props = IconProps::new()
            .with_size(0.0)
            .with_absolute_stroke_width(true);
        assert_eq!(props.effective_stroke_width(), 2.0);
    }

    #[test]
    fn test_children_normalisation() {
        let none: Option<SvgNode> = None;
        assert!(IconProps::new().with_children(none).children.is_empty());
        assert_eq!(
            IconProps::new()
                .with_children(Some(SvgNode::text("a")))
                .children
                .len(),
            1
        );
        assert_eq!(
            IconProps::new()
                .with_children(vec![SvgNode::text("a"), SvgNode::text("b")])
                .children
                .len(),
            2
        );
    }
}
