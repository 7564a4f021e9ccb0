//! The icon factory and render-time attribute merging

use crate::markup::{parse_markup, MarkupError};
use crate::naming::to_kebab_case;
use crate::node::{IconNode, SvgElement, SvgNode};
use crate::props::{default_attributes, IconProps};
use crate::renderer::{render_svg, SvgConfig};

/// Base class carried by every rendered icon
pub const BASE_CLASS: &str = "lucide";

/// A named icon bound to its node list
///
/// Icons are stateless: rendering the same props always produces the same
/// tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    name: String,
    node: IconNode,
}

/// Create an icon from a display name and its node list
///
/// The name should be PascalCase (`SquarePen`); it drives the derived
/// `lucide-<kebab-name>` class.
///
/// ```
/// use lucide_svg::{create_icon, IconNode, IconProps};
///
/// let check = create_icon("Check", IconNode::from_pairs(&[("path", &[("d", "M20 6 9 17l-5-5")])]));
/// let svg = check.to_svg(&IconProps::default());
/// assert!(svg.contains(r#"class="lucide lucide-check""#));
/// ```
pub fn create_icon(name: impl Into<String>, node: IconNode) -> Icon {
    Icon {
        name: name.into(),
        node,
    }
}

impl Icon {
    /// Parse inner SVG markup and bind it to a name
    pub fn from_markup(name: impl Into<String>, markup: &str) -> Result<Self, Vec<MarkupError>> {
        let node = parse_markup(markup)?;
        Ok(create_icon(name, node))
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kebab-case name, as used in the derived class and file names
    pub fn kebab_name(&self) -> String {
        to_kebab_case(&self.name)
    }

    /// The icon-specific class, `lucide-<kebab-name>`
    pub fn class_name(&self) -> String {
        format!("{}-{}", BASE_CLASS, self.kebab_name())
    }

    pub fn node(&self) -> &IconNode {
        &self.node
    }

    /// Render the icon to an SVG element tree
    ///
    /// The returned value is the root `<svg>` element. Attributes are
    /// layered in order: fixed defaults, size and color, the effective
    /// stroke width, the merged class, then the caller's pass-through
    /// attributes. Children are the icon nodes followed by the caller's
    /// children.
    pub fn render(&self, props: &IconProps) -> SvgElement {
        let mut attrs = default_attributes();
        attrs.set("width", props.size);
        attrs.set("height", props.size);
        attrs.set("stroke", props.color.as_str());
        attrs.set("stroke-width", props.effective_stroke_width());

        let class_name = self.class_name();
        attrs.set(
            "class",
            merge_classes([Some(BASE_CLASS), Some(class_name.as_str()), props.class.as_deref()]),
        );
        attrs.extend(&props.attrs);

        let mut root = SvgElement::new("svg", attrs);
        root.children.reserve(self.node.len() + props.children.len());
        root.children.extend(self.node.iter().map(SvgNode::from));
        root.children.extend(props.children.iter().cloned());

        tracing::trace!(
            icon = %self.name,
            size = props.size,
            children = root.children.len(),
            "rendered icon"
        );
        root
    }

    /// Render straight to SVG markup with the default output config
    pub fn to_svg(&self, props: &IconProps) -> String {
        render_svg(&self.render(props), &SvgConfig::default())
    }

    /// Render to SVG markup with a custom output config
    pub fn to_svg_with_config(&self, props: &IconProps, config: &SvgConfig) -> String {
        render_svg(&self.render(props), config)
    }
}

/// Merge class lists into one class attribute value
///
/// Entries are split on whitespace; empty entries are skipped and repeated
/// tokens keep their first position.
///
/// ```
/// use lucide_svg::merge_classes;
///
/// let merged = merge_classes([Some("lucide"), None, Some(" foo  lucide "), Some("foo bar")]);
/// assert_eq!(merged, "lucide foo bar");
/// ```
pub fn merge_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut tokens: Vec<&str> = Vec::new();
    for token in classes.into_iter().flatten().flat_map(str::split_whitespace) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{AttrValue, Attributes};

    fn check() -> Icon {
        create_icon(
            "Check",
            IconNode::from_pairs(&[("path", &[("d", "M20 6 9 17l-5-5")])]),
        )
    }

    #[test]
    fn test_render_defaults() {
        let svg = check().render(&IconProps::default());
        assert_eq!(svg.tag, "svg");
        assert_eq!(svg.attr("viewBox").as_deref(), Some("0 0 24 24"));
        assert_eq!(svg.attr("width").as_deref(), Some("24"));
        assert_eq!(svg.attr("stroke").as_deref(), Some("currentColor"));
        assert_eq!(svg.attr("stroke-width").as_deref(), Some("2"));
        assert_eq!(svg.attr("class").as_deref(), Some("lucide lucide-check"));
        assert_eq!(svg.children.len(), 1);
    }

    #[test]
    fn test_render_size_and_color() {
        let svg = check().render(&IconProps::new().with_size(48.0).with_color("red"));
        assert_eq!(svg.attr("width").as_deref(), Some("48"));
        assert_eq!(svg.attr("height").as_deref(), Some("48"));
        assert_eq!(svg.attr("stroke").as_deref(), Some("red"));
    }

    #[test]
    fn test_render_absolute_stroke_width() {
        let props = IconProps::new()
            .with_stroke_width(4.0)
            .with_absolute_stroke_width(true)
            .with_size(12.0);
        let svg = check().render(&props);
        assert_eq!(svg.attrs.get("stroke-width"), Some(&AttrValue::Number(8.0)));
    }

    #[test]
    fn test_pass_through_attrs_override_everything() {
        let props = IconProps::new()
            .with_size(48.0)
            .with_attr("width", "100%")
            .with_attr("stroke-width", 1.0)
            .with_attr("aria-label", "done");
        let svg = check().render(&props);
        assert_eq!(svg.attr("width").as_deref(), Some("100%"));
        assert_eq!(svg.attr("height").as_deref(), Some("48"));
        assert_eq!(svg.attr("stroke-width").as_deref(), Some("1"));
        // New attributes land after the defaults
        assert_eq!(svg.attrs.names().last(), Some("aria-label"));
    }

    #[test]
    fn test_pass_through_class_replaces_merged_class() {
        let svg = check().render(&IconProps::new().with_attr("class", "custom"));
        assert_eq!(svg.attr("class").as_deref(), Some("custom"));
    }

    #[test]
    fn test_class_dedup() {
        let svg = check().render(&IconProps::new().with_class("foo foo lucide-check"));
        assert_eq!(svg.attr("class").as_deref(), Some("lucide lucide-check foo"));
    }

    #[test]
    fn test_class_computation_is_idempotent() {
        let icon = check();
        let props = IconProps::new().with_class("foo");
        assert_eq!(icon.render(&props), icon.render(&props));
    }

    #[test]
    fn test_children_follow_icon_nodes() {
        let title = SvgElement::new("title", Attributes::new()).with_child(SvgNode::text("Done"));
        let svg = check().render(&IconProps::new().with_child(title));
        assert_eq!(svg.children.len(), 2);
        assert_eq!(svg.child_elements().next().map(|e| e.tag.as_str()), Some("path"));
        assert_eq!(svg.child_elements().nth(1).map(|e| e.tag.as_str()), Some("title"));
    }

    #[test]
    fn test_merge_classes_skips_empty() {
        assert_eq!(merge_classes([Some(""), Some("  "), None]), "");
        assert_eq!(merge_classes([Some("a"), Some(""), Some("b")]), "a b");
    }

    #[test]
    fn test_class_name() {
        let icon = create_icon("SquarePen", IconNode::default());
        assert_eq!(icon.class_name(), "lucide-square-pen");
        assert_eq!(icon.kebab_name(), "square-pen");
    }

    #[test]
    fn test_from_markup() {
        let icon = Icon::from_markup("Dot", r#"<circle cx="12" cy="12" r="1"/>"#).unwrap();
        assert_eq!(icon.node().len(), 1);
        assert_eq!(icon.node().elements()[0].tag, "circle");
    }
}
