//! Lucide SVG - a library of stroke-based 24x24 SVG icons
//!
//! Each icon is a named list of SVG child elements bound through the
//! [`create_icon`] factory. Rendering merges caller props (size, color,
//! stroke width, classes, pass-through attributes, children) over a fixed
//! set of SVG defaults and yields an [`SvgElement`] tree or SVG markup.
//!
//! # Example
//!
//! ```rust
//! use lucide_svg::icons::CHECK;
//! use lucide_svg::IconProps;
//!
//! let svg = CHECK.to_svg(&IconProps::default());
//! assert_eq!(
//!     svg,
//!     r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-check"><path d="M20 6 9 17l-5-5"/></svg>"#
//! );
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod icon;
pub mod icons;
pub mod markup;
pub mod naming;
pub mod node;
pub mod props;
pub mod renderer;

pub use config::{Config, ConfigError, Defaults};
pub use error::MarkupError;
pub use icon::{create_icon, merge_classes, Icon, BASE_CLASS};
pub use icons::{IconRegistry, RegistryError};
pub use markup::parse_markup;
pub use naming::{to_kebab_case, to_pascal_case};
pub use node::{AttrValue, Attributes, IconNode, NodeElement, SvgElement, SvgNode};
pub use props::{default_attributes, IconProps};
pub use renderer::{render_svg, to_data_uri, SvgConfig};

/// Render a built-in icon by name to SVG markup
///
/// Accepts any name the built-in registry accepts: PascalCase, kebab-case,
/// aliases and the `Lucide`/`Icon` export variants.
///
/// ```rust
/// use lucide_svg::{render_icon, IconProps};
///
/// let svg = render_icon("square-pen", &IconProps::new().with_size(48.0)).unwrap();
/// assert!(svg.contains(r#"width="48""#));
/// assert!(render_icon("nope", &IconProps::default()).is_err());
/// ```
pub fn render_icon(name: &str, props: &IconProps) -> Result<String, RegistryError> {
    let icon = IconRegistry::builtin().resolve(name)?;
    Ok(icon.to_svg(props))
}
