//! Built-in icons
//!
//! Every icon is a `pub static` named after its PascalCase name in
//! SCREAMING_SNAKE_CASE (`SquarePen` is [`SQUARE_PEN`]). Deprecated and
//! alternate names are re-exports of the same static, so [`EDIT`] and
//! [`SQUARE_PEN`] are one value.
//!
//! ```
//! use lucide_svg::icons::{CHECK, EDIT, SQUARE_PEN};
//! use lucide_svg::IconProps;
//!
//! assert!(std::ptr::eq(&*EDIT, &*SQUARE_PEN));
//! let svg = CHECK.to_svg(&IconProps::default());
//! assert!(svg.starts_with("<svg"));
//! ```

mod catalog;
mod registry;

pub use catalog::*;
pub use registry::{IconRegistry, RegistryError};

use crate::icon::Icon;

/// Iterate over every built-in icon in catalog order
pub fn all() -> impl Iterator<Item = &'static Icon> {
    ALL.iter().map(|&icon| -> &'static Icon { icon })
}

/// Built-in aliases as `(alias, canonical name)`
pub fn aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    ALIASES.iter().copied()
}

/// Look up a built-in icon by name or alias
pub fn lookup(name: &str) -> Option<&'static Icon> {
    IconRegistry::builtin().get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_unique() {
        let names: HashSet<&str> = all().map(Icon::name).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_catalog_icons_have_nodes() {
        for icon in all() {
            assert!(!icon.node().is_empty(), "{} has no nodes", icon.name());
        }
    }

    #[test]
    fn test_aliases_name_existing_icons() {
        for (alias, canonical) in aliases() {
            assert!(std::ptr::eq(lookup(alias).unwrap(), lookup(canonical).unwrap()), "{}", alias);
        }
    }

    #[test]
    fn test_lookup() {
        assert!(std::ptr::eq(lookup("check").unwrap(), &*CHECK));
        assert!(std::ptr::eq(lookup("Loader2").unwrap(), &*LOADER_CIRCLE));
        assert!(lookup("Unknown").is_none());
    }

    #[test]
    fn test_check_node() {
        assert_eq!(
            CHECK.node().elements()[0].attrs.get("d").map(|d| d.to_string()).as_deref(),
            Some("M20 6 9 17l-5-5")
        );
    }
}
