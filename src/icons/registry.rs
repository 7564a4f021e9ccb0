//! Icon registry for name-based lookup

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use super::{ALIASES, ALL};
use crate::icon::Icon;
use crate::naming::{edit_distance, lookup_key, strip_export_affixes};

/// Maximum number of names offered when a lookup fails
const MAX_SUGGESTIONS: usize = 5;

/// Errors that can occur during registry operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// No icon or alias with this name
    #[error("icon not found: {name}{}", format_suggestions(.suggestions))]
    NotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// Name already taken by an icon or alias
    #[error("duplicate icon name: {name}")]
    Duplicate { name: String },

    /// Alias points at a name that is not registered
    #[error("alias {alias} refers to unknown icon {target}")]
    UnknownAliasTarget { alias: String, target: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

static BUILTIN: LazyLock<IconRegistry> = LazyLock::new(|| {
    let mut registry = IconRegistry::new();
    for &icon in ALL {
        let icon: &'static Icon = icon;
        if let Err(err) = registry.insert(Cow::Borrowed(icon)) {
            tracing::warn!(%err, "skipping built-in icon");
        }
    }
    for &(alias, target) in ALIASES {
        if let Err(err) = registry.alias(alias, target) {
            tracing::warn!(%err, "skipping built-in alias");
        }
    }
    tracing::debug!(
        icons = registry.len(),
        aliases = registry.aliases.len(),
        "built-in icon registry ready"
    );
    registry
});

/// Registry mapping icon names and aliases to icons
///
/// Lookups ignore case and `-`/`_` separators, so `SquarePen`,
/// `square-pen` and `square_pen` resolve to the same icon. Aliases resolve
/// to the very same icon value as their canonical name.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: Vec<Cow<'static, Icon>>,
    aliases: Vec<(String, usize)>,
    /// Lookup key -> index into `icons`
    index: HashMap<String, usize>,
}

impl IconRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared registry of built-in icons and aliases
    pub fn builtin() -> &'static IconRegistry {
        &BUILTIN
    }

    /// Create a registry seeded with the built-in icons, ready for additions
    pub fn with_builtins() -> Self {
        Self::builtin().clone()
    }

    /// Register an icon under its own name
    pub fn register(&mut self, icon: Icon) -> Result<(), RegistryError> {
        self.insert(Cow::Owned(icon))
    }

    fn insert(&mut self, icon: Cow<'static, Icon>) -> Result<(), RegistryError> {
        let key = lookup_key(icon.name());
        if self.index.contains_key(&key) {
            return Err(RegistryError::Duplicate {
                name: icon.name().to_string(),
            });
        }
        self.index.insert(key, self.icons.len());
        self.icons.push(icon);
        Ok(())
    }

    /// Bind an additional name to a registered icon
    pub fn alias(&mut self, alias: &str, target: &str) -> Result<(), RegistryError> {
        let idx = *self
            .index
            .get(&lookup_key(target))
            .ok_or_else(|| RegistryError::UnknownAliasTarget {
                alias: alias.to_string(),
                target: target.to_string(),
            })?;

        let key = lookup_key(alias);
        if self.index.contains_key(&key) {
            return Err(RegistryError::Duplicate {
                name: alias.to_string(),
            });
        }
        self.index.insert(key, idx);
        self.aliases.push((alias.to_string(), idx));
        Ok(())
    }

    /// Get an icon by name or alias
    ///
    /// Also accepts the `Lucide<Name>` and `<Name>Icon` export variants in
    /// any case or separator style (`lucide-check`, `check_icon`).
    pub fn get(&self, name: &str) -> Option<&Icon> {
        let key = lookup_key(name);
        self.index
            .get(&key)
            .or_else(|| strip_export_affixes(&key).and_then(|stripped| self.index.get(stripped)))
            .map(|&idx| &*self.icons[idx])
    }

    /// Get an icon by name, with suggestions on failure
    pub fn resolve(&self, name: &str) -> Result<&Icon, RegistryError> {
        self.get(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
            suggestions: self.suggest(name),
        })
    }

    /// Check if a name or alias is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Canonical icon names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.iter().map(|icon| icon.name())
    }

    /// Aliases as `(alias, canonical name)`, in registration order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, idx)| (alias.as_str(), self.icons[*idx].name()))
    }

    /// Registered icons, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.iter().map(|icon| &**icon)
    }

    /// Number of distinct icons (aliases not counted)
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Names close to `name`, nearest first
    pub fn suggest(&self, name: &str) -> Vec<String> {
        let query = lookup_key(name);
        if query.is_empty() {
            return Vec::new();
        }
        let max_distance = (query.len() / 4).max(1);

        let mut candidates: Vec<(usize, &str)> = self
            .names()
            .chain(self.aliases.iter().map(|(alias, _)| alias.as_str()))
            .filter_map(|candidate| {
                let key = lookup_key(candidate);
                let dist = edit_distance(&key, &query);
                if dist <= max_distance {
                    Some((dist, candidate))
                } else if key.starts_with(&query) {
                    Some((max_distance + 1, candidate))
                } else {
                    None
                }
            })
            .collect();

        candidates.sort();
        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::create_icon;
    use crate::icons::{CHECK, EDIT, HOUSE, SQUARE_PEN};
    use crate::node::IconNode;

    fn dot() -> Icon {
        Icon::from_markup("Dot", r#"<circle cx="12" cy="12" r="1"/>"#).unwrap()
    }

    #[test]
    fn test_builtin_contains_every_icon_and_alias() {
        let registry = IconRegistry::builtin();
        assert_eq!(registry.len(), ALL.len());
        assert_eq!(registry.aliases().count(), ALIASES.len());
        for (alias, canonical) in ALIASES {
            assert_eq!(registry.get(alias).map(Icon::name), Some(*canonical));
        }
    }

    #[test]
    fn test_alias_resolves_to_same_value() {
        let registry = IconRegistry::builtin();
        let by_alias = registry.get("Edit").unwrap();
        let by_name = registry.get("SquarePen").unwrap();
        assert!(std::ptr::eq(by_alias, by_name));
        assert!(std::ptr::eq(by_alias, &*SQUARE_PEN));
        assert!(std::ptr::eq(&*EDIT, &*SQUARE_PEN));
    }

    #[test]
    fn test_lookup_variants() {
        let registry = IconRegistry::builtin();
        for name in [
            "SquarePen",
            "square-pen",
            "square_pen",
            "LucideSquarePen",
            "SquarePenIcon",
            "lucide-square-pen",
            "lucide_square_pen",
            "square-pen-icon",
            "lucide-edit",
        ] {
            assert_eq!(registry.get(name).map(Icon::name), Some("SquarePen"), "{}", name);
        }
        assert_eq!(registry.get("home").map(Icon::name), Some(HOUSE.name()));
        assert!(registry.get("NoSuchIcon").is_none());
    }

    #[test]
    fn test_not_found_suggestions() {
        let err = IconRegistry::builtin().resolve("Chek").unwrap_err();
        match err {
            RegistryError::NotFound { name, suggestions } => {
                assert_eq!(name, "Chek");
                assert_eq!(suggestions.first().map(String::as_str), Some("Check"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_not_found_message() {
        let err = RegistryError::NotFound {
            name: "Chek".to_string(),
            suggestions: vec!["Check".to_string()],
        };
        assert_eq!(err.to_string(), "icon not found: Chek (did you mean Check?)");
    }

    #[test]
    fn test_register_custom_icon() {
        let mut registry = IconRegistry::with_builtins();
        registry.register(dot()).unwrap();
        assert_eq!(registry.len(), ALL.len() + 1);
        assert!(registry.contains("dot"));
        // The shared registry is unaffected
        assert!(!IconRegistry::builtin().contains("Dot"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = IconRegistry::with_builtins();
        let err = registry
            .register(create_icon("check", IconNode::default()))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::Duplicate {
                name: "check".to_string()
            }
        );
        assert_eq!(
            registry.alias("Edit", "Check").unwrap_err(),
            RegistryError::Duplicate {
                name: "Edit".to_string()
            }
        );
    }

    #[test]
    fn test_alias_unknown_target() {
        let mut registry = IconRegistry::new();
        assert_eq!(
            registry.alias("Tick", "Check").unwrap_err(),
            RegistryError::UnknownAliasTarget {
                alias: "Tick".to_string(),
                target: "Check".to_string(),
            }
        );
    }

    #[test]
    fn test_custom_alias() {
        let mut registry = IconRegistry::with_builtins();
        registry.alias("Tick", "Check").unwrap();
        assert!(std::ptr::eq(registry.get("Tick").unwrap(), &*CHECK));
        assert!(registry.aliases().any(|pair| pair == ("Tick", "Check")));
    }
}
