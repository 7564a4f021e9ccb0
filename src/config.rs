//! TOML configuration: default props, custom icons and aliases
//!
//! ```toml
//! [defaults]
//! size = 32
//! color = "#0f172a"
//! stroke_width = 1.5
//!
//! [aliases]
//! Pencil2 = "SquarePen"
//!
//! [icons.Logo]
//! markup = '<circle cx="12" cy="12" r="10"/><path d="M8 12h8"/>'
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::MarkupError;
use crate::icon::Icon;
use crate::icons::{IconRegistry, RegistryError};
use crate::props::IconProps;

/// Errors that can occur when loading or applying a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid markup for icon {icon}: {message}")]
    Markup { icon: String, message: String },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Prop defaults applied before per-render options
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub size: Option<f64>,
    pub color: Option<String>,
    pub stroke_width: Option<f64>,
    pub absolute_stroke_width: Option<bool>,
    pub class: Option<String>,
}

impl Defaults {
    /// Props with these defaults applied over the built-in ones
    pub fn props(&self) -> IconProps {
        let mut props = IconProps::default();
        if let Some(size) = self.size {
            props.size = size;
        }
        if let Some(color) = &self.color {
            props.color = color.clone();
        }
        if let Some(stroke_width) = self.stroke_width {
            props.stroke_width = stroke_width;
        }
        if let Some(absolute) = self.absolute_stroke_width {
            props.absolute_stroke_width = absolute;
        }
        props.class = self.class.clone();
        props
    }
}

/// A loaded configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub defaults: Defaults,
    /// Custom icons, parsed and sorted by name
    pub icons: Vec<Icon>,
    /// `(alias, target)` pairs, sorted by alias
    pub aliases: Vec<(String, String)>,
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    defaults: Defaults,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
    #[serde(default)]
    icons: BTreeMap<String, TomlIcon>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlIcon {
    markup: String,
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load config from a TOML string
    ///
    /// Icon markup is parsed here, so a config that loads has only valid
    /// icons.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        let mut icons = Vec::with_capacity(parsed.icons.len());
        for (name, icon) in parsed.icons {
            match Icon::from_markup(name.as_str(), &icon.markup) {
                Ok(icon) => icons.push(icon),
                Err(errors) => {
                    return Err(ConfigError::Markup {
                        message: format_markup_errors(&errors, &icon.markup, &name),
                        icon: name,
                    })
                }
            }
        }

        Ok(Config {
            defaults: parsed.defaults,
            icons,
            aliases: parsed.aliases.into_iter().collect(),
        })
    }

    /// Props seeded from the `[defaults]` table
    pub fn props(&self) -> IconProps {
        self.defaults.props()
    }

    /// Built-in registry extended with this config's icons and aliases
    ///
    /// Custom icons are registered before aliases, so an alias may name
    /// either kind.
    pub fn registry(&self) -> Result<IconRegistry, ConfigError> {
        let mut registry = IconRegistry::with_builtins();
        for icon in &self.icons {
            registry.register(icon.clone())?;
            tracing::debug!(icon = icon.name(), nodes = icon.node().len(), "registered custom icon");
        }
        for (alias, target) in &self.aliases {
            registry.alias(alias, target)?;
        }
        Ok(registry)
    }
}

fn format_markup_errors(errors: &[MarkupError], source: &str, name: &str) -> String {
    errors
        .iter()
        .map(|e| e.format(source, name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::SQUARE_PEN;

    const SAMPLE: &str = r##"
[defaults]
size = 32
color = "#0f172a"
stroke_width = 1.5
absolute_stroke_width = true
class = "icon"

[aliases]
Pencil2 = "SquarePen"
Brand = "Logo"

[icons.Logo]
markup = '<circle cx="12" cy="12" r="10"/><path d="M8 12h8"/>'
"##;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_str(SAMPLE).expect("Should parse");
        assert_eq!(config.defaults.size, Some(32.0));
        assert_eq!(config.defaults.color.as_deref(), Some("#0f172a"));
        assert_eq!(config.icons.len(), 1);
        assert_eq!(config.icons[0].name(), "Logo");
        assert_eq!(config.icons[0].node().len(), 2);
        assert_eq!(
            config.aliases,
            vec![
                ("Brand".to_string(), "Logo".to_string()),
                ("Pencil2".to_string(), "SquarePen".to_string()),
            ]
        );
    }

    #[test]
    fn test_defaults_seed_props() {
        let props = Config::from_str(SAMPLE).unwrap().props();
        assert_eq!(props.size, 32.0);
        assert_eq!(props.color, "#0f172a");
        assert_eq!(props.stroke_width, 1.5);
        assert!(props.absolute_stroke_width);
        assert_eq!(props.class.as_deref(), Some("icon"));
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").expect("Should parse");
        assert_eq!(config.props(), IconProps::default());
        assert!(config.icons.is_empty());
    }

    #[test]
    fn test_registry_includes_custom_icons_and_aliases() {
        let registry = Config::from_str(SAMPLE).unwrap().registry().unwrap();
        assert_eq!(registry.get("brand").map(Icon::name), Some("Logo"));
        assert!(std::ptr::eq(registry.get("Pencil2").unwrap(), &*SQUARE_PEN));
    }

    #[test]
    fn test_invalid_markup() {
        let err = Config::from_str("[icons.Bad]\nmarkup = '<path d=/>'\n").unwrap_err();
        match err {
            ConfigError::Markup { icon, message } => {
                assert_eq!(icon, "Bad");
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_custom_icon_cannot_shadow_builtin() {
        let config = Config::from_str("[icons.Check]\nmarkup = '<path d=\"M1 1\"/>'\n").unwrap();
        assert!(matches!(
            config.registry(),
            Err(ConfigError::Registry(RegistryError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_unknown_alias_target() {
        let config = Config::from_str("[aliases]\nFoo = \"Nope\"\n").unwrap();
        assert!(matches!(
            config.registry(),
            Err(ConfigError::Registry(RegistryError::UnknownAliasTarget { .. }))
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            Config::from_str("[defaults]\nsise = 3\n"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(Config::from_str("this is not valid toml {{{{").is_err());
    }
}
