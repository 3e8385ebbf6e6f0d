//! Typed configuration model and class-name helpers.
//!
//! # Design
//! - Pure data carrier; every field has a shipped default so a host document
//!   only names what it overrides.
//! - Class names are composed BEM-style from the base class and separators.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::ConfigResult;

/// Presentation settings a host hands to every badge it renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeConfig {
    /// Root class registered on the badge when it mounts.
    pub base_class: String,
    /// Separator between the base class and a modifier.
    pub modifier_separator: String,
    /// Separator between the base class and a child element name.
    pub element_separator: String,
    /// Size tokens the host stylesheet understands.
    pub size_tokens: Vec<String>,
    /// Icon sprite settings.
    pub icon: IconConfig,
}

/// Where icon sprites live and how icon markup is classed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Directory that holds the `<category>-sprite/svg/symbols.svg` sheets.
    pub sprite_root: String,
    /// Category used when an icon name has no `category:` prefix.
    pub default_category: String,
    /// Class for the element wrapping the `svg`.
    pub container_class: String,
    /// Classes applied to the `svg` itself.
    pub svg_classes: Vec<String>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            base_class: defaults::BASE_CLASS.to_string(),
            modifier_separator: defaults::MODIFIER_SEPARATOR.to_string(),
            element_separator: defaults::ELEMENT_SEPARATOR.to_string(),
            size_tokens: defaults::SIZE_TOKENS.iter().map(ToString::to_string).collect(),
            icon: IconConfig::default(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sprite_root: defaults::ICON_SPRITE_ROOT.to_string(),
            default_category: defaults::ICON_DEFAULT_CATEGORY.to_string(),
            container_class: defaults::ICON_CONTAINER_CLASS.to_string(),
            svg_classes: defaults::ICON_SVG_CLASSES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl BadgeConfig {
    /// Parse a JSON document and validate the result.
    ///
    /// Fields missing from the document keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Parse`] for malformed JSON or unknown
    /// fields and [`crate::ConfigError::InvalidField`] when validation fails.
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        tracing::debug!(
            base_class = %config.base_class,
            sizes = config.size_tokens.len(),
            "loaded badge configuration"
        );
        Ok(config)
    }

    /// Block modifier class, e.g. `slds-badge_large`.
    #[must_use]
    pub fn modifier_class(&self, modifier: &str) -> String {
        format!("{}{}{modifier}", self.base_class, self.modifier_separator)
    }

    /// Child element class, e.g. `slds-badge__icon`.
    #[must_use]
    pub fn element_class(&self, element: &str) -> String {
        format!("{}{}{element}", self.base_class, self.element_separator)
    }

    /// Child element modifier class, e.g. `slds-badge__icon_left`.
    #[must_use]
    pub fn element_modifier_class(&self, element: &str, modifier: &str) -> String {
        format!(
            "{}{}{modifier}",
            self.element_class(element),
            self.modifier_separator
        )
    }

    /// Whether `token` belongs to the host's size vocabulary.
    #[must_use]
    pub fn is_known_size(&self, token: &str) -> bool {
        self.size_tokens.iter().any(|known| known == token)
    }
}
