//! Validation helpers for badge configuration documents.

use std::collections::HashSet;

use crate::error::{ConfigError, ConfigResult};
use crate::model::{BadgeConfig, IconConfig};

impl BadgeConfig {
    /// Check every field the renderer composes into markup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        ensure_class_fragment("base_class", &self.base_class)?;
        ensure_class_fragment("modifier_separator", &self.modifier_separator)?;
        ensure_class_fragment("element_separator", &self.element_separator)?;

        let mut seen = HashSet::new();
        for (index, token) in self.size_tokens.iter().enumerate() {
            let field = format!("size_tokens[{index}]");
            ensure_class_fragment(&field, token)?;
            if !seen.insert(token.as_str()) {
                return Err(ConfigError::invalid(
                    field,
                    Some(token.as_str()),
                    "duplicate size token",
                ));
            }
        }

        self.icon.validate()
    }
}

impl IconConfig {
    /// Check the icon settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.sprite_root.trim().is_empty() {
            return Err(ConfigError::invalid(
                "icon.sprite_root",
                Some(self.sprite_root.as_str()),
                "must not be blank",
            ));
        }
        ensure_class_fragment("icon.default_category", &self.default_category)?;
        ensure_class_fragment("icon.container_class", &self.container_class)?;
        for (index, class) in self.svg_classes.iter().enumerate() {
            ensure_class_fragment(&format!("icon.svg_classes[{index}]"), class)?;
        }
        Ok(())
    }
}

/// A class fragment must be a single non-empty token.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when `value` is empty or contains whitespace.
pub fn ensure_class_fragment(field: &str, value: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(ConfigError::invalid(field, Some(value), "must not be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::invalid(
            field,
            Some(value),
            "must not contain whitespace",
        ));
    }
    Ok(())
}
