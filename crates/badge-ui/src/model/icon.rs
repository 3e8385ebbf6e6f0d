//! Icon reference parsing and sprite addressing.

use badge_config::IconConfig;

/// Side of the label the icon sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconPosition {
    /// Before the label.
    #[default]
    Left,
    /// After the label.
    Right,
}

impl IconPosition {
    /// Class suffix for the position.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A parsed `icon_name`: `category:name` or a bare `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconRef {
    category: String,
    name: String,
}

impl IconRef {
    /// Parse an icon identifier.
    ///
    /// `category:name` splits only when both halves are non-empty; anything else
    /// is taken verbatim as a name in `default_category`. Only an empty string
    /// means no icon.
    #[must_use]
    pub fn parse(raw: &str, default_category: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let (category, name) = match raw.split_once(':') {
            Some((category, name)) if !category.is_empty() && !name.is_empty() => {
                (category, name)
            }
            _ => (default_category, raw),
        };
        Some(Self {
            category: category.to_string(),
            name: name.to_string(),
        })
    }

    /// Sprite category, e.g. `utility`.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Symbol name inside the sprite, e.g. `star`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sprite reference for the `use` element.
    #[must_use]
    pub fn href(&self, icon: &IconConfig) -> String {
        format!(
            "{}/{}-sprite/svg/symbols.svg#{}",
            icon.sprite_root.trim_end_matches('/'),
            self.category,
            self.name
        )
    }
}
