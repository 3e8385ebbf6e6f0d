//! Size variant resolution.

use badge_config::BadgeConfig;

/// Size token taken verbatim from the `size` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeToken {
    token: String,
    known: bool,
}

impl SizeToken {
    /// Resolve the raw attribute value.
    ///
    /// Only an absent or empty value yields `None` (host default sizing). Any
    /// other value is kept verbatim; tokens outside the host vocabulary are left
    /// for the stylesheet to handle.
    #[must_use]
    pub fn resolve(raw: Option<&str>, config: &BadgeConfig) -> Option<Self> {
        let token = raw.filter(|raw| !raw.is_empty())?.to_string();
        let known = config.is_known_size(&token);
        if !known {
            tracing::debug!(size = %token, "size token outside host vocabulary");
        }
        Some(Self { token, known })
    }

    /// The token as the host supplied it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Whether the host vocabulary lists this token.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.known
    }

    /// Modifier class for the badge root, e.g. `slds-badge_large`.
    #[must_use]
    pub fn modifier_class(&self, config: &BadgeConfig) -> String {
        config.modifier_class(&self.token)
    }
}
