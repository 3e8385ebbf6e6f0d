//! Shipped design tokens used when the host supplies no overrides.
//!
//! # Design
//! - Values follow the Lightning Design System badge blueprint.
//! - Kept in one place so the model defaults and the tests agree.

/// Root class marking an element as a badge.
pub(crate) const BASE_CLASS: &str = "slds-badge";
/// Separator between a block and its modifier (`slds-badge_large`).
pub(crate) const MODIFIER_SEPARATOR: &str = "_";
/// Separator between a block and a child element (`slds-badge__icon`).
pub(crate) const ELEMENT_SEPARATOR: &str = "__";
/// Size vocabulary the shipped stylesheet knows about.
pub(crate) const SIZE_TOKENS: [&str; 3] = ["small", "medium", "large"];
/// Directory holding the `<category>-sprite` SVG sheets.
pub(crate) const ICON_SPRITE_ROOT: &str = "/assets/icons";
/// Category assumed for icon names without a `category:` prefix.
pub(crate) const ICON_DEFAULT_CATEGORY: &str = "utility";
/// Class applied to the element wrapping the icon's `svg`.
pub(crate) const ICON_CONTAINER_CLASS: &str = "slds-icon_container";
/// Classes applied to the icon's `svg`.
pub(crate) const ICON_SVG_CLASSES: [&str; 3] =
    ["slds-icon", "slds-icon_xx-small", "slds-icon-text-default"];
