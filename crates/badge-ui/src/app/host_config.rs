//! Host configuration read from the page.

use anyhow::{Context, Result};
use badge_config::BadgeConfig;
use gloo::console;
use gloo::utils::document;

/// Id of the `<script type="application/json">` element holding overrides.
pub(crate) const CONFIG_ELEMENT_ID: &str = "badge-config";

pub(crate) fn load_or_default() -> BadgeConfig {
    match load() {
        Ok(Some(config)) => config,
        Ok(None) => BadgeConfig::default(),
        Err(err) => {
            console::warn!("badge configuration ignored", format!("{err:#}"));
            BadgeConfig::default()
        }
    }
}

fn load() -> Result<Option<BadgeConfig>> {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }
    BadgeConfig::from_json_str(&raw)
        .map(Some)
        .with_context(|| format!("parsing #{CONFIG_ELEMENT_ID}"))
}
