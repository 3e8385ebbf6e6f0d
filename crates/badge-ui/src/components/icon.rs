//! Sprite icon rendered inside a badge.

use yew::prelude::*;
use yew::virtual_dom::VTag;

use crate::model::IconView;

/// Props for [`BadgeIcon`].
#[derive(Properties, PartialEq)]
pub struct BadgeIconProps {
    /// Resolved icon markup data.
    pub view: IconView,
}

/// Sprite icon shown beside the badge label.
#[function_component(BadgeIcon)]
pub fn badge_icon(props: &BadgeIconProps) -> Html {
    let view = &props.view;
    // `use` is a keyword, so the sprite reference is built directly.
    let mut sprite = VTag::new("use");
    sprite.add_attribute("href", view.href.clone());

    html! {
        <span class={view.wrapper_classes.clone()}>
            <span class={view.container_classes.clone()} title={view.symbol.clone()}>
                <svg class={view.svg_classes.clone()} aria-hidden="true">
                    { Html::from(sprite) }
                </svg>
            </span>
        </span>
    }
}
