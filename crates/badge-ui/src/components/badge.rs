//! The badge component.

use badge_config::BadgeConfig;
use gloo::console;
use web_sys::Element;
use yew::prelude::*;

use super::dom::DomClassList;
use super::icon::BadgeIcon;
use crate::model::{AttachOutcome, BadgeAttrs, BadgeLifecycle, IconPosition, render};

/// Attributes a host sets on a [`Badge`].
#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    /// Visible text.
    #[prop_or_default]
    pub label: AttrValue,
    /// Icon identifier, `category:name` or a bare name.
    #[prop_or_default]
    pub icon_name: Option<AttrValue>,
    /// Size token from the host vocabulary.
    #[prop_or_default]
    pub size: Option<AttrValue>,
    /// Side of the label the icon sits on.
    #[prop_or_default]
    pub icon_position: IconPosition,
    /// Extra classes appended to the root.
    #[prop_or_default]
    pub class: Classes,
}

/// Label with an optional icon and size variant.
///
/// Registers the configured base class on its root element once, right after the
/// first render. Reads [`BadgeConfig`] from context and falls back to the defaults.
#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let config = use_context::<BadgeConfig>().unwrap_or_default();
    let root = use_node_ref();
    let lifecycle = use_mut_ref(BadgeLifecycle::new);

    {
        let root = root.clone();
        let lifecycle = lifecycle.clone();
        let base_class = config.base_class.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(element) = root.cast::<Element>() {
                    let mut classes = DomClassList::new(element.class_list());
                    let outcome = lifecycle.borrow_mut().attach(&mut classes, &base_class);
                    if outcome == AttachOutcome::Skipped {
                        console::warn!("badge base class is blank; rendering unstyled");
                    }
                }
                || ()
            },
            (),
        );
    }

    let extra = props.class.to_string();
    let attrs = BadgeAttrs {
        label: Some(&*props.label),
        icon_name: props.icon_name.as_deref(),
        size: props.size.as_deref(),
        icon_position: props.icon_position,
        class: Some(extra.as_str()),
    };
    let state = lifecycle.borrow().state();
    let view = render(&attrs, &config, state);

    let (leading, trailing) = match view.icon {
        Some(icon) if icon.position == IconPosition::Right => {
            (html! {}, html! { <BadgeIcon view={icon} /> })
        }
        Some(icon) => (html! { <BadgeIcon view={icon} /> }, html! {}),
        None => (html! {}, html! {}),
    };

    html! {
        <span ref={root} class={view.root_classes}>
            { leading }
            { view.text }
            { trailing }
        </span>
    }
}
