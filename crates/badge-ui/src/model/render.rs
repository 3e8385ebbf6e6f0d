//! Declarative render function for the badge.
//!
//! # Design
//! - Recomputed from scratch on every host update; holds no state of its own.
//! - The base class joins the root classes only once the badge is mounted, so a
//!   re-render keeps what the mount hook registered instead of stripping it.

use badge_config::BadgeConfig;
use yew::Classes;

use super::icon::{IconPosition, IconRef};
use super::lifecycle::MountState;
use super::size::SizeToken;

/// Attribute values supplied by the host for one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BadgeAttrs<'a> {
    /// Visible text; absent renders as empty.
    pub label: Option<&'a str>,
    /// Icon identifier (`category:name` or `name`).
    pub icon_name: Option<&'a str>,
    /// Size token from the host vocabulary.
    pub size: Option<&'a str>,
    /// Side of the label the icon sits on.
    pub icon_position: IconPosition,
    /// Extra consumer classes appended to the root.
    pub class: Option<&'a str>,
}

/// Icon portion of a rendered badge.
#[derive(Clone, Debug, PartialEq)]
pub struct IconView {
    /// Classes for the badge's icon slot (`slds-badge__icon slds-badge__icon_left`).
    pub wrapper_classes: Classes,
    /// Classes for the element wrapping the `svg`.
    pub container_classes: Classes,
    /// Classes for the `svg`.
    pub svg_classes: Classes,
    /// Sprite reference for the `use` element.
    pub href: String,
    /// Symbol name, e.g. `star`.
    pub symbol: String,
    /// Side of the label the icon sits on.
    pub position: IconPosition,
}

/// Output of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeView {
    /// Classes for the root element.
    pub root_classes: Classes,
    /// Visible text.
    pub text: String,
    /// Icon, when `icon_name` named one.
    pub icon: Option<IconView>,
    /// Size modifier class, when `size` was given.
    pub size_modifier: Option<String>,
}

impl BadgeView {
    /// Whether the root carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }
}

/// Compute the badge output for `attrs`.
///
/// Never fails: missing values degrade to empty text, no icon, or host default
/// sizing.
#[must_use]
pub fn render(attrs: &BadgeAttrs<'_>, config: &BadgeConfig, state: MountState) -> BadgeView {
    let mut root_classes = Classes::new();
    if state == MountState::Mounted {
        root_classes.push(config.base_class.clone());
    }

    let size_modifier =
        SizeToken::resolve(attrs.size, config).map(|size| size.modifier_class(config));
    if let Some(modifier) = &size_modifier {
        root_classes.push(modifier.clone());
    }
    if let Some(extra) = attrs.class.filter(|extra| !extra.trim().is_empty()) {
        root_classes.push(extra.to_string());
    }

    let icon = attrs
        .icon_name
        .and_then(|raw| IconRef::parse(raw, &config.icon.default_category))
        .map(|icon| icon_view(&icon, attrs.icon_position, config));

    BadgeView {
        root_classes,
        text: attrs.label.unwrap_or_default().to_string(),
        icon,
        size_modifier,
    }
}

fn icon_view(icon: &IconRef, position: IconPosition, config: &BadgeConfig) -> IconView {
    let wrapper_classes: Classes = [
        config.element_class("icon"),
        config.element_modifier_class("icon", position.as_str()),
    ]
    .into_iter()
    .collect();

    IconView {
        wrapper_classes,
        container_classes: Classes::from(config.icon.container_class.clone()),
        svg_classes: config.icon.svg_classes.iter().cloned().collect(),
        href: icon.href(&config.icon),
        symbol: icon.name().to_string(),
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::class_list::ClassList;
    use crate::model::lifecycle::BadgeLifecycle;

    const BASE: &str = "slds-badge";

    /// Host-side stand-in for a root element: the declared `class` attribute is
    /// replaced on every render, the mount hook adds through `ClassList`.
    #[derive(Default)]
    struct HostRoot {
        attr: String,
    }

    impl HostRoot {
        fn commit(&mut self, view: &BadgeView) {
            self.attr = view.root_classes.to_string();
        }

        fn occurrences(&self, class: &str) -> usize {
            self.attr.split_whitespace().filter(|c| *c == class).count()
        }
    }

    impl ClassList for HostRoot {
        fn contains(&self, class: &str) -> bool {
            self.occurrences(class) > 0
        }

        fn add(&mut self, class: &str) {
            if !self.contains(class) {
                if !self.attr.is_empty() {
                    self.attr.push(' ');
                }
                self.attr.push_str(class);
            }
        }
    }

    /// Drives the first render and the mount hook the way the component does.
    struct Harness {
        config: BadgeConfig,
        lifecycle: BadgeLifecycle,
        root: HostRoot,
        last: Option<BadgeView>,
    }

    impl Harness {
        fn mount(attrs: &BadgeAttrs<'_>) -> Self {
            let config = BadgeConfig::default();
            let mut harness = Self {
                config,
                lifecycle: BadgeLifecycle::new(),
                root: HostRoot::default(),
                last: None,
            };
            harness.update(attrs);
            let _ = harness
                .lifecycle
                .attach(&mut harness.root, &harness.config.base_class);
            harness
        }

        fn update(&mut self, attrs: &BadgeAttrs<'_>) {
            let view = render(attrs, &self.config, self.lifecycle.state());
            self.root.commit(&view);
            self.last = Some(view);
        }

        fn view(&self) -> &BadgeView {
            self.last.as_ref().unwrap()
        }
    }

    #[test]
    fn label_only_scenario() {
        let harness = Harness::mount(&BadgeAttrs {
            label: Some("New"),
            ..BadgeAttrs::default()
        });
        let view = harness.view();

        assert_eq!(harness.root.occurrences(BASE), 1);
        assert_eq!(view.text, "New");
        assert!(view.icon.is_none());
        assert!(view.size_modifier.is_none());
    }

    #[test]
    fn icon_and_size_scenario() {
        let attrs = BadgeAttrs {
            label: Some("5"),
            icon_name: Some("star"),
            size: Some("large"),
            ..BadgeAttrs::default()
        };
        let mut harness = Harness::mount(&attrs);
        harness.update(&attrs);
        let view = harness.view();

        assert!(view.has_class(BASE));
        assert!(view.has_class("slds-badge_large"));
        assert_eq!(view.size_modifier.as_deref(), Some("slds-badge_large"));
        assert_eq!(view.text, "5");
        let icon = view.icon.as_ref().unwrap();
        assert_eq!(icon.symbol, "star");
        assert!(icon.href.ends_with("#star"));
        assert_eq!(
            icon.wrapper_classes.to_string(),
            "slds-badge__icon slds-badge__icon_left"
        );
        assert_eq!(harness.root.occurrences(BASE), 1);
    }

    #[test]
    fn label_update_keeps_single_base_class() {
        let mut harness = Harness::mount(&BadgeAttrs {
            label: Some("A"),
            ..BadgeAttrs::default()
        });
        harness.update(&BadgeAttrs {
            label: Some("B"),
            ..BadgeAttrs::default()
        });

        assert_eq!(harness.view().text, "B");
        assert_eq!(harness.root.occurrences(BASE), 1);
    }

    #[test]
    fn base_class_survives_many_re_renders() {
        let mut harness = Harness::mount(&BadgeAttrs::default());
        let sizes = [Some("small"), None, Some("large"), Some(""), Some("medium")];
        for (round, size) in sizes.into_iter().cycle().take(20).enumerate() {
            let label = round.to_string();
            harness.update(&BadgeAttrs {
                label: Some(label.as_str()),
                size,
                ..BadgeAttrs::default()
            });
            let _ = harness.lifecycle.attach(&mut harness.root, BASE);
            assert_eq!(harness.root.occurrences(BASE), 1, "round {round}");
        }
    }

    #[test]
    fn any_label_renders_verbatim() {
        let config = BadgeConfig::default();
        for label in ["", " ", "New", "99+", "<b>&</b>", "ünïcødé"] {
            let view = render(
                &BadgeAttrs {
                    label: Some(label),
                    ..BadgeAttrs::default()
                },
                &config,
                MountState::Mounted,
            );
            assert_eq!(view.text, label);
        }
        let view = render(&BadgeAttrs::default(), &config, MountState::Mounted);
        assert_eq!(view.text, "");
    }

    #[test]
    fn icon_present_iff_icon_name_non_empty() {
        let config = BadgeConfig::default();
        for (icon_name, expected) in [
            (None, false),
            (Some(""), false),
            (Some("star"), true),
            (Some("utility:clock"), true),
        ] {
            let view = render(
                &BadgeAttrs {
                    icon_name,
                    ..BadgeAttrs::default()
                },
                &config,
                MountState::Mounted,
            );
            assert_eq!(view.icon.is_some(), expected, "{icon_name:?}");
        }
    }

    #[test]
    fn size_modifier_iff_size_non_empty() {
        let config = BadgeConfig::default();
        for (size, expected) in [
            (None, None),
            (Some(""), None),
            (Some("small"), Some("slds-badge_small")),
            (Some("jumbo"), Some("slds-badge_jumbo")),
        ] {
            let view = render(
                &BadgeAttrs {
                    size,
                    ..BadgeAttrs::default()
                },
                &config,
                MountState::Mounted,
            );
            assert_eq!(view.size_modifier.as_deref(), expected, "{size:?}");
            let modifiers = view
                .root_classes
                .to_string()
                .split_whitespace()
                .filter(|class| class.starts_with("slds-badge_"))
                .count();
            assert_eq!(modifiers, usize::from(expected.is_some()));
        }
    }

    #[test]
    fn unmounted_render_omits_base_class() {
        let config = BadgeConfig::default();
        let view = render(
            &BadgeAttrs {
                size: Some("small"),
                ..BadgeAttrs::default()
            },
            &config,
            MountState::Unmounted,
        );
        assert!(!view.has_class(BASE));
        assert_eq!(view.root_classes.to_string(), "slds-badge_small");
    }

    #[test]
    fn consumer_classes_follow_badge_classes_without_duplicates() {
        let config = BadgeConfig::default();
        let view = render(
            &BadgeAttrs {
                size: Some("large"),
                class: Some("ml-2 slds-badge"),
                ..BadgeAttrs::default()
            },
            &config,
            MountState::Mounted,
        );
        assert_eq!(
            view.root_classes.to_string(),
            "slds-badge slds-badge_large ml-2"
        );
    }

    #[test]
    fn whitespace_values_count_as_present() {
        let config = BadgeConfig::default();
        let view = render(
            &BadgeAttrs {
                icon_name: Some(" "),
                size: Some(" "),
                ..BadgeAttrs::default()
            },
            &config,
            MountState::Mounted,
        );

        let icon = view.icon.as_ref().unwrap();
        assert_eq!(icon.symbol, " ");
        assert_eq!(view.size_modifier.as_deref(), Some("slds-badge_ "));
        assert!(view.has_class("slds-badge_"));
        assert!(view.has_class(BASE));
    }

    #[test]
    fn right_positioned_icon_uses_right_modifier() {
        let config = BadgeConfig::default();
        let view = render(
            &BadgeAttrs {
                icon_name: Some("utility:clock"),
                icon_position: IconPosition::Right,
                ..BadgeAttrs::default()
            },
            &config,
            MountState::Mounted,
        );
        let icon = view.icon.unwrap();
        assert_eq!(icon.position, IconPosition::Right);
        assert!(icon.wrapper_classes.contains("slds-badge__icon_right"));
        assert_eq!(
            icon.svg_classes.to_string(),
            "slds-icon slds-icon_xx-small slds-icon-text-default"
        );
    }
}
