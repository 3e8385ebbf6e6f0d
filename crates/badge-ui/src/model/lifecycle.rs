//! One-shot mount hook that registers the badge's base class.

use super::class_list::ClassList;

/// Where a badge instance is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MountState {
    /// Created by the host but not yet attached to the render tree.
    #[default]
    Unmounted,
    /// Attached; terminal until the host drops the instance.
    Mounted,
}

/// What [`BadgeLifecycle::attach`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachOutcome {
    /// First attach; the base class is now on the root node.
    Registered,
    /// The hook fired again after mounting; nothing was touched.
    AlreadyMounted,
    /// The configured base class was blank; the badge mounts unstyled.
    Skipped,
}

/// Guards the mount side effect so it runs exactly once per instance.
#[derive(Debug, Default)]
pub struct BadgeLifecycle {
    state: MountState,
}

impl BadgeLifecycle {
    /// Fresh, unmounted lifecycle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: MountState::Unmounted,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> MountState {
        self.state
    }

    /// Whether the mount hook has already run.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        matches!(self.state, MountState::Mounted)
    }

    /// Register `base_class` on `root` the first time the badge attaches.
    ///
    /// Re-entry after mounting leaves `root` untouched. A blank base class still
    /// moves the lifecycle to [`MountState::Mounted`] so the badge renders unstyled
    /// rather than retrying on every pass.
    pub fn attach<L: ClassList + ?Sized>(
        &mut self,
        root: &mut L,
        base_class: &str,
    ) -> AttachOutcome {
        if self.is_mounted() {
            tracing::trace!(base_class, "badge already mounted; skipping registration");
            return AttachOutcome::AlreadyMounted;
        }
        self.state = MountState::Mounted;

        let base_class = base_class.trim();
        if base_class.is_empty() {
            tracing::debug!("badge base class is blank; mounting unstyled");
            return AttachOutcome::Skipped;
        }
        if !root.contains(base_class) {
            root.add(base_class);
        }
        AttachOutcome::Registered
    }
}
