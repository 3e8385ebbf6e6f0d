//! Pure presentation model for the badge.
//!
//! Everything here compiles for every target so the render rules and the mount
//! lifecycle can be exercised without a browser. The Yew component is a thin
//! adapter over [`render`] and [`BadgeLifecycle`].

pub mod class_list;
pub mod icon;
pub mod lifecycle;
pub mod render;
pub mod size;

pub use class_list::ClassList;
pub use icon::{IconPosition, IconRef};
pub use lifecycle::{AttachOutcome, BadgeLifecycle, MountState};
pub use render::{BadgeAttrs, BadgeView, IconView, render};
pub use size::SizeToken;
