//! Yew adapters over the presentation model.

pub mod badge;
pub mod dom;
pub mod icon;

pub use badge::{Badge, BadgeProps};
pub use dom::DomClassList;
pub use icon::{BadgeIcon, BadgeIconProps};
