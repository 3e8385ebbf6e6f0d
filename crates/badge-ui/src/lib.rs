#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Badge component for Yew front-ends.
//!
//! The `model` module holds the render rules and the mount lifecycle and builds on
//! every target. The Yew component and the demo host are wasm-only.

pub mod model;

#[cfg(target_arch = "wasm32")]
pub mod components;

#[cfg(target_arch = "wasm32")]
mod app;

pub use badge_config::{BadgeConfig, ConfigError};
pub use model::{BadgeAttrs, BadgeLifecycle, BadgeView, ClassList, MountState, render};

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
#[cfg(target_arch = "wasm32")]
pub use components::{Badge, BadgeProps};
