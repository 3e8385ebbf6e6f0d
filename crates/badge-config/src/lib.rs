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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Host-defined configuration for the badge component.
//!
//! Layout: `model.rs` (typed configuration and class-name helpers), `defaults.rs`
//! (shipped design tokens), `validate.rs` (field checks), `error.rs` (typed errors).

mod defaults;
pub mod error;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{BadgeConfig, IconConfig};
