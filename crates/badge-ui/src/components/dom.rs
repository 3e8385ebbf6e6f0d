//! `ClassList` backed by a live element's `classList`.

use gloo::console;
use web_sys::DomTokenList;

use crate::model::ClassList;

/// Wraps a `DOMTokenList` so the mount hook can register classes on real nodes.
pub struct DomClassList {
    tokens: DomTokenList,
}

impl DomClassList {
    /// Adapter over `tokens`, usually `element.class_list()`.
    #[must_use]
    pub const fn new(tokens: DomTokenList) -> Self {
        Self { tokens }
    }
}

impl ClassList for DomClassList {
    fn contains(&self, class: &str) -> bool {
        self.tokens.contains(class)
    }

    fn add(&mut self, class: &str) {
        // The badge still renders without its class; log and move on.
        if let Err(err) = self.tokens.add_1(class) {
            console::warn!("badge class registration failed", class, err);
        }
    }
}
