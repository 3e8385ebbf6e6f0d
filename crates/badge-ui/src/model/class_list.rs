//! Class-list seam shared by the DOM adapter and in-memory rendering.

use yew::Classes;

/// Minimal view of an element's class list.
pub trait ClassList {
    /// Whether `class` is already present.
    fn contains(&self, class: &str) -> bool;

    /// Add `class`. Adding a class that is already present is a no-op.
    fn add(&mut self, class: &str);
}

impl ClassList for Classes {
    fn contains(&self, class: &str) -> bool {
        Self::contains(self, class)
    }

    fn add(&mut self, class: &str) {
        self.push(class.to_string());
    }
}
