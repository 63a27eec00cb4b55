//! The rendering surface the controller writes to.
//!
//! Renderers implement [`Document`] for their page and [`DropElement`] for the element handles it returns. The web
//! renderer wraps `web_sys`, the desktop renderer forwards scripts to a webview, and [`memory`] keeps everything in
//! process.

pub mod memory;

/// A page that can be searched for elements.
pub trait Document {
    type Element: DropElement;

    /// Find the first element matching `selector`. Absence is not an error.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
}

/// The element operations the drop-zone needs.
///
/// All operations are infallible: they either apply or silently do nothing.
pub trait DropElement {
    /// Add `class` to the class list. Adding a class that is already present is a no-op.
    fn add_class(&self, class: &str);

    /// Remove `class` from the class list. Removing a class that is not present is a no-op.
    fn remove_class(&self, class: &str);

    /// Remove every child node.
    fn clear_children(&self);

    /// Append a new `tag` element whose only content is the text `text`.
    fn append_text_child(&self, tag: &str, text: &str);
}
