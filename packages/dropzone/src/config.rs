use serde::Deserialize;

/// Configuration for the drop-zone controller.
///
/// Selects which elements the controller drives and what it writes into them.
///
/// # Example
///
/// ```rust
/// let cfg = dropzone::Config::new()
///     .with_dropzone("#files")
///     .with_marker_class("hovering");
/// assert_eq!(cfg.dropzone(), "#files");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub(crate) dropzone: String,
    pub(crate) list: String,
    pub(crate) marker_class: String,
    pub(crate) item_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dropzone: "#dropzone".to_string(),
            list: "#drop-list".to_string(),
            marker_class: "drag-over".to_string(),
            item_tag: "li".to_string(),
        }
    }
}

impl Config {
    /// Create a config with the default selectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selector of the element that is highlighted while a drag hovers.
    pub fn with_dropzone(mut self, selector: impl Into<String>) -> Self {
        self.dropzone = selector.into();
        self
    }

    /// Set the selector of the element that receives one child per dropped path.
    pub fn with_list(mut self, selector: impl Into<String>) -> Self {
        self.list = selector.into();
        self
    }

    /// Set the class toggled on the drop-zone while a drag hovers over it.
    pub fn with_marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }

    /// Set the tag name of the leaf elements created for each path.
    pub fn with_item_tag(mut self, tag: impl Into<String>) -> Self {
        self.item_tag = tag.into();
        self
    }

    pub fn dropzone(&self) -> &str {
        &self.dropzone
    }

    pub fn list(&self) -> &str {
        &self.list
    }

    pub fn marker_class(&self) -> &str {
        &self.marker_class
    }

    pub fn item_tag(&self) -> &str {
        &self.item_tag
    }
}
