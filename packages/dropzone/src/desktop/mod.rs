//! The drop-zone as a native window.
//!
//! A `tao` window hosts a `wry` webview showing the drop-zone page. The webview's native drag/drop notifications feed
//! a [`ChannelBridge`](crate::bridge::ChannelBridge) and the page is updated by scripts.

mod app;
mod document;
mod waker;

pub use document::{ScriptDocument, ScriptElement};

use crate::{Config, Result};

const DEFAULT_INDEX: &str = include_str!("./index.html");

/// Configuration for the native drop-zone window.
///
/// # Example
///
/// ```rust, ignore
/// dropzone::desktop::launch(
///     DesktopConfig::new()
///         .with_title("Inbox")
///         .with_inner_size(640.0, 480.0),
/// )?;
/// ```
#[derive(Debug, Clone)]
pub struct DesktopConfig {
    pub(crate) config: Config,
    pub(crate) title: String,
    pub(crate) inner_size: (f64, f64),
    pub(crate) custom_index: Option<String>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            config: Config::default(),
            title: "Drop files".to_string(),
            inner_size: (800.0, 600.0),
            custom_index: None,
        }
    }
}

impl DesktopConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selectors and class names used on the page.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial size of the window, in logical pixels.
    pub fn with_inner_size(mut self, width: f64, height: f64) -> Self {
        self.inner_size = (width, height);
        self
    }

    /// Replace the built-in page.
    ///
    /// The page must contain the elements named by the [`Config`] selectors, and style the marker class itself.
    pub fn with_custom_index(mut self, html: impl Into<String>) -> Self {
        self.custom_index = Some(html.into());
        self
    }

    pub(crate) fn index_html(&self) -> String {
        self.custom_index
            .clone()
            .unwrap_or_else(|| DEFAULT_INDEX.to_string())
    }
}

/// Open the drop-zone window and run it until it is closed.
///
/// This blocks the calling thread, which must be the main thread. It only returns if the window or webview could
/// not be created.
pub fn launch(cfg: DesktopConfig) -> Result<()> {
    app::launch(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_page_has_default_targets() {
        let html = DesktopConfig::new().index_html();
        assert!(html.contains(r#"id="dropzone""#));
        assert!(html.contains(r#"id="drop-list""#));
        assert!(html.contains(".drag-over"));
    }

    #[test]
    fn custom_page_replaces_built_in() {
        let cfg = DesktopConfig::new().with_custom_index("<ul id=\"drop-list\"></ul>");
        assert_eq!(cfg.index_html(), "<ul id=\"drop-list\"></ul>");
    }
}
