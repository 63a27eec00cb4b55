//! The drop-zone inside a Tauri webview, compiled to wasm.
//!
//! The page must expose the Tauri API on `window.__TAURI__` (`app.withGlobalTauri` in the Tauri config).

mod bridge;
mod document;

pub use bridge::TauriBridge;
pub use document::WebDocument;

use crate::{Config, Result};

/// Start the drop-zone on the current page.
///
/// Runs [`run`] on the browser's event loop. Failures are logged since there is nobody left to return them to.
pub fn launch(cfg: Config) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = run(cfg).await {
            tracing::error!("drop-zone failed to start: {err}");
        }
    });
}

/// Wait for the DOM, then subscribe to the webview's drag/drop events for the lifetime of the page.
pub async fn run(cfg: Config) -> Result<()> {
    let document = WebDocument::get()?;
    document.ready().await;
    crate::init(&document, &TauriBridge, &cfg).await
}
