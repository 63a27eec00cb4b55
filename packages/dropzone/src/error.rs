/// Errors that can stop the drop-zone from starting.
///
/// Only initialization can fail. Once the event source is acquired, every event is handled without error: missing
/// elements are skipped and unrecognized payloads are ignored.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host bridge that delivers drag/drop notifications is not available.
    #[error("host bridge unavailable: {0}")]
    BridgeUnavailable(String),

    /// A JavaScript exception was thrown while talking to the host bridge.
    #[error("javascript error: {0}")]
    Js(String),

    /// The native window could not be created.
    #[error("failed to create window: {0}")]
    Window(String),

    /// The native webview could not be created.
    #[error("failed to create webview: {0}")]
    Webview(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
