//! Drop-zone
//!
//! Shows the files dropped onto a webview. The host shell reports drag/drop notifications (`over`, `drop`, `cancel`
//! and `leave`); the [`DragDropController`] highlights the drop-zone while a drag hovers and replaces the list of
//! paths on every drop.
//!
//! The page is reached through the [`dom::Document`] trait and notifications through [`bridge::HostBridge`], so the
//! same controller runs:
//! - inside a Tauri webview compiled to wasm (`web` feature, `dropzone::web`)
//! - in a native `tao`/`wry` window (`desktop` feature, `dropzone::desktop`)
//! - against [`dom::memory::MemoryDocument`] with a [`bridge::ChannelBridge`], for tests and headless use
//!
//! ```rust
//! use dropzone::bridge::ChannelBridge;
//! use dropzone::dom::memory::MemoryDocument;
//! use dropzone::{Config, DragDropEvent};
//!
//! let document = MemoryDocument::new();
//! let list = document.insert("#drop-list");
//!
//! let (events, bridge) = ChannelBridge::new();
//! events.send_event(&DragDropEvent::Drop {
//!     paths: vec!["a.txt".into()],
//!     position: Default::default(),
//! });
//! events.close();
//!
//! // a closed channel bridge never suspends
//! use futures_util::FutureExt;
//! let result = dropzone::init(&document, &bridge, &Config::default()).now_or_never();
//! assert!(matches!(result, Some(Ok(()))));
//! assert_eq!(list.child_texts(), vec!["a.txt"]);
//! ```

pub mod bridge;
pub mod dom;
pub mod event;
pub mod logger;

mod config;
mod controller;
mod error;
mod launch;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

#[cfg(feature = "desktop")]
pub mod desktop;

pub use config::Config;
pub use controller::DragDropController;
pub use error::{Error, Result};
pub use event::{DragDropEvent, DragDropKind, Position};
pub use launch::init;
