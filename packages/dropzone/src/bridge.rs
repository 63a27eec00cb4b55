//! The host side of the drop-zone: where drag/drop payloads come from.

use std::cell::RefCell;

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::future::LocalBoxFuture;
use futures_util::{FutureExt, StreamExt};
use serde_json::Value;

use crate::event::DragDropEvent;
use crate::{Error, Result};

/// A host that delivers drag/drop notifications.
///
/// Acquiring the event source is the only step that may suspend. Once acquired, payloads arrive one at a time in the
/// order the host emitted them.
pub trait HostBridge {
    /// Obtain the stream of raw drag/drop payloads.
    ///
    /// Fails with [`Error::BridgeUnavailable`] if the host cannot deliver events.
    fn acquire(&self) -> LocalBoxFuture<'_, Result<EventSource>>;
}

/// Create a connected sender and event source.
pub fn channel() -> (EventSender, EventSource) {
    let (tx, rx) = unbounded();
    (EventSender { tx }, EventSource { rx })
}

/// The receiving end of a host's drag/drop payloads.
#[derive(Debug)]
pub struct EventSource {
    rx: UnboundedReceiver<Value>,
}

impl EventSource {
    /// Wait for the next payload. Returns `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<Value> {
        self.rx.next().await
    }
}

/// Feeds payloads into an [`EventSource`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: UnboundedSender<Value>,
}

impl EventSender {
    /// Push a raw payload. Returns `false` if the source has been dropped.
    pub fn send(&self, payload: Value) -> bool {
        self.tx.unbounded_send(payload).is_ok()
    }

    /// Push a typed event, encoded the way a host would.
    pub fn send_event(&self, event: &DragDropEvent) -> bool {
        self.send(event.to_payload())
    }

    /// Stop delivering events. The source yields `None` after draining what was already sent.
    pub fn close(&self) {
        self.tx.close_channel();
    }
}

/// An in-process bridge backed by a channel.
///
/// The source can be acquired exactly once; a second acquisition fails as if the bridge were unavailable.
#[derive(Debug)]
pub struct ChannelBridge {
    source: RefCell<Option<EventSource>>,
    unavailable: Option<String>,
}

impl ChannelBridge {
    /// Create a bridge along with the sender that feeds it.
    pub fn new() -> (EventSender, Self) {
        let (tx, source) = channel();
        let bridge = Self {
            source: RefCell::new(Some(source)),
            unavailable: None,
        };
        (tx, bridge)
    }

    /// Create a bridge whose acquisition always fails with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            source: RefCell::new(None),
            unavailable: Some(reason.into()),
        }
    }
}

impl HostBridge for ChannelBridge {
    fn acquire(&self) -> LocalBoxFuture<'_, Result<EventSource>> {
        async move {
            if let Some(reason) = &self.unavailable {
                return Err(Error::BridgeUnavailable(reason.clone()));
            }

            self.source.borrow_mut().take().ok_or_else(|| {
                Error::BridgeUnavailable("event source already acquired".to_string())
            })
        }
        .boxed_local()
    }
}
