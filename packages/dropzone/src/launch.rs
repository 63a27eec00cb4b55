//! Startup of the drop-zone: wiring a document to a host bridge.

use crate::bridge::HostBridge;
use crate::controller::DragDropController;
use crate::dom::Document;
use crate::{Config, Result};

/// Subscribe the drop-zone to `bridge` and process its notifications until the host stops sending.
///
/// The elements are looked up before anything else so a missing element is reported once at startup. Acquiring the
/// event source is the only point where this future suspends before the first event; a failure there is returned
/// as-is and nothing is subscribed. After that, each payload is applied synchronously before the next one is read.
pub async fn init<D, B>(document: &D, bridge: &B, cfg: &Config) -> Result<()>
where
    D: Document,
    B: HostBridge + ?Sized,
{
    let controller = DragDropController::new(document, cfg);

    tracing::debug!("acquiring drag/drop event source");
    let mut source = bridge.acquire().await?;
    tracing::debug!("drag/drop event source acquired");

    while let Some(payload) = source.next().await {
        controller.handle_payload(payload);
    }

    tracing::debug!("drag/drop event source closed");
    Ok(())
}
