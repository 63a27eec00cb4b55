use serde_json::Value;

use crate::dom::{Document, DropElement};
use crate::event::DragDropEvent;
use crate::Config;

/// Maps drag/drop notifications onto the drop-zone highlight and the rendered path list.
///
/// The controller keeps no state of its own. Whether a drag is hovering lives in the drop-zone's class list, and the
/// dropped paths live in the list element's children. Either element may be missing, in which case the effects that
/// would touch it are skipped.
pub struct DragDropController<E> {
    dropzone: Option<E>,
    list: Option<E>,
    marker_class: String,
    item_tag: String,
}

impl<E: DropElement> DragDropController<E> {
    /// Look up the drop-zone and list elements in `document`.
    pub fn new<D>(document: &D, cfg: &Config) -> Self
    where
        D: Document<Element = E>,
    {
        let dropzone = document.query_selector(&cfg.dropzone);
        let list = document.query_selector(&cfg.list);

        if dropzone.is_none() {
            tracing::warn!("drop-zone element {:?} not found", cfg.dropzone);
        }
        if list.is_none() {
            tracing::warn!("drop list element {:?} not found", cfg.list);
        }

        Self::from_parts(dropzone, list, cfg)
    }

    /// Build a controller from element handles that were already resolved.
    pub fn from_parts(dropzone: Option<E>, list: Option<E>, cfg: &Config) -> Self {
        Self {
            dropzone,
            list,
            marker_class: cfg.marker_class.clone(),
            item_tag: cfg.item_tag.clone(),
        }
    }

    pub fn dropzone(&self) -> Option<&E> {
        self.dropzone.as_ref()
    }

    pub fn list(&self) -> Option<&E> {
        self.list.as_ref()
    }

    /// Decode a raw host payload and apply it. Payloads that do not decode are ignored.
    pub fn handle_payload(&self, payload: Value) {
        if let Some(event) = DragDropEvent::from_payload(payload) {
            self.handle_event(&event);
        }
    }

    /// Apply a single notification.
    pub fn handle_event(&self, event: &DragDropEvent) {
        tracing::trace!("drag/drop event: {}", event.kind());

        match event {
            DragDropEvent::Over { .. } => {
                if let Some(dropzone) = &self.dropzone {
                    dropzone.add_class(&self.marker_class);
                }
            }

            DragDropEvent::Leave | DragDropEvent::Cancel => self.clear_marker(),

            DragDropEvent::Drop { paths, .. } => {
                self.clear_marker();

                let Some(list) = &self.list else {
                    return;
                };

                list.clear_children();
                for path in paths {
                    list.append_text_child(&self.item_tag, path);
                }
            }
        }
    }

    fn clear_marker(&self) {
        if let Some(dropzone) = &self.dropzone {
            dropzone.remove_class(&self.marker_class);
        }
    }
}
