use futures_channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::{Document, DropElement};
use crate::{Error, Result};

/// The browser document of the current window.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn get() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::Js("no document on the current window".to_string()))?;

        Ok(Self { document })
    }

    /// Resolve once the document has been parsed.
    pub async fn ready(&self) {
        if self.document.ready_state() != "loading" {
            return;
        }

        let (tx, rx) = oneshot::channel();
        let on_ready = Closure::once(move || {
            _ = tx.send(());
        });

        if self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .is_err()
        {
            return;
        }

        _ = rx.await;
    }
}

impl Document for WebDocument {
    type Element = web_sys::Element;

    fn query_selector(&self, selector: &str) -> Option<web_sys::Element> {
        // an invalid selector throws, which we treat like a missing element
        self.document.query_selector(selector).ok().flatten()
    }
}

impl DropElement for web_sys::Element {
    fn add_class(&self, class: &str) {
        _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        _ = self.class_list().remove_1(class);
    }

    fn clear_children(&self) {
        self.set_inner_html("");
    }

    fn append_text_child(&self, tag: &str, text: &str) {
        let Some(document) = self.owner_document() else {
            return;
        };

        if let Ok(child) = document.create_element(tag) {
            child.set_text_content(Some(text));
            _ = self.append_child(&child);
        }
    }
}
