use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use wasm_bindgen::prelude::*;

use crate::bridge::{channel, EventSource, HostBridge};
use crate::{Error, Result};

#[wasm_bindgen]
extern "C" {
    type Webview;

    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "webview"], js_name = getCurrentWebview)]
    fn get_current_webview() -> Result<Webview, JsValue>;

    #[wasm_bindgen(method, catch, js_name = onDragDropEvent)]
    async fn on_drag_drop_event(
        this: &Webview,
        handler: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<JsValue, JsValue>;
}

/// Drag/drop notifications from the current Tauri webview.
///
/// Each notification's `payload` is forwarded untouched; the controller validates it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TauriBridge;

impl HostBridge for TauriBridge {
    fn acquire(&self) -> LocalBoxFuture<'_, Result<EventSource>> {
        async move {
            let webview = get_current_webview()
                .map_err(|err| Error::BridgeUnavailable(format!("{err:?}")))?;

            let (tx, source) = channel();
            let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                let payload = js_sys::Reflect::get(&event, &JsValue::from_str("payload"))
                    .unwrap_or(JsValue::UNDEFINED);

                match serde_wasm_bindgen::from_value(payload) {
                    Ok(payload) => {
                        tx.send(payload);
                    }
                    Err(err) => tracing::trace!("dropping undecodable drag/drop payload: {err}"),
                }
            });

            on_drag_drop_event(&webview, &handler)
                .await
                .map_err(|err| Error::Js(format!("{err:?}")))?;

            // the listener lives as long as the page
            handler.forget();

            Ok(source)
        }
        .boxed_local()
    }
}
