use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use tao::dpi::LogicalSize;
use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::window::{Window, WindowBuilder};
use wry::{WebView, WebViewBuilder};

use super::document::ScriptDocument;
use super::waker::tao_waker;
use super::DesktopConfig;
use crate::bridge::{ChannelBridge, EventSender};
use crate::event::{DragDropEvent, Position};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub(crate) enum UserEvent {
    /// Something the drop-zone future waits on became ready.
    Poll,
}

/// Translate a native webview notification into a drop-zone event.
///
/// wry reports the first hover as `Enter`, which highlights just like `Over`. wry has no cancel notification.
pub(crate) fn convert_event(event: wry::DragDropEvent) -> Option<DragDropEvent> {
    let position = |(x, y): (i32, i32)| Position::new(x as f64, y as f64);

    match event {
        wry::DragDropEvent::Enter { position: pos, .. } | wry::DragDropEvent::Over { position: pos } => {
            Some(DragDropEvent::Over {
                position: position(pos),
            })
        }
        wry::DragDropEvent::Drop {
            paths,
            position: pos,
        } => Some(DragDropEvent::Drop {
            paths: paths
                .iter()
                // non-UTF-8 segments are replaced, the list only displays paths
                .map(|path| path.to_string_lossy().into_owned())
                .collect(),
            position: position(pos),
        }),
        wry::DragDropEvent::Leave => Some(DragDropEvent::Leave),
        _ => None,
    }
}

fn build_webview(window: &Window, html: String, events: EventSender) -> Result<WebView> {
    let builder = WebViewBuilder::new()
        .with_html(html)
        .with_drag_drop_handler(move |event| {
            if let Some(event) = convert_event(event) {
                events.send_event(&event);
            }
            // keep the webview from opening the dropped file
            true
        });

    #[cfg(any(
        target_os = "windows",
        target_os = "macos",
        target_os = "ios",
        target_os = "android"
    ))]
    let webview = builder.build(window);

    #[cfg(not(any(
        target_os = "windows",
        target_os = "macos",
        target_os = "ios",
        target_os = "android"
    )))]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| Error::Webview("window has no gtk container".to_string()))?;
        builder.build_gtk(vbox)
    };

    webview.map_err(|err| Error::Webview(err.to_string()))
}

/// Open the window and run the event loop. Only returns early if the window or webview cannot be created.
pub(crate) fn launch(cfg: DesktopConfig) -> Result<()> {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let (width, height) = cfg.inner_size;
    let window = WindowBuilder::new()
        .with_title(cfg.title.clone())
        .with_inner_size(LogicalSize::new(width, height))
        .build(&event_loop)
        .map_err(|err| Error::Window(err.to_string()))?;

    let (events, bridge) = ChannelBridge::new();
    let webview = Rc::new(build_webview(&window, cfg.index_html(), events)?);
    let document = ScriptDocument::new(webview.clone());

    let config = cfg.config;
    let mut dropzone: Option<Pin<Box<dyn Future<Output = Result<()>>>>> =
        Some(Box::pin(async move {
            crate::init(&document, &bridge, &config).await
        }));

    let waker = tao_waker(&proxy);

    event_loop.run(move |event, _, control_flow| {
        // the window and webview live as long as the loop
        let _ = (&window, &webview);
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) | Event::UserEvent(UserEvent::Poll) => {
                let Some(fut) = dropzone.as_mut() else {
                    return;
                };

                let mut cx = Context::from_waker(&waker);
                if let Poll::Ready(result) = fut.as_mut().poll(&mut cx) {
                    dropzone = None;
                    match result {
                        Ok(()) => tracing::debug!("drop-zone finished"),
                        Err(err) => {
                            tracing::error!("drop-zone failed to start: {err}");
                            *control_flow = ControlFlow::Exit;
                        }
                    }
                }
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                window_id,
                ..
            } if window_id == window.id() => *control_flow = ControlFlow::Exit,

            _ => {}
        }
    })
}
