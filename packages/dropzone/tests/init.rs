use dropzone::bridge::ChannelBridge;
use dropzone::dom::memory::MemoryDocument;
use dropzone::{Config, DragDropEvent, Error, Position};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn unavailable_bridge_fails_startup() {
    let document = MemoryDocument::new();
    let list = document.insert("#drop-list");
    let bridge = ChannelBridge::unavailable("no webview");

    let err = dropzone::init(&document, &bridge, &Config::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::BridgeUnavailable(_)));
    assert!(list.children().is_empty());
}

#[tokio::test]
async fn bridge_is_subscribed_once() {
    let document = MemoryDocument::new();
    let (events, bridge) = ChannelBridge::new();
    events.close();

    dropzone::init(&document, &bridge, &Config::default())
        .await
        .unwrap();

    let second = dropzone::init(&document, &bridge, &Config::default()).await;
    assert!(matches!(second, Err(Error::BridgeUnavailable(_))));
}

#[tokio::test]
async fn events_apply_in_host_order() {
    let document = MemoryDocument::new();
    let zone = document.insert("#dropzone");
    let list = document.insert("#drop-list");
    let (events, bridge) = ChannelBridge::new();
    let cfg = Config::default();

    let host = async {
        events.send(json!({ "type": "over", "position": { "x": 1, "y": 1 } }));
        // let the controller pick it up
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        assert!(zone.has_class("drag-over"));

        events.send(json!({ "type": "drop", "paths": ["x"] }));
        events.send(json!({ "type": "bogus" }));
        events.send(json!({ "type": "drop", "paths": ["y", "z"] }));
        events.send_event(&DragDropEvent::Over {
            position: Position::new(2.0, 2.0),
        });
        events.close();
    };

    let (result, ()) = tokio::join!(
        dropzone::init(&document, &bridge, &cfg),
        host
    );

    result.unwrap();
    assert!(zone.has_class("drag-over"));
    assert_eq!(list.child_texts(), vec!["y", "z"]);
}
