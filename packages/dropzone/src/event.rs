//! Drag/drop notifications as delivered by the host shell.
//!
//! The host hands over loosely typed payloads shaped like
//! `{ "type": "drop", "paths": ["a.txt"], "position": { "x": 10, "y": 20 } }`. Decoding checks the `type` tag against
//! the four notifications we understand and discards everything else.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The tag carried in the `type` field of a host payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragDropKind {
    Over,
    Drop,
    Cancel,
    Leave,
}

impl DragDropKind {
    /// Match a raw tag against the closed set of recognized notifications.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "over" => Some(Self::Over),
            "drop" => Some(Self::Drop),
            "cancel" => Some(Self::Cancel),
            "leave" => Some(Self::Leave),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Over => "over",
            Self::Drop => "drop",
            Self::Cancel => "cancel",
            Self::Leave => "leave",
        }
    }
}

impl std::fmt::Display for DragDropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cursor position reported with a notification, in webview coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single drag/drop notification.
///
/// Only [`DragDropEvent::Drop`] carries paths; the host gives no guarantee about the `paths` field of other
/// notifications so it is never read for them.
#[derive(Debug, Clone, PartialEq)]
pub enum DragDropEvent {
    /// A drag is hovering over the webview.
    Over { position: Position },

    /// Files were released over the webview. Paths are kept in the order the host reported them.
    Drop {
        paths: Vec<String>,
        position: Position,
    },

    /// The drag was aborted.
    Cancel,

    /// The drag left the webview.
    Leave,
}

#[derive(Deserialize)]
struct RawPayload {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    paths: Value,
    #[serde(default)]
    position: Value,
}

impl DragDropEvent {
    pub fn kind(&self) -> DragDropKind {
        match self {
            Self::Over { .. } => DragDropKind::Over,
            Self::Drop { .. } => DragDropKind::Drop,
            Self::Cancel => DragDropKind::Cancel,
            Self::Leave => DragDropKind::Leave,
        }
    }

    /// Decode a host payload.
    ///
    /// Returns `None` if the payload is not an object with a string `type`, or if the tag is not one of `over`, `drop`,
    /// `cancel` or `leave`. A `drop` whose `paths` is missing or is not a list of strings is an empty drop, so the
    /// drop still ends the hover. A missing or malformed `position` reads as the origin.
    pub fn from_payload(payload: Value) -> Option<Self> {
        let raw: RawPayload = match serde_json::from_value(payload) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::trace!("ignoring malformed drag/drop payload: {err}");
                return None;
            }
        };

        let Some(kind) = DragDropKind::from_tag(&raw.kind) else {
            tracing::trace!("ignoring unrecognized drag/drop type {:?}", raw.kind);
            return None;
        };

        let position = serde_json::from_value(raw.position).unwrap_or_default();

        let event = match kind {
            DragDropKind::Over => Self::Over { position },
            DragDropKind::Drop => {
                let paths = match raw.paths {
                    Value::Null => Vec::new(),
                    paths => serde_json::from_value(paths).unwrap_or_else(|err| {
                        tracing::trace!("treating drop with malformed paths as empty: {err}");
                        Vec::new()
                    }),
                };
                Self::Drop { paths, position }
            }
            DragDropKind::Cancel => Self::Cancel,
            DragDropKind::Leave => Self::Leave,
        };

        Some(event)
    }

    /// Encode this event in the host payload shape understood by [`DragDropEvent::from_payload`].
    pub fn to_payload(&self) -> Value {
        match self {
            Self::Over { position } => serde_json::json!({
                "type": "over",
                "position": position,
            }),
            Self::Drop { paths, position } => serde_json::json!({
                "type": "drop",
                "paths": paths,
                "position": position,
            }),
            Self::Cancel | Self::Leave => serde_json::json!({ "type": self.kind().as_str() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_drop_in_host_order() {
        let event = DragDropEvent::from_payload(json!({
            "type": "drop",
            "paths": ["b/c.png", "a.txt"],
            "position": { "x": 12.5, "y": 40 }
        }));

        assert_eq!(
            event,
            Some(DragDropEvent::Drop {
                paths: vec!["b/c.png".to_string(), "a.txt".to_string()],
                position: Position::new(12.5, 40.0),
            })
        );
    }

    #[test]
    fn paths_are_not_read_outside_drop() {
        // garbage in `paths` must not poison a hover
        let event = DragDropEvent::from_payload(json!({ "type": "over", "paths": 42 }));
        assert_eq!(
            event,
            Some(DragDropEvent::Over {
                position: Position::default()
            })
        );

        let event = DragDropEvent::from_payload(json!({ "type": "leave", "paths": "nope" }));
        assert_eq!(event, Some(DragDropEvent::Leave));
    }

    #[test]
    fn drop_without_paths_is_empty() {
        let event = DragDropEvent::from_payload(json!({ "type": "drop" }));
        assert_eq!(
            event,
            Some(DragDropEvent::Drop {
                paths: vec![],
                position: Position::default()
            })
        );
    }

    #[test]
    fn rejects_unknown_and_malformed_payloads() {
        assert_eq!(DragDropEvent::from_payload(json!({ "type": "enter" })), None);
        assert_eq!(DragDropEvent::from_payload(json!({ "type": "DROP" })), None);
        assert_eq!(DragDropEvent::from_payload(json!({ "type": 3 })), None);
        assert_eq!(DragDropEvent::from_payload(json!({ "paths": [] })), None);
        assert_eq!(DragDropEvent::from_payload(json!("drop")), None);
    }

    #[test]
    fn drop_with_malformed_paths_is_empty() {
        for paths in [json!([1, 2]), json!("a.txt"), json!({ "0": "a.txt" })] {
            let event = DragDropEvent::from_payload(json!({ "type": "drop", "paths": paths }));
            assert_eq!(
                event,
                Some(DragDropEvent::Drop {
                    paths: vec![],
                    position: Position::default()
                })
            );
        }
    }

    #[test]
    fn payload_encoding_is_understood_by_decoder() {
        let events = [
            DragDropEvent::Over {
                position: Position::new(1.0, 2.0),
            },
            DragDropEvent::Drop {
                paths: vec!["x".to_string()],
                position: Position::new(3.0, 4.0),
            },
            DragDropEvent::Cancel,
            DragDropEvent::Leave,
        ];

        for event in events {
            assert_eq!(DragDropEvent::from_payload(event.to_payload()), Some(event));
        }
    }
}
