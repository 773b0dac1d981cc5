// Scene events — the core's sole output contract.
//
// Each event describes one atomic visual change for the external rendering
// engine: a histogram's bar values changing, an arrow repositioning, a
// symbol appearing or disappearing in the document grid, or a new document
// row starting. Events are immutable and strictly ordered; the renderer
// plays them one at a time, fully rendering each before pulling the next.
//
// All types serialize via serde so the renderer boundary can be a plain
// JSON stream, mirroring how the rest of the project moves data across
// process seams.
//
// See also: `choreography.rs` for the emission order contract, `types.rs`
// for the coordinate newtypes.

use crate::types::{BarIndex, ColumnIndex, HistogramTarget, RowIndex};
use serde::{Deserialize, Serialize};

/// What a shown symbol depicts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Placeholder marking the sampled topic (the renderer colors it per
    /// topic). Replaced in place by the slot's word icon.
    TopicMarker { topic: usize },
    /// The sampled word's icon. `icon` is the vocabulary identifier; asset
    /// resolution is the renderer's concern.
    WordIcon {
        topic: usize,
        word: usize,
        icon: String,
    },
}

/// One atomic visual change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// A histogram's bar values changed. Emitted for both histograms at
    /// every document begin — duplicate values are permitted, not skipped.
    HistogramUpdate {
        target: HistogramTarget,
        values: Vec<f64>,
    },
    /// The arrow above a histogram moved to a bar. On a document's first
    /// slot `first_in_document` is true and the renderer makes the arrow
    /// appear at the position instead of animating from its previous one.
    MarkerMove {
        target: HistogramTarget,
        bar: BarIndex,
        first_in_document: bool,
    },
    /// A symbol appeared at a grid cell.
    SymbolShow {
        row: RowIndex,
        column: ColumnIndex,
        kind: SymbolKind,
    },
    /// The symbol at a grid cell disappeared (the word icon has already
    /// replaced the topic marker in place).
    SymbolHide { row: RowIndex, column: ColumnIndex },
    /// A new document row begins. Emitted for every document after the
    /// first, following that document's histogram updates.
    RowAdvance { document: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serialization_roundtrip() {
        let events = vec![
            SceneEvent::HistogramUpdate {
                target: HistogramTarget::Topics,
                values: vec![0.4, 0.6],
            },
            SceneEvent::MarkerMove {
                target: HistogramTarget::Words,
                bar: BarIndex(7),
                first_in_document: true,
            },
            SceneEvent::SymbolShow {
                row: RowIndex(0),
                column: ColumnIndex(3),
                kind: SymbolKind::WordIcon {
                    topic: 1,
                    word: 2,
                    icon: "sheep".into(),
                },
            },
            SceneEvent::SymbolHide {
                row: RowIndex(0),
                column: ColumnIndex(3),
            },
            SceneEvent::RowAdvance { document: 1 },
        ];
        let json = serde_json::to_string(&events).unwrap();
        let restored: Vec<SceneEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, restored);
    }

    #[test]
    fn topic_marker_carries_topic() {
        let kind = SymbolKind::TopicMarker { topic: 1 };
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains("TopicMarker"));
        assert_eq!(serde_json::from_str::<SymbolKind>(&json).unwrap(), kind);
    }
}
