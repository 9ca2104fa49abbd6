//! Use-Cases für das Ziehen neuer Verbindungen am Connector-Griff.

use crate::app::{AppState, DragOutcome};
use crate::core::{ConnectionId, NodeId};
use glam::Vec2;

/// Startet einen Connector-Drag an `source_id`.
///
/// Nodes ohne Connector-Griff (End-Nodes) können keinen Drag starten.
pub fn begin_connector_drag(state: &mut AppState, source_id: NodeId, origin: Vec2) -> bool {
    let Some(node) = state.diagram.node(source_id) else {
        log::warn!("Connector-Drag: Node {} existiert nicht", source_id);
        return false;
    };
    if !node.kind.has_connector() {
        log::debug!("Connector-Drag: Node {} hat keinen Griff", source_id);
        return false;
    }
    if !origin.is_finite() {
        return false;
    }

    state.editor.connector_drag.begin(source_id, origin);
    true
}

/// Aktualisiert Vorschau-Linie und Hover-Ziel.
pub fn update_connector_drag(state: &mut AppState, canvas_pos: Vec2) {
    let diagram = &*state.diagram;
    state.editor.connector_drag.update(canvas_pos, diagram);
}

/// Beendet den Drag. Bei Loslassen über einem fremden Node wird eine
/// Verbindung mit dem Standard-Bias erstellt.
pub fn finish_connector_drag(state: &mut AppState, canvas_pos: Vec2) -> Option<ConnectionId> {
    let diagram = &*state.diagram;
    let outcome = state.editor.connector_drag.finish(canvas_pos, diagram)?;

    match outcome {
        DragOutcome::Connected { from, to } => {
            let bias = state.editor.default_bias;
            super::editing::add_connection(state, from, to, bias)
        }
        DragOutcome::Cancelled => {
            log::debug!("Connector-Drag verworfen");
            None
        }
    }
}

/// Bricht einen laufenden Drag ohne Änderung ab.
pub fn cancel_connector_drag(state: &mut AppState) {
    if state.editor.connector_drag.cancel() {
        log::debug!("Connector-Drag abgebrochen");
    }
}
