//! Handler für Selektions-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::{AppState, SelectionState};
use std::sync::Arc;

/// Zeichnet einen Undo-Snapshot auf, wenn sich die Selektion geändert hat.
fn record_if_selection_changed(state: &mut AppState, old_selection: SelectionState) {
    if old_selection.selected_node_ids != state.selection.selected_node_ids {
        let snap = Snapshot {
            diagram: Arc::clone(&state.diagram),
            selection: old_selection,
        };
        state.history.record_snapshot(snap);
    }
}

/// Selektiert den Node unter dem Klickpunkt.
pub fn select_node_at(state: &mut AppState, canvas_pos: glam::Vec2, additive: bool) {
    let old = state.selection.clone();
    use_cases::selection::select_node_at(state, canvas_pos, additive);
    record_if_selection_changed(state, old);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    let old = state.selection.clone();
    use_cases::selection::clear_selection(state);
    record_if_selection_changed(state, old);
}

/// Startet einen Move-Lifecycle (nimmt Undo-Snapshot auf).
pub fn begin_move(state: &mut AppState) {
    if state.selection.selected_node_ids.is_empty() {
        return;
    }
    state.record_undo_snapshot();
    state.editor.moving_nodes = true;
}

/// Verschiebt alle selektierten Nodes um ein Delta.
pub fn move_selected(state: &mut AppState, delta: glam::Vec2) {
    use_cases::selection::move_selected_nodes(state, delta);
}

/// Beendet den Move-Lifecycle.
pub fn end_move(state: &mut AppState) {
    state.editor.moving_nodes = false;
}
