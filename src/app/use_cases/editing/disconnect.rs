//! Use-Case: Verbindung entfernen.

use crate::app::AppState;
use crate::core::ConnectionId;

/// Entfernt eine Verbindung samt Rückverweisen an beiden Nodes.
pub fn remove_connection(state: &mut AppState, connection_id: ConnectionId) {
    if state.diagram.connection(connection_id).is_none() {
        log::debug!("Verbindung {} nicht gefunden", connection_id);
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    if let Some(removed) = state.diagram_mut().remove_connection(connection_id) {
        log::info!(
            "Verbindung {}→{} entfernt (ID {})",
            removed.from_id,
            removed.to_id,
            connection_id
        );
    }
}
