//! Use-Case: Selektierte Nodes löschen (inkl. aller betroffenen Connections).

use crate::app::AppState;

/// Löscht alle selektierten Nodes und deren Connections.
///
/// `Diagram::remove_node` entfernt zuerst die inzidenten Verbindungen und
/// danach den Node selbst.
pub fn delete_selected_nodes(state: &mut AppState) {
    if state.selection.selected_node_ids.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let ids_to_delete = state.selection.sorted_ids();
    let connections_before = state.diagram.connection_count();

    let diagram = state.diagram_mut();
    let removed = ids_to_delete
        .iter()
        .filter(|&&id| diagram.remove_node(id).is_some())
        .count();
    let removed_connections = connections_before - diagram.connection_count();

    state.selection.ids_mut().clear();

    // Ein laufender Drag darf nicht an einem gelöschten Node hängen
    if let Some(source) = state.editor.connector_drag.source() {
        if ids_to_delete.contains(&source) {
            state.editor.connector_drag.cancel();
        }
    }

    log::info!(
        "{} Node(s) und {} Verbindung(en) gelöscht",
        removed,
        removed_connections
    );
}
