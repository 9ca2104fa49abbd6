//! Use-Case: Verbindungen erstellen.

use crate::app::AppState;
use crate::core::{ConnectionId, NodeId, RoutingBias};

/// Erstellt eine Verbindung `from → to` mit dem gegebenen Bias.
///
/// Validiert gegen Self-Loops, unbekannte Nodes und Duplikate. End-Nodes
/// starten keine Verbindung, Start-Nodes nehmen keine an. Abgelehnte Anfragen lassen den Zustand unverändert.
pub fn add_connection(
    state: &mut AppState,
    from_id: NodeId,
    to_id: NodeId,
    bias: RoutingBias,
) -> Option<ConnectionId> {
    if from_id == to_id {
        log::warn!("Self-Loop nicht erlaubt (Node {})", from_id);
        return None;
    }

    let (Some(from), Some(to)) = (state.diagram.node(from_id), state.diagram.node(to_id)) else {
        log::warn!(
            "Verbindung nicht möglich: Node {} oder {} existiert nicht",
            from_id,
            to_id
        );
        return None;
    };

    if !from.kind.has_connector() {
        log::warn!("Node {} ({:?}) kann keine Verbindung starten", from_id, from.kind);
        return None;
    }

    if !to.kind.accepts_incoming() {
        log::warn!("Node {} ({:?}) nimmt keine Verbindung an", to_id, to.kind);
        return None;
    }

    if state.diagram.find_connection(from_id, to_id).is_some() {
        log::warn!("Verbindung {}→{} existiert bereits", from_id, to_id);
        return None;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    match state.diagram_mut().add_connection(from_id, to_id, bias) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("Verbindung nicht erstellt: {e:#}");
            None
        }
    }
}
