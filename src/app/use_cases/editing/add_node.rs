//! Use-Case: Neuen Node hinzufügen.

use crate::app::AppState;
use crate::core::{NodeGeometry, NodeId, NodeKind};

/// Fügt einen neuen Node hinzu und selektiert ihn als einzigen.
///
/// Nicht-endliche Geometrie wird abgelehnt.
pub fn add_node(
    state: &mut AppState,
    kind: NodeKind,
    geometry: NodeGeometry,
    label: String,
) -> Option<NodeId> {
    if !geometry.is_finite() {
        log::warn!("Node nicht hinzugefügt: ungültige Geometrie {:?}", geometry);
        return None;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let new_id = state.diagram_mut().add_node(kind, geometry, label);

    let ids = state.selection.ids_mut();
    ids.clear();
    ids.insert(new_id);

    log::info!(
        "Node {} ({:?}) an Position ({:.1}, {:.1}) hinzugefügt",
        new_id,
        kind,
        geometry.position.x,
        geometry.position.y
    );
    Some(new_id)
}
