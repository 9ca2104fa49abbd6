//! Use-Case: Verschieben selektierter Nodes.

use crate::AppState;

/// Verschiebt alle selektierten Nodes um den gegebenen Offset.
///
/// Jeder Node-Move routet die inzidenten Verbindungen sofort neu.
pub fn move_selected_nodes(state: &mut AppState, delta: glam::Vec2) {
    if delta == glam::Vec2::ZERO || !delta.is_finite() {
        return;
    }

    if state.selection.selected_node_ids.is_empty() {
        return;
    }

    let ids = state.selection.sorted_ids();
    let diagram = state.diagram_mut();
    let moved = ids
        .iter()
        .filter(|&&id| diagram.move_node_by(id, delta))
        .count();

    log::debug!("{} Node(s) um ({:.1}, {:.1}) verschoben", moved, delta.x, delta.y);
}
