//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{ConnectionView, NodeView, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let handle_size = state.options.connector_handle_size;
    let char_width = state.options.label_char_width;
    let hovered = state.editor.connector_drag.hovered();

    let mut nodes: Vec<NodeView> = state
        .diagram
        .nodes_iter()
        .map(|node| NodeView {
            id: node.id,
            kind: node.kind,
            geometry: node.geometry,
            label: node.label.clone(),
            selected: state.selection.contains(node.id),
            hovered: hovered == Some(node.id),
            connector_handle: node.connector_handle(handle_size, char_width),
        })
        .collect();
    nodes.sort_unstable_by_key(|n| n.id);

    let mut connections: Vec<ConnectionView> = state
        .diagram
        .connections_iter()
        .map(|c| ConnectionView {
            id: c.id,
            from_id: c.from_id,
            to_id: c.to_id,
            shape: c.shape.clone(),
        })
        .collect();
    connections.sort_unstable_by_key(|c| c.id);

    RenderScene {
        nodes,
        connections,
        preview_line: state.editor.connector_drag.preview_line(),
        options: state.options.clone(),
    }
}
