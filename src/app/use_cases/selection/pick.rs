//! Use-Case: Node-Selektion per Klick.

use crate::app::AppState;
use crate::core::NodeLocator;

/// Selektiert den Node unter `canvas_pos`.
///
/// `additive` schaltet die Zugehörigkeit des getroffenen Nodes um, statt
/// die Selektion zu ersetzen. Ein Klick ins Leere ohne `additive` hebt die
/// Selektion auf.
pub fn select_node_at(state: &mut AppState, canvas_pos: glam::Vec2, additive: bool) {
    let hit = state.diagram.node_at(canvas_pos);

    let Some(node_id) = hit else {
        if !additive {
            super::clear_selection(state);
        }
        return;
    };

    let ids = state.selection.ids_mut();
    if additive {
        if !ids.remove(&node_id) {
            ids.insert(node_id);
        }
    } else {
        ids.clear();
        ids.insert(node_id);
    }
    log::debug!("Node {} gepickt (additiv: {})", node_id, additive);
}
