//! Gemeinsame Hilfsfunktionen der Selektion.

use crate::app::AppState;

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if state.selection.selected_node_ids.is_empty() {
        return;
    }
    state.selection.ids_mut().clear();
    log::debug!("Selektion aufgehoben");
}
