//! Use-Case: Laufzeit-Optionen anwenden.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen.
///
/// Ändert sich der Routing-Stil, werden alle Verbindungen neu berechnet;
/// das ist eine Diagramm-Mutation und bekommt einen Undo-Snapshot.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let style_changed = state.diagram.style() != &options.route;

    if style_changed {
        // Snapshot VOR Mutation
        state.record_undo_snapshot();
        state.diagram_mut().set_style(options.route);
        log::info!(
            "Routing-Stil geändert: Radius {:.1}, Mindestabstand {:.1}",
            options.route.corner_radius,
            options.route.min_node_gap
        );
    }

    state.editor.default_bias = options.default_bias;
    state.options = options;
}
