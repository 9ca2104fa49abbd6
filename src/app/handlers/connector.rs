//! Handler für den Connector-Drag.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::NodeId;

/// Startet den Drag am Griff von `source_id`.
pub fn begin(state: &mut AppState, source_id: NodeId, origin: glam::Vec2) {
    use_cases::connector::begin_connector_drag(state, source_id, origin);
}

/// Bewegt die Vorschau-Linie.
pub fn update(state: &mut AppState, canvas_pos: glam::Vec2) {
    use_cases::connector::update_connector_drag(state, canvas_pos);
}

/// Beendet den Drag an der Zeigerposition.
pub fn finish(state: &mut AppState, canvas_pos: glam::Vec2) {
    use_cases::connector::finish_connector_drag(state, canvas_pos);
}

/// Bricht den Drag ab.
pub fn cancel(state: &mut AppState) {
    use_cases::connector::cancel_connector_drag(state);
}
