//! Use-Case: Routing-Bias ändern.

use crate::app::AppState;
use crate::core::{ConnectionId, RoutingBias};

/// Setzt den Bias einer Verbindung; sie wird sofort neu geroutet.
pub fn set_connection_bias(state: &mut AppState, connection_id: ConnectionId, bias: RoutingBias) {
    let Some(connection) = state.diagram.connection(connection_id) else {
        log::warn!("Bias nicht gesetzt: Verbindung {} existiert nicht", connection_id);
        return;
    };
    if connection.bias == bias {
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    if state.diagram_mut().set_connection_bias(connection_id, bias) {
        log::info!("Verbindung {}: Bias {:?}", connection_id, bias);
    }
}

/// Setzt den Bias für künftig erstellte Verbindungen.
pub fn set_default_bias(state: &mut AppState, bias: RoutingBias) {
    state.editor.default_bias = bias;
    log::info!("Standard-Bias: {:?}", bias);
}
