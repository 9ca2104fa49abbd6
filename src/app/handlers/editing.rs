//! Handler für Node- und Verbindungs-Editing.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ConnectionId, NodeGeometry, NodeId, NodeKind, RoutingBias};

/// Fügt einen neuen Node mit fertiger Geometrie hinzu.
pub fn add_node(state: &mut AppState, kind: NodeKind, geometry: NodeGeometry, label: String) {
    use_cases::editing::add_node(state, kind, geometry, label);
}

/// Löscht alle aktuell selektierten Nodes.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected_nodes(state);
}

/// Erstellt eine Verbindung zwischen zwei Nodes.
pub fn add_connection(state: &mut AppState, from_id: NodeId, to_id: NodeId, bias: RoutingBias) {
    use_cases::editing::add_connection(state, from_id, to_id, bias);
}

/// Entfernt eine Verbindung.
pub fn remove_connection(state: &mut AppState, connection_id: ConnectionId) {
    use_cases::editing::remove_connection(state, connection_id);
}

/// Ändert den Routing-Bias einer Verbindung.
pub fn set_connection_bias(state: &mut AppState, connection_id: ConnectionId, bias: RoutingBias) {
    use_cases::editing::set_connection_bias(state, connection_id, bias);
}

/// Setzt den Standard-Bias für neue Verbindungen.
pub fn set_default_bias(state: &mut AppState, bias: RoutingBias) {
    use_cases::editing::set_default_bias(state, bias);
}
