use crate::app::connector_drag::ConnectorDrag;
use crate::core::RoutingBias;

/// Zustand der laufenden Editor-Interaktionen
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Routing-Bias für neu erstellte Verbindungen
    pub default_bias: RoutingBias,
    /// Laufender Connector-Drag (Vorschau-Linie)
    pub connector_drag: ConnectorDrag,
    /// Ob gerade ein Move-Lifecycle läuft
    pub moving_nodes: bool,
}

impl EditorState {
    /// Erstellt den Standard-Zustand mit dem gegebenen Bias.
    pub fn new(default_bias: RoutingBias) -> Self {
        Self {
            default_bias,
            connector_drag: ConnectorDrag::Idle,
            moving_nodes: false,
        }
    }
}
