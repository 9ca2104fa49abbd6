//! Repräsentiert eine gerichtete Verbindung (Flusslinie) zwischen zwei Nodes.

use super::{NodeGeometry, NodeId};
use crate::routing::{self, ConnectionShape};
use crate::shared::options::RouteStyle;
use serde::{Deserialize, Serialize};

/// Stabile Verbindungs-ID innerhalb eines Diagramms
pub type ConnectionId = u64;

/// Legt fest, über welche Kantenorientierung die Linie startet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoutingBias {
    /// Router wählt frei
    #[default]
    Auto,
    /// Start über obere/untere Kante
    VerticalStart,
    /// Start über linke/rechte Kante
    HorizontalStart,
}

impl RoutingBias {
    /// Liest einen Bias-Code (`A`, `V`, `H` oder ausgeschrieben).
    ///
    /// Unbekannte Werte ergeben `Auto`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "v" | "vertical" | "vertical-start" => RoutingBias::VerticalStart,
            "h" | "horizontal" | "horizontal-start" => RoutingBias::HorizontalStart,
            "a" | "auto" => RoutingBias::Auto,
            other => {
                log::debug!("Unbekannter Routing-Bias '{}', verwende Auto", other);
                RoutingBias::Auto
            }
        }
    }

    /// Bias für die Gegenrichtung einer Route mit einem Knick.
    ///
    /// Eine L-Route, die horizontal startet, kommt rückwärts vertikal an.
    pub fn mirrored(self) -> Self {
        match self {
            RoutingBias::Auto => RoutingBias::Auto,
            RoutingBias::VerticalStart => RoutingBias::HorizontalStart,
            RoutingBias::HorizontalStart => RoutingBias::VerticalStart,
        }
    }

    pub(crate) fn allows_vertical_start(self) -> bool {
        self != RoutingBias::HorizontalStart
    }

    pub(crate) fn allows_horizontal_start(self) -> bool {
        self != RoutingBias::VerticalStart
    }
}

/// Eine Verbindung zwischen zwei Nodes
#[derive(Debug, Clone)]
pub struct Connection {
    /// Eindeutige ID
    pub id: ConnectionId,
    /// Start-Node (Linienanfang)
    pub from_id: NodeId,
    /// Ziel-Node (Pfeilspitze)
    pub to_id: NodeId,
    /// Routing-Bias
    pub bias: RoutingBias,
    /// Abgeleitete Darstellung, wird bei jedem Routing neu berechnet
    pub shape: ConnectionShape,
}

impl Connection {
    /// Erstellt eine neue Verbindung und routet sie sofort.
    pub fn new(
        id: ConnectionId,
        from_id: NodeId,
        to_id: NodeId,
        bias: RoutingBias,
        from: &NodeGeometry,
        to: &NodeGeometry,
        style: &RouteStyle,
    ) -> Self {
        Self {
            id,
            from_id,
            to_id,
            bias,
            shape: routing::compute_shape(from, to, bias, style),
        }
    }

    /// Berechnet Wegpunkte, Pfad und Pfeil aus den aktuellen Node-Geometrien neu.
    pub fn update_shape(&mut self, from: &NodeGeometry, to: &NodeGeometry, style: &RouteStyle) {
        self.shape = routing::compute_shape(from, to, self.bias, style);
    }

    /// Prüft, ob der Node ein Endpunkt dieser Verbindung ist.
    pub fn touches(&self, node_id: NodeId) -> bool {
        self.from_id == node_id || self.to_id == node_id
    }
}
