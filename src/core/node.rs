//! Repräsentiert einen Node im Flussdiagramm.

use super::{ConnectionId, NodeGeometry};
use glam::Vec2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Stabile Node-ID innerhalb eines Diagramms
pub type NodeId = u64;

/// Art des Nodes (beeinflusst nur die Darstellung)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeKind {
    /// Startpunkt (Kreis)
    Start,
    /// Endpunkt (Kreis, ohne Connector-Griff)
    End,
    /// Normaler Prozessschritt (Rechteck)
    #[default]
    Process,
}

impl NodeKind {
    /// Start/End werden als Kreis gezeichnet.
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeKind::Start | NodeKind::End)
    }

    /// Nur End-Nodes haben keinen Connector-Griff.
    pub fn has_connector(self) -> bool {
        self != NodeKind::End
    }

    /// Start-Nodes nehmen keine eingehenden Verbindungen an.
    pub fn accepts_incoming(self) -> bool {
        self != NodeKind::Start
    }

    /// Standard-Beschriftung eines neuen Nodes.
    pub fn default_label(self) -> &'static str {
        match self {
            NodeKind::Start => "S",
            NodeKind::End => "E",
            NodeKind::Process => "Node",
        }
    }
}

/// Ein Node mit Geometrie und Rückverweisen auf inzidente Verbindungen.
///
/// Die Verbindungen gehören dem Diagramm; der Node kennt nur ihre IDs, um sie
/// beim Verschieben neu routen zu lassen.
#[derive(Debug, Clone)]
pub struct FlowNode {
    /// Eindeutige ID
    pub id: NodeId,
    /// Bounding-Box (bei Kreisen: umschließendes Quadrat)
    pub geometry: NodeGeometry,
    /// Node-Art
    pub kind: NodeKind,
    /// Beschriftung
    pub label: String,
    connections: IndexSet<ConnectionId>,
}

impl FlowNode {
    /// Erstellt einen neuen Node ohne Verbindungen.
    pub fn new(id: NodeId, kind: NodeKind, geometry: NodeGeometry, label: impl Into<String>) -> Self {
        Self {
            id,
            geometry,
            kind,
            label: label.into(),
            connections: IndexSet::new(),
        }
    }

    /// IDs aller ein- und ausgehenden Verbindungen.
    pub fn connection_ids(&self) -> impl Iterator<Item = ConnectionId> + '_ {
        self.connections.iter().copied()
    }

    /// Anzahl inzidenter Verbindungen.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub(crate) fn attach(&mut self, connection_id: ConnectionId) {
        self.connections.insert(connection_id);
    }

    pub(crate) fn detach(&mut self, connection_id: ConnectionId) -> bool {
        self.connections.shift_remove(&connection_id)
    }

    /// Box des Connector-Griffs rechts neben dem Label.
    ///
    /// `None` für End-Nodes. Die Labelbreite wird über `char_width` geschätzt.
    pub fn connector_handle(&self, handle_size: f32, char_width: f32) -> Option<NodeGeometry> {
        if !self.kind.has_connector() {
            return None;
        }
        let center = self.geometry.center();
        let label_width = self.label.chars().count() as f32 * char_width;
        let top_left = Vec2::new(center.x + label_width * 0.5 + 3.0, center.y - 5.0);
        Some(NodeGeometry::new(top_left, Vec2::splat(handle_size)))
    }
}
