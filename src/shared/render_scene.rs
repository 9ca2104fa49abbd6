//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Die Szene ist ein flacher, serialisierbarer Schnappschuss: Renderer
//! brauchen weder `Diagram` noch den Router.

use super::options::EditorOptions;
use crate::core::{ConnectionId, NodeGeometry, NodeId, NodeKind};
use crate::routing::ConnectionShape;
use glam::Vec2;
use serde::Serialize;

/// Darstellungsdaten eines Nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Bounding-Box (bei Start/End die des Kreises)
    pub geometry: NodeGeometry,
    pub label: String,
    pub selected: bool,
    /// Ziel unter dem Zeiger während eines Connector-Drags
    pub hovered: bool,
    /// Griff-Box, `None` bei End-Nodes
    pub connector_handle: Option<NodeGeometry>,
}

/// Darstellungsdaten einer Verbindung.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionView {
    pub id: ConnectionId,
    pub from_id: NodeId,
    pub to_id: NodeId,
    pub shape: ConnectionShape,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Serialize)]
pub struct RenderScene {
    /// Nodes in aufsteigender ID-Reihenfolge
    pub nodes: Vec<NodeView>,
    /// Verbindungen in aufsteigender ID-Reihenfolge
    pub connections: Vec<ConnectionView>,
    /// Vorschau-Linie des Connector-Drags (Griff → Zeiger)
    pub preview_line: Option<(Vec2, Vec2)>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Achsenparallele Hülle aller Nodes, Pfade und der Vorschau-Linie.
    ///
    /// `None` für eine leere Szene oder wenn keine endliche Koordinate existiert.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let node_points = self
            .nodes
            .iter()
            .flat_map(|n| [n.geometry.position, n.geometry.max()]);
        let handle_points = self
            .nodes
            .iter()
            .filter_map(|n| n.connector_handle)
            .flat_map(|h| [h.position, h.max()]);
        let route_points = self
            .connections
            .iter()
            .flat_map(|c| c.shape.waypoints.iter().copied());
        let preview_points = self.preview_line.into_iter().flat_map(|(a, b)| [a, b]);

        node_points
            .chain(handle_points)
            .chain(route_points)
            .chain(preview_points)
            .filter(|p| p.is_finite())
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((min, max)) => Some((min.min(p), max.max(p))),
            })
    }
}
