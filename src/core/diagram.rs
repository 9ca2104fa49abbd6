//! Das Diagramm: Arena aller Nodes und Connections mit Spatial-Index.

use super::{
    Connection, ConnectionId, FlowNode, NodeGeometry, NodeId, NodeKind, NodeLocator, RoutingBias,
    SpatialIndex,
};
use crate::shared::options::RouteStyle;
use anyhow::{bail, Context};
use glam::Vec2;
use std::collections::HashMap;

/// Container für alle Nodes und Verbindungen eines Flussdiagramms.
///
/// Besitzt beide Entitätsarten über stabile IDs. Verbindungen werden nie
/// gegen einen entfernten Node geroutet: `remove_node` löscht zuerst alle
/// inzidenten Verbindungen und erst danach den Node.
#[derive(Debug, Clone)]
pub struct Diagram {
    nodes: HashMap<NodeId, FlowNode>,
    connections: HashMap<ConnectionId, Connection>,
    next_node_id: NodeId,
    next_connection_id: ConnectionId,
    /// Routing-Parameter für alle Verbindungen
    style: RouteStyle,
    /// Persistenter Spatial-Index für Drop-Ziel-Abfragen
    spatial_index: SpatialIndex,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new(RouteStyle::default())
    }
}

impl Diagram {
    /// Erstellt ein leeres Diagramm.
    pub fn new(style: RouteStyle) -> Self {
        Self {
            nodes: HashMap::new(),
            connections: HashMap::new(),
            next_node_id: 1,
            next_connection_id: 1,
            style,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Aktuelle Routing-Parameter.
    pub fn style(&self) -> &RouteStyle {
        &self.style
    }

    /// Ersetzt die Routing-Parameter und routet alle Verbindungen neu.
    pub fn set_style(&mut self, style: RouteStyle) {
        if self.style == style {
            return;
        }
        self.style = style;
        self.reroute_all();
    }

    /// ID, die der nächste `add_node` vergibt.
    pub fn next_node_id(&self) -> NodeId {
        self.next_node_id
    }

    /// Fügt einen Node hinzu und gibt seine ID zurück.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        geometry: NodeGeometry,
        label: impl Into<String>,
    ) -> NodeId {
        let id = self.next_node_id;
        self.next_node_id += 1;
        self.nodes.insert(id, FlowNode::new(id, kind, geometry, label));
        self.rebuild_spatial_index();
        id
    }

    /// Entfernt einen Node inklusive aller inzidenten Verbindungen.
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<FlowNode> {
        let incident: Vec<ConnectionId> = self.nodes.get(&node_id)?.connection_ids().collect();

        // Phase 1: Verbindungen lösen, solange beide Endpunkte noch existieren
        for connection_id in incident {
            self.remove_connection(connection_id);
        }

        // Phase 2: Node selbst
        let removed = self.nodes.remove(&node_id);
        self.rebuild_spatial_index();
        removed
    }

    /// Erstellt eine Verbindung `from → to` und routet sie sofort.
    ///
    /// Abgelehnt werden Schleifen, unbekannte Endpunkte und Duplikate
    /// derselben Richtung.
    pub fn add_connection(
        &mut self,
        from_id: NodeId,
        to_id: NodeId,
        bias: RoutingBias,
    ) -> anyhow::Result<ConnectionId> {
        if from_id == to_id {
            bail!("Verbindung von Node {from_id} auf sich selbst ist nicht erlaubt");
        }
        let from = self
            .nodes
            .get(&from_id)
            .map(|n| n.geometry)
            .with_context(|| format!("Start-Node {from_id} existiert nicht"))?;
        let to = self
            .nodes
            .get(&to_id)
            .map(|n| n.geometry)
            .with_context(|| format!("Ziel-Node {to_id} existiert nicht"))?;
        if let Some(existing) = self.find_connection(from_id, to_id) {
            bail!("Verbindung {from_id}→{to_id} existiert bereits (ID {existing})");
        }

        let id = self.next_connection_id;
        self.next_connection_id += 1;
        let connection = Connection::new(id, from_id, to_id, bias, &from, &to, &self.style);
        self.connections.insert(id, connection);

        for node_id in [from_id, to_id] {
            if let Some(node) = self.nodes.get_mut(&node_id) {
                node.attach(id);
            }
        }

        log::info!("Verbindung {from_id}→{to_id} erstellt (ID {id}, {bias:?})");
        Ok(id)
    }

    /// Entfernt eine Verbindung und die Rückverweise an beiden Nodes.
    pub fn remove_connection(&mut self, connection_id: ConnectionId) -> Option<Connection> {
        let removed = self.connections.remove(&connection_id)?;
        for node_id in [removed.from_id, removed.to_id] {
            if let Some(node) = self.nodes.get_mut(&node_id) {
                node.detach(connection_id);
            }
        }
        Some(removed)
    }

    /// Setzt die Geometrie eines Nodes und routet seine Verbindungen neu.
    ///
    /// Die Geometrie wird vor dem Routing geschrieben.
    pub fn set_node_geometry(&mut self, node_id: NodeId, geometry: NodeGeometry) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };
        if node.geometry == geometry {
            return true;
        }
        node.geometry = geometry;

        self.reroute_node(node_id);
        self.rebuild_spatial_index();
        true
    }

    /// Verschiebt einen Node an eine neue Position (obere linke Ecke).
    pub fn set_node_position(&mut self, node_id: NodeId, position: Vec2) -> bool {
        let Some(geometry) = self.nodes.get(&node_id).map(|n| n.geometry) else {
            return false;
        };
        self.set_node_geometry(
            node_id,
            NodeGeometry {
                position,
                ..geometry
            },
        )
    }

    /// Verschiebt einen Node relativ um `delta`.
    pub fn move_node_by(&mut self, node_id: NodeId, delta: Vec2) -> bool {
        let Some(geometry) = self.nodes.get(&node_id).map(|n| n.geometry) else {
            return false;
        };
        self.set_node_geometry(node_id, geometry.translated(delta))
    }

    /// Ändert den Routing-Bias einer Verbindung und routet sie sofort neu.
    pub fn set_connection_bias(&mut self, connection_id: ConnectionId, bias: RoutingBias) -> bool {
        let Some(connection) = self.connections.get_mut(&connection_id) else {
            return false;
        };
        connection.bias = bias;
        self.reroute_connection(connection_id)
    }

    /// Routet alle Verbindungen neu.
    pub fn reroute_all(&mut self) {
        let ids: Vec<ConnectionId> = self.connections.keys().copied().collect();
        for id in ids {
            self.reroute_connection(id);
        }
    }

    /// Routet alle Verbindungen eines Nodes neu.
    fn reroute_node(&mut self, node_id: NodeId) {
        let incident: Vec<ConnectionId> = self
            .nodes
            .get(&node_id)
            .map(|n| n.connection_ids().collect())
            .unwrap_or_default();
        for id in incident {
            self.reroute_connection(id);
        }
    }

    fn reroute_connection(&mut self, connection_id: ConnectionId) -> bool {
        let Some((from_id, to_id)) = self
            .connections
            .get(&connection_id)
            .map(|c| (c.from_id, c.to_id))
        else {
            return false;
        };
        // Geometrien zuerst kopieren, um Borrow-Konflikt zu vermeiden
        let (Some(from), Some(to)) = (
            self.nodes.get(&from_id).map(|n| n.geometry),
            self.nodes.get(&to_id).map(|n| n.geometry),
        ) else {
            log::warn!("Verbindung {connection_id} verweist auf fehlenden Node");
            return false;
        };
        let style = self.style;
        match self.connections.get_mut(&connection_id) {
            Some(connection) => {
                connection.update_shape(&from, &to, &style);
                true
            }
            None => false,
        }
    }

    /// Gibt einen Node zurück.
    pub fn node(&self, node_id: NodeId) -> Option<&FlowNode> {
        self.nodes.get(&node_id)
    }

    /// Prüft, ob ein Node existiert.
    pub fn has_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Iterator über alle Nodes (read-only).
    pub fn nodes_iter(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.values()
    }

    /// Gibt eine Verbindung zurück.
    pub fn connection(&self, connection_id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&connection_id)
    }

    /// Iterator über alle Verbindungen (read-only).
    pub fn connections_iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Findet die Verbindung `from → to` (exakte Richtung).
    pub fn find_connection(&self, from_id: NodeId, to_id: NodeId) -> Option<ConnectionId> {
        let from = self.nodes.get(&from_id)?;
        from.connection_ids().find(|id| {
            self.connections
                .get(id)
                .is_some_and(|c| c.from_id == from_id && c.to_id == to_id)
        })
    }

    /// Gibt die Anzahl der Nodes zurück.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Verbindungen zurück.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Baut den persistenten Spatial-Index aus den aktuellen Nodes neu auf.
    fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_nodes(&self.nodes);
    }
}

impl NodeLocator for Diagram {
    fn node_at(&self, point: Vec2) -> Option<NodeId> {
        self.spatial_index.node_at(point)
    }

    fn drop_target_at(&self, point: Vec2) -> Option<NodeId> {
        self.node_at(point).filter(|id| {
            self.nodes
                .get(id)
                .is_some_and(|node| node.kind.accepts_incoming())
        })
    }
}

#[cfg(test)]
mod tests;
