//! Spatial-Index (KD-Tree) über Node-Mittelpunkten für Drop-Ziel-Abfragen.

use std::collections::HashMap;

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::{FlowNode, NodeGeometry, NodeId};

/// Findet den Node unter einer Canvas-Position.
///
/// Wird in den Connector-Drag injiziert.
pub trait NodeLocator {
    /// Node, dessen Rechteck `point` enthält (oberster bei Überlappung).
    fn node_at(&self, point: Vec2) -> Option<NodeId>;

    /// Oberster Node unter `point`, sofern er Verbindungen annimmt.
    fn drop_target_at(&self, point: Vec2) -> Option<NodeId> {
        self.node_at(point)
    }
}

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Nodes
    pub node_id: NodeId,
    /// Euklidische Distanz zum Node-Mittelpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Nodes eines Diagramms.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    /// Ein Eintrag pro eindeutigem Mittelpunkt (Item = Index in `buckets`)
    tree: KdTree<f64, 2>,
    /// Nodes je Mittelpunkt, aufsteigend nach ID
    buckets: Vec<Vec<NodeId>>,
    node_count: usize,
    geometries: HashMap<NodeId, NodeGeometry>,
    /// Größter Umkreisradius aller Nodes (Suchradius für `node_at`)
    max_radius: f32,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            buckets: Vec::new(),
            node_count: 0,
            geometries: HashMap::new(),
            max_radius: 0.0,
        }
    }

    /// Baut einen neuen Index aus den übergebenen Nodes.
    ///
    /// Nodes mit nicht-endlicher Geometrie werden nicht indexiert.
    pub fn from_nodes(nodes: &HashMap<NodeId, FlowNode>) -> Self {
        let mut node_ids: Vec<NodeId> = nodes
            .values()
            .filter(|node| node.geometry.is_finite())
            .map(|node| node.id)
            .collect();
        node_ids.sort_unstable();

        // Deckungsgleiche Mittelpunkte teilen sich einen Tree-Eintrag;
        // kiddo erlaubt nur begrenzt viele Items am exakt selben Punkt.
        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut buckets: Vec<Vec<NodeId>> = Vec::new();
        let mut bucket_by_center: HashMap<(u32, u32), usize> = HashMap::new();
        for id in &node_ids {
            let Some(node) = nodes.get(id) else {
                continue;
            };
            // `+ 0.0` normalisiert -0.0 auf 0.0
            let center = node.geometry.center() + Vec2::ZERO;
            let key = (center.x.to_bits(), center.y.to_bits());
            let bucket = *bucket_by_center.entry(key).or_insert_with(|| {
                entries.push([center.x as f64, center.y as f64]);
                buckets.push(Vec::new());
                buckets.len() - 1
            });
            buckets[bucket].push(*id);
        }

        let tree: KdTree<f64, 2> = (&entries).into();

        let geometries: HashMap<NodeId, NodeGeometry> = node_ids
            .iter()
            .filter_map(|id| nodes.get(id).map(|node| (*id, node.geometry)))
            .collect();
        let max_radius = geometries
            .values()
            .map(NodeGeometry::bounding_radius)
            .fold(0.0, f32::max);

        Self {
            tree,
            buckets,
            node_count: node_ids.len(),
            geometries,
            max_radius,
        }
    }

    /// Gibt die Anzahl indexierter Nodes zurück.
    pub fn len(&self) -> usize {
        self.node_count
    }

    /// Gibt `true` zurück, wenn keine Nodes im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Findet den Node mit dem nächstgelegenen Mittelpunkt.
    ///
    /// Bei deckungsgleichen Mittelpunkten gewinnt die höchste ID.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() || !query.is_finite() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let node_id = *self.buckets.get(result.item as usize)?.last()?;

        Some(SpatialMatch {
            node_id,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Alle Nodes, deren Rechteck `query` enthält, nach Mittelpunkt-Distanz sortiert.
    pub fn containing(&self, query: Vec2) -> Vec<SpatialMatch> {
        if self.is_empty() || !query.is_finite() {
            return Vec::new();
        }

        // Vorfilter über den Umkreis, danach exakte Rechteck-Prüfung
        let radius = self.max_radius as f64;
        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], radius * radius)
            .into_iter()
            .flat_map(|entry| {
                let distance = (entry.distance as f32).sqrt();
                self.buckets
                    .get(entry.item as usize)
                    .into_iter()
                    .flatten()
                    .filter(move |&node_id| {
                        self.geometries
                            .get(node_id)
                            .is_some_and(|geometry| geometry.contains(query))
                    })
                    .map(move |&node_id| SpatialMatch { node_id, distance })
            })
            .collect::<Vec<_>>();

        // Gleiche Distanz: neuerer (höhere ID) Node liegt oben
        results.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| b.node_id.cmp(&a.node_id))
        });
        results
    }
}

impl NodeLocator for SpatialIndex {
    fn node_at(&self, point: Vec2) -> Option<NodeId> {
        self.containing(point).first().map(|m| m.node_id)
    }
}
