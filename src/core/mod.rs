//! Core-Domänentypen: Geometrie, Nodes, Connections, Diagramm, Spatial-Index.

pub mod connection;
/// Core-Datenmodelle des Flussdiagramms
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - Diagram: Container für alle Nodes und Connections
/// - FlowNode: Einzelner Node mit Geometrie, Art und Label
/// - Connection: Geroutete Verbindung zwischen zwei Nodes
pub mod diagram;
pub mod geometry;
pub mod node;
pub mod spatial;

pub use connection::{Connection, ConnectionId, RoutingBias};
pub use diagram::Diagram;
pub use geometry::NodeGeometry;
pub use node::{FlowNode, NodeId, NodeKind};
pub use spatial::{NodeLocator, SpatialIndex, SpatialMatch};
