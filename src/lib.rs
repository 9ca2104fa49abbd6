//! FlowLine Editor Library.
//! Orthogonales Verbindungs-Routing für Flussdiagramme, als Library
//! exportiert für Tests, Benchmarks und Hosts mit eigener Zeichenfläche.

pub mod app;
pub mod core;
pub mod render;
pub mod routing;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, ConnectorDrag, DragOutcome};
pub use core::{
    Connection, ConnectionId, Diagram, FlowNode, NodeGeometry, NodeId, NodeKind, NodeLocator,
    RoutingBias, SpatialIndex, SpatialMatch,
};
pub use render::write_svg;
pub use routing::{arrowhead, route, to_rounded_path, ConnectionShape, Route, RouteStrategy};
pub use shared::{EditorOptions, RenderScene, RouteStyle};
