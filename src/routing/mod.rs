//! Verbindungs-Routing: Router, Pfad mit abgerundeten Ecken, Pfeilspitze.
//!
//! Aufgeteilt in:
//! - `router`: Auswahl der Strategie und Wegpunkte
//! - `path`: Linienzug mit Kreisbögen an den Ecken
//! - `arrow`: offene Pfeilspitze am Ziel

pub mod arrow;
pub mod path;
pub mod router;

pub use arrow::{arrowhead, Arrowhead};
pub use path::{to_rounded_path, ArcSweep, PathCommand, RoundedPath};
pub use router::{route, Route, RouteStrategy};

use crate::core::{NodeGeometry, RoutingBias};
use crate::shared::options::RouteStyle;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Vollständig berechnete Darstellung einer Verbindung.
///
/// Abgeleiteter Zustand: wird bei jeder Bewegung eines Endpunkts verworfen und
/// neu berechnet, nie gecacht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionShape {
    /// Gewählte Strategie
    pub strategy: RouteStrategy,
    /// Wegpunkte der Route
    pub waypoints: Vec<Vec2>,
    /// Linienzug mit abgerundeten Ecken
    pub path: RoundedPath,
    /// Pfeil am letzten Wegpunkt
    pub arrow: Arrowhead,
}

/// Router → Pfad → Pfeil in einem Schritt.
pub fn compute_shape(
    from: &NodeGeometry,
    to: &NodeGeometry,
    bias: RoutingBias,
    style: &RouteStyle,
) -> ConnectionShape {
    let route = route(from, to, bias, style);
    let path = to_rounded_path(&route.waypoints, style);
    let arrow = arrow_for(&route, to, style);

    ConnectionShape {
        strategy: route.strategy,
        waypoints: route.waypoints,
        path,
        arrow,
    }
}

/// Pfeil am letzten Segment; eine entartete Route verankert ihn an ihrem
/// ersten Wegpunkt bzw. am Ziel-Mittelpunkt.
fn arrow_for(route: &Route, to: &NodeGeometry, style: &RouteStyle) -> Arrowhead {
    let (start, end) = route.last_segment().unwrap_or_else(|| {
        let anchor = route.waypoints.first().copied().unwrap_or_else(|| to.center());
        (anchor, anchor)
    });
    arrowhead(start, end, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_follows_last_waypoint() {
        let from = NodeGeometry::from_xywh(0.0, 0.0, 100.0, 50.0);
        let to = NodeGeometry::from_xywh(200.0, 150.0, 100.0, 50.0);

        let shape = compute_shape(&from, &to, RoutingBias::Auto, &RouteStyle::default());

        assert_eq!(Some(shape.arrow.tip), shape.waypoints.last().copied());
        assert_eq!(shape.path.end_point(), Some(shape.arrow.tip));
        assert_eq!(shape.path.arc_count(), shape.waypoints.len() - 2);
    }

    #[test]
    fn degenerate_route_anchors_arrow_at_real_point() {
        let to = NodeGeometry::from_xywh(200.0, 150.0, 100.0, 50.0);
        let style = RouteStyle::default();
        let single = Route {
            strategy: RouteStrategy::Direct,
            waypoints: vec![Vec2::new(40.0, 30.0)],
        };
        let empty = Route {
            strategy: RouteStrategy::Direct,
            waypoints: Vec::new(),
        };

        assert_eq!(arrow_for(&single, &to, &style).tip, Vec2::new(40.0, 30.0));
        assert_eq!(arrow_for(&empty, &to, &style).tip, to.center());
    }
}
