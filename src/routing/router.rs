//! Orthogonales Verbindungs-Routing zwischen zwei Nodes.
//!
//! Reine Funktion: gleiche Geometrien und gleicher Bias ergeben immer dieselben
//! Wegpunkte. Es werden nur die beiden Endpunkt-Nodes betrachtet, keine
//! weiteren Hindernisse.

use crate::core::{NodeGeometry, RoutingBias};
use crate::shared::options::RouteStyle;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Gewählte Routing-Strategie (in Prüfreihenfolge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteStrategy {
    /// 1 Segment, senkrecht (Mittelpunkte in gleicher Spalte)
    SingleVertical,
    /// 1 Segment, waagerecht (Mittelpunkte in gleicher Zeile)
    SingleHorizontal,
    /// 2 Segmente, Start waagerecht
    ElbowHorizontalFirst,
    /// 2 Segmente, Start senkrecht
    ElbowVerticalFirst,
    /// 3 Segmente zwischen den Nodes, waagerechter Versatz auf halber Höhe
    InsideVertical,
    /// 3 Segmente zwischen den Nodes, senkrechter Versatz auf halber Breite
    InsideHorizontal,
    /// 3 Segmente außen um beide Nodes herum (links/rechts)
    OutsideHorizontal,
    /// 3 Segmente außen um beide Nodes herum (oben/unten)
    OutsideVertical,
    /// Gerade Linie ohne Knick (Überlappung oder ungültige Geometrie)
    Direct,
}

impl RouteStrategy {
    /// Anzahl der Segmente dieser Strategie.
    pub fn segment_count(self) -> usize {
        match self {
            RouteStrategy::SingleVertical | RouteStrategy::SingleHorizontal | RouteStrategy::Direct => 1,
            RouteStrategy::ElbowHorizontalFirst | RouteStrategy::ElbowVerticalFirst => 2,
            RouteStrategy::InsideVertical
            | RouteStrategy::InsideHorizontal
            | RouteStrategy::OutsideHorizontal
            | RouteStrategy::OutsideVertical => 3,
        }
    }
}

/// Ergebnis des Routings: Strategie und 2–4 Wegpunkte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Gewählte Strategie
    pub strategy: RouteStrategy,
    /// Wegpunkte; erster = Startanker, letzter = Zielanker
    pub waypoints: Vec<Vec2>,
}

impl Route {
    fn new(strategy: RouteStrategy, waypoints: Vec<Vec2>) -> Self {
        Self {
            strategy,
            waypoints,
        }
    }

    /// Letztes Segment (für die Pfeilspitze).
    pub fn last_segment(&self) -> Option<(Vec2, Vec2)> {
        match self.waypoints.as_slice() {
            [.., a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Aus zwei Geometrien abgeleitete Lage-Prädikate.
#[derive(Debug, Clone, Copy)]
struct Placement {
    to_right: bool,
    to_down: bool,
    aligned_h: bool,
    aligned_v: bool,
    clear_h: bool,
    clear_v: bool,
    fits_elbow_h: bool,
    fits_elbow_v: bool,
}

impl Placement {
    fn measure(from: &NodeGeometry, to: &NodeGeometry, style: &RouteStyle) -> Self {
        let from_center = from.center();
        let to_center = to.center();
        let to_right = to_center.x > from_center.x;
        let to_down = to_center.y > from_center.y;
        let dx = (from_center.x - to_center.x).abs();
        let dy = (from_center.y - to_center.y).abs();

        // Abstand der zugewandten Kanten, gemessen in Achsrichtung
        let gap_h = if to_right {
            to.edge_left().x - from.edge_right().x
        } else {
            from.edge_left().x - to.edge_right().x
        };
        let gap_v = if to_down {
            to.edge_up().y - from.edge_down().y
        } else {
            from.edge_up().y - to.edge_down().y
        };
        let clear_h = gap_h >= style.min_node_gap;
        let clear_v = gap_v >= style.min_node_gap;

        Self {
            to_right,
            to_down,
            aligned_h: dx <= style.corner_radius,
            aligned_v: dy <= style.corner_radius,
            clear_h,
            clear_v,
            fits_elbow_h: clear_h && dy - from.half_size().y >= style.min_segment_clearance,
            fits_elbow_v: clear_v && dx - to.half_size().x >= style.min_segment_clearance,
        }
    }
}

/// Berechnet die Wegpunkte einer Verbindung von `from` nach `to`.
///
/// Die erste passende Regel gewinnt. Ein Bias sperrt nur die Regeln, die über
/// die jeweils andere Kantenorientierung starten.
pub fn route(
    from: &NodeGeometry,
    to: &NodeGeometry,
    bias: RoutingBias,
    style: &RouteStyle,
) -> Route {
    if !from.is_finite() || !to.is_finite() {
        log::warn!("Nicht-endliche Node-Geometrie, verwende direkte Linie");
        return direct(from, to, bias);
    }
    if from.overlaps(to) {
        return direct(from, to, bias);
    }

    let p = Placement::measure(from, to, style);
    let vertical = bias.allows_vertical_start();
    let horizontal = bias.allows_horizontal_start();

    let route = if vertical && p.aligned_h && p.clear_v {
        let (launch, arrival) = facing_vertical(from, to, p.to_down);
        Route::new(
            RouteStrategy::SingleVertical,
            vec![launch, Vec2::new(launch.x, arrival.y)],
        )
    } else if horizontal && p.aligned_v && p.clear_h {
        let (launch, arrival) = facing_horizontal(from, to, p.to_right);
        Route::new(
            RouteStrategy::SingleHorizontal,
            vec![launch, Vec2::new(arrival.x, launch.y)],
        )
    } else if horizontal && p.fits_elbow_h {
        let launch = if p.to_right { from.edge_right() } else { from.edge_left() };
        let arrival = if p.to_down { to.edge_up() } else { to.edge_down() };
        Route::new(
            RouteStrategy::ElbowHorizontalFirst,
            vec![launch, Vec2::new(arrival.x, launch.y), arrival],
        )
    } else if vertical && p.fits_elbow_v {
        let launch = if p.to_down { from.edge_down() } else { from.edge_up() };
        let arrival = if p.to_right { to.edge_left() } else { to.edge_right() };
        Route::new(
            RouteStrategy::ElbowVerticalFirst,
            vec![launch, Vec2::new(launch.x, arrival.y), arrival],
        )
    } else if vertical && p.clear_v {
        let (launch, arrival) = facing_vertical(from, to, p.to_down);
        let mid_y = (launch.y + arrival.y) * 0.5;
        Route::new(
            RouteStrategy::InsideVertical,
            vec![
                launch,
                Vec2::new(launch.x, mid_y),
                Vec2::new(arrival.x, mid_y),
                arrival,
            ],
        )
    } else if horizontal && p.clear_h {
        let (launch, arrival) = facing_horizontal(from, to, p.to_right);
        let mid_x = (launch.x + arrival.x) * 0.5;
        Route::new(
            RouteStrategy::InsideHorizontal,
            vec![
                launch,
                Vec2::new(mid_x, launch.y),
                Vec2::new(mid_x, arrival.y),
                arrival,
            ],
        )
    } else if horizontal {
        outside_horizontal(from, to, p.to_right, style)
    } else {
        outside_vertical(from, to, p.to_down, style)
    };

    log::debug!("Route {:?} mit {} Wegpunkten", route.strategy, route.waypoints.len());
    route
}

/// Zugewandte obere/untere Kantenmitten (Start, Ziel).
fn facing_vertical(from: &NodeGeometry, to: &NodeGeometry, to_down: bool) -> (Vec2, Vec2) {
    if to_down {
        (from.edge_down(), to.edge_up())
    } else {
        (from.edge_up(), to.edge_down())
    }
}

/// Zugewandte linke/rechte Kantenmitten (Start, Ziel).
fn facing_horizontal(from: &NodeGeometry, to: &NodeGeometry, to_right: bool) -> (Vec2, Vec2) {
    if to_right {
        (from.edge_right(), to.edge_left())
    } else {
        (from.edge_left(), to.edge_right())
    }
}

/// Start und Ziel auf derselben Seite, Versatz `min_node_gap` außerhalb beider Nodes.
fn outside_horizontal(
    from: &NodeGeometry,
    to: &NodeGeometry,
    to_right: bool,
    style: &RouteStyle,
) -> Route {
    let (launch, arrival, mid_x) = if to_right {
        let (launch, arrival) = (from.edge_right(), to.edge_right());
        (launch, arrival, launch.x.max(arrival.x) + style.min_node_gap)
    } else {
        let (launch, arrival) = (from.edge_left(), to.edge_left());
        (launch, arrival, launch.x.min(arrival.x) - style.min_node_gap)
    };
    Route::new(
        RouteStrategy::OutsideHorizontal,
        vec![
            launch,
            Vec2::new(mid_x, launch.y),
            Vec2::new(mid_x, arrival.y),
            arrival,
        ],
    )
}

/// Senkrechtes Gegenstück zu `outside_horizontal` (oben/unten).
fn outside_vertical(
    from: &NodeGeometry,
    to: &NodeGeometry,
    to_down: bool,
    style: &RouteStyle,
) -> Route {
    let (launch, arrival, mid_y) = if to_down {
        let (launch, arrival) = (from.edge_down(), to.edge_down());
        (launch, arrival, launch.y.max(arrival.y) + style.min_node_gap)
    } else {
        let (launch, arrival) = (from.edge_up(), to.edge_up());
        (launch, arrival, launch.y.min(arrival.y) - style.min_node_gap)
    };
    Route::new(
        RouteStrategy::OutsideVertical,
        vec![
            launch,
            Vec2::new(launch.x, mid_y),
            Vec2::new(arrival.x, mid_y),
            arrival,
        ],
    )
}

/// Gerade Linie zwischen den nach Quadrant nächstgelegenen Ankern.
fn direct(from: &NodeGeometry, to: &NodeGeometry, bias: RoutingBias) -> Route {
    let from_center = from.center();
    let to_center = to.center();
    // Vergleiche mit NaN ergeben false → Quadrant "links oben"
    let to_right = to_center.x > from_center.x;
    let to_down = to_center.y > from_center.y;

    let launch = match (bias, to_down, to_right) {
        (RoutingBias::HorizontalStart, _, true) => from.edge_right(),
        (RoutingBias::HorizontalStart, _, false) => from.edge_left(),
        (_, true, _) => from.edge_down(),
        (_, false, _) => from.edge_up(),
    };
    let arrival = if to_right { to.edge_left() } else { to.edge_right() };

    Route::new(RouteStrategy::Direct, vec![launch, arrival])
}
