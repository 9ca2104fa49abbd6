//! Offene Pfeilspitze ("v") am Ende einer Verbindung.

use super::path::fmt;
use crate::shared::options::RouteStyle;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Spitze und die beiden Flügelpunkte eines offenen Pfeils.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrowhead {
    /// Pfeilspitze (= letzter Wegpunkt)
    pub tip: Vec2,
    /// Flügel auf der Seite `Richtung − 90°`
    pub left: Vec2,
    /// Flügel auf der Seite `Richtung + 90°`
    pub right: Vec2,
}

impl Arrowhead {
    /// Die zwei unabhängigen Striche Spitze→Flügel.
    pub fn strokes(&self) -> [(Vec2, Vec2); 2] {
        [(self.tip, self.left), (self.tip, self.right)]
    }

    /// SVG-`d`-String mit zwei getrennten Strichen.
    pub fn to_svg_data(&self) -> String {
        format!(
            "M {tx} {ty} L {} {} M {tx} {ty} L {} {}",
            fmt(self.left.x),
            fmt(self.left.y),
            fmt(self.right.x),
            fmt(self.right.y),
            tx = fmt(self.tip.x),
            ty = fmt(self.tip.y),
        )
    }
}

/// Berechnet den Pfeil für das letzte Segment `start → end`.
///
/// Ein Segment der Länge 0 zeigt nach rechts (atan2(0, 0) = 0).
pub fn arrowhead(start: Vec2, end: Vec2, style: &RouteStyle) -> Arrowhead {
    let delta = end - start;
    let direction = Vec2::from_angle(delta.y.atan2(delta.x));
    // perp() = Richtung + 90°
    let normal = direction.perp();
    let base = end - direction * style.arrow_length;

    Arrowhead {
        tip: end,
        left: base - normal * style.arrow_width,
        right: base + normal * style.arrow_width,
    }
}
