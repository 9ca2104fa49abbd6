//! Bounding-Box eines Nodes mit abgeleiteten Ankerpunkten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kleinste erlaubte Kantenlänge einer Node-Geometrie.
const MIN_EXTENT: f32 = 1.0;

/// Position (links oben) und Größe eines Nodes.
///
/// Mittelpunkt und Kantenmitten werden bei jedem Zugriff abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeGeometry {
    /// Linke obere Ecke
    pub position: Vec2,
    /// Breite und Höhe (jeweils > 0)
    pub size: Vec2,
}

impl NodeGeometry {
    /// Erstellt eine Geometrie aus linker oberer Ecke und Größe.
    ///
    /// Nicht-positive Kantenlängen werden auf `MIN_EXTENT` angehoben.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        let clamped = Vec2::new(clamp_extent(size.x), clamp_extent(size.y));
        if clamped != size && size.is_finite() {
            log::warn!(
                "Node-Größe {:?} ungültig, verwende {:?}",
                size.to_array(),
                clamped.to_array()
            );
        }
        Self {
            position,
            size: clamped,
        }
    }

    /// Kurzform für `new(Vec2::new(x, y), Vec2::new(width, height))`.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Halbe Breite und halbe Höhe.
    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Mitte der oberen Kante.
    pub fn edge_up(&self) -> Vec2 {
        Vec2::new(self.position.x + self.size.x * 0.5, self.position.y)
    }

    /// Mitte der unteren Kante.
    pub fn edge_down(&self) -> Vec2 {
        Vec2::new(
            self.position.x + self.size.x * 0.5,
            self.position.y + self.size.y,
        )
    }

    /// Mitte der linken Kante.
    pub fn edge_left(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y + self.size.y * 0.5)
    }

    /// Mitte der rechten Kante.
    pub fn edge_right(&self) -> Vec2 {
        Vec2::new(
            self.position.x + self.size.x,
            self.position.y + self.size.y * 0.5,
        )
    }

    /// Rechte untere Ecke.
    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// `true`, wenn alle Koordinaten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.size.is_finite()
    }

    /// Prüft, ob der Punkt innerhalb der Box (inkl. Rand) liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.position.x && point.x <= max.x && point.y >= self.position.y && point.y <= max.y
    }

    /// Prüft, ob sich zwei Boxen echt überlappen (Berührung zählt nicht).
    pub fn overlaps(&self, other: &NodeGeometry) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.position.x < b_max.x
            && other.position.x < a_max.x
            && self.position.y < b_max.y
            && other.position.y < a_max.y
    }

    /// Gibt eine um `delta` verschobene Kopie zurück.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            position: self.position + delta,
            size: self.size,
        }
    }

    /// Halbe Diagonale (Radius des umschließenden Kreises).
    pub fn bounding_radius(&self) -> f32 {
        self.half_size().length()
    }
}

fn clamp_extent(value: f32) -> f32 {
    // NaN bleibt NaN, der Router fällt dann auf Direct zurück
    if value.is_nan() || value >= MIN_EXTENT {
        value
    } else {
        MIN_EXTENT
    }
}
