//! Umwandlung von Wegpunkten in einen Linienzug mit abgerundeten Ecken.

use crate::shared::options::RouteStyle;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};
use std::fmt::Write as _;

/// Drehsinn eines Bogens in Bildschirmkoordinaten (y nach unten)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcSweep {
    /// Im Uhrzeigersinn (SVG sweep-flag 1)
    Clockwise,
    /// Gegen den Uhrzeigersinn (SVG sweep-flag 0)
    CounterClockwise,
}

impl ArcSweep {
    /// SVG-`sweep-flag`.
    pub fn svg_flag(self) -> u8 {
        match self {
            ArcSweep::Clockwise => 1,
            ArcSweep::CounterClockwise => 0,
        }
    }
}

/// Zeichenprimitive für eine beliebige 2D-Vektor-Zeichenfläche
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Stift ohne Zeichnen versetzen
    MoveTo(Vec2),
    /// Gerade Linie zum Punkt
    LineTo(Vec2),
    /// Kreisbogen mit Radius und Drehsinn zum Endpunkt
    ArcTo {
        radius: f32,
        sweep: ArcSweep,
        end: Vec2,
    },
}

/// Folge von Zeichenprimitiven einer Verbindungslinie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundedPath {
    /// Primitive in Zeichenreihenfolge
    pub commands: Vec<PathCommand>,
}

impl RoundedPath {
    /// Anzahl der Bögen (= gerundete Ecken).
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::ArcTo { .. }))
            .count()
    }

    /// Endpunkt des letzten Primitivs.
    pub fn end_point(&self) -> Option<Vec2> {
        self.commands.last().map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::ArcTo { end, .. } => end,
        })
    }

    /// Erzeugt den SVG-`d`-String (`M … L … A …`).
    pub fn to_svg_data(&self) -> String {
        let mut data = String::new();
        for cmd in &self.commands {
            if !data.is_empty() {
                data.push(' ');
            }
            // fmt::Write auf String schlägt nie fehl
            let _ = match *cmd {
                PathCommand::MoveTo(p) => write!(data, "M {} {}", fmt(p.x), fmt(p.y)),
                PathCommand::LineTo(p) => write!(data, "L {} {}", fmt(p.x), fmt(p.y)),
                PathCommand::ArcTo { radius, sweep, end } => write!(
                    data,
                    "A {r} {r} 0 0 {} {} {}",
                    sweep.svg_flag(),
                    fmt(end.x),
                    fmt(end.y),
                    r = fmt(radius)
                ),
            };
        }
        data
    }
}

/// Formatiert eine Koordinate mit max. 3 Nachkommastellen ohne Nullen am Ende.
pub(crate) fn fmt(value: f32) -> String {
    let text = format!("{:.3}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Baut aus Wegpunkten einen Linienzug mit Kreisbögen an jedem inneren Punkt.
///
/// Der Radius wird pro Ecke auf die halbe Länge des kürzeren angrenzenden
/// Segments begrenzt.
pub fn to_rounded_path(waypoints: &[Vec2], style: &RouteStyle) -> RoundedPath {
    let Some(&first) = waypoints.first() else {
        return RoundedPath::default();
    };

    let mut commands = Vec::with_capacity(waypoints.len() * 2);
    commands.push(PathCommand::MoveTo(first));

    for window in waypoints.windows(3) {
        let (prev, corner, next) = (window[0], window[1], window[2]);
        commands.extend(round_corner(prev, corner, next, style.corner_radius));
    }

    if waypoints.len() > 1 {
        commands.push(PathCommand::LineTo(waypoints[waypoints.len() - 1]));
    }

    RoundedPath { commands }
}

/// Liefert Gerade bis zum Bogenanfang plus Bogen, oder nur eine Gerade bei
/// Nullsegmenten und geraden Durchgängen.
fn round_corner(prev: Vec2, corner: Vec2, next: Vec2, max_radius: f32) -> Vec<PathCommand> {
    let incoming = corner - prev;
    let outgoing = next - corner;
    let radius = max_radius
        .min(incoming.length() * 0.5)
        .min(outgoing.length() * 0.5);

    let from_angle = incoming.y.atan2(incoming.x);
    let to_angle = outgoing.y.atan2(outgoing.x);
    let turn = normalize_angle(to_angle - from_angle);

    if radius.is_nan() || radius <= 0.0 || turn == 0.0 {
        return vec![PathCommand::LineTo(corner)];
    }

    let arc_start = corner - Vec2::from_angle(from_angle) * radius;
    let arc_end = corner + Vec2::from_angle(to_angle) * radius;
    let sweep = if turn > 0.0 {
        ArcSweep::Clockwise
    } else {
        ArcSweep::CounterClockwise
    };

    vec![
        PathCommand::LineTo(arc_start),
        PathCommand::ArcTo {
            radius,
            sweep,
            end: arc_end,
        },
    ]
}

/// Bringt einen Winkel in das Intervall (-π, π].
fn normalize_angle(angle: f32) -> f32 {
    let mut wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped -= TAU;
    }
    wrapped
}
