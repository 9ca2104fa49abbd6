//! Zustandsautomat für das Ziehen einer neuen Verbindung vom Connector-Griff.
//!
//! `Idle → Dragging → {Connected, Cancelled}`; die beiden Endzustände werden
//! als [`DragOutcome`] zurückgegeben, danach ist der Automat wieder `Idle`.

use crate::core::{NodeId, NodeLocator};
use glam::Vec2;

/// Laufender Zustand des Connector-Drags.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ConnectorDrag {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Vorschau-Linie folgt dem Zeiger
    Dragging {
        /// Node, dessen Griff gezogen wird
        source: NodeId,
        /// Startpunkt der Vorschau-Linie (Griff-Position)
        origin: Vec2,
        /// Aktueller Endpunkt der Vorschau-Linie
        pointer: Vec2,
        /// Drop-Ziel unter dem Zeiger (ohne Quelle), wird hervorgehoben
        hovered: Option<NodeId>,
    },
}

/// Ergebnis eines beendeten Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Über einem fremden Node losgelassen
    Connected { from: NodeId, to: NodeId },
    /// Ins Leere, auf die Quelle oder mit ungültiger Position losgelassen
    Cancelled,
}

impl ConnectorDrag {
    /// Startet einen Drag; ein laufender Drag wird verworfen.
    pub fn begin(&mut self, source: NodeId, origin: Vec2) {
        if self.is_dragging() {
            log::debug!("Connector-Drag: laufender Drag wird ersetzt");
        }
        *self = ConnectorDrag::Dragging {
            source,
            origin,
            pointer: origin,
            hovered: None,
        };
        log::debug!("Connector-Drag: Start an Node {source}");
    }

    /// Aktualisiert Vorschau-Endpunkt und Hover-Ziel.
    ///
    /// Nicht-endliche Positionen werden ignoriert.
    pub fn update(&mut self, pointer_pos: Vec2, locator: &impl NodeLocator) {
        let ConnectorDrag::Dragging {
            source,
            pointer,
            hovered,
            ..
        } = self
        else {
            return;
        };
        if !pointer_pos.is_finite() {
            return;
        }
        let source = *source;
        *pointer = pointer_pos;
        *hovered = locator
            .drop_target_at(pointer_pos)
            .filter(|&id| id != source);
    }

    /// Beendet den Drag an `pointer_pos` und liefert das Ergebnis.
    ///
    /// `None`, wenn kein Drag aktiv war.
    pub fn finish(&mut self, pointer_pos: Vec2, locator: &impl NodeLocator) -> Option<DragOutcome> {
        let ConnectorDrag::Dragging { source, .. } = std::mem::take(self) else {
            return None;
        };

        let target = pointer_pos
            .is_finite()
            .then(|| locator.drop_target_at(pointer_pos))
            .flatten()
            .filter(|&id| id != source);

        let outcome = match target {
            Some(to) => DragOutcome::Connected { from: source, to },
            None => DragOutcome::Cancelled,
        };
        log::debug!("Connector-Drag beendet: {outcome:?}");
        Some(outcome)
    }

    /// Bricht einen laufenden Drag ab. Gibt `true` zurück, wenn einer lief.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = ConnectorDrag::Idle;
        was_dragging
    }

    /// `true` während eines Drags.
    pub fn is_dragging(&self) -> bool {
        matches!(self, ConnectorDrag::Dragging { .. })
    }

    /// Quell-Node des laufenden Drags.
    pub fn source(&self) -> Option<NodeId> {
        match *self {
            ConnectorDrag::Dragging { source, .. } => Some(source),
            ConnectorDrag::Idle => None,
        }
    }

    /// Hervorzuhebender Node unter dem Zeiger.
    pub fn hovered(&self) -> Option<NodeId> {
        match *self {
            ConnectorDrag::Dragging { hovered, .. } => hovered,
            ConnectorDrag::Idle => None,
        }
    }

    /// Vorschau-Linie `(origin, pointer)`.
    pub fn preview_line(&self) -> Option<(Vec2, Vec2)> {
        match *self {
            ConnectorDrag::Dragging {
                origin, pointer, ..
            } => Some((origin, pointer)),
            ConnectorDrag::Idle => None,
        }
    }
}
