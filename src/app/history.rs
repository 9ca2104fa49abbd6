use super::SelectionState;
use crate::core::Diagram;
use std::collections::VecDeque;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Diagramm-Klon passiert erst beim nächsten
/// `Arc::make_mut()` in einem Use-Case.
#[derive(Clone)]
pub struct Snapshot {
    /// Diagramm zum Zeitpunkt des Snapshots
    pub diagram: Arc<Diagram>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            diagram: Arc::clone(&state.diagram),
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    ///
    /// Die Verbindungsformen im Snapshot wurden beim Aufnehmen aus den
    /// damaligen Geometrien berechnet und passen daher ohne Neuberechnung.
    /// Der Routing-Stil in den Optionen folgt dem wiederhergestellten Diagramm.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.options.route = *self.diagram.style();
        state.diagram = self.diagram;
        state.selection = self.selection;
    }
}

/// Undo/Redo-Manager mit begrenzter Tiefe.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(max_depth),
            redo_stack: VecDeque::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen vorab gebauten Snapshot ab und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        push_bounded(&mut self.undo_stack, snap, self.max_depth);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Snapshot und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop_back()?;
        push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(prev)
    }

    /// Holt den letzten Redo-Snapshot und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop_back()?;
        push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }
}

/// Hängt an und verwirft den ältesten Eintrag bei voller Tiefe.
fn push_bounded(stack: &mut VecDeque<Snapshot>, snap: Snapshot, max_depth: usize) {
    if max_depth == 0 {
        return;
    }
    if stack.len() >= max_depth {
        stack.pop_front();
    }
    stack.push_back(snap);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::{NodeGeometry, NodeKind};

    fn make_snapshot_with_node_count(count: usize) -> Snapshot {
        let mut state = AppState::new();
        for i in 0..count {
            let f = i as f32;
            state.diagram_mut().add_node(
                NodeKind::Process,
                NodeGeometry::from_xywh(f * 150.0, 0.0, 100.0, 50.0),
                "Node",
            );
        }
        Snapshot::from_state(&state)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_redo_swaps_snapshots() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_node_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_node_count(5))
            .expect("undo vorhanden");
        assert_eq!(restored.diagram.node_count(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());

        let redone = history
            .pop_redo_with_current(make_snapshot_with_node_count(2))
            .expect("redo vorhanden");
        assert_eq!(redone.diagram.node_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_node_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_node_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_node_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_node_count(i));
        }

        let mut restored_counts = Vec::new();
        while let Some(snap) = history.pop_undo_with_current(make_snapshot_with_node_count(0)) {
            restored_counts.push(snap.diagram.node_count());
        }
        // Älteste zwei Einträge wurden verworfen
        assert_eq!(restored_counts, vec![5, 4, 3]);
    }

    #[test]
    fn snapshot_shares_diagram_until_mutation() {
        let mut state = AppState::new();
        state.diagram_mut().add_node(
            NodeKind::Start,
            NodeGeometry::from_xywh(0.0, 0.0, 40.0, 40.0),
            "S",
        );
        let snap = Snapshot::from_state(&state);
        assert!(Arc::ptr_eq(&snap.diagram, &state.diagram));

        state.diagram_mut().add_node(
            NodeKind::End,
            NodeGeometry::from_xywh(0.0, 100.0, 40.0, 40.0),
            "E",
        );

        assert_eq!(snap.diagram.node_count(), 1);
        assert_eq!(state.diagram.node_count(), 2);
    }
}
