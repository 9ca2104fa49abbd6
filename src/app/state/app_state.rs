use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::Diagram;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorState, SelectionState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das Diagramm (Arc für O(1)-Snapshots, Mutation über `Arc::make_mut`)
    pub diagram: Arc<Diagram>,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-State (Standard-Bias, Connector-Drag)
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Routing, Farben, Größen)
    pub options: EditorOptions,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            diagram: Arc::new(Diagram::new(options.route)),
            selection: SelectionState::new(),
            editor: EditorState::new(options.default_bias),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(200),
            options,
            should_exit: false,
        }
    }

    /// Mutabler Zugriff auf das Diagramm (CoW: klont nur bei geteiltem Snapshot).
    pub fn diagram_mut(&mut self) -> &mut Diagram {
        Arc::make_mut(&mut self.diagram)
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.diagram.node_count()
    }

    /// Gibt die Anzahl der Connections zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.diagram.connection_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
