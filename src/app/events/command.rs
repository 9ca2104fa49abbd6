use crate::core::{ConnectionId, NodeGeometry, NodeId, NodeKind, RoutingBias};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,

    /// Neuen Node mit fertiger Geometrie hinzufügen
    AddNode {
        kind: NodeKind,
        geometry: NodeGeometry,
        label: String,
    },
    /// Selektierte Nodes löschen
    DeleteSelectedNodes,
    /// Node unter der Position selektieren
    SelectNodeAt {
        canvas_pos: glam::Vec2,
        additive: bool,
    },
    /// Selektion aufheben
    ClearSelection,

    /// Move-Lifecycle: Verschieben starten (Undo-Snapshot)
    BeginMoveSelectedNodes,
    /// Selektierte Nodes um Delta verschieben
    MoveSelectedNodes { delta: glam::Vec2 },
    /// Move-Lifecycle: Verschieben beenden
    EndMoveSelectedNodes,

    /// Verbindung zwischen zwei Nodes erstellen
    AddConnection {
        from_id: NodeId,
        to_id: NodeId,
        bias: RoutingBias,
    },
    /// Verbindung entfernen
    RemoveConnection { connection_id: ConnectionId },
    /// Routing-Bias einer Verbindung setzen
    SetConnectionBias {
        connection_id: ConnectionId,
        bias: RoutingBias,
    },
    /// Standard-Bias für neue Verbindungen setzen
    SetDefaultBias { bias: RoutingBias },

    /// Connector-Drag am Griff eines Nodes starten
    BeginConnectorDrag {
        source_id: NodeId,
        origin: glam::Vec2,
    },
    /// Vorschau-Linie und Hover-Ziel aktualisieren
    UpdateConnectorDrag { canvas_pos: glam::Vec2 },
    /// Connector-Drag beenden (verbinden oder verwerfen)
    FinishConnectorDrag { canvas_pos: glam::Vec2 },
    /// Connector-Drag verwerfen
    CancelConnectorDrag,

    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    /// Optionen anwenden
    ApplyOptions { options: EditorOptions },
}
