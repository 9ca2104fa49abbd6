use crate::core::{ConnectionId, NodeId, NodeKind, RoutingBias};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,

    /// Neuen Node mit Mittelpunkt an Canvas-Position hinzufügen
    AddNodeRequested {
        canvas_pos: glam::Vec2,
        /// `None` = Node-Art aus den Optionen
        kind: Option<NodeKind>,
        /// `None` = Standard-Label der Node-Art
        label: Option<String>,
    },
    /// Selektierte Nodes löschen
    DeleteSelectedRequested,
    /// Node unter dem Zeiger selektieren
    NodePickRequested {
        canvas_pos: glam::Vec2,
        additive: bool,
    },
    /// Selektion aufheben
    ClearSelectionRequested,

    /// Move-Lifecycle Start: Drag-Verschieben selektierter Nodes beginnen
    BeginMoveSelectedNodesRequested,
    /// Move-Lifecycle Update: Selektierte Nodes um Delta verschieben
    MoveSelectedNodesRequested { delta: glam::Vec2 },
    /// Move-Lifecycle Ende: Drag-Verschieben abgeschlossen
    EndMoveSelectedNodesRequested,

    /// Verbindung zwischen zwei Nodes erstellen (via Shortcut/Panel)
    AddConnectionRequested {
        from_id: NodeId,
        to_id: NodeId,
        /// `None` = Standard-Bias des Editors
        bias: Option<RoutingBias>,
    },
    /// Verbindung entfernen
    RemoveConnectionRequested { connection_id: ConnectionId },
    /// Routing-Bias einer Verbindung ändern
    SetConnectionBiasRequested {
        connection_id: ConnectionId,
        bias: RoutingBias,
    },
    /// Standard-Bias für neue Verbindungen ändern
    SetDefaultBiasRequested { bias: RoutingBias },

    /// Zeiger auf einem Connector-Griff gedrückt
    ConnectorPointerPressed { canvas_pos: glam::Vec2 },
    /// Zeiger während eines Connector-Drags bewegt
    ConnectorPointerMoved { canvas_pos: glam::Vec2 },
    /// Zeiger nach einem Connector-Drag losgelassen
    ConnectorPointerReleased { canvas_pos: glam::Vec2 },
    /// Connector-Drag abbrechen (Escape)
    ConnectorDragCancelled,

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
