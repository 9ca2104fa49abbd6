//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{NodeGeometry, NodeId};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::AddNodeRequested {
            canvas_pos,
            kind,
            label,
        } => {
            let kind = kind.unwrap_or(state.options.default_node_kind);
            let size = state.options.size_for(kind);
            let geometry = NodeGeometry::new(canvas_pos - size * 0.5, size);
            let label = label.unwrap_or_else(|| kind.default_label().to_string());
            vec![AppCommand::AddNode {
                kind,
                geometry,
                label,
            }]
        }
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedNodes],
        AppIntent::NodePickRequested {
            canvas_pos,
            additive,
        } => vec![AppCommand::SelectNodeAt {
            canvas_pos,
            additive,
        }],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        AppIntent::BeginMoveSelectedNodesRequested => vec![AppCommand::BeginMoveSelectedNodes],
        AppIntent::MoveSelectedNodesRequested { delta } => {
            vec![AppCommand::MoveSelectedNodes { delta }]
        }
        AppIntent::EndMoveSelectedNodesRequested => vec![AppCommand::EndMoveSelectedNodes],

        AppIntent::AddConnectionRequested {
            from_id,
            to_id,
            bias,
        } => vec![AppCommand::AddConnection {
            from_id,
            to_id,
            bias: bias.unwrap_or(state.editor.default_bias),
        }],
        AppIntent::RemoveConnectionRequested { connection_id } => {
            vec![AppCommand::RemoveConnection { connection_id }]
        }
        AppIntent::SetConnectionBiasRequested {
            connection_id,
            bias,
        } => vec![AppCommand::SetConnectionBias {
            connection_id,
            bias,
        }],
        AppIntent::SetDefaultBiasRequested { bias } => vec![AppCommand::SetDefaultBias { bias }],

        AppIntent::ConnectorPointerPressed { canvas_pos } => {
            match connector_handle_at(state, canvas_pos) {
                Some((source_id, origin)) => {
                    vec![AppCommand::BeginConnectorDrag { source_id, origin }]
                }
                None => vec![],
            }
        }
        AppIntent::ConnectorPointerMoved { canvas_pos } => {
            if state.editor.connector_drag.is_dragging() {
                vec![AppCommand::UpdateConnectorDrag { canvas_pos }]
            } else {
                vec![]
            }
        }
        AppIntent::ConnectorPointerReleased { canvas_pos } => {
            if state.editor.connector_drag.is_dragging() {
                vec![AppCommand::FinishConnectorDrag { canvas_pos }]
            } else {
                vec![]
            }
        }
        AppIntent::ConnectorDragCancelled => vec![AppCommand::CancelConnectorDrag],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ApplyOptions {
            options: Default::default(),
        }],
    }
}

/// Sucht den Connector-Griff unter `canvas_pos`.
///
/// Liefert Node-ID und obere linke Ecke des Griffs als Drag-Ursprung.
/// Überlappen sich Griffe, gewinnt der zuletzt erstellte Node.
fn connector_handle_at(state: &AppState, canvas_pos: glam::Vec2) -> Option<(NodeId, glam::Vec2)> {
    if !canvas_pos.is_finite() {
        return None;
    }
    let handle_size = state.options.connector_handle_size;
    let char_width = state.options.label_char_width;

    state
        .diagram
        .nodes_iter()
        .filter_map(|node| {
            node.connector_handle(handle_size, char_width)
                .filter(|handle| handle.contains(canvas_pos))
                .map(|handle| (node.id, handle.position))
        })
        .max_by_key(|(id, _)| *id)
}

#[cfg(test)]
mod tests;
