//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Anwendungssteuerung ===
            AppCommand::RequestExit => {
                state.should_exit = true;
                log::info!("Beenden angefordert");
            }

            // === Editing ===
            AppCommand::AddNode {
                kind,
                geometry,
                label,
            } => handlers::editing::add_node(state, kind, geometry, label),
            AppCommand::DeleteSelectedNodes => handlers::editing::delete_selected(state),
            AppCommand::AddConnection {
                from_id,
                to_id,
                bias,
            } => handlers::editing::add_connection(state, from_id, to_id, bias),
            AppCommand::RemoveConnection { connection_id } => {
                handlers::editing::remove_connection(state, connection_id)
            }
            AppCommand::SetConnectionBias {
                connection_id,
                bias,
            } => handlers::editing::set_connection_bias(state, connection_id, bias),
            AppCommand::SetDefaultBias { bias } => {
                handlers::editing::set_default_bias(state, bias)
            }

            // === Selektion ===
            AppCommand::SelectNodeAt {
                canvas_pos,
                additive,
            } => handlers::selection::select_node_at(state, canvas_pos, additive),
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::BeginMoveSelectedNodes => handlers::selection::begin_move(state),
            AppCommand::MoveSelectedNodes { delta } => {
                handlers::selection::move_selected(state, delta)
            }
            AppCommand::EndMoveSelectedNodes => handlers::selection::end_move(state),

            // === Connector-Drag ===
            AppCommand::BeginConnectorDrag { source_id, origin } => {
                handlers::connector::begin(state, source_id, origin)
            }
            AppCommand::UpdateConnectorDrag { canvas_pos } => {
                handlers::connector::update(state, canvas_pos)
            }
            AppCommand::FinishConnectorDrag { canvas_pos } => {
                handlers::connector::finish(state, canvas_pos)
            }
            AppCommand::CancelConnectorDrag => handlers::connector::cancel(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
