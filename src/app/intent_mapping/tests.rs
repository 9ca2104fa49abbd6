use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{NodeGeometry, NodeKind, RoutingBias};
use crate::shared::EditorOptions;
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn add_node_request_centers_geometry_on_pointer() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::AddNodeRequested {
            canvas_pos: Vec2::new(200.0, 100.0),
            kind: Some(NodeKind::Process),
            label: None,
        },
    );

    assert_eq!(commands.len(), 1);
    let AppCommand::AddNode {
        kind,
        geometry,
        label,
    } = &commands[0]
    else {
        panic!("AddNode erwartet, erhalten: {:?}", commands[0]);
    };
    assert_eq!(*kind, NodeKind::Process);
    assert_eq!(geometry.center(), Vec2::new(200.0, 100.0));
    assert_eq!(geometry.size, state.options.size_for(NodeKind::Process));
    assert_eq!(label, NodeKind::Process.default_label());
}

#[test]
fn add_node_request_uses_default_kind_from_options() {
    let mut state = AppState::new();
    state.options.default_node_kind = NodeKind::End;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::AddNodeRequested {
            canvas_pos: Vec2::ZERO,
            kind: None,
            label: Some("Fertig".into()),
        },
    );

    assert!(matches!(
        &commands[0],
        AppCommand::AddNode { kind: NodeKind::End, label, .. } if label == "Fertig"
    ));
}

#[test]
fn add_connection_without_bias_uses_editor_default() {
    let mut state = AppState::new();
    state.editor.default_bias = RoutingBias::HorizontalStart;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::AddConnectionRequested {
            from_id: 1,
            to_id: 2,
            bias: None,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::AddConnection {
            from_id: 1,
            to_id: 2,
            bias: RoutingBias::HorizontalStart
        }
    ));
}

#[test]
fn connector_press_on_handle_begins_drag_at_handle_corner() {
    let mut state = AppState::new();
    let id = state.diagram_mut().add_node(
        NodeKind::Process,
        NodeGeometry::from_xywh(0.0, 0.0, 100.0, 50.0),
        "Node",
    );
    let handle = state
        .diagram
        .node(id)
        .and_then(|n| {
            n.connector_handle(
                state.options.connector_handle_size,
                state.options.label_char_width,
            )
        })
        .expect("Griff erwartet");

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ConnectorPointerPressed {
            canvas_pos: handle.center(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::BeginConnectorDrag { source_id, origin }
            if source_id == id && origin == handle.position
    ));
}

#[test]
fn connector_press_outside_handles_maps_to_nothing() {
    let mut state = AppState::new();
    state.diagram_mut().add_node(
        NodeKind::Process,
        NodeGeometry::from_xywh(0.0, 0.0, 100.0, 50.0),
        "Node",
    );

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ConnectorPointerPressed {
            canvas_pos: Vec2::new(5.0, 5.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_moves_without_drag_are_dropped() {
    let state = AppState::new();

    let moved = map_intent_to_commands(
        &state,
        AppIntent::ConnectorPointerMoved {
            canvas_pos: Vec2::ONE,
        },
    );
    let released = map_intent_to_commands(
        &state,
        AppIntent::ConnectorPointerReleased {
            canvas_pos: Vec2::ONE,
        },
    );

    assert!(moved.is_empty());
    assert!(released.is_empty());
}

#[test]
fn reset_options_maps_to_default_options() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResetOptionsRequested);

    assert!(matches!(
        &commands[0],
        AppCommand::ApplyOptions { options } if *options == EditorOptions::default()
    ));
}
