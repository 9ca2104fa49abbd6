use super::*;
use crate::routing::RouteStrategy;

fn process(diagram: &mut Diagram, x: f32, y: f32) -> NodeId {
    diagram.add_node(
        NodeKind::Process,
        NodeGeometry::from_xywh(x, y, 100.0, 50.0),
        "Node",
    )
}

#[test]
fn test_diagram_creation() {
    let mut diagram = Diagram::default();
    let a = process(&mut diagram, 0.0, 0.0);
    let b = process(&mut diagram, 200.0, 0.0);

    assert_eq!((a, b), (1, 2));
    assert_eq!(diagram.next_node_id(), 3);
    assert_eq!(diagram.node_count(), 2);
    assert_eq!(diagram.connection_count(), 0);
}

#[test]
fn test_add_connection_routes_and_links_both_nodes() {
    let mut diagram = Diagram::default();
    let a = process(&mut diagram, 50.0, 50.0);
    let b = process(&mut diagram, 50.0, 200.0);

    let id = diagram
        .add_connection(a, b, RoutingBias::Auto)
        .expect("Verbindung erwartet");

    let connection = diagram.connection(id).expect("Verbindung erwartet");
    assert_eq!(connection.shape.strategy, RouteStrategy::SingleVertical);
    assert_eq!(
        connection.shape.waypoints,
        vec![Vec2::new(100.0, 100.0), Vec2::new(100.0, 200.0)]
    );
    for node_id in [a, b] {
        let node = diagram.node(node_id).expect("Node erwartet");
        assert_eq!(node.connection_ids().collect::<Vec<_>>(), vec![id]);
    }
    assert_eq!(diagram.find_connection(a, b), Some(id));
    assert_eq!(diagram.find_connection(b, a), None);
}

#[test]
fn test_invalid_connections_are_rejected() {
    let mut diagram = Diagram::default();
    let a = process(&mut diagram, 0.0, 0.0);
    let b = process(&mut diagram, 200.0, 0.0);

    assert!(diagram.add_connection(a, a, RoutingBias::Auto).is_err());
    assert!(diagram.add_connection(a, 99, RoutingBias::Auto).is_err());
    assert!(diagram.add_connection(99, b, RoutingBias::Auto).is_err());

    diagram
        .add_connection(a, b, RoutingBias::Auto)
        .expect("erste Verbindung erwartet");
    assert!(diagram.add_connection(a, b, RoutingBias::VerticalStart).is_err());
    // Gegenrichtung ist eine eigene Verbindung
    assert!(diagram.add_connection(b, a, RoutingBias::Auto).is_ok());
    assert_eq!(diagram.connection_count(), 2);
}

#[test]
fn test_moving_node_reroutes_incident_connections() {
    let mut diagram = Diagram::default();
    let a = process(&mut diagram, 50.0, 50.0);
    let b = process(&mut diagram, 50.0, 200.0);
    let id = diagram
        .add_connection(a, b, RoutingBias::Auto)
        .expect("Verbindung erwartet");

    assert!(diagram.set_node_position(b, Vec2::new(200.0, 150.0)));

    let connection = diagram.connection(id).expect("Verbindung erwartet");
    assert_eq!(connection.shape.strategy, RouteStrategy::ElbowHorizontalFirst);
    assert_eq!(
        connection.shape.waypoints,
        vec![
            Vec2::new(150.0, 75.0),
            Vec2::new(250.0, 75.0),
            Vec2::new(250.0, 150.0),
        ]
    );
    assert_eq!(connection.shape.arrow.tip, Vec2::new(250.0, 150.0));
}

#[test]
fn test_move_node_by_matches_absolute_move() {
    let mut by_delta = Diagram::default();
    let a = process(&mut by_delta, 50.0, 50.0);
    let b = process(&mut by_delta, 50.0, 200.0);
    by_delta
        .add_connection(a, b, RoutingBias::Auto)
        .expect("Verbindung erwartet");
    let mut absolute = by_delta.clone();

    assert!(by_delta.move_node_by(b, Vec2::new(150.0, -50.0)));
    assert!(absolute.set_node_position(b, Vec2::new(200.0, 150.0)));

    let shape = |d: &Diagram| d.connections_iter().next().map(|c| c.shape.clone());
    assert_eq!(shape(&by_delta), shape(&absolute));
    assert!(!by_delta.move_node_by(42, Vec2::ONE));
}

#[test]
fn test_remove_node_removes_incident_connections_first() {
    let mut diagram = Diagram::default();
    let a = process(&mut diagram, 0.0, 0.0);
    let b = process(&mut diagram, 200.0, 0.0);
    let c = process(&mut diagram, 0.0, 200.0);
    let ab = diagram
        .add_connection(a, b, RoutingBias::Auto)
        .expect("Verbindung erwartet");
    let ca = diagram
        .add_connection(c, a, RoutingBias::Auto)
        .expect("Verbindung erwartet");
    let bc = diagram
        .add_connection(b, c, RoutingBias::Auto)
        .expect("Verbindung erwartet");

    let removed = diagram.remove_node(a).expect("Node erwartet");

    assert_eq!(removed.id, a);
    assert!(diagram.connection(ab).is_none());
    assert!(diagram.connection(ca).is_none());
    assert!(diagram.connection(bc).is_some());
    assert_eq!(diagram.node(b).map(FlowNode::connection_count), Some(1));
    assert_eq!(diagram.node(c).map(FlowNode::connection_count), Some(1));
    // Keine Verbindung verweist auf einen entfernten Node
    assert!(diagram
        .connections_iter()
        .all(|conn| diagram.has_node(conn.from_id) && diagram.has_node(conn.to_id)));
    assert!(diagram.remove_node(a).is_none());
}

#[test]
fn test_remove_connection_detaches_back_references() {
    let mut diagram = Diagram::default();
    let a = process(&mut diagram, 0.0, 0.0);
    let b = process(&mut diagram, 200.0, 0.0);
    let id = diagram
        .add_connection(a, b, RoutingBias::Auto)
        .expect("Verbindung erwartet");

    assert!(diagram.remove_connection(id).is_some());
    assert_eq!(diagram.node(a).map(FlowNode::connection_count), Some(0));
    assert_eq!(diagram.node(b).map(FlowNode::connection_count), Some(0));
    assert!(diagram.remove_connection(id).is_none());
}

#[test]
fn test_set_connection_bias_reroutes_immediately() {
    let mut diagram = Diagram::default();
    let a = process(&mut diagram, 0.0, 0.0);
    let b = process(&mut diagram, 200.0, 150.0);
    let id = diagram
        .add_connection(a, b, RoutingBias::Auto)
        .expect("Verbindung erwartet");

    assert!(diagram.set_connection_bias(id, RoutingBias::VerticalStart));

    let connection = diagram.connection(id).expect("Verbindung erwartet");
    assert_eq!(connection.bias, RoutingBias::VerticalStart);
    assert_eq!(connection.shape.strategy, RouteStrategy::ElbowVerticalFirst);
    assert!(!diagram.set_connection_bias(99, RoutingBias::Auto));
}

#[test]
fn test_set_style_reroutes_all_connections() {
    let mut diagram = Diagram::default();
    let a = process(&mut diagram, 0.0, 0.0);
    let b = process(&mut diagram, 140.0, 0.0);
    let id = diagram
        .add_connection(a, b, RoutingBias::Auto)
        .expect("Verbindung erwartet");
    assert_eq!(
        diagram.connection(id).map(|c| c.shape.strategy),
        Some(RouteStrategy::SingleHorizontal)
    );

    // Lücke von 40 reicht bei min_node_gap = 50 nicht mehr
    diagram.set_style(RouteStyle {
        min_node_gap: 50.0,
        ..RouteStyle::default()
    });

    assert_eq!(
        diagram.connection(id).map(|c| c.shape.strategy),
        Some(RouteStrategy::OutsideHorizontal)
    );
}

#[test]
fn test_node_at_follows_moves_and_deletes() {
    let mut diagram = Diagram::default();
    let a = process(&mut diagram, 0.0, 0.0);

    assert_eq!(diagram.node_at(Vec2::new(10.0, 10.0)), Some(a));

    diagram.set_node_position(a, Vec2::new(300.0, 300.0));
    assert_eq!(diagram.node_at(Vec2::new(10.0, 10.0)), None);
    assert_eq!(diagram.node_at(Vec2::new(310.0, 310.0)), Some(a));

    diagram.remove_node(a);
    assert_eq!(diagram.node_at(Vec2::new(310.0, 310.0)), None);
}

#[test]
fn test_many_nodes_on_the_same_spot() {
    let mut diagram = Diagram::default();
    let ids: Vec<NodeId> = (0..40).map(|_| process(&mut diagram, 0.0, 0.0)).collect();

    assert_eq!(diagram.node_count(), 40);
    assert_eq!(diagram.node_at(Vec2::new(50.0, 25.0)), ids.last().copied());

    assert!(diagram.remove_node(ids[39]).is_some());
    assert_eq!(diagram.node_at(Vec2::new(50.0, 25.0)), Some(ids[38]));
}

#[test]
fn test_start_node_is_no_drop_target() {
    let mut diagram = Diagram::default();
    let start = diagram.add_node(
        NodeKind::Start,
        NodeGeometry::from_xywh(0.0, 0.0, 40.0, 40.0),
        "S",
    );

    assert_eq!(diagram.node_at(Vec2::new(20.0, 20.0)), Some(start));
    assert_eq!(diagram.drop_target_at(Vec2::new(20.0, 20.0)), None);
}
