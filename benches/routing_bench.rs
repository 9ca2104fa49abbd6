use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flowline_editor::routing::compute_shape;
use flowline_editor::{
    Diagram, FlowNode, NodeGeometry, NodeId, NodeKind, NodeLocator, RouteStyle, RoutingBias,
    SpatialIndex,
};
use glam::Vec2;
use std::collections::HashMap;
use std::hint::black_box;

/// Nodes im Raster, leicht versetzt, damit alle Strategien vorkommen.
fn build_grid_nodes(node_count: usize) -> HashMap<NodeId, FlowNode> {
    (0..node_count)
        .map(|index| {
            let id = (index as u64) + 1;
            let column = (index % 100) as f32;
            let row = (index / 100) as f32;
            let x = column * 160.0 + (row * 13.0) % 40.0;
            let y = row * 110.0 + (column * 7.0) % 30.0;
            let geometry = NodeGeometry::from_xywh(x, y, 100.0, 50.0);
            (id, FlowNode::new(id, NodeKind::Process, geometry, "Node"))
        })
        .collect()
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 16_000) as f32 + 0.37;
            let y = ((i * 53) % 11_000) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_compute_shape(c: &mut Criterion) {
    let style = RouteStyle::default();
    let from = NodeGeometry::from_xywh(0.0, 0.0, 100.0, 50.0);
    let targets: Vec<NodeGeometry> = build_grid_nodes(400)
        .into_values()
        .map(|node| node.geometry)
        .collect();

    c.bench_function("compute_shape_400_targets", |b| {
        b.iter(|| {
            let mut waypoints = 0usize;
            for to in &targets {
                for bias in [
                    RoutingBias::Auto,
                    RoutingBias::VerticalStart,
                    RoutingBias::HorizontalStart,
                ] {
                    let shape = compute_shape(black_box(&from), black_box(to), bias, &style);
                    waypoints += shape.waypoints.len();
                }
            }
            black_box(waypoints)
        })
    });
}

fn bench_reroute_on_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("reroute_on_move");

    for &fan_out in &[10usize, 100usize] {
        let mut diagram = Diagram::new(RouteStyle::default());
        let hub = diagram.add_node(
            NodeKind::Process,
            NodeGeometry::from_xywh(0.0, 0.0, 100.0, 50.0),
            "Hub",
        );
        for i in 0..fan_out {
            let f = i as f32;
            let leaf = diagram.add_node(
                NodeKind::Process,
                NodeGeometry::from_xywh(200.0 + f * 30.0, 150.0 + f * 80.0, 100.0, 50.0),
                "Leaf",
            );
            let _ = diagram.add_connection(hub, leaf, RoutingBias::Auto);
        }

        group.bench_with_input(BenchmarkId::new("hub", fan_out), &diagram, |b, diagram| {
            b.iter_batched(
                || diagram.clone(),
                |mut diagram| {
                    diagram.move_node_by(hub, black_box(Vec2::new(5.0, 3.0)));
                    black_box(diagram.connection_count())
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_spatial_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_queries");

    for &node_count in &[1_000usize, 10_000usize] {
        let index = SpatialIndex::from_nodes(&build_grid_nodes(node_count));
        let query_points = build_query_points(1024);

        group.bench_with_input(
            BenchmarkId::new("node_at_batch", node_count),
            &index,
            |b, index| {
                b.iter(|| {
                    let hits = query_points
                        .iter()
                        .filter(|point| index.node_at(black_box(**point)).is_some())
                        .count();
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    routing_benches,
    bench_compute_shape,
    bench_reroute_on_move,
    bench_spatial_queries
);
criterion_main!(routing_benches);
