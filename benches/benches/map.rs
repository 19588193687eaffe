// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use espalier_layout::{LayoutConfig, layout};
use espalier_surface::MapSurface;
use espalier_tree::{Expansion, GraphEdge, GraphNode, MapGraph, MapTree};
use kurbo::Size;

/// A complete tree with the given fanout and depth, ids `n0..` in BFS order.
fn bushy(fanout: u32, depth: u32) -> MapGraph {
    let mut nodes = vec![GraphNode::new("n0", "n0")];
    let mut edges = Vec::new();
    let mut frontier = vec![0_u32];
    let mut next = 1_u32;
    for _ in 0..depth {
        let mut grown = Vec::with_capacity(frontier.len() * fanout as usize);
        for &parent in &frontier {
            for _ in 0..fanout {
                let id = format!("n{next}");
                nodes.push(GraphNode::new(id.clone(), id.clone()));
                edges.push(GraphEdge::new(format!("n{parent}"), id));
                grown.push(next);
                next += 1;
            }
        }
        frontier = grown;
    }
    MapGraph { nodes, edges }
}

/// A single path: every node has exactly one child.
fn chain(n: u32) -> MapGraph {
    let nodes = (0..n)
        .map(|i| GraphNode::new(format!("n{i}"), format!("n{i}")))
        .collect();
    let edges = (1..n)
        .map(|i| GraphEdge::new(format!("n{}", i - 1), format!("n{i}")))
        .collect();
    MapGraph { nodes, edges }
}

/// A root with `n - 1` direct children.
fn wide(n: u32) -> MapGraph {
    let nodes = (0..n)
        .map(|i| GraphNode::new(format!("n{i}"), format!("n{i}")))
        .collect();
    let edges = (1..n).map(|i| GraphEdge::new("n0", format!("n{i}"))).collect();
    MapGraph { nodes, edges }
}

fn expand_all(tree: &MapTree) -> Expansion {
    let mut expansion = Expansion::new();
    for (_, node) in tree.iter() {
        if !node.children.is_empty() {
            expansion.expand(&node.id);
        }
    }
    expansion
}

fn shapes() -> Vec<(&'static str, MapGraph)> {
    vec![
        ("wide_1024", wide(1024)),
        ("chain_1024", chain(1024)),
        ("bushy_4x5", bushy(4, 5)),
        ("bushy_8x4", bushy(8, 4)),
    ]
}

fn bench_from_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree/from_graph");

    for (name, graph) in shapes() {
        group.throughput(Throughput::Elements(graph.nodes.len() as u64));
        group.bench_with_input(BenchmarkId::new("from_graph", name), &graph, |b, graph| {
            b.iter(|| black_box(MapTree::from_graph(graph).unwrap()));
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/tidy");
    group.sample_size(50);

    for (name, graph) in shapes() {
        let tree = MapTree::from_graph(&graph).unwrap();
        group.throughput(Throughput::Elements(tree.len() as u64));

        // Geometry always walks the full tree; expansion only changes how
        // much gets emitted. Run both extremes to see that split.
        let all = expand_all(&tree);
        group.bench_with_input(BenchmarkId::new("all_expanded", name), &tree, |b, tree| {
            b.iter(|| black_box(layout(tree, &all, &LayoutConfig::DEFAULT)));
        });

        let root_only = Expansion::for_root(&tree);
        group.bench_with_input(BenchmarkId::new("root_only", name), &tree, |b, tree| {
            b.iter(|| black_box(layout(tree, &root_only, &LayoutConfig::DEFAULT)));
        });
    }

    group.finish();
}

fn bench_surface_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface/toggle");
    group.sample_size(50);

    // The interactive hot path: one click toggles a branch and relayouts.
    for (name, graph) in [("bushy_4x5", bushy(4, 5)), ("bushy_8x4", bushy(8, 4))] {
        group.bench_with_input(BenchmarkId::new("toggle", name), &graph, |b, graph| {
            b.iter_batched(
                || {
                    let mut surface = MapSurface::new(Size::new(800.0, 600.0));
                    surface.set_graph(graph).unwrap();
                    surface
                },
                |mut surface| {
                    surface.toggle_node("n1");
                    black_box(surface.revision());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_from_graph, bench_layout, bench_surface_toggle);
criterion_main!(benches);
