// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive the surface the way pointer input would.
//!
//! Demonstrates the pan session, cursor-anchored wheel zoom, and hit
//! testing against the placed layout.
//!
//! Run:
//! - `cargo run -p espalier_demos --example map_interactions`

use espalier_surface::MapSurface;
use espalier_tree::{GraphEdge, GraphNode, MapGraph};
use kurbo::{Point, Size};

fn main() -> Result<(), espalier_tree::GraphError> {
    let graph = MapGraph {
        nodes: vec![
            GraphNode::new("root", "Trees"),
            GraphNode::new("espalier", "Espalier"),
            GraphNode::new("cordon", "Cordon"),
            GraphNode::new("fan", "Fan"),
        ],
        edges: vec![
            GraphEdge::new("root", "espalier"),
            GraphEdge::new("root", "cordon"),
            GraphEdge::new("root", "fan"),
        ],
    };

    let mut surface = MapSurface::new(Size::new(800.0, 600.0));
    surface.set_graph(&graph)?;
    println!("start: {:?}", surface.camera().debug_info());

    // Drag the background 120 px to the left.
    surface.begin_pan(Point::new(400.0, 300.0));
    surface.pan_to(Point::new(280.0, 300.0));
    surface.end_pan();
    println!("after drag: {:?}", surface.camera().rect());

    // Two wheel notches in at the window center.
    surface.wheel(-1.0, Point::new(400.0, 300.0));
    surface.wheel(-1.0, Point::new(400.0, 300.0));
    println!("after wheel: {:?}", surface.camera().rect());

    surface.reset_view();

    // Probe the pixel each node maps to, plus one over the background.
    let scene = surface.scene();
    let mut probes: Vec<(String, Point)> = scene
        .nodes
        .iter()
        .map(|n| (n.label.to_owned(), surface.camera().world_to_view_point(n.pos)))
        .collect();
    probes.push(("background".to_owned(), Point::new(20.0, 20.0)));

    for (label, probe) in probes {
        match surface.node_at(probe, 12.0) {
            Some(id) => println!("probe {label}: hit {id}"),
            None => println!("probe {label}: nothing"),
        }
    }
    Ok(())
}
