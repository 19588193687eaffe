// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load a mind map from JSON and export it as SVG.
//!
//! The JSON matches the wire shape the producing app ships: a flat node
//! list plus parent-child edges, root implied by never being a target.
//!
//! Run:
//! - `cargo run -p espalier_demos --example learning_path > map.svg`

use espalier_surface::MapSurface;
use espalier_svg::{SvgTheme, scene_to_svg};
use espalier_tree::MapGraph;
use kurbo::Size;

const LEARNING_PATH: &str = r#"{
  "nodes": [
    { "id": "rust", "label": "Rust" },
    { "id": "own", "label": "Ownership" },
    { "id": "moves", "label": "Moves" },
    { "id": "borrow", "label": "Borrowing" },
    { "id": "life", "label": "Lifetimes" },
    { "id": "traits", "label": "Traits" },
    { "id": "generics", "label": "Generics" },
    { "id": "dyn", "label": "Trait objects" },
    { "id": "conc", "label": "Concurrency" },
    { "id": "threads", "label": "Threads" },
    { "id": "send", "label": "Send and Sync" }
  ],
  "edges": [
    { "from": "rust", "to": "own" },
    { "from": "rust", "to": "traits" },
    { "from": "rust", "to": "conc" },
    { "from": "own", "to": "moves" },
    { "from": "own", "to": "borrow" },
    { "from": "own", "to": "life" },
    { "from": "traits", "to": "generics" },
    { "from": "traits", "to": "dyn" },
    { "from": "conc", "to": "threads" },
    { "from": "conc", "to": "send" }
  ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph: MapGraph = serde_json::from_str(LEARNING_PATH)?;

    let mut surface = MapSurface::new(Size::new(800.0, 600.0));
    surface.set_graph(&graph)?;

    // Open two branches, highlight one topic, then frame everything.
    surface.toggle_node("own");
    surface.toggle_node("conc");
    surface.select_node(Some("borrow"));
    surface.fit_view(40.0);

    println!("{}", scene_to_svg(&surface.scene(), &SvgTheme::default()));
    Ok(())
}
