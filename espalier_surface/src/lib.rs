// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=espalier_surface --heading-base-level=0

//! Espalier Surface: the composed, headless mind-map widget state.
//!
//! [`MapSurface`] owns one of everything: the built tree, its expansion and
//! selection state, the camera, the active pan session, and the current
//! layout. It exposes the interaction vocabulary of a map widget, with the
//! guard rails applied in one place:
//!
//! - `toggle_node` / `select_node`: unknown ids are silent no-ops.
//! - `begin_pan` / `pan_to` / `end_pan`: moves outside a session do nothing.
//! - `wheel`: cursor-anchored zoom; `zoom_in` / `zoom_out`: centered button
//!   zoom; `reset_view`: recenter at 1:1.
//! - `set_graph`: replaces the document wholesale; a bad graph leaves the
//!   previous state untouched and the camera always survives.
//!
//! Embedders feed pointer and wheel events in, then pull a [`Scene`]: the
//! visible nodes (with labels resolved), edges, and the camera window, plus
//! a revision counter that only moves when something observable changed.
//!
//! ## Minimal example
//!
//! ```rust
//! use espalier_surface::MapSurface;
//! use espalier_tree::{GraphEdge, GraphNode, MapGraph};
//! use kurbo::{Point, Size};
//!
//! let graph = MapGraph {
//!     nodes: vec![
//!         GraphNode::new("root", "Rust"),
//!         GraphNode::new("own", "Ownership"),
//!         GraphNode::new("bor", "Borrowing"),
//!     ],
//!     edges: vec![GraphEdge::new("root", "own"), GraphEdge::new("root", "bor")],
//! };
//!
//! let mut surface = MapSurface::new(Size::new(800.0, 600.0));
//! surface.set_graph(&graph)?;
//! assert_eq!(surface.scene().nodes.len(), 3);
//!
//! // Clicking a node toggles it; clicking the background starts a pan.
//! surface.toggle_node("own");
//! surface.begin_pan(Point::new(10.0, 10.0));
//! surface.pan_to(Point::new(30.0, 10.0));
//! surface.end_pan();
//!
//! // Wheel in at the window center, then draw.
//! surface.wheel(-1.0, Point::new(400.0, 300.0));
//! let scene = surface.scene();
//! assert!(scene.nodes.iter().any(|n| n.label == "Ownership"));
//! # Ok::<(), espalier_tree::GraphError>(())
//! ```
//!
//! This crate is `no_std` (plus `alloc`).

#![no_std]

extern crate alloc;

mod scene;
mod surface;

pub use scene::{Scene, SceneNode};
pub use surface::MapSurface;
