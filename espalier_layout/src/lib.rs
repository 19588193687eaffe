// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=espalier_layout --heading-base-level=0

//! Espalier Layout: deterministic tidy layout for mind-map trees.
//!
//! [`layout`] places the visible part of an [`espalier_tree::MapTree`] on the
//! plane: root at the top, one horizontal band per depth level, sibling
//! subtrees spread out just far enough not to collide. Visibility is decided
//! by an [`espalier_tree::Expansion`]: a node is emitted when every strict
//! ancestor is expanded.
//!
//! The algorithm runs in four passes:
//!
//! 1. Levels and visibility (depth-first, pruned at collapsed nodes).
//! 2. Initial x (post-order): leaves at 0, parents at the midpoint of their
//!    first and last child.
//! 3. Collision resolution (pre-order): adjacent sibling subtrees are
//!    compared contour by contour and the right one is shifted clear.
//! 4. Final positions: y from the level, emission of visible nodes and
//!    edges, then horizontal centering of the whole picture around 0.
//!
//! Geometry is computed over the whole tree, not just the visible part, so a
//! collapsed subtree keeps reserving its room and toggling a node never
//! re-shuffles the spacing of unrelated siblings. The output is rebuilt from
//! scratch on every call; positions are a pure function of tree, expansion
//! state, and [`LayoutConfig`], which makes re-layout deterministic down to
//! the bit.
//!
//! ## Minimal example
//!
//! ```rust
//! use espalier_layout::{LayoutConfig, layout};
//! use espalier_tree::{Expansion, GraphEdge, GraphNode, MapGraph, MapTree};
//!
//! let graph = MapGraph {
//!     nodes: vec![
//!         GraphNode::new("root", "Rust"),
//!         GraphNode::new("own", "Ownership"),
//!         GraphNode::new("bor", "Borrowing"),
//!     ],
//!     edges: vec![GraphEdge::new("root", "own"), GraphEdge::new("root", "bor")],
//! };
//! let tree = MapTree::from_graph(&graph)?;
//! let expansion = Expansion::for_root(&tree);
//!
//! let placed = layout(&tree, &expansion, &LayoutConfig::default());
//! assert_eq!(placed.nodes.len(), 3); // root and its two children
//! assert_eq!(placed.edges.len(), 2);
//!
//! // The picture is centered: visible x extents are symmetric around 0.
//! let bounds = placed.bounds().unwrap();
//! assert!((bounds.x0 + bounds.x1).abs() < 1e-9);
//! # Ok::<(), espalier_tree::GraphError>(())
//! ```
//!
//! Labels are treated as zero-width; spacing is governed entirely by the
//! [`LayoutConfig`] separations. Text measurement belongs to renderers.
//!
//! This crate is `no_std` (plus `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod output;
mod tidy;

pub use config::LayoutConfig;
pub use output::{Layout, PlacedEdge, PlacedNode};
pub use tidy::layout;
