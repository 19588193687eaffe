// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=espalier_tree --heading-base-level=0

//! Espalier Tree: rooted trees built from flat node/edge lists.
//!
//! A mind-map document arrives as a flat graph: a [`MapGraph`] holding labeled
//! [`GraphNode`]s and directed [`GraphEdge`]s (parent to child). [`MapTree`]
//! wires that flat list into an arena-backed rooted tree:
//!
//! - One tree node per graph node, in input order.
//! - Edges applied in input order, which fixes sibling order.
//! - The root is the unique node that is never an edge target.
//!
//! Inputs that have no root (cyclic wiring, or an empty node list) or several
//! roots are reported as a [`GraphError`] rather than a panic, so callers can
//! surface the configuration problem and keep their previous state.
//!
//! [`Expansion`] is the companion visibility state: the set of node ids whose
//! children are currently shown, with a revision counter for cheap change
//! detection. It does not know the tree; callers decide which ids are worth
//! toggling.
//!
//! ## Minimal example
//!
//! ```rust
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
//!
//! let tree = MapTree::from_graph(&graph)?;
//! let root = tree.root();
//! assert_eq!(tree.node(root).label, "Rust");
//! assert_eq!(tree.children(root).len(), 2);
//!
//! // The root starts expanded; everything else starts collapsed.
//! let mut expansion = Expansion::for_root(&tree);
//! assert!(expansion.is_expanded("root"));
//! expansion.toggle("own");
//! assert!(expansion.is_expanded("own"));
//! # Ok::<(), espalier_tree::GraphError>(())
//! ```
//!
//! ## Design notes
//!
//! - The tree is immutable after construction. Edits arrive as a wholly new
//!   graph, never as incremental patches, so node indices ([`NodeIdx`]) stay
//!   valid for the lifetime of one build.
//! - Children are an owned ordered sequence and the parent link is an index,
//!   which keeps the structure acyclic by construction.
//! - Expansion state lives outside the tree so a rebuild can either reset it
//!   or (in a future caller) reconcile it against surviving ids.
//!
//! This crate is `no_std` (plus `alloc`).

#![no_std]

extern crate alloc;

mod expansion;
mod graph;
mod tree;

pub use expansion::Expansion;
pub use graph::{GraphEdge, GraphNode, MapGraph};
pub use tree::{GraphError, MapTree, NodeIdx, TreeNode};
