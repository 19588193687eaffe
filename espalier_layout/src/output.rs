// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout output types.

use alloc::vec::Vec;

use espalier_tree::NodeIdx;
use kurbo::{Point, Rect};

/// A visible node with its computed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedNode {
    /// The tree node this placement belongs to.
    pub node: NodeIdx,
    /// Position in plane units.
    pub pos: Point,
    /// Depth level; the root is 0.
    pub level: u32,
    /// Whether the node's children are currently shown.
    pub expanded: bool,
    /// Whether the node has children at all (shown or not).
    pub has_children: bool,
}

/// A visible parent-to-child edge.
///
/// `(from, to)` is the stable identity of the edge; the endpoint positions
/// are copies of the parent's and child's placed positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedEdge {
    /// Parent node.
    pub from: NodeIdx,
    /// Child node.
    pub to: NodeIdx,
    /// Parent position.
    pub source: Point,
    /// Child position.
    pub target: Point,
}

/// The result of one layout pass: visible nodes and edges, already centered.
///
/// Nodes appear in depth-first emission order (parents before children,
/// siblings left to right); edges appear interleaved in the same walk. The
/// default value is the empty layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Visible nodes.
    pub nodes: Vec<PlacedNode>,
    /// Visible edges.
    pub edges: Vec<PlacedEdge>,
}

impl Layout {
    /// Whether nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of visible nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The placement of `node`, if it is visible.
    #[must_use]
    pub fn find(&self, node: NodeIdx) -> Option<&PlacedNode> {
        self.nodes.iter().find(|p| p.node == node)
    }

    /// Bounding rectangle of all visible node positions, or `None` when the
    /// layout is empty. Node positions are points; renderers add their own
    /// glyph and marker extents.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.nodes.first()?;
        let mut bounds = Rect::from_points(first.pos, first.pos);
        for placed in &self.nodes[1..] {
            bounds = bounds.union_pt(placed.pos);
        }
        Some(bounds)
    }
}
