// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawable snapshot.

use alloc::vec::Vec;

use espalier_layout::PlacedEdge;
use kurbo::{Point, Rect, Size};

/// One visible node, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneNode<'a> {
    /// Stable node id.
    pub id: &'a str,
    /// Display label.
    pub label: &'a str,
    /// Position in plane units.
    pub pos: Point,
    /// Depth level; the root is 0.
    pub level: u32,
    /// Whether the node's children are shown.
    pub expanded: bool,
    /// Whether an expander affordance applies.
    pub has_children: bool,
    /// Whether this node is the current selection.
    pub selected: bool,
}

/// A pull snapshot of everything a renderer needs.
///
/// Borrowed from the surface; take a fresh one after feeding input in. The
/// `revision` ties the snapshot to the surface state it was taken from.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene<'a> {
    /// Visible nodes in draw order (parents before children).
    pub nodes: Vec<SceneNode<'a>>,
    /// Visible edges in draw order.
    pub edges: &'a [PlacedEdge],
    /// Camera window in plane units; usable directly as an SVG `viewBox`.
    pub camera: Rect,
    /// Rendering surface in device pixels.
    pub surface: Size,
    /// Surface change counter at snapshot time.
    pub revision: u64,
}

impl Scene<'_> {
    /// Whether nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node carrying `id`, if visible.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&SceneNode<'_>> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
