// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four-pass tidy layout.

use alloc::vec;
use alloc::vec::Vec;

use espalier_tree::{Expansion, MapTree, NodeIdx};
use kurbo::Point;
use smallvec::SmallVec;

use crate::config::LayoutConfig;
use crate::output::{Layout, PlacedEdge, PlacedNode};

/// Inline capacity for contour buffers.
///
/// Contours are indexed by depth; maps deeper than this spill to the heap.
const CONTOUR_INLINE_DEPTH: usize = 16;

type Contour = SmallVec<[f64; CONTOUR_INLINE_DEPTH]>;

/// Per-node scratch state, indexed by arena position.
struct Scratch {
    x: Vec<f64>,
    level: Vec<u32>,
    expanded: Vec<bool>,
}

/// Places the visible part of `tree` on the plane.
///
/// Deterministic: the same tree, expansion state, and config produce a
/// bit-identical [`Layout`]. Geometry is computed over the whole tree and is
/// independent of the expansion state; expansion only filters which nodes
/// and edges appear (and thereby the centering offset). See the crate docs
/// for the pass structure.
#[must_use]
pub fn layout(tree: &MapTree, expansion: &Expansion, config: &LayoutConfig) -> Layout {
    let mut scratch = Scratch {
        x: vec![0.0; tree.len()],
        level: vec![0; tree.len()],
        expanded: vec![false; tree.len()],
    };
    let root = tree.root();

    assign_levels(tree, expansion, &mut scratch, root, 0);
    initial_x(tree, &mut scratch, root);
    resolve_collisions(tree, &mut scratch, config, root);

    let mut out = Layout::default();
    emit(tree, &scratch, config, root, &mut out);
    center(&mut out);
    out
}

/// Pass 1: depth and expansion flags, pruned at collapsed nodes.
fn assign_levels(
    tree: &MapTree,
    expansion: &Expansion,
    scratch: &mut Scratch,
    idx: NodeIdx,
    level: u32,
) {
    let i = idx.index();
    scratch.level[i] = level;
    scratch.expanded[i] = expansion.is_expanded(&tree.node(idx).id);
    if scratch.expanded[i] {
        for &child in tree.children(idx) {
            assign_levels(tree, expansion, scratch, child, level + 1);
        }
    }
}

/// Pass 2: post-order initial x over the whole tree. Leaves sit at 0,
/// parents at the midpoint of their first and last child.
fn initial_x(tree: &MapTree, scratch: &mut Scratch, idx: NodeIdx) {
    let children = tree.children(idx);
    for &child in children {
        initial_x(tree, scratch, child);
    }
    scratch.x[idx.index()] = match (children.first(), children.last()) {
        (Some(&first), Some(&last)) => (scratch.x[first.index()] + scratch.x[last.index()]) / 2.0,
        _ => 0.0,
    };
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Pass 3: pre-order collision resolution. For each adjacent sibling pair,
/// the right contour of the left subtree is compared with the left contour
/// of the right subtree, and the right subtree is pushed clear of any
/// contact.
///
/// Contours are captured once per pair, so several touching depths stack
/// their shifts; the gap between deep siblings can exceed the configured
/// separation, never undercut it.
fn resolve_collisions(tree: &MapTree, scratch: &mut Scratch, config: &LayoutConfig, idx: NodeIdx) {
    let children = tree.children(idx);
    let mut right_of_left = Contour::new();
    let mut left_of_right = Contour::new();
    for pair in 0..children.len().saturating_sub(1) {
        let left = children[pair];
        let right = children[pair + 1];
        contour(tree, scratch, left, Side::Right, &mut right_of_left);
        contour(tree, scratch, right, Side::Left, &mut left_of_right);
        let shared = right_of_left.len().min(left_of_right.len());
        for depth in 0..shared {
            let distance = right_of_left[depth] - left_of_right[depth];
            // Touching counts as a collision; zero-width columns still separate.
            if distance >= 0.0 {
                shift_subtree(tree, scratch, right, distance + config.sibling_separation);
            }
        }
    }
    for &child in children {
        resolve_collisions(tree, scratch, config, child);
    }
}

/// X coordinate at each depth along the leftmost (resp. rightmost)
/// descendant path of `start`.
fn contour(tree: &MapTree, scratch: &Scratch, start: NodeIdx, side: Side, out: &mut Contour) {
    out.clear();
    let mut idx = start;
    loop {
        out.push(scratch.x[idx.index()]);
        let children = tree.children(idx);
        let next = match side {
            Side::Left => children.first(),
            Side::Right => children.last(),
        };
        match next {
            Some(&child) => idx = child,
            None => return,
        }
    }
}

fn shift_subtree(tree: &MapTree, scratch: &mut Scratch, idx: NodeIdx, shift: f64) {
    scratch.x[idx.index()] += shift;
    for &child in tree.children(idx) {
        shift_subtree(tree, scratch, child, shift);
    }
}

/// Pass 4: final positions and emission. Visible nodes get their y from the
/// level; an expanded node contributes one edge per child, emitted just
/// before descending into that child.
fn emit(tree: &MapTree, scratch: &Scratch, config: &LayoutConfig, idx: NodeIdx, out: &mut Layout) {
    let i = idx.index();
    let pos = position(scratch, config, idx);
    out.nodes.push(PlacedNode {
        node: idx,
        pos,
        level: scratch.level[i],
        expanded: scratch.expanded[i],
        has_children: tree.has_children(idx),
    });
    if scratch.expanded[i] {
        for &child in tree.children(idx) {
            out.edges.push(PlacedEdge {
                from: idx,
                to: child,
                source: pos,
                target: position(scratch, config, child),
            });
            emit(tree, scratch, config, child, out);
        }
    }
}

fn position(scratch: &Scratch, config: &LayoutConfig, idx: NodeIdx) -> Point {
    let i = idx.index();
    Point::new(
        scratch.x[i],
        f64::from(scratch.level[i]) * config.level_separation,
    )
}

/// Centers the emitted picture horizontally around x = 0.
fn center(out: &mut Layout) {
    let Some(bounds) = out.bounds() else {
        return;
    };
    let offset = (bounds.x0 + bounds.x1) / 2.0;
    for node in &mut out.nodes {
        node.pos.x -= offset;
    }
    for edge in &mut out.edges {
        edge.source.x -= offset;
        edge.target.x -= offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use espalier_tree::{GraphEdge, GraphNode, MapGraph};

    fn tree(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> MapTree {
        let graph = MapGraph {
            nodes: nodes
                .iter()
                .map(|&(id, label)| GraphNode::new(id, label))
                .collect(),
            edges: edges
                .iter()
                .map(|&(from, to)| GraphEdge::new(from, to))
                .collect(),
        };
        MapTree::from_graph(&graph).unwrap()
    }

    fn expand_all(tree: &MapTree) -> Expansion {
        let mut expansion = Expansion::new();
        for (_, node) in tree.iter() {
            expansion.expand(&node.id);
        }
        expansion
    }

    fn x_of(out: &Layout, tree: &MapTree, id: &str) -> f64 {
        out.find(tree.get(id).unwrap()).unwrap().pos.x
    }

    #[test]
    fn contour_follows_the_outermost_path() {
        // r has children a (with child a1) and b; the right contour of r
        // follows r, b; the left contour follows r, a, a1.
        let t = tree(
            &[("r", ""), ("a", ""), ("a1", ""), ("b", "")],
            &[("r", "a"), ("r", "b"), ("a", "a1")],
        );
        let scratch = Scratch {
            x: vec![10.0, 20.0, 30.0, 40.0],
            level: vec![0; 4],
            expanded: vec![false; 4],
        };
        let mut out = Contour::new();
        contour(&t, &scratch, t.root(), Side::Right, &mut out);
        assert_eq!(out.as_slice(), [10.0, 40.0]);
        contour(&t, &scratch, t.root(), Side::Left, &mut out);
        assert_eq!(out.as_slice(), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn three_leaves_space_evenly() {
        let t = tree(
            &[("r", ""), ("a", ""), ("b", ""), ("c", "")],
            &[("r", "a"), ("r", "b"), ("r", "c")],
        );
        let out = layout(&t, &expand_all(&t), &LayoutConfig::default());
        // Pairwise resolution cascades left to right: 0, 60, 120 before
        // centering, so 60 apart afterwards.
        assert_eq!(x_of(&out, &t, "b") - x_of(&out, &t, "a"), 60.0);
        assert_eq!(x_of(&out, &t, "c") - x_of(&out, &t, "b"), 60.0);
    }

    #[test]
    fn equal_depth_chains_stack_their_shifts() {
        // Two 2-deep chains touch at both depths; the shifts accumulate, so
        // the right chain ends up two separations away.
        let t = tree(
            &[("r", ""), ("p", ""), ("p1", ""), ("q", ""), ("q1", "")],
            &[("r", "p"), ("r", "q"), ("p", "p1"), ("q", "q1")],
        );
        let out = layout(&t, &expand_all(&t), &LayoutConfig::default());
        assert_eq!(x_of(&out, &t, "q") - x_of(&out, &t, "p"), 120.0);
        assert_eq!(x_of(&out, &t, "q1") - x_of(&out, &t, "p1"), 120.0);
    }

    #[test]
    fn hidden_subtrees_still_reserve_room() {
        // a's children are hidden (a collapsed), but the gap between a and b
        // is the same as if they were shown.
        let t = tree(
            &[("r", ""), ("a", ""), ("a1", ""), ("a2", ""), ("b", "")],
            &[("r", "a"), ("r", "b"), ("a", "a1"), ("a", "a2")],
        );
        let mut collapsed = Expansion::new();
        collapsed.expand("r");
        let shown = expand_all(&t);

        let out_collapsed = layout(&t, &collapsed, &LayoutConfig::default());
        let out_shown = layout(&t, &shown, &LayoutConfig::default());
        let gap_collapsed = x_of(&out_collapsed, &t, "b") - x_of(&out_collapsed, &t, "a");
        let gap_shown = x_of(&out_shown, &t, "b") - x_of(&out_shown, &t, "a");
        assert_eq!(gap_collapsed, gap_shown);
    }

    #[test]
    fn custom_separations_are_honored() {
        let t = tree(
            &[("r", ""), ("a", ""), ("b", "")],
            &[("r", "a"), ("r", "b")],
        );
        let config = LayoutConfig {
            level_separation: 50.0,
            sibling_separation: 10.0,
        };
        let out = layout(&t, &expand_all(&t), &config);
        assert_eq!(x_of(&out, &t, "b") - x_of(&out, &t, "a"), 10.0);
        let a = out.find(t.get("a").unwrap()).unwrap();
        assert_eq!(a.pos.y, 50.0);
    }
}
