// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed rooted tree wired from a flat graph.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::graph::MapGraph;

/// Index of a node in a [`MapTree`] arena.
///
/// Valid only for the tree that produced it. Trees are immutable after
/// construction, so an index never dangles within one build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(u32);

impl NodeIdx {
    /// Position in the arena's backing storage.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

fn idx_of(i: usize) -> NodeIdx {
    NodeIdx(u32::try_from(i).expect("MapTree: too many nodes for u32 NodeIdx"))
}

/// One node of a built tree.
#[derive(Clone, Debug)]
pub struct TreeNode {
    /// Identifier carried over from the input graph.
    pub id: String,
    /// Display label carried over from the input graph.
    pub label: String,
    /// Parent link; `None` only for the root.
    pub parent: Option<NodeIdx>,
    /// Ordered children (edge input order).
    pub children: Vec<NodeIdx>,
}

/// Why a flat graph could not be wired into a rooted tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Every node has a parent (cyclic wiring), or the node list is empty.
    NoRoot,
    /// More than one node is parentless.
    ManyRoots {
        /// First parentless node id, in input order.
        first: String,
        /// Second parentless node id, in input order.
        second: String,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRoot => write!(f, "graph has no root node (empty or cyclic wiring)"),
            Self::ManyRoots { first, second } => write!(
                f,
                "graph has more than one root node ({first:?} and {second:?})"
            ),
        }
    }
}

impl core::error::Error for GraphError {}

/// An immutable rooted tree over the nodes of a [`MapGraph`].
#[derive(Clone, Debug)]
pub struct MapTree {
    nodes: Vec<TreeNode>,
    root: NodeIdx,
    by_id: HashMap<String, NodeIdx>,
}

impl MapTree {
    /// Wires a flat graph into a rooted tree.
    ///
    /// One tree node is created per graph node, in input order. Edges are
    /// applied in input order, which fixes sibling order. An edge naming an
    /// unknown id, or a self edge, is skipped. A child named as the target of
    /// several edges keeps the last-assigned parent (it is removed from the
    /// earlier parent's child list). Duplicate node ids are not validated;
    /// the first occurrence owns the id.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoRoot`] when every node has a parent or the node list
    /// is empty; [`GraphError::ManyRoots`] when more than one node has none.
    pub fn from_graph(graph: &MapGraph) -> Result<Self, GraphError> {
        let mut nodes: Vec<TreeNode> = Vec::with_capacity(graph.nodes.len());
        let mut by_id: HashMap<String, NodeIdx> = HashMap::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            let idx = idx_of(nodes.len());
            by_id.entry(node.id.clone()).or_insert(idx);
            nodes.push(TreeNode {
                id: node.id.clone(),
                label: node.label.clone(),
                parent: None,
                children: Vec::new(),
            });
        }

        for edge in &graph.edges {
            let (Some(&parent), Some(&child)) = (by_id.get(&edge.from), by_id.get(&edge.to))
            else {
                continue;
            };
            if parent == child {
                continue;
            }
            // Last-assigned parent wins: re-home an already wired child.
            if let Some(old) = nodes[child.index()].parent {
                nodes[old.index()].children.retain(|&c| c != child);
            }
            nodes[parent.index()].children.push(child);
            nodes[child.index()].parent = Some(parent);
        }

        let mut parentless = nodes.iter().enumerate().filter(|(_, n)| n.parent.is_none());
        let root = match (parentless.next(), parentless.next()) {
            (Some((i, _)), None) => idx_of(i),
            (Some((_, first)), Some((_, second))) => {
                return Err(GraphError::ManyRoots {
                    first: first.id.clone(),
                    second: second.id.clone(),
                });
            }
            (None, _) => return Err(GraphError::NoRoot),
        };

        Ok(Self {
            nodes,
            root,
            by_id,
        })
    }

    /// Root node index.
    #[must_use]
    pub fn root(&self) -> NodeIdx {
        self.root
    }

    /// Looks up a node index by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<NodeIdx> {
        self.by_id.get(id).copied()
    }

    /// Borrows a node record.
    #[must_use]
    pub fn node(&self, idx: NodeIdx) -> &TreeNode {
        &self.nodes[idx.index()]
    }

    /// Ordered children of `idx`.
    #[must_use]
    pub fn children(&self, idx: NodeIdx) -> &[NodeIdx] {
        &self.nodes[idx.index()].children
    }

    /// Parent of `idx`; `None` for the root.
    #[must_use]
    pub fn parent(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self.nodes[idx.index()].parent
    }

    /// Whether `idx` has any children (renderers use this as the expander cue).
    #[must_use]
    pub fn has_children(&self, idx: NodeIdx) -> bool {
        !self.nodes[idx.index()].children.is_empty()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes. Construction guarantees a root, so
    /// this is false for every built tree; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in arena (input) order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIdx, &TreeNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (idx_of(i), n))
    }
}
