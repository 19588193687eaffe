// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat input graph types.

use alloc::string::String;
use alloc::vec::Vec;

/// A labeled node in the flat input graph.
///
/// `id` is an opaque identifier, unique within one graph. `label` is display
/// text and carries no meaning at this layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphNode {
    /// Unique, opaque identifier.
    pub id: String,
    /// Human-readable display text.
    pub label: String,
}

impl GraphNode {
    /// Creates a node from anything string-like.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A directed parent-to-child edge between two node ids.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphEdge {
    /// Parent node id.
    pub from: String,
    /// Child node id.
    pub to: String,
}

impl GraphEdge {
    /// Creates an edge from anything string-like.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A complete input graph, supplied and replaced wholesale.
///
/// This matches the JSON shape producing applications typically emit:
/// `{ "nodes": [{ "id", "label" }], "edges": [{ "from", "to" }] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapGraph {
    /// All nodes; order fixes the arena order of the built tree.
    pub nodes: Vec<GraphNode>,
    /// All edges; order fixes sibling order.
    pub edges: Vec<GraphEdge>,
}
