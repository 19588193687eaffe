// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expanded-id set with a change revision.

use alloc::string::String;

use hashbrown::HashSet;

use crate::MapTree;

/// The set of node ids whose children are currently visible.
///
/// Collapsing a node removes only that node's own id. Descendants keep their
/// flags, so re-expanding a node restores the shape that was visible before
/// the collapse.
///
/// Every actual change bumps [`revision`](Self::revision); operations that
/// would not change the set return early without bumping, so callers can use
/// the counter for cheap "anything toggled since I last looked" checks.
#[derive(Clone, Debug, Default)]
pub struct Expansion {
    expanded: HashSet<String>,
    revision: u64,
}

impl Expansion {
    /// Empty set; nothing expanded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical starting state: exactly the tree's root expanded.
    #[must_use]
    pub fn for_root(tree: &MapTree) -> Self {
        let mut expansion = Self::new();
        expansion
            .expanded
            .insert(tree.node(tree.root()).id.clone());
        expansion
    }

    /// Flips `id` and returns whether it is expanded after the call.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_expanded = if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(String::from(id));
            true
        };
        self.revision = self.revision.wrapping_add(1);
        now_expanded
    }

    /// Marks `id` expanded. Returns false (and does not bump the revision)
    /// if it already was.
    pub fn expand(&mut self, id: &str) -> bool {
        if self.expanded.contains(id) {
            return false;
        }
        self.expanded.insert(String::from(id));
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Marks `id` collapsed. Returns false (and does not bump the revision)
    /// if it already was.
    pub fn collapse(&mut self, id: &str) -> bool {
        if !self.expanded.remove(id) {
            return false;
        }
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Whether `id` is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Number of expanded ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Wrapping change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Collapses everything.
    pub fn clear(&mut self) {
        if self.expanded.is_empty() {
            return;
        }
        self.expanded.clear();
        self.revision = self.revision.wrapping_add(1);
    }

    /// Iterates expanded ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}
