// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed surface state and its interaction contract.

use alloc::string::String;
use alloc::vec::Vec;

use espalier_layout::{Layout, LayoutConfig, layout};
use espalier_tree::{Expansion, GraphError, MapGraph, MapTree};
use espalier_view2d::{BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT, Camera, PanSession, WHEEL_STEP};
use kurbo::{Point, Size, Vec2};

use crate::scene::{Scene, SceneNode};

/// A complete interactive mind-map surface.
///
/// Owns the tree, expansion and selection state, the camera, and the cached
/// layout. Rendering and event decoding stay outside: callers translate
/// their events into the methods here, then pull [`scene`](Self::scene).
///
/// Every observable change (layout, camera, or selection) bumps
/// [`revision`](Self::revision); silent no-ops leave it untouched, so
/// embedders can skip redraws cheaply.
#[derive(Clone, Debug)]
pub struct MapSurface {
    tree: Option<MapTree>,
    expansion: Expansion,
    selected: Option<String>,
    camera: Camera,
    pan: PanSession,
    config: LayoutConfig,
    layout: Layout,
    revision: u64,
}

impl MapSurface {
    /// An empty surface over `surface` device pixels, default spacing.
    #[must_use]
    pub fn new(surface: Size) -> Self {
        Self::with_config(surface, LayoutConfig::default())
    }

    /// An empty surface with explicit spacing.
    #[must_use]
    pub fn with_config(surface: Size, config: LayoutConfig) -> Self {
        Self {
            tree: None,
            expansion: Expansion::new(),
            selected: None,
            camera: Camera::new(surface),
            pan: PanSession::new(),
            config,
            layout: Layout::default(),
            revision: 0,
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn relayout(&mut self) {
        self.layout = match &self.tree {
            Some(tree) => layout(tree, &self.expansion, &self.config),
            None => Layout::default(),
        };
        self.bump();
    }

    /// Replaces the document wholesale.
    ///
    /// On success, expansion resets to just the new root and the selection
    /// is cleared (ids from the old tree mean nothing in the new one). On
    /// error the previous document state is kept untouched and the error is
    /// returned for the caller to surface. The camera survives either way.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from tree construction.
    pub fn set_graph(&mut self, graph: &MapGraph) -> Result<(), GraphError> {
        let tree = MapTree::from_graph(graph)?;
        self.expansion = Expansion::for_root(&tree);
        self.selected = None;
        self.tree = Some(tree);
        self.relayout();
        Ok(())
    }

    /// Drops the document; the scene becomes empty. The camera is kept.
    pub fn clear_graph(&mut self) {
        if self.tree.is_none() {
            return;
        }
        self.tree = None;
        self.expansion = Expansion::new();
        self.selected = None;
        self.relayout();
    }

    /// Toggles the children of `id` and relayouts.
    ///
    /// Unknown ids (or no document) are a silent no-op returning false.
    pub fn toggle_node(&mut self, id: &str) -> bool {
        let Some(tree) = &self.tree else {
            return false;
        };
        if tree.get(id).is_none() {
            return false;
        }
        self.expansion.toggle(id);
        self.relayout();
        true
    }

    /// Selects `id`, or clears the selection with `None`.
    ///
    /// Selection is cosmetic: it never moves the layout or the camera.
    /// Unknown ids are rejected (returning false) so a selection always
    /// names a live node. Re-selecting the current state returns true
    /// without bumping the revision.
    pub fn select_node(&mut self, id: Option<&str>) -> bool {
        let next = match (id, &self.tree) {
            (None, _) => None,
            (Some(id), Some(tree)) if tree.get(id).is_some() => Some(String::from(id)),
            _ => return false,
        };
        if next != self.selected {
            self.selected = next;
            self.bump();
        }
        true
    }

    /// The selected node id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Begins a pan at `pos` (device px).
    ///
    /// No hit-testing happens here; callers that pan only from the
    /// background should check [`node_at`](Self::node_at) on pointer-down.
    pub fn begin_pan(&mut self, pos: Point) {
        self.pan.begin(pos);
    }

    /// Continues a pan. A no-op unless a pan is active.
    pub fn pan_to(&mut self, pos: Point) {
        let Some(delta) = self.pan.update(pos) else {
            return;
        };
        if delta == Vec2::ZERO {
            return;
        }
        self.camera.pan_by_view(delta);
        self.bump();
    }

    /// Ends the pan. Safe without a matching begin.
    pub fn end_pan(&mut self) {
        self.pan.end();
    }

    /// Whether a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_active()
    }

    /// Wheel zoom anchored at the cursor: positive `delta` zooms out one
    /// step, negative zooms in, zero does nothing.
    pub fn wheel(&mut self, delta: f64, cursor_view: Point) {
        if delta == 0.0 {
            return;
        }
        let factor = if delta > 0.0 {
            WHEEL_STEP
        } else {
            1.0 / WHEEL_STEP
        };
        self.camera.zoom_about_view_point(cursor_view, factor);
        self.bump();
    }

    /// Zoom-in button: shrinks the window about its center.
    pub fn zoom_in(&mut self) {
        self.camera.zoom_centered(BUTTON_ZOOM_IN);
        self.bump();
    }

    /// Zoom-out button: grows the window about its center.
    pub fn zoom_out(&mut self) {
        self.camera.zoom_centered(BUTTON_ZOOM_OUT);
        self.bump();
    }

    /// Recenters the camera on the plane origin at 1:1 scale. A no-op when
    /// it is already there.
    pub fn reset_view(&mut self) {
        let fresh = Camera::new(self.camera.surface());
        if self.camera == fresh {
            return;
        }
        self.camera = fresh;
        self.bump();
    }

    /// Updates the surface size (device px). The camera window is kept, so
    /// content stays at its plane position; only the pixel mapping changes.
    pub fn resize_surface(&mut self, surface: Size) {
        if self.camera.surface() == surface {
            return;
        }
        self.camera.set_surface(surface);
        self.bump();
    }

    /// Frames the whole visible layout with `margin` plane units of
    /// breathing room. A no-op when nothing is visible.
    pub fn fit_view(&mut self, margin: f64) {
        let Some(bounds) = self.layout.bounds() else {
            return;
        };
        self.camera.fit_rect(bounds, margin);
        self.bump();
    }

    /// The visible node within `radius_view` device px of `pos` (device
    /// px), or `None`. The nearest wins; ties go to the later-drawn node.
    #[must_use]
    pub fn node_at(&self, pos: Point, radius_view: f64) -> Option<&str> {
        let tree = self.tree.as_ref()?;
        let mut best: Option<(&str, f64)> = None;
        for placed in &self.layout.nodes {
            let view_pos = self.camera.world_to_view_point(placed.pos);
            let dist = (view_pos - pos).hypot();
            if dist > radius_view {
                continue;
            }
            if let Some((_, best_dist)) = best
                && dist > best_dist
            {
                continue;
            }
            best = Some((tree.node(placed.node).id.as_str(), dist));
        }
        best.map(|(id, _)| id)
    }

    /// The camera, read-only.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The current layout, read-only.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The built tree, if a document is loaded.
    #[must_use]
    pub fn tree(&self) -> Option<&MapTree> {
        self.tree.as_ref()
    }

    /// The layout spacing in use.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Change counter covering layout, camera, and selection.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// A pull snapshot of everything a renderer needs.
    #[must_use]
    pub fn scene(&self) -> Scene<'_> {
        let mut nodes = Vec::with_capacity(self.layout.nodes.len());
        if let Some(tree) = &self.tree {
            for placed in &self.layout.nodes {
                let node = tree.node(placed.node);
                nodes.push(SceneNode {
                    id: node.id.as_str(),
                    label: node.label.as_str(),
                    pos: placed.pos,
                    level: placed.level,
                    expanded: placed.expanded,
                    has_children: placed.has_children,
                    selected: self.selected.as_deref() == Some(node.id.as_str()),
                });
            }
        }
        Scene {
            nodes,
            edges: &self.layout.edges,
            camera: self.camera.rect(),
            surface: self.camera.surface(),
            revision: self.revision,
        }
    }
}
