// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=espalier_svg --heading-base-level=0

//! SVG export for Espalier mind-map scenes.
//!
//! [`scene_to_svg`] turns a [`Scene`] snapshot into a standalone SVG
//! document. The camera window becomes the `viewBox`, so the document shows
//! exactly what an interactive surface of the same size would show.
//!
//! This is intended for headless snapshots and debugging/inspection, not
//! pixel-perfect parity with an interactive renderer:
//! - Labels are single-line `<text>` runs; long labels are not wrapped.
//! - The expander affordance is a plain chevron polyline.
//! - The interactive app themes through CSS variables; here colors land as
//!   inline presentation attributes, with class names (`node`, `edge`,
//!   `selected`, `collapsed`, `expander`, `label`, `halo`) kept for
//!   downstream styling.
//!
//! ```rust
//! use espalier_surface::MapSurface;
//! use espalier_svg::{SvgTheme, scene_to_svg};
//! use espalier_tree::{GraphEdge, GraphNode, MapGraph};
//! use kurbo::Size;
//!
//! let graph = MapGraph {
//!     nodes: vec![GraphNode::new("root", "Rust"), GraphNode::new("own", "Ownership")],
//!     edges: vec![GraphEdge::new("root", "own")],
//! };
//! let mut surface = MapSurface::new(Size::new(800.0, 600.0));
//! surface.set_graph(&graph)?;
//!
//! let svg = scene_to_svg(&surface.scene(), &SvgTheme::default());
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("viewBox=\"-400 -300 800 600\""));
//! # Ok::<(), espalier_tree::GraphError>(())
//! ```

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use espalier_layout::PlacedEdge;
use espalier_surface::{Scene, SceneNode};

/// Node disc radius in plane units.
const NODE_RADIUS: f64 = 10.0;
/// Radius of the glow drawn over a selected disc.
const HALO_RADIUS: f64 = 14.0;
/// How far above the disc center the label baseline sits.
const LABEL_LIFT: f64 = 20.0;
/// Connectors leave the source this far below its center, clearing the
/// disc and the expander chevron.
const EDGE_DROP: f64 = 15.0;
/// Vertical offset of the expander group under the disc center.
const EXPANDER_DROP: f64 = 12.0;

/// Inline presentation colors for [`scene_to_svg`].
#[derive(Clone, Debug)]
pub struct SvgTheme {
    /// Connector stroke color.
    pub edge: String,
    /// Node disc fill.
    pub node_fill: String,
    /// Node disc outline, also used for the expander chevron.
    pub node_stroke: String,
    /// Disc fill for the selected node.
    pub selected_fill: String,
    /// Glow color over the selected disc.
    pub halo: String,
    /// Glow opacity.
    pub halo_opacity: f64,
    /// Label text color.
    pub label: String,
    /// Label font size in plane units.
    pub font_size: f64,
}

impl Default for SvgTheme {
    fn default() -> Self {
        Self {
            edge: String::from("#8b9096"),
            node_fill: String::from("#f3efe7"),
            node_stroke: String::from("#6e675c"),
            selected_fill: String::from("#3f6fe0"),
            halo: String::from("#f0c24b"),
            halo_opacity: 0.35,
            label: String::from("#2d2a24"),
            font_size: 16.0,
        }
    }
}

/// Renders `scene` as a standalone SVG document.
///
/// The `width`/`height` attributes come from the scene's surface size and
/// the `viewBox` from its camera window, so pan and zoom state carry into
/// the export. Edges are written before nodes, matching the draw order of
/// an interactive renderer.
#[must_use]
pub fn scene_to_svg(scene: &Scene<'_>, theme: &SvgTheme) -> String {
    let camera = scene.camera;
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">",
        fmt_f64(scene.surface.width),
        fmt_f64(scene.surface.height),
        fmt_f64(camera.x0),
        fmt_f64(camera.y0),
        fmt_f64(camera.width()),
        fmt_f64(camera.height()),
    );
    for edge in scene.edges {
        write_edge(&mut svg, edge, theme);
    }
    for node in &scene.nodes {
        write_node(&mut svg, node, theme);
    }
    svg.push_str("</svg>");
    svg
}

fn write_edge(out: &mut String, edge: &PlacedEdge, theme: &SvgTheme) {
    let (sx, sy) = (edge.source.x, edge.source.y);
    let (tx, ty) = (edge.target.x, edge.target.y);
    // Vertical cubic: both control points sit on the height midline.
    let mid = (sy + ty) / 2.0;
    let _ = write!(
        out,
        "<path class=\"edge\" d=\"M{} {}C{} {} {} {} {} {}\" stroke=\"{}\" stroke-width=\"1.5\" fill=\"none\"/>",
        fmt_f64(sx),
        fmt_f64(sy + EDGE_DROP),
        fmt_f64(sx),
        fmt_f64(mid),
        fmt_f64(tx),
        fmt_f64(mid),
        fmt_f64(tx),
        fmt_f64(ty),
        theme.edge,
    );
}

fn write_node(out: &mut String, node: &SceneNode<'_>, theme: &SvgTheme) {
    out.push_str("<g class=\"node");
    if node.selected {
        out.push_str(" selected");
    }
    if node.has_children && !node.expanded {
        out.push_str(" collapsed");
    }
    out.push_str("\" data-id=\"");
    push_escaped(out, node.id);
    let _ = write!(
        out,
        "\" transform=\"translate({} {})\">",
        fmt_f64(node.pos.x),
        fmt_f64(node.pos.y),
    );

    let fill = if node.selected {
        &theme.selected_fill
    } else {
        &theme.node_fill
    };
    let _ = write!(
        out,
        "<circle r=\"{}\" fill=\"{fill}\" stroke=\"{}\" stroke-width=\"2\"/>",
        fmt_f64(NODE_RADIUS),
        theme.node_stroke,
    );
    if node.selected {
        let _ = write!(
            out,
            "<circle class=\"halo\" r=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            fmt_f64(HALO_RADIUS),
            theme.halo,
            fmt_f64(theme.halo_opacity),
        );
    }
    let _ = write!(
        out,
        "<text class=\"label\" text-anchor=\"middle\" y=\"{}\" font-size=\"{}\" fill=\"{}\">",
        fmt_f64(-LABEL_LIFT),
        fmt_f64(theme.font_size),
        theme.label,
    );
    push_escaped(out, node.label);
    out.push_str("</text>");
    if node.has_children {
        write_expander(out, node.expanded, theme);
    }
    out.push_str("</g>");
}

fn write_expander(out: &mut String, expanded: bool, theme: &SvgTheme) {
    let _ = write!(
        out,
        "<g class=\"expander\" transform=\"translate(0 {})",
        fmt_f64(EXPANDER_DROP)
    );
    // Collapsed branches turn the chevron to point at the hidden subtree.
    if !expanded {
        out.push_str(" rotate(-90)");
    }
    out.push_str("\">");
    let _ = write!(
        out,
        "<path d=\"M-5 -2L0 3L5 -2\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\"/>",
        theme.node_stroke,
    );
    out.push_str("</g>");
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable enough for snapshots.
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "scene coordinates are small; best-effort pretty formatting"
        )]
        let i = v as i64;
        let diff = (i as f64) - v;
        if diff > -1e-9 && diff < 1e-9 {
            return format!("{i}");
        }
    } else {
        return format!("{v}");
    }

    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
