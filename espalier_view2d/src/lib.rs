// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=espalier_view2d --heading-base-level=0

//! Espalier View 2D: camera state for a plane-mapped UI.
//!
//! The camera model here is the visible window itself: a [`kurbo::Rect`] in
//! plane units that a renderer can hand straight to an SVG `viewBox` or
//! invert into a transform. Alongside it, the camera tracks the rendering
//! surface size in device pixels so pointer deltas can be converted into
//! plane deltas.
//!
//! - [`Camera`]: pan, cursor-anchored zoom, centered zoom, reset, fitting,
//!   and point conversion between surface and plane space.
//! - [`PanSession`]: drag bookkeeping that turns a stream of pointer
//!   positions into incremental deltas, with every method safe to call
//!   whether or not a session is active.
//!
//! Input plumbing stays outside: callers translate their event system into
//! these calls and decide policy such as "panning starts only on the
//! background".
//!
//! ## Minimal example
//!
//! ```rust
//! use espalier_view2d::{Camera, PanSession, WHEEL_STEP};
//! use kurbo::{Point, Size};
//!
//! let mut camera = Camera::new(Size::new(800.0, 600.0));
//!
//! // Drag the pointer 10 px to the right: content follows the pointer, so
//! // the window slides left.
//! let mut pan = PanSession::new();
//! pan.begin(Point::new(100.0, 100.0));
//! if let Some(delta) = pan.update(Point::new(110.0, 100.0)) {
//!     camera.pan_by_view(delta);
//! }
//! pan.end();
//! assert_eq!(camera.rect().x0, -410.0);
//!
//! // A wheel step about the window center leaves the center's plane point
//! // where it was on screen.
//! let center = Point::new(400.0, 300.0);
//! let before = camera.view_to_world_point(center);
//! camera.zoom_about_view_point(center, WHEEL_STEP);
//! let after = camera.view_to_world_point(center);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom factors scale the window rectangle, so a factor above one shows
//!   more of the plane (zooms out).
//! - Pan and zoom are unclamped; min/max zoom or world bounds belong to a
//!   higher layer if an application wants them.
//! - The window's aspect ratio matches the surface as long as it was
//!   established by [`Camera::new`]/[`Camera::reset`] and the surface has
//!   not been resized since; conversions handle the general case anyway.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod pan;

pub use camera::{BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT, Camera, CameraDebugInfo, WHEEL_STEP};
pub use pan::PanSession;
