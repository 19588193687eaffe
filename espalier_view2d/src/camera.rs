// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera rectangle state: pan, zoom, and coordinate conversion.

use kurbo::{Point, Rect, Size, Vec2};

/// Window-size factor of one wheel step; applied as-is when zooming out,
/// reciprocally when zooming in.
pub const WHEEL_STEP: f64 = 1.1;

/// Window-size factor of the zoom-in button.
pub const BUTTON_ZOOM_IN: f64 = 0.8;

/// Window-size factor of the zoom-out button.
///
/// Deliberately not the reciprocal of [`BUTTON_ZOOM_IN`]: an in/out button
/// pair nets a 0.96 size factor. Callers relying on exact round trips should
/// use wheel steps, which do invert each other.
pub const BUTTON_ZOOM_OUT: f64 = 1.2;

/// A camera over the layout plane.
///
/// State is the visible window itself (plane units) plus the rendering
/// surface size (device pixels). All zoom factors scale the window, so a
/// factor above one zooms out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    rect: Rect,
    surface: Size,
}

fn centered_rect(surface: Size) -> Rect {
    Rect::new(
        -surface.width / 2.0,
        -surface.height / 2.0,
        surface.width / 2.0,
        surface.height / 2.0,
    )
}

impl Camera {
    /// A camera over `surface` device pixels, centered on the plane origin
    /// at 1:1 scale.
    #[must_use]
    pub fn new(surface: Size) -> Self {
        Self {
            rect: centered_rect(surface),
            surface,
        }
    }

    /// The visible window in plane units.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The rendering surface in device pixels.
    #[must_use]
    pub fn surface(&self) -> Size {
        self.surface
    }

    /// Plane units per device pixel, per axis.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(
            self.rect.width() / self.surface.width,
            self.rect.height() / self.surface.height,
        )
    }

    /// Re-centers on the plane origin at 1:1 scale, adopting `surface` as
    /// the new surface size.
    pub fn reset(&mut self, surface: Size) {
        *self = Self::new(surface);
    }

    /// Updates the surface size without disturbing the visible window.
    pub fn set_surface(&mut self, surface: Size) {
        self.surface = surface;
    }

    /// Pans by a device-pixel delta. The window moves against the delta, so
    /// content follows the pointer.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        let scale = self.scale();
        self.rect = self.rect + Vec2::new(-delta.x * scale.x, -delta.y * scale.y);
    }

    /// Converts a device-pixel position into plane coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, view_pt: Point) -> Point {
        let scale = self.scale();
        Point::new(
            self.rect.x0 + view_pt.x * scale.x,
            self.rect.y0 + view_pt.y * scale.y,
        )
    }

    /// Converts a plane position into device pixels.
    #[must_use]
    pub fn world_to_view_point(&self, world_pt: Point) -> Point {
        let scale = self.scale();
        Point::new(
            (world_pt.x - self.rect.x0) / scale.x,
            (world_pt.y - self.rect.y0) / scale.y,
        )
    }

    /// Scales the window by `size_factor` while keeping `anchor` (plane
    /// units) at the same surface position.
    pub fn zoom_about_world_point(&mut self, anchor: Point, size_factor: f64) {
        let w = self.rect.width() * size_factor;
        let h = self.rect.height() * size_factor;
        let x0 = anchor.x - (anchor.x - self.rect.x0) * size_factor;
        let y0 = anchor.y - (anchor.y - self.rect.y0) * size_factor;
        self.rect = Rect::new(x0, y0, x0 + w, y0 + h);
    }

    /// Converts `anchor_view` (device px) through the current window, then
    /// zooms about the resulting plane point. The conversion has to use the
    /// pre-resize window; this method keeps that ordering in one place.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, size_factor: f64) {
        let anchor = self.view_to_world_point(anchor_view);
        self.zoom_about_world_point(anchor, size_factor);
    }

    /// Scales the window by `size_factor` about its own center.
    pub fn zoom_centered(&mut self, size_factor: f64) {
        let w = self.rect.width() * size_factor;
        let h = self.rect.height() * size_factor;
        let x0 = self.rect.x0 + (self.rect.width() - w) / 2.0;
        let y0 = self.rect.y0 + (self.rect.height() - h) / 2.0;
        self.rect = Rect::new(x0, y0, x0 + w, y0 + h);
    }

    /// Frames `world` with a uniform `margin` (plane units) on all sides,
    /// preserving the surface aspect ratio.
    ///
    /// A degenerate target (or surface) is centered without rescaling.
    pub fn fit_rect(&mut self, world: Rect, margin: f64) {
        let padded = world.inflate(margin, margin);
        if padded.width() <= 0.0
            || padded.height() <= 0.0
            || self.surface.width <= 0.0
            || self.surface.height <= 0.0
        {
            self.rect = Rect::from_center_size(padded.center(), self.rect.size());
            return;
        }
        let aspect = self.surface.width / self.surface.height;
        let size = if padded.width() / padded.height() > aspect {
            Size::new(padded.width(), padded.width() / aspect)
        } else {
            Size::new(padded.height() * aspect, padded.height())
        };
        self.rect = Rect::from_center_size(padded.center(), size);
    }

    /// Snapshot of the camera state for debug overlays.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            rect: self.rect,
            surface: self.surface,
            scale: self.scale(),
        }
    }
}

/// Point-in-time view of [`Camera`] internals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraDebugInfo {
    /// Visible window in plane units.
    pub rect: Rect,
    /// Surface size in device pixels.
    pub surface: Size,
    /// Plane units per device pixel, per axis.
    pub scale: Vec2,
}
