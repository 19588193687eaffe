// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag bookkeeping for panning.

use kurbo::{Point, Vec2};

/// Pointer-drag bookkeeping for panning.
///
/// A session turns a stream of pointer positions into incremental deltas
/// for [`Camera::pan_by_view`](crate::Camera::pan_by_view). Every method is
/// safe to call whether or not a session is active, so event plumbing needs
/// no guards of its own: updates outside a session report `None`, ending a
/// fresh session is a no-op.
///
/// Whether a pointer-down is allowed to begin a pan (for example, only when
/// it lands on the background rather than a node) is the caller's policy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanSession {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl PanSession {
    /// No session active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a session at `pos` (device px). Beginning again re-anchors.
    pub fn begin(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Advances to `pos`, returning the delta since the last recorded
    /// position. Returns `None` (and records nothing) when no session is
    /// active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Offset from the session anchor to the last position, if a session is
    /// active.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        match (self.start_pos, self.last_pos) {
            (Some(start), Some(last)) => Some(last - start),
            _ => None,
        }
    }

    /// Ends the session. Safe on a fresh state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Whether a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_pos.is_some()
    }

    /// The anchor position, if a session is active.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.start_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_without_begin_reports_nothing() {
        let mut pan = PanSession::new();
        assert_eq!(pan.update(Point::new(10.0, 10.0)), None);
        assert!(!pan.is_active());
    }

    #[test]
    fn end_on_fresh_state_is_safe() {
        let mut pan = PanSession::new();
        pan.end();
        pan.end();
        assert!(!pan.is_active());
        assert_eq!(pan.total_offset(), None);
    }

    #[test]
    fn updates_track_incremental_deltas() {
        let mut pan = PanSession::new();
        pan.begin(Point::new(100.0, 100.0));
        assert_eq!(
            pan.update(Point::new(110.0, 95.0)),
            Some(Vec2::new(10.0, -5.0))
        );
        assert_eq!(
            pan.update(Point::new(111.0, 95.0)),
            Some(Vec2::new(1.0, 0.0))
        );
        assert_eq!(pan.total_offset(), Some(Vec2::new(11.0, -5.0)));
    }

    #[test]
    fn first_update_is_relative_to_the_anchor() {
        let mut pan = PanSession::new();
        pan.begin(Point::new(5.0, 5.0));
        assert_eq!(pan.update(Point::new(5.0, 5.0)), Some(Vec2::ZERO));
    }

    #[test]
    fn begin_again_re_anchors() {
        let mut pan = PanSession::new();
        pan.begin(Point::new(0.0, 0.0));
        pan.update(Point::new(50.0, 0.0));
        pan.begin(Point::new(200.0, 200.0));
        assert_eq!(pan.origin(), Some(Point::new(200.0, 200.0)));
        assert_eq!(pan.total_offset(), Some(Vec2::ZERO));
    }

    #[test]
    fn ending_stops_the_stream() {
        let mut pan = PanSession::new();
        pan.begin(Point::new(1.0, 1.0));
        pan.end();
        assert_eq!(pan.update(Point::new(2.0, 2.0)), None);
    }
}
