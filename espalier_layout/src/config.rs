// Copyright 2026 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing configuration.

/// Spacing constants for the tidy layout, in plane units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Vertical distance between adjacent depth levels.
    pub level_separation: f64,
    /// Horizontal gap inserted between colliding sibling subtrees.
    pub sibling_separation: f64,
}

impl LayoutConfig {
    /// The defaults tuned for circle-and-label mind-map rendering.
    pub const DEFAULT: Self = Self {
        level_separation: 120.0,
        sibling_separation: 60.0,
    };
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
