// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window-level state shared by every view of a tree.
//!
//! [`Frame`] stands in for the host window: it knows the root container, the
//! focused view, how focus rings look, and which regions were invalidated
//! since the host last drained [`DamageRegion`].

use alloc::vec::Vec;

use kurbo::Rect;

use crate::color::Color;
use crate::geom;
use crate::view::ViewId;

/// A region of the window that needs repainting.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DamageRegion {
    /// The whole window needs repainting.
    Full,
    /// Rectangles in frame coordinates.
    Rects(Vec<Rect>),
    /// Nothing changed.
    #[default]
    None,
}

impl DamageRegion {
    /// Returns `true` if no region needs repainting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Adds one rectangle. Empty rectangles are ignored.
    pub fn add_rect(&mut self, rect: Rect) {
        if geom::is_empty(rect) {
            return;
        }
        match self {
            Self::Full => {}
            Self::Rects(rects) => rects.push(rect),
            Self::None => *self = Self::Rects(alloc::vec![rect]),
        }
    }

    /// Merges another damage region into this one.
    pub fn merge(&mut self, other: &Self) {
        match (&mut *self, other) {
            (Self::Full, _) | (_, Self::None) => {}
            (_, Self::Full) => *self = Self::Full,
            (Self::None, _) => *self = other.clone(),
            (Self::Rects(a), Self::Rects(b)) => a.extend_from_slice(b),
        }
    }

    /// Smallest rectangle covering every damaged rect, or `None` when there
    /// is nothing to repaint or the whole window is damaged.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rects(rects) => rects.iter().copied().reduce(|a, b| a.union(b)),
            Self::Full | Self::None => None,
        }
    }
}

/// State of the window hosting a view tree.
#[derive(Debug)]
pub struct Frame {
    pub(crate) root: Option<ViewId>,
    pub(crate) focus_view: Option<ViewId>,
    focus_color: Color,
    focus_width: f64,
    focus_drawing_enabled: bool,
    damage: DamageRegion,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Default focus ring color.
    pub const DEFAULT_FOCUS_COLOR: Color = Color::RED;
    /// Default focus ring width.
    pub const DEFAULT_FOCUS_WIDTH: f64 = 2.0;

    /// Creates a frame with no root, no focus, and focus drawing disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: None,
            focus_view: None,
            focus_color: Self::DEFAULT_FOCUS_COLOR,
            focus_width: Self::DEFAULT_FOCUS_WIDTH,
            focus_drawing_enabled: false,
            damage: DamageRegion::None,
        }
    }

    /// The attached root container, if any.
    #[must_use]
    pub fn root(&self) -> Option<ViewId> {
        self.root
    }

    /// The view holding keyboard focus, if any.
    #[must_use]
    pub fn focus_view(&self) -> Option<ViewId> {
        self.focus_view
    }

    /// Focus ring color.
    #[must_use]
    pub fn focus_color(&self) -> Color {
        self.focus_color
    }

    /// Sets the focus ring color.
    pub fn set_focus_color(&mut self, color: Color) {
        self.focus_color = color;
    }

    /// Focus ring width.
    #[must_use]
    pub fn focus_width(&self) -> f64 {
        self.focus_width
    }

    /// Sets the focus ring width. Negative widths are clamped to zero.
    pub fn set_focus_width(&mut self, width: f64) {
        self.focus_width = width.max(0.0);
    }

    /// Whether containers draw a ring around their focused child.
    #[must_use]
    pub fn focus_drawing_enabled(&self) -> bool {
        self.focus_drawing_enabled
    }

    /// Enables or disables focus ring drawing.
    pub fn set_focus_drawing_enabled(&mut self, enabled: bool) {
        self.focus_drawing_enabled = enabled;
    }

    /// Regions invalidated since the last [`take_damage`](Self::take_damage).
    #[must_use]
    pub fn damage(&self) -> &DamageRegion {
        &self.damage
    }

    /// Drains the accumulated damage.
    pub fn take_damage(&mut self) -> DamageRegion {
        core::mem::take(&mut self.damage)
    }

    /// Marks the whole window for repaint.
    pub fn invalidate_all(&mut self) {
        self.damage = DamageRegion::Full;
    }

    pub(crate) fn invalid_rect(&mut self, rect: Rect) {
        self.damage.add_rect(rect);
    }
}
