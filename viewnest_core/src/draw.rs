// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing contracts implemented by the host.
//!
//! The container engine never rasterizes anything itself. It moves the
//! context's origin, narrows its clip, scales its global alpha, and asks views
//! (and background bitmaps) to draw. Coordinates passed to a [`DrawContext`]
//! are relative to its current [`offset`](DrawContext::offset), including the
//! clip rectangle.

use core::fmt;
use core::ops::{Deref, DerefMut};

use kurbo::{BezPath, Point, Rect, Vec2};

use crate::color::Color;

/// Anti-aliasing mode for subsequent primitives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Pixel-aligned, no anti-aliasing.
    #[default]
    Aliased,
    /// Anti-aliased edges.
    AntiAliased,
}

/// Stroke pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Dotted line.
    OnOff,
}

/// How a rectangle is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawStyle {
    /// Outline only, in the frame color.
    Stroked,
    /// Interior only, in the fill color.
    Filled,
    /// Interior in the fill color, outline in the frame color.
    FilledAndStroked,
}

/// Fill rule for paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathFillRule {
    /// Nonzero winding.
    NonZero,
    /// Even-odd; used for focus rings made of nested rectangles.
    EvenOdd,
}

/// A 2D drawing surface.
pub trait DrawContext {
    /// Current origin, in device coordinates.
    fn offset(&self) -> Point;
    /// Moves the origin.
    fn set_offset(&mut self, offset: Point);

    /// Current clip, relative to the current offset.
    fn clip_rect(&self) -> Rect;
    /// Replaces the clip; `clip` is relative to the current offset.
    fn set_clip_rect(&mut self, clip: Rect);

    /// Multiplier applied to everything drawn.
    fn global_alpha(&self) -> f32;
    /// Replaces the global alpha multiplier.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Color used for fills.
    fn set_fill_color(&mut self, color: Color);
    /// Color used for strokes.
    fn set_frame_color(&mut self, color: Color);
    /// Stroke width.
    fn set_line_width(&mut self, width: f64);
    /// Stroke pattern.
    fn set_line_style(&mut self, style: LineStyle);
    /// Anti-aliasing mode.
    fn set_draw_mode(&mut self, mode: DrawMode);

    /// Draws a rectangle.
    fn draw_rect(&mut self, rect: Rect, style: DrawStyle);
    /// Fills a path with the current fill color.
    fn fill_path(&mut self, path: &BezPath, rule: PathFillRule);
}

/// A pre-rendered image used as a container background.
pub trait Bitmap: fmt::Debug {
    /// Draws the part of the image starting at `offset` into `dest`.
    fn draw(&self, ctx: &mut dyn DrawContext, dest: Rect, offset: Point);
}

/// Translates a context's origin for the guard's lifetime.
///
/// The previous offset is restored on drop, whatever path leaves the scope.
pub(crate) struct ScopedOffset<'a> {
    ctx: &'a mut dyn DrawContext,
    saved: Point,
}

impl<'a> ScopedOffset<'a> {
    pub(crate) fn translate(ctx: &'a mut dyn DrawContext, by: Vec2) -> Self {
        let saved = ctx.offset();
        ctx.set_offset(saved + by);
        Self { ctx, saved }
    }
}

impl<'a> Deref for ScopedOffset<'a> {
    type Target = dyn DrawContext + 'a;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl DerefMut for ScopedOffset<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl Drop for ScopedOffset<'_> {
    fn drop(&mut self) {
        self.ctx.set_offset(self.saved);
    }
}

impl fmt::Debug for ScopedOffset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedOffset")
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}
