// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The container draw pass.

use kurbo::{BezPath, Rect, Shape as _};

use crate::draw::{DrawContext, DrawMode, DrawStyle, LineStyle, PathFillRule, ScopedOffset};
use crate::geom;
use crate::trace::DrawPassEvent;
use crate::view::{ChildCursor, ViewFlags, ViewId, ViewTree};

/// Where a focus ring is drawn relative to the focused child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RingPlacement {
    Beneath,
    OnTop,
}

impl ViewTree {
    /// Draws a container and everything inside it.
    pub fn draw(&mut self, container: ViewId, ctx: &mut dyn DrawContext) {
        let size = self.view_size(container);
        self.draw_rect(container, ctx, size);
    }

    /// Draws the part of a view inside `update`, given in its parent's
    /// coordinates.
    ///
    /// For a container the context origin moves to the container's top-left
    /// corner for the duration of the call and the clip is narrowed to the
    /// update region. The background is painted, then every visible child
    /// that intersects the update region, back to front, each clipped to its
    /// own bounds and with the global alpha scaled by its alpha. The
    /// container's dirty flag is cleared afterwards.
    pub fn draw_rect(&mut self, id: ViewId, ctx: &mut dyn DrawContext, update: Rect) {
        self.validate(id);
        if self.container[id.idx as usize].is_none() {
            self.draw_leaf(id, ctx, update);
            return;
        }

        let size = self.view_size[id.idx as usize];
        let mut ctx = ScopedOffset::translate(ctx, size.origin().to_vec2());

        let client = geom::bound(update, size) - size.origin().to_vec2();
        let old_clip = ctx.clip_rect();
        let new_clip = geom::bound(client, old_clip);
        ctx.set_clip_rect(new_clip);

        self.draw_background_rect(id, &mut *ctx, client);

        let mut focus = self.focus_candidate(id);
        let mut drawn = 0_usize;
        let mut cursor = ChildCursor::back_to_front(self, id);
        while let Some(child) = cursor.next(self) {
            let ci = child.idx as usize;
            if !self.flags[ci].contains(ViewFlags::VISIBLE) {
                continue;
            }
            if focus == Some((child, RingPlacement::Beneath)) {
                let mut path = BezPath::new();
                if self.custom_focus_path(child, &mut path) {
                    ctx.set_clip_rect(old_clip);
                    self.fill_focus_ring(id, &mut *ctx, &path);
                    focus = None;
                }
            }
            if !self.check_update(child, client) {
                continue;
            }
            let clip = geom::bound(self.view_size[ci], new_clip);
            if geom::is_empty(clip) {
                continue;
            }
            ctx.set_clip_rect(clip);
            let alpha = ctx.global_alpha();
            ctx.set_global_alpha(alpha * self.alpha[ci]);
            self.draw_rect(child, &mut *ctx, client);
            ctx.set_global_alpha(alpha);
            drawn += 1;
        }
        ctx.set_clip_rect(old_clip);

        if let Some((child, _)) = focus.filter(|&(child, _)| self.is_alive(child)) {
            let mut path = BezPath::new();
            if !self.custom_focus_path(child, &mut path) {
                let visible = self.visible_size(child);
                let width = self.frame.focus_width();
                geom::push_rect(&mut path, visible);
                geom::push_rect(&mut path, visible.inflate(width, width));
            }
            self.fill_focus_ring(id, &mut *ctx, &path);
        }

        self.tracer.draw_pass(&DrawPassEvent {
            container: id,
            update: client,
            children_drawn: drawn,
        });
        if self.is_alive(id) {
            self.flags[id.idx as usize].remove(ViewFlags::DIRTY);
        }
    }

    /// Paints the container background into `rect`, in local coordinates.
    ///
    /// A background bitmap wins over the color. The color is skipped for a
    /// transparent container whose color is fully opaque: the container is
    /// meant to show what lies behind it.
    pub fn draw_background_rect(&self, container: ViewId, ctx: &mut dyn DrawContext, rect: Rect) {
        let Some(state) = self.container_state(container) else {
            return;
        };
        let size = self.view_size[container.idx as usize];
        let local = size.with_origin((0.0, 0.0));

        if let Some(bitmap) = &state.background {
            let old_clip = ctx.clip_rect();
            ctx.set_clip_rect(geom::bound(rect, old_clip));
            bitmap.draw(ctx, local, state.background_offset);
            ctx.set_clip_rect(old_clip);
            return;
        }

        let color = state.background_color;
        let transparent = self.flags[container.idx as usize].contains(ViewFlags::TRANSPARENT);
        if transparent && color.is_opaque() {
            return;
        }
        ctx.set_draw_mode(DrawMode::Aliased);
        ctx.set_line_width(1.0);
        ctx.set_fill_color(color);
        ctx.set_frame_color(color);
        ctx.set_line_style(LineStyle::Solid);
        ctx.draw_rect(local, DrawStyle::FilledAndStroked);
    }

    // -- Internal helpers --

    fn draw_leaf(&mut self, id: ViewId, ctx: &mut dyn DrawContext, update: Rect) {
        let bounds = self.view_size[id.idx as usize];
        if let Some(view) = self.behavior[id.idx as usize].as_deref_mut() {
            view.draw(ctx, bounds, update);
        }
        self.flags[id.idx as usize].remove(ViewFlags::DIRTY);
    }

    /// Whether `child` must be painted for `update` (local coordinates).
    pub(crate) fn check_update(&self, child: ViewId, update: Rect) -> bool {
        let bounds = self.view_size[child.idx as usize];
        match self.behavior(child) {
            Some(view) if self.container[child.idx as usize].is_none() => {
                view.check_update(update, bounds)
            }
            _ => geom::overlaps(update, bounds),
        }
    }

    /// The child whose focus ring this container draws, and when.
    fn focus_candidate(&self, container: ViewId) -> Option<(ViewId, RingPlacement)> {
        if !self.frame.focus_drawing_enabled() {
            return None;
        }
        let focus = self.frame.focus_view?;
        if !self.is_direct_child(container, focus) {
            return None;
        }
        let flags = self.flags[focus.idx as usize];
        if !flags.contains(ViewFlags::VISIBLE | ViewFlags::WANTS_FOCUS) {
            return None;
        }
        let placement = match self.behavior(focus).and_then(|v| v.focus_drawing()) {
            Some(custom) if !custom.draw_focus_on_top() => RingPlacement::Beneath,
            _ => RingPlacement::OnTop,
        };
        Some((focus, placement))
    }

    /// Asks the child's focus drawing for its ring outline.
    fn custom_focus_path(&self, child: ViewId, path: &mut BezPath) -> bool {
        let bounds = self.view_size[child.idx as usize];
        self.behavior(child)
            .and_then(|v| v.focus_drawing())
            .is_some_and(|custom| custom.focus_path(path, bounds))
    }

    /// Fills a focus ring and remembers where it went.
    fn fill_focus_ring(&mut self, container: ViewId, ctx: &mut dyn DrawContext, path: &BezPath) {
        let bounds = path.bounding_box();
        if let Some(state) = self.container_state_mut(container) {
            state.last_drawn_focus = bounds;
        }
        if geom::is_empty(bounds) {
            return;
        }
        ctx.set_draw_mode(DrawMode::AntiAliased);
        ctx.set_fill_color(self.frame.focus_color());
        ctx.fill_path(path, PathFillRule::EvenOdd);
    }
}
