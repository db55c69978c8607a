// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resizing, autosize, and coordinate conversion.

use kurbo::{Point, Rect, Vec2};

use crate::geom;
use crate::view::{Autosize, ChildCursor, ViewId, ViewTree};

impl ViewTree {
    /// Moves or resizes a view.
    ///
    /// Nothing happens if `rect` equals the current bounds. With `invalid`,
    /// both the old and the new area are invalidated. A container then moves
    /// its children according to their [`Autosize`] masks (or its own
    /// `ROW`/`COLUMN` distribution) and tells every child its parent
    /// changed size.
    pub fn set_view_size(&mut self, id: ViewId, rect: Rect, invalid: bool) {
        self.validate(id);
        let i = id.idx as usize;
        let old = self.view_size[i];
        if old == rect {
            return;
        }
        if invalid {
            self.invalid(id);
        }
        self.view_size[i] = rect;
        if invalid {
            self.invalid(id);
        }
        if self.container[i].is_some() {
            self.autosize_children(id, old, rect);
            if self.is_alive(id) {
                self.parent_size_changed(id);
            }
        }
    }

    /// Notifies every child (and, through child containers, every
    /// descendant) that its parent changed size.
    pub fn parent_size_changed(&mut self, container: ViewId) {
        let mut cursor = ChildCursor::back_to_front(self, container);
        while let Some(child) = cursor.next(self) {
            self.with_view(child, |view, cx| view.parent_size_changed(cx));
            if self.is_alive(child) && self.is_container(child) {
                self.parent_size_changed(child);
            }
        }
    }

    /// Grows or shrinks a container to wrap its visible children.
    ///
    /// The left and top margin of the children is mirrored on the right and
    /// bottom. Returns `false` for `ROW`/`COLUMN` containers, leaves, and
    /// containers without visible children.
    pub fn size_to_fit(&mut self, container: ViewId) -> bool {
        if !self.is_container(container) {
            return false;
        }
        if self
            .autosize(container)
            .intersects(Autosize::ROW | Autosize::COLUMN)
        {
            return false;
        }
        let Some(bounds) = self
            .children(container)
            .filter(|&child| self.is_visible(child))
            .map(|child| self.view_size[child.idx as usize])
            .reduce(|a, b| a.union(b))
        else {
            return false;
        };

        let mut size = self.view_size(container);
        size.x1 = size.x0 + bounds.x1 + bounds.x0;
        size.y1 = size.y0 + bounds.y1 + bounds.y0;
        self.set_view_size(container, size, true);
        self.set_mouseable_area(container, size);
        true
    }

    /// The part of a view not clipped away by its ancestors, in its parent's
    /// coordinates.
    #[must_use]
    pub fn visible_size(&self, id: ViewId) -> Rect {
        let rect = self.view_size(id);
        match self.parent(id) {
            Some(parent) => self.visible_in(parent, rect),
            None => rect,
        }
    }

    /// Converts a point in frame coordinates to `id`'s local coordinates.
    ///
    /// For a container these are its children's coordinates; for a leaf, its
    /// parent's (the space its bounds live in).
    #[must_use]
    pub fn frame_to_local(&self, id: ViewId, point: Point) -> Point {
        point - self.local_origin(id)
    }

    /// Converts a point in `id`'s local coordinates to frame coordinates.
    #[must_use]
    pub fn local_to_frame(&self, id: ViewId, point: Point) -> Point {
        point + self.local_origin(id)
    }

    // -- Internal helpers --

    /// `rect` in `container`'s local coordinates, clipped by it and every
    /// ancestor.
    fn visible_in(&self, container: ViewId, rect: Rect) -> Rect {
        let size = self.view_size[container.idx as usize];
        let shift = size.origin().to_vec2();
        let mut result = geom::bound(rect + shift, size);
        if let Some(parent) = self.parent(container) {
            result = self.visible_in(parent, result);
        }
        result - shift
    }

    /// Frame-space position of the origin of `id`'s local space.
    fn local_origin(&self, id: ViewId) -> Vec2 {
        let mut origin = Vec2::ZERO;
        let mut cur = if self.is_container(id) {
            Some(id)
        } else {
            self.parent(id)
        };
        while let Some(c) = cur {
            origin += self.view_size[c.idx as usize].origin().to_vec2();
            cur = self.parent(c);
        }
        origin
    }

    fn autosize_children(&mut self, container: ViewId, old: Rect, new: Rect) {
        let dw = new.width() - old.width();
        let dh = new.height() - old.height();
        if dw == 0.0 && dh == 0.0 {
            return;
        }
        let mask = self.autosize[container.idx as usize];
        let column = mask.contains(Autosize::COLUMN);
        let row = mask.contains(Autosize::ROW);
        let n = self.child_count(container) as f64;

        let mut counter = 0.0;
        let mut cursor = ChildCursor::back_to_front(self, container);
        while let Some(child) = cursor.next(self) {
            let ci = child.idx as usize;
            let anchors = self.autosize[ci];
            let mut size = self.view_size[ci];
            let mut area = self.mouseable_area[ci];

            if column {
                let share = dw / n;
                let shift = Vec2::new(counter * share, 0.0);
                size = size + shift;
                area = area + shift;
                size.x1 += share;
                area.x1 += share;
            } else if dw != 0.0 && anchors.contains(Autosize::RIGHT) {
                size.x1 += dw;
                area.x1 += dw;
                if !anchors.contains(Autosize::LEFT) {
                    size.x0 += dw;
                    area.x0 += dw;
                }
            }

            if row {
                let share = dh / n;
                let shift = Vec2::new(0.0, counter * share);
                size = size + shift;
                area = area + shift;
                size.y1 += share;
                area.y1 += share;
            } else if dh != 0.0 && anchors.contains(Autosize::BOTTOM) {
                size.y1 += dh;
                area.y1 += dh;
                if !anchors.contains(Autosize::TOP) {
                    size.y0 += dh;
                    area.y0 += dh;
                }
            }

            if size != self.view_size[ci] {
                self.set_view_size(child, size, true);
                if self.is_alive(child) {
                    self.set_mouseable_area(child, area);
                }
            }
            counter += 1.0;
        }
    }
}
