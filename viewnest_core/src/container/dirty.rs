// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty flags and invalidation.
//!
//! Invalidation never paints. A region climbs the parent chain, translated
//! into each ancestor's parent coordinates and clipped to its bounds, until it
//! reaches the root and lands in the frame's
//! [`DamageRegion`](crate::frame::DamageRegion). Invisible or detached views
//! and regions clipped to nothing stop on the way.

use kurbo::Rect;

use crate::geom;
use crate::trace::InvalidateEvent;
use crate::view::{ChildCursor, INVALID, ViewFlags, ViewId, ViewTree};

impl ViewTree {
    /// Schedules a repaint of the view's whole bounds.
    ///
    /// A leaf's dirty flag is cleared: its region is now scheduled.
    pub fn invalid(&mut self, id: ViewId) {
        self.validate(id);
        let i = id.idx as usize;
        if self.container[i].is_none() {
            self.flags[i].remove(ViewFlags::DIRTY);
        }
        self.forward_invalid(id, self.view_size[i]);
    }

    /// Schedules a repaint of `rect`.
    ///
    /// For a container `rect` is in its local coordinates; it is translated
    /// to the parent's space and clipped to the container's bounds first. For
    /// a leaf `rect` is already in the parent's space.
    pub fn invalid_rect(&mut self, id: ViewId, rect: Rect) {
        self.validate(id);
        let i = id.idx as usize;
        if self.container[i].is_none() {
            self.forward_invalid(id, rect);
            return;
        }
        if !self.flags[i].contains(ViewFlags::VISIBLE) {
            return;
        }
        let size = self.view_size[i];
        let clipped = geom::bound(rect + size.origin().to_vec2(), size);
        if geom::is_empty(clipped) {
            return;
        }
        self.forward_invalid(id, clipped);
    }

    /// Sets or clears the view's own dirty flag.
    pub fn set_dirty(&mut self, id: ViewId, dirty: bool) {
        self.validate(id);
        self.flags[id.idx as usize].set(ViewFlags::DIRTY, dirty);
    }

    /// Whether the view needs repainting.
    ///
    /// A container is dirty if its own flag is set or a visible, dirty child
    /// overlaps the container's local bounds with a non-empty area.
    #[must_use]
    pub fn is_dirty(&self, id: ViewId) -> bool {
        self.validate(id);
        let i = id.idx as usize;
        if self.flags[i].contains(ViewFlags::DIRTY) {
            return true;
        }
        if self.container[i].is_none() {
            return false;
        }
        let local = self.view_size[i].with_origin((0.0, 0.0));
        self.children(id).any(|child| {
            let c = child.idx as usize;
            self.flags[c].contains(ViewFlags::VISIBLE)
                && self.is_dirty(child)
                && !geom::is_empty(geom::bound(self.view_size[c], local))
        })
    }

    /// Turns dirty flags below `container` into frame damage.
    ///
    /// A dirty container is invalidated as a whole; otherwise each visible
    /// dirty child is, recursing into child containers.
    pub fn invalidate_dirty_views(&mut self, container: ViewId) {
        self.validate(container);
        let i = container.idx as usize;
        if !self.flags[i].contains(ViewFlags::VISIBLE) {
            return;
        }
        if self.flags[i].contains(ViewFlags::DIRTY) {
            self.forward_invalid(container, self.view_size[i]);
            return;
        }
        let mut cursor = ChildCursor::back_to_front(self, container);
        while let Some(child) = cursor.next(self) {
            if !self.is_visible(child) || !self.is_dirty(child) {
                continue;
            }
            if self.is_container(child) {
                self.invalidate_dirty_views(child);
            } else {
                self.invalid(child);
            }
        }
    }

    /// Hands `rect`, in `id`'s parent coordinates, to the parent or frame.
    fn forward_invalid(&mut self, id: ViewId, rect: Rect) {
        let i = id.idx as usize;
        if !self.flags[i].contains(ViewFlags::VISIBLE | ViewFlags::ATTACHED) {
            return;
        }
        let parent = self.parent[i];
        if parent != INVALID {
            self.invalid_rect(self.id_of(parent), rect);
        } else if self.frame.root == Some(id) {
            self.tracer.invalidate(&InvalidateEvent { view: id, rect });
            self.frame.invalid_rect(rect);
        }
    }
}
