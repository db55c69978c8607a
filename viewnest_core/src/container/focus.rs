// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard focus: traversal, assignment, and ring invalidation.

use crate::geom;
use crate::trace::FocusChangedEvent;
use crate::view::{ChildCursor, ViewFlags, ViewId, ViewTree};

impl ViewTree {
    /// Moves focus to the next eligible view after `old` inside `container`.
    ///
    /// The walk runs back to front, or front to back with `reverse`. Views
    /// before `old` are skipped; with `old` as `None` the walk starts at the
    /// first child. A view is eligible if it wants focus and is visible and
    /// mouse-enabled; child containers that are not eligible themselves are
    /// searched from their start.
    pub fn advance_next_focus_view(
        &mut self,
        container: ViewId,
        old: Option<ViewId>,
        reverse: bool,
    ) -> bool {
        self.validate(container);
        let eligible = ViewFlags::WANTS_FOCUS | ViewFlags::MOUSE_ENABLED | ViewFlags::VISIBLE;
        let mut found_old = old.is_none();
        let mut cursor = ChildCursor::new(self, container, reverse);
        while let Some(child) = cursor.next(self) {
            if !found_old {
                found_old = old == Some(child);
                continue;
            }
            if self.flags[child.idx as usize].contains(eligible) {
                self.set_focus_view(Some(child));
                return true;
            }
            if self.is_container(child) && self.advance_next_focus_view(child, None, reverse) {
                return true;
            }
        }
        false
    }

    /// Moves focus to the next eligible view of the whole frame.
    ///
    /// Without a focus view the search starts at the root. Otherwise it climbs
    /// from the focus view's parent, resuming after the previous holder at
    /// each level. When the root runs out of candidates the focus is cleared
    /// and `false` returned.
    pub fn advance_focus(&mut self, reverse: bool) -> bool {
        let Some(root) = self.frame.root else {
            return false;
        };
        let Some(focus) = self.frame.focus_view else {
            return self.advance_next_focus_view(root, None, reverse);
        };
        let mut old = focus;
        let mut level = self.parent(focus);
        while let Some(container) = level {
            if self.advance_next_focus_view(container, Some(old), reverse) {
                return true;
            }
            if container == root {
                break;
            }
            old = container;
            level = self.parent(container);
        }
        log::trace!("advance_focus: no candidate after {focus:?}");
        self.set_focus_view(None);
        false
    }

    /// Makes `view` the focus view, or clears the focus.
    ///
    /// The old view loses focus and the new one takes it; containers pass
    /// both notifications on to every child. The ring the old view's parent
    /// last drew is invalidated and, with focus drawing on, so is the area
    /// the new ring will cover.
    pub fn set_focus_view(&mut self, view: Option<ViewId>) {
        let old = self.frame.focus_view;
        if old == view {
            return;
        }
        if let Some(new) = view
            && !self.is_alive(new)
        {
            log::debug!("set_focus_view: stale {new:?}");
            return;
        }

        self.frame.focus_view = view;
        if let Some(old) = old.filter(|&old| self.is_alive(old)) {
            self.invalidate_focus_ring(old);
            self.notify_focus(old, false);
        }
        if let Some(new) = view.filter(|&new| self.is_alive(new)) {
            self.notify_focus(new, true);
            if self.frame.focus_drawing_enabled()
                && self.frame.focus_view == Some(new)
                && let Some(parent) = self.parent(new)
            {
                let width = self.frame.focus_width();
                let ring = self.view_size[new.idx as usize].inflate(width, width);
                self.invalid_rect(parent, ring);
            }
        }
        self.tracer.focus_changed(&FocusChangedEvent { old, new: view });
    }

    // -- Internal helpers --

    /// Schedules a repaint of the ring the view's parent last drew.
    fn invalidate_focus_ring(&mut self, view: ViewId) {
        let Some(parent) = self.parent(view) else {
            return;
        };
        let Some(last) = self
            .container_state_mut(parent)
            .map(|state| core::mem::take(&mut state.last_drawn_focus))
        else {
            return;
        };
        if !geom::is_empty(last) {
            self.invalid_rect(parent, last);
        }
    }

    /// Sends take or lose focus to a view; containers forward it to their
    /// children first.
    fn notify_focus(&mut self, id: ViewId, take: bool) {
        if self.is_container(id) {
            let mut cursor = ChildCursor::back_to_front(self, id);
            while let Some(child) = cursor.next(self) {
                self.notify_focus(child, take);
            }
        }
        if !self.is_alive(id) {
            return;
        }
        self.with_view(id, |view, cx| {
            if take {
                view.take_focus(cx);
            } else {
                view.lose_focus(cx);
            }
        });
    }
}
