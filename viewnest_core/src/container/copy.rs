// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deep copies of views.

use crate::view::{ViewFlags, ViewId, ViewTree};

impl ViewTree {
    /// Copies a view, and for a container every copyable descendant.
    ///
    /// A leaf is copyable when its behavior returns a
    /// [`new_copy`](crate::View::new_copy). A container always copies, keeping
    /// its background, flags, and layout settings but no capture or focus
    /// state. The copy has no parent and is not attached.
    pub fn copy_view(&mut self, id: ViewId) -> Option<ViewId> {
        self.validate(id);
        let i = id.idx as usize;
        let behavior = self.behavior(id).and_then(|view| view.new_copy());
        let state = self.container[i].as_ref().map(|state| {
            let mut state = state.clone();
            state.mouse_down_view = None;
            state.current_drag_view = None;
            state.last_drawn_focus = kurbo::Rect::ZERO;
            state
        });
        if state.is_none() && behavior.is_none() {
            log::debug!("copy_view: {} {id:?} is not copyable", self.view_name(id));
            return None;
        }

        let copy = self.alloc(self.view_size[i], behavior, state);
        let c = copy.idx as usize;
        self.mouseable_area[c] = self.mouseable_area[i];
        self.flags[c] = self.flags[i] - (ViewFlags::ATTACHED | ViewFlags::DIRTY);
        self.alpha[c] = self.alpha[i];
        self.autosize[c] = self.autosize[i];

        if self.container[i].is_some() {
            let children: alloc::vec::Vec<ViewId> = self.children(id).collect();
            for child in children {
                if let Some(child_copy) = self.copy_view(child) {
                    self.add_view(copy, child_copy);
                }
            }
        }
        Some(copy)
    }
}
