// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Membership and z-order.

use kurbo::Rect;

use crate::trace::{ViewAddedEvent, ViewRemovedEvent, ZOrderEvent};
use crate::view::{INVALID, ViewFlags, ViewId, ViewTree};

impl ViewTree {
    /// Appends `view` as the front-most child of `container`.
    ///
    /// Refused (returning `false`) when `container` is stale or not a
    /// container, or when `view` is stale, already has a parent, is the
    /// attached root, or is `container` itself or one of its ancestors.
    ///
    /// If `container` is attached, `view` is notified and invalidated.
    pub fn add_view(&mut self, container: ViewId, view: ViewId) -> bool {
        if !self.can_adopt(container, view) {
            return false;
        }
        self.link_last(container.idx, view.idx);
        self.finish_add(container, view);
        true
    }

    /// Inserts `view` directly behind `before`.
    ///
    /// If `before` is not a child of `container`, `view` is appended at the
    /// front instead. Refused under the same conditions as
    /// [`add_view`](Self::add_view).
    pub fn add_view_before(&mut self, container: ViewId, view: ViewId, before: ViewId) -> bool {
        if !self.can_adopt(container, view) {
            return false;
        }
        if self.is_alive(before) && self.parent[before.idx as usize] == container.idx {
            self.link_before(container.idx, view.idx, before.idx);
        } else {
            self.link_last(container.idx, view.idx);
        }
        self.finish_add(container, view);
        true
    }

    /// Appends `view`, then sets its mouseable area and whether it takes
    /// presses.
    pub fn add_view_with_area(
        &mut self,
        container: ViewId,
        view: ViewId,
        mouseable_area: Rect,
        mouse_enabled: bool,
    ) -> bool {
        if !self.add_view(container, view) {
            return false;
        }
        // An attach handler may have destroyed it.
        if self.is_alive(view) {
            self.set_mouse_enabled(view, mouse_enabled);
            self.set_mouseable_area(view, mouseable_area);
        }
        true
    }

    /// Removes a direct child.
    ///
    /// Capture roles the child held are cleared and the area it covered is
    /// invalidated. While the container is attached the child subtree gets
    /// `removed` notifications before it is unlinked. With `release` the
    /// child is destroyed; otherwise it stays alive, detached, and may be
    /// added elsewhere.
    ///
    /// Returns `false` if `view` is not a direct child.
    pub fn remove_view(&mut self, container: ViewId, view: ViewId, release: bool) -> bool {
        if !self.is_alive(container) || !self.is_direct_child(container, view) {
            log::debug!("remove_view: {view:?} is not a child of {container:?}");
            return false;
        }
        if let Some(state) = self.container_state_mut(container) {
            state.release_captures(view);
        }
        self.invalid(view);
        if self.is_attached(container) {
            self.notify_removed(view);
        }
        // A `removed` handler may have moved or destroyed it already.
        if self.is_alive(container) && self.is_direct_child(container, view) {
            self.detach_child(container, view, release);
        }
        true
    }

    /// Removes every child, back to front.
    ///
    /// Returns `false` only for a stale or leaf `container`.
    pub fn remove_all(&mut self, container: ViewId, release: bool) -> bool {
        if !self.is_alive(container) {
            return false;
        }
        let Some(state) = self.container_state_mut(container) else {
            return false;
        };
        state.mouse_down_view = None;
        state.current_drag_view = None;

        let attached = self.is_attached(container);
        // Re-read the head each round: handlers may unlink arbitrary children.
        loop {
            let first = self.first_child[container.idx as usize];
            if first == INVALID {
                break;
            }
            let child = self.id_of(first);
            if attached {
                self.notify_removed(child);
            }
            if !self.is_alive(container) {
                return true;
            }
            if self.is_direct_child(container, child) {
                self.detach_child(container, child, release);
            }
        }
        self.set_dirty(container, true);
        true
    }

    /// Moves a child to position `index`, counted from the back.
    ///
    /// Index `0` puts it behind all siblings; an index at or past the end
    /// makes it the front-most child. Returns `false` if the container has
    /// fewer than two children or `view` is not one of them.
    pub fn change_view_z_order(&mut self, container: ViewId, view: ViewId, index: usize) -> bool {
        if !self.is_alive(container) || !self.is_direct_child(container, view) {
            return false;
        }
        let c = container.idx as usize;
        if self.first_child[c] == self.last_child[c] {
            return false;
        }

        self.unlink(view.idx);
        let mut slot = self.first_child[c];
        for _ in 0..index {
            if slot == INVALID {
                break;
            }
            slot = self.next_sibling[slot as usize];
        }
        if slot == INVALID {
            self.link_last(container.idx, view.idx);
        } else {
            self.link_before(container.idx, view.idx, slot);
        }

        self.tracer.z_order_changed(&ZOrderEvent {
            container,
            view,
            index,
        });
        self.invalid(view);
        true
    }

    /// Whether `view` is a child of `container`; with `deep`, at any depth.
    #[must_use]
    pub fn is_child(&self, container: ViewId, view: ViewId, deep: bool) -> bool {
        if !self.is_alive(container) || !self.is_alive(view) {
            return false;
        }
        if deep {
            view != container && self.is_self_or_ancestor(container.idx, view.idx)
        } else {
            self.is_direct_child(container, view)
        }
    }

    /// Child at `index`, counted from the back.
    #[must_use]
    pub fn child(&self, container: ViewId, index: usize) -> Option<ViewId> {
        self.children(container).nth(index)
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self, container: ViewId) -> usize {
        self.children(container).count()
    }

    // -- Internal helpers --

    pub(crate) fn is_direct_child(&self, container: ViewId, view: ViewId) -> bool {
        self.is_alive(view) && self.parent[view.idx as usize] == container.idx
    }

    fn can_adopt(&self, container: ViewId, view: ViewId) -> bool {
        if !self.is_alive(container) || self.container[container.idx as usize].is_none() {
            log::debug!("add_view: {container:?} is not a live container");
            return false;
        }
        if !self.is_alive(view) {
            log::debug!("add_view: stale {view:?}");
            return false;
        }
        let v = view.idx as usize;
        if self.parent[v] != INVALID || self.flags[v].contains(ViewFlags::ATTACHED) {
            log::debug!("add_view: {view:?} already has an owner");
            return false;
        }
        if self.is_self_or_ancestor(view.idx, container.idx) {
            log::debug!("add_view: {view:?} would contain itself");
            return false;
        }
        true
    }

    fn finish_add(&mut self, container: ViewId, view: ViewId) {
        self.tracer.view_added(&ViewAddedEvent { container, view });
        if self.is_attached(container) {
            self.notify_attached(view);
            if self.is_alive(view) {
                self.invalid(view);
            }
        }
    }

    /// Unlinks a child whose notifications have been sent.
    fn detach_child(&mut self, container: ViewId, view: ViewId, release: bool) {
        self.unlink(view.idx);
        self.tracer.view_removed(&ViewRemovedEvent {
            container,
            view,
            released: release,
        });
        if release {
            self.release_subtree(view.idx);
        }
    }
}
