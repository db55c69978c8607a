// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container behavior.
//!
//! A container is a view whose slot carries [`ContainerState`]. It owns an
//! ordered list of children and does the following for them:
//!
//! - **Membership** ([`add_view`](ViewTree::add_view),
//!   [`remove_view`](ViewTree::remove_view),
//!   [`change_view_z_order`](ViewTree::change_view_z_order), ...).
//! - **Layout**: children follow resizes according to their
//!   [`Autosize`](crate::view::Autosize) masks.
//! - **Drawing**: background, then children back to front, each with the
//!   container's origin applied and the clip narrowed to the child.
//! - **Routing**: mouse, wheel, and drag events go to the front-most child
//!   under the cursor; presses fall through transparent children.
//! - **Focus**: tab traversal and focus ring drawing.
//! - **Invalidation**: dirty regions climb the parent chain to the frame.
//!
//! All of these are methods on [`ViewTree`] taking the container's
//! [`ViewId`]. Children's coordinates are relative to the container's
//! top-left corner.

mod attach;
mod copy;
mod dirty;
mod drag;
mod draw;
mod focus;
mod hit;
mod layout;
mod members;
mod mouse;

use alloc::rc::Rc;

use kurbo::{Point, Rect};

use crate::color::Color;
use crate::draw::Bitmap;
use crate::view::{ViewId, ViewTree};

/// Per-container state stored alongside the view.
#[derive(Clone, Debug)]
pub(crate) struct ContainerState {
    pub(crate) background: Option<Rc<dyn Bitmap>>,
    pub(crate) background_color: Color,
    pub(crate) background_offset: Point,
    /// Child that accepted the last press and receives moves and up.
    pub(crate) mouse_down_view: Option<ViewId>,
    /// Child under the cursor during a drag session.
    pub(crate) current_drag_view: Option<ViewId>,
    /// Bounding box of the focus ring drawn last, in local coordinates.
    pub(crate) last_drawn_focus: Rect,
}

impl ContainerState {
    pub(crate) fn new() -> Self {
        Self {
            background: None,
            background_color: Color::BLACK,
            background_offset: Point::ZERO,
            mouse_down_view: None,
            current_drag_view: None,
            last_drawn_focus: Rect::ZERO,
        }
    }

    /// Drops capture roles held by `view`.
    pub(crate) fn release_captures(&mut self, view: ViewId) {
        if self.mouse_down_view == Some(view) {
            self.mouse_down_view = None;
        }
        if self.current_drag_view == Some(view) {
            self.current_drag_view = None;
        }
    }
}

impl ViewTree {
    /// Container state for `id`, or `None` for a leaf.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub(crate) fn container_state(&self, id: ViewId) -> Option<&ContainerState> {
        self.validate(id);
        self.container[id.idx as usize].as_ref()
    }

    pub(crate) fn container_state_mut(&mut self, id: ViewId) -> Option<&mut ContainerState> {
        self.validate(id);
        self.container[id.idx as usize].as_mut()
    }

    /// Background color of a container. Leaves report transparent.
    #[must_use]
    pub fn background_color(&self, container: ViewId) -> Color {
        self.container_state(container)
            .map_or(Color::TRANSPARENT, |s| s.background_color)
    }

    /// Sets the background color and marks the container dirty.
    pub fn set_background_color(&mut self, container: ViewId, color: Color) {
        if let Some(state) = self.container_state_mut(container) {
            state.background_color = color;
            self.set_dirty(container, true);
        }
    }

    /// Background bitmap of a container.
    #[must_use]
    pub fn background(&self, container: ViewId) -> Option<Rc<dyn Bitmap>> {
        self.container_state(container)
            .and_then(|s| s.background.clone())
    }

    /// Replaces the background bitmap and marks the container dirty.
    pub fn set_background(&mut self, container: ViewId, bitmap: Option<Rc<dyn Bitmap>>) {
        if let Some(state) = self.container_state_mut(container) {
            state.background = bitmap;
            self.set_dirty(container, true);
        }
    }

    /// Offset into the background bitmap drawn at the container's origin.
    #[must_use]
    pub fn background_offset(&self, container: ViewId) -> Point {
        self.container_state(container)
            .map_or(Point::ZERO, |s| s.background_offset)
    }

    /// Sets the background bitmap offset.
    pub fn set_background_offset(&mut self, container: ViewId, offset: Point) {
        if let Some(state) = self.container_state_mut(container) {
            state.background_offset = offset;
        }
    }

    /// Child currently capturing mouse moves and up.
    #[must_use]
    pub fn mouse_down_view(&self, container: ViewId) -> Option<ViewId> {
        self.container_state(container)
            .and_then(|s| s.mouse_down_view)
    }

    /// Child currently under an active drag session.
    #[must_use]
    pub fn current_drag_view(&self, container: ViewId) -> Option<ViewId> {
        self.container_state(container)
            .and_then(|s| s.current_drag_view)
    }

    /// Bounding box of the focus ring this container drew last, in its local
    /// coordinates. Empty when no ring is showing.
    #[must_use]
    pub fn last_drawn_focus(&self, container: ViewId) -> Rect {
        self.container_state(container)
            .map_or(Rect::ZERO, |s| s.last_drawn_focus)
    }
}
