// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The behavior contract for views.
//!
//! Geometry and flags of every view live in the [`ViewTree`] arena. What a
//! view *does* (paint itself, react to the mouse, accept drops) is supplied
//! by a boxed [`View`] stored in its slot. Every method has a default, so a
//! purely decorative view can be `()`.
//!
//! Handlers that may mutate the tree receive a [`ViewCx`]. While a handler
//! runs, the view's behavior is leased out of its slot; a handler is free to
//! remove or destroy its own view, reorder its siblings, or move focus.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use kurbo::{BezPath, Point, Rect};

use crate::draw::DrawContext;
use crate::event::{Buttons, DragData, MouseEventResult, WheelAxis};
use crate::geom;

use super::id::ViewId;
use super::store::ViewTree;

/// Behavior of a view.
///
/// Points passed to handlers are in the view's parent coordinates, the same
/// space as the view's bounds.
pub trait View {
    /// Short name used by diagnostics.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Paints the view. `bounds` is the view's rectangle and `update` the
    /// region to repaint, both in the context's current coordinates.
    fn draw(&mut self, ctx: &mut dyn DrawContext, bounds: Rect, update: Rect) {
        _ = (ctx, bounds, update);
    }

    /// Whether the view must be repainted for `update`.
    fn check_update(&self, update: Rect, bounds: Rect) -> bool {
        geom::overlaps(update, bounds)
    }

    /// Whether `at` hits the view. `area` is its mouseable area.
    fn hit_test(&self, at: Point, buttons: Buttons, area: Rect) -> bool {
        _ = buttons;
        area.contains(at)
    }

    /// A button was pressed over the view.
    fn on_mouse_down(
        &mut self,
        cx: &mut ViewCx<'_>,
        at: Point,
        buttons: Buttons,
    ) -> MouseEventResult {
        _ = (cx, at, buttons);
        MouseEventResult::NotImplemented
    }

    /// A button was released after this view captured the press.
    fn on_mouse_up(
        &mut self,
        cx: &mut ViewCx<'_>,
        at: Point,
        buttons: Buttons,
    ) -> MouseEventResult {
        _ = (cx, at, buttons);
        MouseEventResult::NotImplemented
    }

    /// The mouse moved while this view holds the capture.
    fn on_mouse_moved(
        &mut self,
        cx: &mut ViewCx<'_>,
        at: Point,
        buttons: Buttons,
    ) -> MouseEventResult {
        _ = (cx, at, buttons);
        MouseEventResult::NotImplemented
    }

    /// Wheel scroll over the view. Returns `true` if consumed.
    fn on_wheel(
        &mut self,
        cx: &mut ViewCx<'_>,
        at: Point,
        axis: WheelAxis,
        distance: f32,
        buttons: Buttons,
    ) -> bool {
        _ = (cx, at, axis, distance, buttons);
        false
    }

    /// A drag session entered the view.
    fn on_drag_enter(&mut self, cx: &mut ViewCx<'_>, drag: &dyn DragData, at: Point) {
        _ = (cx, drag, at);
    }

    /// A drag session left the view.
    fn on_drag_leave(&mut self, cx: &mut ViewCx<'_>, drag: &dyn DragData, at: Point) {
        _ = (cx, drag, at);
    }

    /// A drag session moved within the view.
    fn on_drag_move(&mut self, cx: &mut ViewCx<'_>, drag: &dyn DragData, at: Point) {
        _ = (cx, drag, at);
    }

    /// The payload was dropped on the view. Returns `true` if accepted.
    fn on_drop(&mut self, cx: &mut ViewCx<'_>, drag: &dyn DragData, at: Point) -> bool {
        _ = (cx, drag, at);
        false
    }

    /// The view became reachable from the frame.
    fn attached(&mut self, cx: &mut ViewCx<'_>) {
        _ = cx;
    }

    /// The view is about to stop being reachable from the frame.
    fn removed(&mut self, cx: &mut ViewCx<'_>) {
        _ = cx;
    }

    /// The parent container changed size.
    fn parent_size_changed(&mut self, cx: &mut ViewCx<'_>) {
        _ = cx;
    }

    /// The view received keyboard focus.
    fn take_focus(&mut self, cx: &mut ViewCx<'_>) {
        _ = cx;
    }

    /// The view lost keyboard focus.
    fn lose_focus(&mut self, cx: &mut ViewCx<'_>) {
        _ = cx;
    }

    /// Custom focus ring, if the view draws its own.
    fn focus_drawing(&self) -> Option<&dyn FocusDrawing> {
        None
    }

    /// Listener notified of modifier clicks, for control-like views.
    fn listener(&self) -> Option<Rc<RefCell<dyn ControlListener>>> {
        None
    }

    /// A fresh copy of this behavior, for [`ViewTree::copy_view`].
    fn new_copy(&self) -> Option<Box<dyn View>> {
        None
    }
}

/// A view with no behavior of its own.
impl View for () {
    fn name(&self) -> &'static str {
        "view"
    }

    fn new_copy(&self) -> Option<Box<dyn View>> {
        Some(Box::new(()))
    }
}

/// Custom focus ring drawing.
pub trait FocusDrawing {
    /// `true` draws the ring after all siblings; `false` draws it beneath the
    /// view, at its turn in the paint order.
    fn draw_focus_on_top(&self) -> bool {
        true
    }

    /// Appends the ring outline to `path`. `bounds` is the view's rectangle in
    /// its parent's coordinates. Returning `false` falls back to the default
    /// ring.
    fn focus_path(&self, path: &mut BezPath, bounds: Rect) -> bool;
}

/// Receives clicks made on a control while a modifier key is held.
pub trait ControlListener {
    /// Returns `true` to swallow the click.
    fn control_modifier_clicked(&mut self, control: ViewId, buttons: Buttons) -> bool;
}

/// Access to the tree from inside a view handler.
pub struct ViewCx<'a> {
    pub(crate) tree: &'a mut ViewTree,
    pub(crate) id: ViewId,
}

impl<'a> ViewCx<'a> {
    pub(crate) fn new(tree: &'a mut ViewTree, id: ViewId) -> Self {
        Self { tree, id }
    }

    /// The view being called.
    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Read access to the whole tree.
    #[must_use]
    pub fn tree(&self) -> &ViewTree {
        self.tree
    }

    /// Write access to the whole tree.
    pub fn tree_mut(&mut self) -> &mut ViewTree {
        self.tree
    }

    /// Whether the view is still alive. A handler that destroyed its own view
    /// sees `false` here.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.tree.is_alive(self.id)
    }

    /// Bounds of the view in its parent's coordinates.
    #[must_use]
    pub fn view_size(&self) -> Rect {
        self.tree.view_size(self.id)
    }

    /// The view's container, if it has one.
    #[must_use]
    pub fn parent(&self) -> Option<ViewId> {
        self.tree.parent(self.id)
    }

    /// Schedules a repaint of the whole view.
    pub fn invalid(&mut self) {
        self.tree.invalid(self.id);
    }

    /// Marks the view dirty without invalidating it yet.
    pub fn set_dirty(&mut self) {
        self.tree.set_dirty(self.id, true);
    }

    /// Moves keyboard focus to this view.
    pub fn focus(&mut self) {
        self.tree.set_focus_view(Some(self.id));
    }
}

impl fmt::Debug for ViewCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewCx").field("id", &self.id).finish_non_exhaustive()
    }
}
