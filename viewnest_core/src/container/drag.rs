// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-and-drop routing.
//!
//! Each container remembers the child the drag currently resolves to (a
//! shallow [`view_at`](ViewTree::view_at)) and sends it enter, move, leave,
//! and drop in a consistent order. Detached containers ignore drags.

use kurbo::Point;

use crate::event::DragData;
use crate::trace::{DragPhase, DragRoutedEvent};
use crate::view::{ViewId, ViewTree};

impl ViewTree {
    /// A drag session entered the container at `at`, in its parent's
    /// coordinates.
    pub fn on_drag_enter(&mut self, container: ViewId, drag: &dyn DragData, at: Point) {
        if !self.is_attached(container) {
            return;
        }
        let local = self.to_local(container, at);
        if let Some(old) = self.current_drag_view(container) {
            self.send_drag(old, DragPhase::Leave, drag, local);
        }
        let view = self.view_at(container, at, false);
        self.set_drag_view(container, view);
        if let Some(view) = view {
            self.send_drag(view, DragPhase::Enter, drag, local);
        }
        self.trace_drag(container, DragPhase::Enter, view);
    }

    /// The drag moved within the container.
    ///
    /// Crossing into another child sends a leave to the old child, then an
    /// enter and a move to the new one.
    pub fn on_drag_move(&mut self, container: ViewId, drag: &dyn DragData, at: Point) {
        if !self.is_attached(container) {
            return;
        }
        let local = self.to_local(container, at);
        let view = self.view_at(container, at, false);
        let current = self.current_drag_view(container);
        if view != current {
            if let Some(old) = current {
                self.send_drag(old, DragPhase::Leave, drag, local);
            }
            self.set_drag_view(container, view);
            if let Some(view) = view {
                self.send_drag(view, DragPhase::Enter, drag, local);
            }
        }
        if let Some(view) = view {
            self.send_drag(view, DragPhase::Move, drag, local);
        }
        self.trace_drag(container, DragPhase::Move, view);
    }

    /// The drag left the container.
    pub fn on_drag_leave(&mut self, container: ViewId, drag: &dyn DragData, at: Point) {
        if !self.is_attached(container) {
            return;
        }
        let local = self.to_local(container, at);
        let current = self.current_drag_view(container);
        if let Some(old) = current {
            self.send_drag(old, DragPhase::Leave, drag, local);
        }
        self.set_drag_view(container, None);
        self.trace_drag(container, DragPhase::Leave, current);
    }

    /// The payload was dropped. Returns whether the resolved child accepted
    /// it.
    ///
    /// The drop ends the session: the target also gets a leave and the
    /// container forgets it.
    pub fn on_drop(&mut self, container: ViewId, drag: &dyn DragData, at: Point) -> bool {
        if !self.is_attached(container) {
            return false;
        }
        let local = self.to_local(container, at);
        let view = self.view_at(container, at, false);
        let current = self.current_drag_view(container);
        if view != current
            && let Some(old) = current
        {
            self.send_drag(old, DragPhase::Leave, drag, local);
        }
        let mut accepted = false;
        if let Some(view) = view {
            accepted = self.send_drag(view, DragPhase::Drop, drag, local);
            self.send_drag(view, DragPhase::Leave, drag, local);
        }
        self.set_drag_view(container, None);
        self.trace_drag(container, DragPhase::Drop, view);
        accepted
    }

    // -- Internal helpers --

    fn set_drag_view(&mut self, container: ViewId, view: Option<ViewId>) {
        if self.is_alive(container)
            && let Some(state) = self.container_state_mut(container)
        {
            state.current_drag_view = view;
        }
    }

    /// Delivers one drag stage to a child. Only a drop has a meaningful
    /// answer.
    fn send_drag(&mut self, child: ViewId, phase: DragPhase, drag: &dyn DragData, local: Point) -> bool {
        if !self.is_alive(child) {
            return false;
        }
        if self.container[child.idx as usize].is_some() {
            return match phase {
                DragPhase::Enter => {
                    self.on_drag_enter(child, drag, local);
                    false
                }
                DragPhase::Move => {
                    self.on_drag_move(child, drag, local);
                    false
                }
                DragPhase::Leave => {
                    self.on_drag_leave(child, drag, local);
                    false
                }
                DragPhase::Drop => self.on_drop(child, drag, local),
            };
        }
        self.with_view(child, |view, cx| match phase {
            DragPhase::Enter => {
                view.on_drag_enter(cx, drag, local);
                false
            }
            DragPhase::Move => {
                view.on_drag_move(cx, drag, local);
                false
            }
            DragPhase::Leave => {
                view.on_drag_leave(cx, drag, local);
                false
            }
            DragPhase::Drop => view.on_drop(cx, drag, local),
        })
        .unwrap_or(false)
    }

    fn trace_drag(&mut self, container: ViewId, phase: DragPhase, target: Option<ViewId>) {
        self.tracer.drag_routed(&DragRoutedEvent {
            container,
            phase,
            target,
        });
    }
}
