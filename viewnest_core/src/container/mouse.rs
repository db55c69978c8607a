// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse and wheel routing.
//!
//! A press goes to the front-most child under the pointer that is visible,
//! mouse-enabled, and accepts the hit. A child that returns
//! [`Handled`](MouseEventResult::Handled) captures the pointer: moves and the
//! release then go straight to it until the release or until it stops
//! answering `Handled` to a move.

use kurbo::Point;

use crate::event::{Buttons, MouseEventResult, WheelAxis};
use crate::trace::{MouseEventKind, MouseRoutedEvent};
use crate::view::{ChildCursor, ViewFlags, ViewId, ViewTree};

#[derive(Clone, Copy, Debug)]
enum Press {
    Down,
    Up,
    Moved,
}

impl ViewTree {
    /// Routes a button press at `at`, in the container's parent coordinates.
    pub fn on_mouse_down(
        &mut self,
        container: ViewId,
        at: Point,
        buttons: Buttons,
    ) -> MouseEventResult {
        let local = self.to_local(container, at);
        let mut result = MouseEventResult::NotHandled;
        let mut target = None;

        let mut cursor = ChildCursor::front_to_back(self, container);
        while let Some(child) = cursor.next(self) {
            if !self.is_clickable(child) || !self.hit_test(child, local, buttons) {
                continue;
            }
            target = Some(child);

            if buttons.has_modifier() && self.modifier_click(child, buttons) {
                result = MouseEventResult::Handled;
                break;
            }

            let answer = self.dispatch_press(child, Press::Down, local, buttons);
            let alive = self.is_alive(child);
            if answer.is_handled() {
                if alive && self.flags[child.idx as usize].contains(ViewFlags::WANTS_FOCUS) {
                    self.set_focus_view(Some(child));
                }
                if answer == MouseEventResult::Handled && self.is_direct_child(container, child) {
                    self.set_mouse_capture(container, Some(child));
                }
                result = answer;
                break;
            }
            if !alive || !self.flags[child.idx as usize].contains(ViewFlags::TRANSPARENT) {
                result = answer;
                break;
            }
        }

        self.trace_mouse(container, MouseEventKind::Down, target, at, result);
        result
    }

    /// Routes a button release to the captured child, if any, and ends the
    /// capture.
    pub fn on_mouse_up(&mut self, container: ViewId, at: Point, buttons: Buttons) -> MouseEventResult {
        let local = self.to_local(container, at);
        let Some(child) = self.mouse_down_view(container) else {
            return MouseEventResult::NotHandled;
        };
        if self.is_alive(child) {
            self.dispatch_press(child, Press::Up, local, buttons);
        }
        self.set_mouse_capture(container, None);
        self.trace_mouse(
            container,
            MouseEventKind::Up,
            Some(child),
            at,
            MouseEventResult::Handled,
        );
        MouseEventResult::Handled
    }

    /// Routes pointer motion to the captured child, if any.
    ///
    /// The capture ends as soon as the child answers anything but
    /// [`Handled`](MouseEventResult::Handled).
    pub fn on_mouse_moved(
        &mut self,
        container: ViewId,
        at: Point,
        buttons: Buttons,
    ) -> MouseEventResult {
        let local = self.to_local(container, at);
        let Some(child) = self.mouse_down_view(container) else {
            return MouseEventResult::NotHandled;
        };
        let answer = if self.is_alive(child) {
            self.dispatch_press(child, Press::Moved, local, buttons)
        } else {
            MouseEventResult::NotHandled
        };
        let result = if answer == MouseEventResult::Handled {
            MouseEventResult::Handled
        } else {
            self.set_mouse_capture(container, None);
            MouseEventResult::NotHandled
        };
        self.trace_mouse(container, MouseEventKind::Moved, Some(child), at, result);
        result
    }

    /// Routes a wheel event. Returns `true` if a child consumed it.
    ///
    /// Only visibility and the mouseable area decide who sees the event; an
    /// opaque child that declines ends the walk.
    pub fn on_wheel(
        &mut self,
        container: ViewId,
        at: Point,
        axis: WheelAxis,
        distance: f32,
        buttons: Buttons,
    ) -> bool {
        let local = self.to_local(container, at);
        let mut consumed = false;
        let mut target = None;

        let mut cursor = ChildCursor::front_to_back(self, container);
        while let Some(child) = cursor.next(self) {
            let i = child.idx as usize;
            if !self.flags[i].contains(ViewFlags::VISIBLE) || !self.mouseable_area[i].contains(local)
            {
                continue;
            }
            target = Some(child);
            consumed = if self.container[i].is_some() {
                self.on_wheel(child, local, axis, distance, buttons)
            } else {
                self.with_view(child, |view, cx| {
                    view.on_wheel(cx, local, axis, distance, buttons)
                })
                .unwrap_or(false)
            };
            if consumed
                || !self.is_alive(child)
                || !self.flags[i].contains(ViewFlags::TRANSPARENT)
            {
                break;
            }
        }

        let result = if consumed {
            MouseEventResult::Handled
        } else {
            MouseEventResult::NotHandled
        };
        self.trace_mouse(container, MouseEventKind::Wheel, target, at, result);
        consumed
    }

    /// Vertical wheel shorthand for [`on_wheel`](Self::on_wheel).
    pub fn on_wheel_y(&mut self, container: ViewId, at: Point, distance: f32, buttons: Buttons) -> bool {
        self.on_wheel(container, at, WheelAxis::Y, distance, buttons)
    }

    // -- Internal helpers --

    fn set_mouse_capture(&mut self, container: ViewId, child: Option<ViewId>) {
        if self.is_alive(container)
            && let Some(state) = self.container_state_mut(container)
        {
            state.mouse_down_view = child;
        }
    }

    /// Offers a modifier click to the child's control listener.
    fn modifier_click(&self, child: ViewId, buttons: Buttons) -> bool {
        let Some(listener) = self.behavior(child).and_then(|view| view.listener()) else {
            return false;
        };
        let swallowed = listener
            .borrow_mut()
            .control_modifier_clicked(child, buttons);
        if swallowed {
            log::trace!("modifier click on {child:?} swallowed by its listener");
        }
        swallowed
    }

    /// Sends a press-family event to a child, recursing into containers.
    fn dispatch_press(
        &mut self,
        child: ViewId,
        press: Press,
        local: Point,
        buttons: Buttons,
    ) -> MouseEventResult {
        if self.container[child.idx as usize].is_some() {
            return match press {
                Press::Down => self.on_mouse_down(child, local, buttons),
                Press::Up => self.on_mouse_up(child, local, buttons),
                Press::Moved => self.on_mouse_moved(child, local, buttons),
            };
        }
        self.with_view(child, |view, cx| match press {
            Press::Down => view.on_mouse_down(cx, local, buttons),
            Press::Up => view.on_mouse_up(cx, local, buttons),
            Press::Moved => view.on_mouse_moved(cx, local, buttons),
        })
        .unwrap_or_default()
    }

    fn trace_mouse(
        &mut self,
        container: ViewId,
        kind: MouseEventKind,
        target: Option<ViewId>,
        at: Point,
        result: MouseEventResult,
    ) {
        self.tracer.mouse_routed(&MouseRoutedEvent {
            container,
            kind,
            target,
            at,
            result,
        });
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::RefCell;

    use super::*;
    use crate::testing::{Call, Log, ModifierListener, Probe, p, r};

    /// Root at (10,10) with `back` behind `front`, overlapping at (30..50).
    fn pair(back: Probe, front: Probe) -> (ViewTree, ViewId, ViewId, ViewId) {
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(10.0, 10.0, 110.0, 110.0));
        let b = tree.create_view(r(0.0, 0.0, 50.0, 50.0), back);
        let f = tree.create_view(r(30.0, 30.0, 80.0, 80.0), front);
        tree.add_view(root, b);
        tree.add_view(root, f);
        (tree, root, b, f)
    }

    fn probes() -> (Probe, Probe, Log) {
        let (back, log) = Probe::new("back");
        let front = Probe::with_log("front", &log);
        (back, front, log)
    }

    #[test]
    fn press_goes_to_front_child_in_local_coordinates() {
        let (back, front, log) = probes();
        let (mut tree, root, _, f) = pair(back, front);

        let result = tree.on_mouse_down(root, p(50.0, 50.0), Buttons::LBUTTON);
        assert_eq!(result, MouseEventResult::Handled);
        assert_eq!(log.borrow().as_slice(), &[Call::MouseDown("front", p(40.0, 40.0))]);
        assert_eq!(tree.mouse_down_view(root), Some(f), "front captured");

        log.borrow_mut().clear();
        assert_eq!(
            tree.on_mouse_moved(root, p(200.0, 200.0), Buttons::LBUTTON),
            MouseEventResult::Handled,
            "capture follows the pointer outside"
        );
        assert_eq!(
            tree.on_mouse_up(root, p(200.0, 200.0), Buttons::LBUTTON),
            MouseEventResult::Handled
        );
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Call::MouseMoved("front", p(190.0, 190.0)),
                Call::MouseUp("front", p(190.0, 190.0)),
            ]
        );
        assert_eq!(tree.mouse_down_view(root), None, "release ends capture");
        assert_eq!(
            tree.on_mouse_up(root, p(50.0, 50.0), Buttons::LBUTTON),
            MouseEventResult::NotHandled,
            "nothing captured"
        );
    }

    #[test]
    fn opaque_child_blocks_press() {
        let (back, front, log) = probes();
        let front = front.down(MouseEventResult::NotHandled);
        let (mut tree, root, _, _) = pair(back, front);

        let result = tree.on_mouse_down(root, p(50.0, 50.0), Buttons::LBUTTON);
        assert_eq!(result, MouseEventResult::NotHandled);
        assert_eq!(
            log.borrow().as_slice(),
            &[Call::MouseDown("front", p(40.0, 40.0))],
            "back child never sees the press"
        );
        assert_eq!(tree.mouse_down_view(root), None);
    }

    #[test]
    fn transparent_child_lets_press_through() {
        let (back, front, log) = probes();
        let front = front.down(MouseEventResult::NotImplemented);
        let (mut tree, root, b, f) = pair(back, front);
        tree.set_transparent(f, true);

        let result = tree.on_mouse_down(root, p(50.0, 50.0), Buttons::LBUTTON);
        assert_eq!(result, MouseEventResult::Handled);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Call::MouseDown("front", p(40.0, 40.0)),
                Call::MouseDown("back", p(40.0, 40.0)),
            ]
        );
        assert_eq!(tree.mouse_down_view(root), Some(b));
    }

    #[test]
    fn handled_no_capture_does_not_capture() {
        let (back, front, _log) = probes();
        let front = front.down(MouseEventResult::HandledNoCapture);
        let (mut tree, root, _, _) = pair(back, front);
        assert_eq!(
            tree.on_mouse_down(root, p(50.0, 50.0), Buttons::LBUTTON),
            MouseEventResult::HandledNoCapture
        );
        assert_eq!(tree.mouse_down_view(root), None);
    }

    #[test]
    fn declined_move_ends_capture() {
        let (back, front, log) = probes();
        let front = front.moved(MouseEventResult::NotHandled);
        let (mut tree, root, _, _) = pair(back, front);
        tree.on_mouse_down(root, p(50.0, 50.0), Buttons::LBUTTON);

        assert_eq!(
            tree.on_mouse_moved(root, p(60.0, 60.0), Buttons::LBUTTON),
            MouseEventResult::NotHandled
        );
        assert_eq!(tree.mouse_down_view(root), None);
        log.borrow_mut().clear();
        assert_eq!(
            tree.on_mouse_moved(root, p(60.0, 60.0), Buttons::LBUTTON),
            MouseEventResult::NotHandled
        );
        assert!(log.borrow().is_empty(), "no capture, no delivery");
    }

    #[test]
    fn disabled_or_hidden_children_are_skipped() {
        let (back, front, log) = probes();
        let (mut tree, root, b, f) = pair(back, front);
        tree.set_mouse_enabled(f, false);
        tree.on_mouse_down(root, p(50.0, 50.0), Buttons::LBUTTON);
        assert_eq!(tree.mouse_down_view(root), Some(b));

        tree.on_mouse_up(root, p(50.0, 50.0), Buttons::LBUTTON);
        tree.set_visible(b, false);
        log.borrow_mut().clear();
        assert_eq!(
            tree.on_mouse_down(root, p(50.0, 50.0), Buttons::LBUTTON),
            MouseEventResult::NotHandled
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn child_removing_itself_during_press_is_not_captured() {
        let (view, log) = Probe::new("v");
        let view = view.on_down(|cx| {
            if let Some(parent) = cx.parent() {
                let id = cx.id();
                cx.tree_mut().remove_view(parent, id, true);
            }
        });
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(0.0, 0.0, 100.0, 100.0));
        let v = tree.create_view(r(0.0, 0.0, 50.0, 50.0), view);
        tree.add_view(root, v);
        tree.attach_root(root);

        let result = tree.on_mouse_down(root, p(10.0, 10.0), Buttons::LBUTTON);
        assert_eq!(result, MouseEventResult::Handled);
        assert!(!tree.is_alive(v), "view destroyed by its own handler");
        assert_eq!(tree.mouse_down_view(root), None, "dead view not captured");
        assert_eq!(tree.child_count(root), 0);
        assert!(log.borrow().contains(&Call::MouseDown("v", p(10.0, 10.0))));
    }

    #[test]
    fn removing_captured_child_clears_capture() {
        let (back, front, _log) = probes();
        let (mut tree, root, _, f) = pair(back, front);
        tree.on_mouse_down(root, p(50.0, 50.0), Buttons::LBUTTON);
        assert_eq!(tree.mouse_down_view(root), Some(f));
        tree.remove_view(root, f, true);
        assert_eq!(tree.mouse_down_view(root), None);
        assert_eq!(
            tree.on_mouse_up(root, p(50.0, 50.0), Buttons::LBUTTON),
            MouseEventResult::NotHandled
        );
    }

    #[test]
    fn modifier_click_goes_to_listener() {
        let (view, log) = Probe::new("v");
        let listener = Rc::new(RefCell::new(ModifierListener {
            log: log.clone(),
            swallow: true,
        }));
        let view = view.listener(listener.clone());
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(0.0, 0.0, 100.0, 100.0));
        let v = tree.create_view(r(0.0, 0.0, 50.0, 50.0), view);
        tree.add_view(root, v);

        let result = tree.on_mouse_down(root, p(10.0, 10.0), Buttons::LBUTTON | Buttons::SHIFT);
        assert_eq!(result, MouseEventResult::Handled);
        assert_eq!(log.borrow().as_slice(), &[Call::Modifier(v)], "view not called");
        assert_eq!(tree.mouse_down_view(root), None);

        listener.borrow_mut().swallow = false;
        log.borrow_mut().clear();
        tree.on_mouse_down(root, p(10.0, 10.0), Buttons::LBUTTON | Buttons::ALT);
        assert_eq!(
            log.borrow().as_slice(),
            &[Call::Modifier(v), Call::MouseDown("v", p(10.0, 10.0))]
        );

        log.borrow_mut().clear();
        tree.on_mouse_down(root, p(10.0, 10.0), Buttons::LBUTTON);
        assert_eq!(
            log.borrow().as_slice(),
            &[Call::MouseDown("v", p(10.0, 10.0))],
            "no modifier, no listener"
        );
    }

    #[test]
    fn handled_press_moves_focus() {
        let (view, log) = Probe::new("v");
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(0.0, 0.0, 100.0, 100.0));
        let v = tree.create_view(r(0.0, 0.0, 50.0, 50.0), view);
        tree.set_wants_focus(v, true);
        tree.add_view(root, v);
        tree.attach_root(root);

        tree.on_mouse_down(root, p(10.0, 10.0), Buttons::LBUTTON);
        assert_eq!(tree.frame().focus_view(), Some(v));
        assert!(log.borrow().contains(&Call::TakeFocus("v")));
    }

    #[test]
    fn presses_route_through_nested_containers() {
        let (view, log) = Probe::new("v");
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(0.0, 0.0, 200.0, 200.0));
        let inner = tree.create_container(r(50.0, 50.0, 150.0, 150.0));
        let v = tree.create_view(r(10.0, 10.0, 40.0, 40.0), view);
        tree.add_view(inner, v);
        tree.add_view(root, inner);

        assert_eq!(
            tree.on_mouse_down(root, p(70.0, 70.0), Buttons::LBUTTON),
            MouseEventResult::Handled
        );
        assert_eq!(tree.mouse_down_view(root), Some(inner));
        assert_eq!(tree.mouse_down_view(inner), Some(v));
        tree.on_mouse_up(root, p(75.0, 75.0), Buttons::LBUTTON);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Call::MouseDown("v", p(20.0, 20.0)),
                Call::MouseUp("v", p(25.0, 25.0)),
            ]
        );
        assert_eq!(tree.mouse_down_view(inner), None, "release cascades");
    }

    #[test]
    fn wheel_walks_past_transparent_decliners() {
        let (back, front, log) = probes();
        let front = front.wheel(false);
        let (mut tree, root, _, f) = pair(back, front);

        assert!(
            !tree.on_wheel_y(root, p(50.0, 50.0), 1.0, Buttons::empty()),
            "opaque front declines and blocks"
        );
        assert_eq!(log.borrow().as_slice(), &[Call::Wheel("front", WheelAxis::Y)]);

        tree.set_transparent(f, true);
        log.borrow_mut().clear();
        assert!(tree.on_wheel(root, p(50.0, 50.0), WheelAxis::X, 1.0, Buttons::empty()));
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Call::Wheel("front", WheelAxis::X),
                Call::Wheel("back", WheelAxis::X),
            ]
        );
    }

    #[test]
    fn wheel_ignores_mouse_enabled_flag() {
        let (back, front, log) = probes();
        let (mut tree, root, _, f) = pair(back, front);
        tree.set_mouse_enabled(f, false);
        assert!(tree.on_wheel_y(root, p(50.0, 50.0), 1.0, Buttons::empty()));
        assert_eq!(log.borrow().as_slice(), &[Call::Wheel("front", WheelAxis::Y)]);
    }
}
