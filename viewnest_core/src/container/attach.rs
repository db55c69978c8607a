// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window attachment.
//!
//! A view is *attached* while it is reachable from the frame's root. Only
//! attached views invalidate, route drags, or draw focus rings; attachment
//! changes are announced to every view of the affected subtree.

use crate::view::{ChildCursor, ViewFlags, ViewId, ViewTree};

impl ViewTree {
    /// Makes `root` the frame's root container and attaches its subtree.
    ///
    /// Returns `false` if a root is already attached, or `root` is stale, not
    /// a container, or has a parent.
    pub fn attach_root(&mut self, root: ViewId) -> bool {
        if self.frame.root.is_some() {
            log::debug!("attach_root: a root is already attached");
            return false;
        }
        if !self.is_alive(root)
            || self.container[root.idx as usize].is_none()
            || self.parent(root).is_some()
        {
            log::debug!("attach_root: {root:?} cannot be a root");
            return false;
        }
        self.frame.root = Some(root);
        self.notify_attached(root);
        self.frame.invalidate_all();
        true
    }

    /// Detaches the root's subtree from the frame and returns the old root.
    ///
    /// The views stay alive and can be attached again.
    pub fn detach_root(&mut self) -> Option<ViewId> {
        let root = self.frame.root?;
        self.notify_removed(root);
        self.frame.root = None;
        Some(root)
    }

    /// Marks a subtree attached, container first, and calls `attached` on
    /// each view after its children.
    pub(crate) fn notify_attached(&mut self, id: ViewId) {
        let i = id.idx as usize;
        if self.flags[i].contains(ViewFlags::ATTACHED) {
            return;
        }
        self.flags[i].insert(ViewFlags::ATTACHED);
        if self.container[i].is_some() {
            let mut cursor = ChildCursor::back_to_front(self, id);
            while let Some(child) = cursor.next(self) {
                self.notify_attached(child);
            }
        }
        self.with_view(id, |view, cx| view.attached(cx));
    }

    /// Calls `removed` on a subtree, children first, then clears the
    /// attached flags. A view losing attachment also loses focus.
    pub(crate) fn notify_removed(&mut self, id: ViewId) {
        if !self.is_alive(id) || !self.flags[id.idx as usize].contains(ViewFlags::ATTACHED) {
            return;
        }
        if self.container[id.idx as usize].is_some() {
            let mut cursor = ChildCursor::back_to_front(self, id);
            while let Some(child) = cursor.next(self) {
                self.notify_removed(child);
            }
        }
        self.with_view(id, |view, cx| view.removed(cx));
        if !self.is_alive(id) {
            return;
        }
        self.flags[id.idx as usize].remove(ViewFlags::ATTACHED);
        if self.frame.focus_view == Some(id) {
            self.frame.focus_view = None;
        }
        if let Some(state) = self.container_state_mut(id) {
            state.mouse_down_view = None;
            state.current_drag_view = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::*;
    use crate::testing::{Call, Probe, r};
    use crate::view::{View, ViewCx};

    /// Pulls `victim` out of `container` whenever it is attached or removed.
    struct Evicts {
        container: ViewId,
        victim: ViewId,
    }

    impl Evicts {
        fn evict(&self, cx: &mut ViewCx<'_>) {
            if cx.tree().parent(self.victim) == Some(self.container) {
                cx.tree_mut().remove_view(self.container, self.victim, false);
            }
        }
    }

    impl View for Evicts {
        fn attached(&mut self, cx: &mut ViewCx<'_>) {
            self.evict(cx);
        }

        fn removed(&mut self, cx: &mut ViewCx<'_>) {
            self.evict(cx);
        }
    }

    #[test]
    fn attach_notifies_whole_subtree() {
        let (a, log) = Probe::new("a");
        let b = Probe::with_log("b", &log);
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(0.0, 0.0, 100.0, 100.0));
        let inner = tree.create_container(r(0.0, 0.0, 50.0, 50.0));
        let va = tree.create_view(r(0.0, 0.0, 10.0, 10.0), a);
        let vb = tree.create_view(r(0.0, 0.0, 10.0, 10.0), b);
        tree.add_view(inner, vb);
        tree.add_view(root, va);
        tree.add_view(root, inner);

        assert!(tree.attach_root(root), "attach");
        assert!(tree.is_attached(vb), "grandchild attached");
        assert_eq!(
            log.borrow().as_slice(),
            &[Call::Attached("a"), Call::Attached("b")]
        );
        assert!(!tree.attach_root(inner), "second root refused");

        log.borrow_mut().clear();
        assert_eq!(tree.detach_root(), Some(root));
        assert!(!tree.is_attached(vb), "grandchild detached");
        assert_eq!(
            log.borrow().as_slice(),
            &[Call::Removed("a"), Call::Removed("b")]
        );
    }

    #[test]
    fn adding_to_attached_container_attaches() {
        let (a, log) = Probe::new("a");
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(0.0, 0.0, 100.0, 100.0));
        tree.attach_root(root);
        let _ = tree.take_damage();

        let va = tree.create_view(r(10.0, 10.0, 20.0, 20.0), a);
        assert!(tree.add_view(root, va), "add");
        assert!(tree.is_attached(va), "attached through parent");
        assert_eq!(log.borrow().as_slice(), &[Call::Attached("a")]);
        assert_eq!(
            tree.take_damage().bounds(),
            Some(r(10.0, 10.0, 20.0, 20.0)),
            "new child invalidated"
        );
    }

    #[test]
    fn attached_root_cannot_be_adopted() {
        let mut tree = ViewTree::new();
        let root = tree.create_container(Rect::ZERO);
        let other = tree.create_container(Rect::ZERO);
        tree.attach_root(root);
        assert!(!tree.add_view(other, root), "attached root has an owner");
    }

    #[test]
    fn removal_drops_focus() {
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(0.0, 0.0, 100.0, 100.0));
        let v = tree.create_view(r(0.0, 0.0, 10.0, 10.0), ());
        tree.set_wants_focus(v, true);
        tree.add_view(root, v);
        tree.attach_root(root);
        tree.set_focus_view(Some(v));
        assert_eq!(tree.frame().focus_view(), Some(v));

        tree.remove_view(root, v, false);
        assert_eq!(tree.frame().focus_view(), None, "focus dropped with view");
    }

    #[test]
    fn sibling_removed_by_handler_does_not_hide_later_siblings() {
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(0.0, 0.0, 100.0, 100.0));
        let b = tree.create_view(r(0.0, 0.0, 10.0, 10.0), ());
        let c = tree.create_view(r(20.0, 0.0, 30.0, 10.0), ());
        let a = tree.create_view(
            r(40.0, 0.0, 50.0, 10.0),
            Evicts {
                container: root,
                victim: b,
            },
        );
        for v in [a, b, c] {
            tree.add_view(root, v);
        }

        assert!(tree.attach_root(root), "attach");
        assert_eq!(tree.parent(b), None, "a evicted b while attaching");
        assert_eq!(tree.parent(c), Some(root));
        assert!(tree.is_attached(c), "c attached past the eviction");
        assert!(!tree.is_attached(b), "b left before its turn");

        assert!(tree.add_view_before(root, b, c), "b back in the middle");
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![a, b, c]);
        assert!(tree.is_attached(b), "b reattached");

        assert_eq!(tree.detach_root(), Some(root));
        assert_eq!(tree.parent(b), None, "a evicted b while detaching");
        assert!(!tree.is_attached(c), "c detached past the eviction");

        let other = tree.create_container(r(0.0, 0.0, 100.0, 100.0));
        assert!(tree.remove_view(root, c, false), "c still owned by root");
        assert!(tree.add_view(other, c), "c can be adopted again");
    }
}
