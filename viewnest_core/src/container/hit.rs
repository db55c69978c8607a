// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing and point lookup.
//!
//! Every lookup takes the point in the container's parent coordinates and
//! walks the children front to back.

use alloc::vec::Vec;

use kurbo::Point;

use crate::event::Buttons;
use crate::view::{ViewFlags, ViewId, ViewTree};

impl ViewTree {
    /// Whether `at`, in the view's parent coordinates, hits the view.
    ///
    /// A leaf asks its behavior; a container tests its mouseable area.
    #[must_use]
    pub fn hit_test(&self, id: ViewId, at: Point, buttons: Buttons) -> bool {
        self.validate(id);
        let area = self.mouseable_area[id.idx as usize];
        match self.behavior(id) {
            Some(view) if self.container[id.idx as usize].is_none() => {
                view.hit_test(at, buttons, area)
            }
            _ => area.contains(at),
        }
    }

    /// Whether any visible, mouse-enabled child accepts a hit at `at`.
    #[must_use]
    pub fn hit_test_sub_views(&self, container: ViewId, at: Point, buttons: Buttons) -> bool {
        let local = self.to_local(container, at);
        self.children(container)
            .rev()
            .any(|child| self.is_clickable(child) && self.hit_test(child, local, buttons))
    }

    /// The front-most visible child whose mouseable area contains `at`.
    ///
    /// With `deep`, a container found there is searched in turn and its
    /// answer returned, even when it has nothing under the point.
    #[must_use]
    pub fn view_at(&self, container: ViewId, at: Point, deep: bool) -> Option<ViewId> {
        let local = self.to_local(container, at);
        let child = self.child_under(container, local)?;
        if deep && self.is_container(child) {
            return self.view_at(child, local, deep);
        }
        Some(child)
    }

    /// Every visible child whose mouseable area contains `at`, front to back.
    ///
    /// With `deep`, the matches inside a child container are listed before
    /// the container itself.
    #[must_use]
    pub fn views_at(&self, container: ViewId, at: Point, deep: bool) -> Vec<ViewId> {
        let mut views = Vec::new();
        self.collect_views_at(container, at, deep, &mut views);
        views
    }

    /// The innermost container under `at`.
    ///
    /// Returns `container` itself when no child container is hit or `deep` is
    /// off.
    #[must_use]
    pub fn container_at(&self, container: ViewId, at: Point, deep: bool) -> ViewId {
        let local = self.to_local(container, at);
        match self.child_under(container, local) {
            Some(child) if deep && self.is_container(child) => {
                self.container_at(child, local, deep)
            }
            _ => container,
        }
    }

    // -- Internal helpers --

    /// `at` moved from the container's parent space into its local space.
    pub(crate) fn to_local(&self, container: ViewId, at: Point) -> Point {
        self.validate(container);
        at - self.view_size[container.idx as usize].origin().to_vec2()
    }

    pub(crate) fn is_clickable(&self, id: ViewId) -> bool {
        self.flags[id.idx as usize].contains(ViewFlags::VISIBLE | ViewFlags::MOUSE_ENABLED)
    }

    /// Front-most visible child whose mouseable area holds `local`.
    pub(crate) fn child_under(&self, container: ViewId, local: Point) -> Option<ViewId> {
        self.children(container).rev().find(|&child| {
            let i = child.idx as usize;
            self.flags[i].contains(ViewFlags::VISIBLE) && self.mouseable_area[i].contains(local)
        })
    }

    fn collect_views_at(&self, container: ViewId, at: Point, deep: bool, out: &mut Vec<ViewId>) {
        let local = self.to_local(container, at);
        for child in self.children(container).rev() {
            let i = child.idx as usize;
            if !self.flags[i].contains(ViewFlags::VISIBLE) || !self.mouseable_area[i].contains(local)
            {
                continue;
            }
            if deep && self.is_container(child) {
                self.collect_views_at(child, local, deep, out);
            }
            out.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Rect;

    use super::*;
    use crate::testing::{p, r};
    use crate::view::View;

    /// Accepts hits only on the left half of its area.
    #[derive(Debug)]
    struct LeftHalf;

    impl View for LeftHalf {
        fn hit_test(&self, at: Point, _buttons: Buttons, area: Rect) -> bool {
            area.contains(at) && at.x < area.center().x
        }
    }

    /// Root at (10,10) with a back leaf, a front container holding a leaf.
    fn fixture() -> (ViewTree, ViewId, ViewId, ViewId, ViewId) {
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(10.0, 10.0, 210.0, 210.0));
        let back = tree.create_view(r(0.0, 0.0, 100.0, 100.0), ());
        let inner = tree.create_container(r(50.0, 50.0, 150.0, 150.0));
        let leaf = tree.create_view(r(0.0, 0.0, 20.0, 20.0), ());
        tree.add_view(inner, leaf);
        tree.add_view(root, back);
        tree.add_view(root, inner);
        (tree, root, back, inner, leaf)
    }

    #[test]
    fn view_at_prefers_front_child() {
        let (tree, root, back, inner, leaf) = fixture();
        assert_eq!(tree.view_at(root, p(70.0, 70.0), false), Some(inner));
        assert_eq!(tree.view_at(root, p(15.0, 15.0), false), Some(back));
        assert_eq!(tree.view_at(root, p(65.0, 65.0), true), Some(leaf));
        assert_eq!(tree.view_at(root, p(5.0, 5.0), false), None, "outside root");
    }

    #[test]
    fn deep_view_at_reports_empty_container_spot() {
        let (tree, root, _, _, _) = fixture();
        assert_eq!(
            tree.view_at(root, p(90.0, 90.0), true),
            None,
            "inner has nothing under the point; back is not consulted"
        );
    }

    #[test]
    fn hidden_children_are_skipped() {
        let (mut tree, root, back, inner, _) = fixture();
        tree.set_visible(inner, false);
        assert_eq!(tree.view_at(root, p(70.0, 70.0), false), Some(back));
    }

    #[test]
    fn views_at_lists_nested_matches_first() {
        let (tree, root, back, inner, leaf) = fixture();
        assert_eq!(tree.views_at(root, p(65.0, 65.0), true), vec![leaf, inner, back]);
        assert_eq!(tree.views_at(root, p(65.0, 65.0), false), vec![inner, back]);
        assert!(tree.views_at(root, p(200.0, 200.0), false).is_empty());
    }

    #[test]
    fn container_at_descends_only_when_deep() {
        let (tree, root, _, inner, _) = fixture();
        assert_eq!(tree.container_at(root, p(70.0, 70.0), true), inner);
        assert_eq!(tree.container_at(root, p(70.0, 70.0), false), root);
        assert_eq!(tree.container_at(root, p(15.0, 15.0), true), root);
    }

    #[test]
    fn leaf_hit_test_override_is_used() {
        let mut tree = ViewTree::new();
        let root = tree.create_container(r(0.0, 0.0, 100.0, 100.0));
        let v = tree.create_view(r(0.0, 0.0, 40.0, 40.0), LeftHalf);
        tree.add_view(root, v);
        assert!(tree.hit_test(v, p(10.0, 10.0), Buttons::LBUTTON));
        assert!(!tree.hit_test(v, p(30.0, 10.0), Buttons::LBUTTON), "right half");
        assert!(tree.hit_test_sub_views(root, p(10.0, 10.0), Buttons::LBUTTON));
        assert!(!tree.hit_test_sub_views(root, p(30.0, 10.0), Buttons::LBUTTON));

        tree.set_mouse_enabled(v, false);
        assert!(
            !tree.hit_test_sub_views(root, p(10.0, 10.0), Buttons::LBUTTON),
            "mouse-disabled child"
        );
    }
}
