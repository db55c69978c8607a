// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child iteration.

use alloc::vec::Vec;

use super::id::{INVALID, ViewId};
use super::store::ViewTree;

/// An iterator over the direct children of a container, back to front.
///
/// Reverse it (`.rev()`) to walk front to back, the hit-testing order.
/// Created by [`ViewTree::children`].
#[derive(Debug)]
pub struct Children<'a> {
    tree: &'a ViewTree,
    front: u32,
    back: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a ViewTree, first: u32, last: u32) -> Self {
        Self {
            tree,
            front: first,
            back: last,
        }
    }

    fn finish_if_met(&mut self, idx: u32) -> bool {
        if self.front == self.back {
            debug_assert_eq!(self.front, idx, "cursor ends out of sync");
            self.front = INVALID;
            self.back = INVALID;
            true
        } else {
            false
        }
    }
}

impl Iterator for Children<'_> {
    type Item = ViewId;

    fn next(&mut self) -> Option<ViewId> {
        if self.front == INVALID {
            return None;
        }
        let idx = self.front;
        if !self.finish_if_met(idx) {
            self.front = self.tree.next_sibling[idx as usize];
        }
        Some(self.tree.id_of(idx))
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<ViewId> {
        if self.back == INVALID {
            return None;
        }
        let idx = self.back;
        if !self.finish_if_met(idx) {
            self.back = self.tree.prev_sibling[idx as usize];
        }
        Some(self.tree.id_of(idx))
    }
}

/// A child walk that tolerates mutation between steps.
///
/// The children are captured when the walk starts. A handler may remove,
/// destroy, or reorder any child, including the one it is called for; each
/// captured child is handed out only if it is still alive and still a direct
/// child of the container when its turn comes. Children added during the
/// walk are not visited.
#[derive(Clone, Debug)]
pub(crate) struct ChildCursor {
    container: u32,
    /// Remaining children, next one last.
    pending: Vec<ViewId>,
}

impl ChildCursor {
    /// Walks from the first (back-most) child to the last.
    pub(crate) fn back_to_front(tree: &ViewTree, container: ViewId) -> Self {
        Self {
            container: container.idx,
            pending: tree.children(container).rev().collect(),
        }
    }

    /// Walks from the last (front-most) child to the first.
    pub(crate) fn front_to_back(tree: &ViewTree, container: ViewId) -> Self {
        Self {
            container: container.idx,
            pending: tree.children(container).collect(),
        }
    }

    /// Either direction, picked at runtime.
    pub(crate) fn new(tree: &ViewTree, container: ViewId, reverse: bool) -> Self {
        if reverse {
            Self::front_to_back(tree, container)
        } else {
            Self::back_to_front(tree, container)
        }
    }

    pub(crate) fn next(&mut self, tree: &ViewTree) -> Option<ViewId> {
        while let Some(id) = self.pending.pop() {
            if tree.is_alive(id) && tree.parent[id.idx as usize] == self.container {
                return Some(id);
            }
        }
        None
    }
}
