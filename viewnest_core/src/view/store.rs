// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays view storage with allocation, topology, and properties.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::container::ContainerState;
use crate::frame::{DamageRegion, Frame};
use crate::trace::{TraceSink, Tracer};

use super::behavior::{View, ViewCx};
use super::flags::{Autosize, ViewFlags};
use super::id::{INVALID, ViewId};
use super::traverse::Children;

/// Storage for every view of one window.
///
/// Views are addressed by [`ViewId`] handles. Each view occupies a slot in
/// parallel arrays; destroyed views are recycled through a free list, and
/// generation counters turn old handles stale.
///
/// Accessors panic on stale handles. Operations that can legitimately be
/// refused (adding, removing, reordering) return `bool` instead.
pub struct ViewTree {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) last_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Properties --
    pub(crate) view_size: Vec<Rect>,
    pub(crate) mouseable_area: Vec<Rect>,
    pub(crate) flags: Vec<ViewFlags>,
    pub(crate) alpha: Vec<f32>,
    pub(crate) autosize: Vec<Autosize>,

    // -- Behavior --
    pub(crate) behavior: Vec<Option<Box<dyn View>>>,
    pub(crate) container: Vec<Option<ContainerState>>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Window --
    pub(crate) frame: Frame,
    pub(crate) tracer: Tracer,
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ViewTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewTree")
            .field("len", &self.len)
            .field("free", &self.free_list.len())
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

impl ViewTree {
    /// Creates an empty tree with a default [`Frame`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            last_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            view_size: Vec::new(),
            mouseable_area: Vec::new(),
            flags: Vec::new(),
            alpha: Vec::new(),
            autosize: Vec::new(),
            behavior: Vec::new(),
            container: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            frame: Frame::new(),
            tracer: Tracer::none(),
        }
    }

    // -- Allocation API --

    /// Creates a leaf view with the given bounds and behavior.
    ///
    /// The mouseable area starts equal to `size`. The view is visible and
    /// mouse-enabled, and has no parent.
    pub fn create_view(&mut self, size: Rect, view: impl View + 'static) -> ViewId {
        self.alloc(size, Some(Box::new(view)), None)
    }

    /// Creates an empty container.
    pub fn create_container(&mut self, size: Rect) -> ViewId {
        self.alloc(size, None, Some(ContainerState::new()))
    }

    /// Creates a container that also carries a behavior.
    ///
    /// The behavior receives lifecycle and focus notifications; drawing and
    /// event routing are done by the container itself.
    pub fn create_container_with(&mut self, size: Rect, view: impl View + 'static) -> ViewId {
        self.alloc(size, Some(Box::new(view)), Some(ContainerState::new()))
    }

    pub(crate) fn alloc(
        &mut self,
        size: Rect,
        behavior: Option<Box<dyn View>>,
        container: Option<ContainerState>,
    ) -> ViewId {
        let idx = if let Some(idx) = self.free_list.pop() {
            let i = idx as usize;
            self.generation[i] += 1;
            self.parent[i] = INVALID;
            self.first_child[i] = INVALID;
            self.last_child[i] = INVALID;
            self.next_sibling[i] = INVALID;
            self.prev_sibling[i] = INVALID;
            self.view_size[i] = size;
            self.mouseable_area[i] = size;
            self.flags[i] = ViewFlags::default();
            self.alpha[i] = 1.0;
            self.autosize[i] = Autosize::empty();
            self.behavior[i] = behavior;
            self.container[i] = container;
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.last_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.view_size.push(size);
            self.mouseable_area.push(size);
            self.flags.push(ViewFlags::default());
            self.alpha.push(1.0);
            self.autosize.push(Autosize::empty());
            self.behavior.push(behavior);
            self.container.push(container);
            self.generation.push(0);
            idx
        };

        let id = self.id_of(idx);
        log::trace!("created {id:?}");
        id
    }

    /// Destroys a view and its whole subtree.
    ///
    /// A view that still has a parent is removed from it first, with the same
    /// notifications as [`remove_view`](Self::remove_view). Destroying the
    /// attached root detaches it from the frame. Returns `false` for a stale
    /// handle.
    pub fn destroy_view(&mut self, id: ViewId) -> bool {
        if !self.is_alive(id) {
            log::debug!("destroy_view: stale {id:?}");
            return false;
        }
        if let Some(parent) = self.parent(id) {
            return self.remove_view(parent, id, true);
        }
        if self.frame.root == Some(id) {
            self.detach_root();
        }
        // A detach handler may already have destroyed it.
        if self.is_alive(id) {
            self.release_subtree(id.idx);
        }
        true
    }

    /// Returns whether the given handle refers to a live view.
    #[must_use]
    pub fn is_alive(&self, id: ViewId) -> bool {
        // Freeing a slot bumps its generation, so freed handles never match.
        id.idx < self.len && self.generation[id.idx as usize] == id.generation
    }

    /// Number of live views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    /// Returns `true` if the tree holds no live views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -- Topology queries --

    /// Returns the container holding a view, if any.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        (p != INVALID).then(|| self.id_of(p))
    }

    /// Returns an iterator over the direct children of a container, back to
    /// front. Leaves have no children.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn children(&self, id: ViewId) -> Children<'_> {
        self.validate(id);
        let i = id.idx as usize;
        Children::new(self, self.first_child[i], self.last_child[i])
    }

    /// Returns the direct children front to back.
    #[must_use]
    pub fn children_rev(&self, id: ViewId) -> core::iter::Rev<Children<'_>> {
        self.children(id).rev()
    }

    /// Returns whether the view is a container.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn is_container(&self, id: ViewId) -> bool {
        self.validate(id);
        self.container[id.idx as usize].is_some()
    }

    /// Diagnostic name of the view's behavior.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn view_name(&self, id: ViewId) -> &'static str {
        self.validate(id);
        let i = id.idx as usize;
        match (&self.behavior[i], &self.container[i]) {
            (Some(b), _) => b.name(),
            (None, Some(_)) => "container",
            // Leased out to a running handler.
            (None, None) => "view",
        }
    }

    // -- Property getters --

    /// Bounds of the view, in its parent's coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn view_size(&self, id: ViewId) -> Rect {
        self.validate(id);
        self.view_size[id.idx as usize]
    }

    /// Area that accepts the mouse, in the parent's coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn mouseable_area(&self, id: ViewId) -> Rect {
        self.validate(id);
        self.mouseable_area[id.idx as usize]
    }

    /// All flags of a view.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn flags(&self, id: ViewId) -> ViewFlags {
        self.validate(id);
        self.flags[id.idx as usize]
    }

    /// Whether the view is drawn and hit-testable.
    #[must_use]
    pub fn is_visible(&self, id: ViewId) -> bool {
        self.flags(id).contains(ViewFlags::VISIBLE)
    }

    /// Whether the view receives mouse presses.
    #[must_use]
    pub fn is_mouse_enabled(&self, id: ViewId) -> bool {
        self.flags(id).contains(ViewFlags::MOUSE_ENABLED)
    }

    /// Whether unhandled events fall through the view.
    #[must_use]
    pub fn is_transparent(&self, id: ViewId) -> bool {
        self.flags(id).contains(ViewFlags::TRANSPARENT)
    }

    /// Whether the view can hold keyboard focus.
    #[must_use]
    pub fn wants_focus(&self, id: ViewId) -> bool {
        self.flags(id).contains(ViewFlags::WANTS_FOCUS)
    }

    /// Whether the view is reachable from the frame's root.
    #[must_use]
    pub fn is_attached(&self, id: ViewId) -> bool {
        self.flags(id).contains(ViewFlags::ATTACHED)
    }

    /// Opacity multiplier in `[0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn alpha(&self, id: ViewId) -> f32 {
        self.validate(id);
        self.alpha[id.idx as usize]
    }

    /// Autosize mask.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn autosize(&self, id: ViewId) -> Autosize {
        self.validate(id);
        self.autosize[id.idx as usize]
    }

    // -- Property setters --

    /// Sets the area that accepts the mouse.
    pub fn set_mouseable_area(&mut self, id: ViewId, area: Rect) {
        self.validate(id);
        self.mouseable_area[id.idx as usize] = area;
    }

    /// Shows or hides a view.
    ///
    /// The region it covers is invalidated either way.
    pub fn set_visible(&mut self, id: ViewId, visible: bool) {
        if self.is_visible(id) == visible {
            return;
        }
        if visible {
            self.flags[id.idx as usize].insert(ViewFlags::VISIBLE);
            self.invalid(id);
        } else {
            self.invalid(id);
            self.flags[id.idx as usize].remove(ViewFlags::VISIBLE);
        }
    }

    /// Enables or disables mouse presses.
    pub fn set_mouse_enabled(&mut self, id: ViewId, enabled: bool) {
        self.validate(id);
        self.flags[id.idx as usize].set(ViewFlags::MOUSE_ENABLED, enabled);
    }

    /// Sets whether unhandled events fall through the view.
    pub fn set_transparent(&mut self, id: ViewId, transparent: bool) {
        self.validate(id);
        let flags = &mut self.flags[id.idx as usize];
        if flags.contains(ViewFlags::TRANSPARENT) != transparent {
            flags.set(ViewFlags::TRANSPARENT, transparent);
            flags.insert(ViewFlags::DIRTY);
        }
    }

    /// Sets whether the view can hold keyboard focus.
    pub fn set_wants_focus(&mut self, id: ViewId, wants: bool) {
        self.validate(id);
        self.flags[id.idx as usize].set(ViewFlags::WANTS_FOCUS, wants);
    }

    /// Sets the opacity multiplier, clamped to `[0, 1]`, and marks the view
    /// dirty.
    pub fn set_alpha(&mut self, id: ViewId, alpha: f32) {
        self.validate(id);
        let alpha = alpha.clamp(0.0, 1.0);
        let i = id.idx as usize;
        if self.alpha[i] != alpha {
            self.alpha[i] = alpha;
            self.flags[i].insert(ViewFlags::DIRTY);
        }
    }

    /// Sets the autosize mask.
    pub fn set_autosize(&mut self, id: ViewId, autosize: Autosize) {
        self.validate(id);
        self.autosize[id.idx as usize] = autosize;
    }

    // -- Frame --

    /// Window-level state.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Mutable window-level state (focus ring settings).
    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    /// Drains the damage accumulated by invalidation.
    pub fn take_damage(&mut self) -> DamageRegion {
        self.frame.take_damage()
    }

    /// Installs a sink receiving [`trace`](crate::trace) events.
    ///
    /// Without the `trace` feature the sink is dropped and nothing is emitted.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.tracer = Tracer::new(sink);
    }

    /// Removes the installed trace sink, if any.
    pub fn clear_trace_sink(&mut self) {
        self.tracer = Tracer::none();
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: ViewId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale ViewId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Handle for a live slot.
    #[inline]
    pub(crate) fn id_of(&self, idx: u32) -> ViewId {
        ViewId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Calls `f` with the view's behavior leased out of its slot.
    ///
    /// Returns `None` if the view has no behavior or a handler further up the
    /// stack already holds it. The behavior is put back only if the slot
    /// still belongs to the same view; otherwise it is dropped here.
    pub(crate) fn with_view<R>(
        &mut self,
        id: ViewId,
        f: impl FnOnce(&mut dyn View, &mut ViewCx<'_>) -> R,
    ) -> Option<R> {
        if !self.is_alive(id) {
            return None;
        }
        let mut behavior = self.behavior[id.idx as usize].take()?;
        let result = f(behavior.as_mut(), &mut ViewCx::new(self, id));
        if self.is_alive(id) && self.behavior[id.idx as usize].is_none() {
            self.behavior[id.idx as usize] = Some(behavior);
        }
        Some(result)
    }

    /// Borrows a behavior without leasing it, for read-only queries.
    pub(crate) fn behavior(&self, id: ViewId) -> Option<&dyn View> {
        self.behavior[id.idx as usize].as_deref()
    }

    /// Appends `v` as the last (front-most) child of `c`.
    pub(crate) fn link_last(&mut self, c: u32, v: u32) {
        let last = self.last_child[c as usize];
        self.parent[v as usize] = c;
        self.next_sibling[v as usize] = INVALID;
        self.prev_sibling[v as usize] = last;
        if last == INVALID {
            self.first_child[c as usize] = v;
        } else {
            self.next_sibling[last as usize] = v;
        }
        self.last_child[c as usize] = v;
    }

    /// Inserts `v` directly before `before`, a child of `c`.
    pub(crate) fn link_before(&mut self, c: u32, v: u32, before: u32) {
        let prev = self.prev_sibling[before as usize];
        self.parent[v as usize] = c;
        self.next_sibling[v as usize] = before;
        self.prev_sibling[v as usize] = prev;
        if prev == INVALID {
            self.first_child[c as usize] = v;
        } else {
            self.next_sibling[prev as usize] = v;
        }
        self.prev_sibling[before as usize] = v;
    }

    /// Removes `v` from its parent's child list.
    pub(crate) fn unlink(&mut self, v: u32) {
        let p = self.parent[v as usize];
        if p == INVALID {
            return;
        }
        let prev = self.prev_sibling[v as usize];
        let next = self.next_sibling[v as usize];

        if prev == INVALID {
            self.first_child[p as usize] = next;
        } else {
            self.next_sibling[prev as usize] = next;
        }
        if next == INVALID {
            self.last_child[p as usize] = prev;
        } else {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[v as usize] = INVALID;
        self.prev_sibling[v as usize] = INVALID;
        self.next_sibling[v as usize] = INVALID;
    }

    /// Frees `idx` and everything below it.
    ///
    /// Behaviors are dropped here; none of them is notified.
    pub(crate) fn release_subtree(&mut self, idx: u32) {
        self.unlink(idx);
        let mut stack = alloc::vec![idx];
        while let Some(i) = stack.pop() {
            let mut child = self.first_child[i as usize];
            while child != INVALID {
                stack.push(child);
                child = self.next_sibling[child as usize];
            }
            self.free_slot(i);
        }
    }

    fn free_slot(&mut self, idx: u32) {
        let id = self.id_of(idx);
        if self.frame.focus_view == Some(id) {
            self.frame.focus_view = None;
        }
        if self.frame.root == Some(id) {
            self.frame.root = None;
        }
        let i = idx as usize;
        self.parent[i] = INVALID;
        self.first_child[i] = INVALID;
        self.last_child[i] = INVALID;
        self.next_sibling[i] = INVALID;
        self.prev_sibling[i] = INVALID;
        self.flags[i] = ViewFlags::empty();
        self.container[i] = None;
        self.generation[i] += 1;
        self.free_list.push(idx);
        self.behavior[i] = None;
        log::trace!("released {id:?}");
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub(crate) fn is_self_or_ancestor(&self, ancestor: u32, id: u32) -> bool {
        let mut cur = id;
        while cur != INVALID {
            if cur == ancestor {
                return true;
            }
            cur = self.parent[cur as usize];
        }
        false
    }
}
