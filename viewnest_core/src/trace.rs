// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing hooks for tree mutation and event routing.
//!
//! [`TraceSink`] has one method per event; every method defaults to a no-op,
//! so a sink implements only what it cares about. A [`ViewTree`] owns a
//! [`Tracer`] that wraps an optional boxed sink. Install one with
//! [`ViewTree::set_trace_sink`].
//!
//! With the `trace` feature **off**, every `Tracer` method compiles to
//! nothing. With it **on**, each call costs one `Option` branch.
//!
//! [`ViewTree`]: crate::ViewTree
//! [`ViewTree::set_trace_sink`]: crate::ViewTree::set_trace_sink

use alloc::boxed::Box;

use kurbo::{Point, Rect};

use crate::event::MouseEventResult;
use crate::view::ViewId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which mouse entry point routed an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Button press.
    Down,
    /// Button release.
    Up,
    /// Pointer motion.
    Moved,
    /// Scroll wheel.
    Wheel,
}

/// Which stage of a drag session was routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// The drag entered a container.
    Enter,
    /// The drag moved within a container.
    Move,
    /// The drag left a container.
    Leave,
    /// The payload was dropped.
    Drop,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// A view became a container's child.
#[derive(Clone, Copy, Debug)]
pub struct ViewAddedEvent {
    /// The adopting container.
    pub container: ViewId,
    /// The new child.
    pub view: ViewId,
}

/// A view stopped being a container's child.
#[derive(Clone, Copy, Debug)]
pub struct ViewRemovedEvent {
    /// The former parent.
    pub container: ViewId,
    /// The former child.
    pub view: ViewId,
    /// Whether the child was destroyed as well.
    pub released: bool,
}

/// A child moved within its container's paint order.
#[derive(Clone, Copy, Debug)]
pub struct ZOrderEvent {
    /// The container.
    pub container: ViewId,
    /// The moved child.
    pub view: ViewId,
    /// Its new position, counted from the back.
    pub index: usize,
}

/// A region reached the frame's damage.
#[derive(Clone, Copy, Debug)]
pub struct InvalidateEvent {
    /// The root the region arrived through.
    pub view: ViewId,
    /// The region, in frame coordinates.
    pub rect: Rect,
}

/// A container finished drawing.
#[derive(Clone, Copy, Debug)]
pub struct DrawPassEvent {
    /// The container.
    pub container: ViewId,
    /// The update region, in the container's local coordinates.
    pub update: Rect,
    /// How many children were painted.
    pub children_drawn: usize,
}

/// A container routed a mouse event.
#[derive(Clone, Copy, Debug)]
pub struct MouseRoutedEvent {
    /// The routing container.
    pub container: ViewId,
    /// Which entry point.
    pub kind: MouseEventKind,
    /// The child that received the event, if any.
    pub target: Option<ViewId>,
    /// Where the event happened, in the container's parent coordinates.
    pub at: Point,
    /// What the container answered.
    pub result: MouseEventResult,
}

/// Keyboard focus moved.
#[derive(Clone, Copy, Debug)]
pub struct FocusChangedEvent {
    /// The previous focus view.
    pub old: Option<ViewId>,
    /// The new focus view.
    pub new: Option<ViewId>,
}

/// A container routed a drag session stage.
#[derive(Clone, Copy, Debug)]
pub struct DragRoutedEvent {
    /// The routing container.
    pub container: ViewId,
    /// Which stage.
    pub phase: DragPhase,
    /// The child the stage was delivered to, if any.
    pub target: Option<ViewId>,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a [`ViewTree`](crate::ViewTree).
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called after a child is linked into a container.
    fn on_view_added(&mut self, e: &ViewAddedEvent) {
        _ = e;
    }

    /// Called after a child is unlinked from a container.
    fn on_view_removed(&mut self, e: &ViewRemovedEvent) {
        _ = e;
    }

    /// Called after a child's paint order changes.
    fn on_z_order_changed(&mut self, e: &ZOrderEvent) {
        _ = e;
    }

    /// Called when a region is added to the frame's damage.
    fn on_invalidate(&mut self, e: &InvalidateEvent) {
        _ = e;
    }

    /// Called when a container finishes drawing.
    fn on_draw_pass(&mut self, e: &DrawPassEvent) {
        _ = e;
    }

    /// Called when a container routes a mouse event.
    fn on_mouse_routed(&mut self, e: &MouseRoutedEvent) {
        _ = e;
    }

    /// Called when keyboard focus moves.
    fn on_focus_changed(&mut self, e: &FocusChangedEvent) {
        _ = e;
    }

    /// Called when a container routes a drag stage.
    fn on_drag_routed(&mut self, e: &DragRoutedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional owned [`TraceSink`].
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::none()
    }
}

macro_rules! emit {
    ($(#[$doc:meta])* $name:ident, $method:ident, $event:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$event) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$method(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {}
        }
    }

    emit!(
        /// Emits a [`ViewAddedEvent`].
        view_added, on_view_added, ViewAddedEvent
    );
    emit!(
        /// Emits a [`ViewRemovedEvent`].
        view_removed, on_view_removed, ViewRemovedEvent
    );
    emit!(
        /// Emits a [`ZOrderEvent`].
        z_order_changed, on_z_order_changed, ZOrderEvent
    );
    emit!(
        /// Emits an [`InvalidateEvent`].
        invalidate, on_invalidate, InvalidateEvent
    );
    emit!(
        /// Emits a [`DrawPassEvent`].
        draw_pass, on_draw_pass, DrawPassEvent
    );
    emit!(
        /// Emits a [`MouseRoutedEvent`].
        mouse_routed, on_mouse_routed, MouseRoutedEvent
    );
    emit!(
        /// Emits a [`FocusChangedEvent`].
        focus_changed, on_focus_changed, FocusChangedEvent
    );
    emit!(
        /// Emits a [`DragRoutedEvent`].
        drag_routed, on_drag_routed, DragRoutedEvent
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
