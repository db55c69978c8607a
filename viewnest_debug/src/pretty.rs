// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use kurbo::Rect;
use viewnest_core::ViewId;
use viewnest_core::trace::{
    DragPhase, DragRoutedEvent, DrawPassEvent, FocusChangedEvent, InvalidateEvent, MouseEventKind,
    MouseRoutedEvent, TraceSink, ViewAddedEvent, ViewRemovedEvent, ZOrderEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn target(view: Option<ViewId>) -> String {
    view.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

fn rect(r: Rect) -> String {
    format!("({}, {}, {}, {})", r.x0, r.y0, r.x1, r.y1)
}

fn mouse_name(kind: MouseEventKind) -> &'static str {
    match kind {
        MouseEventKind::Down => "down",
        MouseEventKind::Up => "up",
        MouseEventKind::Moved => "moved",
        MouseEventKind::Wheel => "wheel",
    }
}

fn drag_name(phase: DragPhase) -> &'static str {
    match phase {
        DragPhase::Enter => "enter",
        DragPhase::Move => "move",
        DragPhase::Leave => "leave",
        DragPhase::Drop => "drop",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_view_added(&mut self, e: &ViewAddedEvent) {
        let _ = writeln!(self.writer, "[add] {} <- {}", e.container, e.view);
    }

    fn on_view_removed(&mut self, e: &ViewRemovedEvent) {
        let released = if e.released { " released" } else { "" };
        let _ = writeln!(
            self.writer,
            "[remove] {} -> {}{released}",
            e.container, e.view,
        );
    }

    fn on_z_order_changed(&mut self, e: &ZOrderEvent) {
        let _ = writeln!(
            self.writer,
            "[z-order] {} {} index={}",
            e.container, e.view, e.index,
        );
    }

    fn on_invalidate(&mut self, e: &InvalidateEvent) {
        let _ = writeln!(self.writer, "[invalid] {} {}", e.view, rect(e.rect));
    }

    fn on_draw_pass(&mut self, e: &DrawPassEvent) {
        let _ = writeln!(
            self.writer,
            "[draw] {} update={} children={}",
            e.container,
            rect(e.update),
            e.children_drawn,
        );
    }

    fn on_mouse_routed(&mut self, e: &MouseRoutedEvent) {
        let _ = writeln!(
            self.writer,
            "[mouse:{}] {} at=({}, {}) target={} result={:?}",
            mouse_name(e.kind),
            e.container,
            e.at.x,
            e.at.y,
            target(e.target),
            e.result,
        );
    }

    fn on_focus_changed(&mut self, e: &FocusChangedEvent) {
        let _ = writeln!(
            self.writer,
            "[focus] {} -> {}",
            target(e.old),
            target(e.new),
        );
    }

    fn on_drag_routed(&mut self, e: &DragRoutedEvent) {
        let _ = writeln!(
            self.writer,
            "[drag:{}] {} target={}",
            drag_name(e.phase),
            e.container,
            target(e.target),
        );
    }
}
