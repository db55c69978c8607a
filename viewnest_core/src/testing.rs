// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles shared by the unit tests.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use kurbo::{BezPath, Point, Rect, Shape as _};

use crate::color::Color;
use crate::draw::{Bitmap, DrawContext, DrawMode, DrawStyle, LineStyle, PathFillRule};
use crate::event::{Buttons, DragData, DragItem, MouseEventResult, WheelAxis};
use crate::geom;
use crate::view::{ControlListener, FocusDrawing, View, ViewCx, ViewId};

pub(crate) fn r(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
    Rect::new(x0, y0, x1, y1)
}

pub(crate) fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// ---------------------------------------------------------------------------
// Recording draw context
// ---------------------------------------------------------------------------

/// A primitive the context was asked to paint, in device coordinates.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    Rect {
        rect: Rect,
        style: DrawStyle,
        fill: Color,
        clip: Rect,
    },
    Path {
        bounds: Rect,
        rule: PathFillRule,
        fill: Color,
        mode: DrawMode,
        clip: Rect,
    },
}

/// A [`DrawContext`] that keeps its clip in device space and logs primitives.
#[derive(Debug)]
pub(crate) struct RecordingContext {
    offset: Point,
    clip: Rect,
    alpha: f32,
    fill: Color,
    frame: Color,
    pub(crate) line_width: f64,
    pub(crate) line_style: LineStyle,
    pub(crate) mode: DrawMode,
    pub(crate) ops: Vec<Op>,
}

impl RecordingContext {
    pub(crate) fn new(clip: Rect) -> Self {
        Self {
            offset: Point::ZERO,
            clip,
            alpha: 1.0,
            fill: Color::TRANSPARENT,
            frame: Color::TRANSPARENT,
            line_width: 0.0,
            line_style: LineStyle::OnOff,
            mode: DrawMode::AntiAliased,
            ops: Vec::new(),
        }
    }

    pub(crate) fn paths(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Path { bounds, .. } => Some(*bounds),
                Op::Rect { .. } => None,
            })
            .collect()
    }
}

impl DrawContext for RecordingContext {
    fn offset(&self) -> Point {
        self.offset
    }

    fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn clip_rect(&self) -> Rect {
        self.clip - self.offset.to_vec2()
    }

    fn set_clip_rect(&mut self, clip: Rect) {
        self.clip = clip + self.offset.to_vec2();
    }

    fn global_alpha(&self) -> f32 {
        self.alpha
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_frame_color(&mut self, color: Color) {
        self.frame = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_line_style(&mut self, style: LineStyle) {
        self.line_style = style;
    }

    fn set_draw_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    fn draw_rect(&mut self, rect: Rect, style: DrawStyle) {
        self.ops.push(Op::Rect {
            rect: rect + self.offset.to_vec2(),
            style,
            fill: self.fill,
            clip: self.clip,
        });
    }

    fn fill_path(&mut self, path: &BezPath, rule: PathFillRule) {
        self.ops.push(Op::Path {
            bounds: path.bounding_box() + self.offset.to_vec2(),
            rule,
            fill: self.fill,
            mode: self.mode,
            clip: self.clip,
        });
    }
}

/// A bitmap that records where it was asked to draw.
#[derive(Debug, Default)]
pub(crate) struct RecordingBitmap {
    /// `(dest in device space, source offset, device clip)` per draw.
    pub(crate) draws: RefCell<Vec<(Rect, Point, Rect)>>,
}

impl Bitmap for RecordingBitmap {
    fn draw(&self, ctx: &mut dyn DrawContext, dest: Rect, offset: Point) {
        let shift = ctx.offset().to_vec2();
        self.draws
            .borrow_mut()
            .push((dest + shift, offset, ctx.clip_rect() + shift));
    }
}

// ---------------------------------------------------------------------------
// Probe view
// ---------------------------------------------------------------------------

/// One observed call into a [`Probe`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    /// Device-space bounds, device-space clip, and global alpha at draw time.
    Draw(&'static str, Rect, Rect, f32),
    MouseDown(&'static str, Point),
    MouseUp(&'static str, Point),
    MouseMoved(&'static str, Point),
    Wheel(&'static str, WheelAxis),
    DragEnter(&'static str),
    DragLeave(&'static str),
    DragMove(&'static str),
    Drop(&'static str),
    Attached(&'static str),
    Removed(&'static str),
    ParentSizeChanged(&'static str),
    TakeFocus(&'static str),
    LoseFocus(&'static str),
    Modifier(ViewId),
}

pub(crate) type Log = Rc<RefCell<Vec<Call>>>;

pub(crate) type Hook = Box<dyn FnMut(&mut ViewCx<'_>)>;

/// Custom focus ring: drawn on top or beneath, with a path or a refusal.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FocusRing {
    pub(crate) on_top: bool,
    pub(crate) path: Option<Rect>,
}

/// A view that logs every call and answers with canned results.
pub(crate) struct Probe {
    name: &'static str,
    log: Log,
    down: MouseEventResult,
    up: MouseEventResult,
    moved: MouseEventResult,
    wheel: bool,
    drop: bool,
    on_down: Option<Hook>,
    ring: Option<FocusRing>,
    listener: Option<Rc<RefCell<dyn ControlListener>>>,
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Probe {
    pub(crate) fn new(name: &'static str) -> (Self, Log) {
        let log = Log::default();
        (Self::with_log(name, &log), log)
    }

    pub(crate) fn with_log(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
            down: MouseEventResult::Handled,
            up: MouseEventResult::Handled,
            moved: MouseEventResult::Handled,
            wheel: true,
            drop: true,
            on_down: None,
            ring: None,
            listener: None,
        }
    }

    pub(crate) fn down(mut self, result: MouseEventResult) -> Self {
        self.down = result;
        self
    }

    pub(crate) fn moved(mut self, result: MouseEventResult) -> Self {
        self.moved = result;
        self
    }

    pub(crate) fn wheel(mut self, consumed: bool) -> Self {
        self.wheel = consumed;
        self
    }

    pub(crate) fn accept_drop(mut self, accepted: bool) -> Self {
        self.drop = accepted;
        self
    }

    pub(crate) fn on_down(mut self, hook: impl FnMut(&mut ViewCx<'_>) + 'static) -> Self {
        self.on_down = Some(Box::new(hook));
        self
    }

    pub(crate) fn ring(mut self, on_top: bool, path: Option<Rect>) -> Self {
        self.ring = Some(FocusRing { on_top, path });
        self
    }

    pub(crate) fn listener(mut self, listener: Rc<RefCell<dyn ControlListener>>) -> Self {
        self.listener = Some(listener);
        self
    }

    fn push(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl View for Probe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn draw(&mut self, ctx: &mut dyn DrawContext, bounds: Rect, _update: Rect) {
        let shift = ctx.offset().to_vec2();
        self.push(Call::Draw(
            self.name,
            bounds + shift,
            ctx.clip_rect() + shift,
            ctx.global_alpha(),
        ));
    }

    fn on_mouse_down(
        &mut self,
        cx: &mut ViewCx<'_>,
        at: Point,
        _buttons: Buttons,
    ) -> MouseEventResult {
        self.push(Call::MouseDown(self.name, at));
        if let Some(hook) = &mut self.on_down {
            hook(cx);
        }
        self.down
    }

    fn on_mouse_up(
        &mut self,
        _cx: &mut ViewCx<'_>,
        at: Point,
        _buttons: Buttons,
    ) -> MouseEventResult {
        self.push(Call::MouseUp(self.name, at));
        self.up
    }

    fn on_mouse_moved(
        &mut self,
        _cx: &mut ViewCx<'_>,
        at: Point,
        _buttons: Buttons,
    ) -> MouseEventResult {
        self.push(Call::MouseMoved(self.name, at));
        self.moved
    }

    fn on_wheel(
        &mut self,
        _cx: &mut ViewCx<'_>,
        _at: Point,
        axis: WheelAxis,
        _distance: f32,
        _buttons: Buttons,
    ) -> bool {
        self.push(Call::Wheel(self.name, axis));
        self.wheel
    }

    fn on_drag_enter(&mut self, _cx: &mut ViewCx<'_>, _drag: &dyn DragData, _at: Point) {
        self.push(Call::DragEnter(self.name));
    }

    fn on_drag_leave(&mut self, _cx: &mut ViewCx<'_>, _drag: &dyn DragData, _at: Point) {
        self.push(Call::DragLeave(self.name));
    }

    fn on_drag_move(&mut self, _cx: &mut ViewCx<'_>, _drag: &dyn DragData, _at: Point) {
        self.push(Call::DragMove(self.name));
    }

    fn on_drop(&mut self, _cx: &mut ViewCx<'_>, _drag: &dyn DragData, _at: Point) -> bool {
        self.push(Call::Drop(self.name));
        self.drop
    }

    fn attached(&mut self, _cx: &mut ViewCx<'_>) {
        self.push(Call::Attached(self.name));
    }

    fn removed(&mut self, _cx: &mut ViewCx<'_>) {
        self.push(Call::Removed(self.name));
    }

    fn parent_size_changed(&mut self, _cx: &mut ViewCx<'_>) {
        self.push(Call::ParentSizeChanged(self.name));
    }

    fn take_focus(&mut self, _cx: &mut ViewCx<'_>) {
        self.push(Call::TakeFocus(self.name));
    }

    fn lose_focus(&mut self, _cx: &mut ViewCx<'_>) {
        self.push(Call::LoseFocus(self.name));
    }

    fn focus_drawing(&self) -> Option<&dyn FocusDrawing> {
        self.ring.is_some().then_some(self as &dyn FocusDrawing)
    }

    fn listener(&self) -> Option<Rc<RefCell<dyn ControlListener>>> {
        self.listener.clone()
    }
}

impl FocusDrawing for Probe {
    fn draw_focus_on_top(&self) -> bool {
        self.ring.is_none_or(|ring| ring.on_top)
    }

    fn focus_path(&self, path: &mut BezPath, _bounds: Rect) -> bool {
        match self.ring.and_then(|ring| ring.path) {
            Some(rect) => {
                geom::push_rect(path, rect);
                true
            }
            None => false,
        }
    }
}

/// A listener that logs modifier clicks and answers with a fixed verdict.
#[derive(Debug)]
pub(crate) struct ModifierListener {
    pub(crate) log: Log,
    pub(crate) swallow: bool,
}

impl ControlListener for ModifierListener {
    fn control_modifier_clicked(&mut self, control: ViewId, _buttons: Buttons) -> bool {
        self.log.borrow_mut().push(Call::Modifier(control));
        self.swallow
    }
}

// ---------------------------------------------------------------------------
// Drag payload
// ---------------------------------------------------------------------------

/// A one-item text payload.
#[derive(Debug)]
pub(crate) struct TextDrag(pub(crate) &'static str);

impl DragData for TextDrag {
    fn count(&self) -> usize {
        1
    }

    fn item(&self, index: usize) -> Option<DragItem<'_>> {
        (index == 0).then_some(DragItem::Text(self.0))
    }
}
