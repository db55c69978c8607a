// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input vocabulary: button and modifier state, mouse results, wheel axes,
//! and drag payloads.

use core::fmt;

bitflags::bitflags! {
    /// Mouse buttons and keyboard modifiers held during an event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u32 {
        /// Primary button.
        const LBUTTON = 1 << 0;
        /// Middle button.
        const MBUTTON = 1 << 1;
        /// Secondary button.
        const RBUTTON = 1 << 2;
        /// The press is the second of a double click.
        const DOUBLE_CLICK = 1 << 3;
        /// Shift key.
        const SHIFT = 1 << 4;
        /// Control key (Command on macOS hosts).
        const CONTROL = 1 << 5;
        /// Alt/Option key.
        const ALT = 1 << 6;
        /// Apple/Super key.
        const APPLE = 1 << 7;
    }
}

impl Buttons {
    /// All keyboard modifiers.
    pub const MODIFIERS: Self = Self::SHIFT
        .union(Self::CONTROL)
        .union(Self::ALT)
        .union(Self::APPLE);

    /// Returns `true` if any keyboard modifier is held.
    #[inline]
    #[must_use]
    pub const fn has_modifier(self) -> bool {
        self.intersects(Self::MODIFIERS)
    }
}

/// Outcome of a mouse handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseEventResult {
    /// The view consumed the event and wants the following moves and up.
    Handled,
    /// The view consumed the press but does not want moves or up.
    HandledNoCapture,
    /// The view declined; routing continues behind it if it is transparent.
    NotHandled,
    /// The view has no handler for this event.
    #[default]
    NotImplemented,
}

impl MouseEventResult {
    /// Returns `true` for both handled variants.
    #[inline]
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled | Self::HandledNoCapture)
    }
}

/// Scroll direction of a wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WheelAxis {
    /// Horizontal scrolling.
    X,
    /// Vertical scrolling.
    #[default]
    Y,
}

/// One entry of a drag payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragItem<'a> {
    /// UTF-8 text.
    Text(&'a str),
    /// A file path.
    File(&'a str),
    /// Raw bytes.
    Binary(&'a [u8]),
}

/// The payload of a drag session.
///
/// Containers never look inside; they only route it to the child under the
/// cursor.
pub trait DragData: fmt::Debug {
    /// Number of items carried.
    fn count(&self) -> usize;

    /// Returns the item at `index`, or `None` past the end.
    fn item(&self, index: usize) -> Option<DragItem<'_>>;
}
