// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-view flag sets.

bitflags::bitflags! {
    /// Boolean state of a view.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ViewFlags: u8 {
        /// Drawn and hit-testable.
        const VISIBLE = 1 << 0;
        /// Receives mouse presses.
        const MOUSE_ENABLED = 1 << 1;
        /// Lets presses and wheel events fall through to views behind it.
        const TRANSPARENT = 1 << 2;
        /// Can hold keyboard focus.
        const WANTS_FOCUS = 1 << 3;
        /// Needs repainting.
        const DIRTY = 1 << 4;
        /// Reachable from the frame's root.
        const ATTACHED = 1 << 5;
    }
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::MOUSE_ENABLED
    }
}

bitflags::bitflags! {
    /// How a child follows its container when the container is resized.
    ///
    /// `LEFT`/`TOP` pin an edge; `RIGHT`/`BOTTOM` make the far edge track the
    /// container's size delta. When the far edge tracks but the near edge is
    /// not pinned, the child moves instead of stretching. `ROW` and `COLUMN`
    /// are read on the container itself and distribute the height or width
    /// delta evenly across all children.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Autosize: u8 {
        /// Pin the left edge.
        const LEFT = 1 << 0;
        /// Track the right edge.
        const RIGHT = 1 << 1;
        /// Pin the top edge.
        const TOP = 1 << 2;
        /// Track the bottom edge.
        const BOTTOM = 1 << 3;
        /// Distribute height changes evenly among children.
        const ROW = 1 << 4;
        /// Distribute width changes evenly among children.
        const COLUMN = 1 << 5;
    }
}

impl Autosize {
    /// Follows all four edges.
    pub const EDGES: Self = Self::LEFT
        .union(Self::RIGHT)
        .union(Self::TOP)
        .union(Self::BOTTOM);
}
