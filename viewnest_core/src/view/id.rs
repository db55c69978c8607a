// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View identity.

use core::fmt;

/// Sentinel value indicating "no view" in index fields.
pub const INVALID: u32 = u32::MAX;

/// A handle to a view in a [`ViewTree`](super::ViewTree).
///
/// The generation counter makes handles to destroyed views detectably stale,
/// even after their slot has been handed to a new view.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl ViewId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ViewId({}@gen{})", self.idx, self.generation)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.idx)
    }
}
