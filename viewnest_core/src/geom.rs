// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle helpers shared by layout, drawing, and hit testing.

use kurbo::{BezPath, Rect};

/// Returns `true` if `r` encloses no area.
#[inline]
pub(crate) fn is_empty(r: Rect) -> bool {
    r.x1 <= r.x0 || r.y1 <= r.y0
}

/// Intersection that collapses to a zero-size rect instead of producing an
/// inverted one.
#[inline]
pub(crate) fn bound(a: Rect, b: Rect) -> Rect {
    let r = a.intersect(b);
    if is_empty(r) {
        Rect::new(r.x0, r.y0, r.x0, r.y0)
    } else {
        r
    }
}

/// Edge-inclusive overlap test; touching rectangles overlap.
#[inline]
pub(crate) fn overlaps(a: Rect, b: Rect) -> bool {
    !(a.x1 < b.x0 || a.x0 > b.x1 || a.y1 < b.y0 || a.y0 > b.y1)
}

/// Appends the closed outline of `r` to `path`.
pub(crate) fn push_rect(path: &mut BezPath, r: Rect) {
    path.move_to((r.x0, r.y0));
    path.line_to((r.x1, r.y0));
    path.line_to((r.x1, r.y1));
    path.line_to((r.x0, r.y1));
    path.close_path();
}
