// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshots of a view subtree.
//!
//! A snapshot is a nested object per view:
//!
//! ```json
//! {
//!   "id": 0, "generation": 0, "name": "container",
//!   "bounds": [0.0, 0.0, 100.0, 100.0],
//!   "mouseable_area": [0.0, 0.0, 100.0, 100.0],
//!   "visible": true, "mouse_enabled": true, "transparent": false,
//!   "wants_focus": false, "attached": true, "alpha": 1.0, "autosize": 0,
//!   "container": { "background_color": [0, 0, 0, 255], "children": [ ... ] }
//! }
//! ```
//!
//! `"container"` is `null` for leaves.

use std::io::{self, Write};

use kurbo::Rect;
use serde_json::{Value, json};

use viewnest_core::{ViewId, ViewTree};

fn rect(r: Rect) -> Value {
    json!([r.x0, r.y0, r.x1, r.y1])
}

/// Builds the snapshot of `id` and its descendants.
#[must_use]
pub fn to_json(tree: &ViewTree, id: ViewId) -> Value {
    let container = tree.is_container(id).then(|| {
        let color = tree.background_color(id);
        let children: Vec<Value> = tree.children(id).map(|child| to_json(tree, child)).collect();
        json!({
            "background_color": [color.r, color.g, color.b, color.a],
            "has_bitmap": tree.background(id).is_some(),
            "children": children,
        })
    });
    json!({
        "id": id.index(),
        "generation": id.generation(),
        "name": tree.view_name(id),
        "bounds": rect(tree.view_size(id)),
        "mouseable_area": rect(tree.mouseable_area(id)),
        "visible": tree.is_visible(id),
        "mouse_enabled": tree.is_mouse_enabled(id),
        "transparent": tree.is_transparent(id),
        "wants_focus": tree.wants_focus(id),
        "attached": tree.is_attached(id),
        "alpha": tree.alpha(id),
        "autosize": tree.autosize(id).bits(),
        "container": container,
    })
}

/// Writes the snapshot of `id` as pretty-printed JSON.
pub fn export(tree: &ViewTree, id: ViewId, writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, &to_json(tree, id))?;
    Ok(())
}
