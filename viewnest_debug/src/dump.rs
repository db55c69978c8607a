// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indented text listing of a view subtree.

use std::io::{self, Write};

use viewnest_core::{ViewId, ViewTree};

/// Writes `id` and its descendants, one view per line, indented two spaces
/// per level starting at `depth`.
///
/// Each line shows the view's name, handle, bounds, and the flags that differ
/// from a fresh view.
pub fn dump_hierarchy(
    tree: &ViewTree,
    id: ViewId,
    depth: usize,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let r = tree.view_size(id);
    write!(
        writer,
        "{:indent$}{} {id} ({}, {}, {}, {})",
        "",
        tree.view_name(id),
        r.x0,
        r.y0,
        r.x1,
        r.y1,
        indent = depth * 2,
    )?;
    if !tree.is_visible(id) {
        write!(writer, " hidden")?;
    }
    if !tree.is_mouse_enabled(id) {
        write!(writer, " no-mouse")?;
    }
    if tree.is_transparent(id) {
        write!(writer, " transparent")?;
    }
    if tree.wants_focus(id) {
        write!(writer, " focusable")?;
    }
    if tree.frame().focus_view() == Some(id) {
        write!(writer, " focused")?;
    }
    writeln!(writer)?;

    for child in tree.children(id) {
        dump_hierarchy(tree, child, depth + 1, writer)?;
    }
    Ok(())
}
