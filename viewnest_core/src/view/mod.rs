// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View tree data model.
//!
//! A *view* is a rectangle in a window's hierarchy. Each view has:
//!
//! - An identity ([`ViewId`]): a generational handle that becomes stale when
//!   the view is destroyed.
//! - Topology: parent, first/last child, and sibling links forming an ordered
//!   tree. The first child is drawn first (back-most); the last child is hit
//!   first (front-most).
//! - **Properties** stored in the arena: bounds, mouseable area,
//!   [`ViewFlags`], alpha, and an [`Autosize`] mask.
//! - **Behavior** supplied by the caller as a boxed [`View`].
//!
//! Views whose slot carries container state may own children; see
//! [`container`](crate::container) for everything a container does with them.

mod behavior;
mod flags;
mod id;
mod store;
mod traverse;

pub use behavior::{ControlListener, FocusDrawing, View, ViewCx};
pub use flags::{Autosize, ViewFlags};
pub use id::{INVALID, ViewId};
pub use store::ViewTree;
pub use traverse::Children;

pub(crate) use traverse::ChildCursor;
