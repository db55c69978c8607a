// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View tree, container layout, and event routing for retained-mode user
//! interfaces.
//!
//! `viewnest_core` keeps every view of a window in one [`ViewTree`]: a
//! struct-of-arrays arena addressed by generational [`ViewId`] handles. A view
//! whose slot carries container state owns an ordered list of children and
//! routes drawing, hit testing, mouse, wheel, drag-and-drop, and focus through
//! them. The crate is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   host event ──► ViewTree::on_mouse_down(root, ..) ──► front-most hit child
//!                                                              │
//!                        mouse_down_view capture ◄─────────────┘
//!
//!   host paint ──► ViewTree::draw_rect(root, ctx, update)
//!                      │  offset + clip per child, back-to-front
//!                      ▼
//!                  View::draw / container recursion
//!
//!   mutation ──► invalid()/invalid_rect() ──► parent chain ──► Frame damage
//!                                                               │
//!   host ◄──────────────── ViewTree::take_damage() ◄────────────┘
//! ```
//!
//! **[`view`]**: the arena, generational handles, flags, and the [`View`]
//! behavior trait that leaves implement.
//!
//! **[`container`]**: membership, z-order, autosize layout, drawing, hit
//! testing, event routing, focus traversal, and invalidation, all as methods
//! on [`ViewTree`] taking a container id.
//!
//! **[`draw`]**: the [`DrawContext`](draw::DrawContext) and
//! [`Bitmap`](draw::Bitmap) traits the host implements.
//!
//! **[`event`]**: button state, mouse results, wheel axes, and drag payloads.
//!
//! **[`frame`]**: window-level state: root, focus, focus ring settings, and
//! accumulated [`DamageRegion`](frame::DamageRegion).
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! a [`Tracer`](trace::Tracer) that costs nothing without the `trace` feature.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` dispatch to an installed
//!   sink.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod color;
pub mod container;
pub mod draw;
pub mod event;
pub mod frame;
mod geom;
pub mod trace;
pub mod view;

#[cfg(test)]
mod testing;

pub use color::Color;
pub use view::{View, ViewCx, ViewId, ViewTree};
