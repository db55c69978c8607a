// Copyright 2026 the Viewnest Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, hierarchy dumps, and JSON snapshots for viewnest
//! diagnostics.
//!
//! - [`pretty::PrettyPrintSink`]: a [`TraceSink`](viewnest_core::trace::TraceSink)
//!   writing one line per event.
//! - [`dump::dump_hierarchy`]: an indented text listing of a subtree.
//! - [`snapshot::to_json`] and [`snapshot::export`]: a JSON snapshot of a
//!   subtree, for tooling and test fixtures.

pub mod dump;
pub mod pretty;
pub mod snapshot;
