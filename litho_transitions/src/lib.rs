// Copyright 2026 the Litho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition identifiers and the animation state map used during layout
//! diffing.
//!
//! When two consecutive layout passes are diffed, the transition manager needs
//! to find the animation state of every element that carries a transition
//! identity, and to turn the keys named by declared transitions into those
//! identities. This crate provides the data structures for both. It is
//! `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   layout node keys ──► TransitionId::from_keys() ──► TransitionId
//!                                                         │
//!                 ┌───────────────────────────────────────┘
//!                 ▼
//!   TransitionIdMap::put() / remove() ──► primary map + kind indexes
//!                                                         │
//!                 ┌───────────────────────────────────────┘
//!                 ▼
//!   ComponentTarget ──► TransitionIdMap::resolve() ──► &TransitionId ──► get()
//! ```
//!
//! **[`id`]** — [`TransitionId`], an enum over the global, scoped, and
//! autogenerated namespaces, and its derivation from layout-node keys.
//!
//! **[`map`]** — [`TransitionIdMap`], a map from ids to values with secondary
//! indexes for lookup by global reference or by owner and reference.
//!
//! **[`target`]** — [`ComponentTarget`] and its resolution against a map.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! map instrumentation, with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! The map has no internal synchronization. It is owned by a single
//! transition manager and mutated from one thread.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod id;
pub mod map;
pub mod target;
pub mod trace;

pub use id::{TransitionId, TransitionIdKind, TransitionKeyType};
pub use map::TransitionIdMap;
pub use target::{ComponentTarget, TargetKind};
