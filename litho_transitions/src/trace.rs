// Copyright 2026 the Litho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for transition map mutations.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! traced map operations ([`put_traced`], [`remove_traced`], [`clear_traced`],
//! [`resolve_traced`]) call as they change the map. All method bodies default
//! to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! [`put_traced`]: crate::TransitionIdMap::put_traced
//! [`remove_traced`]: crate::TransitionIdMap::remove_traced
//! [`clear_traced`]: crate::TransitionIdMap::clear_traced
//! [`resolve_traced`]: crate::TransitionIdMap::resolve_traced
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::id::TransitionId;
use crate::target::TargetKind;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Names the id affected by an insert, replace, or remove.
#[derive(Clone, Copy, Debug)]
pub struct IdEvent<'a> {
    /// The affected id.
    pub id: &'a TransitionId,
}

/// Emitted when the last scoped id under an owner is removed and the owner's
/// bucket is dropped from the scoped index.
#[derive(Clone, Copy, Debug)]
pub struct OwnerPrunedEvent<'a> {
    /// The owner whose bucket was dropped.
    pub owner: &'a str,
}

/// Emitted when the whole map is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearedEvent {
    /// Number of ids that were live before the clear.
    pub ids: usize,
}

/// Emitted after a transition target has been resolved against the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetResolvedEvent {
    /// Shape of the resolved target.
    pub target: TargetKind,
    /// Number of ids the target matched.
    pub matched: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from transition map operations.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an id is inserted for the first time.
    fn on_id_inserted(&mut self, e: &IdEvent<'_>) {
        _ = e;
    }

    /// Called when the value for an already present id is overwritten.
    fn on_value_replaced(&mut self, e: &IdEvent<'_>) {
        _ = e;
    }

    /// Called when an id is removed.
    fn on_id_removed(&mut self, e: &IdEvent<'_>) {
        _ = e;
    }

    /// Called when an emptied owner bucket is dropped.
    fn on_owner_pruned(&mut self, e: &OwnerPrunedEvent<'_>) {
        _ = e;
    }

    /// Called when the map is cleared.
    fn on_cleared(&mut self, e: &ClearedEvent) {
        _ = e;
    }

    /// Called after a transition target is resolved.
    fn on_target_resolved(&mut self, e: &TargetResolvedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an insert [`IdEvent`].
    #[inline]
    pub fn id_inserted(&mut self, e: &IdEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_id_inserted(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a replace [`IdEvent`].
    #[inline]
    pub fn value_replaced(&mut self, e: &IdEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_value_replaced(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a remove [`IdEvent`].
    #[inline]
    pub fn id_removed(&mut self, e: &IdEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_id_removed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`OwnerPrunedEvent`].
    #[inline]
    pub fn owner_pruned(&mut self, e: &OwnerPrunedEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_owner_pruned(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ClearedEvent`].
    #[inline]
    pub fn cleared(&mut self, e: &ClearedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cleared(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TargetResolvedEvent`].
    #[inline]
    pub fn target_resolved(&mut self, e: &TargetResolvedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_target_resolved(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_compiles() {
        let id = TransitionId::global("a");
        let mut sink = NoopSink;
        sink.on_id_inserted(&IdEvent { id: &id });
        sink.on_owner_pruned(&OwnerPrunedEvent { owner: "o" });
        sink.on_cleared(&ClearedEvent { ids: 3 });
        sink.on_target_resolved(&TargetResolvedEvent {
            target: TargetKind::All,
            matched: 0,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let id = TransitionId::global("a");
        let mut tracer = Tracer::none();
        tracer.id_inserted(&IdEvent { id: &id });
        tracer.cleared(&ClearedEvent { ids: 1 });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::string::{String, ToString};
        use alloc::vec::Vec;

        struct RecordingSink {
            removed: Vec<String>,
        }
        impl TraceSink for RecordingSink {
            fn on_id_removed(&mut self, e: &IdEvent<'_>) {
                self.removed.push(e.id.to_string());
            }
        }

        let id = TransitionId::scoped("o", "r");
        let mut sink = RecordingSink {
            removed: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.id_removed(&IdEvent { id: &id });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.removed, &["scoped:o/r"]);
    }
}
