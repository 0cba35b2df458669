// Copyright 2026 the Litho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use litho_transitions::target::TargetKind;
use litho_transitions::trace::{
    ClearedEvent, IdEvent, OwnerPrunedEvent, TargetResolvedEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn target_name(target: TargetKind) -> &'static str {
    match target {
        TargetKind::All => "all",
        TargetKind::AutoLayout => "auto-layout",
        TargetKind::Single => "single",
        TargetKind::Set => "set",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_id_inserted(&mut self, e: &IdEvent<'_>) {
        let _ = writeln!(self.writer, "[insert] {}", e.id);
    }

    fn on_value_replaced(&mut self, e: &IdEvent<'_>) {
        let _ = writeln!(self.writer, "[replace] {}", e.id);
    }

    fn on_id_removed(&mut self, e: &IdEvent<'_>) {
        let _ = writeln!(self.writer, "[remove] {}", e.id);
    }

    fn on_owner_pruned(&mut self, e: &OwnerPrunedEvent<'_>) {
        let _ = writeln!(self.writer, "[prune] owner={}", e.owner);
    }

    fn on_cleared(&mut self, e: &ClearedEvent) {
        let _ = writeln!(self.writer, "[clear] ids={}", e.ids);
    }

    fn on_target_resolved(&mut self, e: &TargetResolvedEvent) {
        let _ = writeln!(
            self.writer,
            "[resolve] target={} matched={}",
            target_name(e.target),
            e.matched,
        );
    }
}
