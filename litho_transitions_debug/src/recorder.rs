// Copyright 2026 the Litho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as little-endian records. Strings are length-prefixed with a
//! `u32`. [`decode`] reads them back as an iterator of [`RecordedEvent`].

use litho_transitions::TransitionId;
use litho_transitions::target::TargetKind;
use litho_transitions::trace::{
    ClearedEvent, IdEvent, OwnerPrunedEvent, TargetResolvedEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_ID_INSERTED: u8 = 1;
const TAG_VALUE_REPLACED: u8 = 2;
const TAG_ID_REMOVED: u8 = 3;
const TAG_OWNER_PRUNED: u8 = 4;
const TAG_CLEARED: u8 = 5;
const TAG_TARGET_RESOLVED: u8 = 6;

const KIND_GLOBAL: u8 = 0;
const KIND_SCOPED: u8 = 1;
const KIND_AUTOGENERATED: u8 = 2;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "transition keys are far shorter than u32::MAX bytes"
        )]
        self.write_u32(s.len() as u32);
        self.buf.extend_from_slice(s.as_bytes());
    }

    fn write_id(&mut self, id: &TransitionId) {
        match id {
            TransitionId::Global { reference } => {
                self.write_u8(KIND_GLOBAL);
                self.write_str(reference);
            }
            TransitionId::Scoped { owner, reference } => {
                self.write_u8(KIND_SCOPED);
                self.write_str(owner);
                self.write_str(reference);
            }
            TransitionId::Autogenerated { reference } => {
                self.write_u8(KIND_AUTOGENERATED);
                self.write_str(reference);
            }
        }
    }

    fn write_target(&mut self, t: TargetKind) {
        self.write_u8(match t {
            TargetKind::All => 0,
            TargetKind::AutoLayout => 1,
            TargetKind::Single => 2,
            TargetKind::Set => 3,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_id_inserted(&mut self, e: &IdEvent<'_>) {
        self.write_u8(TAG_ID_INSERTED);
        self.write_id(e.id);
    }

    fn on_value_replaced(&mut self, e: &IdEvent<'_>) {
        self.write_u8(TAG_VALUE_REPLACED);
        self.write_id(e.id);
    }

    fn on_id_removed(&mut self, e: &IdEvent<'_>) {
        self.write_u8(TAG_ID_REMOVED);
        self.write_id(e.id);
    }

    fn on_owner_pruned(&mut self, e: &OwnerPrunedEvent<'_>) {
        self.write_u8(TAG_OWNER_PRUNED);
        self.write_str(e.owner);
    }

    fn on_cleared(&mut self, e: &ClearedEvent) {
        self.write_u8(TAG_CLEARED);
        self.write_u64(e.ids as u64);
    }

    fn on_target_resolved(&mut self, e: &TargetResolvedEvent) {
        self.write_u8(TAG_TARGET_RESOLVED);
        self.write_target(e.target);
        self.write_u64(e.matched as u64);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// An id was inserted.
    IdInserted(TransitionId),
    /// The value of an id was replaced.
    ValueReplaced(TransitionId),
    /// An id was removed.
    IdRemoved(TransitionId),
    /// An owner bucket was dropped.
    OwnerPruned {
        /// The owner.
        owner: String,
    },
    /// A [`ClearedEvent`].
    Cleared(ClearedEvent),
    /// A [`TargetResolvedEvent`].
    TargetResolved(TargetResolvedEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DecodeIter<'a> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_usize(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn read_str(&mut self) -> Option<&'a str> {
        let len = usize::try_from(self.read_u32()?).ok()?;
        if self.remaining() < len {
            return None;
        }
        let s = std::str::from_utf8(&self.data[self.pos..self.pos + len]).ok()?;
        self.pos += len;
        Some(s)
    }

    fn read_id(&mut self) -> Option<TransitionId> {
        Some(match self.read_u8()? {
            KIND_GLOBAL => TransitionId::global(self.read_str()?),
            KIND_SCOPED => TransitionId::scoped(self.read_str()?, self.read_str()?),
            KIND_AUTOGENERATED => TransitionId::autogenerated(self.read_str()?),
            _ => return None,
        })
    }

    fn read_target(&mut self) -> Option<TargetKind> {
        Some(match self.read_u8()? {
            0 => TargetKind::All,
            1 => TargetKind::AutoLayout,
            2 => TargetKind::Single,
            _ => TargetKind::Set,
        })
    }

    fn decode_owner_pruned(&mut self) -> Option<RecordedEvent> {
        let owner = self.read_str()?.to_owned();
        Some(RecordedEvent::OwnerPruned { owner })
    }

    fn decode_cleared(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Cleared(ClearedEvent {
            ids: self.read_usize()?,
        }))
    }

    fn decode_target_resolved(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::TargetResolved(TargetResolvedEvent {
            target: self.read_target()?,
            matched: self.read_usize()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_ID_INSERTED => self.read_id().map(RecordedEvent::IdInserted),
            TAG_VALUE_REPLACED => self.read_id().map(RecordedEvent::ValueReplaced),
            TAG_ID_REMOVED => self.read_id().map(RecordedEvent::IdRemoved),
            TAG_OWNER_PRUNED => self.decode_owner_pruned(),
            TAG_CLEARED => self.decode_cleared(),
            TAG_TARGET_RESOLVED => self.decode_target_resolved(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
