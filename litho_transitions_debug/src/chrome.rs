// Copyright 2026 the Litho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Recordings carry no timestamps, so each record is placed at its ordinal
//! position (`ts` = 0, 1, 2, ...). Alongside the instant events, a `live_ids`
//! counter track follows the number of ids in the map.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use litho_transitions::{TransitionId, TransitionIdKind};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut live: u64 = 0;

    for (ts, recorded) in decode(bytes).enumerate() {
        match recorded {
            RecordedEvent::IdInserted(id) => {
                live += 1;
                events.push(id_event("IdInserted", &id, ts));
                events.push(live_counter(live, ts));
            }
            RecordedEvent::ValueReplaced(id) => {
                events.push(id_event("ValueReplaced", &id, ts));
            }
            RecordedEvent::IdRemoved(id) => {
                live = live.saturating_sub(1);
                events.push(id_event("IdRemoved", &id, ts));
                events.push(live_counter(live, ts));
            }
            RecordedEvent::OwnerPruned { owner } => {
                events.push(json!({
                    "ph": "i",
                    "name": "OwnerPruned",
                    "cat": "Scoped",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "owner": owner,
                    }
                }));
            }
            RecordedEvent::Cleared(e) => {
                live = 0;
                events.push(json!({
                    "ph": "i",
                    "name": "Cleared",
                    "cat": "Map",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "ids": e.ids,
                    }
                }));
                events.push(live_counter(live, ts));
            }
            RecordedEvent::TargetResolved(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "TargetResolved",
                    "cat": "Target",
                    "ts": ts,
                    "pid": 0,
                    "tid": 1,
                    "s": "t",
                    "args": {
                        "target": format!("{:?}", e.target),
                        "matched": e.matched,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn id_event(name: &str, id: &TransitionId, ts: usize) -> Value {
    let cat = match id.kind() {
        TransitionIdKind::Global => "Global",
        TransitionIdKind::Scoped => "Scoped",
        TransitionIdKind::Autogenerated => "Autogenerated",
    };
    json!({
        "ph": "i",
        "name": name,
        "cat": cat,
        "ts": ts,
        "pid": 0,
        "tid": 0,
        "s": "t",
        "args": {
            "id": id.to_string(),
        }
    })
}

fn live_counter(live: u64, ts: usize) -> Value {
    json!({
        "ph": "C",
        "name": "live_ids",
        "ts": ts,
        "pid": 0,
        "args": {
            "ids": live,
        }
    })
}
