// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] reads recorded bytes from a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes them as a JSON
//! array of objects, one per event, each with an `"event"` field naming its
//! kind.

use std::io::{self, Write};

use serde_json::{Value, json};

use strata_core::compositor::TopLayerRepaint;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = decode(bytes).map(|e| to_json(&e)).collect();
    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

/// Converts one event to a JSON object.
#[must_use]
pub fn to_json(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::LayerReplaced(e) => json!({
            "event": "layer_replaced",
            "cycle": e.cycle,
            "layer": e.layer.name(),
            "shape_count": e.shape_count,
        }),
        RecordedEvent::LayerPaint(e) => json!({
            "event": "layer_paint",
            "cycle": e.cycle,
            "layer": e.layer.name(),
            "phase": e.phase.name(),
            "shape_count": e.shape_count,
        }),
        RecordedEvent::Snapshot(e) => json!({
            "event": "snapshot",
            "cycle": e.cycle,
            "width": e.width,
            "height": e.height,
            "captured": e.captured,
        }),
        RecordedEvent::Restore(e) => json!({
            "event": "restore",
            "cycle": e.cycle,
            "restored": e.outcome == TopLayerRepaint::Restored,
        }),
        RecordedEvent::ShapePaint(e) => json!({
            "event": "shape_paint",
            "cycle": e.cycle,
            "layer": e.layer.name(),
            "index": e.index,
            "kind": format!("{:?}", e.kind),
        }),
    }
}
