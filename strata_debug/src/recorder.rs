// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records, each led by a one-byte tag.
//! [`decode`] reads them back as an iterator of [`RecordedEvent`].

use strata_core::compositor::TopLayerRepaint;
use strata_core::layer::LayerKind;
use strata_core::shape::ShapeKind;
use strata_core::trace::{
    LayerPaintEvent, LayerReplacedEvent, PaintPhase, RestoreEvent, ShapePaintEvent,
    SnapshotEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_LAYER_REPLACED: u8 = 1;
const TAG_LAYER_PAINT: u8 = 2;
const TAG_SNAPSHOT: u8 = 3;
const TAG_RESTORE: u8 = 4;
const TAG_SHAPE_PAINT: u8 = 5;

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

    fn write_layer(&mut self, layer: LayerKind) {
        self.write_u8(match layer {
            LayerKind::Base => 0,
            LayerKind::Top => 1,
        });
    }

    fn write_phase(&mut self, phase: PaintPhase) {
        self.write_u8(match phase {
            PaintPhase::BeforeHost => 0,
            PaintPhase::AfterHost => 1,
            PaintPhase::TopOnly => 2,
        });
    }

    fn write_outcome(&mut self, outcome: TopLayerRepaint) {
        self.write_u8(match outcome {
            TopLayerRepaint::Restored => 1,
            TopLayerRepaint::Unrestored => 0,
        });
    }

    fn write_shape_kind(&mut self, kind: ShapeKind) {
        self.write_u8(match kind {
            ShapeKind::ClosedPolygon => 0,
            ShapeKind::OpenPolygon => 1,
            ShapeKind::Text => 2,
            ShapeKind::Badge => 3,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_layer_replaced(&mut self, e: &LayerReplacedEvent) {
        self.write_u8(TAG_LAYER_REPLACED);
        self.write_u64(e.cycle);
        self.write_layer(e.layer);
        self.write_u32(e.shape_count);
    }

    fn on_layer_paint(&mut self, e: &LayerPaintEvent) {
        self.write_u8(TAG_LAYER_PAINT);
        self.write_u64(e.cycle);
        self.write_layer(e.layer);
        self.write_phase(e.phase);
        self.write_u32(e.shape_count);
    }

    fn on_snapshot(&mut self, e: &SnapshotEvent) {
        self.write_u8(TAG_SNAPSHOT);
        self.write_u64(e.cycle);
        self.write_u32(e.width);
        self.write_u32(e.height);
        self.write_u8(u8::from(e.captured));
    }

    fn on_restore(&mut self, e: &RestoreEvent) {
        self.write_u8(TAG_RESTORE);
        self.write_u64(e.cycle);
        self.write_outcome(e.outcome);
    }

    fn on_shape_paint(&mut self, e: &ShapePaintEvent) {
        self.write_u8(TAG_SHAPE_PAINT);
        self.write_u64(e.cycle);
        self.write_layer(e.layer);
        self.write_u32(e.index);
        self.write_shape_kind(e.kind);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A [`LayerReplacedEvent`].
    LayerReplaced(LayerReplacedEvent),
    /// A [`LayerPaintEvent`].
    LayerPaint(LayerPaintEvent),
    /// A [`SnapshotEvent`].
    Snapshot(SnapshotEvent),
    /// A [`RestoreEvent`].
    Restore(RestoreEvent),
    /// A [`ShapePaintEvent`].
    ShapePaint(ShapePaintEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first unknown tag, unknown layer, or truncated
/// record.
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

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    /// Layers are written as their index in paint order.
    fn read_layer(&mut self) -> Option<LayerKind> {
        let index = self.read_u8()?;
        LayerKind::ALL.get(usize::from(index)).copied()
    }

    fn read_phase(&mut self) -> Option<PaintPhase> {
        Some(match self.read_u8()? {
            0 => PaintPhase::BeforeHost,
            1 => PaintPhase::AfterHost,
            _ => PaintPhase::TopOnly,
        })
    }

    fn read_outcome(&mut self) -> Option<TopLayerRepaint> {
        Some(match self.read_u8()? {
            0 => TopLayerRepaint::Unrestored,
            _ => TopLayerRepaint::Restored,
        })
    }

    fn read_shape_kind(&mut self) -> Option<ShapeKind> {
        Some(match self.read_u8()? {
            0 => ShapeKind::ClosedPolygon,
            1 => ShapeKind::OpenPolygon,
            2 => ShapeKind::Text,
            _ => ShapeKind::Badge,
        })
    }

    fn decode_layer_replaced(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::LayerReplaced(LayerReplacedEvent {
            cycle: self.read_u64()?,
            layer: self.read_layer()?,
            shape_count: self.read_u32()?,
        }))
    }

    fn decode_layer_paint(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::LayerPaint(LayerPaintEvent {
            cycle: self.read_u64()?,
            layer: self.read_layer()?,
            phase: self.read_phase()?,
            shape_count: self.read_u32()?,
        }))
    }

    fn decode_snapshot(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Snapshot(SnapshotEvent {
            cycle: self.read_u64()?,
            width: self.read_u32()?,
            height: self.read_u32()?,
            captured: self.read_u8()? != 0,
        }))
    }

    fn decode_restore(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Restore(RestoreEvent {
            cycle: self.read_u64()?,
            outcome: self.read_outcome()?,
        }))
    }

    fn decode_shape_paint(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ShapePaint(ShapePaintEvent {
            cycle: self.read_u64()?,
            layer: self.read_layer()?,
            index: self.read_u32()?,
            kind: self.read_shape_kind()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_LAYER_REPLACED => self.decode_layer_replaced(),
            TAG_LAYER_PAINT => self.decode_layer_paint(),
            TAG_SNAPSHOT => self.decode_snapshot(),
            TAG_RESTORE => self.decode_restore(),
            TAG_SHAPE_PAINT => self.decode_shape_paint(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_events() -> Vec<RecordedEvent> {
        vec![
            RecordedEvent::LayerReplaced(LayerReplacedEvent {
                cycle: 0,
                layer: LayerKind::Base,
                shape_count: 3,
            }),
            RecordedEvent::LayerPaint(LayerPaintEvent {
                cycle: 1,
                layer: LayerKind::Base,
                phase: PaintPhase::BeforeHost,
                shape_count: 3,
            }),
            RecordedEvent::ShapePaint(ShapePaintEvent {
                cycle: 1,
                layer: LayerKind::Top,
                index: 7,
                kind: ShapeKind::OpenPolygon,
            }),
            RecordedEvent::Snapshot(SnapshotEvent {
                cycle: 1,
                width: 640,
                height: 480,
                captured: true,
            }),
            RecordedEvent::Restore(RestoreEvent {
                cycle: 1,
                outcome: TopLayerRepaint::Unrestored,
            }),
        ]
    }

    fn record(events: &[RecordedEvent]) -> RecorderSink {
        let mut rec = RecorderSink::new();
        for event in events {
            match event {
                RecordedEvent::LayerReplaced(e) => rec.on_layer_replaced(e),
                RecordedEvent::LayerPaint(e) => rec.on_layer_paint(e),
                RecordedEvent::Snapshot(e) => rec.on_snapshot(e),
                RecordedEvent::Restore(e) => rec.on_restore(e),
                RecordedEvent::ShapePaint(e) => rec.on_shape_paint(e),
            }
        }
        rec
    }

    #[test]
    fn round_trip_every_event_kind() {
        let events = sample_events();
        let rec = record(&events);
        let decoded: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(decoded, events);
    }

    #[test]
    fn records_are_fixed_size() {
        let rec = record(&sample_events()[..1]);
        // tag + cycle + layer + count
        assert_eq!(rec.as_bytes().len(), 1 + 8 + 1 + 4);
        assert_eq!(rec.as_bytes()[0], TAG_LAYER_REPLACED);
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }

    #[test]
    fn truncated_record_stops_decoding() {
        let bytes = record(&sample_events()).into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 1]).collect();
        assert_eq!(events.len(), sample_events().len() - 1);
    }

    #[test]
    fn every_layer_round_trips() {
        fn replaced(layer: LayerKind) -> RecordedEvent {
            RecordedEvent::LayerReplaced(LayerReplacedEvent {
                cycle: 4,
                layer,
                shape_count: 1,
            })
        }
        let events: Vec<_> = LayerKind::ALL.into_iter().map(replaced).collect();
        let rec = record(&events);
        let decoded: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(decoded, events);
    }

    #[test]
    fn unknown_layer_stops_decoding() {
        let mut bytes = record(&sample_events()[..1]).into_bytes();
        bytes.extend_from_slice(record(&sample_events()[..1]).as_bytes());
        // tag + cycle, then the layer byte of the second record.
        bytes[14 + 1 + 8] = 2;
        let events: Vec<_> = decode(&bytes).collect();
        assert_eq!(events, sample_events()[..1]);
    }

    #[test]
    fn unknown_tag_stops_decoding() {
        let mut bytes = record(&sample_events()[..2]).into_bytes();
        bytes.push(0xff);
        bytes.extend_from_slice(record(&sample_events()[2..]).as_bytes());
        let events: Vec<_> = decode(&bytes).collect();
        assert_eq!(events, sample_events()[..2]);
    }
}
