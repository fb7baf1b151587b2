// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use strata_core::compositor::TopLayerRepaint;
use strata_core::trace::{
    LayerPaintEvent, LayerReplacedEvent, RestoreEvent, ShapePaintEvent, SnapshotEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    shapes: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("shapes", &self.shapes)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    ///
    /// Per-shape events are skipped until enabled with
    /// [`with_shapes`](Self::with_shapes).
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            shapes: false,
        }
    }

    /// Also prints one line per painted shape.
    #[must_use]
    pub fn with_shapes(mut self, shapes: bool) -> Self {
        self.shapes = shapes;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn outcome_name(outcome: TopLayerRepaint) -> &'static str {
    match outcome {
        TopLayerRepaint::Restored => "restored",
        TopLayerRepaint::Unrestored => "UNRESTORED",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layer_replaced(&mut self, e: &LayerReplacedEvent) {
        let _ = writeln!(
            self.writer,
            "[replace] cycle={} layer={} shapes={}",
            e.cycle,
            e.layer.name(),
            e.shape_count,
        );
    }

    fn on_layer_paint(&mut self, e: &LayerPaintEvent) {
        let _ = writeln!(
            self.writer,
            "[paint] cycle={} layer={} phase={} shapes={}",
            e.cycle,
            e.layer.name(),
            e.phase.name(),
            e.shape_count,
        );
    }

    fn on_snapshot(&mut self, e: &SnapshotEvent) {
        let state = if e.captured { "captured" } else { "none" };
        let _ = writeln!(
            self.writer,
            "[snapshot] cycle={} size={}x{} {state}",
            e.cycle, e.width, e.height,
        );
    }

    fn on_restore(&mut self, e: &RestoreEvent) {
        let _ = writeln!(
            self.writer,
            "[restore] cycle={} {}",
            e.cycle,
            outcome_name(e.outcome),
        );
    }

    fn on_shape_paint(&mut self, e: &ShapePaintEvent) {
        if !self.shapes {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[shape] cycle={} layer={} #{} {:?}",
            e.cycle,
            e.layer.name(),
            e.index,
            e.kind,
        );
    }
}
