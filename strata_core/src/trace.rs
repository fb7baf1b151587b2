// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the draw cycle.
//!
//! The [`Compositor`](crate::compositor::Compositor) reports what it does to a
//! [`TraceSink`]: which layers were replaced, which were painted in which
//! phase, whether a snapshot was captured, and how each top-only repaint
//! went. All sink methods default to no-ops.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. With the `trace` feature
//! **off**, every `Tracer` method compiles to nothing. With it **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` enables the `Tracer` method bodies.
//! - `trace-rich` (implies `trace`) adds one [`ShapePaintEvent`] per painted
//!   shape.

use crate::compositor::TopLayerRepaint;
use crate::layer::LayerKind;
#[cfg(feature = "trace-rich")]
use crate::shape::ShapeKind;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// When a layer was painted relative to the host's own drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintPhase {
    /// During `will_draw`, before the host paints.
    BeforeHost,
    /// During `did_draw`, after the host paints.
    AfterHost,
    /// During `draw_top_layer`, with no host involvement.
    TopOnly,
}

impl PaintPhase {
    /// Short name, for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BeforeHost => "before-host",
            Self::AfterHost => "after-host",
            Self::TopOnly => "top-only",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a layer's contents are replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerReplacedEvent {
    /// Draw cycle at the time of replacement.
    pub cycle: u64,
    /// Which layer.
    pub layer: LayerKind,
    /// Number of shapes in the new contents.
    pub shape_count: u32,
}

/// Emitted after a layer is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerPaintEvent {
    /// Draw cycle.
    pub cycle: u64,
    /// Which layer.
    pub layer: LayerKind,
    /// When in the cycle the paint happened.
    pub phase: PaintPhase,
    /// Number of shapes painted.
    pub shape_count: u32,
}

/// Emitted after each host redraw, whether or not a snapshot was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapshotEvent {
    /// Draw cycle.
    pub cycle: u64,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Whether a snapshot is now retained.
    pub captured: bool,
}

/// Emitted at the start of each top-only repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestoreEvent {
    /// Draw cycle the restored snapshot (if any) belongs to.
    pub cycle: u64,
    /// Whether the post-host pixels were restored.
    pub outcome: TopLayerRepaint,
}

/// Emitted after each shape is painted (requires `trace-rich` feature).
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapePaintEvent {
    /// Draw cycle.
    pub cycle: u64,
    /// Which layer the shape belongs to.
    pub layer: LayerKind,
    /// Position of the shape within its layer.
    pub index: u32,
    /// Shape variant.
    pub kind: ShapeKind,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the compositor.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a layer is replaced.
    fn on_layer_replaced(&mut self, e: &LayerReplacedEvent) {
        _ = e;
    }

    /// Called after a layer is painted.
    fn on_layer_paint(&mut self, e: &LayerPaintEvent) {
        _ = e;
    }

    /// Called after each host redraw with the snapshot outcome.
    fn on_snapshot(&mut self, e: &SnapshotEvent) {
        _ = e;
    }

    /// Called at the start of a top-only repaint.
    fn on_restore(&mut self, e: &RestoreEvent) {
        _ = e;
    }

    /// Called after each shape is painted (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_shape_paint(&mut self, e: &ShapePaintEvent) {
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

    /// Emits a [`LayerReplacedEvent`].
    #[inline]
    pub fn layer_replaced(&mut self, e: &LayerReplacedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_replaced(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayerPaintEvent`].
    #[inline]
    pub fn layer_paint(&mut self, e: &LayerPaintEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layer_paint(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SnapshotEvent`].
    #[inline]
    pub fn snapshot(&mut self, e: &SnapshotEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_snapshot(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RestoreEvent`].
    #[inline]
    pub fn restore(&mut self, e: &RestoreEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_restore(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ShapePaintEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn shape_paint(&mut self, e: &ShapePaintEvent) {
        if let Some(s) = &mut self.sink {
            s.on_shape_paint(e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
