// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle handling: painting layers around the host's draw.
//!
//! The host drives a [`Compositor`] through four events:
//!
//! ```text
//!   update_layers ──► LayerStore (no drawing)
//!
//!   will_draw ──► paint base ──► [host paints] ──► did_draw
//!                                                     │
//!                              capture snapshot ◄─────┤
//!                                                     ▼
//!                                                 paint top
//!
//!   draw_top_layer ──► replace top ──► restore snapshot ──► paint top
//! ```
//!
//! The snapshot taken in `did_draw` holds the surface exactly as the host
//! left it, before the top layer goes on. A later `draw_top_layer` restores
//! it and paints the new top layer, so the overlay can change without asking
//! the host to redraw.

use alloc::vec::Vec;

use crate::context::{CoordinateMapper, DrawContext, PixelRect, PixelSnapshot};
use crate::layer::{LayerKind, LayerStore};
use crate::shape::Shape;
#[cfg(feature = "trace-rich")]
use crate::trace::ShapePaintEvent;
use crate::trace::{
    LayerPaintEvent, LayerReplacedEvent, PaintPhase, RestoreEvent, SnapshotEvent, Tracer,
};

/// Compositor behavior knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositorConfig {
    /// Capture a full-surface snapshot after every host draw.
    ///
    /// Without snapshots, [`Compositor::draw_top_layer`] paints over whatever
    /// is on the surface, including the previous top layer.
    pub capture_snapshots: bool,
}

impl CompositorConfig {
    /// Configuration for hosts that repaint the top layer on interaction
    /// (hover, crosshairs): snapshot after every host draw.
    #[must_use]
    pub const fn interactive() -> Self {
        Self {
            capture_snapshots: true,
        }
    }

    /// Configuration for hosts that only change overlays alongside a full
    /// redraw: skip the per-draw pixel copy.
    #[must_use]
    pub const fn static_overlay() -> Self {
        Self {
            capture_snapshots: false,
        }
    }
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self::interactive()
    }
}

/// Payload of the `updateLayers` event. Absent layers are left unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateLayers {
    /// New base layer contents.
    pub base_layer: Option<Vec<Shape>>,
    /// New top layer contents.
    pub top_layer: Option<Vec<Shape>>,
}

impl UpdateLayers {
    /// Replaces only the base layer.
    #[must_use]
    pub fn base(shapes: Vec<Shape>) -> Self {
        Self {
            base_layer: Some(shapes),
            top_layer: None,
        }
    }

    /// Replaces only the top layer.
    #[must_use]
    pub fn top(shapes: Vec<Shape>) -> Self {
        Self {
            base_layer: None,
            top_layer: Some(shapes),
        }
    }
}

/// Payload of the `drawTopLayer` event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawTopLayer {
    /// New top layer contents. Empty clears the overlay.
    pub top_layer: Vec<Shape>,
}

/// How a top-only repaint started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopLayerRepaint {
    /// The post-host snapshot was restored before painting; the previous top
    /// layer is gone.
    Restored,
    /// No usable snapshot was retained, so the new top layer was painted over
    /// the current surface contents.
    Unrestored,
}

/// A host lifecycle event.
#[derive(Clone, Debug, PartialEq)]
pub enum LifecycleEvent {
    /// The host is about to paint its content.
    WillDraw,
    /// The host has finished painting its content.
    DidDraw,
    /// Replace layer contents without drawing.
    UpdateLayers(UpdateLayers),
    /// Replace the top layer and repaint it immediately.
    DrawTopLayer(DrawTopLayer),
}

impl LifecycleEvent {
    /// The host-side event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::WillDraw => "willDrawChart",
            Self::DidDraw => "didDrawChart",
            Self::UpdateLayers(_) => "updateLayers",
            Self::DrawTopLayer(_) => "drawTopLayer",
        }
    }
}

/// Paints a base and a top layer of shapes around a host's own drawing.
///
/// `S` is the backend's snapshot type; at most one snapshot is retained.
#[derive(Debug)]
pub struct Compositor<S> {
    config: CompositorConfig,
    layers: LayerStore,
    snapshot: Option<S>,
    snapshot_cycle: u64,
    cycle: u64,
}

impl<S: PixelSnapshot> Default for Compositor<S> {
    fn default() -> Self {
        Self::new(CompositorConfig::default())
    }
}

impl<S: PixelSnapshot> Compositor<S> {
    /// Creates a compositor with empty layers.
    #[must_use]
    pub fn new(config: CompositorConfig) -> Self {
        Self {
            config,
            layers: LayerStore::new(),
            snapshot: None,
            snapshot_cycle: 0,
            cycle: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> CompositorConfig {
        self.config
    }

    /// Returns the layer contents.
    #[must_use]
    pub fn layers(&self) -> &LayerStore {
        &self.layers
    }

    /// Number of `will_draw` calls so far.
    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Returns whether a post-host snapshot is retained.
    #[must_use]
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Returns whether the base layer was replaced since the last
    /// [`will_draw`](Self::will_draw). Base shapes only reach the surface
    /// through a host redraw.
    #[must_use]
    pub fn needs_host_redraw(&self) -> bool {
        self.layers.changes().base
    }

    /// Returns whether the top layer was replaced since it was last painted.
    #[must_use]
    pub fn needs_top_repaint(&self) -> bool {
        self.layers.changes().top
    }

    /// Dispatches a lifecycle event.
    ///
    /// Returns the repaint outcome for [`LifecycleEvent::DrawTopLayer`] and
    /// `None` otherwise.
    pub fn handle<M, C>(
        &mut self,
        event: LifecycleEvent,
        mapper: &M,
        ctx: &mut C,
        tracer: &mut Tracer<'_>,
    ) -> Option<TopLayerRepaint>
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext<Snapshot = S> + ?Sized,
    {
        match event {
            LifecycleEvent::WillDraw => {
                self.will_draw(mapper, ctx, tracer);
                None
            }
            LifecycleEvent::DidDraw => {
                self.did_draw(mapper, ctx, tracer);
                None
            }
            LifecycleEvent::UpdateLayers(update) => {
                self.update_layers(update, tracer);
                None
            }
            LifecycleEvent::DrawTopLayer(request) => {
                Some(self.draw_top_layer(request, mapper, ctx, tracer))
            }
        }
    }

    /// Starts a draw cycle and paints the base layer, before the host paints.
    pub fn will_draw<M, C>(&mut self, mapper: &M, ctx: &mut C, tracer: &mut Tracer<'_>)
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext<Snapshot = S> + ?Sized,
    {
        self.cycle += 1;
        self.paint(LayerKind::Base, PaintPhase::BeforeHost, mapper, ctx, tracer);
        self.layers.mark_clean(LayerKind::Base);
    }

    /// Snapshots the host's output, then paints the top layer over it.
    ///
    /// The previous snapshot is always dropped. A new one is taken only when
    /// capture is enabled and the surface has nonzero area; a failed capture
    /// leaves none.
    pub fn did_draw<M, C>(&mut self, mapper: &M, ctx: &mut C, tracer: &mut Tracer<'_>)
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext<Snapshot = S> + ?Sized,
    {
        let size = ctx.surface_size();
        self.snapshot = None;
        if self.config.capture_snapshots && !size.is_empty() {
            self.snapshot = ctx.capture(PixelRect::from_size(size));
        }
        self.snapshot_cycle = self.cycle;
        tracer.snapshot(&SnapshotEvent {
            cycle: self.cycle,
            width: size.width,
            height: size.height,
            captured: self.snapshot.is_some(),
        });

        if !self.layers.top().is_empty() {
            self.paint(LayerKind::Top, PaintPhase::AfterHost, mapper, ctx, tracer);
        }
        self.layers.mark_clean(LayerKind::Top);
    }

    /// Replaces the supplied layers. Nothing is drawn; the caller asks the
    /// host to redraw when it wants the change on screen.
    pub fn update_layers(&mut self, update: UpdateLayers, tracer: &mut Tracer<'_>) {
        if let Some(shapes) = update.base_layer {
            self.replace(LayerKind::Base, shapes, tracer);
        }
        if let Some(shapes) = update.top_layer {
            self.replace(LayerKind::Top, shapes, tracer);
        }
    }

    /// Replaces the top layer and repaints it without a host redraw.
    ///
    /// When a snapshot is retained, the surface is first reset to the
    /// post-host pixels so the old top layer disappears.
    pub fn draw_top_layer<M, C>(
        &mut self,
        request: DrawTopLayer,
        mapper: &M,
        ctx: &mut C,
        tracer: &mut Tracer<'_>,
    ) -> TopLayerRepaint
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext<Snapshot = S> + ?Sized,
    {
        self.replace(LayerKind::Top, request.top_layer, tracer);

        let outcome = match &self.snapshot {
            Some(snapshot) if snapshot.height() > 0 => {
                ctx.restore(snapshot, 0, 0);
                TopLayerRepaint::Restored
            }
            _ => TopLayerRepaint::Unrestored,
        };
        tracer.restore(&RestoreEvent {
            cycle: self.snapshot_cycle,
            outcome,
        });

        self.paint(LayerKind::Top, PaintPhase::TopOnly, mapper, ctx, tracer);
        self.layers.mark_clean(LayerKind::Top);
        outcome
    }

    fn replace(&mut self, kind: LayerKind, shapes: Vec<Shape>, tracer: &mut Tracer<'_>) {
        let shape_count = count(shapes.len());
        self.layers.replace(kind, shapes);
        tracer.layer_replaced(&LayerReplacedEvent {
            cycle: self.cycle,
            layer: kind,
            shape_count,
        });
    }

    fn paint<M, C>(
        &self,
        kind: LayerKind,
        phase: PaintPhase,
        mapper: &M,
        ctx: &mut C,
        tracer: &mut Tracer<'_>,
    ) where
        M: CoordinateMapper + ?Sized,
        C: DrawContext + ?Sized,
    {
        let shapes = self.layers.layer(kind);
        for (index, shape) in shapes.iter().enumerate() {
            shape.draw(mapper, ctx);
            #[cfg(feature = "trace-rich")]
            tracer.shape_paint(&ShapePaintEvent {
                cycle: self.cycle,
                layer: kind,
                index: count(index),
                kind: shape.kind(),
            });
            #[cfg(not(feature = "trace-rich"))]
            {
                _ = index;
            }
        }
        tracer.layer_paint(&LayerPaintEvent {
            cycle: self.cycle,
            layer: kind,
            phase,
            shape_count: count(shapes.len()),
        });
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
