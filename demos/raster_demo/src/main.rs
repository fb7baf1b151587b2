// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Off-screen chart overlay that exercises the compositor and tracing pipeline.
//!
//! Paints a base layer (a shaded band, a dashed threshold, a label) under a
//! simulated host series, then moves a crosshair with a value badge across
//! the chart using top-layer-only repaints. Each frame is written as a PNG,
//! events go to a [`PrettyPrintSink`](strata_debug::pretty::PrettyPrintSink)
//! on stderr, and the recording is exported as JSON.
//!
//! Usage: `raster_demo [OUTPUT_DIR]` (default: the current directory).

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use strata_core::color::Color;
use strata_core::compositor::{Compositor, DrawTopLayer, LifecycleEvent, UpdateLayers};
use strata_core::context::{CoordinateMapper, DrawContext};
use strata_core::kurbo::{Point, Rect};
use strata_core::map::LinearMapper;
use strata_core::shape::{
    Badge, BadgeAnchor, BadgePosition, BadgeStyle, ClosedPolygon, OpenPolygon, Shape, Text,
};
use strata_core::trace::{
    LayerPaintEvent, LayerReplacedEvent, RestoreEvent, ShapePaintEvent, SnapshotEvent, TraceSink,
    Tracer,
};
use strata_debug::pretty::PrettyPrintSink;
use strata_debug::recorder::RecorderSink;
use strata_raster::{PixmapCanvas, PixmapSnapshot};

const WIDTH: u32 = 480;
const HEIGHT: u32 = 240;
const SERIES: [f64; 9] = [3.0, 4.5, 4.0, 6.5, 5.5, 7.0, 6.0, 8.5, 7.5];
const CROSSHAIR_STOPS: [f64; 4] = [1.0, 3.0, 5.5, 7.0];
const LIMIT: Color = Color::from_rgb8(200, 0, 0);

/// Forwards every event to both sinks.
struct Tee<'a> {
    pretty: &'a mut PrettyPrintSink,
    recorder: &'a mut RecorderSink,
}

impl TraceSink for Tee<'_> {
    fn on_layer_replaced(&mut self, e: &LayerReplacedEvent) {
        self.pretty.on_layer_replaced(e);
        self.recorder.on_layer_replaced(e);
    }

    fn on_layer_paint(&mut self, e: &LayerPaintEvent) {
        self.pretty.on_layer_paint(e);
        self.recorder.on_layer_paint(e);
    }

    fn on_snapshot(&mut self, e: &SnapshotEvent) {
        self.pretty.on_snapshot(e);
        self.recorder.on_snapshot(e);
    }

    fn on_restore(&mut self, e: &RestoreEvent) {
        self.pretty.on_restore(e);
        self.recorder.on_restore(e);
    }

    fn on_shape_paint(&mut self, e: &ShapePaintEvent) {
        self.pretty.on_shape_paint(e);
        self.recorder.on_shape_paint(e);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    let mut pretty = PrettyPrintSink::stderr();
    let mut recorder = RecorderSink::new();

    let plot_area = Rect::new(
        20.0,
        10.0,
        f64::from(WIDTH) - 20.0,
        f64::from(HEIGHT) - 20.0,
    );
    let x_max = (SERIES.len() - 1) as f64;
    let mapper = LinearMapper::new(plot_area, (0.0, x_max), (0.0, 10.0));

    let mut canvas = PixmapCanvas::new(WIDTH, HEIGHT).ok_or("surface size must be nonzero")?;
    let mut compositor = Compositor::<PixmapSnapshot>::default();

    {
        let mut tee = Tee {
            pretty: &mut pretty,
            recorder: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);

        compositor.handle(
            LifecycleEvent::UpdateLayers(UpdateLayers {
                base_layer: Some(base_layer(x_max)),
                top_layer: None,
            }),
            &mapper,
            &mut canvas,
            &mut tracer,
        );

        // One full host cycle.
        canvas.clear(Color::WHITE);
        compositor.handle(LifecycleEvent::WillDraw, &mapper, &mut canvas, &mut tracer);
        host_paint(&mapper, &mut canvas);
        compositor.handle(LifecycleEvent::DidDraw, &mapper, &mut canvas, &mut tracer);
        save(&canvas, &out_dir, "frame_host")?;

        // The crosshair moves without the host redrawing.
        for (i, &x) in CROSSHAIR_STOPS.iter().enumerate() {
            compositor.handle(
                LifecycleEvent::DrawTopLayer(DrawTopLayer {
                    top_layer: crosshair(x),
                }),
                &mapper,
                &mut canvas,
                &mut tracer,
            );
            save(&canvas, &out_dir, &format!("frame_crosshair_{i}"))?;
        }
    }

    let path = out_dir.join("trace.json");
    let mut writer = BufWriter::new(File::create(&path)?);
    strata_debug::json::export(recorder.as_bytes(), &mut writer)?;

    println!(
        "Wrote {} frames and {} to {}",
        CROSSHAIR_STOPS.len() + 1,
        path.display(),
        out_dir.display()
    );
    Ok(())
}

/// Static annotations painted under the host series.
fn base_layer(x_max: f64) -> Vec<Shape> {
    let band = [
        Point::new(0.0, 4.0),
        Point::new(x_max, 4.0),
        Point::new(x_max, 6.0),
        Point::new(0.0, 6.0),
    ];
    vec![
        ClosedPolygon::new(band, Some(Color::from_rgba8(255, 200, 0, 96))).into(),
        OpenPolygon::new([Point::new(0.0, 8.0), Point::new(x_max, 8.0)], Some(LIMIT))
            .with_dash([6.0, 4.0])
            .into(),
        Text::new([Point::new(0.1, 8.3)], Some(LIMIT), "limit")
            .with_font("10px sans-serif")
            .into(),
    ]
}

/// A vertical rule at `x` and a badge with its value.
fn crosshair(x: f64) -> Vec<Shape> {
    let rule = OpenPolygon::new(
        [Point::new(x, 0.0), Point::new(x, 10.0)],
        Some(Color::from_rgb8(0, 0, 160)),
    );
    let anchor = BadgeAnchor {
        x,
        map_x: true,
        y: f64::from(HEIGHT) - 20.0,
        map_y: false,
        position: BadgePosition::BottomLeft,
    };
    vec![
        rule.into(),
        Badge::new(anchor, format!("x = {x:.1}"), BadgeStyle::default()).into(),
    ]
}

/// The host's own content: a polyline through the series.
fn host_paint<M: CoordinateMapper>(mapper: &M, canvas: &mut PixmapCanvas) {
    let saved = canvas.stroke_color();
    canvas.set_stroke_color(Color::from_rgb8(0, 120, 0));
    canvas.begin_path();
    for (i, &y) in SERIES.iter().enumerate() {
        let p = mapper.map_point(Point::new(i as f64, y));
        if i == 0 {
            canvas.move_to(p);
        } else {
            canvas.line_to(p);
        }
    }
    canvas.stroke();
    canvas.set_stroke_color(saved);
}

fn save(canvas: &PixmapCanvas, dir: &Path, name: &str) -> Result<(), Box<dyn Error>> {
    let path = dir.join(format!("{name}.png"));
    canvas.pixmap().save_png(&path)?;
    Ok(())
}
