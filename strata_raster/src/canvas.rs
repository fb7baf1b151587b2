// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A canvas-like drawing context over a `tiny_skia::Pixmap`.

use strata_core::color::Color;
use strata_core::context::{DrawContext, PixelRect, PixelSnapshot, SurfaceSize};
use strata_core::font::Font;
use strata_core::kurbo::{Point, Rect};
use tiny_skia::{
    BlendMode, FillRule, IntRect, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, StrokeDash,
    Transform,
};

/// Horizontal advance of one block glyph, in ems.
pub const GLYPH_ADVANCE: f64 = 0.6;
/// Height of a block glyph above the baseline, in ems.
pub const GLYPH_ASCENT: f64 = 0.7;
/// Ink width of a block glyph, in ems. Centered in the advance.
const GLYPH_INK: f64 = 0.5;
/// Font size used when the font string carries none.
const FALLBACK_EM: f64 = 10.0;

#[derive(Clone, Copy, Debug)]
enum Segment {
    MoveTo(Point),
    LineTo(Point),
}

/// A [`DrawContext`] that rasterizes into an owned [`Pixmap`].
///
/// State follows the HTML canvas defaults: black fill and stroke,
/// `10px sans-serif`, no dash, line width 1. Fills and strokes are not
/// anti-aliased, so repainting the same opaque shape yields the same pixels.
///
/// Text is drawn as solid blocks, one per non-whitespace character, sized
/// from the font's pixel size. [`measure_text`](DrawContext::measure_text)
/// agrees with that layout.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    path: Vec<Segment>,
    fill: Color,
    stroke: Color,
    font: Font,
    dash: Vec<f64>,
    line_width: f64,
}

impl core::fmt::Debug for PixmapCanvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixmapCanvas")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("fill", &self.fill)
            .field("stroke", &self.stroke)
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

impl PixmapCanvas {
    /// Creates a transparent canvas. Returns `None` for a zero dimension.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let pixmap = Pixmap::new(width, height)?;
        Some(Self::from_pixmap(pixmap))
    }

    /// Wraps an existing pixmap without clearing it.
    #[must_use]
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            pixmap,
            path: Vec::new(),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            font: Font::default(),
            dash: Vec::new(),
            line_width: 1.0,
        }
    }

    /// Returns the width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Returns the height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills every pixel with `color`, ignoring the current path and style.
    pub fn clear(&mut self, color: Color) {
        let color = tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a);
        self.pixmap.fill(color);
    }

    /// Returns the (straight-alpha) color of one pixel.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::from_rgba8(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Returns the fill color.
    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill
    }

    /// Returns the stroke color.
    #[must_use]
    pub fn stroke_color(&self) -> Color {
        self.stroke
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Sets the stroke width. Non-positive or non-finite widths are ignored.
    pub fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }

    /// Returns the pixel buffer.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consumes the canvas and returns the pixel buffer.
    #[must_use]
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn em(&self) -> f64 {
        self.font.size_px().unwrap_or(FALLBACK_EM)
    }

    fn build_path(&self) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for segment in &self.path {
            match *segment {
                Segment::MoveTo(p) => pb.move_to(f32_of(p.x), f32_of(p.y)),
                Segment::LineTo(p) => pb.line_to(f32_of(p.x), f32_of(p.y)),
            }
        }
        pb.finish()
    }

    fn fill_ltrb(&mut self, rect: Rect, color: Color) {
        let rect = rect.abs();
        if let Some(r) = tiny_skia::Rect::from_ltrb(
            f32_of(rect.x0),
            f32_of(rect.y0),
            f32_of(rect.x1),
            f32_of(rect.y1),
        ) {
            self.pixmap.fill_rect(r, &solid(color), Transform::identity(), None);
        }
    }
}

/// A non-anti-aliased solid paint.
fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = false;
    paint
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "tiny-skia geometry is f32; canvas coordinates fit"
)]
fn f32_of(v: f64) -> f32 {
    v as f32
}

/// Normalizes a dash list the way canvas `setLineDash` does: entries must be
/// finite and non-negative, and an odd-length list is repeated once.
fn normalize_dash(dash: &[f64]) -> Option<Vec<f64>> {
    if dash.iter().any(|d| !d.is_finite() || *d < 0.0) {
        return None;
    }
    let mut dash = dash.to_vec();
    if dash.len() % 2 == 1 {
        dash.extend_from_within(..);
    }
    Some(dash)
}

impl DrawContext for PixmapCanvas {
    type Snapshot = PixmapSnapshot;
    type Paint = Color;

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Point) {
        self.path.push(Segment::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        // Without a current point, lineTo starts the subpath.
        if self.path.is_empty() {
            self.path.push(Segment::MoveTo(p));
        } else {
            self.path.push(Segment::LineTo(p));
        }
    }

    fn fill(&mut self) {
        if let Some(path) = self.build_path() {
            self.pixmap.fill_path(
                &path,
                &solid(self.fill),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke(&mut self) {
        let Some(path) = self.build_path() else {
            return;
        };
        let mut stroke = Stroke {
            width: f32_of(self.line_width),
            ..Stroke::default()
        };
        if !self.dash.is_empty() {
            let pattern = self.dash.iter().map(|&d| f32_of(d)).collect();
            // An all-zero pattern has no valid dash and strokes solid.
            stroke.dash = StrokeDash::new(pattern, 0.0);
        }
        self.pixmap.stroke_path(
            &path,
            &solid(self.stroke),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.fill_ltrb(rect, self.fill);
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        let em = self.em();
        let inset = (GLYPH_ADVANCE - GLYPH_INK) / 2.0 * em;
        let mut pen = at.x;
        for ch in text.chars() {
            if !ch.is_whitespace() {
                let glyph = Rect::new(
                    pen + inset,
                    at.y - GLYPH_ASCENT * em,
                    pen + inset + GLYPH_INK * em,
                    at.y,
                );
                self.fill_ltrb(glyph, self.fill);
            }
            pen += GLYPH_ADVANCE * em;
        }
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * GLYPH_ADVANCE * self.em()
    }

    fn fill_paint(&self) -> Color {
        self.fill
    }

    fn set_fill_paint(&mut self, paint: &Color) {
        self.fill = *paint;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn stroke_paint(&self) -> Color {
        self.stroke
    }

    fn set_stroke_paint(&mut self, paint: &Color) {
        self.stroke = *paint;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn font(&self) -> Font {
        self.font.clone()
    }

    fn set_font(&mut self, font: &Font) {
        self.font = font.clone();
    }

    fn line_dash(&self) -> Vec<f64> {
        self.dash.clone()
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        if let Some(dash) = normalize_dash(dash) {
            self.dash = dash;
        }
    }

    fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.pixmap.width(), self.pixmap.height())
    }

    fn capture(&mut self, region: PixelRect) -> Option<PixmapSnapshot> {
        let rect = IntRect::from_xywh(region.x, region.y, region.width, region.height)?;
        self.pixmap.clone_rect(rect).map(PixmapSnapshot)
    }

    fn restore(&mut self, snapshot: &PixmapSnapshot, x: i32, y: i32) {
        let paint = PixmapPaint {
            blend_mode: BlendMode::Source,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            x,
            y,
            snapshot.0.as_ref(),
            &paint,
            Transform::identity(),
            None,
        );
    }
}

/// A copy of a canvas region, restored pixel for pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct PixmapSnapshot(Pixmap);

impl PixmapSnapshot {
    /// Returns the captured pixels.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.0
    }
}

impl PixelSnapshot for PixmapSnapshot {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }
}
