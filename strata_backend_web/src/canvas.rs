// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `CanvasRenderingContext2d` as a drawing context.
//!
//! Every call goes straight to the browser context, so shapes draw with the
//! host's current transform, clip, and line width. Calls that can throw in
//! JavaScript (`fillText`, `measureText`, `setLineDash`, image data access)
//! are treated as no-ops when they do.

use alloc::string::ToString;
use alloc::vec::Vec;

use js_sys::Array;
use strata_core::color::Color;
use strata_core::context::{DrawContext, PixelRect, PixelSnapshot, SurfaceSize};
use strata_core::font::Font;
use strata_core::kurbo::{Point, Rect};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, ImageData};

/// A [`DrawContext`] backed by a browser 2D canvas context.
///
/// Fill and stroke styles are saved as the raw `fillStyle` / `strokeStyle`
/// values, so a host gradient or pattern is put back as the same object.
pub struct CanvasContext {
    ctx: CanvasRenderingContext2d,
}

impl core::fmt::Debug for CanvasContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CanvasContext")
            .field("ctx", &"CanvasRenderingContext2d")
            .finish()
    }
}

impl CanvasContext {
    /// Wraps a 2D context.
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Returns the wrapped context.
    #[must_use]
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

/// Keeps the numeric entries of a `getLineDash()` result.
pub(crate) fn dash_values(values: impl IntoIterator<Item = Option<f64>>) -> Vec<f64> {
    values.into_iter().flatten().collect()
}

impl DrawContext for CanvasContext {
    type Snapshot = ImageDataSnapshot;
    type Paint = JsValue;

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        let _ = self.ctx.fill_text(text, at.x, at.y);
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.ctx.measure_text(text).map_or(0.0, |m| m.width())
    }

    #[allow(
        deprecated,
        reason = "the JsValue style accessors cover every web-sys 0.3 release"
    )]
    fn fill_paint(&self) -> JsValue {
        self.ctx.fill_style()
    }

    #[allow(
        deprecated,
        reason = "the JsValue style accessors cover every web-sys 0.3 release"
    )]
    fn set_fill_paint(&mut self, paint: &JsValue) {
        self.ctx.set_fill_style(paint);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.set_fill_paint(&JsValue::from_str(&color.to_string()));
    }

    #[allow(
        deprecated,
        reason = "the JsValue style accessors cover every web-sys 0.3 release"
    )]
    fn stroke_paint(&self) -> JsValue {
        self.ctx.stroke_style()
    }

    #[allow(
        deprecated,
        reason = "the JsValue style accessors cover every web-sys 0.3 release"
    )]
    fn set_stroke_paint(&mut self, paint: &JsValue) {
        self.ctx.set_stroke_style(paint);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.set_stroke_paint(&JsValue::from_str(&color.to_string()));
    }

    fn font(&self) -> Font {
        Font::new(self.ctx.font())
    }

    fn set_font(&mut self, font: &Font) {
        self.ctx.set_font(font.as_str());
    }

    fn line_dash(&self) -> Vec<f64> {
        dash_values(self.ctx.get_line_dash().iter().map(|v| v.as_f64()))
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        let segments: Array = dash.iter().map(|&d| JsValue::from_f64(d)).collect();
        let _ = self.ctx.set_line_dash(&segments);
    }

    fn surface_size(&self) -> SurfaceSize {
        let Some(canvas) = self.ctx.canvas() else {
            return SurfaceSize::default();
        };
        SurfaceSize::new(canvas.width(), canvas.height())
    }

    fn capture(&mut self, region: PixelRect) -> Option<ImageDataSnapshot> {
        self.ctx
            .get_image_data(
                f64::from(region.x),
                f64::from(region.y),
                f64::from(region.width),
                f64::from(region.height),
            )
            .ok()
            .map(ImageDataSnapshot)
    }

    fn restore(&mut self, snapshot: &ImageDataSnapshot, x: i32, y: i32) {
        let _ = self.ctx.put_image_data(&snapshot.0, f64::from(x), f64::from(y));
    }
}

/// Pixels captured with `getImageData`, restored with `putImageData`.
#[derive(Clone, Debug)]
pub struct ImageDataSnapshot(ImageData);

impl ImageDataSnapshot {
    /// Returns the captured image data.
    #[must_use]
    pub fn image_data(&self) -> &ImageData {
        &self.0
    }
}

impl PixelSnapshot for ImageDataSnapshot {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }
}
