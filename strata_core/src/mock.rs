// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording drawing context for unit tests.
//!
//! [`MockContext`] keeps canvas-like style state and records every call. Paint
//! operations are also appended to a `painted` list that stands in for the
//! pixel buffer: capturing copies it, restoring replaces it.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::color::Color;
use crate::context::{CoordinateMapper, DrawContext, PixelRect, PixelSnapshot, SurfaceSize};
use crate::font::Font;

/// Advance per character reported by [`MockContext::measure_text`].
pub(crate) const CHAR_ADVANCE: f64 = 6.5;

/// One recorded call.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Fill(Color),
    Stroke(Color, Vec<f64>),
    FillRect(Rect, Color),
    FillText {
        text: String,
        at: Point,
        color: Color,
        font: Font,
    },
    Measure(String),
    Capture(PixelRect),
    Restore(i32, i32),
}

impl Op {
    fn is_paint(&self) -> bool {
        matches!(
            self,
            Self::Fill(..) | Self::Stroke(..) | Self::FillRect(..) | Self::FillText { .. }
        )
    }
}

/// A style value as the mock reports it: a solid color or a host gradient the
/// core has no [`Color`] for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum MockPaint {
    Solid(Color),
    Gradient(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MockSnapshot {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) painted: Vec<Op>,
}

impl PixelSnapshot for MockSnapshot {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Debug)]
pub(crate) struct MockContext {
    pub(crate) ops: Vec<Op>,
    pub(crate) painted: Vec<Op>,
    pub(crate) fill: Color,
    pub(crate) stroke: Color,
    /// Set while a gradient fill is active; painting still records `fill`.
    pub(crate) fill_gradient: Option<u32>,
    pub(crate) stroke_gradient: Option<u32>,
    pub(crate) font: Font,
    pub(crate) dash: Vec<f64>,
    pub(crate) size: SurfaceSize,
    pub(crate) fail_capture: bool,
}

impl MockContext {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            ops: Vec::new(),
            painted: Vec::new(),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            fill_gradient: None,
            stroke_gradient: None,
            font: Font::default(),
            dash: Vec::new(),
            size: SurfaceSize::new(width, height),
            fail_capture: false,
        }
    }

    /// Style state as a comparable tuple.
    pub(crate) fn style(&self) -> (MockPaint, MockPaint, Font, Vec<f64>) {
        (
            self.fill_paint(),
            self.stroke_paint(),
            self.font.clone(),
            self.dash.clone(),
        )
    }

    /// Simulates the host painting its own content.
    pub(crate) fn host_paint(&mut self, label: &str) {
        self.record(Op::FillText {
            text: label.to_string(),
            at: Point::ZERO,
            color: Color::BLACK,
            font: Font::new("host"),
        });
    }

    /// Texts drawn into the current pixel state, in paint order.
    pub(crate) fn painted_texts(&self) -> Vec<&str> {
        self.painted
            .iter()
            .filter_map(|op| match op {
                Op::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, op: Op) {
        if op.is_paint() {
            self.painted.push(op.clone());
        }
        self.ops.push(op);
    }
}

impl DrawContext for MockContext {
    type Snapshot = MockSnapshot;
    type Paint = MockPaint;

    fn begin_path(&mut self) {
        self.record(Op::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.record(Op::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.record(Op::LineTo(p));
    }

    fn fill(&mut self) {
        self.record(Op::Fill(self.fill));
    }

    fn stroke(&mut self) {
        self.record(Op::Stroke(self.stroke, self.dash.clone()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.record(Op::FillRect(rect, self.fill));
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        self.record(Op::FillText {
            text: text.to_string(),
            at,
            color: self.fill,
            font: self.font.clone(),
        });
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.record(Op::Measure(text.to_string()));
        let chars = text.chars().count() as f64;
        chars * CHAR_ADVANCE
    }

    fn fill_paint(&self) -> MockPaint {
        match self.fill_gradient {
            Some(id) => MockPaint::Gradient(id),
            None => MockPaint::Solid(self.fill),
        }
    }

    fn set_fill_paint(&mut self, paint: &MockPaint) {
        match *paint {
            MockPaint::Solid(color) => self.set_fill_color(color),
            MockPaint::Gradient(id) => self.fill_gradient = Some(id),
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
        self.fill_gradient = None;
    }

    fn stroke_paint(&self) -> MockPaint {
        match self.stroke_gradient {
            Some(id) => MockPaint::Gradient(id),
            None => MockPaint::Solid(self.stroke),
        }
    }

    fn set_stroke_paint(&mut self, paint: &MockPaint) {
        match *paint {
            MockPaint::Solid(color) => self.set_stroke_color(color),
            MockPaint::Gradient(id) => self.stroke_gradient = Some(id),
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
        self.stroke_gradient = None;
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
        self.dash = dash.to_vec();
    }

    fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    fn capture(&mut self, region: PixelRect) -> Option<MockSnapshot> {
        self.record(Op::Capture(region));
        if self.fail_capture || region.width == 0 || region.height == 0 {
            return None;
        }
        Some(MockSnapshot {
            width: region.width,
            height: region.height,
            painted: self.painted.clone(),
        })
    }

    fn restore(&mut self, snapshot: &MockSnapshot, x: i32, y: i32) {
        self.record(Op::Restore(x, y));
        self.painted.clone_from(&snapshot.painted);
    }
}

/// Maps data space to pixels by scaling x by 100 and flipping y over a
/// 100-pixel-high plot.
#[derive(Debug)]
pub(crate) struct ScaleMapper;

impl CoordinateMapper for ScaleMapper {
    fn map_x(&self, x: f64) -> f64 {
        x * 100.0
    }

    fn map_y(&self, y: f64) -> f64 {
        100.0 - y * 100.0
    }
}
