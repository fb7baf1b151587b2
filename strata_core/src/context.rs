// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability contract between the compositor and the charting host.
//!
//! The host owns two things the core needs while a draw callback runs:
//!
//! - a **coordinate mapper** ([`CoordinateMapper`]) converting data-space
//!   values to pixel coordinates, and
//! - a **drawing context** ([`DrawContext`]) with canvas-style path, fill,
//!   stroke, text, style, and pixel-buffer operations.
//!
//! Both are borrowed for the duration of a single call and never retained.
//! The only thing the core keeps across calls is an opaque
//! [`DrawContext::Snapshot`] produced by [`capture`](DrawContext::capture).
//!
//! # Backends
//!
//! `strata_raster` implements [`DrawContext`] over a CPU pixmap and
//! `strata_backend_web` over a browser `CanvasRenderingContext2d`. Unit
//! tests in this crate use a recording mock.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::color::Color;
use crate::font::Font;

/// Maps host data-space coordinates to pixel-space coordinates.
///
/// Only valid while the host is inside a draw callback; the mapping can change
/// between redraws (zoom, resize, new data range).
pub trait CoordinateMapper {
    /// Maps a data-space x value to a pixel x coordinate.
    fn map_x(&self, x: f64) -> f64;

    /// Maps a data-space y value to a pixel y coordinate.
    fn map_y(&self, y: f64) -> f64;

    /// Maps a data-space point to a pixel point.
    #[inline]
    fn map_point(&self, p: Point) -> Point {
        Point::new(self.map_x(p.x), self.map_y(p.y))
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Creates a surface size.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An integer pixel rectangle on a drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl PixelRect {
    /// The rectangle covering a whole surface, anchored at the origin.
    #[inline]
    #[must_use]
    pub const fn from_size(size: SurfaceSize) -> Self {
        Self {
            x: 0,
            y: 0,
            width: size.width,
            height: size.height,
        }
    }
}

/// An opaque, backend-owned copy of surface pixels.
pub trait PixelSnapshot {
    /// Width of the captured region.
    fn width(&self) -> u32;

    /// Height of the captured region.
    fn height(&self) -> u32;
}

/// A canvas-style drawing surface provided by the host.
///
/// Style accessors come in get/set pairs so that shapes can save a property,
/// change it, draw, and put the saved value back. Implementations must make a
/// value read through a getter round-trip unchanged through the matching
/// setter.
///
/// Fill and stroke are read as [`Paint`](Self::Paint), the backend's own
/// style value, and only written as a [`Color`] when a shape applies one. A
/// host style the core cannot represent (a gradient, a pattern, a color
/// syntax [`Color::parse`] does not know) is thus restored as it was.
pub trait DrawContext {
    /// The backend's pixel snapshot type.
    type Snapshot: PixelSnapshot;

    /// The backend's fill or stroke style value.
    type Paint: Clone;

    // -- Paths --

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    /// Starts a new subpath at `p` (pixel space).
    fn move_to(&mut self, p: Point);

    /// Adds a straight segment from the current point to `p` (pixel space).
    fn line_to(&mut self, p: Point);

    /// Fills the current path with the fill color.
    ///
    /// The path is left intact, as on a canvas.
    fn fill(&mut self);

    /// Strokes the current path with the stroke color and line dash.
    fn stroke(&mut self);

    // -- Immediate drawing --

    /// Fills `rect` (pixel space) with the fill color, independent of the
    /// current path.
    fn fill_rect(&mut self, rect: Rect);

    /// Draws `text` with the current font and fill color; `at` is the left end
    /// of the alphabetic baseline.
    fn fill_text(&mut self, text: &str, at: Point);

    /// Returns the advance width of `text` in the current font, in pixels.
    fn measure_text(&mut self, text: &str) -> f64;

    // -- Style state --

    /// Returns the current fill style.
    fn fill_paint(&self) -> Self::Paint;

    /// Puts back a fill style read with [`fill_paint`](Self::fill_paint).
    fn set_fill_paint(&mut self, paint: &Self::Paint);

    /// Sets the fill style to a solid color.
    fn set_fill_color(&mut self, color: Color);

    /// Returns the current stroke style.
    fn stroke_paint(&self) -> Self::Paint;

    /// Puts back a stroke style read with [`stroke_paint`](Self::stroke_paint).
    fn set_stroke_paint(&mut self, paint: &Self::Paint);

    /// Sets the stroke style to a solid color.
    fn set_stroke_color(&mut self, color: Color);

    /// Returns the current font.
    fn font(&self) -> Font;

    /// Sets the font.
    fn set_font(&mut self, font: &Font);

    /// Returns the current line dash pattern (empty means solid).
    fn line_dash(&self) -> Vec<f64>;

    /// Sets the line dash pattern (empty means solid).
    fn set_line_dash(&mut self, dash: &[f64]);

    // -- Pixels --

    /// Returns the current pixel dimensions of the surface.
    fn surface_size(&self) -> SurfaceSize;

    /// Copies the pixels inside `region`.
    ///
    /// Returns `None` if the backend cannot produce a snapshot (empty region,
    /// allocation or host failure).
    fn capture(&mut self, region: PixelRect) -> Option<Self::Snapshot>;

    /// Writes `snapshot` back with its top-left corner at `(x, y)`, replacing
    /// the destination pixels without blending.
    fn restore(&mut self, snapshot: &Self::Snapshot, x: i32, y: i32);
}
