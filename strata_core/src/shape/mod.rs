// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay shapes.
//!
//! A [`Shape`] is one of four fixed variants, each a small rendering recipe
//! over a [`DrawContext`]:
//!
//! | Variant | Geometry | Paint | Style it may change |
//! |---|---|---|---|
//! | [`ClosedPolygon`] | mapped path | fill | fill color |
//! | [`OpenPolygon`] | mapped path | stroke | stroke color, line dash |
//! | [`Text`] | first mapped point | text | font, fill color |
//! | [`Badge`] | anchored box | two rects + text | font, fill color |
//!
//! # Style hygiene
//!
//! [`Shape::draw`] leaves the context's style exactly as it found it. Every
//! property a shape changes is read first and written back after painting.
//! Properties the shape does not carry (an unset color, font, or dash) are
//! neither read nor written, so the host's current value applies.
//!
//! Shapes are immutable once built; to change what is on screen, build new
//! shapes and replace the layer.

mod badge;
mod polygon;
mod text;

use alloc::vec::Vec;

use kurbo::Point;

use crate::color::Color;
use crate::context::{CoordinateMapper, DrawContext};
use crate::font::Font;

pub use badge::{Badge, BadgeAnchor, BadgePosition, BadgeStyle};
pub use polygon::{ClosedPolygon, OpenPolygon};
pub use text::Text;

/// Discriminant of a [`Shape`], for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`ClosedPolygon`].
    ClosedPolygon,
    /// [`OpenPolygon`].
    OpenPolygon,
    /// [`Text`].
    Text,
    /// [`Badge`].
    Badge,
}

/// A drawable overlay shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A filled polygon.
    ClosedPolygon(ClosedPolygon),
    /// A stroked polyline, optionally dashed.
    OpenPolygon(OpenPolygon),
    /// A single text label.
    Text(Text),
    /// Text on a bordered background box.
    Badge(Badge),
}

impl Shape {
    /// Paints this shape into `ctx`, mapping data coordinates through `mapper`.
    ///
    /// Restores every style property it changes before returning.
    pub fn draw<M, C>(&self, mapper: &M, ctx: &mut C)
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext + ?Sized,
    {
        match self {
            Self::ClosedPolygon(s) => s.draw(mapper, ctx),
            Self::OpenPolygon(s) => s.draw(mapper, ctx),
            Self::Text(s) => s.draw(mapper, ctx),
            Self::Badge(s) => s.draw(mapper, ctx),
        }
    }

    /// Returns which variant this is.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::ClosedPolygon(_) => ShapeKind::ClosedPolygon,
            Self::OpenPolygon(_) => ShapeKind::OpenPolygon,
            Self::Text(_) => ShapeKind::Text,
            Self::Badge(_) => ShapeKind::Badge,
        }
    }

    /// Returns the data-space points of the shape.
    ///
    /// Badges are positioned by their [`BadgeAnchor`] and have no points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        match self {
            Self::ClosedPolygon(s) => s.points(),
            Self::OpenPolygon(s) => s.points(),
            Self::Text(s) => s.points(),
            Self::Badge(_) => &[],
        }
    }

    /// Returns the shape's primary color, if it has one.
    ///
    /// For badges this is the text color.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::ClosedPolygon(s) => s.color(),
            Self::OpenPolygon(s) => s.color(),
            Self::Text(s) => s.color(),
            Self::Badge(s) => Some(s.style().text_color),
        }
    }
}

impl From<ClosedPolygon> for Shape {
    fn from(s: ClosedPolygon) -> Self {
        Self::ClosedPolygon(s)
    }
}

impl From<OpenPolygon> for Shape {
    fn from(s: OpenPolygon) -> Self {
        Self::OpenPolygon(s)
    }
}

impl From<Text> for Shape {
    fn from(s: Text) -> Self {
        Self::Text(s)
    }
}

impl From<Badge> for Shape {
    fn from(s: Badge) -> Self {
        Self::Badge(s)
    }
}

/// Style values saved before a shape overrides them.
///
/// Fill and stroke are saved as the backend's opaque [`DrawContext::Paint`],
/// so a host gradient or pattern comes back unchanged. Only the first override
/// of each property saves; later overrides within the same draw (a badge sets
/// the fill color three times) keep the original.
#[derive(Debug)]
struct SavedStyle<P> {
    fill: Option<P>,
    stroke: Option<P>,
    font: Option<Font>,
    dash: Option<Vec<f64>>,
}

impl<P> Default for SavedStyle<P> {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            font: None,
            dash: None,
        }
    }
}

impl<P> SavedStyle<P> {
    fn set_fill<C>(&mut self, ctx: &mut C, color: Option<Color>)
    where
        C: DrawContext<Paint = P> + ?Sized,
    {
        if let Some(color) = color {
            if self.fill.is_none() {
                self.fill = Some(ctx.fill_paint());
            }
            ctx.set_fill_color(color);
        }
    }

    fn set_stroke<C>(&mut self, ctx: &mut C, color: Option<Color>)
    where
        C: DrawContext<Paint = P> + ?Sized,
    {
        if let Some(color) = color {
            if self.stroke.is_none() {
                self.stroke = Some(ctx.stroke_paint());
            }
            ctx.set_stroke_color(color);
        }
    }

    fn set_font<C: DrawContext + ?Sized>(&mut self, ctx: &mut C, font: Option<&Font>) {
        if let Some(font) = font {
            if self.font.is_none() {
                self.font = Some(ctx.font());
            }
            ctx.set_font(font);
        }
    }

    fn set_dash<C: DrawContext + ?Sized>(&mut self, ctx: &mut C, dash: Option<&[f64]>) {
        if let Some(dash) = dash {
            if self.dash.is_none() {
                self.dash = Some(ctx.line_dash());
            }
            ctx.set_line_dash(dash);
        }
    }

    fn restore<C>(self, ctx: &mut C)
    where
        C: DrawContext<Paint = P> + ?Sized,
    {
        if let Some(dash) = self.dash {
            ctx.set_line_dash(&dash);
        }
        if let Some(paint) = self.stroke {
            ctx.set_stroke_paint(&paint);
        }
        if let Some(font) = self.font {
            ctx.set_font(&font);
        }
        if let Some(paint) = self.fill {
            ctx.set_fill_paint(&paint);
        }
    }
}

/// Builds the path `p0 → p1 → … → pn` in pixel space.
fn trace_path<M, C>(points: &[Point], mapper: &M, ctx: &mut C)
where
    M: CoordinateMapper + ?Sized,
    C: DrawContext + ?Sized,
{
    ctx.begin_path();
    let mut mapped = points.iter().map(|&p| mapper.map_point(p));
    if let Some(first) = mapped.next() {
        ctx.move_to(first);
    }
    for p in mapped {
        ctx.line_to(p);
    }
}
