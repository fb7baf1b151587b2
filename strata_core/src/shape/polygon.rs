// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled and stroked polygons.

use alloc::vec::Vec;

use kurbo::Point;

use super::{SavedStyle, trace_path};
use crate::color::Color;
use crate::context::{CoordinateMapper, DrawContext};

/// A filled polygon through data-space points.
///
/// The path is implicitly closed by the fill.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosedPolygon {
    points: Vec<Point>,
    color: Option<Color>,
}

impl ClosedPolygon {
    /// Creates a polygon. With `color` unset, the context's fill color is used.
    #[must_use]
    pub fn new(points: impl Into<Vec<Point>>, color: Option<Color>) -> Self {
        Self {
            points: points.into(),
            color,
        }
    }

    /// Returns the data-space vertices.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the fill color override.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub(crate) fn draw<M, C>(&self, mapper: &M, ctx: &mut C)
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext + ?Sized,
    {
        let mut saved = SavedStyle::<C::Paint>::default();
        saved.set_fill(ctx, self.color);
        trace_path(&self.points, mapper, ctx);
        ctx.fill();
        saved.restore(ctx);
    }
}

/// A stroked polyline through data-space points, optionally dashed.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenPolygon {
    points: Vec<Point>,
    color: Option<Color>,
    dash: Option<Vec<f64>>,
}

impl OpenPolygon {
    /// Creates a solid polyline. With `color` unset, the context's stroke
    /// color is used.
    #[must_use]
    pub fn new(points: impl Into<Vec<Point>>, color: Option<Color>) -> Self {
        Self {
            points: points.into(),
            color,
            dash: None,
        }
    }

    /// Sets a line dash pattern (alternating dash and gap lengths in pixels).
    ///
    /// An empty pattern forces a solid line even if the context is dashed.
    #[must_use]
    pub fn with_dash(mut self, dash: impl Into<Vec<f64>>) -> Self {
        self.dash = Some(dash.into());
        self
    }

    /// Returns the data-space vertices.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the stroke color override.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns the dash pattern override.
    #[must_use]
    pub fn dash(&self) -> Option<&[f64]> {
        self.dash.as_deref()
    }

    pub(crate) fn draw<M, C>(&self, mapper: &M, ctx: &mut C)
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext + ?Sized,
    {
        let mut saved = SavedStyle::<C::Paint>::default();
        saved.set_dash(ctx, self.dash.as_deref());
        saved.set_stroke(ctx, self.color);
        trace_path(&self.points, mapper, ctx);
        ctx.stroke();
        saved.restore(ctx);
    }
}
