// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text labels.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use super::SavedStyle;
use crate::color::Color;
use crate::context::{CoordinateMapper, DrawContext};
use crate::font::Font;

/// A text label drawn at the first of its data-space points.
///
/// The point is the left end of the text baseline. Further points are kept
/// but not drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    points: Vec<Point>,
    color: Option<Color>,
    text: String,
    font: Option<Font>,
}

impl Text {
    /// Creates a label. With `color` unset, the context's fill color is used.
    #[must_use]
    pub fn new(
        points: impl Into<Vec<Point>>,
        color: Option<Color>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            points: points.into(),
            color,
            text: text.into(),
            font: None,
        }
    }

    /// Sets the font; without one, the context's current font is used.
    #[must_use]
    pub fn with_font(mut self, font: impl Into<Font>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Returns the data-space points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the fill color override.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns the label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the font override.
    #[must_use]
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    pub(crate) fn draw<M, C>(&self, mapper: &M, ctx: &mut C)
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext + ?Sized,
    {
        let Some(&anchor) = self.points.first() else {
            return;
        };
        let mut saved = SavedStyle::<C::Paint>::default();
        saved.set_font(ctx, self.font.as_ref());
        saved.set_fill(ctx, self.color);
        ctx.fill_text(&self.text, mapper.map_point(anchor));
        saved.restore(ctx);
    }
}
