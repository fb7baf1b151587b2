// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text on a bordered background box.

use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

use super::SavedStyle;
use crate::color::Color;
use crate::context::{CoordinateMapper, DrawContext};
use crate::font::Font;

/// Which corner of the badge sits on the anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BadgePosition {
    /// The anchor is the top-left corner of the border box.
    #[default]
    TopLeft,
    /// The anchor is the bottom-left corner; the badge extends upward.
    BottomLeft,
}

impl BadgePosition {
    /// Parses a position name. `"bl"` (any case) is [`BottomLeft`](Self::BottomLeft);
    /// anything else is [`TopLeft`](Self::TopLeft).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("bl") {
            Self::BottomLeft
        } else {
            Self::TopLeft
        }
    }
}

/// Where a badge is placed.
///
/// Each coordinate is either data space (mapped through the
/// [`CoordinateMapper`]) or already in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BadgeAnchor {
    /// Anchor x.
    pub x: f64,
    /// Whether `x` is in data space.
    pub map_x: bool,
    /// Anchor y.
    pub y: f64,
    /// Whether `y` is in data space.
    pub map_y: bool,
    /// Which corner the anchor names.
    pub position: BadgePosition,
}

impl BadgeAnchor {
    /// An anchor at a data-space point, top-left.
    #[must_use]
    pub const fn data(x: f64, y: f64) -> Self {
        Self {
            x,
            map_x: true,
            y,
            map_y: true,
            position: BadgePosition::TopLeft,
        }
    }

    /// An anchor at a pixel position, top-left.
    #[must_use]
    pub const fn pixel(x: f64, y: f64) -> Self {
        Self {
            x,
            map_x: false,
            y,
            map_y: false,
            position: BadgePosition::TopLeft,
        }
    }

    /// Returns this anchor with a different corner.
    #[must_use]
    pub const fn with_position(mut self, position: BadgePosition) -> Self {
        self.position = position;
        self
    }

    fn resolve<M: CoordinateMapper + ?Sized>(&self, mapper: &M) -> Point {
        let x = if self.map_x {
            mapper.map_x(self.x)
        } else {
            self.x
        };
        let y = if self.map_y {
            mapper.map_y(self.y)
        } else {
            self.y
        };
        Point::new(x, y)
    }
}

/// Badge appearance. Lengths are in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeStyle {
    /// Font for the text.
    pub font: Font,
    /// Height reserved for the text; the baseline sits this far below the
    /// top padding.
    pub text_height: f64,
    /// Text color.
    pub text_color: Color,
    /// Space between the text and the border, on every side.
    pub padding: f64,
    /// Background fill.
    pub background: Color,
    /// Border thickness.
    pub border_width: f64,
    /// Border color.
    pub border_color: Color,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            font: Font::new("12px sans-serif"),
            text_height: 12.0,
            text_color: Color::BLACK,
            padding: 2.0,
            background: Color::WHITE,
            border_width: 1.0,
            border_color: Color::BLACK,
        }
    }
}

/// Text on a background box with a border.
#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
    anchor: BadgeAnchor,
    text: String,
    style: BadgeStyle,
}

impl Badge {
    /// Creates a badge.
    #[must_use]
    pub fn new(anchor: BadgeAnchor, text: impl Into<String>, style: BadgeStyle) -> Self {
        Self {
            anchor,
            text: text.into(),
            style,
        }
    }

    /// Returns the anchor.
    #[must_use]
    pub fn anchor(&self) -> &BadgeAnchor {
        &self.anchor
    }

    /// Returns the text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &BadgeStyle {
        &self.style
    }

    /// Returns the border rectangle this badge paints, in pixels.
    ///
    /// Measures the text in the badge font; the context's style is unchanged
    /// afterwards.
    pub fn frame<M, C>(&self, mapper: &M, ctx: &mut C) -> Rect
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext + ?Sized,
    {
        let mut saved = SavedStyle::<C::Paint>::default();
        saved.set_font(ctx, Some(&self.style.font));
        let frame = self.layout(mapper, ctx);
        saved.restore(ctx);
        frame
    }

    /// Border rectangle, assuming the badge font is already set.
    fn layout<M, C>(&self, mapper: &M, ctx: &mut C) -> Rect
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext + ?Sized,
    {
        let s = &self.style;
        let text_width = ctx.measure_text(&self.text).ceil();
        let inner = Size::new(
            text_width + 2.0 * s.padding,
            s.text_height + 2.0 * s.padding,
        );
        let outer = Size::new(
            inner.width + 2.0 * s.border_width,
            inner.height + 2.0 * s.border_width,
        );
        let mut origin = self.anchor.resolve(mapper);
        if self.anchor.position == BadgePosition::BottomLeft {
            origin.y -= outer.height;
        }
        Rect::from_origin_size(origin, outer)
    }

    pub(crate) fn draw<M, C>(&self, mapper: &M, ctx: &mut C)
    where
        M: CoordinateMapper + ?Sized,
        C: DrawContext + ?Sized,
    {
        let s = &self.style;
        let mut saved = SavedStyle::<C::Paint>::default();
        saved.set_font(ctx, Some(&s.font));
        let frame = self.layout(mapper, ctx);

        saved.set_fill(ctx, Some(s.border_color));
        ctx.fill_rect(frame);

        saved.set_fill(ctx, Some(s.background));
        ctx.fill_rect(frame.inset(-s.border_width));

        saved.set_fill(ctx, Some(s.text_color));
        let inset = s.border_width + s.padding;
        ctx.fill_text(
            &self.text,
            Point::new(frame.x0 + inset, frame.y0 + inset + s.text_height),
        );

        saved.restore(ctx);
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;
    use crate::mock::{CHAR_ADVANCE, MockContext, Op, ScaleMapper};

    fn style() -> BadgeStyle {
        BadgeStyle {
            font: Font::new("10px badge"),
            text_height: 10.0,
            text_color: Color::from_rgb8(0, 0, 255),
            padding: 2.0,
            background: Color::WHITE,
            border_width: 1.0,
            border_color: Color::from_rgb8(255, 0, 0),
        }
    }

    fn paints(ctx: &MockContext) -> Vec<Op> {
        ctx.painted.clone()
    }

    #[test]
    fn parse_position() {
        assert_eq!(BadgePosition::parse("bl"), BadgePosition::BottomLeft);
        assert_eq!(BadgePosition::parse("BL"), BadgePosition::BottomLeft);
        assert_eq!(BadgePosition::parse("tl"), BadgePosition::TopLeft);
        assert_eq!(BadgePosition::parse("bottom"), BadgePosition::TopLeft);
        assert_eq!(BadgePosition::parse(""), BadgePosition::TopLeft);
    }

    #[test]
    fn top_left_layout() {
        // "ab" measures 13px: background 17×14, border box 19×16.
        assert_eq!(2.0 * CHAR_ADVANCE, 13.0);
        let mut ctx = MockContext::new(100, 100);
        let badge = Badge::new(BadgeAnchor::pixel(10.0, 20.0), "ab", style());
        badge.draw(&ScaleMapper, &mut ctx);
        assert_eq!(
            paints(&ctx),
            [
                Op::FillRect(
                    Rect::new(10.0, 20.0, 29.0, 36.0),
                    Color::from_rgb8(255, 0, 0)
                ),
                Op::FillRect(Rect::new(11.0, 21.0, 28.0, 35.0), Color::WHITE),
                Op::FillText {
                    text: "ab".to_string(),
                    at: Point::new(13.0, 33.0),
                    color: Color::from_rgb8(0, 0, 255),
                    font: Font::new("10px badge"),
                },
            ]
        );
    }

    #[test]
    fn measured_width_rounds_up() {
        // "abc" measures 19.5px, drawn as 20.
        let mut ctx = MockContext::new(100, 100);
        let badge = Badge::new(BadgeAnchor::pixel(0.0, 0.0), "abc", style());
        let frame = badge.frame(&ScaleMapper, &mut ctx);
        assert_eq!(frame.width(), 20.0 + 4.0 + 2.0);
    }

    #[test]
    fn bottom_left_shifts_up_by_border_box_height() {
        let s = style();
        let shift = 2.0 * s.border_width + s.text_height + 2.0 * s.padding;
        let mut ctx = MockContext::new(100, 100);
        let top_left = BadgeAnchor::pixel(10.0, 50.0);
        let top_badge = Badge::new(top_left, "ab", s.clone());
        let top = top_badge.frame(&ScaleMapper, &mut ctx);
        let anchor = top_left.with_position(BadgePosition::parse("bl"));
        let bottom = Badge::new(anchor, "ab", s).frame(&ScaleMapper, &mut ctx);
        assert_eq!(top.y0 - bottom.y0, shift);
        assert_eq!(bottom.y1, 50.0, "bottom edge sits on the anchor");
        assert_eq!(top.x0, bottom.x0);
    }

    #[test]
    fn data_anchor_is_mapped_per_axis() {
        let mut ctx = MockContext::new(100, 100);
        let badge = Badge::new(BadgeAnchor::data(0.5, 0.25), "a", style());
        let both = badge.frame(&ScaleMapper, &mut ctx);
        assert_eq!(both.origin(), Point::new(50.0, 75.0));

        let mixed = BadgeAnchor {
            map_y: false,
            ..BadgeAnchor::data(0.5, 7.0)
        };
        let badge = Badge::new(mixed, "a", style());
        let frame = badge.frame(&ScaleMapper, &mut ctx);
        assert_eq!(frame.origin(), Point::new(50.0, 7.0));
    }

    #[test]
    fn frame_matches_painted_border() {
        let badge = Badge::new(BadgeAnchor::pixel(3.0, 4.0), "hello", style());
        let mut ctx = MockContext::new(100, 100);
        let frame = badge.frame(&ScaleMapper, &mut ctx);
        badge.draw(&ScaleMapper, &mut ctx);
        assert_eq!(
            ctx.painted[0],
            Op::FillRect(frame, Color::from_rgb8(255, 0, 0))
        );
    }

    #[test]
    fn measures_in_badge_font_and_restores_style() {
        let mut ctx = MockContext::new(100, 100);
        ctx.font = Font::new("30px host");
        ctx.fill = Color::from_rgb8(9, 9, 9);
        let before = ctx.style();
        let badge = Badge::new(BadgeAnchor::pixel(0.0, 0.0), "x", style());
        badge.frame(&ScaleMapper, &mut ctx);
        assert_eq!(ctx.style(), before);
        badge.draw(&ScaleMapper, &mut ctx);
        assert_eq!(ctx.style(), before);
        assert!(ctx.ops.contains(&Op::Measure("x".to_string())));
    }
}
