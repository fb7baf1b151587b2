// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CPU raster backend for strata.
//!
//! [`PixmapCanvas`] implements [`DrawContext`](strata_core::context::DrawContext)
//! over a `tiny_skia` pixmap. It is useful for rendering overlays off-screen
//! (image export, server-side charts) and for checking compositor behavior at
//! the pixel level.
//!
//! ```
//! use strata_core::compositor::{Compositor, UpdateLayers};
//! use strata_core::kurbo::{Point, Rect};
//! use strata_core::map::LinearMapper;
//! use strata_core::shape::ClosedPolygon;
//! use strata_core::trace::Tracer;
//! use strata_raster::PixmapCanvas;
//!
//! let mut canvas = PixmapCanvas::new(100, 100).unwrap();
//! let mapper = LinearMapper::new(Rect::new(0.0, 0.0, 100.0, 100.0), (0.0, 1.0), (0.0, 1.0));
//! let mut compositor = Compositor::default();
//! let mut tracer = Tracer::none();
//!
//! let triangle = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(1.0, 0.0)];
//! compositor.update_layers(
//!     UpdateLayers::base(vec![ClosedPolygon::new(triangle, None).into()]),
//!     &mut tracer,
//! );
//! compositor.will_draw(&mapper, &mut canvas, &mut tracer);
//! // ... the host paints here ...
//! compositor.did_draw(&mapper, &mut canvas, &mut tracer);
//! assert!(compositor.has_snapshot());
//! ```

mod canvas;

pub use canvas::{GLYPH_ADVANCE, GLYPH_ASCENT, PixmapCanvas, PixmapSnapshot};

#[cfg(test)]
mod tests {
    use strata_core::color::Color;
    use strata_core::compositor::{Compositor, DrawTopLayer, TopLayerRepaint, UpdateLayers};
    use strata_core::context::{CoordinateMapper, DrawContext};
    use strata_core::kurbo::{Point, Rect};
    use strata_core::map::LinearMapper;
    use strata_core::shape::{
        Badge, BadgeAnchor, BadgeStyle, ClosedPolygon, OpenPolygon, Shape, Text,
    };
    use strata_core::trace::Tracer;

    use super::*;

    const RED: Color = Color::from_rgb8(255, 0, 0);
    const BLUE: Color = Color::from_rgb8(0, 0, 255);
    const HOST: Color = Color::from_rgb8(0, 128, 0);

    fn mapper() -> LinearMapper {
        LinearMapper::new(Rect::new(0.0, 0.0, 100.0, 100.0), (0.0, 1.0), (0.0, 1.0))
    }

    fn surface() -> PixmapCanvas {
        let mut c = PixmapCanvas::new(100, 100).expect("nonzero size");
        c.clear(Color::WHITE);
        c
    }

    fn triangle() -> Shape {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        ClosedPolygon::new(points, Some(RED)).into()
    }

    /// The host's own content: a horizontal band across the middle.
    fn host_paint(c: &mut PixmapCanvas) {
        let saved = c.fill_color();
        c.set_fill_color(HOST);
        c.fill_rect(Rect::new(0.0, 60.0, 100.0, 64.0));
        c.set_fill_color(saved);
    }

    fn full_redraw(comp: &mut Compositor<PixmapSnapshot>, c: &mut PixmapCanvas) {
        let mut t = Tracer::none();
        comp.will_draw(&mapper(), c, &mut t);
        host_paint(c);
        comp.did_draw(&mapper(), c, &mut t);
    }

    fn varied_top_layer() -> Vec<Shape> {
        let wedge = vec![
            Point::new(0.1, 0.9),
            Point::new(0.9, 0.9),
            Point::new(0.5, 0.1),
        ];
        vec![
            ClosedPolygon::new(wedge, Some(BLUE)).into(),
            OpenPolygon::new(vec![Point::new(0.0, 0.5), Point::new(1.0, 0.5)], Some(RED))
                .with_dash([3.0, 2.0])
                .into(),
            Text::new(vec![Point::new(0.2, 0.2)], None, "label").into(),
            Badge::new(BadgeAnchor::pixel(5.0, 5.0), "badge", BadgeStyle::default()).into(),
        ]
    }

    #[test]
    fn triangle_then_hello_on_top() {
        let mut comp = Compositor::default();
        let mut c = surface();
        comp.update_layers(UpdateLayers::base(vec![triangle()]), &mut Tracer::none());
        full_redraw(&mut comp, &mut c);

        // Triangle (0,0)-(1,1)-(1,0) maps to (0,100)-(100,0)-(100,100): the
        // lower-right half of the surface.
        assert_eq!(c.pixel(90, 80), Some(RED), "triangle interior");
        assert_eq!(c.pixel(10, 20), Some(Color::WHITE), "outside triangle");
        assert_eq!(
            c.pixel(90, 61),
            Some(HOST),
            "host content covers the triangle"
        );
        assert_eq!(c.pixel(10, 61), Some(HOST));

        let hello = Text::new(vec![Point::new(0.5, 0.5)], Some(BLUE), "hello");
        let outcome = comp.draw_top_layer(
            DrawTopLayer {
                top_layer: vec![hello.into()],
            },
            &mapper(),
            &mut c,
            &mut Tracer::none(),
        );
        assert_eq!(outcome, TopLayerRepaint::Restored);

        // "hello" sits on the baseline at (50, 50), 10px font: glyphs 6px apart.
        assert_eq!(c.pixel(52, 47), Some(BLUE), "first glyph of hello");
        assert_eq!(c.pixel(76, 47), Some(BLUE), "last glyph of hello");
        assert_eq!(c.pixel(90, 80), Some(RED), "triangle still visible");
        assert_eq!(c.pixel(10, 61), Some(HOST), "host content still visible");
    }

    #[test]
    fn restored_pixels_equal_post_host_pixels() {
        let mut comp = Compositor::default();
        let mut c = surface();
        comp.update_layers(
            UpdateLayers {
                base_layer: Some(vec![triangle()]),
                top_layer: Some(varied_top_layer()),
            },
            &mut Tracer::none(),
        );

        let mut t = Tracer::none();
        comp.will_draw(&mapper(), &mut c, &mut t);
        host_paint(&mut c);
        let post_host = c.pixmap().clone();
        comp.did_draw(&mapper(), &mut c, &mut t);
        assert_ne!(c.pixmap(), &post_host, "top layer painted");

        comp.update_layers(UpdateLayers::top(Vec::new()), &mut t);
        let outcome = comp.draw_top_layer(DrawTopLayer::default(), &mapper(), &mut c, &mut t);
        assert_eq!(outcome, TopLayerRepaint::Restored);
        assert_eq!(c.pixmap(), &post_host);
    }

    #[test]
    fn repeated_top_repaints_do_not_accumulate() {
        let mut comp = Compositor::default();
        let mut c = surface();
        full_redraw(&mut comp, &mut c);

        let request = || DrawTopLayer {
            top_layer: varied_top_layer(),
        };
        comp.draw_top_layer(request(), &mapper(), &mut c, &mut Tracer::none());
        let once = c.pixmap().clone();
        comp.draw_top_layer(
            DrawTopLayer {
                top_layer: vec![Text::new(vec![Point::new(0.9, 0.9)], None, "other").into()],
            },
            &mapper(),
            &mut c,
            &mut Tracer::none(),
        );
        comp.draw_top_layer(request(), &mapper(), &mut c, &mut Tracer::none());
        assert_eq!(c.pixmap(), &once);
    }

    #[test]
    fn painting_is_idempotent() {
        let shapes = varied_top_layer();
        let mut c = surface();
        for s in &shapes {
            s.draw(&mapper(), &mut c);
        }
        let once = c.pixmap().clone();
        for s in &shapes {
            s.draw(&mapper(), &mut c);
        }
        assert_eq!(c.pixmap(), &once);
    }

    #[test]
    fn shapes_leave_canvas_style_untouched() {
        let mut c = surface();
        c.set_fill_color(HOST);
        c.set_stroke_color(BLUE);
        c.set_line_dash(&[1.0, 1.0]);
        let before = (c.fill_color(), c.stroke_color(), c.font(), c.line_dash());
        for s in &varied_top_layer() {
            s.draw(&mapper(), &mut c);
        }
        let after = (c.fill_color(), c.stroke_color(), c.font(), c.line_dash());
        assert_eq!(before, after);
    }

    #[test]
    fn badge_paints_border_background_and_text() {
        let style = BadgeStyle {
            text_color: BLUE,
            background: Color::from_rgb8(255, 255, 0),
            border_color: RED,
            border_width: 2.0,
            padding: 3.0,
            ..BadgeStyle::default()
        };
        let badge = Badge::new(BadgeAnchor::pixel(10.0, 10.0), "ab", style);
        let mut c = surface();
        let frame = badge.frame(&mapper(), &mut c);
        // Two 12px-font glyphs measure 14.4px, rounded up to 15.
        assert_eq!(frame, Rect::new(10.0, 10.0, 35.0, 32.0));

        Shape::from(badge).draw(&mapper(), &mut c);
        assert_eq!(c.pixel(10, 10), Some(RED), "border");
        assert_eq!(
            c.pixel(13, 13),
            Some(Color::from_rgb8(255, 255, 0)),
            "background"
        );
        assert_eq!(c.pixel(16, 22), Some(BLUE), "text");
        assert_eq!(c.pixel(36, 10), Some(Color::WHITE), "outside");
    }

    #[test]
    fn mapper_is_linear_mapper() {
        let m = mapper();
        assert_eq!(m.map_point(Point::new(0.5, 0.5)), Point::new(50.0, 50.0));
    }
}
