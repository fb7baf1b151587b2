// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear data-to-pixel mapping.

use kurbo::Rect;

use crate::context::CoordinateMapper;

/// Maps linear x and y data ranges onto a pixel plot area.
///
/// This is the mapping a chart host performs for linear axes: `x_range.0`
/// lands on the left edge of `plot_area`, `x_range.1` on the right edge,
/// `y_range.0` on the bottom edge, and `y_range.1` on the top edge (pixel y
/// grows downward). Values outside the ranges extrapolate linearly.
///
/// A degenerate range (both ends equal) maps every value to the start edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMapper {
    plot_area: Rect,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl LinearMapper {
    /// Creates a mapper from `x_range` and `y_range` onto `plot_area`.
    #[must_use]
    pub const fn new(plot_area: Rect, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            plot_area,
            x_range,
            y_range,
        }
    }

    /// Returns the pixel plot area.
    #[must_use]
    pub const fn plot_area(&self) -> Rect {
        self.plot_area
    }

    /// Returns the data x range.
    #[must_use]
    pub const fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    /// Returns the data y range.
    #[must_use]
    pub const fn y_range(&self) -> (f64, f64) {
        self.y_range
    }
}

/// Fraction of the way `v` lies from `lo` to `hi`, or 0 for an empty range.
fn fraction(v: f64, (lo, hi): (f64, f64)) -> f64 {
    let span = hi - lo;
    if span == 0.0 { 0.0 } else { (v - lo) / span }
}

impl CoordinateMapper for LinearMapper {
    fn map_x(&self, x: f64) -> f64 {
        self.plot_area.x0 + fraction(x, self.x_range) * self.plot_area.width()
    }

    fn map_y(&self, y: f64) -> f64 {
        self.plot_area.y1 - fraction(y, self.y_range) * self.plot_area.height()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    fn mapper() -> LinearMapper {
        LinearMapper::new(Rect::new(10.0, 20.0, 110.0, 220.0), (0.0, 1.0), (0.0, 1.0))
    }

    #[test]
    fn corners_map_to_plot_area_edges() {
        let m = mapper();
        assert_eq!(m.map_point(Point::new(0.0, 0.0)), Point::new(10.0, 220.0));
        assert_eq!(m.map_point(Point::new(1.0, 1.0)), Point::new(110.0, 20.0));
        assert_eq!(m.map_point(Point::new(0.5, 0.5)), Point::new(60.0, 120.0));
    }

    #[test]
    fn values_outside_range_extrapolate() {
        let m = mapper();
        assert_eq!(m.map_x(2.0), 210.0);
        assert_eq!(m.map_y(-1.0), 420.0);
    }

    #[test]
    fn degenerate_range_maps_to_start_edge() {
        let m = LinearMapper::new(Rect::new(0.0, 0.0, 50.0, 50.0), (3.0, 3.0), (7.0, 7.0));
        assert_eq!(m.map_x(100.0), 0.0);
        assert_eq!(m.map_y(-100.0), 50.0);
    }
}
