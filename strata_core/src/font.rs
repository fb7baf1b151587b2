// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS font shorthand values.

use alloc::string::String;
use core::fmt;

/// A CSS font shorthand, e.g. `"14px MetricWeb-Regular"` or `"bold 12pt serif"`.
///
/// The core never interprets the value; it is handed to the drawing context
/// as-is. Backends without a CSS font engine can use [`size_px`](Self::size_px).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Font(String);

impl Font {
    /// The initial font of a canvas 2D context.
    pub const CANVAS_DEFAULT: &'static str = "10px sans-serif";

    /// Creates a font from a CSS shorthand string.
    #[must_use]
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    /// Returns the shorthand string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the font size in CSS pixels.
    ///
    /// Takes the first whitespace-separated token ending in `px` or `pt`
    /// (points are converted at 4/3 px per pt). A `/line-height` suffix is
    /// ignored. Returns `None` if no such token parses as a positive number.
    #[must_use]
    pub fn size_px(&self) -> Option<f64> {
        self.0.split_whitespace().find_map(|token| {
            let token = token.split('/').next().unwrap_or(token);
            let (number, scale) = if let Some(n) = token.strip_suffix("px") {
                (n, 1.0)
            } else if let Some(n) = token.strip_suffix("pt") {
                (n, 4.0 / 3.0)
            } else {
                return None;
            };
            let size: f64 = number.parse().ok()?;
            (size.is_finite() && size > 0.0).then_some(size * scale)
        })
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(Self::CANVAS_DEFAULT)
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Font({:?})", self.0)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Font {
    fn from(css: &str) -> Self {
        Self::new(css)
    }
}

impl From<String> for Font {
    fn from(css: String) -> Self {
        Self(css)
    }
}
