// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight-alpha RGBA colors with CSS parsing.
//!
//! Chart hosts describe paint in CSS color syntax (`"#AAAAAA"`,
//! `"rgba(0, 0, 0, 0.5)"`, `"red"`). [`Color::parse`] accepts the forms a
//! canvas reports back from its `fillStyle`/`strokeStyle` getters, so a style
//! read from a context can be written back unchanged.

use core::fmt;

/// An 8-bit-per-channel color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black, the initial fill and stroke color of a canvas.
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);

    /// Creates a color from four channels.
    #[inline]
    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Returns `true` if the alpha channel is 255.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Parses a CSS color string.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)` with alpha in `0..=1`, `transparent`, and the CSS
    /// basic named colors plus `orange`. Matching is case-insensitive and
    /// ignores surrounding whitespace. Returns `None` for anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(args) = strip_function(s, "rgba").or_else(|| strip_function(s, "rgb")) {
            return parse_rgb_args(args);
        }
        named(s)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color(#{:02x}{:02x}{:02x}{:02x})",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Formats as CSS: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = f64::from(self.a) / 255.0;
            write!(f, "rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::from_rgba8(
            nibble(0)?,
            nibble(1)?,
            nibble(2)?,
            nibble(3)?,
        )),
        6 => Some(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Returns the argument list of `name(...)`, matching `name` case-insensitively.
fn strip_function<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let head = s.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    s[name.len()..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let mut parts = args.split(',').map(str::trim);
    let r = parse_channel(parts.next()?)?;
    let g = parse_channel(parts.next()?)?;
    let b = parse_channel(parts.next()?)?;
    let a = match parts.next() {
        Some(alpha) => parse_alpha(alpha)?,
        None => 255,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(Color::from_rgba8(r, g, b, a))
}

fn parse_channel(s: &str) -> Option<u8> {
    let v: f64 = s.parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is clamped to 0..=255 before the cast"
    )]
    let channel = (v.clamp(0.0, 255.0) + 0.5) as u8;
    Some(channel)
}

fn parse_alpha(s: &str) -> Option<u8> {
    let v: f64 = s.parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "alpha is clamped to 0..=1 before scaling to 0..=255"
    )]
    let alpha = (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
    Some(alpha)
}

fn named(s: &str) -> Option<Color> {
    const NAMED: [(&str, Color); 18] = [
        ("transparent", Color::TRANSPARENT),
        ("black", Color::BLACK),
        ("silver", Color::from_rgb8(192, 192, 192)),
        ("gray", Color::from_rgb8(128, 128, 128)),
        ("grey", Color::from_rgb8(128, 128, 128)),
        ("white", Color::WHITE),
        ("maroon", Color::from_rgb8(128, 0, 0)),
        ("red", Color::from_rgb8(255, 0, 0)),
        ("purple", Color::from_rgb8(128, 0, 128)),
        ("fuchsia", Color::from_rgb8(255, 0, 255)),
        ("green", Color::from_rgb8(0, 128, 0)),
        ("lime", Color::from_rgb8(0, 255, 0)),
        ("olive", Color::from_rgb8(128, 128, 0)),
        ("yellow", Color::from_rgb8(255, 255, 0)),
        ("navy", Color::from_rgb8(0, 0, 128)),
        ("blue", Color::from_rgb8(0, 0, 255)),
        ("teal", Color::from_rgb8(0, 128, 128)),
        ("aqua", Color::from_rgb8(0, 255, 255)),
    ];
    if s.eq_ignore_ascii_case("orange") {
        return Some(Color::from_rgb8(255, 165, 0));
    }
    NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|&(_, color)| color)
}
