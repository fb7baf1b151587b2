// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered shape overlays for charting hosts.
//!
//! `strata_core` lets a caller place vector shapes (filled polygons, stroked
//! polylines, text labels, bordered badges) on a host's canvas in two layers:
//! one painted before the host draws its own content and one painted after.
//! The top layer can be repainted on its own, without a host redraw, by
//! restoring a pixel snapshot of the host's output. The crate is `no_std`
//! compatible (with `alloc`) and talks to the host only through two
//! capability traits.
//!
//! # Architecture
//!
//! ```text
//!   caller ──► UpdateLayers / DrawTopLayer
//!                   │
//!                   ▼
//!   host ──► LifecycleEvent ──► Compositor ──► LayerStore
//!                                   │
//!                                   ▼
//!                      Shape::draw(CoordinateMapper, DrawContext)
//!                                   │
//!                                   ▼
//!                       backend (raster, web canvas, …)
//! ```
//!
//! **[`context`]**: The [`CoordinateMapper`](context::CoordinateMapper) and
//! [`DrawContext`](context::DrawContext) traits a backend implements, plus
//! pixel geometry types.
//!
//! **[`shape`]**: The closed [`Shape`](shape::Shape) enum and its variants.
//! Every shape restores the drawing style it changes.
//!
//! **[`layer`]**: The base and top shape sequences with change tracking.
//!
//! **[`compositor`]**: The lifecycle handler that paints layers around the
//! host and manages the post-host snapshot.
//!
//! **[`map`]**: A linear data-to-pixel [`CoordinateMapper`](context::CoordinateMapper).
//!
//! **[`color`]**, **[`font`]**: Style values, parsed from and formatted to CSS.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! draw-cycle instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-shape
//!   paint events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod color;
pub mod compositor;
pub mod context;
pub mod font;
pub mod layer;
pub mod map;
pub mod shape;
pub mod trace;

#[cfg(test)]
mod mock;

pub use kurbo;
