// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for strata.
//!
//! This crate connects the compositor to a browser charting host:
//!
//! - [`CanvasContext`]: a [`DrawContext`] over `CanvasRenderingContext2d`,
//!   snapshotting with `getImageData` / `putImageData`
//! - [`FunctionMapper`]: a [`CoordinateMapper`] that calls the host's
//!   data-to-pixel functions
//!
//! The host forwards its `willDrawChart` and `didDrawChart` callbacks to
//! [`Compositor::handle`](strata_core::compositor::Compositor::handle) as
//! [`LifecycleEvent`](strata_core::compositor::LifecycleEvent)s.

#![no_std]

extern crate alloc;

mod canvas;
mod mapper;

pub use canvas::{CanvasContext, ImageDataSnapshot};
pub use mapper::FunctionMapper;
pub use strata_core::context::{CoordinateMapper, DrawContext};
