// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate mapping through JavaScript callbacks.

use js_sys::{Function, Reflect};
use strata_core::context::CoordinateMapper;
use wasm_bindgen::{JsCast, JsValue};

/// A [`CoordinateMapper`] that calls a pair of JavaScript functions.
///
/// Each function takes a data value and returns a pixel coordinate. A call
/// that throws or returns a non-number maps to `NaN`, which the shapes pass
/// through to the canvas unchanged.
#[derive(Clone, Debug)]
pub struct FunctionMapper {
    this: JsValue,
    to_x: Function,
    to_y: Function,
}

impl FunctionMapper {
    /// Creates a mapper from two free functions.
    #[must_use]
    pub fn new(to_x: Function, to_y: Function) -> Self {
        Self {
            this: JsValue::UNDEFINED,
            to_x,
            to_y,
        }
    }

    /// Creates a mapper from a host object's `toDomXCoord` and `toDomYCoord`
    /// methods, called with the host as `this`.
    ///
    /// Returns `None` if either property is missing or not a function.
    #[must_use]
    pub fn from_host(host: &JsValue) -> Option<Self> {
        let method = |name: &str| {
            Reflect::get(host, &JsValue::from_str(name))
                .ok()?
                .dyn_into::<Function>()
                .ok()
        };
        Some(Self {
            this: host.clone(),
            to_x: method("toDomXCoord")?,
            to_y: method("toDomYCoord")?,
        })
    }

    fn call(&self, f: &Function, v: f64) -> f64 {
        f.call1(&self.this, &JsValue::from_f64(v))
            .ok()
            .and_then(|r| r.as_f64())
            .unwrap_or(f64::NAN)
    }
}

impl CoordinateMapper for FunctionMapper {
    fn map_x(&self, x: f64) -> f64 {
        self.call(&self.to_x, x)
    }

    fn map_y(&self, y: f64) -> f64 {
        self.call(&self.to_y, y)
    }
}
