// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two shape layers.

use alloc::vec::Vec;

use crate::shape::Shape;

/// Which of the two layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Painted before the host draws its content.
    Base,
    /// Painted after the host draws its content.
    Top,
}

impl LayerKind {
    /// Both layers, in paint order.
    pub const ALL: [Self; 2] = [Self::Base, Self::Top];

    /// Lowercase name, for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Top => "top",
        }
    }
}

/// Which layers were replaced since the last [`LayerStore::take_changes`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerChanges {
    /// The base layer was replaced.
    pub base: bool,
    /// The top layer was replaced.
    pub top: bool,
}

impl LayerChanges {
    /// Returns whether either layer was replaced.
    #[must_use]
    pub const fn any(self) -> bool {
        self.base || self.top
    }

    /// Returns the flag for `kind`.
    #[must_use]
    pub const fn get(self, kind: LayerKind) -> bool {
        match kind {
            LayerKind::Base => self.base,
            LayerKind::Top => self.top,
        }
    }
}

/// Holds the base and top shape sequences.
///
/// Sequence order is paint order. Layers are only ever replaced wholesale.
#[derive(Clone, Debug, Default)]
pub struct LayerStore {
    base: Vec<Shape>,
    top: Vec<Shape>,
    changes: LayerChanges,
}

impl LayerStore {
    /// Creates a store with both layers empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the base layer. An empty sequence clears it.
    pub fn replace_base(&mut self, shapes: Vec<Shape>) {
        self.replace(LayerKind::Base, shapes);
    }

    /// Replaces the top layer. An empty sequence clears it.
    pub fn replace_top(&mut self, shapes: Vec<Shape>) {
        self.replace(LayerKind::Top, shapes);
    }

    /// Replaces the layer `kind`, leaving the other untouched.
    pub fn replace(&mut self, kind: LayerKind, shapes: Vec<Shape>) {
        match kind {
            LayerKind::Base => {
                self.base = shapes;
                self.changes.base = true;
            }
            LayerKind::Top => {
                self.top = shapes;
                self.changes.top = true;
            }
        }
    }

    /// Returns the base layer.
    #[must_use]
    pub fn base(&self) -> &[Shape] {
        &self.base
    }

    /// Returns the top layer.
    #[must_use]
    pub fn top(&self) -> &[Shape] {
        &self.top
    }

    /// Returns the layer `kind`.
    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &[Shape] {
        match kind {
            LayerKind::Base => &self.base,
            LayerKind::Top => &self.top,
        }
    }

    /// Returns pending change marks without clearing them.
    #[must_use]
    pub fn changes(&self) -> LayerChanges {
        self.changes
    }

    /// Returns and clears the change marks.
    pub fn take_changes(&mut self) -> LayerChanges {
        core::mem::take(&mut self.changes)
    }

    /// Clears the change mark of one layer.
    pub(crate) fn mark_clean(&mut self, kind: LayerKind) {
        match kind {
            LayerKind::Base => self.changes.base = false,
            LayerKind::Top => self.changes.top = false,
        }
    }
}
