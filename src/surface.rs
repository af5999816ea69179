// SPDX-License-Identifier: MPL-2.0
//! The display surface snack containers are attached to.
//!
//! Each alignment group owns one container. The queue attaches it before
//! its first node animates in and detaches it once the last node is gone.

use crate::snack::Alignment;
use std::fmt;

/// Host-side surface hosting the per-alignment containers.
pub trait DisplaySurface: fmt::Debug + Send {
    /// Attaches the container of `alignment`.
    ///
    /// Returns `false` when the host has no surface to attach to; the
    /// container then stays detached and its snacks are not visible.
    fn attach(&mut self, alignment: Alignment) -> bool;

    /// Detaches the container of `alignment`. Detaching twice is harmless.
    fn detach(&mut self, alignment: Alignment);

    fn is_attached(&self, alignment: Alignment) -> bool;
}

/// In-memory surface that records which containers are attached.
///
/// Used as the default surface for the iced overlay (which always has a
/// window to draw into) and by tests, which can toggle availability.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    available: bool,
    attached: [bool; 2],
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: true,
            attached: [false; 2],
        }
    }

    /// A surface that refuses every attachment.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            attached: [false; 2],
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for HeadlessSurface {
    fn attach(&mut self, alignment: Alignment) -> bool {
        if self.available {
            self.attached[alignment.index()] = true;
        }
        self.available
    }

    fn detach(&mut self, alignment: Alignment) {
        self.attached[alignment.index()] = false;
    }

    fn is_attached(&self, alignment: Alignment) -> bool {
        self.attached[alignment.index()]
    }
}
