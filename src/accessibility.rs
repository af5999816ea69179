// SPDX-License-Identifier: MPL-2.0
//! Host accessibility state consulted by the queue and the deadline registry.

use crate::config::AccessibilityConfig;
use std::fmt;

/// Accessibility settings of the host platform.
pub trait Accessibility: fmt::Debug + Send {
    /// When enabled, positional animations are replaced by cross-fades.
    fn is_reduce_motion_enabled(&self) -> bool;

    /// When a screen reader is running, snacks that require manual
    /// dismissal are never auto-dismissed.
    fn is_screen_reader_running(&self) -> bool;
}

/// Fixed accessibility flags, typically read from the `[accessibility]`
/// section of the configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticAccessibility {
    pub reduce_motion: bool,
    pub screen_reader: bool,
}

impl Accessibility for StaticAccessibility {
    fn is_reduce_motion_enabled(&self) -> bool {
        self.reduce_motion
    }

    fn is_screen_reader_running(&self) -> bool {
        self.screen_reader
    }
}

impl From<&AccessibilityConfig> for StaticAccessibility {
    fn from(config: &AccessibilityConfig) -> Self {
        Self {
            reduce_motion: config.reduce_motion,
            screen_reader: config.screen_reader,
        }
    }
}
