// SPDX-License-Identifier: MPL-2.0
//! The snack value type.
//!
//! A [`Snack`] describes one banner: its content, identity, alignment group
//! and how long it stays on screen. It is built once through [`Snack::new`]
//! and the consuming `with_*` methods, and never changes afterwards.
//!
//! # Usage
//!
//! ```
//! use iced_snackbar::snack::{Alignment, Snack};
//!
//! let snack = Snack::new("Connection lost")
//!     .with_title("Offline")
//!     .with_reuse_identifier("network")
//!     .with_alignment(Alignment::Bottom)
//!     .with_duration(6.0);
//!
//! assert_eq!(snack.alignment(), Alignment::Bottom);
//! assert_eq!(snack, Snack::new("Back online").with_reuse_identifier("network"));
//! ```

mod identity;
mod style;

pub use identity::SnackIdentity;
pub use style::{Elevation, Insets, SnackLayout, SnackStyle, TextStyle};

use crate::config::defaults::DEFAULT_SNACK_DURATION_SECS;
use iced::widget::image::Handle;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

/// Which edge of the surface a snack stacks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    #[default]
    Top,
    Bottom,
}

impl Alignment {
    pub const ALL: [Alignment; 2] = [Alignment::Top, Alignment::Bottom];

    /// Slot of this alignment in per-alignment arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Alignment::Top => 0,
            Alignment::Bottom => 1,
        }
    }
}

static DEFAULT_ALIGNMENT: AtomicU8 = AtomicU8::new(0);

/// Alignment given to snacks built without an explicit one.
#[must_use]
pub fn default_alignment() -> Alignment {
    match DEFAULT_ALIGNMENT.load(Ordering::Relaxed) {
        1 => Alignment::Bottom,
        _ => Alignment::Top,
    }
}

/// Changes the process-wide default alignment.
///
/// Only snacks constructed afterwards are affected; a snack's alignment is
/// frozen when it is built.
pub fn set_default_alignment(alignment: Alignment) {
    DEFAULT_ALIGNMENT.store(alignment.index() as u8, Ordering::Relaxed);
}

/// A transient banner to be shown by the [`Manager`](crate::manager::Manager).
#[derive(Debug, Clone)]
pub struct Snack {
    alignment: Alignment,
    title: Option<String>,
    message: String,
    reuse_identifier: Option<String>,
    icon: Option<Handle>,
    /// Seconds on screen; zero or NaN disables auto-dismissal.
    duration: f64,
    style: SnackStyle,
    requires_manual_dismissal: bool,
}

impl Snack {
    /// Creates a snack with the current default alignment and a 4 second duration.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            alignment: default_alignment(),
            title: None,
            message: message.into(),
            reuse_identifier: None,
            icon: None,
            duration: DEFAULT_SNACK_DURATION_SECS,
            style: SnackStyle::default(),
            requires_manual_dismissal: false,
        }
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the reuse identifier. An empty identifier counts as none.
    #[must_use]
    pub fn with_reuse_identifier(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.reuse_identifier = (!id.is_empty()).then_some(id);
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: Handle) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the time on screen in seconds. `0.0` or `NaN` keeps the snack
    /// until it is removed manually.
    #[must_use]
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SnackStyle) -> Self {
        self.style = style;
        self
    }

    /// Keeps the snack on screen while a screen reader is running, so the
    /// user has time to reach it.
    #[must_use]
    pub fn with_manual_dismissal(mut self, required: bool) -> Self {
        self.requires_manual_dismissal = required;
        self
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn reuse_identifier(&self) -> Option<&str> {
        self.reuse_identifier.as_deref()
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Handle> {
        self.icon.as_ref()
    }

    /// Raw duration in seconds, as given at construction.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn style(&self) -> &SnackStyle {
        &self.style
    }

    #[must_use]
    pub fn requires_manual_dismissal(&self) -> bool {
        self.requires_manual_dismissal
    }

    /// Height of this snack when drawn `width` wide.
    #[must_use]
    pub fn preferred_height(&self, width: f32) -> f32 {
        self.style
            .content_height(self.title.as_deref(), &self.message, self.icon.is_some(), width)
    }

    /// Returns the delay before auto-dismissal, or `None` when the snack
    /// must be removed manually.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        auto_dismiss_duration(self.duration)
    }

    /// Whether this snack has `identity`, without building one.
    #[must_use]
    pub fn has_identity(&self, identity: &SnackIdentity) -> bool {
        match (identity, &self.reuse_identifier) {
            (SnackIdentity::Reuse(id), Some(own)) => id == own,
            (SnackIdentity::Content { title, message }, None) => {
                title.as_deref() == self.title.as_deref() && *message == self.message
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn identity(&self) -> SnackIdentity {
        match &self.reuse_identifier {
            Some(id) => SnackIdentity::Reuse(id.clone()),
            None => SnackIdentity::Content {
                title: self.title.clone(),
                message: self.message.clone(),
            },
        }
    }
}

/// Converts a duration in seconds to an auto-dismiss delay.
///
/// Zero, NaN, negative and infinite durations never fire.
pub(crate) fn auto_dismiss_duration(seconds: f64) -> Option<Duration> {
    if seconds.is_finite() && seconds > 0.0 {
        Duration::try_from_secs_f64(seconds).ok()
    } else {
        None
    }
}

impl PartialEq for Snack {
    fn eq(&self, other: &Self) -> bool {
        match (&self.reuse_identifier, &other.reuse_identifier) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (None, None) => self.title == other.title && self.message == other.message,
            _ => false,
        }
    }
}

impl Eq for Snack {}

impl Hash for Snack {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.reuse_identifier {
            Some(id) => id.hash(state),
            None => {
                self.message.hash(state);
                if let Some(title) = &self.title {
                    title.hash(state);
                }
            }
        }
    }
}
