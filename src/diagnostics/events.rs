// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use crate::snack::{Alignment, SnackIdentity};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Why a snack left the screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// `Manager::remove` or `Manager::remove_identity`.
    Manual,
    /// Its auto-dismiss deadline fired.
    Expired,
    /// The user dismissed it from the overlay.
    Dismissed,
    /// `Manager::clear`.
    Cleared,
}

/// Category of a non-fatal problem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The display surface refused a container.
    SurfaceUnavailable,
    /// The configuration file could not be used.
    ConfigFallback,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event and when it was recorded.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// What happened. Identities are recorded in their display form
/// (`reuse:<id>` or `content:<title>/<message>`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    SnackShown {
        alignment: Alignment,
        identity: String,
    },
    /// A duplicate moved an existing snack to the growing edge.
    SnackPromoted {
        alignment: Alignment,
        identity: String,
        from_index: usize,
    },
    SnackRemoved {
        alignment: Alignment,
        identity: String,
        reason: RemovalReason,
    },
    DeadlineArmed {
        alignment: Alignment,
        identity: String,
        duration_secs: f64,
    },
    ContainerAttached {
        alignment: Alignment,
    },
    ContainerDetached {
        alignment: Alignment,
    },
    Warning {
        event: WarningEvent,
    },
}

impl DiagnosticEventKind {
    #[must_use]
    pub fn shown(alignment: Alignment, identity: &SnackIdentity) -> Self {
        Self::SnackShown {
            alignment,
            identity: identity.to_string(),
        }
    }

    #[must_use]
    pub fn removed(alignment: Alignment, identity: &SnackIdentity, reason: RemovalReason) -> Self {
        Self::SnackRemoved {
            alignment,
            identity: identity.to_string(),
            reason,
        }
    }
}
