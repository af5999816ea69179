// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the snackbar manager.
//!
//! The manager reports what it does (snacks shown, promoted and removed,
//! deadlines armed, containers attached and detached, warnings) through a
//! [`DiagnosticsHandle`]. Events travel over a bounded channel to a
//! [`DiagnosticsCollector`], which keeps the most recent ones in a
//! [`CircularBuffer`] and can export them as JSON.
//!
//! # Example
//!
//! ```
//! use iced_snackbar::diagnostics::{BufferCapacity, DiagnosticsCollector};
//! use iced_snackbar::manager::Manager;
//! use iced_snackbar::snack::Snack;
//!
//! let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
//! let mut manager = Manager::new();
//! manager.set_diagnostics(collector.handle());
//!
//! manager.add(Snack::new("Saved"));
//! collector.process_pending();
//! assert!(!collector.is_empty());
//! ```

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, RemovalReason, WarningEvent, WarningType,
};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
