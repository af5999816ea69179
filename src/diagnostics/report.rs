// SPDX-License-Identifier: MPL-2.0
//! JSON report built from the collected events.

use super::DiagnosticEventKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// Version of `iced_snackbar` that produced the report.
    pub crate_version: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(collection_duration_ms: u64, event_count: usize) -> Self {
        Self {
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// An event with its timestamp made relative to the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(timestamp: Instant, collection_start: Instant, kind: DiagnosticEventKind) -> Self {
        let timestamp_ms = timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

/// Event counts per type, e.g. `"snack_shown": 12`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub event_counts: BTreeMap<String, usize>,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut event_counts = BTreeMap::new();
        for event in events {
            let type_name = match &event.kind {
                DiagnosticEventKind::SnackShown { .. } => "snack_shown",
                DiagnosticEventKind::SnackPromoted { .. } => "snack_promoted",
                DiagnosticEventKind::SnackRemoved { .. } => "snack_removed",
                DiagnosticEventKind::DeadlineArmed { .. } => "deadline_armed",
                DiagnosticEventKind::ContainerAttached { .. } => "container_attached",
                DiagnosticEventKind::ContainerDetached { .. } => "container_detached",
                DiagnosticEventKind::Warning { .. } => "warning",
            };
            *event_counts.entry(type_name.to_string()).or_insert(0) += 1;
        }
        Self { event_counts }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
    pub summary: ReportSummary,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            events,
            summary,
        }
    }
}
