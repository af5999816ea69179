// SPDX-License-Identifier: MPL-2.0
//! Collector receiving diagnostic events from the manager.

use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    ReportMetadata, SerializableEvent, WarningEvent, WarningType,
};

/// Events buffered in the channel between two [`DiagnosticsCollector::process_pending`] calls.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Cheap, cloneable sender of diagnostic events.
///
/// Logging never blocks: when the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.try_log(kind);
    }

    pub fn log_warning(&self, warning_type: WarningType, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Warning {
            event: WarningEvent::new(warning_type, message),
        });
    }

    /// Sends an event, reporting whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` when the channel is full, or
    /// `TrySendError::Disconnected` once the collector is gone.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Stores diagnostic events in a bounded ring buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every event waiting in the channel into the buffer.
    ///
    /// Call this periodically, e.g. from the host's tick handler.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn log(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn collection_duration(&self) -> Duration {
        self.collection_started_at.elapsed()
    }

    /// Serializes the buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();
        let metadata = ReportMetadata::new(
            self.collection_duration().as_millis() as u64,
            events.len(),
        );
        DiagnosticReport::new(metadata, events)
    }
}
