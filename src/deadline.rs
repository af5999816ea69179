// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss deadlines.
//!
//! The registry holds at most one pending deadline per visible snack. It
//! does not run timers itself: the manager polls [`DeadlineRegistry::expired`]
//! on every tick and removes the snacks it returns.

use crate::snack::{auto_dismiss_duration, Alignment, SnackIdentity};
use std::collections::HashMap;
use std::time::Instant;

/// Identifies one snack across both alignment groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeadlineKey {
    pub alignment: Alignment,
    pub identity: SnackIdentity,
}

impl DeadlineKey {
    #[must_use]
    pub fn new(alignment: Alignment, identity: SnackIdentity) -> Self {
        Self {
            alignment,
            identity,
        }
    }
}

/// Pending auto-dismiss deadlines keyed by snack.
#[derive(Debug, Default)]
pub struct DeadlineRegistry {
    pending: HashMap<DeadlineKey, Instant>,
}

impl DeadlineRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a deadline `duration_secs` after `now`.
    ///
    /// Nothing is armed for a zero, NaN, negative or infinite duration, for a
    /// duration too long to be represented as an [`Instant`], or when
    /// `requires_interaction` is set (manual dismissal requested while a
    /// screen reader is running). An existing deadline for the same key is
    /// replaced.
    ///
    /// Returns whether a deadline is now pending.
    pub fn start(
        &mut self,
        key: DeadlineKey,
        duration_secs: f64,
        requires_interaction: bool,
        now: Instant,
    ) -> bool {
        if requires_interaction {
            return false;
        }
        let Some(fires_at) =
            auto_dismiss_duration(duration_secs).and_then(|delay| now.checked_add(delay))
        else {
            return false;
        };
        self.pending.insert(key, fires_at);
        true
    }

    /// Cancels the deadline for `key`. Returns `true` if one was pending.
    pub fn cancel(&mut self, key: &DeadlineKey) -> bool {
        self.pending.remove(key).is_some()
    }

    /// Removes and returns every deadline that fired at or before `now`,
    /// earliest first.
    pub fn expired(&mut self, now: Instant) -> Vec<DeadlineKey> {
        let mut fired: Vec<(DeadlineKey, Instant)> = self
            .pending
            .iter()
            .filter(|(_, fires_at)| **fires_at <= now)
            .map(|(key, fires_at)| (key.clone(), *fires_at))
            .collect();
        fired.sort_by_key(|(_, fires_at)| *fires_at);

        for (key, _) in &fired {
            self.pending.remove(key);
        }
        fired.into_iter().map(|(key, _)| key).collect()
    }

    #[must_use]
    pub fn contains(&self, key: &DeadlineKey) -> bool {
        self.pending.contains_key(key)
    }

    /// When `key` fires, if pending.
    #[must_use]
    pub fn fires_at(&self, key: &DeadlineKey) -> Option<Instant> {
        self.pending.get(key).copied()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cancels every pending deadline of one alignment group.
    pub fn cancel_alignment(&mut self, alignment: Alignment) {
        self.pending.retain(|key, _| key.alignment != alignment);
    }
}
