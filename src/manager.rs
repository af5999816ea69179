// SPDX-License-Identifier: MPL-2.0
//! Snack lifecycle management.
//!
//! The [`Manager`] routes snacks to one [`PresentationQueue`] per alignment,
//! keeps their auto-dismiss deadlines and turns queue events into deadline
//! and container bookkeeping. Queues are created on the first `add` for an
//! alignment and dropped once their container detaches.
//!
//! All structural changes happen synchronously in [`Manager::add`] and
//! [`Manager::remove`]; animations and deadlines advance in
//! [`Manager::tick`], which the host calls on every frame while
//! [`Manager::has_activity`] is true.

use crate::accessibility::{Accessibility, StaticAccessibility};
use crate::clock::{Clock, SystemClock};
use crate::config::{AppearanceConfig, Config};
use crate::deadline::{DeadlineKey, DeadlineRegistry};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, RemovalReason, WarningType};
use crate::queue::{NodeFrame, PresentationQueue, QueueEvent};
use crate::snack::{self, Alignment, Snack, SnackIdentity};
use crate::surface::{DisplaySurface, HeadlessSurface};
use std::time::Instant;

/// Messages produced by the snack overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The user dismissed a snack (close button or swipe).
    Dismiss {
        alignment: Alignment,
        identity: SnackIdentity,
    },
    /// Advance animations and fire expired deadlines.
    Tick,
    /// The display surface changed width; snacks are re-measured.
    SurfaceResized { width: f32 },
}

/// Owns the presentation queues and deadlines of both alignment groups.
#[derive(Debug)]
pub struct Manager {
    queues: [Option<PresentationQueue>; 2],
    deadlines: DeadlineRegistry,
    appearance: AppearanceConfig,
    clock: Box<dyn Clock>,
    surface: Box<dyn DisplaySurface>,
    accessibility: Box<dyn Accessibility>,
    diagnostics: Option<DiagnosticsHandle>,
    surface_width: Option<f32>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a manager with default appearance, the system clock, a
    /// headless surface and accessibility features disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queues: [None, None],
            deadlines: DeadlineRegistry::new(),
            appearance: AppearanceConfig::default(),
            clock: Box::new(SystemClock),
            surface: Box::new(HeadlessSurface::new()),
            accessibility: Box::new(StaticAccessibility::default()),
            diagnostics: None,
            surface_width: None,
        }
    }

    /// Creates a manager using the appearance and accessibility flags of `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            appearance: config.appearance.clone(),
            accessibility: Box::new(StaticAccessibility::from(&config.accessibility)),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_surface(mut self, surface: impl DisplaySurface + 'static) -> Self {
        self.surface = Box::new(surface);
        self
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: impl Accessibility + 'static) -> Self {
        self.accessibility = Box::new(accessibility);
        self
    }

    /// Sets the diagnostics handle used to log snack activity.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }

    /// Shows `snack` in the group of its alignment.
    ///
    /// If a snack with the same identity is already visible there, that
    /// snack is replaced by `snack` and moved to the growing edge; its
    /// deadline restarts from the new duration once the move settles.
    pub fn add(&mut self, snack: Snack) {
        let now = self.clock.now();
        let reduce_motion = self.accessibility.is_reduce_motion_enabled();
        let alignment = snack.alignment();
        let identity = snack.identity();
        let appearance = &self.appearance;
        let surface_width = self.surface_width;
        let queue = self.queues[alignment.index()].get_or_insert_with(|| {
            PresentationQueue::new(alignment, appearance.clone()).with_surface_width(surface_width)
        });

        let promoted_from = match queue.position(&identity) {
            Some(index) => {
                self.deadlines
                    .cancel(&DeadlineKey::new(alignment, identity.clone()));
                queue.promote_at(index, snack, now, reduce_motion);
                Some(index)
            }
            None => {
                queue.insert(snack, now, reduce_motion, self.surface.as_mut());
                None
            }
        };

        self.log(match promoted_from {
            Some(from_index) => DiagnosticEventKind::SnackPromoted {
                alignment,
                identity: identity.to_string(),
                from_index,
            },
            None => DiagnosticEventKind::shown(alignment, &identity),
        });
        self.flush_events(alignment);
    }

    /// Removes `snack` (matched by identity) from its alignment group.
    ///
    /// Removing a snack that is not shown does nothing. Returns whether a
    /// snack was removed.
    pub fn remove(&mut self, snack: &Snack) -> bool {
        self.remove_identity(snack.alignment(), &snack.identity())
    }

    /// Removes the snack with `identity` from the `alignment` group.
    pub fn remove_identity(&mut self, alignment: Alignment, identity: &SnackIdentity) -> bool {
        self.remove_with_reason(alignment, identity, RemovalReason::Manual)
    }

    fn remove_with_reason(
        &mut self,
        alignment: Alignment,
        identity: &SnackIdentity,
        reason: RemovalReason,
    ) -> bool {
        self.deadlines
            .cancel(&DeadlineKey::new(alignment, identity.clone()));
        let now = self.clock.now();
        let reduce_motion = self.accessibility.is_reduce_motion_enabled();
        let removed = self.queues[alignment.index()]
            .as_mut()
            .and_then(|queue| queue.remove(identity, now, reduce_motion))
            .is_some();
        if removed {
            self.log(DiagnosticEventKind::removed(alignment, identity, reason));
        }
        removed
    }

    /// Applies `appearance` to both groups and to groups created later.
    pub fn set_appearance(&mut self, appearance: AppearanceConfig) {
        for queue in self.queues.iter_mut().flatten() {
            queue.set_appearance(appearance.clone());
        }
        self.appearance = appearance;
    }

    #[must_use]
    pub fn appearance(&self) -> &AppearanceConfig {
        &self.appearance
    }

    /// Reports the width of the display surface.
    ///
    /// Snack heights depend on how their labels wrap, so every visible snack
    /// is re-measured and its followers move accordingly. Until the first
    /// report snacks are measured at the maximum container width.
    pub fn set_surface_width(&mut self, width: f32) {
        if !width.is_finite() {
            return;
        }
        self.surface_width = Some(width);
        let now = self.clock.now();
        let reduce_motion = self.accessibility.is_reduce_motion_enabled();
        for queue in self.queues.iter_mut().flatten() {
            queue.set_surface_width(width, now, reduce_motion);
        }
    }

    /// Changes the alignment given to snacks built afterwards.
    pub fn set_default_alignment(alignment: Alignment) {
        snack::set_default_alignment(alignment);
    }

    /// Advances animations, arms deadlines of settled snacks and removes
    /// snacks whose deadline has passed.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        for alignment in Alignment::ALL {
            if let Some(queue) = self.queues[alignment.index()].as_mut() {
                queue.tick(now, self.surface.as_mut());
            }
            self.flush_events(alignment);
        }
        for key in self.deadlines.expired(now) {
            self.remove_with_reason(key.alignment, &key.identity, RemovalReason::Expired);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss {
                alignment,
                identity,
            } => {
                self.remove_with_reason(*alignment, identity, RemovalReason::Dismissed);
            }
            Message::Tick => self.tick(),
            Message::SurfaceResized { width } => self.set_surface_width(*width),
        }
    }

    fn flush_events(&mut self, alignment: Alignment) {
        let Some(queue) = self.queues[alignment.index()].as_mut() else {
            return;
        };
        let events = queue.drain_events();
        let now = self.clock.now();
        let screen_reader = self.accessibility.is_screen_reader_running();

        let mut detached = false;
        for event in events {
            match event {
                QueueEvent::Attached => {
                    self.log(DiagnosticEventKind::ContainerAttached { alignment });
                }
                QueueEvent::SurfaceUnavailable => {
                    if let Some(handle) = &self.diagnostics {
                        handle.log_warning(
                            WarningType::SurfaceUnavailable,
                            format!("no surface to attach the {alignment:?} container to"),
                        );
                    }
                }
                QueueEvent::Settled { snack, .. } => {
                    let identity = snack.identity();
                    let requires_interaction =
                        screen_reader && snack.requires_manual_dismissal();
                    let armed = self.deadlines.start(
                        DeadlineKey::new(alignment, identity.clone()),
                        snack.duration(),
                        requires_interaction,
                        now,
                    );
                    if armed {
                        self.log(DiagnosticEventKind::DeadlineArmed {
                            alignment,
                            identity: identity.to_string(),
                            duration_secs: snack.duration(),
                        });
                    }
                }
                QueueEvent::Discarded { .. } => {}
                QueueEvent::Detached => {
                    detached = true;
                    self.log(DiagnosticEventKind::ContainerDetached { alignment });
                }
            }
        }

        let slot = &mut self.queues[alignment.index()];
        if detached && slot.as_ref().is_some_and(PresentationQueue::is_idle) {
            *slot = None;
        }
    }

    /// Visible snacks of `alignment`, oldest first.
    #[must_use]
    pub fn snacks(&self, alignment: Alignment) -> Vec<&Snack> {
        self.queue(alignment)
            .map(PresentationQueue::snacks)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn queue(&self, alignment: Alignment) -> Option<&PresentationQueue> {
        self.queues[alignment.index()].as_ref()
    }

    /// Whether the container of `alignment` is attached to the surface.
    #[must_use]
    pub fn is_container_present(&self, alignment: Alignment) -> bool {
        self.queue(alignment)
            .is_some_and(PresentationQueue::is_attached)
    }

    /// Whether `snack` (matched by identity) has an auto-dismiss deadline pending.
    #[must_use]
    pub fn has_pending_deadline(&self, snack: &Snack) -> bool {
        self.deadlines
            .contains(&DeadlineKey::new(snack.alignment(), snack.identity()))
    }

    #[must_use]
    pub fn deadlines(&self) -> &DeadlineRegistry {
        &self.deadlines
    }

    /// Where each node of `alignment` is drawn right now.
    #[must_use]
    pub fn frames(&self, alignment: Alignment) -> Vec<NodeFrame<'_>> {
        let now = self.clock.now();
        self.queue(alignment)
            .map(|queue| queue.frames(now))
            .unwrap_or_default()
    }

    /// Whether [`Manager::tick`] still has work to do.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        !self.deadlines.is_empty() || self.queues.iter().flatten().any(PresentationQueue::needs_tick)
    }

    /// When the next tick is due: now while something animates, else the
    /// earliest deadline.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Instant> {
        if self.queues.iter().flatten().any(PresentationQueue::needs_tick) {
            return Some(self.clock.now());
        }
        self.deadlines.next_deadline()
    }

    #[must_use]
    pub fn is_reduce_motion_enabled(&self) -> bool {
        self.accessibility.is_reduce_motion_enabled()
    }

    /// Drops every snack and deadline at once, without animating.
    pub fn clear(&mut self) {
        for alignment in Alignment::ALL {
            self.clear_alignment(alignment);
        }
    }

    /// Drops every snack and deadline of one alignment group, without
    /// animating, and detaches its container.
    pub fn clear_alignment(&mut self, alignment: Alignment) {
        self.deadlines.cancel_alignment(alignment);
        let Some(queue) = self.queues[alignment.index()].take() else {
            return;
        };
        for snack in queue.snacks() {
            self.log(DiagnosticEventKind::removed(
                alignment,
                &snack.identity(),
                RemovalReason::Cleared,
            ));
        }
        if queue.is_attached() {
            self.surface.detach(alignment);
            self.log(DiagnosticEventKind::ContainerDetached { alignment });
        }
    }
}
