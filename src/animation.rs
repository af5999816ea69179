// SPDX-License-Identifier: MPL-2.0
//! Timing curves and value transitions for snack layout changes.
//!
//! This is not a general animation framework: it only models what the
//! presentation queue needs, i.e. a scalar (offset or opacity) moving from
//! one value to another over a fixed duration, sampled on demand with the
//! current [`Instant`].

use crate::config::defaults::{
    DEFAULT_INSERT_DURATION_SECS, DEFAULT_REARRANGE_DURATION_SECS, DEFAULT_REMOVE_DURATION_SECS,
    DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_VELOCITY,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Envelope decay reached by a spring at the end of its duration (`e^-6.9 ≈ 0.001`).
const SPRING_SETTLE_EXPONENT: f32 = 6.9;

/// Timing curve applied to the normalized progress of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// Damped spring. `damping` is the damping ratio (1.0 = critically damped),
    /// `velocity` the initial velocity relative to the total distance.
    Spring { damping: f32, velocity: f32 },
}

impl Curve {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    ///
    /// The result is exactly `0.0` at `t = 0` and exactly `1.0` at `t = 1`;
    /// springs may overshoot in between.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Curve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Curve::Spring { damping, velocity } => spring(t, damping, velocity),
        }
    }
}

fn spring(t: f32, damping: f32, velocity: f32) -> f32 {
    let damping = damping.max(0.05);
    // Natural frequency chosen so the envelope has decayed by the end of the duration.
    let omega = SPRING_SETTLE_EXPONENT / damping.min(1.0);
    if damping < 1.0 {
        let omega_d = omega * (1.0 - damping * damping).sqrt();
        let envelope = (-damping * omega * t).exp();
        let a = (damping * omega - velocity) / omega_d;
        1.0 - envelope * ((omega_d * t).cos() + a * (omega_d * t).sin())
    } else {
        let envelope = (-omega * t).exp();
        1.0 - envelope * (1.0 + (omega - velocity) * t)
    }
}

/// Duration and curve of one kind of layout change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// Duration in seconds. Non-finite or negative values behave as zero.
    pub duration: f64,
    #[serde(default)]
    pub curve: Curve,
}

impl AnimationSpec {
    /// Default insert animation: spring with damping 0.6 and velocity 0.4.
    #[must_use]
    pub fn default_insert() -> Self {
        Self {
            duration: DEFAULT_INSERT_DURATION_SECS,
            curve: Curve::Spring {
                damping: DEFAULT_SPRING_DAMPING,
                velocity: DEFAULT_SPRING_VELOCITY,
            },
        }
    }

    /// Default rearrange animation: ease in, ease out.
    #[must_use]
    pub fn default_rearrange() -> Self {
        Self {
            duration: DEFAULT_REARRANGE_DURATION_SECS,
            curve: Curve::EaseInOut,
        }
    }

    /// Default remove animation: ease out.
    #[must_use]
    pub fn default_remove() -> Self {
        Self {
            duration: DEFAULT_REMOVE_DURATION_SECS,
            curve: Curve::EaseOut,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        if self.duration.is_finite() && self.duration > 0.0 {
            Duration::try_from_secs_f64(self.duration).unwrap_or(Duration::ZERO)
        } else {
            Duration::ZERO
        }
    }
}

/// A scalar moving from `from` to `to`, started at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    curve: Curve,
}

impl Transition {
    #[must_use]
    pub fn new(from: f32, to: f32, spec: AnimationSpec, now: Instant) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration: spec.duration(),
            curve: spec.curve,
        }
    }

    /// Linear time progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.curve.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// When the transition reaches its target, or `None` when that lies
    /// beyond what an [`Instant`] can represent.
    #[must_use]
    pub fn ends_at(&self) -> Option<Instant> {
        self.started_at.checked_add(self.duration)
    }
}

/// An animatable scalar: either at rest or in a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Resting(f32),
    Moving(Transition),
}

impl Motion {
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        match self {
            Motion::Resting(value) => *value,
            Motion::Moving(transition) => transition.value_at(now),
        }
    }

    /// Value the motion is heading to (or resting at).
    #[must_use]
    pub fn target(&self) -> f32 {
        match self {
            Motion::Resting(value) => *value,
            Motion::Moving(transition) => transition.target(),
        }
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        match self {
            Motion::Resting(_) => true,
            Motion::Moving(transition) => transition.is_finished(now),
        }
    }

    /// Starts moving from the currently displayed value towards `to`.
    pub fn animate_to(&mut self, to: f32, spec: AnimationSpec, now: Instant) {
        let from = self.value_at(now);
        *self = Motion::Moving(Transition::new(from, to, spec, now));
    }

    /// Jumps to `value` without animating.
    pub fn snap_to(&mut self, value: f32) {
        *self = Motion::Resting(value);
    }

    /// Collapses a finished transition into its resting value.
    pub fn settle(&mut self, now: Instant) {
        if let Motion::Moving(transition) = self {
            if transition.is_finished(now) {
                *self = Motion::Resting(transition.target());
            }
        }
    }
}
