// SPDX-License-Identifier: MPL-2.0
//! Time-based animation of the indicator between positions.
//!
//! A [`Motion`] always starts from the translation the indicator had when it
//! began, and resolves its target position against live geometry every time
//! it is sampled, so a change of safe area mid-flight is picked up.

use super::position::PresentPosition;
use std::time::{Duration, Instant};

/// Stiffness of the critically damped spring, in units of 1 / duration.
const SPRING_OMEGA: f32 = 10.0;

/// Easing applied to time before the spring response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    EaseIn,
    EaseOut,
}

impl Curve {
    fn ease(self, t: f32) -> f32 {
        match self {
            Curve::EaseIn => t * t,
            Curve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }

    /// Progress (0.0 to 1.0) at normalized time `t`.
    ///
    /// Critically damped spring with no initial velocity, normalized to land
    /// exactly on 1.0 at `t = 1`.
    #[must_use]
    pub fn progress(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let spring = |x: f32| 1.0 - (1.0 + SPRING_OMEGA * x) * (-SPRING_OMEGA * x).exp();
        spring(self.ease(t)) / spring(1.0)
    }
}

/// Why a motion was started; decides what happens when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPurpose {
    /// Slide in; completing makes the indicator visible and arms auto-hide.
    Present,
    /// Slide out; completing removes the indicator.
    Dismiss,
    /// Snap back to the visible position after a drag.
    Settle,
}

/// An in-flight animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub purpose: MotionPurpose,
    pub from_y: f32,
    pub target: PresentPosition,
    pub started_at: Instant,
    pub duration: Duration,
    pub curve: Curve,
}

impl Motion {
    #[must_use]
    pub fn ends_at(&self) -> Instant {
        self.started_at + self.duration
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.ends_at()
    }

    /// Translation at `now`, with the target resolved against `top_inset`.
    #[must_use]
    pub fn sample(&self, now: Instant, top_inset: f32) -> f32 {
        let target_y = self.target.translation_y(top_inset);
        let total = self.duration.as_secs_f32();
        if total <= 0.0 {
            return target_y;
        }
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        let progress = self.curve.progress(elapsed / total);
        self.from_y + (target_y - self.from_y) * progress
    }
}
