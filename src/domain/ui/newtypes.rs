// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use crate::config::{DEFAULT_DISPLAY_DURATION_SECS, MAX_DISPLAY_DURATION_SECS};
use std::time::Duration;

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a presented indicator stays visible before auto-hiding.
///
/// Negative and non-finite inputs collapse to zero (hide as soon as the
/// present animation settles) and values above the maximum are capped.
///
/// # Example
///
/// ```
/// use iced_indicator::domain::ui::DisplayDuration;
///
/// let duration = DisplayDuration::new(2.0);
/// assert_eq!(duration.secs(), 2.0);
///
/// assert_eq!(DisplayDuration::new(-1.0).secs(), 0.0);
/// assert_eq!(DisplayDuration::new(f32::NAN).secs(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDuration(f32);

impl DisplayDuration {
    /// Creates a new display duration, clamping the value to the valid range.
    #[must_use]
    pub fn new(secs: f32) -> Self {
        if secs.is_finite() {
            Self(secs.clamp(0.0, MAX_DISPLAY_DURATION_SECS))
        } else {
            Self(0.0)
        }
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub fn secs(self) -> f32 {
        self.0
    }

    /// Returns the value as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f32(self.0)
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(DEFAULT_DISPLAY_DURATION_SECS)
    }
}

impl From<Duration> for DisplayDuration {
    fn from(duration: Duration) -> Self {
        Self::new(duration.as_secs_f32())
    }
}
