// SPDX-License-Identifier: MPL-2.0
//! Maps a dismiss drag onto the indicator's position.
//!
//! Upward drags move the indicator freely; downward drags are damped with a
//! square root and capped so the pill resists being pulled down.

use crate::config::{HIDE_DRAG_THRESHOLD, MAX_DOWNWARD_DRAG_OFFSET};
use crate::ui::state::DragRelease;
use iced::Vector;

/// Phase of a pointer drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A drag sample with the cumulative translation since the drag started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub phase: DragPhase,
    pub translation: Vector,
}

impl DragEvent {
    #[must_use]
    pub fn new(phase: DragPhase, translation: Vector) -> Self {
        Self { phase, translation }
    }
}

/// Offset from the visible position for a raw vertical drag.
#[must_use]
pub fn drag_offset(raw_y: f32) -> f32 {
    if raw_y <= 0.0 {
        raw_y
    } else {
        raw_y.sqrt().min(MAX_DOWNWARD_DRAG_OFFSET)
    }
}

/// Where the indicator goes when a drag is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseDecision {
    Dismiss,
    SnapBack,
}

/// Decides what a finished drag does.
///
/// A hide deferred during the drag always wins. Otherwise an ended drag
/// dismisses once it went far enough up; a cancelled drag snaps back.
#[must_use]
pub fn decide_release(release: DragRelease, phase: DragPhase) -> ReleaseDecision {
    if release.hide_requested {
        return ReleaseDecision::Dismiss;
    }
    match phase {
        DragPhase::Ended if release.translation.y < HIDE_DRAG_THRESHOLD => {
            ReleaseDecision::Dismiss
        }
        _ => ReleaseDecision::SnapBack,
    }
}
